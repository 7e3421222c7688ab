use std::ops::RangeInclusive;

use spdlog::debug;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_MAX_PAGE_BUTTONS: u32 = 10;

/// A navigation request coming from one of the pagination controls
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Navigation {
    First,
    Previous,
    Next,
    Last,
    Page(u32),
}

/// Windowed view over a list that is fully loaded in memory.
///
/// `cur_page` is 1-based and is the only state that changes after construction.
/// An empty list has a page count of 0 and keeps `cur_page` at 1.
pub struct Paginator<'a, T> {
    item_list: &'a [T],
    page_size: u32,
    max_page_buttons: u32,
    page_count: u32,
    cur_page: u32,
}

/// Range of page numbers shown as buttons for `cur_page`.
///
/// Near the start the window is flush with page 1, near the end it is flush with
/// `page_count`, otherwise `cur_page` sits in the middle. Empty when there are no pages.
pub fn button_window(cur_page: u32, page_count: u32, max_page_buttons: u32) -> RangeInclusive<u32> {
    let half = max_page_buttons / 2;

    if cur_page <= half {
        1..=page_count.min(max_page_buttons)
    } else if cur_page > page_count.saturating_sub(half) {
        let start = (page_count + 1).saturating_sub(max_page_buttons).max(1);
        start..=page_count
    } else {
        (cur_page - half + 1)..=(cur_page + half)
    }
}

impl<'a, T> Paginator<'a, T> {
    pub fn from(item_list: &'a [T], page_size: u32) -> Self {
        let page_size = page_size.max(1);
        if item_list.is_empty() {
            return Paginator {
                item_list,
                page_size,
                max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
                page_count: 0,
                cur_page: 1,
            };
        }
        let item_count = item_list.len() as u32;
        let upper_bound = item_count - 1;
        let page_count = (upper_bound / page_size) + 1;

        Paginator {
            item_list,
            page_size,
            max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
            page_count,
            cur_page: 1,
        }
    }

    /// Fewer than 2 buttons cannot keep the current page inside the window
    pub fn with_max_page_buttons(mut self, max_page_buttons: u32) -> Self {
        self.max_page_buttons = max_page_buttons.max(2);
        self
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn current_page(&self) -> u32 {
        self.cur_page
    }

    pub fn get_page(&self, page: u32) -> Result<&'a [T], String> {
        match page {
            0 => return Err("Page has to be greater than 0".to_string()),
            x if x > self.page_count => return Err(format!("Page has to be less than page_count ({})", self.page_count)),
            _ => {}
        };

        let index = ((page - 1) * self.page_size) as usize;
        let mut end = (self.page_size as usize) + index;
        if end > self.item_list.len() {
            end = self.item_list.len();
        }
        Ok(&self.item_list[index..end])
    }

    pub fn current_page_items(&self) -> &'a [T] {
        // Only an empty list has no valid page
        self.get_page(self.cur_page).unwrap_or(&[])
    }

    pub fn page_button_window(&self) -> RangeInclusive<u32> {
        button_window(self.cur_page, self.page_count, self.max_page_buttons)
    }

    /// Page that `nav` would lead to, without moving there
    pub fn target_of(&self, nav: Navigation) -> u32 {
        let last = self.page_count.max(1);
        match nav {
            Navigation::First => 1,
            Navigation::Previous => self.cur_page.saturating_sub(1).max(1),
            Navigation::Next => (self.cur_page + 1).min(last),
            Navigation::Last => last,
            Navigation::Page(page) => page.clamp(1, last),
        }
    }

    pub fn navigate(&mut self, nav: Navigation) -> u32 {
        let target = self.target_of(nav);
        debug!("Navigation {:?}: page {} -> {} of {}", nav, self.cur_page, target, self.page_count);
        self.cur_page = target;
        target
    }

    pub fn go_to_first(&mut self) -> u32 {
        self.navigate(Navigation::First)
    }

    pub fn go_to_previous(&mut self) -> u32 {
        self.navigate(Navigation::Previous)
    }

    pub fn go_to_next(&mut self) -> u32 {
        self.navigate(Navigation::Next)
    }

    pub fn go_to_last(&mut self) -> u32 {
        self.navigate(Navigation::Last)
    }

    pub fn go_to_page(&mut self, page: u32) -> u32 {
        self.navigate(Navigation::Page(page))
    }
}
