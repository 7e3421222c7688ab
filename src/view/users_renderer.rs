use std::borrow::Cow;
use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::paginator::{Navigation, Paginator};
use crate::text_utils::format_timestamp;
use crate::user::User;

pub const DEFAULT_USERS_TEMPLATE: &str = include_str!("../../res/template/users.tpl");

#[derive(ramhorns::Content)]
struct UsersPage {
    error: bool,
    status_code: u16,
    user_list: Vec<UserItem>,
    page_list: Vec<ViewPagination>,
    first_link: String,
    prev_link: String,
    next_link: String,
    last_link: String,
}

#[derive(ramhorns::Content)]
struct UserItem {
    id: u64,
    firstname: String,
    lastname: String,
    phone: String,
    email: String,
    updated_at: String,
}

#[derive(ramhorns::Content)]
struct ViewPagination {
    current: bool,
    number: u32,
    link: String,
}

fn page_link(page: u32) -> String {
    format!("?page={}", page)
}

pub struct UsersRenderer<'a> {
    pub template: Template<'a>,
}

impl<'a> UsersRenderer<'a> {
    /// An owned `String` source yields a `UsersRenderer<'static>`
    pub fn new<S: Into<Cow<'a, str>>>(users_tpl_src: S) -> io::Result<UsersRenderer<'a>> {
        let parsed = match users_tpl_src.into() {
            Cow::Borrowed(src) => Template::new(src),
            Cow::Owned(src) => Template::new(src),
        };
        let template = match parsed {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing users template: {}", e)));
            }
        };

        Ok(UsersRenderer {
            template,
        })
    }

    /// Table of the current page plus the First/Prev/window/Next/Last controls
    pub fn render(&self, paginator: &Paginator<'_, User>) -> String {
        let user_list = paginator.current_page_items().iter()
            .map(|user| UserItem {
                id: user.id,
                firstname: user.firstname.clone(),
                lastname: user.lastname.clone(),
                phone: user.phone.clone(),
                email: user.email.clone(),
                updated_at: format_timestamp(&user.updated_at),
            })
            .collect();

        let cur_page = paginator.current_page();
        let page_list = paginator.page_button_window()
            .map(|number| ViewPagination {
                current: number == cur_page,
                number,
                link: page_link(number),
            })
            .collect();

        self.template.render(&UsersPage {
            error: false,
            status_code: 200,
            user_list,
            page_list,
            first_link: page_link(paginator.target_of(Navigation::First)),
            prev_link: page_link(paginator.target_of(Navigation::Previous)),
            next_link: page_link(paginator.target_of(Navigation::Next)),
            last_link: page_link(paginator.target_of(Navigation::Last)),
        })
    }

    pub fn render_error(&self, status_code: u16) -> String {
        self.template.render(&UsersPage {
            error: true,
            status_code,
            user_list: vec![],
            page_list: vec![],
            first_link: String::new(),
            prev_link: String::new(),
            next_link: String::new(),
            last_link: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "{{#error}}ERROR={{status_code}}{{/error}}{{^error}}USERS=[{{#user_list}}({{id}}|{{firstname}}|{{updated_at}}){{/user_list}}] \
PAGES=[{{#page_list}}{{#current}}*{{/current}}{{number}}>{{link}} {{/page_list}}] \
NAV=[{{first_link}} {{prev_link}} {{next_link}} {{last_link}}]{{/error}}";

    fn users(count: u64) -> Vec<User> {
        (1..=count).map(|id| User {
            id,
            firstname: format!("first{}", id),
            lastname: format!("last{}", id),
            email: format!("user{}@example.com", id),
            phone: "555-0100".to_string(),
            updated_at: "2023-11-02T10:15:07Z".to_string(),
        }).collect()
    }

    #[test]
    fn test_render_first_page() {
        let renderer = UsersRenderer::new(TEMPLATE).unwrap();
        let list = users(3);
        let paginator = Paginator::from(&list, 2);
        let res = renderer.render(&paginator);
        assert_eq!(res, "USERS=[(1|first1|2023-11-02 10:15:07)(2|first2|2023-11-02 10:15:07)] \
PAGES=[*1>?page=1 2>?page=2 ] \
NAV=[?page=1 ?page=1 ?page=2 ?page=2]");
    }

    #[test]
    fn test_render_sliding_window() {
        let renderer = UsersRenderer::new(TEMPLATE).unwrap();
        let list = users(500);
        let mut paginator = Paginator::from(&list, 20);
        paginator.go_to_page(13);
        let res = renderer.render(&paginator);
        assert!(res.contains("(241|first241|"));
        assert!(res.contains("(260|first260|"));
        assert!(!res.contains("(261|"));
        assert!(res.contains("PAGES=[9>?page=9 "));
        assert!(res.contains("*13>?page=13 "));
        assert!(res.contains(" 18>?page=18 ]"));
        assert!(res.contains("NAV=[?page=1 ?page=12 ?page=14 ?page=25]"));
    }

    #[test]
    fn test_render_empty_list() {
        let renderer = UsersRenderer::new(TEMPLATE).unwrap();
        let list: Vec<User> = vec![];
        let paginator = Paginator::from(&list, 20);
        let res = renderer.render(&paginator);
        assert!(res.starts_with("USERS=[] PAGES=[] "));
    }

    #[test]
    fn test_render_error() {
        let renderer = UsersRenderer::new(TEMPLATE).unwrap();
        assert_eq!(renderer.render_error(404), "ERROR=404");
    }

    #[test]
    fn test_escaping() {
        let renderer = UsersRenderer::new(TEMPLATE).unwrap();
        let mut list = users(1);
        list[0].firstname = "<script>".to_string();
        let paginator = Paginator::from(&list, 20);
        assert!(renderer.render(&paginator).contains("(1|&lt;script&gt;|"));
    }

    #[test]
    fn test_owned_template() {
        let renderer: UsersRenderer<'static> = UsersRenderer::new(TEMPLATE.to_string()).unwrap();
        assert_eq!(renderer.render_error(502), "ERROR=502");
    }

    #[test]
    fn test_invalid_template() {
        let res = UsersRenderer::new("{{#user_list}}");
        assert_eq!(res.err().map(|e| e.kind()), Some(ErrorKind::InvalidInput));
    }

    #[test]
    fn test_default_template() {
        let renderer = UsersRenderer::new(DEFAULT_USERS_TEMPLATE).unwrap();
        let list = users(45);
        let mut paginator = Paginator::from(&list, 20);
        paginator.go_to_last();
        let res = renderer.render(&paginator);
        assert!(res.contains("<td>user45@example.com</td>"));
        assert!(!res.contains("<td>user40@example.com</td>"));
        assert!(res.contains(r#"<li class="page-item active"><a class="page-link" href="?page=3">3</a></li>"#));
        assert!(!res.contains("alert-danger"));

        let res = renderer.render_error(500);
        assert!(res.contains("Error 500 while loading data"));
        assert!(!res.contains("<table"));
    }
}
