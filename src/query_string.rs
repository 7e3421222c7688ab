use std::collections::HashMap;

#[derive(PartialEq, Debug)]
pub struct QueryString {
    items: HashMap<String, String>,
}

impl QueryString {
    pub fn from(buf: &str) -> Self {
        let vs: Vec<(String, String)> = serde_urlencoded::from_str(buf).unwrap_or_else(|_| vec![]);
        let items: HashMap<String, String> = vs.into_iter().collect();

        QueryString {
            items,
        }
    }

    /// Requested page, if present and a positive number
    pub fn get_page(&self) -> Option<u32> {
        let val: u32 = self.items.get("page")?.trim().parse().ok()?;
        if val == 0 { return None; }
        Some(val)
    }
}
