use chrono::{DateTime, NaiveDateTime};

pub fn format_date_time(date_time: &NaiveDateTime) -> (String, String) {
    let date = date_time.format("%Y-%m-%d").to_string();
    let time = date_time.format("%H:%M:%S").to_string();
    (date, time)
}

/// Shows an RFC 3339 timestamp as `YYYY-MM-DD HH:MM:SS`. Anything else is kept as is
pub fn format_timestamp(buf: &str) -> String {
    match DateTime::parse_from_rfc3339(buf.trim()) {
        Ok(date_time) => {
            let (date, time) = format_date_time(&date_time.naive_local());
            format!("{} {}", date, time)
        }
        Err(_) => buf.to_string(),
    }
}
