use chrono::{Local, NaiveDate, ParseError};

/// Calendar date format used for every persisted and displayed date (YYYY-MM-DD)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Get today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a YYYY-MM-DD string into a calendar date
pub fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

/// Format a calendar date as YYYY-MM-DD
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
