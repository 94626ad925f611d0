//! Shared utility functions for GWM crates.

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Canonical record date format: "YYYY-MM-DD"
    pub const ISO_FORMAT: &str = "%Y-%m-%d";

    /// Display format used in tables and exports: "05 Jan 2024"
    pub const DISPLAY_FORMAT: &str = "%d %b %Y";

    const DATE_FORMATS: [&str; 2] = [ISO_FORMAT, "%Y/%m/%d"];
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

    /// Parse an ISO-like record date.
    ///
    /// Accepts plain dates (`2024-01-05`, `2024/01/05`) and date-times
    /// (`2024-01-05T06:30:00`, `2024-01-05 06:30:00`), in which case the time
    /// part is dropped. Returns `None` for anything else.
    pub fn parse_record_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                    .map(|dt| dt.date())
            })
    }

    /// Format a record date for display, e.g. "2024-01-05" -> "05 Jan 2024".
    ///
    /// Strings that are not recognised as dates are returned unchanged.
    pub fn format_display_date(s: &str) -> String {
        match parse_record_date(s) {
            Some(date) => date.format(DISPLAY_FORMAT).to_string(),
            None => s.to_string(),
        }
    }

}
