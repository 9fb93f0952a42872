//! Date parsing and display helpers shared by every page.

use chrono::{Datelike, NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateError {
    #[error("date is required")]
    Missing,
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    Invalid(String),
}

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Parse a `YYYY-MM-DD` value as produced by `<input type="date">`
pub fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DateError::Missing);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| DateError::Invalid(trimmed.to_string()))
}

/// Parse an optional form value; blank input is `Ok(None)`
pub fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, DateError> {
    match parse_date(value) {
        Ok(date) => Ok(Some(date)),
        Err(DateError::Missing) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Value for an `<input type="date">`
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Number of calendar days covered by an inclusive range, 0 when reversed
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    let days = (end - start).num_days() + 1;
    days.max(0)
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("January")
}

/// "Dec 28, 2025"
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Sunday, December 28, 2025"
pub fn format_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "Dec 28 - Jan 2, 2026"
pub fn format_range(start: NaiveDate, end: NaiveDate) -> String {
    if start.year() == end.year() {
        format!("{} - {}", start.format("%b %-d"), format_short(end))
    } else {
        format!("{} - {}", format_short(start), format_short(end))
    }
}

/// "Dec 2025", used to bucket trips by month
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Render an `HH:MM` value as "2:30 PM"; unparseable input is returned as-is
pub fn format_time(time: &str) -> String {
    match NaiveTime::parse_from_str(time.trim(), "%H:%M") {
        Ok(t) => t.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}

/// "5 days", "1 day", or empty for a reversed range
pub fn duration_label(start: NaiveDate, end: NaiveDate) -> String {
    match days_inclusive(start, end) {
        0 => String::new(),
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    }
}

/// Add whole months, clamping to the 1st of the resulting month
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-01-15"), Ok(d(2026, 1, 15)));
        assert_eq!(parse_date("  "), Err(DateError::Missing));
        assert_eq!(parse_date("15/01/2026"), Err(DateError::Invalid("15/01/2026".to_string())));
        assert_eq!(parse_optional_date(""), Ok(None));
        assert!(parse_optional_date("2026-13-01").is_err());
    }

    #[test]
    fn test_days_inclusive() {
        assert_eq!(days_inclusive(d(2026, 1, 1), d(2026, 1, 1)), 1);
        assert_eq!(days_inclusive(d(2025, 12, 28), d(2026, 1, 2)), 6);
        assert_eq!(days_inclusive(d(2026, 1, 5), d(2026, 1, 1)), 0);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_short(d(2025, 12, 8)), "Dec 8, 2025");
        assert_eq!(format_long(d(2025, 12, 28)), "Sunday, December 28, 2025");
        assert_eq!(format_range(d(2026, 3, 20), d(2026, 4, 5)), "Mar 20 - Apr 5, 2026");
        assert_eq!(format_range(d(2025, 12, 28), d(2026, 1, 2)), "Dec 28, 2025 - Jan 2, 2026");
        assert_eq!(month_label(d(2026, 2, 14)), "Feb 2026");
        assert_eq!(format_time("14:30"), "2:30 PM");
        assert_eq!(format_time("09:05"), "9:05 AM");
        assert_eq!(format_time("soon"), "soon");
        assert_eq!(month_name(12), "December");
    }

    #[test]
    fn test_duration_label() {
        assert_eq!(duration_label(d(2026, 1, 1), d(2026, 1, 1)), "1 day");
        assert_eq!(duration_label(d(2026, 1, 1), d(2026, 1, 5)), "5 days");
        assert_eq!(duration_label(d(2026, 1, 5), d(2026, 1, 1)), "");
    }

    #[test]
    fn test_shift_month_wraps_years() {
        assert_eq!(shift_month(d(2026, 1, 20), -1), d(2025, 12, 1));
        assert_eq!(shift_month(d(2025, 12, 3), 1), d(2026, 1, 1));
        assert_eq!(shift_month(d(2026, 5, 31), 0), d(2026, 5, 1));
    }
}
