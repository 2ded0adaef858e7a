//! Localized date parsing for exam tokens.
//!
//! Exam dates are rendered as compact tokens such as `12GEN2024` (Italian) or
//! `12JAN2024` (English). Rejection deadlines append a time: `20GEN2024 23:59`.
//! Parsing never fails loudly; anything unrecognised yields `None`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

const DATE_PATTERN: &str = r"(\d{1,2})([A-Za-z]{3})(\d{4})";
const DEADLINE_PATTERN: &str = r"(\d{1,2})([A-Za-z]{3})(\d{4})\s+(\d{1,2})[:.](\d{2})";

/// Italian short month names, upper case, January first.
pub const ITALIAN_MONTHS: [&str; 12] = [
    "GEN", "FEB", "MAR", "APR", "MAG", "GIU", "LUG", "AGO", "SET", "OTT", "NOV", "DIC",
];

/// English short month names, upper case, January first.
pub const ENGLISH_MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DATE_PATTERN).unwrap_or_else(|e| {
        panic!("Failed to compile date pattern '{DATE_PATTERN}': {e}. This is a programming error.")
    })
});

static DEADLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEADLINE_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile deadline pattern '{DEADLINE_PATTERN}': {e}. This is a programming error."
        )
    })
});

/// Resolves a three-letter month abbreviation to its 1-based month number.
///
/// Italian names are tried before English ones; the first match wins.
pub fn month_number(abbrev: &str) -> Option<u32> {
    let upper = abbrev.to_ascii_uppercase();
    ITALIAN_MONTHS
        .iter()
        .position(|m| *m == upper)
        .or_else(|| ENGLISH_MONTHS.iter().position(|m| *m == upper))
        .map(|idx| idx as u32 + 1)
}

fn date_from_parts(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    let day: u32 = day.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    let month = month_number(month)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses an exam date token like `12GEN2024` or `1feb2023`.
///
/// The pattern is searched anywhere in the text, so surrounding labels are
/// tolerated. Returns `None` for empty input, a missing match, an unknown
/// month, or an impossible calendar date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use exam_calendar::date::parse_exam_date;
///
/// assert_eq!(parse_exam_date("12GEN2024"), NaiveDate::from_ymd_opt(2024, 1, 12));
/// assert_eq!(parse_exam_date("32GEN2024"), None);
/// ```
pub fn parse_exam_date(token: &str) -> Option<NaiveDate> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    let caps = DATE_RE.captures(token)?;
    date_from_parts(&caps[1], &caps[2], &caps[3])
}

/// Parses a rejection deadline like `20GEN2024 23:59` out of free text.
pub fn parse_deadline(text: &str) -> Option<NaiveDateTime> {
    let caps = DEADLINE_RE.captures(text)?;
    let date = date_from_parts(&caps[1], &caps[2], &caps[3])?;
    let hours: u32 = caps[4].parse().ok()?;
    let minutes: u32 = caps[5].parse().ok()?;
    let time = NaiveTime::from_hms_opt(hours, minutes, 0)?;
    Some(date.and_time(time))
}
