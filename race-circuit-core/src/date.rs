//! Short display labels for race dates.
//!
//! Race dates are written as a single day (`2025-03-15`) or a range whose
//! end is abbreviated by replacing the tail of the start date
//! (`2025-03-15/16`, `2025-03-29/04-05`). A `*` marks a date that has not
//! been confirmed yet.

use chrono::{Datelike, NaiveDate};

use crate::error::DateError;

/// Marker for an estimated ("likely") date.
pub const LIKELY_MARKER: char = '*';

/// A rendered race date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDate {
    pub display: String,
    pub is_likely: bool,
}

/// Render a race date string as a short label.
///
/// # Examples
///
/// ```
/// use race_circuit_core::format_race_date;
///
/// assert_eq!(format_race_date("2025-03-15").unwrap().display, "Mar 15");
/// assert_eq!(format_race_date("2025-03-15/16").unwrap().display, "Mar 15—16");
/// assert_eq!(
///     format_race_date("2025-03-29/04-05").unwrap().display,
///     "Mar 29 - Apr 5"
/// );
/// assert!(format_race_date("2025-06-14*").unwrap().is_likely);
/// ```
pub fn format_race_date(date: &str) -> Result<FormattedDate, DateError> {
    let is_likely = date.contains(LIKELY_MARKER);
    let clean = date.replace(LIKELY_MARKER, "");

    let display = match clean.split_once('/') {
        Some((_, "")) => return Err(DateError::Malformed(date.to_string())),
        Some((start, end)) => {
            let end = splice_end_date(start, end);
            let start_date = parse_local_date(start, date)?;
            let end_date = parse_local_date(&end, date)?;

            // Month only; the year is not compared.
            if start_date.month() == end_date.month() {
                format!("{}\u{2014}{}", month_day(start_date), end_date.day())
            } else {
                format!("{} - {}", month_day(start_date), month_day(end_date))
            }
        }
        None => month_day(parse_local_date(&clean, date)?),
    };

    Ok(FormattedDate { display, is_likely })
}

/// Build the end date of a range: drop as many trailing characters from
/// `start` as `suffix` has, then append `suffix`. A suffix at least as long
/// as `start` replaces it entirely.
pub fn splice_end_date(start: &str, suffix: &str) -> String {
    let keep = start.len().saturating_sub(suffix.len());
    match start.get(..keep) {
        Some(head) => format!("{head}{suffix}"),
        None => suffix.to_string(),
    }
}

/// Parse `Y-M-D` as a calendar date with no timezone attached.
///
/// `original` is the caller's input, reported in errors.
fn parse_local_date(s: &str, original: &str) -> Result<NaiveDate, DateError> {
    let mut parts = s.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(DateError::Malformed(original.to_string()));
    };

    let year: i32 = parse_component(year, original)?;
    let month: u32 = parse_component(month, original)?;
    let day: u32 = parse_component(day, original)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateError::InvalidDate(original.to_string()))
}

/// A date component: one or more ASCII digits, nothing else.
fn parse_component<T: std::str::FromStr>(part: &str, original: &str) -> Result<T, DateError> {
    let malformed = || DateError::Malformed(original.to_string());
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    part.parse().map_err(|_| malformed())
}

/// "Mar 5"
fn month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
#[path = "tests/date_tests.rs"]
mod tests;
