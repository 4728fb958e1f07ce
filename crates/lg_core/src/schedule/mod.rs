//! Tournament schedule date parsing.
//!
//! Listing pages describe a tournament's span in prose, in one of a few
//! shapes:
//!
//! - `"15 January, 2025 - 28 January, 2025"` (full on both sides, also used
//!   for year-crossing spans like `"27 December, 2024 - 5 January, 2025"`)
//! - `"1-7 January, 2025"` / `"6 - 11 January, 2025"` (day range sharing
//!   one month and year)
//! - `"31 March - 6 April, 2025"` (two months sharing one year)
//!
//! [`parse_date_range`] reduces any of them to an inclusive
//! [`NaiveDate`] pair. Month names are accepted in full or three-letter
//! form, case-insensitive.

use std::collections::HashMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("unsupported date format: {0:?}")]
    UnsupportedFormat(String),

    #[error("unknown month name: {0:?}")]
    UnknownMonth(String),

    #[error("impossible calendar date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Inclusive start/end dates of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// ISO `YYYY-MM-DD` rendering of both endpoints.
    pub fn to_iso_strings(&self) -> (String, String) {
        (
            self.start.format("%Y-%m-%d").to_string(),
            self.end.format("%Y-%m-%d").to_string(),
        )
    }
}

// "15 January, 2025 - 28 January, 2025"
static FULL_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s+([A-Za-z]+),\s*(\d{4})\s*-\s*(\d+)\s+([A-Za-z]+),\s*(\d{4})").unwrap()
});

// "1-7 January, 2025" / "6 - 11 January, 2025"
static SAME_MONTH_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)\s+([A-Za-z]+),\s*(\d{4})").unwrap());

// "31 March - 6 April, 2025"
static CROSS_MONTH_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+([A-Za-z]+)\s*-\s*(\d+)\s+([A-Za-z]+),\s*(\d{4})").unwrap());

static MONTHS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    let names: [&'static str; 12] = [
        "january", "february", "march", "april", "may", "june", "july", "august", "september",
        "october", "november", "december",
    ];
    let mut table = HashMap::new();
    for (index, name) in names.into_iter().enumerate() {
        let number = index as u32 + 1;
        table.insert(name, number);
        table.insert(&name[..3], number);
    }
    table
});

fn month_number(name: &str) -> Result<u32, DateParseError> {
    MONTHS
        .get(name.to_lowercase().as_str())
        .copied()
        .ok_or_else(|| DateParseError::UnknownMonth(name.to_string()))
}

fn make_date(year: i32, month_name: &str, day: u32) -> Result<NaiveDate, DateParseError> {
    let month = month_number(month_name)?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateParseError::InvalidDate { year, month, day })
}

fn group_u32(captures: &Captures<'_>, index: usize) -> u32 {
    captures[index].parse().unwrap_or(u32::MAX)
}

fn group_year(captures: &Captures<'_>, index: usize) -> i32 {
    captures[index].parse().unwrap_or(0)
}

/// Reduce a listing date string to its start/end dates.
///
/// The full two-sided form is tried first: its left half also satisfies the
/// shorter patterns, so trying those first would misread it.
pub fn parse_date_range(text: &str) -> Result<DateRange, DateParseError> {
    if let Some(c) = FULL_RANGE.captures(text) {
        let start = make_date(group_year(&c, 3), &c[2], group_u32(&c, 1))?;
        let end = make_date(group_year(&c, 6), &c[5], group_u32(&c, 4))?;
        return Ok(DateRange { start, end });
    }

    if let Some(c) = SAME_MONTH_RANGE.captures(text) {
        let year = group_year(&c, 4);
        let month = &c[3];
        let start = make_date(year, month, group_u32(&c, 1))?;
        let end = make_date(year, month, group_u32(&c, 2))?;
        return Ok(DateRange { start, end });
    }

    if let Some(c) = CROSS_MONTH_RANGE.captures(text) {
        let year = group_year(&c, 5);
        let start = make_date(year, &c[2], group_u32(&c, 1))?;
        let end = make_date(year, &c[4], group_u32(&c, 3))?;
        return Ok(DateRange { start, end });
    }

    tracing::warn!(input = text, "unrecognized tournament date format");
    Err(DateParseError::UnsupportedFormat(text.to_string()))
}
