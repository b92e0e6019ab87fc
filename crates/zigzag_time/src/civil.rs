//! Proleptic Gregorian calendar dates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Earliest supported year.
pub const MIN_YEAR: i32 = 1;

/// Latest supported year.
pub const MAX_YEAR: i32 = 9999;

/// A calendar day with no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl CivilDate {
    /// Build a date, rejecting days that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimeError::OutOfRange);
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Julian Day Number: the integer JD at noon of this date.
    pub fn day_number(&self) -> i64 {
        (calendar_to_jd(self.year, self.month, self.day as f64) + 0.5).round() as i64
    }

    /// Inverse of [`CivilDate::day_number`].
    pub fn from_day_number(jdn: i64) -> Result<Self, TimeError> {
        let (year, month, day_frac) = jd_to_calendar(jdn as f64);
        Self::new(year, month, day_frac.floor() as u32)
    }
}

fn parse_digits(field: &str, width: usize) -> Option<u32> {
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse a strict ISO 8601 calendar date, `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TimeError::InvalidDateFormat(s.to_string());
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };
        let year = parse_digits(y, 4).ok_or_else(bad)?;
        let month = parse_digits(m, 2).ok_or_else(bad)?;
        let day = parse_digits(d, 2).ok_or_else(bad)?;
        Self::new(year as i32, month, day)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
