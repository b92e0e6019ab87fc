//! Error types for calendar parsing and day arithmetic.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date parsing or timestamp arithmetic.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input text is not a `YYYY-MM-DD` date.
    InvalidDateFormat(String),
    /// Fields are well-formed but do not name a real calendar day.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Result falls outside years 1..=9999 or overflows the microsecond counter.
    OutOfRange,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat(input) => {
                write!(f, "invalid date format: {input:?} (expected YYYY-MM-DD)")
            }
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::OutOfRange => write!(f, "date outside supported range (years 1-9999)"),
        }
    }
}

impl Error for TimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_format_quotes_input() {
        let e = TimeError::InvalidDateFormat("2024/01/11".into());
        assert_eq!(
            e.to_string(),
            "invalid date format: \"2024/01/11\" (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn display_invalid_date_pads_fields() {
        let e = TimeError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(e.to_string(), "invalid calendar date: 2023-02-29");
    }
}
