//! Calendar dates and day arithmetic for zigzag tablets.
//!
//! This crate provides:
//! - Julian Date <-> proleptic Gregorian calendar conversions
//! - `CivilDate`, a validated `YYYY-MM-DD` day
//! - `Timestamp`, a microsecond-exact instant that accumulates fractional
//!   day steps without truncation

pub mod civil;
pub mod error;
pub mod julian;
pub mod timestamp;

pub use civil::{CivilDate, MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year};
pub use error::TimeError;
pub use julian::{J2000_JD, MICROS_PER_DAY, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
pub use timestamp::{Timestamp, days_to_micros};
