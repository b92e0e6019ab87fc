//! Microsecond-resolution instants for stepping by fractional days.
//!
//! A `Timestamp` counts whole microseconds from the midnight that opens
//! Julian Day Number 0. Day spans are rounded to the nearest microsecond
//! once and then added as integers, so repeated steps never drift.

use std::fmt::{Display, Formatter};

use crate::civil::CivilDate;
use crate::error::TimeError;
use crate::julian::MICROS_PER_DAY;

/// An instant on the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    micros: i64,
}

/// Round a span of days to whole microseconds (ties to even).
pub fn days_to_micros(days: f64) -> Result<i64, TimeError> {
    let us = (days * MICROS_PER_DAY as f64).round_ties_even();
    if !us.is_finite() || us.abs() >= i64::MAX as f64 {
        return Err(TimeError::OutOfRange);
    }
    Ok(us as i64)
}

impl Timestamp {
    /// Midnight at the start of `date`.
    pub fn from_date(date: CivilDate) -> Self {
        Self {
            micros: date.day_number() * MICROS_PER_DAY,
        }
    }

    pub fn from_micros(micros: i64) -> Self {
        Self { micros }
    }

    pub fn as_micros(self) -> i64 {
        self.micros
    }

    /// Calendar day containing this instant.
    pub fn date(self) -> Result<CivilDate, TimeError> {
        CivilDate::from_day_number(self.micros.div_euclid(MICROS_PER_DAY))
    }

    /// Microseconds elapsed since the containing midnight.
    pub fn micros_of_day(self) -> i64 {
        self.micros.rem_euclid(MICROS_PER_DAY)
    }

    /// Julian Date of this instant.
    pub fn as_jd(self) -> f64 {
        let jdn = self.micros.div_euclid(MICROS_PER_DAY);
        jdn as f64 - 0.5 + self.micros_of_day() as f64 / MICROS_PER_DAY as f64
    }

    /// Advance by a (possibly fractional) number of days.
    ///
    /// Fails if the result leaves years 1..=9999.
    pub fn add_days(self, days: f64) -> Result<Self, TimeError> {
        let delta = days_to_micros(days)?;
        let micros = self.micros.checked_add(delta).ok_or(TimeError::OutOfRange)?;
        let next = Self { micros };
        next.date()?;
        Ok(next)
    }

    /// Signed distance from `earlier` to `self` in days.
    pub fn days_since(self, earlier: Timestamp) -> f64 {
        (self.micros - earlier.micros) as f64 / MICROS_PER_DAY as f64
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let us = self.micros_of_day();
        let hour = us / 3_600_000_000;
        let minute = (us / 60_000_000) % 60;
        let second = (us / 1_000_000) % 60;
        let frac = us % 1_000_000;
        match self.date() {
            Ok(date) => write!(f, "{date}T{hour:02}:{minute:02}:{second:02}.{frac:06}"),
            Err(_) => write!(f, "JD {:.6}", self.as_jd()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Timestamp {
        Timestamp::from_date(CivilDate::new(2024, 1, 11).unwrap())
    }

    #[test]
    fn midnight_jd() {
        assert_eq!(start().as_jd(), 2_460_320.5);
        assert_eq!(start().micros_of_day(), 0);
    }

    #[test]
    fn synodic_month_in_micros() {
        assert_eq!(days_to_micros(29.530594).unwrap(), 2_551_443_321_600);
    }

    #[test]
    fn one_step_lands_on_feb_9() {
        let t = start().add_days(29.530594).unwrap();
        assert_eq!(t.date().unwrap().to_string(), "2024-02-09");
        assert_eq!(t.to_string(), "2024-02-09T12:44:03.321600");
    }

    #[test]
    fn fraction_accumulates_across_steps() {
        let mut t = start();
        for _ in 0..2 {
            t = t.add_days(29.530594).unwrap();
        }
        // 59.061188 days: the two half-day remainders carry into a whole day.
        assert_eq!(t.date().unwrap().to_string(), "2024-03-10");
        assert!((t.days_since(start()) - 59.061188).abs() < 1e-9);
    }

    #[test]
    fn negative_step() {
        let t = start().add_days(-0.25).unwrap();
        assert_eq!(t.date().unwrap().to_string(), "2024-01-10");
        assert_eq!(t.micros_of_day(), 18 * 3_600_000_000);
    }

    #[test]
    fn overflow_past_year_9999() {
        let t = Timestamp::from_date(CivilDate::new(9999, 12, 31).unwrap());
        assert_eq!(t.add_days(1.0), Err(TimeError::OutOfRange));
        assert_eq!(t.add_days(f64::NAN), Err(TimeError::OutOfRange));
    }
}
