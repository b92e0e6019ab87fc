//! Julian Date <-> proleptic Gregorian calendar conversions.
//!
//! Algorithms from Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7,
//! with the Gregorian correction applied to every date so the calendar is
//! proleptic rather than switching to Julian before 1582.

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Microseconds in one day.
pub const MICROS_PER_DAY: i64 = 86_400_000_000;

/// Convert a calendar date to a Julian Date.
///
/// `day` may carry a fractional part (0.5 = noon).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Date to `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 October 4.81 (Sputnik 1)
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-9);
    }

    #[test]
    fn reference_new_moon_midnight() {
        assert_eq!(calendar_to_jd(2024, 1, 11.0), 2_460_320.5);
    }

    #[test]
    fn inverse_of_calendar_to_jd() {
        let (y, m, d) = jd_to_calendar(2_460_320.5);
        assert_eq!((y, m), (2024, 1));
        assert!((d - 11.0).abs() < 1e-9);
    }

    #[test]
    fn leap_day_round_trip() {
        let jd = calendar_to_jd(2024, 2, 29.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m, d.floor() as u32), (2024, 2, 29));
    }

    #[test]
    fn century_non_leap_year() {
        // 1900-02-28 is followed directly by 1900-03-01.
        let feb28 = calendar_to_jd(1900, 2, 28.0);
        let mar1 = calendar_to_jd(1900, 3, 1.0);
        assert_eq!(mar1 - feb28, 1.0);
    }

    #[test]
    fn proleptic_before_reform() {
        // No ten-day gap: 1582-10-15 follows 1582-10-14 in the proleptic calendar.
        let a = calendar_to_jd(1582, 10, 14.0);
        let b = calendar_to_jd(1582, 10, 15.0);
        assert_eq!(b - a, 1.0);
    }
}
