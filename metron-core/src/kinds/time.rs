//! Time units.
//!
//! The standard unit for this kind is [`TimeUnit::Second`]
//! (`TimeUnit::Second.factor() == 1.0`). All other time unit factors are
//! expressed in *seconds*.
//!
//! ## Precision and conventions
//!
//! - The **SI second** is the standard unit.
//! - Civil units such as [`TimeUnit::Day`] use the conventional mapping
//!   `1 day = 86_400 s` (mean solar day; leap seconds ignored).
//! - [`TimeUnit::Year`] is the mean tropical year, `365.2425 d`.
//!
//! ```rust
//! use metron_core::kinds::time::{Time, TimeUnit};
//!
//! let half_hour = Time::new(0.5, TimeUnit::Hour);
//! assert!((half_hour.value_in(TimeUnit::Second) - 1800.0).abs() < 1e-12);
//! assert!((half_hour.value_in(TimeUnit::Minute) - 30.0).abs() < 1e-12);
//! ```

use crate::Quantity;
use metron_derive::Unit;

/// Conventional civil mapping used by this module: seconds per mean solar day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Units of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimensions = crate::Dimensions::TIME, standard = Second)]
pub enum TimeUnit {
    /// Nanoseconds (`1 ns = 10⁻⁹ s`).
    #[unit(abbr = "ns", factor = 1e-9, spellings("ns", "nanosecond", "nanoseconds"))]
    Nanosecond,
    /// Microseconds (`1 µs = 10⁻⁶ s`).
    #[unit(abbr = "µs", factor = 1e-6, spellings("µs", "us", "microsecond", "microseconds"))]
    Microsecond,
    /// Milliseconds (`1 ms = 10⁻³ s`).
    #[unit(abbr = "ms", factor = 1e-3, spellings("ms", "millisecond", "milliseconds"))]
    Millisecond,
    /// Seconds (SI base unit).
    #[unit(abbr = "s", factor = 1.0, spellings("s", "sec", "second", "seconds"))]
    Second,
    /// Minutes (`60 s`).
    #[unit(abbr = "min", factor = 60.0, spellings("min", "minute", "minutes"))]
    Minute,
    /// Hours (`3_600 s`).
    #[unit(abbr = "h", factor = 3_600.0, spellings("h", "hr", "hour", "hours"))]
    Hour,
    /// Mean solar day (`86_400 s` by convention; leap seconds ignored).
    #[unit(abbr = "d", factor = SECONDS_PER_DAY, spellings("d", "day", "days"))]
    Day,
    /// Week (`7 d = 604_800 s`).
    #[unit(abbr = "wk", factor = 7.0 * SECONDS_PER_DAY, spellings("wk", "week", "weeks"))]
    Week,
    /// Mean tropical year (`365.2425 d` by convention).
    #[unit(abbr = "yr", factor = 365.242_5 * SECONDS_PER_DAY, spellings("yr", "year", "years"))]
    Year,
}

/// A span of time, stored in seconds.
pub type Time = Quantity<TimeUnit>;

/// A constant representing one second.
pub const SEC: Time = Time::create(1.0, TimeUnit::Second);
/// A constant representing one minute.
pub const MIN: Time = Time::create(1.0, TimeUnit::Minute);
/// A constant representing one hour.
pub const HOUR: Time = Time::create(1.0, TimeUnit::Hour);
/// A constant representing one day.
pub const DAY: Time = Time::create(1.0, TimeUnit::Day);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn seconds_to_minutes() {
        let t = Time::new(60.0, TimeUnit::Second);
        assert_abs_diff_eq!(t.value_in(TimeUnit::Minute), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn minutes_to_hours() {
        let t = Time::new(60.0, TimeUnit::Minute);
        assert_abs_diff_eq!(t.value_in(TimeUnit::Hour), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn hours_to_days() {
        let t = Time::new(24.0, TimeUnit::Hour);
        assert_abs_diff_eq!(t.value_in(TimeUnit::Day), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn seconds_86400_equals_one_day() {
        let t = Time::new(86_400.0, TimeUnit::Second);
        assert_abs_diff_eq!(t.value_in(TimeUnit::Day), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn days_to_weeks() {
        let t = Time::new(7.0, TimeUnit::Day);
        assert_abs_diff_eq!(t.value_in(TimeUnit::Week), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn tropical_year_to_days() {
        let t = Time::new(1.0, TimeUnit::Year);
        assert_abs_diff_eq!(t.value_in(TimeUnit::Day), 365.2425, epsilon = 1e-9);
    }

    #[test]
    fn milliseconds_to_seconds() {
        let t = Time::new(1_000.0, TimeUnit::Millisecond);
        assert_abs_diff_eq!(t.value_in(TimeUnit::Second), 1.0, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Factor sanity checks
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn second_factor_sanity() {
        assert_abs_diff_eq!(TimeUnit::Second.factor(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn minute_factor_sanity() {
        assert_abs_diff_eq!(TimeUnit::Minute.factor(), 60.0, epsilon = 1e-15);
    }

    #[test]
    fn hour_factor_sanity() {
        assert_abs_diff_eq!(TimeUnit::Hour.factor(), 3_600.0, epsilon = 1e-15);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Spelling lookup
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn parse_abbreviations_and_names() {
        assert_eq!("s".parse::<TimeUnit>().unwrap(), TimeUnit::Second);
        assert_eq!("minutes".parse::<TimeUnit>().unwrap(), TimeUnit::Minute);
        assert_eq!("Hours".parse::<TimeUnit>().unwrap(), TimeUnit::Hour);
        assert_eq!("us".parse::<TimeUnit>().unwrap(), TimeUnit::Microsecond);
        assert!("fortnight".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn one_unit_constants() {
        assert_abs_diff_eq!(MIN.value(), 60.0, epsilon = 1e-15);
        assert_abs_diff_eq!(HOUR.value(), 3_600.0, epsilon = 1e-15);
        assert_abs_diff_eq!(DAY.value(), 86_400.0, epsilon = 1e-15);
        assert_abs_diff_eq!(SEC.value(), 1.0, epsilon = 1e-15);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_day_second(d in -1e6..1e6f64) {
            let original = Time::new(d, TimeUnit::Day);
            let back = Time::new(original.value_in(TimeUnit::Second), TimeUnit::Second);
            prop_assert!((back.value_in(TimeUnit::Day) - d).abs() < 1e-9);
        }

        #[test]
        fn prop_day_second_ratio(d in 1e-6..1e6f64) {
            let t = Time::new(d, TimeUnit::Day);
            prop_assert!((t.value_in(TimeUnit::Second) / d - 86_400.0).abs() < 1e-6);
        }

        #[test]
        fn prop_identity_conversion_is_exact(s in -1e12..1e12f64) {
            let t = Time::new(s, TimeUnit::Second);
            prop_assert_eq!(t.value_in(TimeUnit::Second), s);
        }
    }
}
