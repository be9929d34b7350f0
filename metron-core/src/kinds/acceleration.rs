//! Acceleration units.
//!
//! The standard unit for this kind is [`AccelerationUnit::MeterPerSquareSecond`].
//! All other acceleration unit factors are expressed in *metres per second
//! squared*.
//!
//! Acceleration is [`Speed`] per [`Time`].
//!
//! ```rust
//! use metron_core::kinds::acceleration::{Acceleration, AccelerationUnit};
//! use metron_core::kinds::speed::{Speed, SpeedUnit};
//! use metron_core::kinds::time::{Time, TimeUnit};
//!
//! let a: Acceleration = Speed::new(8.0, SpeedUnit::MeterPerSecond)
//!     / Time::new(2.0, TimeUnit::Second);
//! assert!((a.value_in(AccelerationUnit::MeterPerSquareSecond) - 4.0).abs() < 1e-12);
//! ```

use crate::kinds::speed::{Speed, SpeedUnit};
use crate::kinds::time::{Time, TimeUnit};
use crate::Quantity;
use metron_derive::Unit;

/// Units of acceleration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimensions = crate::Dimensions::ACCELERATION, standard = MeterPerSquareSecond)]
pub enum AccelerationUnit {
    /// Metres per second squared (SI coherent unit).
    #[unit(abbr = "m/s²", factor = 1.0, spellings("m/s²", "m/s^2", "m/s2", "meter per second squared", "meters per second squared"))]
    MeterPerSquareSecond,
    /// Feet per second squared (`1 ft/s² = 0.3048 m/s²` exactly).
    #[unit(abbr = "ft/s²", factor = 0.304_8, spellings("ft/s²", "ft/s^2", "ft/s2", "foot per second squared", "feet per second squared"))]
    FootPerSquareSecond,
    /// Standard gravity (`1 g₀ = 9.80665 m/s²` by definition).
    #[unit(abbr = "g₀", factor = 9.806_65, spellings("g₀", "g0", "gee", "standard gravity"))]
    StandardGravity,
}

/// An acceleration, stored in metres per second squared.
pub type Acceleration = Quantity<AccelerationUnit>;

/// A constant representing one standard gravity.
pub const G0: Acceleration = Acceleration::create(1.0, AccelerationUnit::StandardGravity);

crate::impl_relation!(SpeedUnit = AccelerationUnit * TimeUnit);

impl Acceleration {
    /// The constant acceleration that changes speed by `speed` over `time`.
    pub fn from_speed_and_time(speed: Speed, time: Time) -> Self {
        speed / time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn standard_gravity_in_si() {
        let a = Acceleration::new(1.0, AccelerationUnit::StandardGravity);
        assert_abs_diff_eq!(
            a.value_in(AccelerationUnit::MeterPerSquareSecond),
            9.806_65,
            epsilon = 1e-12
        );
    }

    #[test]
    fn feet_per_square_second_in_si() {
        let a = Acceleration::new(10.0, AccelerationUnit::FootPerSquareSecond);
        assert_abs_diff_eq!(
            a.value_in(AccelerationUnit::MeterPerSquareSecond),
            3.048,
            epsilon = 1e-12
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Relations to Speed and Time
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn speed_over_time_is_an_acceleration() {
        let v = Speed::new(8.0, SpeedUnit::MeterPerSecond);
        let t = Time::new(2.0, TimeUnit::Second);
        let a: Acceleration = v / t;
        assert_eq!(a, Acceleration::new(4.0, AccelerationUnit::MeterPerSquareSecond));
    }

    #[test]
    fn acceleration_times_time_recovers_the_speed() {
        let a = Acceleration::new(4.0, AccelerationUnit::MeterPerSquareSecond);
        let t = Time::new(2.0, TimeUnit::Second);
        let v: Speed = a * t;
        assert_abs_diff_eq!(v.value_in(SpeedUnit::MeterPerSecond), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn named_constructor_matches_operator() {
        let v = Speed::new(8.0, SpeedUnit::MeterPerSecond);
        let t = Time::new(2.0, TimeUnit::Second);
        assert_eq!(Acceleration::from_speed_and_time(v, t), v / t);
    }

    #[test]
    fn parse_spellings() {
        assert_eq!(
            "g0".parse::<AccelerationUnit>().unwrap(),
            AccelerationUnit::StandardGravity
        );
        assert_eq!(
            "m/s^2".parse::<AccelerationUnit>().unwrap(),
            AccelerationUnit::MeterPerSquareSecond
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_forward_and_inverse_formulas_agree(mps in 1e-3..1e6f64, s in 1e-3..1e6f64) {
            let v = Speed::new(mps, SpeedUnit::MeterPerSecond);
            let t = Time::new(s, TimeUnit::Second);
            let a = Acceleration::from_speed_and_time(v, t);
            let back: Speed = a * t;
            prop_assert!((back.value() - mps).abs() / mps < 1e-12);
        }
    }
}
