//! Speed units.
//!
//! The standard unit for this kind is [`SpeedUnit::MeterPerSecond`]. All
//! other speed unit factors are expressed in *metres per second*.
//!
//! Speed is [`Length`] per [`Time`]: dividing a length by a time yields a
//! speed, multiplying a speed by a time recovers a length, and multiplying a
//! length by a [`Frequency`] gives the speed of one cycle-length per cycle.
//!
//! ```rust
//! use metron_core::kinds::length::{Length, LengthUnit};
//! use metron_core::kinds::speed::{Speed, SpeedUnit};
//! use metron_core::kinds::time::{Time, TimeUnit};
//!
//! let v: Speed = Length::new(100.0, LengthUnit::Meter) / Time::new(20.0, TimeUnit::Second);
//! assert!((v.value_in(SpeedUnit::MeterPerSecond) - 5.0).abs() < 1e-12);
//! ```

use crate::kinds::frequency::{Frequency, FrequencyUnit};
use crate::kinds::length::{Length, LengthUnit};
use crate::kinds::time::{Time, TimeUnit};
use crate::Quantity;
use metron_derive::Unit;

/// Units of speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimensions = crate::Dimensions::SPEED, standard = MeterPerSecond)]
pub enum SpeedUnit {
    /// Metres per second (SI coherent unit).
    #[unit(abbr = "m/s", factor = 1.0, spellings("m/s", "mps", "meter per second", "meters per second"))]
    MeterPerSecond,
    /// Kilometres per hour (`1 km/h = 1000/3600 m/s`).
    #[unit(abbr = "km/h", factor = 1_000.0 / 3_600.0, spellings("km/h", "kph", "kilometer per hour", "kilometers per hour"))]
    KilometerPerHour,
    /// Miles per hour (`1 mph = 0.44704 m/s` exactly).
    #[unit(abbr = "mph", factor = 0.447_04, spellings("mph", "mile per hour", "miles per hour"))]
    MilePerHour,
    /// Feet per second (`1 ft/s = 0.3048 m/s` exactly).
    #[unit(abbr = "ft/s", factor = 0.304_8, spellings("ft/s", "fps", "foot per second", "feet per second"))]
    FootPerSecond,
    /// Knots (`1 kn = 1852/3600 m/s`).
    #[unit(abbr = "kn", factor = 1_852.0 / 3_600.0, spellings("kn", "kt", "knot", "knots"))]
    Knot,
}

/// A speed, stored in metres per second.
pub type Speed = Quantity<SpeedUnit>;

/// A constant representing one metre per second.
pub const MPS: Speed = Speed::create(1.0, SpeedUnit::MeterPerSecond);
/// A constant representing one knot.
pub const KNOT: Speed = Speed::create(1.0, SpeedUnit::Knot);

crate::impl_relation!(LengthUnit = SpeedUnit * TimeUnit);
crate::impl_relation!(SpeedUnit = LengthUnit * FrequencyUnit);

impl Speed {
    /// The constant speed that covers `length` in `time`.
    pub fn from_length_and_time(length: Length, time: Time) -> Self {
        length / time
    }

    /// The speed of one `length` per cycle at `frequency`.
    pub fn from_length_and_frequency(length: Length, frequency: Frequency) -> Self {
        length * frequency
    }
}
