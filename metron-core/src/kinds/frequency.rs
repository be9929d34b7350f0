//! Frequency units.
//!
//! The standard unit for this kind is [`FrequencyUnit::Hertz`]. All other
//! frequency unit factors are expressed in *hertz* (cycles per second).
//!
//! Frequency and [`Time`] are reciprocal kinds: [`Frequency::period`] and
//! [`Time::frequency`](crate::Quantity::frequency) convert between them.
//!
//! ```rust
//! use metron_core::kinds::frequency::{Frequency, FrequencyUnit};
//! use metron_core::kinds::time::TimeUnit;
//!
//! let f = Frequency::new(0.5, FrequencyUnit::Hertz);
//! let t = f.period();
//! assert!((t.value_in(TimeUnit::Second) - 2.0).abs() < 1e-12);
//! ```

use crate::kinds::time::{Time, TimeUnit};
use crate::Quantity;
use metron_derive::Unit;

/// Units of frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimensions = crate::Dimensions::FREQUENCY, standard = Hertz)]
pub enum FrequencyUnit {
    /// Hertz (SI derived unit, one cycle per second).
    #[unit(abbr = "Hz", factor = 1.0, spellings("Hz", "hertz"))]
    Hertz,
    /// Kilohertz (`1 kHz = 10³ Hz`).
    #[unit(abbr = "kHz", factor = 1e3, spellings("kHz", "kilohertz"))]
    Kilohertz,
    /// Megahertz (`1 MHz = 10⁶ Hz`).
    #[unit(abbr = "MHz", factor = 1e6, spellings("MHz", "megahertz"))]
    Megahertz,
    /// Gigahertz (`1 GHz = 10⁹ Hz`).
    #[unit(abbr = "GHz", factor = 1e9, spellings("GHz", "gigahertz"))]
    Gigahertz,
    /// Cycles per minute (`1/min = 1/60 Hz`).
    #[unit(abbr = "1/min", factor = 1.0 / 60.0, spellings("1/min", "per minute", "rpm"))]
    PerMinute,
    /// Cycles per hour (`1/h = 1/3600 Hz`).
    #[unit(abbr = "1/h", factor = 1.0 / 3_600.0, spellings("1/h", "per hour"))]
    PerHour,
}

/// A frequency, stored in hertz.
pub type Frequency = Quantity<FrequencyUnit>;

/// A constant representing one hertz.
pub const HZ: Frequency = Frequency::create(1.0, FrequencyUnit::Hertz);

impl Frequency {
    /// Builds the frequency whose cycle length is `period`.
    ///
    /// A zero period follows IEEE-754 and yields an infinite frequency.
    pub fn from_period(period: Time) -> Self {
        Self::from_standard(1.0 / period.value())
    }

    /// The cycle length of this frequency.
    ///
    /// A zero frequency follows IEEE-754 and yields an infinite period.
    pub fn period(self) -> Time {
        Time::from_standard(1.0 / self.value())
    }
}

impl Time {
    /// The frequency whose cycle length is this time span.
    pub fn frequency(self) -> Frequency {
        Frequency::from_standard(1.0 / self.value())
    }
}
