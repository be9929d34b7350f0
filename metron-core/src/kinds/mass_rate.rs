//! Mass flow rate units.
//!
//! The standard unit for this kind is [`MassRateUnit::KilogramPerSecond`].
//! All other mass rate unit factors are expressed in *kilograms per second*.
//!
//! Mass rate is [`Mass`] per [`Time`]; dividing a mass rate by a mass gives
//! the [`Frequency`](crate::kinds::frequency::Frequency) at which that mass
//! is turned over.
//!
//! ```rust
//! use metron_core::kinds::mass::{Mass, MassUnit};
//! use metron_core::kinds::mass_rate::{MassRate, MassRateUnit};
//! use metron_core::kinds::time::{Time, TimeUnit};
//!
//! let flow: MassRate = Mass::new(18.0, MassUnit::Tonne) / Time::new(1.0, TimeUnit::Hour);
//! assert!((flow.value_in(MassRateUnit::KilogramPerSecond) - 5.0).abs() < 1e-12);
//! ```

use crate::kinds::frequency::FrequencyUnit;
use crate::kinds::mass::{Mass, MassUnit};
use crate::kinds::time::{Time, TimeUnit};
use crate::Quantity;
use metron_derive::Unit;

/// Units of mass flow rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimensions = crate::Dimensions::MASS_RATE, standard = KilogramPerSecond)]
pub enum MassRateUnit {
    /// Grams per second (`1 g/s = 10⁻³ kg/s`).
    #[unit(abbr = "g/s", factor = 1e-3, spellings("g/s", "gram per second", "grams per second"))]
    GramPerSecond,
    /// Kilograms per second (SI coherent unit).
    #[unit(abbr = "kg/s", factor = 1.0, spellings("kg/s", "kilogram per second", "kilograms per second"))]
    KilogramPerSecond,
    /// Kilograms per hour (`1 kg/h = 1/3600 kg/s`).
    #[unit(abbr = "kg/h", factor = 1.0 / 3_600.0, spellings("kg/h", "kilogram per hour", "kilograms per hour"))]
    KilogramPerHour,
    /// Tonnes per hour (`1 t/h = 1000/3600 kg/s`).
    #[unit(abbr = "t/h", factor = 1_000.0 / 3_600.0, spellings("t/h", "tonne per hour", "tonnes per hour"))]
    TonnePerHour,
    /// Pounds per second (`1 lb/s = 0.453_592_37 kg/s` exactly).
    #[unit(abbr = "lb/s", factor = 0.453_592_37, spellings("lb/s", "pound per second", "pounds per second"))]
    PoundPerSecond,
}

/// A mass flow rate, stored in kilograms per second.
pub type MassRate = Quantity<MassRateUnit>;

crate::impl_relation!(MassUnit = MassRateUnit * TimeUnit);
crate::impl_relation!(MassRateUnit = MassUnit * FrequencyUnit);

impl MassRate {
    /// The constant rate that moves `mass` in `time`.
    pub fn from_mass_and_time(mass: Mass, time: Time) -> Self {
        mass / time
    }
}
