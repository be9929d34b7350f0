//! Power units.
//!
//! The standard unit for this kind is [`PowerUnit::Watt`]. All other power
//! unit factors are expressed in *watts*.
//!
//! Power is [`Energy`] per [`Time`], and also [`Force`] times [`Speed`].
//!
//! ```rust
//! use metron_core::kinds::energy::{Energy, EnergyUnit};
//! use metron_core::kinds::power::{Power, PowerUnit};
//! use metron_core::kinds::time::{Time, TimeUnit};
//!
//! let p: Power = Energy::new(1.0, EnergyUnit::KilowattHour) / Time::new(2.0, TimeUnit::Hour);
//! assert!((p.value_in(PowerUnit::Watt) - 500.0).abs() < 1e-9);
//! ```

use crate::kinds::energy::{Energy, EnergyUnit};
use crate::kinds::force::{Force, ForceUnit};
use crate::kinds::frequency::FrequencyUnit;
use crate::kinds::speed::{Speed, SpeedUnit};
use crate::kinds::time::{Time, TimeUnit};
use crate::Quantity;
use metron_derive::Unit;

/// Units of power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimensions = crate::Dimensions::POWER, standard = Watt)]
pub enum PowerUnit {
    /// Milliwatts (`1 mW = 10⁻³ W`).
    #[unit(abbr = "mW", factor = 1e-3, spellings("mW", "milliwatt", "milliwatts"))]
    Milliwatt,
    /// Watts (SI coherent unit, `J/s`).
    #[unit(abbr = "W", factor = 1.0, spellings("W", "watt", "watts"))]
    Watt,
    /// Kilowatts (`1 kW = 10³ W`).
    #[unit(abbr = "kW", factor = 1e3, spellings("kW", "kilowatt", "kilowatts"))]
    Kilowatt,
    /// Megawatts (`1 MW = 10⁶ W`).
    #[unit(abbr = "MW", factor = 1e6, spellings("MW", "megawatt", "megawatts"))]
    Megawatt,
    /// Mechanical horsepower (`1 hp = 745.699_871_582_270_2 W`).
    #[unit(abbr = "hp", factor = 745.699_871_582_270_2, spellings("hp", "horsepower"))]
    Horsepower,
}

/// A power, stored in watts.
pub type Power = Quantity<PowerUnit>;

/// A constant representing one watt.
pub const WATT: Power = Power::create(1.0, PowerUnit::Watt);
/// A constant representing one horsepower.
pub const HP: Power = Power::create(1.0, PowerUnit::Horsepower);

crate::impl_relation!(EnergyUnit = PowerUnit * TimeUnit);
crate::impl_relation!(PowerUnit = EnergyUnit * FrequencyUnit);
crate::impl_relation!(PowerUnit = ForceUnit * SpeedUnit);

impl Power {
    /// The average power delivering `energy` over `time`.
    pub fn from_energy_and_time(energy: Energy, time: Time) -> Self {
        energy / time
    }

    /// The power exerted pushing with `force` at `speed`.
    pub fn from_force_and_speed(force: Force, speed: Speed) -> Self {
        force * speed
    }
}
