//! Energy units.
//!
//! The standard unit for this kind is [`EnergyUnit::Joule`]. All other energy
//! unit factors are expressed in *joules*.
//!
//! Energy is [`Force`] times [`Length`] (work) and [`Power`](crate::kinds::power::Power)
//! times [`Time`](crate::kinds::time::Time).
//!
//! ```rust
//! use metron_core::kinds::energy::{Energy, EnergyUnit};
//!
//! let e = Energy::new(1.0, EnergyUnit::KilowattHour);
//! assert!((e.value_in(EnergyUnit::Joule) - 3.6e6).abs() < 1e-6);
//! ```

use crate::kinds::force::{Force, ForceUnit};
use crate::kinds::length::{Length, LengthUnit};
use crate::kinds::power::Power;
use crate::kinds::time::Time;
use crate::Quantity;
use metron_derive::Unit;

/// Units of energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimensions = crate::Dimensions::ENERGY, standard = Joule)]
pub enum EnergyUnit {
    /// Joules (SI coherent unit, `N·m`).
    #[unit(abbr = "J", factor = 1.0, spellings("J", "joule", "joules"))]
    Joule,
    /// Kilojoules (`1 kJ = 10³ J`).
    #[unit(abbr = "kJ", factor = 1e3, spellings("kJ", "kilojoule", "kilojoules"))]
    Kilojoule,
    /// Megajoules (`1 MJ = 10⁶ J`).
    #[unit(abbr = "MJ", factor = 1e6, spellings("MJ", "megajoule", "megajoules"))]
    Megajoule,
    /// Thermochemical calorie (`1 cal = 4.184 J` exactly).
    #[unit(abbr = "cal", factor = 4.184, spellings("cal", "calorie", "calories"))]
    Calorie,
    /// Kilocalorie (`1 kcal = 4_184 J`).
    #[unit(abbr = "kcal", factor = 4_184.0, spellings("kcal", "kilocalorie", "kilocalories", "Cal"))]
    Kilocalorie,
    /// Watt-hour (`1 Wh = 3_600 J`).
    #[unit(abbr = "Wh", factor = 3_600.0, spellings("Wh", "watt-hour", "watt-hours"))]
    WattHour,
    /// Kilowatt-hour (`1 kWh = 3.6·10⁶ J`).
    #[unit(abbr = "kWh", factor = 3.6e6, spellings("kWh", "kilowatt-hour", "kilowatt-hours"))]
    KilowattHour,
    /// Electronvolt (`1 eV = 1.602_176_634·10⁻¹⁹ J` exactly).
    #[unit(abbr = "eV", factor = 1.602_176_634e-19, spellings("eV", "electronvolt", "electronvolts"))]
    Electronvolt,
    /// Foot pound-force (`1 ft·lbf = 1.355_817_948_331_4 J`).
    #[unit(abbr = "ft·lbf", factor = 1.355_817_948_331_400_4, spellings("ft·lbf", "ft-lbf", "foot-pound", "foot-pounds"))]
    FootPound,
}

/// An energy, stored in joules.
pub type Energy = Quantity<EnergyUnit>;

/// A constant representing one joule.
pub const JOULE: Energy = Energy::create(1.0, EnergyUnit::Joule);
/// A constant representing one kilowatt-hour.
pub const KWH: Energy = Energy::create(1.0, EnergyUnit::KilowattHour);

crate::impl_relation!(EnergyUnit = ForceUnit * LengthUnit);

impl Energy {
    /// The work done by `force` along `length`.
    pub fn from_force_and_length(force: Force, length: Length) -> Self {
        force * length
    }

    /// The energy delivered by `power` sustained over `time`.
    pub fn from_power_and_time(power: Power, time: Time) -> Self {
        power * time
    }
}
