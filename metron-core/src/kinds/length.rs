//! Length units.
//!
//! The standard unit for this kind is [`LengthUnit::Meter`]. All other length
//! unit factors are expressed in *metres*.
//!
//! Imperial units use the international yard and pound agreement definitions
//! (`1 in = 0.0254 m` exactly), and the nautical mile is the SI-accepted
//! `1852 m`.
//!
//! ```rust
//! use metron_core::kinds::length::{Length, LengthUnit};
//!
//! let marathon = Length::new(42.195, LengthUnit::Kilometer);
//! assert!((marathon.value_in(LengthUnit::Meter) - 42_195.0).abs() < 1e-9);
//! ```

use crate::Quantity;
use metron_derive::Unit;

/// Units of length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimensions = crate::Dimensions::LENGTH, standard = Meter)]
pub enum LengthUnit {
    /// Millimetres (`1 mm = 10⁻³ m`).
    #[unit(abbr = "mm", factor = 1e-3, spellings("mm", "millimeter", "millimeters", "millimetre", "millimetres"))]
    Millimeter,
    /// Centimetres (`1 cm = 10⁻² m`).
    #[unit(abbr = "cm", factor = 1e-2, spellings("cm", "centimeter", "centimeters", "centimetre", "centimetres"))]
    Centimeter,
    /// Metres (SI base unit).
    #[unit(abbr = "m", factor = 1.0, spellings("m", "meter", "meters", "metre", "metres"))]
    Meter,
    /// Kilometres (`1 km = 10³ m`).
    #[unit(abbr = "km", factor = 1e3, spellings("km", "kilometer", "kilometers", "kilometre", "kilometres"))]
    Kilometer,
    /// International inch (`1 in = 0.0254 m` exactly).
    #[unit(abbr = "in", factor = 0.025_4, spellings("in", "inch", "inches"))]
    Inch,
    /// International foot (`1 ft = 0.3048 m` exactly).
    #[unit(abbr = "ft", factor = 0.304_8, spellings("ft", "foot", "feet"))]
    Foot,
    /// International mile (`1 mi = 1_609.344 m` exactly).
    #[unit(abbr = "mi", factor = 1_609.344, spellings("mi", "mile", "miles"))]
    Mile,
    /// Nautical mile (`1 nmi = 1_852 m`).
    #[unit(abbr = "nmi", factor = 1_852.0, spellings("nmi", "nautical mile", "nautical miles"))]
    NauticalMile,
}

/// A length, stored in metres.
pub type Length = Quantity<LengthUnit>;

/// A constant representing one metre.
pub const M: Length = Length::create(1.0, LengthUnit::Meter);
/// A constant representing one kilometre.
pub const KM: Length = Length::create(1.0, LengthUnit::Kilometer);
/// A constant representing one foot.
pub const FT: Length = Length::create(1.0, LengthUnit::Foot);
/// A constant representing one mile.
pub const MI: Length = Length::create(1.0, LengthUnit::Mile);
