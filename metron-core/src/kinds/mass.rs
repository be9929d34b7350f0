//! Mass units.
//!
//! The standard unit for this kind is [`MassUnit::Kilogram`]. All other mass
//! unit factors are expressed in *kilograms*.
//!
//! Avoirdupois units use the international pound (`1 lb = 0.45359237 kg`
//! exactly); the slug is derived from it through standard gravity.
//!
//! ```rust
//! use metron_core::kinds::mass::{Mass, MassUnit};
//!
//! let m = Mass::new(2.0, MassUnit::Pound);
//! assert!((m.value_in(MassUnit::Kilogram) - 0.907_184_74).abs() < 1e-9);
//! ```

use crate::Quantity;
use metron_derive::Unit;

/// Units of mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimensions = crate::Dimensions::MASS, standard = Kilogram)]
pub enum MassUnit {
    /// Milligrams (`1 mg = 10⁻⁶ kg`).
    #[unit(abbr = "mg", factor = 1e-6, spellings("mg", "milligram", "milligrams"))]
    Milligram,
    /// Grams (`1 g = 10⁻³ kg`).
    #[unit(abbr = "g", factor = 1e-3, spellings("g", "gram", "grams"))]
    Gram,
    /// Kilograms (SI base unit).
    #[unit(abbr = "kg", factor = 1.0, spellings("kg", "kilogram", "kilograms"))]
    Kilogram,
    /// Tonnes (`1 t = 10³ kg`).
    #[unit(abbr = "t", factor = 1e3, spellings("t", "tonne", "tonnes", "metric ton", "metric tons"))]
    Tonne,
    /// Avoirdupois ounce (`1 oz = 0.028_349_523_125 kg` exactly).
    #[unit(abbr = "oz", factor = 0.028_349_523_125, spellings("oz", "ounce", "ounces"))]
    Ounce,
    /// International avoirdupois pound (`1 lb = 0.453_592_37 kg` exactly).
    #[unit(abbr = "lb", factor = 0.453_592_37, spellings("lb", "lbs", "pound", "pounds"))]
    Pound,
    /// Slug (`1 slug ≈ 14.593_903 kg`).
    #[unit(abbr = "slug", factor = 14.593_903, spellings("slug", "slugs"))]
    Slug,
}

/// A mass, stored in kilograms.
pub type Mass = Quantity<MassUnit>;

/// A constant representing one gram.
pub const G: Mass = Mass::create(1.0, MassUnit::Gram);
/// A constant representing one kilogram.
pub const KG: Mass = Mass::create(1.0, MassUnit::Kilogram);
/// A constant representing one pound.
pub const LB: Mass = Mass::create(1.0, MassUnit::Pound);
