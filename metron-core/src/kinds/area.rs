//! Area units.
//!
//! The standard unit for this kind is [`AreaUnit::SquareMeter`]. All other
//! area unit factors are expressed in *square metres*.
//!
//! Area is the square of [`Length`]: multiplying two lengths yields an area,
//! and dividing an area by a length recovers the other side.
//!
//! ```rust
//! use metron_core::kinds::area::{Area, AreaUnit};
//! use metron_core::kinds::length::{Length, LengthUnit};
//!
//! let w = Length::new(3.0, LengthUnit::Meter);
//! let h = Length::new(4.0, LengthUnit::Meter);
//! let a: Area = w * h;
//! assert!((a.value_in(AreaUnit::SquareMeter) - 12.0).abs() < 1e-12);
//! ```

use crate::kinds::length::{Length, LengthUnit};
use crate::Quantity;
use metron_derive::Unit;

/// Units of area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimensions = crate::Dimensions::AREA, standard = SquareMeter)]
pub enum AreaUnit {
    /// Square millimetres (`1 mm² = 10⁻⁶ m²`).
    #[unit(abbr = "mm²", factor = 1e-6, spellings("mm²", "mm^2", "mm2", "square millimeter", "square millimeters"))]
    SquareMillimeter,
    /// Square centimetres (`1 cm² = 10⁻⁴ m²`).
    #[unit(abbr = "cm²", factor = 1e-4, spellings("cm²", "cm^2", "cm2", "square centimeter", "square centimeters"))]
    SquareCentimeter,
    /// Square metres (SI coherent unit).
    #[unit(abbr = "m²", factor = 1.0, spellings("m²", "m^2", "m2", "square meter", "square meters", "square metre", "square metres"))]
    SquareMeter,
    /// Hectares (`1 ha = 10⁴ m²`).
    #[unit(abbr = "ha", factor = 1e4, spellings("ha", "hectare", "hectares"))]
    Hectare,
    /// Square kilometres (`1 km² = 10⁶ m²`).
    #[unit(abbr = "km²", factor = 1e6, spellings("km²", "km^2", "km2", "square kilometer", "square kilometers"))]
    SquareKilometer,
    /// Square inches (`1 in² = 0.0254² m²`).
    #[unit(abbr = "in²", factor = 0.025_4 * 0.025_4, spellings("in²", "in^2", "in2", "square inch", "square inches"))]
    SquareInch,
    /// Square feet (`1 ft² = 0.3048² m²`).
    #[unit(abbr = "ft²", factor = 0.304_8 * 0.304_8, spellings("ft²", "ft^2", "ft2", "square foot", "square feet"))]
    SquareFoot,
}

/// An area, stored in square metres.
pub type Area = Quantity<AreaUnit>;

crate::impl_relation!(AreaUnit = LengthUnit ^ 2);

impl Area {
    /// The area of a square with the given side.
    pub fn of_square(side: Length) -> Self {
        side * side
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
    fn hectare_to_square_meters() {
        let a = Area::new(1.0, AreaUnit::Hectare);
        assert_abs_diff_eq!(a.value_in(AreaUnit::SquareMeter), 10_000.0, epsilon = 1e-9);
    }

    #[test]
    fn square_kilometer_is_100_hectares() {
        let a = Area::new(1.0, AreaUnit::SquareKilometer);
        assert_abs_diff_eq!(a.value_in(AreaUnit::Hectare), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn square_foot_is_144_square_inches() {
        let a = Area::new(1.0, AreaUnit::SquareFoot);
        assert_abs_diff_eq!(a.value_in(AreaUnit::SquareInch), 144.0, epsilon = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Relation to Length
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn length_squared_is_an_area() {
        let side = Length::new(2.0, LengthUnit::Kilometer);
        let a: Area = side * side;
        assert_abs_diff_eq!(a.value_in(AreaUnit::SquareKilometer), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn area_divided_by_length_recovers_the_side() {
        let a = Area::new(12.0, AreaUnit::SquareMeter);
        let w = Length::new(3.0, LengthUnit::Meter);
        let h: Length = a / w;
        assert_abs_diff_eq!(h.value_in(LengthUnit::Meter), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn of_square_matches_multiplication() {
        let side = Length::new(2.5, LengthUnit::Meter);
        assert_eq!(Area::of_square(side), side * side);
    }

    #[test]
    fn parse_ascii_fallback_spellings() {
        assert_eq!("m^2".parse::<AreaUnit>().unwrap(), AreaUnit::SquareMeter);
        assert_eq!("km2".parse::<AreaUnit>().unwrap(), AreaUnit::SquareKilometer);
        assert_eq!("m²".parse::<AreaUnit>().unwrap(), AreaUnit::SquareMeter);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_square_then_divide_recovers_side(m in 1e-3..1e3f64) {
            let side = Length::new(m, LengthUnit::Meter);
            let back: Length = Area::of_square(side) / side;
            prop_assert!((back.value() - m).abs() / m < 1e-12);
        }
    }
}
