//! Volume units.
//!
//! The standard unit for this kind is [`VolumeUnit::CubicMeter`]. All other
//! volume unit factors are expressed in *cubic metres*.
//!
//! Volume is [`Area`] times [`Length`].
//!
//! ```rust
//! use metron_core::kinds::length::{Length, LengthUnit};
//! use metron_core::kinds::volume::{Volume, VolumeUnit};
//!
//! let edge = Length::new(10.0, LengthUnit::Centimeter);
//! let v = Volume::of_cube(edge);
//! assert!((v.value_in(VolumeUnit::Liter) - 1.0).abs() < 1e-12);
//! ```

use crate::kinds::area::{Area, AreaUnit};
use crate::kinds::length::{Length, LengthUnit};
use crate::Quantity;
use metron_derive::Unit;

/// Units of volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimensions = crate::Dimensions::VOLUME, standard = CubicMeter)]
pub enum VolumeUnit {
    /// Cubic millimetres (`1 mm³ = 10⁻⁹ m³`).
    #[unit(abbr = "mm³", factor = 1e-9, spellings("mm³", "mm^3", "mm3", "cubic millimeter", "cubic millimeters"))]
    CubicMillimeter,
    /// Cubic centimetres (`1 cm³ = 10⁻⁶ m³`).
    #[unit(abbr = "cm³", factor = 1e-6, spellings("cm³", "cm^3", "cm3", "cubic centimeter", "cubic centimeters", "cc"))]
    CubicCentimeter,
    /// Litres (`1 L = 10⁻³ m³`).
    #[unit(abbr = "L", factor = 1e-3, spellings("L", "l", "liter", "liters", "litre", "litres"))]
    Liter,
    /// Cubic metres (SI coherent unit).
    #[unit(abbr = "m³", factor = 1.0, spellings("m³", "m^3", "m3", "cubic meter", "cubic meters", "cubic metre", "cubic metres"))]
    CubicMeter,
    /// Cubic feet (`1 ft³ = 0.3048³ m³`).
    #[unit(abbr = "ft³", factor = 0.304_8 * 0.304_8 * 0.304_8, spellings("ft³", "ft^3", "ft3", "cubic foot", "cubic feet"))]
    CubicFoot,
}

/// A volume, stored in cubic metres.
pub type Volume = Quantity<VolumeUnit>;

crate::impl_relation!(VolumeUnit = AreaUnit * LengthUnit);

impl Volume {
    /// The volume of a cube with the given edge.
    pub fn of_cube(edge: Length) -> Self {
        (edge * edge) * edge
    }

    /// The volume of a prism with the given base area and height.
    pub fn from_area_and_length(base: Area, height: Length) -> Self {
        base * height
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
    fn cubic_meter_is_a_thousand_liters() {
        let v = Volume::new(1.0, VolumeUnit::CubicMeter);
        assert_abs_diff_eq!(v.value_in(VolumeUnit::Liter), 1_000.0, epsilon = 1e-9);
    }

    #[test]
    fn liter_is_a_thousand_cubic_centimeters() {
        let v = Volume::new(1.0, VolumeUnit::Liter);
        assert_abs_diff_eq!(v.value_in(VolumeUnit::CubicCentimeter), 1_000.0, epsilon = 1e-9);
    }

    #[test]
    fn cubic_foot_in_liters() {
        let v = Volume::new(1.0, VolumeUnit::CubicFoot);
        assert_abs_diff_eq!(v.value_in(VolumeUnit::Liter), 28.316_846_592, epsilon = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Relations to Area and Length
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn area_times_length_is_a_volume() {
        let base = Area::new(2.0, AreaUnit::SquareMeter);
        let height = Length::new(3.0, LengthUnit::Meter);
        let v: Volume = base * height;
        assert_abs_diff_eq!(v.value_in(VolumeUnit::CubicMeter), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn volume_divided_by_area_recovers_the_height() {
        let v = Volume::new(6.0, VolumeUnit::CubicMeter);
        let base = Area::new(2.0, AreaUnit::SquareMeter);
        let h: Length = v / base;
        assert_abs_diff_eq!(h.value_in(LengthUnit::Meter), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn of_cube_matches_the_prism_form() {
        let edge = Length::new(0.5, LengthUnit::Meter);
        let cube = Volume::of_cube(edge);
        let prism = Volume::from_area_and_length(Area::of_square(edge), edge);
        assert_eq!(cube, prism);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_prism_volume_recovers_height(h in 1e-3..1e3f64) {
            let base = Area::new(4.0, AreaUnit::SquareMeter);
            let height = Length::new(h, LengthUnit::Meter);
            let back: Length = Volume::from_area_and_length(base, height) / base;
            prop_assert!((back.value() - h).abs() / h < 1e-12);
        }
    }
}
