//! The [`Unit`] trait implemented by every unit enum.

use core::fmt::Debug;
use core::hash::Hash;

use crate::{Dimensions, UnknownUnit};

/// Trait implemented by every **unit** enum of the library.
///
/// A unit kind is a fieldless `enum` whose variants are the units of one
/// physical dimension. Each variant carries a conversion factor to the kind's
/// *standard unit*, a canonical abbreviation, and a table of accepted text
/// spellings. The derive macro in `metron-derive` generates all of it from
/// `#[unit(...)]` attributes.
///
/// # Invariants
///
/// - `STANDARD.factor() == 1.0` (enforced at compile time by the derive).
/// - Every factor is finite and strictly positive.
/// - `ALL` lists every variant exactly once.
/// - The standard units of all kinds form a coherent system: multiplying or
///   dividing standard-unit values yields standard-unit values of the derived
///   kind with no extra scaling.
pub trait Unit: Copy + Eq + Hash + Debug + 'static {
    /// SI base-quantity exponents of this kind.
    const DIMENSIONS: Dimensions;

    /// The unit in which [`Quantity`](crate::Quantity) stores its value.
    const STANDARD: Self;

    /// Every unit of the kind.
    const ALL: &'static [Self];

    /// Conversion factor from this unit to [`Self::STANDARD`].
    fn factor(self) -> f64;

    /// Canonical abbreviation, e.g. `"km"`.
    fn abbreviation(self) -> &'static str;

    /// Accepted text spellings, e.g. `["km", "kilometer", "kilometers"]`.
    fn spellings(self) -> &'static [&'static str];

    /// Converts `value` expressed in `from` into the equivalent value in `to`.
    ///
    /// Identical units short-circuit so the value passes through bit-exact.
    fn convert(value: f64, from: Self, to: Self) -> f64 {
        if from == to {
            return value;
        }
        value * from.factor() / to.factor()
    }

    /// Looks up a unit by spelling.
    ///
    /// An exact match over every unit's spelling table wins; failing that, one
    /// ASCII-case-insensitive pass runs. The exact pass must run to completion
    /// first so that case-distinct abbreviations (`"mW"` and `"MW"`) never
    /// shadow each other.
    fn parse(spelling: &str) -> Result<Self, UnknownUnit> {
        for &unit in Self::ALL {
            if unit.spellings().iter().any(|&s| s == spelling) {
                return Ok(unit);
            }
        }
        for &unit in Self::ALL {
            if unit
                .spellings()
                .iter()
                .any(|&s| s.eq_ignore_ascii_case(spelling))
            {
                return Ok(unit);
            }
        }
        Err(UnknownUnit::new(spelling))
    }
}
