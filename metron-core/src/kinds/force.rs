//! Force units.
//!
//! The standard unit for this kind is [`ForceUnit::Newton`]. All other force
//! unit factors are expressed in *newtons*.
//!
//! Force is [`Mass`] times [`Acceleration`].
//!
//! ```rust
//! use metron_core::kinds::acceleration::G0;
//! use metron_core::kinds::force::{Force, ForceUnit};
//! use metron_core::kinds::mass::{Mass, MassUnit};
//!
//! let weight: Force = Mass::new(70.0, MassUnit::Kilogram) * G0;
//! assert!((weight.value_in(ForceUnit::Newton) - 686.465_5).abs() < 1e-9);
//! ```

use crate::kinds::acceleration::{Acceleration, AccelerationUnit};
use crate::kinds::mass::{Mass, MassUnit};
use crate::Quantity;
use metron_derive::Unit;

/// Units of force.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimensions = crate::Dimensions::FORCE, standard = Newton)]
pub enum ForceUnit {
    /// Newtons (SI coherent unit, `kg·m/s²`).
    #[unit(abbr = "N", factor = 1.0, spellings("N", "newton", "newtons"))]
    Newton,
    /// Kilonewtons (`1 kN = 10³ N`).
    #[unit(abbr = "kN", factor = 1e3, spellings("kN", "kilonewton", "kilonewtons"))]
    Kilonewton,
    /// Dyne (`1 dyn = 10⁻⁵ N`).
    #[unit(abbr = "dyn", factor = 1e-5, spellings("dyn", "dyne", "dynes"))]
    Dyne,
    /// Pound-force (`1 lbf = 4.448_221_615_260_5 N` exactly).
    #[unit(abbr = "lbf", factor = 4.448_221_615_260_5, spellings("lbf", "pound-force", "pounds-force"))]
    PoundForce,
}

/// A force, stored in newtons.
pub type Force = Quantity<ForceUnit>;

/// A constant representing one newton.
pub const NEWTON: Force = Force::create(1.0, ForceUnit::Newton);

crate::impl_relation!(ForceUnit = MassUnit * AccelerationUnit);

impl Force {
    /// The force accelerating `mass` at `acceleration`.
    pub fn from_mass_and_acceleration(mass: Mass, acceleration: Acceleration) -> Self {
        mass * acceleration
    }
}
