//! Strongly typed physical quantities with unit conversion and dimensional
//! analysis.
//!
//! `metron` is the user-facing crate in this workspace. It re-exports the full
//! API from `metron-core`: the generic [`Quantity`] wrapper, the predefined
//! quantity kinds (time, length, mass, energy, ...), and the physical
//! relations between them.
//!
//! The core idea is: a value is always a `Quantity<U>`, where `U` is the unit
//! enum of its kind. The kind lives at compile time; the unit of a particular
//! value is runtime metadata consulted only at the boundaries (construction,
//! conversion, parsing, printing). In between, a quantity is just an `f64`
//! stored in the kind's standard unit.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible kinds (you can't add metres to seconds).
//! - Makes unit conversion explicit (`value_in(LengthUnit::Kilometer)`).
//! - Derives kinds from one another through checked physical relations
//!   (`Length / Time = Speed`, `Mass * Acceleration = Force`, ...).
//! - Parses unit spellings and serializes quantities to text formats.
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra; only the declared relations exist.
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Open unit inventories; each kind's unit enum is a closed set.
//!
//! # Quick start
//!
//! Convert kilometres to miles:
//!
//! ```rust
//! use metron::{Length, LengthUnit};
//!
//! let d = Length::new(42.195, LengthUnit::Kilometer);
//! assert!((d.value_in(LengthUnit::Mile) - 26.218_757).abs() < 1e-6);
//! ```
//!
//! Derive one kind from others (speed = length / time):
//!
//! ```rust
//! use metron::{Length, LengthUnit, Speed, SpeedUnit, Time, TimeUnit};
//!
//! let d = Length::new(1_000.0, LengthUnit::Kilometer);
//! let t = Time::new(100.0, TimeUnit::Second);
//! let v: Speed = d / t;
//! assert!((v.value_in(SpeedUnit::MeterPerSecond) - 10_000.0).abs() < 1e-9);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use metron::{Length, LengthUnit, Time, TimeUnit};
//!
//! let d = Length::new(1.0, LengthUnit::Meter);
//! let t = Time::new(1.0, TimeUnit::Second);
//! let _ = d + t; // cannot add different kinds
//! ```
//!
//! # Modules
//!
//! Kinds are grouped under modules (also re-exported at the crate root for
//! convenience):
//!
//! - `metron::time`, `metron::frequency` (reciprocal pair)
//! - `metron::length`, `metron::area`, `metron::volume`
//! - `metron::mass`, `metron::mass_rate`
//! - `metron::speed`, `metron::acceleration`
//! - `metron::force`, `metron::energy`, `metron::power`
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `metron-core`.
//! - `serde`: enables `serde` support for `Quantity<U>`; plain serialization
//!   is the raw `f64` value, and `serde_with_unit` adds a tagged
//!   `{value, unit}` form.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! metron = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Unit lookup by spelling returns [`UnknownUnit`]; everything else is pure
//! `f64` computation following IEEE-754 behavior (NaN and infinities
//! propagate according to the underlying operation).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use metron_core::*;

/// Derive macro used by `metron-core` to define unit enums.
///
/// This macro expands in terms of `crate::Unit` and `crate::Quantity`, so it
/// is intended for use inside `metron-core` (or crates exposing the same
/// crate-root API). Most users should not need this.
pub use metron_derive::Unit;

pub use metron_core::kinds::acceleration::*;
pub use metron_core::kinds::area::*;
pub use metron_core::kinds::energy::*;
pub use metron_core::kinds::force::*;
pub use metron_core::kinds::frequency::*;
pub use metron_core::kinds::length::*;
pub use metron_core::kinds::mass::*;
pub use metron_core::kinds::mass_rate::*;
pub use metron_core::kinds::power::*;
pub use metron_core::kinds::speed::*;
pub use metron_core::kinds::time::*;
pub use metron_core::kinds::volume::*;
