//! Core type system for strongly typed physical quantities.
//!
//! `metron-core` provides a units model with compile-time kinds and runtime
//! unit metadata:
//!
//! - A *unit kind* is a fieldless enum implementing [`Unit`], one variant per
//!   unit (`TimeUnit::Second`, `TimeUnit::Minute`, ...), generated by
//!   `#[derive(Unit)]`.
//! - A value tagged with a kind is a [`Quantity<U>`], backed by an `f64`
//!   stored in the kind's standard unit.
//! - Conversion happens at the boundary: constructors and accessors take a
//!   `(value, unit)` pair; arithmetic in between is a bare `f64` operation.
//! - Physical relations like `speed = length / time` are operator impls
//!   generated by [`impl_relation!`], each with a compile-time dimensional
//!   consistency check against [`Dimensions`].
//!
//! Most users should depend on `metron` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of kinds (length vs time vs energy, ...).
//! - Unit-safe construction, conversion, parsing, and serialization.
//! - A curated web of physical relations between the built-in kinds.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Open-ended unit algebra; only the relations the library declares are
//!   modeled, and the unit inventory of a kind is closed.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use metron_core::kinds::length::{Length, LengthUnit};
//!
//! let d = Length::new(1.25, LengthUnit::Kilometer);
//! assert!((d.value_in(LengthUnit::Meter) - 1250.0).abs() < 1e-12);
//! ```
//!
//! Derive one kind from others using `/`:
//!
//! ```rust
//! use metron_core::kinds::length::{Length, LengthUnit};
//! use metron_core::kinds::speed::{Speed, SpeedUnit};
//! use metron_core::kinds::time::{Time, TimeUnit};
//!
//! let d = Length::new(100.0, LengthUnit::Meter);
//! let t = Time::new(20.0, TimeUnit::Second);
//! let v: Speed = d / t;
//! assert!((v.value_in(SpeedUnit::MeterPerSecond) - 5.0).abs() < 1e-12);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `metron-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! metron-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! Without `std` the crate is `no_std + alloc` (the serializers and the parse
//! error produce `String`s), and floating-point math that isn't available in
//! `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<U>`; plain serialization
//!   is the raw `f64` value only, and [`serde_with_unit`] adds a tagged
//!   `{value, unit}` form.
//!
//! # Panics and errors
//!
//! Unit lookup by spelling is the one fallible operation and returns
//! [`UnknownUnit`]. Conversions and arithmetic are pure `f64` computations;
//! they do not panic on their own, but they follow IEEE-754 behavior (NaN and
//! infinities propagate according to the underlying operation, including
//! division by a zero-valued quantity).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimensions;
mod error;
mod macros;
mod quantity;
mod serialize;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimensions::Dimensions;
pub use error::UnknownUnit;
pub use quantity::Quantity;
pub use unit::Unit;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined quantity kinds (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined quantity kinds (grouped by dimension).
///
/// These are defined in `metron-core` so they can implement formatting,
/// operator, and helper traits without running into Rust's orphan rules.
pub mod kinds;

pub use kinds::acceleration;
pub use kinds::area;
pub use kinds::energy;
pub use kinds::force;
pub use kinds::frequency;
pub use kinds::length;
pub use kinds::mass;
pub use kinds::mass_rate;
pub use kinds::power;
pub use kinds::speed;
pub use kinds::time;
pub use kinds::volume;
