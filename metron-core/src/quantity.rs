//! Quantity type and its implementations.

use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::*;

use crate::unit::Unit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A physical quantity of kind `U`.
///
/// `Quantity<U>` wraps an `f64` magnitude together with phantom type
/// information about its unit kind `U`. The magnitude is always stored in the
/// kind's standard unit ([`Unit::STANDARD`]); conversion happens once at the
/// constructor and accessor boundaries, so arithmetic between quantities is a
/// bare `f64` operation.
///
/// Cross-kind type errors (adding a length to a mass, dividing by the wrong
/// kind) are compile errors. Conversions and arithmetic are pure `f64`
/// computations and follow IEEE-754 behavior, including division by zero.
///
/// # Examples
///
/// ```rust
/// use metron_core::kinds::length::{LengthUnit, Length};
///
/// let a = Length::new(1.0, LengthUnit::Kilometer);
/// let b = Length::new(500.0, LengthUnit::Meter);
/// let sum = a + b;
/// assert_eq!(sum.value_in(LengthUnit::Meter), 1_500.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Quantity<U: Unit>(f64, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// Zero in the standard unit.
    pub const ZERO: Self = Self::from_standard(0.0);
    /// The most negative finite quantity.
    pub const MIN: Self = Self::from_standard(f64::MIN);
    /// The largest finite quantity.
    pub const MAX: Self = Self::from_standard(f64::MAX);
    /// Not a number.
    pub const NAN: Self = Self::from_standard(f64::NAN);

    /// Creates a quantity from a magnitude expressed in `unit`.
    ///
    /// The magnitude is converted to the standard unit on the way in.
    pub fn new(value: f64, unit: U) -> Self {
        Self::from_standard(U::convert(value, unit, U::STANDARD))
    }

    /// Creates a quantity from a magnitude already expressed in the standard
    /// unit, with no conversion.
    pub const fn from_standard(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// The magnitude in the standard unit.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// The magnitude converted to `unit`.
    pub fn value_in(self, unit: U) -> f64 {
        U::convert(self.0, U::STANDARD, unit)
    }

    /// Replaces the magnitude, interpreting `value` in the standard unit.
    pub fn set_value(&mut self, value: f64) {
        self.0 = value;
    }

    /// Replaces the magnitude, interpreting `value` in `unit`.
    pub fn set_value_in(&mut self, value: f64, unit: U) {
        self.0 = U::convert(value, unit, U::STANDARD);
    }

    /// Mutable access to the standard-unit magnitude.
    pub fn value_mut(&mut self) -> &mut f64 {
        &mut self.0
    }

    /// The absolute value.
    pub fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            Self::from_standard(self.0.abs())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::from_standard(libm::fabs(self.0))
        }
    }

    /// Element-wise minimum, propagating the non-NaN operand.
    pub fn min(self, other: Self) -> Self {
        Self::from_standard(self.0.min(other.0))
    }

    /// Element-wise maximum, propagating the non-NaN operand.
    pub fn max(self, other: Self) -> Self {
        Self::from_standard(self.0.max(other.0))
    }
}

impl<U: Unit> Default for Quantity<U> {
    fn default() -> Self {
        Self::ZERO
    }
}

// Quantities hash by the bit pattern of their standard-unit magnitude, so
// equal finite values hash equally while NaN payloads stay distinct.
impl<U: Unit> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

// ─────────────────────────────────────────────
// Same-kind arithmetic
// ─────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_standard(self.0 + rhs.0)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_standard(self.0 - rhs.0)
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_standard(-self.0)
    }
}

/// Dividing two quantities of the same kind yields their dimensionless ratio.
impl<U: Unit> Div for Quantity<U> {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

// ─────────────────────────────────────────────
// Scalar arithmetic
// ─────────────────────────────────────────────

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_standard(self.0 * rhs)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;

    fn mul(self, rhs: Quantity<U>) -> Quantity<U> {
        Quantity::from_standard(self * rhs.value())
    }
}

impl<U: Unit> MulAssign<f64> for Quantity<U> {
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_standard(self.0 / rhs)
    }
}

impl<U: Unit> DivAssign<f64> for Quantity<U> {
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

impl<U: Unit> Rem<f64> for Quantity<U> {
    type Output = Self;

    fn rem(self, rhs: f64) -> Self {
        Self::from_standard(self.0 % rhs)
    }
}

/// Compares the standard-unit magnitude against a bare `f64`.
impl<U: Unit> PartialEq<f64> for Quantity<U> {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl<U: Unit> PartialOrd<f64> for Quantity<U> {
    fn partial_cmp(&self, other: &f64) -> Option<core::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

// ─────────────────────────────────────────────
// Serde: plain f64 on the wire
// ─────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::from_standard)
    }
}

/// Serde adapter storing a quantity as `{ "value": ..., "unit": "..." }`.
///
/// The plain `Serialize`/`Deserialize` impls treat a quantity as a bare
/// `f64` in the standard unit, which is compact but loses the unit on the
/// wire. Annotating a field with `#[serde(with = "metron_core::serde_with_unit")]`
/// writes the standard abbreviation next to the value and, on read, accepts
/// any recognized spelling and converts.
///
/// ```rust
/// use metron_core::kinds::energy::Energy;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Reading {
///     #[serde(with = "metron_core::serde_with_unit")]
///     energy: Energy,
/// }
///
/// let parsed: Reading = serde_json::from_str(r#"{"energy":{"value":2.5,"unit":"kWh"}}"#).unwrap();
/// assert_eq!(parsed.energy.value(), 9_000_000.0);
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    #[cfg(not(feature = "std"))]
    use alloc::string::String;
    use core::fmt;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes as a two-field struct, `value` in the standard unit and
    /// `unit` as the standard abbreviation.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", U::STANDARD.abbreviation())?;
        state.end()
    }

    /// Deserializes from `{ "value": ..., "unit": "..." }`, converting from
    /// whatever recognized unit the document names. A missing `unit` field
    /// means the value is already in the standard unit.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map with `value` and `unit` fields")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut value: Option<f64> = None;
                let mut unit: Option<U> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            let spelling: String = map.next_value()?;
                            unit = Some(U::parse(&spelling).map_err(de::Error::custom)?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let unit = unit.unwrap_or(U::STANDARD);
                Ok(Quantity::new(value, unit))
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor(PhantomData))
    }
}
