//! Dimensional analysis over the seven SI base quantities.
//!
//! Every unit kind in this crate carries a [`Dimensions`] value recording the
//! exponent of each SI base quantity. The exponents are small integers, so the
//! whole descriptor is `const`-constructible and `const`-comparable, which lets
//! derived-kind relations be checked at compile time:
//!
//! ```
//! use metron_core::Dimensions;
//!
//! const SPEED: Dimensions = Dimensions::LENGTH.divide(Dimensions::TIME);
//! const _: () = assert!(SPEED.multiply(Dimensions::TIME).equals(Dimensions::LENGTH));
//! ```

use core::fmt;

/// Exponents of the seven SI base quantities, in the conventional order:
/// time (s), length (m), mass (kg), electric current (A), thermodynamic
/// temperature (K), amount of substance (mol), luminous intensity (cd).
///
/// Two kinds are commensurable exactly when their `Dimensions` are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Exponent of time (second).
    pub time: i8,
    /// Exponent of length (metre).
    pub length: i8,
    /// Exponent of mass (kilogram).
    pub mass: i8,
    /// Exponent of electric current (ampere).
    pub current: i8,
    /// Exponent of thermodynamic temperature (kelvin).
    pub temperature: i8,
    /// Exponent of amount of substance (mole).
    pub amount: i8,
    /// Exponent of luminous intensity (candela).
    pub luminosity: i8,
}

impl Dimensions {
    /// The dimensionless descriptor, with every exponent zero.
    pub const NONE: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    /// Time, `T`.
    pub const TIME: Self = Self::new(1, 0, 0, 0, 0, 0, 0);
    /// Length, `L`.
    pub const LENGTH: Self = Self::new(0, 1, 0, 0, 0, 0, 0);
    /// Mass, `M`.
    pub const MASS: Self = Self::new(0, 0, 1, 0, 0, 0, 0);

    /// Frequency, `T⁻¹`.
    pub const FREQUENCY: Self = Self::TIME.recip();
    /// Area, `L²`.
    pub const AREA: Self = Self::LENGTH.multiply(Self::LENGTH);
    /// Volume, `L³`.
    pub const VOLUME: Self = Self::AREA.multiply(Self::LENGTH);
    /// Speed, `L·T⁻¹`.
    pub const SPEED: Self = Self::LENGTH.divide(Self::TIME);
    /// Acceleration, `L·T⁻²`.
    pub const ACCELERATION: Self = Self::SPEED.divide(Self::TIME);
    /// Force, `M·L·T⁻²`.
    pub const FORCE: Self = Self::MASS.multiply(Self::ACCELERATION);
    /// Energy, `M·L²·T⁻²`.
    pub const ENERGY: Self = Self::FORCE.multiply(Self::LENGTH);
    /// Power, `M·L²·T⁻³`.
    pub const POWER: Self = Self::ENERGY.divide(Self::TIME);
    /// Mass rate, `M·T⁻¹`.
    pub const MASS_RATE: Self = Self::MASS.divide(Self::TIME);

    /// Builds a descriptor from its seven exponents.
    pub const fn new(
        time: i8,
        length: i8,
        mass: i8,
        current: i8,
        temperature: i8,
        amount: i8,
        luminosity: i8,
    ) -> Self {
        Self {
            time,
            length,
            mass,
            current,
            temperature,
            amount,
            luminosity,
        }
    }

    /// Dimensions of the product of two quantities: exponents add.
    pub const fn multiply(self, other: Self) -> Self {
        Self {
            time: self.time + other.time,
            length: self.length + other.length,
            mass: self.mass + other.mass,
            current: self.current + other.current,
            temperature: self.temperature + other.temperature,
            amount: self.amount + other.amount,
            luminosity: self.luminosity + other.luminosity,
        }
    }

    /// Dimensions of the quotient of two quantities: exponents subtract.
    pub const fn divide(self, other: Self) -> Self {
        self.multiply(other.recip())
    }

    /// Dimensions of the reciprocal: exponents negate.
    pub const fn recip(self) -> Self {
        Self {
            time: -self.time,
            length: -self.length,
            mass: -self.mass,
            current: -self.current,
            temperature: -self.temperature,
            amount: -self.amount,
            luminosity: -self.luminosity,
        }
    }

    /// `const`-context equality. `PartialEq` is not usable in `const`
    /// assertions, so relation macros call this instead.
    pub const fn equals(self, other: Self) -> bool {
        self.time == other.time
            && self.length == other.length
            && self.mass == other.mass
            && self.current == other.current
            && self.temperature == other.temperature
            && self.amount == other.amount
            && self.luminosity == other.luminosity
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(self) -> bool {
        self.equals(Self::NONE)
    }
}

impl fmt::Display for Dimensions {
    /// Writes the descriptor as a product of base symbols with exponents,
    /// e.g. `kg·m²·s⁻²` for energy, or `1` when dimensionless.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SYMBOLS: [&str; 7] = ["kg", "m", "s", "A", "K", "mol", "cd"];
        let exponents = [
            self.mass,
            self.length,
            self.time,
            self.current,
            self.temperature,
            self.amount,
            self.luminosity,
        ];

        let mut wrote = false;
        for (symbol, exp) in SYMBOLS.iter().zip(exponents) {
            if exp == 0 {
                continue;
            }
            if wrote {
                f.write_str("·")?;
            }
            f.write_str(symbol)?;
            if exp != 1 {
                write_superscript(f, exp)?;
            }
            wrote = true;
        }
        if !wrote {
            f.write_str("1")?;
        }
        Ok(())
    }
}

fn write_superscript(f: &mut fmt::Formatter<'_>, exp: i8) -> fmt::Result {
    const DIGITS: [&str; 10] = ["⁰", "¹", "²", "³", "⁴", "⁵", "⁶", "⁷", "⁸", "⁹"];
    if exp < 0 {
        f.write_str("⁻")?;
    }
    let magnitude = exp.unsigned_abs();
    if magnitude >= 10 {
        f.write_str(DIGITS[(magnitude / 10) as usize])?;
    }
    f.write_str(DIGITS[(magnitude % 10) as usize])
}
