//! Text serializers for quantities.
//!
//! Each serializer comes in three forms: the default (standard unit, shortest
//! round-trip float rendering), an `_in` form taking an explicit unit, and a
//! `_with_precision` form taking an explicit unit and a fixed number of
//! decimal places.
//!
//! The default float rendering is Rust's `{:?}` for `f64`, which always keeps
//! a decimal point (`1.0`, not `1`) and prints the shortest string that reads
//! back to the same value.

#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
};

use core::fmt;

use crate::quantity::Quantity;
use crate::unit::Unit;

impl<U: Unit> Quantity<U> {
    /// Renders as `<number> <abbreviation>` in the standard unit.
    pub fn print(self) -> String {
        self.to_string()
    }

    /// Renders as `<number> <abbreviation>` in `unit`.
    pub fn print_in(self, unit: U) -> String {
        format!("{:?} {}", self.value_in(unit), unit.abbreviation())
    }

    /// Renders as `<number> <abbreviation>` in `unit` with `precision`
    /// decimal places.
    pub fn print_with_precision(self, unit: U, precision: usize) -> String {
        format!(
            "{:.*} {}",
            precision,
            self.value_in(unit),
            unit.abbreviation()
        )
    }

    /// Renders as `{"value":<number>,"unit":"<abbreviation>"}` in the
    /// standard unit.
    pub fn json(self) -> String {
        self.json_in(U::STANDARD)
    }

    /// Renders as `{"value":<number>,"unit":"<abbreviation>"}` in `unit`.
    pub fn json_in(self, unit: U) -> String {
        format!(
            r#"{{"value":{:?},"unit":"{}"}}"#,
            self.value_in(unit),
            unit.abbreviation()
        )
    }

    /// Renders as JSON in `unit` with `precision` decimal places.
    pub fn json_with_precision(self, unit: U, precision: usize) -> String {
        format!(
            r#"{{"value":{:.*},"unit":"{}"}}"#,
            precision,
            self.value_in(unit),
            unit.abbreviation()
        )
    }

    /// Renders as `<value><number></value><unit><abbreviation></unit>` in the
    /// standard unit.
    pub fn xml(self) -> String {
        self.xml_in(U::STANDARD)
    }

    /// Renders as `<value><number></value><unit><abbreviation></unit>` in
    /// `unit`.
    pub fn xml_in(self, unit: U) -> String {
        format!(
            "<value>{:?}</value><unit>{}</unit>",
            self.value_in(unit),
            unit.abbreviation()
        )
    }

    /// Renders as XML in `unit` with `precision` decimal places.
    pub fn xml_with_precision(self, unit: U, precision: usize) -> String {
        format!(
            "<value>{:.*}</value><unit>{}</unit>",
            precision,
            self.value_in(unit),
            unit.abbreviation()
        )
    }

    /// Renders as `{value:<number>,unit:"<abbreviation>"}` in the standard
    /// unit.
    pub fn yaml(self) -> String {
        self.yaml_in(U::STANDARD)
    }

    /// Renders as `{value:<number>,unit:"<abbreviation>"}` in `unit`.
    pub fn yaml_in(self, unit: U) -> String {
        format!(
            r#"{{value:{:?},unit:"{}"}}"#,
            self.value_in(unit),
            unit.abbreviation()
        )
    }

    /// Renders as YAML in `unit` with `precision` decimal places.
    pub fn yaml_with_precision(self, unit: U, precision: usize) -> String {
        format!(
            r#"{{value:{:.*},unit:"{}"}}"#,
            precision,
            self.value_in(unit),
            unit.abbreviation()
        )
    }
}

/// Formats as `<number> <abbreviation>` in the standard unit, matching
/// [`Quantity::print`].
impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.value(), U::STANDARD.abbreviation())
    }
}
