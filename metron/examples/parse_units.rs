//! Resolving unit spellings at runtime.
//!
//! Every unit enum implements `FromStr` over its registered spellings:
//! abbreviations ("km"), singular names ("kilometer") and plural names
//! ("kilometers"). Lookup tries an exact match first and falls back to an
//! ASCII-case-insensitive pass, so "KM" resolves but "mW" and "MW" keep
//! their distinct meanings.
//!
//! Run with: cargo run --example parse_units

use metron::{Length, LengthUnit, PowerUnit, TimeUnit, Unit};

fn main() {
    println!("=== Parsing Unit Spellings ===\n");

    println!("1. Abbreviations and names:");
    for spelling in ["km", "kilometer", "kilometres", "mi"] {
        match spelling.parse::<LengthUnit>() {
            Ok(unit) => println!("   {spelling:12} -> {unit}"),
            Err(e) => println!("   {spelling:12} -> {e}"),
        }
    }
    println!();

    println!("2. Case-sensitive units survive the fallback:");
    let milli = "mW".parse::<PowerUnit>().unwrap();
    let mega = "MW".parse::<PowerUnit>().unwrap();
    assert_ne!(milli, mega);
    println!("   mW -> {milli:?}, MW -> {mega:?}");
    println!();

    println!("3. Unknown spellings report what failed:");
    let err = "fortnight".parse::<TimeUnit>().unwrap_err();
    println!("   {err}");
    println!();

    println!("4. Parsing a \"value unit\" pair from user input:");
    let input = "26.2 miles";
    let (number, unit) = input.split_once(' ').expect("expected `<value> <unit>`");
    let value: f64 = number.parse().expect("not a number");
    let unit: LengthUnit = unit.parse().expect("not a length unit");
    let distance = Length::new(value, unit);
    println!(
        "   \"{input}\" -> {}",
        distance.print_with_precision(LengthUnit::Kilometer, 3)
    );
    println!();

    println!("5. Every spelling a kind accepts:");
    for unit in LengthUnit::ALL {
        println!("   {:5} {:?}", unit.abbreviation(), unit.spellings());
    }
}
