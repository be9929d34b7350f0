//! Rendering quantities as text: plain printing, JSON, XML and YAML.
//!
//! These formatters are independent of serde; they are always available and
//! emit small self-describing fragments with the value and unit abbreviation.
//!
//! Run with: cargo run --example serialization

use metron::{Energy, EnergyUnit, Time, TimeUnit};

fn main() {
    println!("=== Text Serialization ===\n");

    let session = Time::new(90.0, TimeUnit::Second);

    println!("1. Plain printing:");
    println!("   default unit:    {}", session.print());
    println!("   chosen unit:     {}", session.print_in(TimeUnit::Minute));
    println!(
        "   with precision:  {}",
        session.print_with_precision(TimeUnit::Minute, 3)
    );
    println!();

    println!("2. Display goes through the same path:");
    println!("   {session}");
    println!();

    let meal = Energy::new(650.0, EnergyUnit::Kilocalorie);

    println!("3. Structured fragments:");
    println!("   json: {}", meal.json());
    println!("   xml:  {}", meal.xml());
    println!("   yaml: {}", meal.yaml());
    println!();

    println!("4. Structured fragments in a chosen unit:");
    println!("   json: {}", meal.json_in(EnergyUnit::Kilocalorie));
    println!("   xml:  {}", meal.xml_in(EnergyUnit::Kilojoule));
    println!(
        "   yaml: {}",
        meal.yaml_with_precision(EnergyUnit::KilowattHour, 4)
    );
}
