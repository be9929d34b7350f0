//! Example demonstrating the serde_with_unit helper module.
//!
//! By default a quantity serializes as its bare standard-unit `f64`. Fields
//! annotated with #[serde(with = "metron::serde_with_unit")] serialize as a
//! tagged `{value, unit}` object instead, and accept any registered spelling
//! of the kind's units when deserializing.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use metron::{Energy, Length, Power, Time};
    use serde::{Deserialize, Serialize};

    println!("=== Using serde_with_unit ===\n");

    println!("1. Per-field control:\n");

    #[derive(Serialize, Deserialize, Debug)]
    struct ChargeSession {
        // Tagged form carries the unit alongside the value
        #[serde(with = "metron::serde_with_unit")]
        energy: Energy,

        #[serde(with = "metron::serde_with_unit")]
        duration: Time,

        // Bare f64 in the standard unit (watts)
        peak_power: Power,
    }

    let session = ChargeSession {
        energy: Energy::new(2.5, metron::EnergyUnit::KilowattHour),
        duration: Time::new(40.0, metron::TimeUnit::Minute),
        peak_power: Power::new(7.4, metron::PowerUnit::Kilowatt),
    };

    let json = serde_json::to_string_pretty(&session).unwrap();
    println!("{json}\n");

    println!("2. Deserializing converts spelled units:\n");

    #[derive(Serialize, Deserialize, Debug)]
    struct Route {
        #[serde(with = "metron::serde_with_unit")]
        distance: Length,
    }

    let route: Route = serde_json::from_str(r#"{"distance":{"value":26.2,"unit":"miles"}}"#).unwrap();
    println!("   26.2 miles is {}", route.distance);

    println!("\n3. The unit field is optional (standard unit assumed):\n");
    let route: Route = serde_json::from_str(r#"{"distance":{"value":5000.0}}"#).unwrap();
    println!("   {}", route.distance);

    println!("\n4. Unknown spellings are rejected:\n");
    match serde_json::from_str::<Route>(r#"{"distance":{"value":3.0,"unit":"parsec"}}"#) {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   rejected: {e}"),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
