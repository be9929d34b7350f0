//! Deriving one kind of quantity from others through the physical relations.
//!
//! Every relation is checked at compile time against the dimensional
//! exponents of the kinds involved, so `Length / Time` can only ever
//! produce a `Speed`.
//!
//! Run with: cargo run --example relations

use metron::*;

fn main() {
    println!("=== Physical Relations ===\n");

    // Speed = Length / Time
    println!("1. Speed from distance and time:");
    let commute = Length::new(30.0, LengthUnit::Kilometer);
    let duration = Time::new(25.0, TimeUnit::Minute);
    let pace: Speed = commute / duration;
    println!(
        "   {} in {} is {}",
        commute.print_in(LengthUnit::Kilometer),
        duration.print_in(TimeUnit::Minute),
        pace.print_with_precision(SpeedUnit::KilometerPerHour, 1)
    );
    println!();

    // Acceleration = Speed / Time
    println!("2. Braking from 100 km/h to rest in 4 s:");
    let v0 = Speed::new(100.0, SpeedUnit::KilometerPerHour);
    let stop = Time::new(4.0, TimeUnit::Second);
    let decel: Acceleration = v0 / stop;
    println!(
        "   {} ({})",
        decel.print_with_precision(AccelerationUnit::MeterPerSquareSecond, 2),
        decel.print_with_precision(AccelerationUnit::StandardGravity, 2)
    );
    println!();

    // Force = Mass * Acceleration
    println!("3. Weight of a 70 kg person under standard gravity:");
    let person = Mass::new(70.0, MassUnit::Kilogram);
    let weight: Force = person * G0;
    println!("   {}", weight.print_with_precision(ForceUnit::Newton, 1));
    println!();

    // Energy = Force * Length, Power = Energy / Time
    println!("4. Work and power lifting 20 kg up 3 m in 2 s:");
    let load = Mass::new(20.0, MassUnit::Kilogram);
    let lift: Force = load * G0;
    let height = Length::new(3.0, LengthUnit::Meter);
    let work: Energy = lift * height;
    let effort: Power = work / Time::new(2.0, TimeUnit::Second);
    println!(
        "   work {} at {}",
        work.print_with_precision(EnergyUnit::Joule, 1),
        effort.print_with_precision(PowerUnit::Watt, 1)
    );
    println!();

    // Energy = Power * Time
    println!("5. Energy drawn by a 2 kW kettle over 3 minutes:");
    let kettle = Power::new(2.0, PowerUnit::Kilowatt);
    let brew = Time::new(3.0, TimeUnit::Minute);
    let used: Energy = kettle * brew;
    println!(
        "   {}",
        used.print_with_precision(EnergyUnit::KilowattHour, 3)
    );
    println!();

    // Area = Length², Volume = Area * Length
    println!("6. Volume of a 4 m x 4 m room with a 2.5 m ceiling:");
    let side = Length::new(4.0, LengthUnit::Meter);
    let floor: Area = Area::of_square(side);
    let room: Volume = floor * Length::new(2.5, LengthUnit::Meter);
    println!(
        "   floor {} and volume {}",
        floor.print(),
        room.print_with_precision(VolumeUnit::CubicMeter, 1)
    );
    println!();

    // MassRate = Mass / Time, Frequency = MassRate / Mass
    println!("7. A pump moving 18 t/h, batched into 4 kg loads:");
    let flow: MassRate = Mass::new(18.0, MassUnit::Tonne) / Time::new(1.0, TimeUnit::Hour);
    let batches: Frequency = flow / Mass::new(4.0, MassUnit::Kilogram);
    println!(
        "   {} is {}",
        flow.print_with_precision(MassRateUnit::KilogramPerSecond, 1),
        batches.print_with_precision(FrequencyUnit::Hertz, 2)
    );
    println!();

    // Frequency <-> Time reciprocal pair
    println!("8. Period of a 50 Hz mains supply:");
    let mains = Frequency::new(50.0, FrequencyUnit::Hertz);
    println!("   {}", mains.period().print_in(TimeUnit::Millisecond));
}
