//! Minimal end-to-end example: convert a length and derive a speed (length / time).

use metron::{Length, LengthUnit, Speed, SpeedUnit, Time, TimeUnit};

fn main() {
    let marathon = Length::new(42.195, LengthUnit::Kilometer);
    assert!((marathon.value_in(LengthUnit::Mile) - 26.218_757).abs() < 1e-6);

    let d = Length::new(1_000.0, LengthUnit::Kilometer);
    let t = Time::new(100.0, TimeUnit::Second);
    let v: Speed = d / t;
    assert!((v.value_in(SpeedUnit::MeterPerSecond) - 10_000.0).abs() < 1e-12);

    println!("{} is {}", marathon.print(), marathon.print_in(LengthUnit::Mile));
    println!("{} / {} = {}", d.print_in(LengthUnit::Kilometer), t.print(), v.print());
}
