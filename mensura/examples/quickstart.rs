//! Minimal end-to-end example: convert, mix units of one dimension, print.

use mensura::{Centimeters, Feet, Kilometers, Meter, Meters, SquareMeters};

fn main() {
    let d = Kilometers::new(1.25);
    let m = d.to::<Meter>();
    assert_eq!(m.value(), 1250.0);

    // Mixed-unit arithmetic lands on the common scale; name it to print.
    let total: Meters = (Kilometers::new(1.0) + Meters::new(500.0)).to();
    println!("{} + 500m = {}", Kilometers::new(1.0), total);

    // The international foot is an exact ratio: 1250 ft is exactly 381 m.
    assert!(Feet::new(1250.0) == Meters::new(381.0));

    // Two distances multiply into an area.
    let floor: SquareMeters = (Meters::new(4.0) * Centimeters::new(250.0)).to();
    println!("floor area: {}", floor);
}
