//! Literal-suffix example: tag plain numbers with a unit, integers included.

use mensura::{DistanceLiterals, Kilometers, MassLiterals, Milligram, Ounces, Quantity};

fn main() {
    let leg_one = 2.5.kilometers();
    let leg_two = 300.0.meters();
    let route: Kilometers = (leg_one + leg_two).to();
    assert_eq!(route.value(), 2.8);
    println!("route: {}", route);

    // Integer representations stay integer.
    let dose: Quantity<Milligram, i64> = 150_i64.milligrams();
    assert_eq!(dose.value(), 150);
    println!("dose: {}", dose);

    // Avoirdupois ratios are exact: 3 lb is exactly 48 oz.
    let oz: Ounces = 3.0.pounds().to();
    assert_eq!(oz.value(), 48.0);
}
