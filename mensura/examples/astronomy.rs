//! Astronomy-flavored example using the long end of the distance catalogue.

use mensura::{AstronomicalUnits, EarthRadii, Kilometers, LightYears, LunarDistances, Parsecs};

fn main() {
    // Proxima Centauri is about 4.24 light years away.
    let proxima = LightYears::new(4.24);
    let au: AstronomicalUnits = proxima.to();
    assert!(au.value() > 200_000.0);
    println!("Proxima Centauri: {} = {}", proxima, au);

    // 1 pc = 648000/π au; the catalogue carries the conventional metre figure.
    let pc = Parsecs::new(1.0);
    let in_au: AstronomicalUnits = pc.to();
    let defined = 648_000.0 / core::f64::consts::PI;
    assert!((in_au.value() - defined).abs() < 1e-3);

    // Nearby yardsticks.
    let moon = LunarDistances::new(1.0);
    let km: Kilometers = moon.to();
    assert_eq!(km.value(), 384_402.0);

    let r: EarthRadii = km.to();
    println!("lunar distance: {} = {} = {:.2}R", moon, km, r.value());
}
