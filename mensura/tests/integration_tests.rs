//! Integration-level smoke tests for the `mensura` facade crate.

use mensura::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn smoke_test_distance() {
    let km = Kilometers::new(1.0);
    let m: Meters = km.to();
    assert_eq!(m.value(), 1000.0);
}

#[test]
fn smoke_test_mass() {
    let kg = Kilograms::new(1000.0);
    let g: Grams = kg.to();
    assert_eq!(g.value(), 1_000_000.0);
}

#[test]
fn smoke_test_area() {
    let km2 = SquareKilometers::new(1.0);
    let m2: SquareMeters = km2.to();
    assert_eq!(m2.value(), 1_000_000.0);
}

#[test]
fn international_foot_is_exact() {
    // 1 ft = 0.3048 m by definition, so 1250 ft is exactly 381 m.
    let ft = Feet::new(1250.0);
    let m: Meters = ft.to();
    assert_eq!(m.value(), 381.0);
    assert!(ft == Meters::new(381.0));
}

#[test]
fn surveying_ladder() {
    let mi = Miles::new(1.0);
    let fur: Furlongs = mi.to();
    assert_eq!(fur.value(), 8.0);

    let ch: Chains = fur.to();
    assert_eq!(ch.value(), 80.0);

    let li: Links = Chains::new(1.0).to();
    assert_eq!(li.value(), 100.0);
}

#[test]
fn nautical_run() {
    // An Admiralty mile is 6080 ft, i.e. 1853.184 m.
    let nmi = NauticalMiles::new(10.0);
    let m: Meters = nmi.to();
    assert_relative_eq!(m.value(), 18_531.84, max_relative = 1e-12);

    let cb: Cables = NauticalMiles::new(1.0).to();
    assert_abs_diff_eq!(cb.value(), 10.0, epsilon = 1e-12);
}

#[test]
fn proxima_centauri_distance() {
    // Proxima Centauri is about 4.24 light years away.
    let distance_ly = LightYears::new(4.24);
    let distance_au: AstronomicalUnits = distance_ly.to();

    // Should be about 268,000 AU.
    assert_relative_eq!(distance_au.value(), 268_000.0, max_relative = 0.01);
}

#[test]
fn parsec_matches_its_definition() {
    // 1 pc = 648000/π au; the catalogue stores the conventional 15-digit
    // metre figure, which sits ~8e-12 (relative) from the exact definition.
    let pc = Parsecs::new(1.0);
    let au: AstronomicalUnits = pc.to();
    let expected = 648_000.0 / core::f64::consts::PI;
    assert_relative_eq!(au.value(), expected, max_relative = 1e-10);
}

#[test]
fn quantity_conversion_chain() {
    // Converting through an intermediate unit matches the direct conversion.
    let au = AstronomicalUnits::new(1.0);
    let km: Kilometers = au.to();
    let m: Meters = km.to();

    let m_direct: Meters = au.to();
    assert_abs_diff_eq!(m.value(), m_direct.value(), epsilon = 1e-3);
}

#[test]
fn unit_cast_identity_and_rescale() {
    let m = Meters::new(2.0);
    let same: Meters = unit_cast(m);
    assert_eq!(same.value(), 2.0);

    let cm: Centimeters = unit_cast(m);
    assert_eq!(cm.value(), 200.0);
}

#[test]
fn unit_cast_changes_representation() {
    let m_int = Quantity::<Meter, i64>::new(1000);
    let km: Kilometers = unit_cast(m_int);
    assert_eq!(km.value(), 1.0);

    let back: Quantity<Meter, i32> = unit_cast(km);
    assert_eq!(back.value(), 1000);
}

#[test]
fn unit_cast_truncates_whole_integer_units() {
    let m = Quantity::<Meter, i64>::new(999);
    let km: Quantity<Kilometer, i64> = unit_cast(m);
    assert_eq!(km.value(), 0);
}

#[test]
fn unit_cast_extracts_raw_scalars() {
    let km = Kilometers::new(2.7);
    let raw: f64 = unit_cast(km);
    assert_eq!(raw, 2.7);

    let truncated: i32 = unit_cast(km);
    assert_eq!(truncated, 2);
}

#[test]
fn quantity_basic_arithmetic() {
    let a = Meters::new(10.0);
    let b = Meters::new(5.0);

    assert_eq!((a + b).value(), 15.0);
    assert_eq!((a - b).value(), 5.0);
    assert_eq!((a * 2.0_f64).value(), 20.0);
    assert_eq!((a / 2.0_f64).value(), 5.0);
}

#[test]
fn cross_unit_arithmetic_lands_on_common_scale() {
    // m + km counts in metres; convert back to name the result.
    let sum: Kilometers = (Meters::new(500.0) + Kilometers::new(1.0)).to();
    assert_eq!(sum.value(), 1.5);

    let diff: Meters = (Kilometers::new(1.0) - Meters::new(250.0)).to();
    assert_eq!(diff.value(), 750.0);
}

#[test]
fn remainder_wraps_into_the_smaller_unit() {
    let rem: Meters = (Meters::new(2531.0) % Kilometers::new(1.0)).to();
    assert_eq!(rem.value(), 531.0);

    let checked = Meters::new(2531.0).checked_rem(Kilometers::new(0.0));
    assert_eq!(checked.unwrap_err(), DomainError::ZeroModulus);
}

#[test]
fn relational_operators_across_scales() {
    let m = Meters::new(1.0);
    let nm = Nanometers::new(1_000_000_000.0);

    assert!(m == nm);
    assert!(m <= nm);
    assert!(m >= nm);
    assert!(!(m < nm));
    assert!(!(m > nm));
    assert!(!(m != nm));

    assert!(m < Nanometers::new(1_000_000_001.0));
    assert!(m > Nanometers::new(999_999_999.0));
}

#[test]
fn integer_quantities_compare_exactly() {
    let m = Quantity::<Meter, i64>::new(1);
    let nm = Quantity::<Nanometer, i64>::new(1_000_000_000);
    assert!(m == nm);
    assert!(Quantity::<Meter, i64>::new(2) > nm);
}

#[test]
fn fuzzy_comparison_is_opt_in() {
    let a = Meters::new(1.0);
    let b = Meters::new(1.0 + 1e-12);

    // The operators stay exact; unit_compare absorbs the noise.
    assert!(a != b);
    assert!(unit_compare_default(a.value(), b.value()));
    assert!(!unit_compare(a.value(), b.value(), 0.0, f64::EPSILON));
}

#[test]
fn display_appends_the_symbol() {
    assert_eq!(format!("{}", Kilometers::new(1.0)), "1km");
    assert_eq!(format!("{}", Meters::new(42.5)), "42.5m");
    assert_eq!(format!("{}", Quantity::<Meter, i64>::new(-7)), "-7m");
    assert_eq!(format!("{}", Kilograms::new(2.5)), "2.5kg");
    assert_eq!(format!("{}", SquareMeters::new(3.0)), "3m²");
}

#[test]
fn distance_symbols() {
    assert_eq!(Nanometer::SYMBOL, "nm");
    assert_eq!(Micrometer::SYMBOL, "um");
    assert_eq!(Millimeter::SYMBOL, "mm");
    assert_eq!(Centimeter::SYMBOL, "cm");
    assert_eq!(Decimeter::SYMBOL, "dm");
    assert_eq!(Meter::SYMBOL, "m");
    assert_eq!(Kilometer::SYMBOL, "km");
    assert_eq!(Thou::SYMBOL, "th");
    assert_eq!(Inch::SYMBOL, "in");
    assert_eq!(Link::SYMBOL, "li");
    assert_eq!(Foot::SYMBOL, "ft");
    assert_eq!(Yard::SYMBOL, "yd");
    assert_eq!(Rod::SYMBOL, "rd");
    assert_eq!(Chain::SYMBOL, "ch");
    assert_eq!(Furlong::SYMBOL, "fur");
    assert_eq!(Mile::SYMBOL, "mi");
    assert_eq!(League::SYMBOL, "lea");
    assert_eq!(Fathom::SYMBOL, "ftm");
    assert_eq!(Cable::SYMBOL, "cb");
    assert_eq!(NauticalMile::SYMBOL, "nmi");
    assert_eq!(EarthRadius::SYMBOL, "R");
    assert_eq!(LunarDistance::SYMBOL, "LD");
    assert_eq!(AstronomicalUnit::SYMBOL, "AU");
    assert_eq!(LightYear::SYMBOL, "ly");
    assert_eq!(Parsec::SYMBOL, "pc");
}

#[test]
fn mass_symbols() {
    assert_eq!(Picogram::SYMBOL, "pg");
    assert_eq!(Nanogram::SYMBOL, "ng");
    assert_eq!(Microgram::SYMBOL, "ug");
    assert_eq!(Milligram::SYMBOL, "mg");
    assert_eq!(Gram::SYMBOL, "g");
    assert_eq!(Kilogram::SYMBOL, "kg");
    assert_eq!(Grain::SYMBOL, "gr");
    assert_eq!(Dram::SYMBOL, "dr");
    assert_eq!(Ounce::SYMBOL, "oz");
    assert_eq!(Pound::SYMBOL, "lb");
    assert_eq!(Hundredweight::SYMBOL, "cwt");
    assert_eq!(LongHundredweight::SYMBOL, "long_cwt");
    assert_eq!(ShortTon::SYMBOL, "ton");
    assert_eq!(LongTon::SYMBOL, "long_ton");
}

#[test]
fn area_symbols() {
    assert_eq!(SquareMeter::SYMBOL, "m²");
    assert_eq!(SquareKilometer::SYMBOL, "km²");
    assert_eq!(SquareCentimeter::SYMBOL, "cm²");
    assert_eq!(SquareMillimeter::SYMBOL, "mm²");
    assert_eq!(SquareInch::SYMBOL, "in²");
    assert_eq!(SquareFoot::SYMBOL, "ft²");
    assert_eq!(SquareYard::SYMBOL, "yd²");
    assert_eq!(SquareMile::SYMBOL, "mi²");
}

#[test]
fn avoirdupois_ladder() {
    let lb = Pounds::new(1.0);
    let oz: Ounces = lb.to();
    assert_eq!(oz.value(), 16.0);

    let gr: Grains = lb.to();
    assert_eq!(gr.value(), 7000.0);

    let kg: Kilograms = lb.to();
    assert_relative_eq!(kg.value(), 0.453_592_37, max_relative = 1e-12);

    let g: Grams = Ounces::new(1.0).to();
    assert_relative_eq!(g.value(), 28.349_523_125, max_relative = 1e-12);
}

#[test]
fn integer_mass_stays_exact() {
    let lb = Quantity::<Pound, i64>::new(3);
    let oz: Quantity<Ounce, i64> = lb.to();
    assert_eq!(oz.value(), 48);
}

#[test]
fn distance_product_makes_an_area() {
    let area = Meters::new(2.0) * Meters::new(2.0);
    let m2: SquareMeters = area.to();
    assert_eq!(m2.value(), 4.0);

    // The product counts in the left operand's unit.
    let mixed = Meters::new(2.0) * Feet::new(1.0);
    let m2: SquareMeters = mixed.to();
    assert_relative_eq!(m2.value(), 2.0 * 0.3048, max_relative = 1e-12);
}

#[test]
fn sum_of_products() {
    let total = Meters::new(2.0) * Meters::new(2.0) + Centimeters::new(4.0) * Centimeters::new(4.0);
    let m2: SquareMeters = total.to();
    assert_relative_eq!(m2.value(), 4.0016, max_relative = 1e-12);
}

#[test]
fn square_mile_in_square_feet() {
    let mi2 = SquareMiles::new(1.0);
    let ft2: SquareFeet = mi2.to();
    assert_eq!(ft2.value(), 27_878_400.0);
}

#[test]
fn literal_suffixes() {
    let total: Kilometers = (2.5.kilometers() + 300.0.meters()).to();
    assert_eq!(total.value(), 2.8);

    let dose = 150_i64.milligrams();
    assert_eq!(dose.value(), 150);

    let oz: Ounces = 3.0.pounds().to();
    assert_eq!(oz.value(), 48.0);
}

#[test]
fn unit_constants_have_value_one() {
    assert_eq!(M.value(), 1.0);
    assert_eq!(KM.value(), 1.0);
    assert_eq!(FT.value(), 1.0);
    assert_eq!(MI.value(), 1.0);
    assert_eq!(NMI.value(), 1.0);
    assert_eq!(AU.value(), 1.0);
    assert_eq!(LY.value(), 1.0);
    assert_eq!(PC.value(), 1.0);
    assert_eq!(G.value(), 1.0);
    assert_eq!(KG.value(), 1.0);
    assert_eq!(LB.value(), 1.0);
    assert_eq!(M2.value(), 1.0);
}

#[test]
fn constants_can_be_multiplied() {
    let distance = 4.24_f64 * LY;
    assert_eq!(distance.value(), 4.24);

    let load = 2.5_f64 * KG;
    assert_eq!(load.value(), 2.5);
}

#[test]
fn macro_generated_conversions() {
    // Meter -> AstronomicalUnit (the AU is exactly 149,597,870,700 m).
    let m = Meters::new(149_597_870_700.0);
    let au: AstronomicalUnits = m.into();
    assert_relative_eq!(au.value(), 1.0, max_relative = 1e-12);

    // Thou -> Inch across the generated mesh.
    let th = Thous::new(1000.0);
    let inch: Inches = th.into();
    assert_abs_diff_eq!(inch.value(), 1.0, epsilon = 1e-12);
}

#[test]
fn from_impls_change_representation_too() {
    let m_int = Quantity::<Meter, i64>::new(1500);
    let km: Kilometers = m_int.into();
    assert_eq!(km.value(), 1.5);
}

#[test]
fn generic_code_can_bound_on_unit_value() {
    fn raw_count<T: UnitValue>(v: T) -> T::Rep {
        v.count()
    }

    assert_eq!(raw_count(Meters::new(2.5)), 2.5);
    assert_eq!(raw_count(Quantity::<Kilogram, i64>::new(7)), 7);
}

#[test]
fn increment_and_decrement_step_by_one_unit() {
    let mut q = Kilometers::new(1.0);
    q.increment();
    assert_eq!(q.value(), 2.0);
    q.decrement();
    q.decrement();
    assert_eq!(q.value(), 0.0);
}

#[test]
fn quantity_negation_and_abs() {
    let neg = -Meters::new(45.0);
    assert_eq!(neg.value(), -45.0);
    assert_eq!(neg.abs().value(), 45.0);
}

#[test]
fn mixed_representation_arithmetic_promotes() {
    let m_int = Quantity::<Meter, i64>::new(500);
    let km = Kilometers::new(1.0);

    let sum: Kilometers = (m_int + km).to();
    assert_eq!(sum.value(), 1.5);
}
