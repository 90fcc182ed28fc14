//! Mass units.
//!
//! The canonical scaling unit for this dimension is [`Gram`] (`Gram::NUM == 1`,
//! `Gram::DEN == 1`).
//!
//! This module aims for practical completeness while avoiding avoidable
//! precision loss:
//! - **SI grams**: prefix ladder from pico- to kilo-.
//! - **Avoirdupois units**: grain, dram, ounce, pound, hundredweights, tons,
//!   all exact rational multiples of the definition `1 lb = 0.45359237 kg`.
//!
//! ```rust
//! use mensura_core::mass::{Kilogram, Pounds};
//!
//! let lb = Pounds::new(1.0);
//! let kg = lb.to::<Kilogram>();
//! assert!((kg.value() - 0.45359237).abs() < 1e-12);
//! ```

use crate::{Dimension, Quantity, Unit};
use mensura_derive::Unit;

/// Dimension tag for mass.
pub enum Mass {}
impl Dimension for Mass {}

/// Marker trait for any [`Unit`] whose dimension is [`Mass`].
pub trait MassUnit: Unit<Dim = Mass> {}
impl<T: Unit<Dim = Mass>> MassUnit for T {}

/// Gram.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = Mass, num = 1)]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams = Quantity<Gram>;
/// One gram.
pub const G: Grams = Grams::new(1.0);

/// Helper macro to declare a gram-based SI mass unit.
///
/// Each invocation of this macro defines, for a given prefix on grams:
/// - a unit struct `$name` (e.g. `Kilogram`),
/// - a shorthand type alias `$alias` (e.g. `Kg`),
/// - a quantity type `$qty` (e.g. `Kilograms`), and
/// - a constant `$one` equal to `1.0` of that quantity.
///
/// The `$num`/`$den` arguments are the exact conversion factor to grams,
/// i.e. `1 $sym = $num/$den g`.
macro_rules! si_gram {
    ($name:ident, $sym:literal, $num:expr, $den:expr, $alias:ident, $qty:ident, $one:ident) => {
        #[doc = concat!("SI mass unit `", stringify!($name), "` with gram-based prefix (symbol `", $sym,"`).")]
        #[doc = concat!("By definition, `1 ", $sym, " = ", stringify!($num), "/", stringify!($den), " g`.")]
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
        #[unit(symbol = $sym, dimension = Mass, num = $num, den = $den)]
        pub struct $name;

        #[doc = concat!("Shorthand alias for [`", stringify!($name), "`]." )]
        pub type $alias = $name;

        #[doc = concat!("Quantity measured in ", stringify!($name), " (",$sym,").")]
        pub type $qty = Quantity<$alias>;

        #[doc = concat!("Constant equal to one ", stringify!($name), " (1 ",$sym,").")]
        pub const $one: $qty = $qty::new(1.0);
    };
}

// SI prefix ladder (gram-based)
si_gram!(Picogram, "pg", 1, 1_000_000_000_000, Pg, Picograms, PG);
si_gram!(Nanogram, "ng", 1, 1_000_000_000, Ng, Nanograms, NG);
si_gram!(Microgram, "ug", 1, 1_000_000, Ug, Micrograms, UG);
si_gram!(Milligram, "mg", 1, 1_000, Mg, Milligrams, MG);
si_gram!(Kilogram, "kg", 1_000, 1, Kg, Kilograms, KG);

// ─────────────────────────────────────────────────────────────────────────────
// Avoirdupois units
// ─────────────────────────────────────────────────────────────────────────────

/// Grain: `1 gr = 1/7000 lb` (exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "gr", dimension = Mass, num = 45_359_237, den = 100_000 * 7_000)]
pub struct Grain;
/// Shorthand type alias for [`Grain`].
pub type Gr = Grain;
/// Quantity measured in grains.
pub type Grains = Quantity<Gr>;
/// One grain.
pub const GR: Grains = Grains::new(1.0);

/// Avoirdupois dram: `1 dr = 1/256 lb` (exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dr", dimension = Mass, num = 45_359_237, den = 100_000 * 256)]
pub struct Dram;
/// Shorthand type alias for [`Dram`].
pub type Dr = Dram;
/// Quantity measured in drams.
pub type Drams = Quantity<Dr>;
/// One dram.
pub const DR: Drams = Drams::new(1.0);

/// Avoirdupois ounce: `1 oz = 1/16 lb` (exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "oz", dimension = Mass, num = 45_359_237, den = 100_000 * 16)]
pub struct Ounce;
/// Shorthand type alias for [`Ounce`].
pub type Oz = Ounce;
/// Quantity measured in ounces.
pub type Ounces = Quantity<Oz>;
/// One ounce.
pub const OZ: Ounces = Ounces::new(1.0);

/// Avoirdupois pound: `1 lb = 0.45359237 kg` (exact) == `453.59237 g`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", dimension = Mass, num = 45_359_237, den = 100_000)]
pub struct Pound;
/// Shorthand type alias for [`Pound`].
pub type Lb = Pound;
/// Quantity measured in pounds.
pub type Pounds = Quantity<Lb>;
/// One pound.
pub const LB: Pounds = Pounds::new(1.0);

/// Hundredweight (US customary): `100 lb` (exact given lb).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cwt", dimension = Mass, num = 100 * 45_359_237, den = 100_000)]
pub struct Hundredweight;
/// Shorthand type alias for [`Hundredweight`].
pub type Cwt = Hundredweight;
/// Quantity measured in hundredweights (US).
pub type Hundredweights = Quantity<Cwt>;
/// One hundredweight (US).
pub const CWT: Hundredweights = Hundredweights::new(1.0);

/// Long hundredweight (Imperial): `112 lb` (exact given lb).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "long_cwt", dimension = Mass, num = 112 * 45_359_237, den = 100_000)]
pub struct LongHundredweight;
/// Quantity measured in long hundredweights (UK).
pub type LongHundredweights = Quantity<LongHundredweight>;
/// One long hundredweight (UK).
pub const LONG_CWT: LongHundredweights = LongHundredweights::new(1.0);

/// Short ton (US customary): `2000 lb` (exact given lb).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ton", dimension = Mass, num = 2_000 * 45_359_237, den = 100_000)]
pub struct ShortTon;
/// Quantity measured in short tons (US).
pub type ShortTons = Quantity<ShortTon>;
/// One short ton (US).
pub const TON: ShortTons = ShortTons::new(1.0);

/// Long ton (Imperial): `2240 lb` (exact given lb).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "long_ton", dimension = Mass, num = 2_240 * 45_359_237, den = 100_000)]
pub struct LongTon;
/// Quantity measured in long tons (UK).
pub type LongTons = Quantity<LongTon>;
/// One long ton (UK).
pub const LONG_TON: LongTons = LongTons::new(1.0);

// Generate all bidirectional From implementations between mass units
crate::impl_unit_conversions!(
    Gram,
    Picogram,
    Nanogram,
    Microgram,
    Milligram,
    Kilogram,
    Grain,
    Dram,
    Ounce,
    Pound,
    Hundredweight,
    LongHundredweight,
    ShortTon,
    LongTon
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Ratio reduction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn derived_ratios_are_reduced() {
        // 45_359_237 = 7 * 6_479_891, so the grain numerator loses the 7.
        assert_eq!((Grain::NUM, Grain::DEN), (6_479_891, 100_000_000));
        assert_eq!((Dram::NUM, Dram::DEN), (45_359_237, 25_600_000));
        assert_eq!((Ounce::NUM, Ounce::DEN), (45_359_237, 1_600_000));
        assert_eq!((Hundredweight::NUM, Hundredweight::DEN), (45_359_237, 1_000));
        assert_eq!(
            (LongHundredweight::NUM, LongHundredweight::DEN),
            (317_514_659, 6_250)
        );
        assert_eq!((ShortTon::NUM, ShortTon::DEN), (45_359_237, 50));
        assert_eq!((LongTon::NUM, LongTon::DEN), (635_029_318, 625));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn gram_to_kilogram() {
        let g = Grams::new(1000.0);
        let kg = g.to::<Kilogram>();
        assert_abs_diff_eq!(kg.value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn kilogram_to_gram() {
        let kg = Kilograms::new(1.0);
        let g = kg.to::<Gram>();
        assert_abs_diff_eq!(g.value(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn milligram_to_gram() {
        let mg = Milligrams::new(2_500.0);
        assert_abs_diff_eq!(mg.to::<Gram>().value(), 2.5, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Avoirdupois chain against kilograms
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn avoirdupois_to_kilograms() {
        assert_relative_eq!(
            GR.to::<Kilogram>().value(),
            0.000_064_798_91,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            DR.to::<Kilogram>().value(),
            0.001_771_845_195_312_5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            OZ.to::<Kilogram>().value(),
            0.028_349_523_125,
            max_relative = 1e-12
        );
        assert_relative_eq!(LB.to::<Kilogram>().value(), 0.453_592_37, max_relative = 1e-12);
        assert_relative_eq!(CWT.to::<Kilogram>().value(), 45.359_237, max_relative = 1e-12);
        assert_relative_eq!(
            LONG_CWT.to::<Kilogram>().value(),
            50.802_345_44,
            max_relative = 1e-12
        );
        assert_relative_eq!(TON.to::<Kilogram>().value(), 907.184_74, max_relative = 1e-12);
        assert_relative_eq!(
            LONG_TON.to::<Kilogram>().value(),
            1_016.046_908_8,
            max_relative = 1e-12
        );
    }

    #[test]
    fn avoirdupois_ladder() {
        assert_abs_diff_eq!(LB.to::<Grain>().value(), 7_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(LB.to::<Dram>().value(), 256.0, epsilon = 1e-12);
        assert_abs_diff_eq!(LB.to::<Ounce>().value(), 16.0, epsilon = 1e-12);
        assert_abs_diff_eq!(CWT.to::<Pound>().value(), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(TON.to::<Pound>().value(), 2_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(LONG_TON.to::<Pound>().value(), 2_240.0, epsilon = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // From mesh and integer representations
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn from_impl_lb_to_oz() {
        let lb = 1.0_f64 * LB;
        let oz: Ounces = lb.into();
        assert_abs_diff_eq!(oz.value(), 16.0, epsilon = 1e-12);
    }

    #[test]
    fn integer_pounds_to_ounces() {
        let lb = Quantity::<Pound, i64>::new(3);
        assert_eq!(lb.to::<Ounce>().value(), 48);
    }

    #[test]
    fn integer_grams_truncate_to_kilograms() {
        let g = Quantity::<Gram, i64>::new(1_999);
        assert_eq!(g.to::<Kilogram>().value(), 1);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Roundtrip conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn roundtrip_g_kg() {
        let original = Grams::new(5000.0);
        let converted = original.to::<Kilogram>();
        let back = converted.to::<Gram>();
        assert_abs_diff_eq!(back.value(), original.value(), epsilon = 1e-9);
    }

    #[test]
    fn roundtrip_lb_g() {
        let original = Pounds::new(12.5);
        let converted = original.to::<Gram>();
        let back = converted.to::<Pound>();
        assert_relative_eq!(back.value(), original.value(), max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_g_kg(g in 1e-6..1e6f64) {
            let original = Grams::new(g);
            let converted = original.to::<Kilogram>();
            let back = converted.to::<Gram>();
            prop_assert!((back.value() - original.value()).abs() < 1e-9 * g.abs().max(1.0));
        }

        #[test]
        fn prop_roundtrip_oz_g(x in 1e-6..1e6f64) {
            let original = Ounces::new(x);
            let converted = original.to::<Gram>();
            let back = converted.to::<Ounce>();
            prop_assert!((back.value() - original.value()).abs() / original.value() < 1e-12);
        }

        #[test]
        fn prop_lb_oz_ratio(x in 1e-6..1e6f64) {
            let lb = Pounds::new(x);
            let oz = lb.to::<Ounce>();
            // 1 lb = 16 oz
            prop_assert!((oz.value() / lb.value() - 16.0).abs() < 1e-9);
        }
    }
}
