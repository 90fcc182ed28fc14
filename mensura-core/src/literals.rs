//! Literal-style constructors for quantities.
//!
//! Extension traits over [`Scalar`] that tag a bare number with a unit, so
//! quantities read the way they are spoken:
//!
//! ```rust
//! use mensura_core::literals::{DistanceLiterals, MassLiterals};
//!
//! let trip = 2.5.kilometers() + 300.0.meters();
//! assert_eq!(trip.to::<mensura_core::distance::Kilometer>().value(), 2.8);
//!
//! let dose = 150_i64.milligrams();
//! assert_eq!(dose.value(), 150);
//! ```

use crate::quantity::Quantity;
use crate::scalar::Scalar;
use crate::units::distance::{
    Centimeter, Decimeter, Inch, Kilometer, Meter, Micrometer, Millimeter, Nanometer,
};
use crate::units::mass::{
    Dram, Grain, Gram, Hundredweight, Kilogram, Microgram, Milligram, Nanogram, Ounce, Picogram,
    Pound,
};

macro_rules! literal_methods {
    ($($name:ident => $unit:ty, $sym:literal;)+) => {
        $(
            #[doc = concat!("Tags this number as a count of ", $sym, ".")]
            #[inline]
            fn $name(self) -> Quantity<$unit, Self> {
                Quantity::new(self)
            }
        )+
    };
}

/// Literal-style constructors for distance quantities.
///
/// Implemented for every [`Scalar`], so both `2.5.meters()` and
/// `999_i64.meters()` work.
pub trait DistanceLiterals: Scalar {
    literal_methods! {
        nanometers => Nanometer, "nanometres";
        micrometers => Micrometer, "micrometres";
        millimeters => Millimeter, "millimetres";
        centimeters => Centimeter, "centimetres";
        decimeters => Decimeter, "decimetres";
        meters => Meter, "metres";
        kilometers => Kilometer, "kilometres";
        inches => Inch, "inches";
    }
}

impl<R: Scalar> DistanceLiterals for R {}

/// Literal-style constructors for mass quantities.
pub trait MassLiterals: Scalar {
    literal_methods! {
        picograms => Picogram, "picograms";
        nanograms => Nanogram, "nanograms";
        micrograms => Microgram, "micrograms";
        milligrams => Milligram, "milligrams";
        grams => Gram, "grams";
        kilograms => Kilogram, "kilograms";
        grains => Grain, "grains";
        drams => Dram, "drams";
        ounces => Ounce, "ounces";
        pounds => Pound, "pounds";
        hundredweights => Hundredweight, "hundredweights";
    }
}

impl<R: Scalar> MassLiterals for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::distance::Meters;
    use crate::units::mass::Kilograms;

    #[test]
    fn distance_literals() {
        assert_eq!(2.5.kilometers().value(), 2.5);
        assert!(1_000.0.meters() == 1.0.kilometers());
        assert_eq!(999_i64.meters().value(), 999);
    }

    #[test]
    fn mass_literals() {
        assert!(1_000.0.grams() == Kilograms::new(1.0));
        assert_eq!(1.0.grains().value(), 1.0);
    }

    #[test]
    fn literals_mix_with_arithmetic() {
        let total = 1.5.meters() + 50.0.centimeters();
        assert!(total == Meters::new(2.0));
    }
}
