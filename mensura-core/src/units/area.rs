//! Area units.
//!
//! The canonical scaling unit for this dimension is [`SquareMeter`]
//! (`SquareMeter::NUM == 1`, `SquareMeter::DEN == 1`).
//!
//! This module provides:
//!
//! - **Named units**: metric and imperial squares of the common distance units.
//! - **[`Squared`]**: the synthesized unit produced by multiplying two
//!   distance quantities. `Squared<Meter>` carries the same ratio as
//!   [`SquareMeter`] and compares equal to it, but is a distinct type.
//!
//! Multiplying two distance quantities is the one blessed quantity product:
//! the right-hand side is converted into the left-hand unit first, so the
//! result is counted in squares of the left-hand unit.
//!
//! ```rust
//! use mensura_core::area::SquareCentimeters;
//! use mensura_core::distance::Meters;
//!
//! let area = Meters::new(1.0) * Meters::new(1.0);
//! assert!(area == SquareCentimeters::new(10_000.0));
//! ```

use crate::units::distance::{Distance, DistanceUnit};
use crate::{Dimension, Promote, Promoted, Quantity, Scalar, Unit};
use core::marker::PhantomData;
use core::ops::Mul;
use mensura_derive::Unit;

/// Dimension tag for area.
pub enum Area {}
impl Dimension for Area {}

/// Marker trait for any [`Unit`] whose dimension is [`Area`].
pub trait AreaUnit: Unit<Dim = Area> {}
impl<T: Unit<Dim = Area>> AreaUnit for T {}

/// The square of a distance unit.
///
/// This is the unit of a distance-by-distance product. It has no symbol of
/// its own; convert into a named area unit for display.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Squared<A>(PhantomData<A>);

impl<A: Unit<Dim = Distance>> Unit for Squared<A> {
    type Dim = Area;
    const NUM: i64 = A::NUM * A::NUM;
    const DEN: i64 = A::DEN * A::DEN;
    const SYMBOL: &'static str = "";
}

// The only quantity-by-quantity multiplication: distance times distance.
// The right-hand operand is rescaled into the left-hand unit before the
// counts multiply, so the output is counted in Squared<U1>.
impl<U1, U2, R1, R2> Mul<Quantity<U2, R2>> for Quantity<U1, R1>
where
    U1: DistanceUnit,
    U2: DistanceUnit,
    R1: Scalar + Promote<R2>,
    R2: Scalar,
{
    type Output = Quantity<Squared<U1>, Promoted<R1, R2>>;

    #[inline]
    fn mul(self, rhs: Quantity<U2, R2>) -> Self::Output {
        let l = Promoted::<R1, R2>::from_scalar(self.value());
        let r: Quantity<U1, Promoted<R1, R2>> = rhs.cast();
        Quantity::new(l * r.value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Named area units
// ─────────────────────────────────────────────────────────────────────────────

/// Square metre (SI base unit for area).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m²", dimension = Area, num = 1)]
pub struct SquareMeter;
/// A quantity measured in square metres.
pub type SquareMeters = Quantity<SquareMeter>;
/// One square metre.
pub const M2: SquareMeters = SquareMeters::new(1.0);

/// Square kilometre (`1e6 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km²", dimension = Area, num = 1_000 * 1_000)]
pub struct SquareKilometer;
/// A quantity measured in square kilometres.
pub type SquareKilometers = Quantity<SquareKilometer>;
/// One square kilometre.
pub const KM2: SquareKilometers = SquareKilometers::new(1.0);

/// Square centimetre (`1e-4 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm²", dimension = Area, num = 1, den = 100 * 100)]
pub struct SquareCentimeter;
/// A quantity measured in square centimetres.
pub type SquareCentimeters = Quantity<SquareCentimeter>;
/// One square centimetre.
pub const CM2: SquareCentimeters = SquareCentimeters::new(1.0);

/// Square millimetre (`1e-6 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm²", dimension = Area, num = 1, den = 1_000 * 1_000)]
pub struct SquareMillimeter;
/// A quantity measured in square millimetres.
pub type SquareMillimeters = Quantity<SquareMillimeter>;
/// One square millimetre.
pub const MM2: SquareMillimeters = SquareMillimeters::new(1.0);

/// Square inch (`0.0254² m²` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in²", dimension = Area, num = 254 * 254, den = 10_000 * 10_000)]
pub struct SquareInch;
/// A quantity measured in square inches.
pub type SquareInches = Quantity<SquareInch>;
/// One square inch.
pub const IN2: SquareInches = SquareInches::new(1.0);

/// Square foot (`0.3048² m²` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft²", dimension = Area, num = 3_048 * 3_048, den = 10_000 * 10_000)]
pub struct SquareFoot;
/// A quantity measured in square feet.
pub type SquareFeet = Quantity<SquareFoot>;
/// One square foot.
pub const FT2: SquareFeet = SquareFeet::new(1.0);

/// Square yard (`0.9144² m²` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd²", dimension = Area, num = 9_144 * 9_144, den = 10_000 * 10_000)]
pub struct SquareYard;
/// A quantity measured in square yards.
pub type SquareYards = Quantity<SquareYard>;
/// One square yard.
pub const YD2: SquareYards = SquareYards::new(1.0);

/// Square (statute) mile (`1609.344² m²` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi²", dimension = Area, num = 1_609_344 * 1_609_344, den = 1_000 * 1_000)]
pub struct SquareMile;
/// A quantity measured in square miles.
pub type SquareMiles = Quantity<SquareMile>;
/// One square mile.
pub const MI2: SquareMiles = SquareMiles::new(1.0);

// Generate all bidirectional From implementations between named area units
crate::impl_unit_conversions!(
    SquareMeter,
    SquareKilometer,
    SquareCentimeter,
    SquareMillimeter,
    SquareInch,
    SquareFoot,
    SquareYard,
    SquareMile
);
