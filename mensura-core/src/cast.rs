//! Explicit conversions between scales and representations.
//!
//! [`unit_cast`] is the workhorse conversion: it moves a quantity to any
//! other unit of the same dimension (rescaling the count), to the same unit
//! under another representation, or to a bare scalar (extracting the raw
//! count). The scaling factor between two units is a compile-time rational;
//! at most one multiply and one divide happen at runtime, and the common
//! whole-multiple cases collapse to a single operation or none.

use crate::ratio::{reduce_den_wide, reduce_num_wide};
use crate::{Quantity, Scalar, Unit};
use core::marker::PhantomData;

/// The reduced conversion factor from unit `F` to unit `T`.
///
/// A count in `F` times `NUM / DEN` is the same length (mass, area) counted
/// in `T`. Formed and reduced in `i128` so extreme pairs (nanometre to
/// parsec) stay exact even where the product of the two `i64` ratios would
/// overflow.
///
/// ```rust
/// use mensura_core::distance::{Kilometer, Meter};
/// use mensura_core::Conv;
///
/// assert_eq!(Conv::<Kilometer, Meter>::NUM, 1000);
/// assert_eq!(Conv::<Kilometer, Meter>::DEN, 1);
/// assert_eq!(Conv::<Meter, Kilometer>::NUM, 1);
/// assert_eq!(Conv::<Meter, Kilometer>::DEN, 1000);
/// ```
pub struct Conv<F, T>(PhantomData<(F, T)>);

impl<F: Unit, T: Unit<Dim = F::Dim>> Conv<F, T> {
    /// Reduced numerator of the F-to-T factor.
    pub const NUM: i128 =
        reduce_num_wide(F::NUM as i128 * T::DEN as i128, F::DEN as i128 * T::NUM as i128);

    /// Reduced denominator of the F-to-T factor.
    pub const DEN: i128 =
        reduce_den_wide(F::NUM as i128 * T::DEN as i128, F::DEN as i128 * T::NUM as i128);
}

/// Conversion target of [`unit_cast`].
///
/// Implemented by quantity types (rescale and/or representation change) and
/// by the bare scalar types (raw count extraction). Dimension agreement is
/// enforced in the bounds, so casting metres to kilograms does not compile.
pub trait FromUnit<Src>: Sized {
    /// Convert `src` into this type.
    fn from_unit(src: Src) -> Self;
}

/// Convert a quantity to another unit, representation, or bare scalar.
///
/// Rescaling applies the reduced factor of [`Conv`] with the divide first,
/// so integer casts truncate toward zero exactly once:
///
/// ```rust
/// use mensura_core::distance::{Kilometer, Kilometers, Meter, Meters};
/// use mensura_core::{unit_cast, Quantity};
///
/// let km: Kilometers = unit_cast(Meters::new(1000.0));
/// assert_eq!(km.value(), 1.0);
///
/// // 999 m is 0 whole km.
/// let truncated: Quantity<Kilometer, i64> = unit_cast(Quantity::<Meter, i64>::new(999));
/// assert_eq!(truncated.value(), 0);
///
/// // Casting to a scalar type extracts the raw count.
/// let raw: f64 = unit_cast(Meters::new(1.0));
/// assert_eq!(raw, 1.0);
/// ```
#[inline]
pub fn unit_cast<T, F>(from: F) -> T
where
    T: FromUnit<F>,
{
    T::from_unit(from)
}

// Branches on the reduced factor, preserving the original operand order
// (divide, then multiply) in the mixed case. The branch conditions are
// constants per instantiation, so each cast compiles to its minimal form.
impl<F, T, R1, R2> FromUnit<Quantity<F, R1>> for Quantity<T, R2>
where
    F: Unit,
    T: Unit<Dim = F::Dim>,
    R1: Scalar,
    R2: Scalar,
{
    #[inline]
    fn from_unit(src: Quantity<F, R1>) -> Self {
        let num = Conv::<F, T>::NUM;
        let den = Conv::<F, T>::DEN;
        if R1::INTEGRAL && R2::INTEGRAL {
            let v = src.value().to_wide_int();
            let v = if num == 1 && den == 1 {
                v
            } else if den == 1 {
                v * num
            } else if num == 1 {
                v / den
            } else {
                (v / den) * num
            };
            Quantity::new(R2::from_wide_int(v))
        } else {
            let v = src.value().to_wide_float();
            let v = if num == 1 && den == 1 {
                v
            } else if den == 1 {
                v * num as f64
            } else if num == 1 {
                v / den as f64
            } else {
                (v / den as f64) * num as f64
            };
            Quantity::new(R2::from_wide_float(v))
        }
    }
}

macro_rules! impl_scalar_cast {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<F: Unit, R: Scalar> FromUnit<Quantity<F, R>> for $t {
                #[inline]
                fn from_unit(src: Quantity<F, R>) -> Self {
                    <$t>::from_scalar(src.value())
                }
            }
        )+
    };
}

impl_scalar_cast!(i32, i64, f32, f64);
