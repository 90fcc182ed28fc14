//! Numeric representations a quantity can be backed by.

use core::fmt::{Debug, Display};
use num_traits::{Num, NumCast, Signed};

/// Trait implemented by every admissible quantity representation.
///
/// A quantity stores one value of a `Scalar` type. The set is closed over
/// `i32`, `i64`, `f32` and `f64`; unsigned integers are excluded because
/// subtraction and negation on them are traps rather than arithmetic.
///
/// The wide hooks convert through `i128`/`f64` with plain `as`-cast
/// semantics: float to int truncates toward zero, narrowing wraps. Rescaling
/// runs its intermediate arithmetic in those wide types so that conversion
/// factors never overflow the representation mid-computation.
pub trait Scalar:
    Num + NumCast + Signed + Copy + PartialOrd + Debug + Display + 'static
{
    /// `true` for integer representations, `false` for floating point.
    const INTEGRAL: bool;

    /// Default absolute tolerance for [`unit_compare_default`].
    ///
    /// Zero for integers, which makes the default comparison exact.
    ///
    /// [`unit_compare_default`]: crate::compare::unit_compare_default
    const DEFAULT_MAX_DIFF: Self;

    /// Default relative tolerance for [`unit_compare_default`]: machine
    /// epsilon for floats, zero for integers.
    ///
    /// [`unit_compare_default`]: crate::compare::unit_compare_default
    const DEFAULT_MAX_RELATIVE: Self;

    /// Widen to `i128`.
    fn to_wide_int(self) -> i128;

    /// Narrow from `i128` (`as` semantics).
    fn from_wide_int(v: i128) -> Self;

    /// Widen to `f64`.
    fn to_wide_float(self) -> f64;

    /// Narrow from `f64` (`as` semantics; truncates toward zero for
    /// integer targets).
    fn from_wide_float(v: f64) -> Self;

    /// Convert from another representation, routing through the wide type
    /// matching the source: integer sources go via `i128`, float sources via
    /// `f64`.
    #[inline]
    fn from_scalar<S: Scalar>(s: S) -> Self {
        if S::INTEGRAL {
            Self::from_wide_int(s.to_wide_int())
        } else {
            Self::from_wide_float(s.to_wide_float())
        }
    }
}

macro_rules! impl_scalar {
    ($t:ty, integral = $int:literal, max_diff = $md:expr, max_relative = $mr:expr) => {
        impl Scalar for $t {
            const INTEGRAL: bool = $int;
            const DEFAULT_MAX_DIFF: Self = $md;
            const DEFAULT_MAX_RELATIVE: Self = $mr;

            #[inline]
            fn to_wide_int(self) -> i128 {
                self as i128
            }

            #[inline]
            fn from_wide_int(v: i128) -> Self {
                v as $t
            }

            #[inline]
            fn to_wide_float(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_wide_float(v: f64) -> Self {
                v as $t
            }
        }
    };
}

impl_scalar!(i32, integral = true, max_diff = 0, max_relative = 0);
impl_scalar!(i64, integral = true, max_diff = 0, max_relative = 0);
impl_scalar!(f32, integral = false, max_diff = 1e-9, max_relative = f32::EPSILON);
impl_scalar!(f64, integral = false, max_diff = 1e-9, max_relative = f64::EPSILON);

// ─────────────────────────────────────────────────────────────────────────────
// Numeric promotion
// ─────────────────────────────────────────────────────────────────────────────

/// Numeric promotion between two representations.
///
/// Mixed-representation arithmetic produces a value of
/// [`Promoted<A, B>`], following the usual common-type rules: any float
/// beats any integer, and within a family the wider type wins. The table is
/// symmetric.
///
/// ```rust
/// use mensura_core::Promoted;
///
/// let x: Promoted<i64, f32> = 1.5f32;
/// let y: Promoted<i32, i64> = 2i64;
/// let z: Promoted<f32, f64> = 0.5f64;
/// # let _ = (x, y, z);
/// ```
pub trait Promote<Rhs: Scalar>: Scalar {
    /// The promoted representation.
    type Output: Scalar;
}

/// Shorthand for the promotion of `A` and `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

macro_rules! impl_promote {
    ($($a:ty, $b:ty => $out:ty;)+) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;
            }
        )+
    };
}

impl_promote! {
    i32, i32 => i32;
    i32, i64 => i64;
    i32, f32 => f32;
    i32, f64 => f64;
    i64, i32 => i64;
    i64, i64 => i64;
    i64, f32 => f32;
    i64, f64 => f64;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, f32 => f32;
    f32, f64 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}
