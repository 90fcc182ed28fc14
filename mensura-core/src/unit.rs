//! Unit types and traits.

use crate::dimension::Dimension;
use crate::ratio::gcd;
use crate::{Quantity, Scalar};
use core::fmt::Debug;
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `NUM`/`DEN` form the exact rational conversion factor from this unit to
///   the *base unit* of the same dimension. Example: with metres as base
///   (`Meter::NUM == 1`, `Meter::DEN == 1`), kilometres use
///   `Kilometer::NUM == 1000` because `1 km = 1000 m`, and feet use
///   `381/1250` because `1 ft = 0.3048 m` exactly.
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"km"`). Synthesized
///   units ([`Common`], area products) carry an empty symbol and no
///   `Display`; convert to a named unit to print.
///
/// * `Dim` ties the unit to its underlying [`Dimension`].
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types (this crate's
///   built-in units are unit structs with no fields).
/// - `NUM/DEN` must be in lowest terms with `DEN > 0`. The derive macro used
///   by the built-in catalogues reduces and asserts this at compile time;
///   hand-written impls are expected to hold the same invariant.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Unit-to-base conversion numerator.
    const NUM: i64;

    /// Unit-to-base conversion denominator.
    const DEN: i64;

    /// Printable symbol, shown by `Display` on named quantities.
    const SYMBOL: &'static str;
}

// ─────────────────────────────────────────────────────────────────────────────
// Common unit of two scales
// ─────────────────────────────────────────────────────────────────────────────

/// The common unit of two units of one dimension.
///
/// `Common<A, B>` is the finest scale in which whole amounts of both `A` and
/// `B` are exactly representable: its ratio is
/// `gcd(A::NUM, B::NUM) / lcm(A::DEN, B::DEN)`. It is the output unit of
/// cross-scale `+`, `-` and `%`, so `1 m + 1 km` counts in metres (ratio
/// `1/1`) and `1 m + 1 ft` counts in a scale both are multiples of.
///
/// `Common<A, A>` has the same ratio as `A` but is a distinct type; use
/// [`Quantity::to`] or [`unit_cast`](crate::unit_cast) to land back on a
/// named unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Common<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit<Dim = A::Dim>> Unit for Common<A, B> {
    type Dim = A::Dim;
    const NUM: i64 = gcd(A::NUM, B::NUM);
    const DEN: i64 = (A::DEN / gcd(A::DEN, B::DEN)) * B::DEN;
    const SYMBOL: &'static str = "";
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit predicate
// ─────────────────────────────────────────────────────────────────────────────

/// Marker for values that carry a unit of measure.
///
/// Implemented exactly for [`Quantity`] instantiations, so it doubles as a
/// type-level predicate: generic code can bound on `UnitValue`, and bare
/// numeric types are rejected at compile time.
///
/// ```rust
/// use mensura_core::distance::Meters;
/// use mensura_core::UnitValue;
///
/// fn raw_count<T: UnitValue>(v: T) -> T::Rep {
///     v.count()
/// }
///
/// assert_eq!(raw_count(Meters::new(2.5)), 2.5);
/// ```
///
/// A plain number is not a unit value:
///
/// ```compile_fail
/// use mensura_core::UnitValue;
///
/// fn assert_unit<T: UnitValue>() {}
/// assert_unit::<f64>();
/// ```
pub trait UnitValue: Copy {
    /// Unit of measure attached to the value.
    type Unit: Unit;

    /// Underlying numeric representation.
    type Rep: Scalar;

    /// The raw count in `Self::Unit`.
    fn count(self) -> Self::Rep;
}

impl<U: Unit, R: Scalar> UnitValue for Quantity<U, R> {
    type Unit = U;
    type Rep = R;

    #[inline]
    fn count(self) -> R {
        self.value()
    }
}
