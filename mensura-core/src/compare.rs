//! Approximate comparison of raw counts.
//!
//! The comparison operators on quantities are exact. Where accumulated
//! floating-point error is expected, [`unit_compare`] implements the usual
//! two-stage tolerance test: an absolute tolerance for values near zero and
//! a relative tolerance scaled by the larger magnitude everywhere else.

use crate::Scalar;

/// `true` if `lhs` and `rhs` are equal to within the given tolerances.
///
/// The absolute test `|l - r| <= max_diff` runs first, so exact matches and
/// values straddling zero (`±tiny`) compare equal regardless of sign. It is
/// followed by the relative test `|l - r| <= max(|l|, |r|) * max_relative`.
///
/// ```rust
/// use mensura_core::unit_compare;
///
/// assert!(unit_compare(1.0, 1.0 + f64::EPSILON, 0.0, f64::EPSILON));
/// assert!(!unit_compare(1.0001, 1.0002, 1e-5, f64::EPSILON));
/// ```
#[inline]
pub fn unit_compare<T: Scalar>(lhs: T, rhs: T, max_diff: T, max_relative: T) -> bool {
    let diff = (lhs - rhs).abs();
    if diff <= max_diff {
        return true;
    }
    let largest = if rhs.abs() > lhs.abs() {
        rhs.abs()
    } else {
        lhs.abs()
    };
    diff <= largest * max_relative
}

/// [`unit_compare`] with the representation's default tolerances.
///
/// Floats default to an absolute tolerance of `1e-9` and a relative
/// tolerance of machine epsilon; integer defaults are zero, making the
/// comparison exact.
///
/// ```rust
/// use mensura_core::unit_compare_default;
///
/// assert!(unit_compare_default(1.0, 1.0 + 1e-12));
/// assert!(!unit_compare_default(1.0, 1.1));
/// assert!(unit_compare_default(3i64, 3i64));
/// assert!(!unit_compare_default(3i64, 4i64));
/// ```
#[inline]
pub fn unit_compare_default<T: Scalar>(lhs: T, rhs: T) -> bool {
    unit_compare(lhs, rhs, T::DEFAULT_MAX_DIFF, T::DEFAULT_MAX_RELATIVE)
}
