//! Compile-time rational arithmetic helpers.
//!
//! Every scaling ratio in this crate is a pair of `i64` constants in lowest
//! terms with a positive denominator. The helpers here are `const fn` so the
//! whole ratio algebra (reduction, common scales, conversion factors) folds
//! away at compile time; nothing in this module touches floating point.

/// Sign of `n` as a multiplier: `-1` for negative values, `+1` otherwise.
///
/// Zero is treated as positive, so `sign` is always a valid multiplier.
///
/// ```rust
/// use mensura_core::ratio::sign;
///
/// assert_eq!(sign(-3), -1);
/// assert_eq!(sign(0), 1);
/// assert_eq!(sign(42), 1);
/// ```
#[inline]
pub const fn sign(n: i64) -> i64 {
    if n < 0 {
        -1
    } else {
        1
    }
}

/// Absolute value of `n`, computed as `n * sign(n)`.
///
/// `abs(i64::MIN)` wraps back to `i64::MIN`; ratios never get near that
/// magnitude in practice.
///
/// ```rust
/// use mensura_core::ratio::abs;
///
/// assert_eq!(abs(-3), 3);
/// assert_eq!(abs(3), 3);
/// ```
#[inline]
pub const fn abs(n: i64) -> i64 {
    n.wrapping_mul(sign(n))
}

/// Greatest common divisor of `a` and `b` (Euclid, over absolute values).
///
/// `gcd(a, 0) == abs(a)` and `gcd(0, 0) == 0`.
///
/// ```rust
/// use mensura_core::ratio::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(-12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// ```
#[inline]
pub const fn gcd(a: i64, b: i64) -> i64 {
    let mut a = abs(a);
    let mut b = abs(b);
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Lowest-terms numerator of `num/den`.
///
/// `den` must be positive; unit definitions assert this at compile time.
#[inline]
pub const fn reduce_num(num: i64, den: i64) -> i64 {
    num / gcd(num, den)
}

/// Lowest-terms denominator of `num/den`. See [`reduce_num`].
#[inline]
pub const fn reduce_den(num: i64, den: i64) -> i64 {
    den / gcd(num, den)
}

// ─────────────────────────────────────────────────────────────────────────────
// Wide (i128) variants
// ─────────────────────────────────────────────────────────────────────────────

// Conversion factors between two units are products of two i64 ratios, which
// can overflow i64 before reduction (nanometre to parsec). They are formed and
// reduced in i128 instead; unit ratios themselves stay i64.

pub(crate) const fn abs_wide(n: i128) -> i128 {
    if n < 0 {
        -n
    } else {
        n
    }
}

pub(crate) const fn gcd_wide(a: i128, b: i128) -> i128 {
    let mut a = abs_wide(a);
    let mut b = abs_wide(b);
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

pub(crate) const fn reduce_num_wide(num: i128, den: i128) -> i128 {
    num / gcd_wide(num, den)
}

pub(crate) const fn reduce_den_wide(num: i128, den: i128) -> i128 {
    den / gcd_wide(num, den)
}
