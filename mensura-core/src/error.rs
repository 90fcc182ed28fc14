//! Error types.

/// Error produced when an operand lies outside an operation's mathematical
/// domain.
///
/// The only fallible operation in this crate is the remainder:
/// [`Quantity::checked_rem`](crate::Quantity::checked_rem) reports a zero
/// modulus as `Err` instead of producing a NaN (floats) or tripping the
/// native divide-by-zero panic (integers). The `%` and `%=` operators panic
/// with this error's message on a zero float modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Remainder was taken with a zero-valued modulus.
    #[error("remainder by zero modulus")]
    ZeroModulus,
}
