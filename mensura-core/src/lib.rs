//! Core type system for strongly typed quantities with exact rational scaling.
//!
//! `mensura-core` provides a minimal, zero-cost units model:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`], carrying its
//!   scale to the dimension's base unit as an integer fraction `NUM / DEN` in
//!   lowest terms.
//! - A value tagged with a unit is a [`Quantity<U, R>`], backed by any
//!   [`Scalar`] representation (`f64` by default).
//! - Conversion is an explicit, type-checked rescaling via [`Quantity::to`]
//!   and [`unit_cast`].
//! - Mixed-unit arithmetic lands in the [`Common`] unit of the operands and
//!   the common representation of the counts.
//!
//! Most users should depend on `mensura` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions (distance vs mass vs area).
//! - Zero runtime overhead for unit tags (phantom types only).
//! - Exact conversion factors: ratios are integer fractions, reduced at
//!   compile time, so chained conversions do not accumulate scale error.
//! - Integer-backed quantities with C-style truncation toward zero.
//!
//! # What this crate does not try to solve
//!
//! - Automatic tracking of exponent dimensions (`m^2`, `s^-1`, …); the only
//!   synthesized product is distance squared ([`area::Squared`]).
//! - Irrational scale factors; every unit is a rational multiple of its base.
//! - Unsigned representations.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use mensura_core::distance::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert_eq!(m.value(), 1250.0);
//! ```
//!
//! Mix units of one dimension freely:
//!
//! ```rust
//! use mensura_core::distance::{Kilometer, Kilometers, Meters};
//!
//! let total = Meters::new(500.0) + Kilometers::new(1.0);
//! assert_eq!(total.to::<Kilometer>().value(), 1.5);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `mensura-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! mensura-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core`
//! is provided via `num-traits`' `libm` backend.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<U, R>`; serialization is
//!   the raw count only.
//!
//! # Panics and errors
//!
//! The one fallible operation is the remainder: a zero modulus on a
//! float-backed quantity panics with the [`DomainError::ZeroModulus`] message,
//! and on an integer-backed quantity hits the native integer
//! division-by-zero panic. [`Quantity::checked_rem`] reports the zero modulus
//! as `Err(DomainError::ZeroModulus)` for both. Everything else follows the
//! representation's own semantics (IEEE-754 for floats, wrapping-free
//! two's-complement for integers).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod cast;
mod compare;
mod dimension;
mod error;
mod macros;
mod quantity;
mod scalar;
mod unit;

pub mod literals;
pub mod ratio;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use cast::{unit_cast, Conv, FromUnit};
pub use compare::{unit_compare, unit_compare_default};
pub use dimension::Dimension;
pub use error::DomainError;
pub use literals::{DistanceLiterals, MassLiterals};
pub use quantity::Quantity;
pub use scalar::{Promote, Promoted, Scalar};
pub use unit::{Common, Unit, UnitValue};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `mensura-core` so they can implement formatting and
/// conversion traits without running into Rust's orphan rules.
pub mod units;

pub use units::area;
pub use units::distance;
pub use units::mass;
