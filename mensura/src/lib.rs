//! Strongly typed quantities with exact rational unit conversions.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the full API from `mensura-core` plus the
//! predefined unit catalogues (distances, masses, areas) and the literal-suffix traits.
//!
//! The core idea is: a value is always a `Quantity<U, R>`, where `U` is a zero-sized type describing the unit and `R`
//! is the numeric representation (`f64` by default). Units exist only at compile time; at runtime a quantity is
//! exactly one number.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to grams).
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`).
//! - Keeps every scale factor as an exact integer ratio, so conversions like feet to metres are exact rather than
//!   rounded through a floating-point constant.
//! - Works with integer representations (`Quantity<Meter, i64>`) as well as floats, with mixed-representation
//!   arithmetic promoting to the wider side.
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra; the only derived dimension is area, produced by multiplying two distances.
//! - Units whose definition is irrational (radian-based angles, for instance) and cannot be written as an integer
//!   ratio of a base unit.
//! - Unsigned representations; `Quantity` requires a signed numeric type.
//!
//! # Quick start
//!
//! Convert kilometres to metres, exactly:
//!
//! ```rust
//! use mensura::{Kilometers, Meter};
//!
//! let d = Kilometers::new(1.25);
//! let m = d.to::<Meter>();
//! assert_eq!(m.value(), 1250.0);
//! ```
//!
//! Mix units of the same dimension freely; the sum lands on the common scale and converts back on request:
//!
//! ```rust
//! use mensura::{DistanceLiterals, Kilometers};
//!
//! let total: Kilometers = (2.5.kilometers() + 300.0.meters()).to();
//! assert_eq!(total.value(), 2.8);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use mensura::{Grams, Meters};
//!
//! let d = Meters::new(1.0);
//! let m = Grams::new(1.0);
//! let _ = d + m; // cannot add metres to grams
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `mensura::distance` (metric, imperial, surveying, nautical and astronomical lengths)
//! - `mensura::mass` (metric and avoirdupois masses)
//! - `mensura::area` (squared distance units, plus the distance-times-distance product)
//! - `mensura::literals` (suffix methods on plain numbers: `2.5.kilometers()`)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `mensura-core`.
//! - `serde`: enables `serde` support for `Quantity<U, R>`. The default encoding is the bare numeric value; the
//!   `serde_with_unit` module provides a `{ "value": …, "unit": … }` form that checks the unit symbol on the way in.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! mensura = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Conversions and arithmetic never allocate and never return `Result`. The one fallible operation is the remainder:
//! with a float representation `%` panics on a zero modulus instead of quietly producing NaN, and with an integer
//! representation it inherits the native divide-by-zero panic. `checked_rem` reports the same condition as
//! `DomainError::ZeroModulus` instead of panicking. Everything else follows IEEE-754 behavior (NaN and infinities
//! propagate according to the underlying operation).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use mensura_core::*;

/// Derive macro used by `mensura-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit` and `crate::Quantity`, so it is intended for use inside `mensura-core`
/// (or crates exposing the same crate-root API). Most users should not need this.
pub use mensura_derive::Unit;

pub use mensura_core::units::area;
pub use mensura_core::units::distance;
pub use mensura_core::units::mass;

pub use mensura_core::units::area::*;
pub use mensura_core::units::distance::*;
pub use mensura_core::units::mass::*;
