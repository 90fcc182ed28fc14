//! Predefined unit modules grouped by dimension.
//!
//! `mensura-core` ships a catalogue of built-in units so that conversions and formatting work out of the box without
//! downstream crates having to fight Rust’s orphan rules.
//!
//! ## Modules
//!
//! - [`distance`]: distance units (SI metre is canonical scaling unit) plus imperial, nautical and astronomical units.
//! - [`mass`]: mass units (gram is canonical scaling unit) plus avoirdupois units.
//! - [`area`]: area units (square metre is canonical scaling unit) plus the distance-product type.

pub mod area;
pub mod distance;
pub mod mass;
