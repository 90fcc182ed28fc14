//! Dimension types and traits.

/// Marker trait for **dimensions** (Distance, Mass, Area).
///
/// A *dimension* is the category that distinguishes a metre from a gram.
/// Arithmetic is only defined between quantities of the same dimension, so
/// mixing them is a compile error rather than a runtime check. You usually
/// model each dimension as an empty enum:
///
/// ```rust
/// use mensura_core::Dimension;
/// #[derive(Debug)]
/// pub enum Luminosity {}
/// impl Dimension for Luminosity {}
/// ```
pub trait Dimension {}
