//! Macros for defining units and conversions.

/// Generates `From` trait implementations for all pairs of units within a dimension.
///
/// The conversions are representation-generic, so `Quantity<Foot, i64>`
/// converts into `Quantity<Meter, f64>` the same way the float-to-float
/// pairs do: rescale first, then change the representation.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<R1: $crate::Scalar, R2: $crate::Scalar> From<$crate::Quantity<$first, R1>>
                for $crate::Quantity<$rest, R2>
            {
                fn from(value: $crate::Quantity<$first, R1>) -> Self {
                    value.cast()
                }
            }

            impl<R1: $crate::Scalar, R2: $crate::Scalar> From<$crate::Quantity<$rest, R1>>
                for $crate::Quantity<$first, R2>
            {
                fn from(value: $crate::Quantity<$rest, R1>) -> Self {
                    value.cast()
                }
            }
        )+

        // Recurse with the rest of the units
        $crate::impl_unit_conversions!($($rest),+);
    };
}
