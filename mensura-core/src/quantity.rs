//! Quantity type generic over unit and representation.

use crate::cast::FromUnit;
use crate::error::DomainError;
use crate::scalar::{Promote, Promoted, Scalar};
use crate::unit::{Common, Unit};
use core::marker::PhantomData;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use num_traits::Zero;

/// A numeric value tagged with a unit of measure.
///
/// `Quantity` couples a [`Scalar`] count with a zero-sized [`Unit`] marker;
/// it is the size of its representation and all unit bookkeeping happens in
/// the type system. The representation defaults to `f64`, so the catalogue
/// aliases read `type Meters = Quantity<Meter>` while integer-backed
/// quantities spell it out (`Quantity<Meter, i64>`).
///
/// Arithmetic accepts any quantity of the same dimension: operands are
/// rescaled to their [`Common`] unit and the counts promoted to their common
/// representation, so `1 m + 1 km` is `1001` counted in metres. Quantities
/// of different dimensions do not unify and fail to compile.
///
/// ```rust
/// use mensura_core::distance::{Kilometers, Meter, Meters};
///
/// let total = Meters::new(1.0) + Kilometers::new(1.0);
/// assert_eq!(total, Meters::new(1001.0));
/// assert_eq!(total.to::<Meter>().value(), 1001.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit, R: Scalar = f64>(R, PhantomData<U>);

impl<U: Unit, R: Scalar> Quantity<U, R> {
    /// Creates a new quantity with the given raw count.
    ///
    /// ```rust
    /// use mensura_core::distance::Meters;
    ///
    /// let d = Meters::new(42.0);
    /// assert_eq!(d.value(), 42.0);
    /// ```
    #[inline]
    pub const fn new(value: R) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw count in this quantity's own unit.
    #[inline]
    pub const fn value(self) -> R {
        self.0
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use mensura_core::distance::Meters;
    ///
    /// assert_eq!(Meters::new(-5.0).abs().value(), 5.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Returns the smaller of two quantities of the same type.
    ///
    /// ```rust
    /// use mensura_core::distance::Meters;
    ///
    /// let shorter = Meters::new(5.0).min(Meters::new(3.0));
    /// assert_eq!(shorter.value(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Adds one step of this quantity's own unit.
    ///
    /// ```rust
    /// use mensura_core::distance::Kilometer;
    /// use mensura_core::Quantity;
    ///
    /// let mut d = Quantity::<Kilometer, i64>::new(2);
    /// d.increment();
    /// assert_eq!(d.value(), 3);
    /// ```
    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0 + R::one();
    }

    /// Removes one step of this quantity's own unit.
    #[inline]
    pub fn decrement(&mut self) {
        self.0 = self.0 - R::one();
    }

    /// Converts to another unit of the same dimension, keeping the
    /// representation.
    ///
    /// ```rust
    /// use mensura_core::distance::{Kilometers, Meter};
    ///
    /// let km = Kilometers::new(1.25);
    /// let m = km.to::<Meter>();
    /// assert_eq!(m.value(), 1250.0);
    /// ```
    #[inline]
    pub fn to<V: Unit<Dim = U::Dim>>(self) -> Quantity<V, R> {
        self.cast()
    }

    /// Method form of [`unit_cast`](crate::unit_cast): converts to another
    /// quantity type or extracts the raw count as a scalar.
    ///
    /// ```rust
    /// use mensura_core::distance::{Kilometers, Meters};
    ///
    /// let m: Meters = Kilometers::new(2.0).cast();
    /// assert_eq!(m.value(), 2000.0);
    /// let raw: i64 = m.cast();
    /// assert_eq!(raw, 2000);
    /// ```
    #[inline]
    pub fn cast<T>(self) -> T
    where
        T: FromUnit<Self>,
    {
        T::from_unit(self)
    }

    /// Remainder against any quantity of the same dimension, reporting a
    /// zero modulus as an error instead of panicking.
    ///
    /// The operands are rescaled to their common unit first, so
    /// `2531 m % 1 km` is `531 m`.
    ///
    /// ```rust
    /// use mensura_core::distance::Meters;
    /// use mensura_core::DomainError;
    ///
    /// let rem = Meters::new(7.5).checked_rem(Meters::new(2.0));
    /// assert_eq!(rem.map(|q| q.value()), Ok(1.5));
    ///
    /// let zero = Meters::new(7.5).checked_rem(Meters::new(0.0));
    /// assert_eq!(zero.unwrap_err(), DomainError::ZeroModulus);
    /// ```
    #[inline]
    pub fn checked_rem<B, R2>(
        self,
        rhs: Quantity<B, R2>,
    ) -> Result<Quantity<Common<U, B>, Promoted<R, R2>>, DomainError>
    where
        B: Unit<Dim = U::Dim>,
        R2: Scalar,
        R: Promote<R2>,
    {
        let l: Quantity<Common<U, B>, Promoted<R, R2>> = self.cast();
        let r: Quantity<Common<U, B>, Promoted<R, R2>> = rhs.cast();
        if r.value() == Promoted::<R, R2>::zero() {
            return Err(DomainError::ZeroModulus);
        }
        Ok(Quantity::new(l.value() % r.value()))
    }
}

impl<U: Unit> Quantity<U, f64> {
    /// Not-a-number marker.
    pub const NAN: Self = Self::new(f64::NAN);
}

impl<U: Unit> Quantity<U, f32> {
    /// Not-a-number marker.
    pub const NAN: Self = Self::new(f32::NAN);
}

// Zero float modulus never silently produces NaN; integers keep the native
// divide-by-zero behavior, mirroring the usual float/int asymmetry.
#[inline]
fn rem_values<P: Scalar>(lhs: P, rhs: P) -> P {
    if !P::INTEGRAL && rhs == P::zero() {
        panic!("{}", DomainError::ZeroModulus);
    }
    lhs % rhs
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators: arithmetic across units of one dimension
// ─────────────────────────────────────────────────────────────────────────────

impl<A, B, R1, R2> Add<Quantity<B, R2>> for Quantity<A, R1>
where
    A: Unit,
    B: Unit<Dim = A::Dim>,
    R1: Scalar + Promote<R2>,
    R2: Scalar,
{
    type Output = Quantity<Common<A, B>, Promoted<R1, R2>>;

    #[inline]
    fn add(self, rhs: Quantity<B, R2>) -> Self::Output {
        let l: Self::Output = self.cast();
        let r: Self::Output = rhs.cast();
        Quantity::new(l.value() + r.value())
    }
}

impl<A, B, R1, R2> Sub<Quantity<B, R2>> for Quantity<A, R1>
where
    A: Unit,
    B: Unit<Dim = A::Dim>,
    R1: Scalar + Promote<R2>,
    R2: Scalar,
{
    type Output = Quantity<Common<A, B>, Promoted<R1, R2>>;

    #[inline]
    fn sub(self, rhs: Quantity<B, R2>) -> Self::Output {
        let l: Self::Output = self.cast();
        let r: Self::Output = rhs.cast();
        Quantity::new(l.value() - r.value())
    }
}

impl<A, B, R1, R2> Rem<Quantity<B, R2>> for Quantity<A, R1>
where
    A: Unit,
    B: Unit<Dim = A::Dim>,
    R1: Scalar + Promote<R2>,
    R2: Scalar,
{
    type Output = Quantity<Common<A, B>, Promoted<R1, R2>>;

    /// Truncating remainder in the common unit.
    ///
    /// # Panics
    ///
    /// Panics on a zero modulus; see [`checked_rem`](Quantity::checked_rem)
    /// for the fallible form.
    #[inline]
    fn rem(self, rhs: Quantity<B, R2>) -> Self::Output {
        let l: Self::Output = self.cast();
        let r: Self::Output = rhs.cast();
        Quantity::new(rem_values(l.value(), r.value()))
    }
}

impl<U: Unit, R: Scalar> Neg for Quantity<U, R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators: scaling by bare numbers
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_scalar_ops {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<U: Unit, R: Scalar + Promote<$t>> Mul<$t> for Quantity<U, R> {
                type Output = Quantity<U, Promoted<R, $t>>;

                #[inline]
                fn mul(self, rhs: $t) -> Self::Output {
                    let l = Promoted::<R, $t>::from_scalar(self.0);
                    let r = Promoted::<R, $t>::from_scalar(rhs);
                    Quantity::new(l * r)
                }
            }

            impl<U: Unit, R: Scalar + Promote<$t>> Mul<Quantity<U, R>> for $t {
                type Output = Quantity<U, Promoted<R, $t>>;

                #[inline]
                fn mul(self, rhs: Quantity<U, R>) -> Self::Output {
                    rhs * self
                }
            }

            impl<U: Unit, R: Scalar + Promote<$t>> Div<$t> for Quantity<U, R> {
                type Output = Quantity<U, Promoted<R, $t>>;

                #[inline]
                fn div(self, rhs: $t) -> Self::Output {
                    let l = Promoted::<R, $t>::from_scalar(self.0);
                    let r = Promoted::<R, $t>::from_scalar(rhs);
                    Quantity::new(l / r)
                }
            }

            impl<U: Unit, R: Scalar + Promote<$t>> Rem<$t> for Quantity<U, R> {
                type Output = Quantity<U, Promoted<R, $t>>;

                #[inline]
                fn rem(self, rhs: $t) -> Self::Output {
                    let l = Promoted::<R, $t>::from_scalar(self.0);
                    let r = Promoted::<R, $t>::from_scalar(rhs);
                    Quantity::new(rem_values(l, r))
                }
            }

            impl<U: Unit, R: Scalar> MulAssign<$t> for Quantity<U, R> {
                #[inline]
                fn mul_assign(&mut self, rhs: $t) {
                    self.0 = self.0 * R::from_scalar(rhs);
                }
            }

            impl<U: Unit, R: Scalar> DivAssign<$t> for Quantity<U, R> {
                #[inline]
                fn div_assign(&mut self, rhs: $t) {
                    self.0 = self.0 / R::from_scalar(rhs);
                }
            }

            impl<U: Unit, R: Scalar> RemAssign<$t> for Quantity<U, R> {
                #[inline]
                fn rem_assign(&mut self, rhs: $t) {
                    self.0 = rem_values(self.0, R::from_scalar(rhs));
                }
            }
        )+
    };
}

impl_scalar_ops!(i32, i64, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Operators: compound assignment from same-dimension quantities
// ─────────────────────────────────────────────────────────────────────────────

// The right-hand side is converted into the receiver's unit and
// representation first, so `m += 1 km` adds 1000 and an integer receiver
// truncates a fractional conversion toward zero.

impl<A, B, R1, R2> AddAssign<Quantity<B, R2>> for Quantity<A, R1>
where
    A: Unit,
    B: Unit<Dim = A::Dim>,
    R1: Scalar,
    R2: Scalar,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<B, R2>) {
        let r: Quantity<A, R1> = rhs.cast();
        self.0 = self.0 + r.value();
    }
}

impl<A, B, R1, R2> SubAssign<Quantity<B, R2>> for Quantity<A, R1>
where
    A: Unit,
    B: Unit<Dim = A::Dim>,
    R1: Scalar,
    R2: Scalar,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<B, R2>) {
        let r: Quantity<A, R1> = rhs.cast();
        self.0 = self.0 - r.value();
    }
}

impl<A, B, R1, R2> RemAssign<Quantity<B, R2>> for Quantity<A, R1>
where
    A: Unit,
    B: Unit<Dim = A::Dim>,
    R1: Scalar,
    R2: Scalar,
{
    #[inline]
    fn rem_assign(&mut self, rhs: Quantity<B, R2>) {
        let r: Quantity<A, R1> = rhs.cast();
        self.0 = rem_values(self.0, r.value());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators: comparison across units of one dimension
// ─────────────────────────────────────────────────────────────────────────────

// Comparison is exact on the common-scale counts: 1 m equals exactly
// 1_000_000_000 nm and nothing else. Approximate comparison is
// `unit_compare`, never the operators.

impl<A, B, R1, R2> PartialEq<Quantity<B, R2>> for Quantity<A, R1>
where
    A: Unit,
    B: Unit<Dim = A::Dim>,
    R1: Scalar + Promote<R2>,
    R2: Scalar,
{
    #[inline]
    fn eq(&self, other: &Quantity<B, R2>) -> bool {
        let l: Quantity<Common<A, B>, Promoted<R1, R2>> = (*self).cast();
        let r: Quantity<Common<A, B>, Promoted<R1, R2>> = (*other).cast();
        l.value() == r.value()
    }
}

impl<A, B, R1, R2> PartialOrd<Quantity<B, R2>> for Quantity<A, R1>
where
    A: Unit,
    B: Unit<Dim = A::Dim>,
    R1: Scalar + Promote<R2>,
    R2: Scalar,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<B, R2>) -> Option<core::cmp::Ordering> {
        let l: Quantity<Common<A, B>, Promoted<R1, R2>> = (*self).cast();
        let r: Quantity<Common<A, B>, Promoted<R1, R2>> = (*other).cast();
        l.value().partial_cmp(&r.value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction from bare numbers
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_from_scalar {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<U: Unit> From<$t> for Quantity<U, $t> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(value)
                }
            }
        )+
    };
}

impl_from_scalar!(i32, i64, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, R: Scalar + serde::Serialize> serde::Serialize for Quantity<U, R> {
    /// Serializes the raw count only.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, R: Scalar + serde::Deserialize<'de>> serde::Deserialize<'de>
    for Quantity<U, R>
{
    /// Deserializes from the raw count only.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        R::deserialize(deserializer).map(Self::new)
    }
}

/// Serde adapter writing the unit symbol next to the value.
///
/// Use with `#[serde(with = "mensura_core::serde_with_unit")]` on a quantity
/// field to serialize it as `{ "value": 42.5, "unit": "km" }`. On
/// deserialization the `unit` field is optional, but when present it must
/// match the field's unit symbol.
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::{Quantity, Scalar, Unit};
    use core::marker::PhantomData;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;
    use serde::{Deserializer, Serializer};

    const FIELDS: &[&str] = &["value", "unit"];

    /// Serializes a quantity as `{ "value": …, "unit": SYMBOL }`.
    pub fn serialize<U, R, S>(quantity: &Quantity<U, R>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        R: Scalar + serde::Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Deserializes a quantity, validating the `unit` symbol if present.
    pub fn deserialize<'de, U, R, D>(deserializer: D) -> Result<Quantity<U, R>, D::Error>
    where
        U: Unit,
        R: Scalar + serde::Deserialize<'de>,
        D: Deserializer<'de>,
    {
        enum Field {
            Value,
            Unit,
        }

        impl<'de> de::Deserialize<'de> for Field {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct FieldVisitor;

                impl Visitor<'_> for FieldVisitor {
                    type Value = Field;

                    fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                        f.write_str("`value` or `unit`")
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Field, E> {
                        match v {
                            "value" => Ok(Field::Value),
                            "unit" => Ok(Field::Unit),
                            _ => Err(de::Error::unknown_field(v, FIELDS)),
                        }
                    }
                }

                deserializer.deserialize_identifier(FieldVisitor)
            }
        }

        struct QuantityVisitor<U, R>(PhantomData<(U, R)>);

        impl<'de, U, R> Visitor<'de> for QuantityVisitor<U, R>
        where
            U: Unit,
            R: Scalar + serde::Deserialize<'de>,
        {
            type Value = Quantity<U, R>;

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "a map with a `value` field and optional `unit` \"{}\"", U::SYMBOL)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut value: Option<R> = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            let symbol: &str = map.next_value()?;
                            if symbol != U::SYMBOL {
                                return Err(de::Error::custom(format_args!(
                                    "unit mismatch: expected \"{}\", found \"{}\"",
                                    U::SYMBOL,
                                    symbol
                                )));
                            }
                        }
                    }
                }
                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct("Quantity", FIELDS, QuantityVisitor(PhantomData))
    }
}
