use std::fmt;
use std::marker::PhantomData;
use std::ops::*;

use num_traits::{Float, Signed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Vector;
use crate::markers::{PhysicalType, Typeless};
use crate::num::Zero;
use crate::traits::{CastType, Lerp};

/// A single-component physical quantity (a duration, a mass, an energy).
///
/// The scalar companion to [`Vector`]: same phantom tag, same refusal to mix
/// quantities of different physical type.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scalar<P, T = f64>(pub(super) T, #[doc(hidden)] PhantomData<P>);

impl<P, T: Clone> Clone for Scalar<P, T> {
    fn clone(&self) -> Scalar<P, T> {
        Scalar::new(self.0.clone())
    }
}

impl<P, T: Copy> Copy for Scalar<P, T> {}

impl<P, T: Zero> Default for Scalar<P, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P, T> Scalar<P, T> {
    #[inline]
    pub fn new(x: impl Into<T>) -> Self {
        Scalar(x.into(), PhantomData)
    }

    /// The zero quantity.
    #[inline]
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Scalar::new(T::zero())
    }

    #[inline]
    pub fn get(self) -> T {
        self.0
    }

    #[inline]
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Scalar<P, R> {
        Scalar::new(f(self.0))
    }

    /// Magnitude of the quantity.
    #[inline]
    pub fn abs(self) -> Self
    where
        T: Signed,
    {
        Scalar::new(self.0.abs())
    }

    #[inline]
    pub fn is_finite(self) -> bool
    where
        T: Float,
    {
        self.0.is_finite()
    }

    /// Linear interpolation towards another quantity.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Lerp<T>,
    {
        Scalar::new(self.0.lerp(other.0, t))
    }

    /// The dimensionless ratio of two quantities of the same type.
    #[inline]
    pub fn ratio(self, other: Self) -> T
    where
        T: Div<T, Output = T>,
    {
        self.0 / other.0
    }
}

impl<P, T: Add<T, Output = T>> Add for Scalar<P, T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Scalar::new(self.0 + other.0)
    }
}

impl<P, T: AddAssign<T>> AddAssign for Scalar<P, T> {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl<P, T: Sub<T, Output = T>> Sub for Scalar<P, T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Scalar::new(self.0 - other.0)
    }
}

impl<P, T: SubAssign<T>> SubAssign for Scalar<P, T> {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl<P, T: Neg<Output = T>> Neg for Scalar<P, T> {
    type Output = Self;

    fn neg(self) -> Self {
        Scalar::new(-self.0)
    }
}

impl<P, T: Mul<T, Output = T>> Mul<T> for Scalar<P, T> {
    type Output = Self;

    #[inline]
    fn mul(self, factor: T) -> Self {
        Scalar::new(self.0 * factor)
    }
}

impl<P, T: MulAssign<T>> MulAssign<T> for Scalar<P, T> {
    fn mul_assign(&mut self, factor: T) {
        self.0 *= factor;
    }
}

impl<P, T: Div<T, Output = T>> Div<T> for Scalar<P, T> {
    type Output = Self;

    #[inline]
    fn div(self, factor: T) -> Self {
        Scalar::new(self.0 / factor)
    }
}

impl<P, T: DivAssign<T>> DivAssign<T> for Scalar<P, T> {
    fn div_assign(&mut self, factor: T) {
        self.0 /= factor;
    }
}

/// Magnitude times unit direction.
impl<P, T: Copy + Mul, const N: usize> Mul<Vector<Typeless, T, N>> for Scalar<P, T> {
    type Output = Vector<P, T::Output, N>;

    #[inline]
    fn mul(self, direction: Vector<Typeless, T, N>) -> Self::Output {
        Vector::new(direction.components.map(|c| self.0 * c))
    }
}

impl<P, T> CastType for Scalar<P, T> {
    type TypeSelf<Q: PhysicalType> = Scalar<Q, T>;

    fn cast_type<Q: PhysicalType>(self) -> Scalar<Q, T> {
        Scalar::new(self.0)
    }
}

impl<P: PhysicalType, T: fmt::Display> fmt::Display for Scalar<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        if !P::SI_UNIT.is_empty() {
            write!(f, " {}", P::SI_UNIT)?;
        }
        Ok(())
    }
}

// Transparent on the wire, like the vector form.
impl<P, T: Serialize> Serialize for Scalar<P, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, P, T: Deserialize<'de>> Deserialize<'de> for Scalar<P, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Scalar::new)
    }
}
