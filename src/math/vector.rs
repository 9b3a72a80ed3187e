use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::*;

use bytemuck::{Pod, Zeroable};
use num_traits::real::Real;
use num_traits::{Float, Signed};
use ordered_float::NotNan;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Angle, Trig};
use crate::error::PhysVecError;
use crate::markers::{PhysicalType, Typeless};
use crate::num::{max, min, One, Two, Zero};
use crate::traits::CastType;

/// An `N`-dimensional vector carrying the physical type `P` at the type
/// level.
///
/// `P` never exists at runtime; two vectors with different physical types
/// refuse to mix at compile time even though their numeric shape is
/// identical.
#[repr(transparent)]
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Vector<P, T = f64, const N: usize = 3> {
    /// The scalar components, in axis order.
    pub components: [T; N],
    #[doc(hidden)]
    pub _phys: PhantomData<P>,
}

impl<P, T: Copy, const N: usize> Copy for Vector<P, T, N> {}

impl<P, T: Clone, const N: usize> Clone for Vector<P, T, N> {
    fn clone(&self) -> Self {
        Vector {
            components: self.components.clone(),
            _phys: PhantomData,
        }
    }
}

impl<P, T: Zero, const N: usize> Default for Vector<P, T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P, T, const N: usize> Vector<P, T, N> {
    /// Constructor taking the components directly.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Vector {
            components,
            _phys: PhantomData,
        }
    }

    /// Constructor computing each component from its index.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::new(std::array::from_fn(f))
    }

    /// Constructor, setting all components to zero.
    #[inline]
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::from_fn(|_| Zero::zero())
    }

    /// Constructor, setting all components to one.
    #[inline]
    pub fn one() -> Self
    where
        T: One,
    {
        Self::from_fn(|_| One::one())
    }

    /// Constructor setting all components to the same value.
    #[inline]
    pub fn splat(v: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_| v.clone())
    }

    /// Cast into the component array.
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.components
    }

    /// Borrow the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    #[inline]
    #[must_use]
    pub fn map<R>(self, f: impl FnMut(T) -> R) -> Vector<P, R, N> {
        Vector::new(self.components.map(f))
    }

    /// Cast the physical type.
    ///
    /// The numbers are untouched; only the compile-time tag changes.
    #[inline]
    pub fn cast_type<Q>(self) -> Vector<Q, T, N> {
        Vector::new(self.components)
    }

    /// Strip the physical type.
    #[inline]
    pub fn to_typeless(self) -> Vector<Typeless, T, N> {
        self.cast_type()
    }

    /// Computes the vector with absolute values of each component.
    pub fn abs(self) -> Self
    where
        T: Signed,
    {
        self.map(|x| x.abs())
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T
    where
        T: Zero + Add<Output = T> + Mul<Output = T>,
    {
        self.components
            .into_iter()
            .zip(other.components)
            .fold(Zero::zero(), |acc, (a, b)| acc + a * b)
    }

    /// Sum of the components.
    #[inline]
    pub fn sum(self) -> T
    where
        T: Zero + Add<Output = T>,
    {
        self.components.into_iter().fold(Zero::zero(), Add::add)
    }
}

impl<P, T: Copy, const N: usize> Vector<P, T, N> {
    /// Combine two vectors component by component.
    #[inline]
    #[must_use]
    pub fn zip<R: Copy, O>(
        self,
        other: Vector<P, R, N>,
        mut f: impl FnMut(T, R) -> O,
    ) -> Vector<P, O, N> {
        Vector::from_fn(|i| f(self.components[i], other.components[i]))
    }

    /// Returns the component-wise product with a typeless vector.
    ///
    /// Scaling by a *typed* vector is not expressible; gains and masks are
    /// typeless by construction.
    #[inline]
    pub fn component_mul(self, scale: Vector<Typeless, T, N>) -> Self
    where
        T: Mul<Output = T>,
    {
        Vector::from_fn(|i| self.components[i] * scale.components[i])
    }

    /// Returns the component-wise quotient by a typeless vector.
    #[inline]
    pub fn component_div(self, scale: Vector<Typeless, T, N>) -> Self
    where
        T: Div<Output = T>,
    {
        Vector::from_fn(|i| self.components[i] / scale.components[i])
    }

    /// Mean of the components.
    pub fn mean(self) -> T
    where
        T: Real,
    {
        debug_assert!(N > 0);
        self.sum() / T::from(N).unwrap()
    }
}

impl<P, T: Copy> Vector<P, T, 2> {
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }
}

impl<P, T: Copy> Vector<P, T, 3> {
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.components[2]
    }
}

impl<P, T> Vector<P, T, 3>
where
    T: Copy + Mul<Output = T> + Sub<Output = T>,
{
    /// Cross product.
    ///
    /// Both operands and the result carry the same physical type, like the
    /// plain vector-space operations.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.components;
        let [bx, by, bz] = other.components;
        Self::new([
            ay * bz - az * by,
            az * bx - ax * bz,
            ax * by - ay * bx,
        ])
    }
}

impl<P, T, const N: usize> Vector<P, T, N>
where
    T: Copy + Mul<T, Output = T> + Add<T, Output = T> + Zero,
{
    /// Returns the vector's length squared.
    #[inline]
    pub fn square_length(self) -> T {
        self.dot(self)
    }

    /// Returns this vector projected onto another one.
    ///
    /// Projecting onto a nil vector will cause a division by zero.
    #[inline]
    pub fn project_onto_vector(self, onto: Self) -> Self
    where
        T: Div<T, Output = T>,
    {
        onto * (self.dot(onto) / onto.square_length())
    }

    /// Returns the unsigned angle between this vector and another.
    ///
    /// The returned angle is between 0 and PI. Either operand having zero
    /// length yields a NaN angle.
    pub fn angle_to(self, other: Self) -> Angle<T>
    where
        T: Real + Trig,
    {
        let denom = (self.square_length() * other.square_length()).sqrt();
        let cos = (self.dot(other) / denom).min(T::one()).max(-T::one());
        Angle::radians(Trig::acos(cos))
    }
}

impl<P, T: Float, const N: usize> Vector<P, T, N> {
    /// Return the normalized vector even if the length is larger than the
    /// max value of Float.
    #[inline]
    #[must_use]
    pub fn robust_normalize(self) -> Self {
        let length = self.length();
        if length.is_infinite() {
            log::debug!("vector length overflowed, rescaling before normalizing");
            let scaled = self / T::max_value();
            scaled / scaled.length()
        } else {
            self / length
        }
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.components.into_iter().all(|c| c.is_finite())
    }

    /// Checks if `self` has length `1.0` up to a precision of `1e-6`.
    #[inline(always)]
    pub fn is_normalized(self) -> bool {
        (self.square_length() - T::one()).abs() < T::from(2e-6).unwrap()
    }

    /// Reject NaN components, making the vector usable as an `Eq + Hash`
    /// key.
    pub fn try_into_ordered(self) -> Result<Vector<P, NotNan<T>, N>, PhysVecError> {
        for (index, c) in self.components.iter().enumerate() {
            if c.is_nan() {
                return Err(PhysVecError::NanComponent { index });
            }
        }
        Ok(self.map(|c| NotNan::new(c).unwrap()))
    }
}

impl<P, T: Real, const N: usize> Vector<P, T, N> {
    /// Returns the vector length.
    #[inline]
    pub fn length(self) -> T {
        self.square_length().sqrt()
    }

    /// Returns the vector with length of one unit.
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Returns the vector with length of one unit.
    ///
    /// Unlike [`Vector::normalize`](#method.normalize), this returns None in
    /// the case that the length of the vector is zero.
    #[inline]
    #[must_use]
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len == T::zero() {
            None
        } else {
            Some(self / len)
        }
    }

    /// Return this vector scaled to fit the provided length.
    #[inline]
    pub fn with_length(self, length: T) -> Self {
        self.normalize() * length
    }

    /// Return this vector capped to a maximum length.
    #[inline]
    pub fn with_max_length(self, max_length: T) -> Self {
        let square_length = self.square_length();
        if square_length > max_length * max_length {
            return self * (max_length / square_length.sqrt());
        }

        self
    }

    /// Return this vector with a minimum length applied.
    #[inline]
    pub fn with_min_length(self, min_length: T) -> Self {
        let square_length = self.square_length();
        if square_length < min_length * min_length {
            return self * (min_length / square_length.sqrt());
        }

        self
    }

    /// Return this vector with minimum and maximum lengths applied.
    #[inline]
    pub fn clamp_length(self, min: T, max: T) -> Self {
        debug_assert!(min <= max);
        self.with_min_length(min).with_max_length(max)
    }
}

impl<P, T, const N: usize> Vector<P, T, N>
where
    T: Copy + One + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    /// Linearly interpolate each component between this vector and another
    /// vector.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        let one_t = T::one() - t;
        self * one_t + other * t
    }

    /// Returns a reflection vector using an incident ray and a surface
    /// normal.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Two + Zero,
    {
        self - normal * T::TWO * self.dot(normal)
    }
}

impl<P, T: PartialOrd + Copy, const N: usize> Vector<P, T, N> {
    /// Returns the vector each component of which are minimum of this vector
    /// and another.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip(other, min)
    }

    /// Returns the vector each component of which are maximum of this vector
    /// and another.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip(other, max)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_elem(self) -> T {
        self.components
            .into_iter()
            .reduce(max)
            .expect("zero-dimensional vector")
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_elem(self) -> T {
        self.components
            .into_iter()
            .reduce(min)
            .expect("zero-dimensional vector")
    }

    /// Returns the vector each component of which is clamped by
    /// corresponding components of `start` and `end`.
    ///
    /// Shortcut for `self.max(start).min(end)`.
    #[inline]
    pub fn clamp(self, start: Self, end: Self) -> Self {
        self.max(start).min(end)
    }
}

impl<P, T: Neg, const N: usize> Neg for Vector<P, T, N> {
    type Output = Vector<P, T::Output, N>;

    #[inline]
    fn neg(self) -> Self::Output {
        Vector::new(self.components.map(Neg::neg))
    }
}

impl<P, T: Copy + Add, const N: usize> Add for Vector<P, T, N> {
    type Output = Vector<P, T::Output, N>;

    #[inline]
    fn add(self, other: Self) -> Self::Output {
        Vector::from_fn(|i| self.components[i] + other.components[i])
    }
}

impl<P, T: Copy + Add, const N: usize> Add<&Self> for Vector<P, T, N> {
    type Output = Vector<P, T::Output, N>;

    #[inline]
    fn add(self, other: &Self) -> Self::Output {
        Vector::from_fn(|i| self.components[i] + other.components[i])
    }
}

impl<P, T: Copy + Add<Output = T> + Zero, const N: usize> Sum for Vector<P, T, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, P, T: 'a + Copy + Add<Output = T> + Zero, const N: usize> Sum<&'a Self>
    for Vector<P, T, N>
{
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<P, T: Copy + Add<T, Output = T>, const N: usize> AddAssign for Vector<P, T, N> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other
    }
}

impl<P, T: Copy + Sub, const N: usize> Sub for Vector<P, T, N> {
    type Output = Vector<P, T::Output, N>;

    #[inline]
    fn sub(self, other: Self) -> Self::Output {
        Vector::from_fn(|i| self.components[i] - other.components[i])
    }
}

impl<P, T: Copy + Sub<T, Output = T>, const N: usize> SubAssign for Vector<P, T, N> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other
    }
}

impl<P, T: Copy + Mul, const N: usize> Mul<T> for Vector<P, T, N> {
    type Output = Vector<P, T::Output, N>;

    #[inline]
    fn mul(self, scale: T) -> Self::Output {
        self.map(|x| x * scale)
    }
}

impl<P, T: Copy + Mul<T, Output = T>, const N: usize> MulAssign<T> for Vector<P, T, N> {
    #[inline]
    fn mul_assign(&mut self, scale: T) {
        *self = *self * scale
    }
}

impl<P, T: Copy + Div, const N: usize> Div<T> for Vector<P, T, N> {
    type Output = Vector<P, T::Output, N>;

    #[inline]
    fn div(self, scale: T) -> Self::Output {
        self.map(|x| x / scale)
    }
}

impl<P, T: Copy + Div<T, Output = T>, const N: usize> DivAssign<T> for Vector<P, T, N> {
    #[inline]
    fn div_assign(&mut self, scale: T) {
        *self = *self / scale
    }
}

impl<P, T, const N: usize> Index<usize> for Vector<P, T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<P, T, const N: usize> IndexMut<usize> for Vector<P, T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}

impl<P, T, const N: usize> From<[T; N]> for Vector<P, T, N> {
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<P, T, const N: usize> Into<[T; N]> for Vector<P, T, N> {
    fn into(self) -> [T; N] {
        self.components
    }
}

impl<P, T> From<(T, T, T)> for Vector<P, T, 3> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new([x, y, z])
    }
}

impl<P, T: Copy, const N: usize> TryFrom<&[T]> for Vector<P, T, N> {
    type Error = PhysVecError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let components: [T; N] =
            slice
                .try_into()
                .map_err(|_| PhysVecError::DimensionMismatch {
                    expected: N,
                    got: slice.len(),
                })?;
        Ok(Self::new(components))
    }
}

impl<P, T, const N: usize> CastType for Vector<P, T, N> {
    type TypeSelf<Q: PhysicalType> = Vector<Q, T, N>;

    fn cast_type<Q: PhysicalType>(self) -> Vector<Q, T, N> {
        Vector::new(self.components)
    }
}

impl<P: PhysicalType, T: fmt::Display, const N: usize> fmt::Display for Vector<P, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")?;
        if !P::SI_UNIT.is_empty() {
            write!(f, " {}", P::SI_UNIT)?;
        }
        Ok(())
    }
}

// The physical type never reaches the wire; a vector serializes as a bare
// tuple of components.
impl<P, T: Serialize, const N: usize> Serialize for Vector<P, T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(N)?;
        for c in &self.components {
            tup.serialize_element(c)?;
        }
        tup.end()
    }
}

impl<'de, P, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<P, T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ComponentsVisitor<P, T, const N: usize> {
            _marker: PhantomData<(P, T)>,
        }

        impl<'de, P, T: Deserialize<'de>, const N: usize> Visitor<'de> for ComponentsVisitor<P, T, N> {
            type Value = Vector<P, T, N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {} components", N)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut components = Vec::with_capacity(N);
                for i in 0..N {
                    let c = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                    components.push(c);
                }
                let Ok(components) = <[T; N]>::try_from(components) else {
                    unreachable!()
                };
                Ok(Vector::new(components))
            }
        }

        deserializer.deserialize_tuple(
            N,
            ComponentsVisitor {
                _marker: PhantomData,
            },
        )
    }
}

unsafe impl<P: 'static, T: Zeroable, const N: usize> Zeroable for Vector<P, T, N> {}

// Sound: repr(transparent) over `[T; N]`, and the phantom tag is a 1-ZST.
unsafe impl<P: 'static, T: Pod, const N: usize> Pod for Vector<P, T, N> {}

#[inline]
pub const fn vector<P, T, const N: usize>(components: [T; N]) -> Vector<P, T, N> {
    Vector::new(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers;

    type Jerk3 = Vector<markers::AngularJerk, f64, 3>;
    type Typeless3 = Vector<markers::Typeless, f64, 3>;

    #[test]
    fn construction_and_access() {
        let v = Jerk3::new([1., 2., 3.]);
        assert_eq!(v.x(), 1.);
        assert_eq!(v.y(), 2.);
        assert_eq!(v.z(), 3.);
        assert_eq!(v[2], 3.);
        assert_eq!(v.to_array(), [1., 2., 3.]);
        assert_eq!(Jerk3::splat(4.), Jerk3::new([4., 4., 4.]));
        assert_eq!(Jerk3::zero(), Jerk3::default());
        assert_eq!(Jerk3::from((1., 2., 3.)), v);
    }

    #[test]
    fn linear_ops() {
        let a = Jerk3::new([1., 2., 3.]);
        let b = Jerk3::new([4., 5., 6.]);

        assert_eq!(a + b, Jerk3::new([5., 7., 9.]));
        assert_eq!(b - a, Jerk3::new([3., 3., 3.]));
        assert_eq!(-a, Jerk3::new([-1., -2., -3.]));
        assert_eq!(a * 2., Jerk3::new([2., 4., 6.]));
        assert_eq!(b / 2., Jerk3::new([2., 2.5, 3.]));

        let mut c = a;
        c += b;
        c -= a;
        c *= 3.;
        c /= 3.;
        assert_eq!(c, b);

        let total: Jerk3 = [a, b].into_iter().sum();
        assert_eq!(total, a + b);
    }

    #[test]
    fn products() {
        let x = Jerk3::new([1., 0., 0.]);
        let y = Jerk3::new([0., 1., 0.]);

        assert_eq!(x.dot(y), 0.);
        assert_eq!(x.cross(y), Jerk3::new([0., 0., 1.]));

        let gain = Typeless3::new([2., 3., 4.]);
        let v = Jerk3::new([1., 1., 1.]);
        assert_eq!(v.component_mul(gain), Jerk3::new([2., 3., 4.]));
        assert_eq!(v.component_div(gain), Jerk3::new([0.5, 1. / 3., 0.25]));
    }

    #[test]
    fn norms() {
        let v = Jerk3::new([3., 0., 4.]);
        assert_eq!(v.square_length(), 25.);
        assert_eq!(v.length(), 5.);
        assert!(v.normalize().is_normalized());
        assert_eq!(v.with_length(10.), Jerk3::new([6., 0., 8.]));
        assert_eq!(v.with_max_length(5.), v);
        assert_eq!(v.with_max_length(2.5), Jerk3::new([1.5, 0., 2.]));
        assert_eq!(v.with_min_length(10.), Jerk3::new([6., 0., 8.]));
        assert_eq!(v.clamp_length(1., 5.), v);

        assert_eq!(Jerk3::zero().try_normalize(), None);
        assert!(v.try_normalize().is_some());
        assert!(v.robust_normalize().is_normalized());
        assert!(Jerk3::splat(f64::MAX).robust_normalize().is_normalized());
    }

    #[test]
    fn statistics() {
        let a = Jerk3::new([1., -2., 3.]);
        let b = Jerk3::new([2., -3., 1.]);

        assert_eq!(a.abs(), Jerk3::new([1., 2., 3.]));
        assert_eq!(a.min(b), Jerk3::new([1., -3., 1.]));
        assert_eq!(a.max(b), Jerk3::new([2., -2., 3.]));
        assert_eq!(a.min_elem(), -2.);
        assert_eq!(a.max_elem(), 3.);
        assert_eq!(a.sum(), 2.);
        assert_eq!(Jerk3::new([1., 2., 3.]).mean(), 2.);
        assert_eq!(
            a.clamp(Jerk3::splat(0.), Jerk3::splat(2.)),
            Jerk3::new([1., 0., 2.])
        );
    }

    #[test]
    fn geometry() {
        let a = Jerk3::new([1., 0., 0.]);
        let b = Jerk3::new([0., 1., 0.]);

        assert_eq!(a.lerp(b, 0.5), Jerk3::new([0.5, 0.5, 0.]));
        assert_eq!(
            Jerk3::new([1., -1., 0.]).reflect(Jerk3::new([0., 1., 0.])),
            Jerk3::new([1., 1., 0.])
        );
        assert_eq!(
            Jerk3::new([2., 3., 0.]).project_onto_vector(a),
            Jerk3::new([2., 0., 0.])
        );

        let angle = a.angle_to(b);
        assert!((angle.radians - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(a.angle_to(a).radians, 0.);
    }

    #[test]
    fn type_plumbing() {
        let v = Jerk3::new([1., 2., 3.]);
        let raw = v.to_typeless();
        assert_eq!(raw, Typeless3::new([1., 2., 3.]));

        let back: Jerk3 = raw.cast_type();
        assert_eq!(back, v);
    }

    #[test]
    fn slice_conversion() {
        let v = Jerk3::try_from(&[1., 2., 3.][..]).unwrap();
        assert_eq!(v, Jerk3::new([1., 2., 3.]));

        let err = Jerk3::try_from(&[1., 2.][..]).unwrap_err();
        assert_eq!(
            err,
            PhysVecError::DimensionMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn display_includes_unit() {
        let v = Jerk3::new([1., 2.5, 3.]);
        assert_eq!(v.to_string(), "[1, 2.5, 3] rad/s³");
        assert_eq!(v.to_typeless().to_string(), "[1, 2.5, 3]");
    }

    #[test]
    fn serde_round_trip() {
        let v = Jerk3::new([0.1, 0.2, 0.3]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[0.1,0.2,0.3]");

        let back: Jerk3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        assert!(serde_json::from_str::<Jerk3>("[0.1,0.2]").is_err());
    }

    #[test]
    fn pod_casting() {
        let vs = [
            Vector::<markers::AngularJerk, f32, 3>::new([1., 2., 3.]),
            Vector::new([4., 5., 6.]),
        ];
        let raw: &[f32] = bytemuck::cast_slice(&vs);
        assert_eq!(raw, &[1., 2., 3., 4., 5., 6.]);
    }

    #[test]
    fn ordered_components() {
        let v = Jerk3::new([1., 2., 3.]);
        let ordered = v.try_into_ordered().unwrap();
        assert_eq!(ordered[0].into_inner(), 1.);

        let err = Jerk3::new([1., f64::NAN, 3.]).try_into_ordered().unwrap_err();
        assert_eq!(err, PhysVecError::NanComponent { index: 1 });
    }

    #[test]
    fn finiteness() {
        assert!(Jerk3::new([1., 2., 3.]).is_finite());
        assert!(!Jerk3::new([1., f64::INFINITY, 3.]).is_finite());
    }
}
