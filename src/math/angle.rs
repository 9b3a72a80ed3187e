use std::ops::*;

use num_traits::real::Real;
use num_traits::{Float, FloatConst};
use serde::{Deserialize, Serialize};

use crate::num::{Two, Zero};

/// A plain angle in radians.
///
/// This is the untagged helper returned by `Vector::angle_to`; the tagged
/// rotation-vector quantity is `quantities::Angle`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Angle<T> {
    pub radians: T,
}

impl<T> Angle<T> {
    #[inline]
    pub fn radians(radians: T) -> Self {
        Angle { radians }
    }

    #[inline]
    pub fn get(self) -> T {
        self.radians
    }
}

impl<T: Trig> Angle<T> {
    #[inline]
    pub fn degrees(deg: T) -> Self {
        Angle {
            radians: T::degrees_to_radians(deg),
        }
    }

    #[inline]
    pub fn to_degrees(self) -> T {
        T::radians_to_degrees(self.radians)
    }
}

impl<T> Angle<T>
where
    T: Rem<Output = T> + Sub<Output = T> + Add<Output = T> + Zero + FloatConst + PartialOrd + Copy,
{
    /// Returns this angle in the [0..2*PI[ range.
    pub fn positive(&self) -> Self {
        let two_pi = T::PI() + T::PI();
        let mut a = self.radians % two_pi;
        if a < T::zero() {
            a = a + two_pi;
        }
        Angle::radians(a)
    }

    /// Returns this angle in the ]-PI..PI] range.
    pub fn signed(&self) -> Self {
        Angle::pi() - (Angle::pi() - *self).positive()
    }
}

impl<T> Angle<T>
where
    T: Rem<Output = T> + Mul<Output = T> + Sub<Output = T> + Add<Output = T> + Two + FloatConst + Copy,
{
    /// Returns the shortest signed angle between two angles.
    ///
    /// Takes wrapping and signs into account.
    pub fn angle_to(&self, to: Self) -> Self {
        let max = T::PI() * T::TWO;
        let d = (to.radians - self.radians) % max;

        Angle::radians(T::TWO * d % max - d)
    }

    /// Linear interpolation between two angles, using the shortest path.
    pub fn lerp(&self, other: Self, t: T) -> Self {
        *self + self.angle_to(other) * t
    }
}

impl<T: Float> Angle<T> {
    /// Returns true if the angle is a finite number.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.radians.is_finite()
    }
}

impl<T: Real> Angle<T> {
    /// Returns (sin(self), cos(self)).
    pub fn sin_cos(self) -> (T, T) {
        self.radians.sin_cos()
    }
}

impl<T: Zero> Angle<T> {
    pub fn zero() -> Self {
        Angle::radians(T::zero())
    }
}

impl<T: FloatConst + Add<Output = T>> Angle<T> {
    pub fn pi() -> Self {
        Angle::radians(T::PI())
    }

    pub fn two_pi() -> Self {
        Angle::radians(T::PI() + T::PI())
    }

    pub fn frac_pi_2() -> Self {
        Angle::radians(T::FRAC_PI_2())
    }
}

impl<T: Add<T, Output = T>> Add for Angle<T> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::radians(self.radians + other.radians)
    }
}

impl<T: AddAssign<T>> AddAssign for Angle<T> {
    fn add_assign(&mut self, other: Angle<T>) {
        self.radians += other.radians;
    }
}

impl<T: Sub<T, Output = T>> Sub for Angle<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Angle::radians(self.radians - other.radians)
    }
}

impl<T: SubAssign<T>> SubAssign for Angle<T> {
    fn sub_assign(&mut self, other: Angle<T>) {
        self.radians -= other.radians;
    }
}

impl<T: Div<T, Output = T>> Div<Angle<T>> for Angle<T> {
    type Output = T;
    #[inline]
    fn div(self, other: Angle<T>) -> T {
        self.radians / other.radians
    }
}

impl<T: Div<T, Output = T>> Div<T> for Angle<T> {
    type Output = Angle<T>;
    #[inline]
    fn div(self, factor: T) -> Angle<T> {
        Angle::radians(self.radians / factor)
    }
}

impl<T: DivAssign<T>> DivAssign<T> for Angle<T> {
    fn div_assign(&mut self, factor: T) {
        self.radians /= factor;
    }
}

impl<T: Mul<T, Output = T>> Mul<T> for Angle<T> {
    type Output = Angle<T>;
    #[inline]
    fn mul(self, factor: T) -> Angle<T> {
        Angle::radians(self.radians * factor)
    }
}

impl<T: MulAssign<T>> MulAssign<T> for Angle<T> {
    fn mul_assign(&mut self, factor: T) {
        self.radians *= factor;
    }
}

impl<T: Neg<Output = T>> Neg for Angle<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Angle::radians(-self.radians)
    }
}

pub trait Trig {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(y: Self, x: Self) -> Self;
    fn degrees_to_radians(deg: Self) -> Self;
    fn radians_to_degrees(rad: Self) -> Self;
}

macro_rules! trig {
    ($ty:ident) => {
        impl Trig for $ty {
            #[inline]
            fn sin(self) -> $ty {
                num_traits::Float::sin(self)
            }
            #[inline]
            fn cos(self) -> $ty {
                num_traits::Float::cos(self)
            }
            #[inline]
            fn tan(self) -> $ty {
                num_traits::Float::tan(self)
            }
            #[inline]
            fn asin(self) -> $ty {
                num_traits::Float::asin(self)
            }
            #[inline]
            fn acos(self) -> $ty {
                num_traits::Float::acos(self)
            }
            #[inline]
            fn atan2(y: $ty, x: $ty) -> $ty {
                num_traits::Float::atan2(y, x)
            }
            #[inline]
            fn degrees_to_radians(deg: Self) -> Self {
                deg.to_radians()
            }
            #[inline]
            fn radians_to_degrees(rad: Self) -> Self {
                rad.to_degrees()
            }
        }
    };
}

trig!(f32);
trig!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn degrees_round_trip() {
        let a = Angle::degrees(90.0_f64);
        assert!((a.radians - FRAC_PI_2).abs() < 1e-12);
        assert!((a.to_degrees() - 90.).abs() < 1e-12);
    }

    #[test]
    fn wrapping() {
        let a = Angle::radians(-FRAC_PI_2);
        assert!((a.positive().radians - 3. * FRAC_PI_2).abs() < 1e-12);

        let b = Angle::radians(3. * PI);
        assert!((b.signed().radians - PI).abs() < 1e-12);
    }

    #[test]
    fn shortest_difference() {
        let from = Angle::radians(0.1_f64);
        let to = Angle::radians(2. * PI - 0.1);

        let d = from.angle_to(to);
        assert!((d.radians + 0.2).abs() < 1e-12);

        let mid = from.lerp(to, 0.5);
        assert!(mid.signed().radians.abs() < 1e-12);
    }

    #[test]
    fn ratio() {
        let a = Angle::radians(PI);
        assert!((a / Angle::radians(FRAC_PI_2) - 2.).abs() < 1e-12);
        assert_eq!((a / 2.).radians, FRAC_PI_2);
    }
}
