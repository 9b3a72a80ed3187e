//! Time integration and differentiation across the kinematic chains.
//!
//! Multiplying a quantity by a duration walks its tag one step up the chain
//! (velocity times time is a position offset); dividing walks it one step
//! down. The arithmetic is the plain component-wise product or quotient, the
//! bookkeeping happens entirely in the type system.

use std::ops::{Div, Mul};

use super::{Scalar, Vector};
use crate::markers::{Differentiable, Integrable, Time};

impl<P: Integrable, T: Copy + Mul, const N: usize> Mul<Scalar<Time, T>> for Vector<P, T, N> {
    type Output = Vector<P::Integral, T::Output, N>;

    #[inline]
    fn mul(self, dt: Scalar<Time, T>) -> Self::Output {
        Vector::new(self.components.map(|c| c * dt.0))
    }
}

impl<P: Differentiable, T: Copy + Div, const N: usize> Div<Scalar<Time, T>> for Vector<P, T, N> {
    type Output = Vector<P::Derivative, T::Output, N>;

    #[inline]
    fn div(self, dt: Scalar<Time, T>) -> Self::Output {
        Vector::new(self.components.map(|c| c / dt.0))
    }
}

impl<P: Integrable, T: Mul> Mul<Scalar<Time, T>> for Scalar<P, T> {
    type Output = Scalar<P::Integral, T::Output>;

    #[inline]
    fn mul(self, dt: Scalar<Time, T>) -> Self::Output {
        Scalar::new(self.0 * dt.0)
    }
}

impl<P: Differentiable, T: Div> Div<Scalar<Time, T>> for Scalar<P, T> {
    type Output = Scalar<P::Derivative, T::Output>;

    #[inline]
    fn div(self, dt: Scalar<Time, T>) -> Self::Output {
        Scalar::new(self.0 / dt.0)
    }
}

impl<P: Integrable, T, const N: usize> Vector<P, T, N> {
    /// Euler step over `dt`: the result sits one integral up the kinematic
    /// chain.
    #[inline]
    pub fn integrate(self, dt: Scalar<Time, T>) -> Vector<P::Integral, T, N>
    where
        T: Copy + Mul<Output = T>,
    {
        self * dt
    }
}

impl<P: Differentiable, T, const N: usize> Vector<P, T, N> {
    /// Finite difference over `dt`: the result sits one derivative down the
    /// kinematic chain.
    #[inline]
    pub fn differentiate(self, dt: Scalar<Time, T>) -> Vector<P::Derivative, T, N>
    where
        T: Copy + Div<Output = T>,
    {
        self / dt
    }
}

impl<P: Integrable, T> Scalar<P, T> {
    /// Euler step over `dt`.
    #[inline]
    pub fn integrate(self, dt: Scalar<Time, T>) -> Scalar<P::Integral, T>
    where
        T: Mul<Output = T>,
    {
        self * dt
    }
}

impl<P: Differentiable, T> Scalar<P, T> {
    /// Finite difference over `dt`.
    #[inline]
    pub fn differentiate(self, dt: Scalar<Time, T>) -> Scalar<P::Derivative, T>
    where
        T: Div<Output = T>,
    {
        self / dt
    }
}
