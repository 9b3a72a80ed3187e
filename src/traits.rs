use num_traits::Num;

use crate::markers::PhysicalType;

/// Re-tag a quantity with a different physical type, keeping the numbers.
pub trait CastType {
    type TypeSelf<Q: PhysicalType>;
    fn cast_type<Q: PhysicalType>(self) -> Self::TypeSelf<Q>;
}

// lerp
pub trait Lerp<F> {
    fn lerp(self, to: F, fac: F) -> F;
}

impl<F: Num + Copy> Lerp<F> for F {
    fn lerp(self, to: F, fac: F) -> F {
        to * fac + (F::one() - fac) * self
    }
}
