//! The physical-quantity alias family.
//!
//! Each vector quantity gets a generic alias over primitive type and
//! dimension plus fixed 3D instantiations for `f64` and `f32`; the
//! naturally-scalar quantities alias [`Scalar`] instead.

use paste::paste;

use crate::markers;
use crate::math::{Scalar, Vector};

macro_rules! vector_quantity {
    ($(#[$meta:meta])* $name:ident, $human:literal) => {
        paste! {
            $(#[$meta])*
            pub type $name<T, const N: usize> = Vector<markers::$name, T, N>;

            #[doc = concat!("3D ", $human, " vector with primitive type `f64`.")]
            pub type [<$name 3D>] = $name<f64, 3>;

            #[doc = concat!("3D ", $human, " vector with primitive type `f32`.")]
            pub type [<$name 3F>] = $name<f32, 3>;
        }
    };
}

macro_rules! scalar_quantity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub type $name<T = f64> = Scalar<markers::$name, T>;
    };
}

vector_quantity!(
    /// Untyped vector, for gains and unit directions.
    Typeless,
    "typeless"
);
vector_quantity!(
    /// Position vector.
    Position,
    "position"
);
vector_quantity!(
    /// Velocity vector.
    Velocity,
    "velocity"
);
vector_quantity!(
    /// Acceleration vector.
    Acceleration,
    "acceleration"
);
vector_quantity!(
    /// Jerk vector.
    Jerk,
    "jerk"
);
vector_quantity!(
    /// Rotation-vector angle.
    Angle,
    "angle"
);
vector_quantity!(
    /// Angular-velocity vector.
    AngularVelocity,
    "angular-velocity"
);
vector_quantity!(
    /// Angular-acceleration vector.
    AngularAcceleration,
    "angular-acceleration"
);
vector_quantity!(
    /// Angular-jerk vector.
    AngularJerk,
    "angular-jerk"
);
vector_quantity!(
    /// Force vector.
    Force,
    "force"
);
vector_quantity!(
    /// Momentum vector.
    Momentum,
    "momentum"
);
vector_quantity!(
    /// Torque vector.
    Torque,
    "torque"
);
vector_quantity!(
    /// Angular-momentum vector.
    AngularMomentum,
    "angular-momentum"
);

scalar_quantity!(
    /// Duration quantity.
    Time
);
scalar_quantity!(
    /// Mass quantity.
    Mass
);
scalar_quantity!(
    /// Energy quantity.
    Energy
);

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;
    use crate::math::vector;

    fn raw_instantiation(
        v: Vector<markers::AngularJerk, f64, 3>,
    ) -> Vector<markers::AngularJerk, f64, 3> {
        v
    }

    #[test]
    fn aliases_are_pure_instantiations() {
        // The alias introduces no behavioral or structural divergence from
        // the underlying instantiation.
        let jerk: AngularJerk3D = vector([0.1, 0.2, 0.3]);
        assert_eq!(raw_instantiation(jerk), jerk);

        assert_eq!(mem::size_of::<AngularJerk3D>(), mem::size_of::<[f64; 3]>());
        assert_eq!(mem::size_of::<AngularJerk3F>(), mem::size_of::<[f32; 3]>());
        assert_eq!(
            mem::align_of::<AngularJerk3D>(),
            mem::align_of::<[f64; 3]>()
        );
    }

    #[test]
    fn generic_alias_instantiates_any_dimension() {
        let planar: AngularJerk<f32, 2> = vector([0.5, -0.5]);
        assert_eq!(planar.x(), 0.5);

        let single: AngularJerk3F = AngularJerk::<f32, 3>::splat(1.);
        assert_eq!(single.to_array(), [1., 1., 1.]);
    }

    #[test]
    fn quantities_compose() {
        let v: Velocity3D = vector([1., 2., 3.]);
        let dt = Time::new(0.5);

        let offset: Position3D = v * dt;
        assert_eq!(offset, vector([0.5, 1., 1.5]));

        let twist: AngularVelocity3D = vector([0., 0., 1.]);
        let rotation: Angle3D = twist.integrate(dt);
        assert_eq!(rotation.z(), 0.5);
    }
}
