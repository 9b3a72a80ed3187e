use bytemuck::Zeroable;

/// Compile-time tag distinguishing vectors that represent different physical
/// quantities but share the same numeric shape.
///
/// Markers are zero-sized and only ever appear behind `PhantomData`; mixing
/// two quantities with different markers is a type error, not a runtime
/// check.
pub trait PhysicalType: Copy + Default + 'static {
    /// Lower-case human-readable name of the quantity.
    const NAME: &'static str;

    /// SI unit the components are expressed in. Empty for [`Typeless`].
    const SI_UNIT: &'static str;
}

/// Quantity whose time derivative is itself a tagged quantity.
pub trait Differentiable: PhysicalType {
    type Derivative: PhysicalType;
}

/// Quantity whose time integral is itself a tagged quantity.
pub trait Integrable: PhysicalType {
    type Integral: PhysicalType;
}

macro_rules! physical_type {
    ($(#[$meta:meta])* $name:ident, $human:literal, $unit:literal) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable,
        )]
        pub struct $name;

        impl PhysicalType for $name {
            const NAME: &'static str = $human;
            const SI_UNIT: &'static str = $unit;
        }
    };
}

physical_type!(
    /// Plain numbers with no physical meaning, used for gains and unit
    /// directions.
    Typeless,
    "typeless",
    ""
);
physical_type!(Time, "time", "s");
physical_type!(Mass, "mass", "kg");
physical_type!(Energy, "energy", "J");
physical_type!(Position, "position", "m");
physical_type!(Velocity, "velocity", "m/s");
physical_type!(Acceleration, "acceleration", "m/s²");
physical_type!(Jerk, "jerk", "m/s³");
physical_type!(Force, "force", "N");
physical_type!(Momentum, "momentum", "kg·m/s");
physical_type!(
    /// Rotation-vector angle, the integral of [`AngularVelocity`].
    Angle,
    "angle",
    "rad"
);
physical_type!(AngularVelocity, "angular velocity", "rad/s");
physical_type!(AngularAcceleration, "angular acceleration", "rad/s²");
physical_type!(AngularJerk, "angular jerk", "rad/s³");
physical_type!(Torque, "torque", "N·m");
physical_type!(AngularMomentum, "angular momentum", "kg·m²/s");

macro_rules! time_derivative {
    ($int:ident => $der:ident) => {
        impl Differentiable for $int {
            type Derivative = $der;
        }

        impl Integrable for $der {
            type Integral = $int;
        }
    };
}

time_derivative!(Position => Velocity);
time_derivative!(Velocity => Acceleration);
time_derivative!(Acceleration => Jerk);
time_derivative!(Angle => AngularVelocity);
time_derivative!(AngularVelocity => AngularAcceleration);
time_derivative!(AngularAcceleration => AngularJerk);
time_derivative!(Momentum => Force);
time_derivative!(AngularMomentum => Torque);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_derivative<P: Differentiable<Derivative = D>, D: PhysicalType>() {}

    #[test]
    fn markers_are_zero_sized() {
        assert_eq!(std::mem::size_of::<AngularJerk>(), 0);
        assert_eq!(std::mem::size_of::<Typeless>(), 0);
        assert_eq!(std::mem::size_of::<Momentum>(), 0);
    }

    #[test]
    fn units() {
        assert_eq!(AngularJerk::SI_UNIT, "rad/s³");
        assert_eq!(AngularJerk::NAME, "angular jerk");
        assert_eq!(Typeless::SI_UNIT, "");
        assert_eq!(Force::SI_UNIT, "N");
    }

    #[test]
    fn kinematic_chains() {
        assert_derivative::<Position, Velocity>();
        assert_derivative::<Velocity, Acceleration>();
        assert_derivative::<Acceleration, Jerk>();
        assert_derivative::<Angle, AngularVelocity>();
        assert_derivative::<AngularVelocity, AngularAcceleration>();
        assert_derivative::<AngularAcceleration, AngularJerk>();
        assert_derivative::<Momentum, Force>();
        assert_derivative::<AngularMomentum, Torque>();
    }
}
