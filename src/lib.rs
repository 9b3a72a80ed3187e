pub mod error;
pub mod markers;
pub mod math;
pub mod num;
pub mod quantities;
pub mod traits;

pub use error::PhysVecError;
pub use math::{vector, Scalar, Vector};
pub use quantities::*;
pub use traits::CastType;
