mod vector;
pub use vector::*;

mod scalar;
pub use scalar::*;

mod angle;
pub use angle::*;

mod calculus;
