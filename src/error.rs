use thiserror::Error;

/// Errors produced by fallible conversions on tagged quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhysVecError {
    /// A slice was converted into a vector of a different dimension.
    #[error("dimension mismatch: expected {expected} components, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A component was NaN where a totally ordered value was required.
    #[error("component {index} is NaN")]
    NanComponent { index: usize },
}
