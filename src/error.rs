//! errors reported before any numeric work is done

use thiserror::Error;

/// Input validation errors of the Grand Index computations.
///
/// Degenerate normalizations (null total information, expectation equal to 1.)
/// are not errors, they show up as a non finite index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GriError {
    /// the two clusterings do not describe the same number of objects
    #[error("arrays 'u' and 'v' must have the same number of columns, got {u_objects} and {v_objects}")]
    ShapeMismatch { u_objects: usize, v_objects: usize },
    /// a membership degree outside \[0., 1.\] (or NaN)
    #[error(
        "all elements from '{matrix}' must assume values between 0.0 and 1.0, got {value} at cluster {cluster}, object {object}"
    )]
    DomainViolation {
        matrix: &'static str,
        cluster: usize,
        object: usize,
        value: f64,
    },
}
