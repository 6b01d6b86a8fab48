//! Scalar operations trait for matrix-scalar operations.

use crate::error::Result;
use crate::matrix::Matrix;

/// Scalar operations trait for matrix-scalar operations
pub trait ScalarOps {
    /// Multiply every cell by `scalar`: a * scalar
    ///
    /// A zero scalar yields an all-zero matrix of the same shape.
    ///
    /// # Errors
    /// - `Error::InvalidShape` if `a` is invalid
    fn scale(&self, a: &Matrix, scalar: f64) -> Result<Matrix>;
}
