//! Shape operations trait.

use crate::error::Result;
use crate::matrix::Matrix;

/// Shape operations
pub trait ShapeOps {
    /// Transpose: swap rows and columns
    ///
    /// Returns a new `[columns, rows]` matrix with `out[j][i] = a[i][j]`.
    ///
    /// # Errors
    /// - `Error::InvalidShape` if `a` is invalid
    fn transpose(&self, a: &Matrix) -> Result<Matrix>;
}
