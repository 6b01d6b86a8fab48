//! Matrix multiplication operations trait.

use crate::error::Result;
use crate::matrix::Matrix;

/// Matrix multiplication operations
pub trait MatmulOps {
    /// Matrix multiplication: a @ b
    ///
    /// For `a` of shape `[M, K]` and `b` of shape `[K, N]`, returns the
    /// `[M, N]` matrix with `C[i][j] = sum_k(A[i][k] * B[k][j])`.
    ///
    /// # Errors
    /// - `Error::InvalidShape` if either operand is invalid
    /// - `Error::DimensionMismatch` if `a.columns() != b.rows()`
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::prelude::*;
    ///
    /// let engine = Engine::new();
    /// let a = Matrix::from_rows(&[[1.0, 2.0, 3.0]])?;
    /// let b = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]])?;
    ///
    /// let c = engine.multiply(&a, &b)?;
    /// assert_eq!(c.to_vec(), [22.0, 28.0]);
    /// # Ok::<(), densemat::error::Error>(())
    /// ```
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}
