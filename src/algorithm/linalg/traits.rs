//! Linear algebra algorithm trait definitions

use crate::error::Result;
use crate::matrix::Matrix;

/// Determinant, cofactor and inverse algorithms for square matrices
///
/// All methods reject an invalid operand with `Error::InvalidShape` and a
/// non-square operand with `Error::DimensionMismatch`. Inputs are never
/// mutated.
pub trait LinearAlgebraAlgorithms {
    /// Determinant by cofactor expansion along the first row
    ///
    /// # Algorithm
    ///
    /// ```text
    /// n = 1: det = a00
    /// n = 2: det = a00*a11 - a01*a10
    /// n ≥ 3: det = Σ_k (-1)^k * a0k * det(M_0k)
    /// ```
    ///
    /// where `M_0k` is the minor with row 0 and column `k` removed. Each minor
    /// is allocated for one term and released before the next; an error from
    /// any nested call is returned immediately.
    fn determinant(&self, a: &Matrix) -> Result<f64>;

    /// Cofactor matrix: `C[i][j] = (-1)^(i+j) * det(M_ij)`
    ///
    /// Requires `n ≥ 2`; a 1×1 matrix has no minors and is rejected with
    /// `Error::DimensionMismatch`.
    fn cofactor_matrix(&self, a: &Matrix) -> Result<Matrix>;

    /// Adjugate: transpose of the cofactor matrix
    ///
    /// Same requirements as [`cofactor_matrix`](Self::cofactor_matrix).
    fn adjugate(&self, a: &Matrix) -> Result<Matrix>;

    /// Inverse: `adj(A) / det(A)`
    ///
    /// Returns `Error::SingularMatrix` if the determinant is exactly zero.
    /// Otherwise every cell of the adjugate is divided by the determinant;
    /// a 1×1 matrix `[[x]]` inverts to `[[1 / x]]`.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::prelude::*;
    ///
    /// let engine = Engine::new();
    /// let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]])?;
    /// let inv = engine.inverse(&a)?;
    ///
    /// let expected = Matrix::from_rows(&[[0.6, -0.7], [-0.2, 0.4]])?;
    /// assert!(engine.equals(&inv, &expected));
    /// # Ok::<(), densemat::error::Error>(())
    /// ```
    fn inverse(&self, a: &Matrix) -> Result<Matrix>;
}
