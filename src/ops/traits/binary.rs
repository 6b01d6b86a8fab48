//! Binary operations trait.
//!
//! This trait defines element-wise binary operations on matrices.

use crate::error::Result;
use crate::matrix::Matrix;

/// Element-wise binary operations on matrices.
///
/// Both operands must be valid and have identical shapes; there is no
/// broadcasting.
///
/// # Example
///
/// ```
/// use densemat::prelude::*;
///
/// let engine = Engine::new();
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]])?;
///
/// let c = engine.add(&a, &b)?;
/// assert_eq!(c.to_vec(), [6.0, 8.0, 10.0, 12.0]);
/// # Ok::<(), densemat::error::Error>(())
/// ```
pub trait BinaryOps {
    /// Element-wise addition: a + b
    ///
    /// # Errors
    /// - `Error::InvalidShape` if either operand is invalid
    /// - `Error::DimensionMismatch` if the shapes differ
    fn add(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;

    /// Element-wise subtraction: a - b
    ///
    /// # Errors
    /// - `Error::InvalidShape` if either operand is invalid
    /// - `Error::DimensionMismatch` if the shapes differ
    fn subtract(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}
