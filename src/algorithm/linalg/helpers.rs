//! Helper functions for linear algebra operations
//!
//! Validation utilities and common helper functions.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::ops::validate_operand;

/// Validate matrix is valid and square
///
/// Returns the order `n` of the `n × n` matrix.
pub fn validate_square_matrix(op: &'static str, a: &Matrix) -> Result<usize> {
    let shape = validate_operand(a)?;
    if !shape.is_square() {
        return Err(Error::dimension_mismatch(
            op,
            shape.as_array(),
            [shape.rows(), shape.rows()],
        ));
    }
    Ok(shape.rows())
}

/// Validate matrix admits a cofactor matrix (square, order >= 2)
///
/// A 1×1 matrix has no minors, so it is rejected as a dimension mismatch.
pub fn validate_cofactor_input(op: &'static str, a: &Matrix) -> Result<usize> {
    let n = validate_square_matrix(op, a)?;
    if n < 2 {
        return Err(Error::dimension_mismatch(op, [n, n], [2, 2]));
    }
    Ok(n)
}

/// Cofactor sign `(-1)^s`
#[inline]
pub fn cofactor_sign(s: usize) -> f64 {
    if s % 2 == 0 { 1.0 } else { -1.0 }
}
