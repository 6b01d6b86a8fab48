//! Arithmetic operation helpers
//!
//! Operand validation shared by every operation. The operations themselves
//! are defined in the [`BinaryOps`](super::BinaryOps) and
//! [`ScalarOps`](super::ScalarOps) traits.

use crate::error::{Error, Result};
use crate::matrix::{Matrix, Shape};

/// Element-wise binary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// a + b
    Add,
    /// a - b
    Sub,
}

impl BinaryOp {
    /// Operation name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "subtract",
        }
    }

    /// Apply to a pair of cells
    #[inline]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
        }
    }
}

/// Reject an invalid operand
///
/// Returns the operand's shape on success.
pub fn validate_operand(a: &Matrix) -> Result<Shape> {
    if a.is_valid() {
        Ok(a.shape())
    } else {
        Err(Error::invalid_dims(a.rows(), a.columns()))
    }
}

/// Validate that both operands are valid and have identical shapes
pub fn validate_same_shape(op: &'static str, a: &Matrix, b: &Matrix) -> Result<Shape> {
    let a_shape = validate_operand(a)?;
    let b_shape = validate_operand(b)?;
    if a_shape != b_shape {
        return Err(Error::dimension_mismatch(
            op,
            a_shape.as_array(),
            b_shape.as_array(),
        ));
    }
    Ok(a_shape)
}
