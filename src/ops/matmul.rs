//! Matrix multiplication helpers
//!
//! This module contains helper types and functions for matrix multiplication.
//! The actual operation is defined in the [`MatmulOps`](super::MatmulOps) trait.

use super::validate_operand;
use crate::error::{Error, Result};
use crate::matrix::{Matrix, Shape};

/// Matrix multiplication parameters
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatmulParams {
    /// Number of rows in A (M)
    pub m: usize,
    /// Number of columns in A / rows in B (K)
    pub k: usize,
    /// Number of columns in B (N)
    pub n: usize,
}

impl MatmulParams {
    /// Create params for C`[M,N]` = A`[M,K]` @ B`[K,N]`
    pub fn new(m: usize, k: usize, n: usize) -> Self {
        Self { m, k, n }
    }

    /// Output shape
    pub fn output_shape(&self) -> Shape {
        Shape::new(self.m, self.n)
    }
}

/// Validate matmul shapes and return dimensions (m, k, n)
///
/// Returns None if the inner dimensions differ.
pub fn validate_matmul_shapes(a: Shape, b: Shape) -> Option<(usize, usize, usize)> {
    if a.columns() != b.rows() {
        return None;
    }
    Some((a.rows(), a.columns(), b.columns()))
}

/// Validate both operands of a product and compute its parameters
pub fn matmul_params(a: &Matrix, b: &Matrix) -> Result<MatmulParams> {
    let a_shape = validate_operand(a)?;
    let b_shape = validate_operand(b)?;
    let (m, k, n) = validate_matmul_shapes(a_shape, b_shape).ok_or_else(|| {
        Error::dimension_mismatch("multiply", a_shape.as_array(), b_shape.as_array())
    })?;
    Ok(MatmulParams::new(m, k, n))
}
