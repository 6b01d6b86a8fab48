//! Determinant, cofactor matrix, adjugate and inverse
//!
//! Everything here is built on recursive cofactor expansion. Each minor is an
//! owned [`Matrix`] scoped to one term of the expansion, so it is released on
//! every exit path, including an early `?` return.

use super::Engine;
use super::kernels::{div_scalar_kernel, minor_kernel};
use crate::algorithm::linalg::{
    LinearAlgebraAlgorithms, cofactor_sign, validate_cofactor_input, validate_square_matrix,
};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::ops::ShapeOps;

impl LinearAlgebraAlgorithms for Engine {
    fn determinant(&self, a: &Matrix) -> Result<f64> {
        validate_square_matrix("determinant", a)?;
        det_expand(a)
    }

    fn cofactor_matrix(&self, a: &Matrix) -> Result<Matrix> {
        let n = validate_cofactor_input("cofactor_matrix", a)?;
        cofactor_matrix_impl(a, n)
    }

    fn adjugate(&self, a: &Matrix) -> Result<Matrix> {
        let cofactors = self.cofactor_matrix(a)?;
        self.transpose(&cofactors)
    }

    fn inverse(&self, a: &Matrix) -> Result<Matrix> {
        let n = validate_square_matrix("inverse", a)?;

        let det = det_expand(a)?;
        // Exact comparison, no tolerance
        if det == 0.0 {
            return Err(Error::SingularMatrix);
        }

        // adj([[x]]) = [[1]]
        if n == 1 {
            return Matrix::from_slice(&[1.0 / det], 1, 1);
        }

        let adjugate = self.adjugate(a)?;
        let mut out = Matrix::zeros(n, n)?;
        div_scalar_kernel(adjugate.as_slice(), det, out.as_mut_slice());
        Ok(out)
    }
}

/// Minor of a validated `n × n` matrix with `row` and `col` removed
///
/// Requires `n ≥ 2`.
pub(crate) fn minor(a: &Matrix, row: usize, col: usize) -> Result<Matrix> {
    let n = a.rows();
    let mut out = Matrix::zeros(n - 1, n - 1)?;
    minor_kernel(a.as_slice(), n, row, col, out.as_mut_slice());
    Ok(out)
}

/// Determinant of a validated square matrix by first-row expansion
fn det_expand(a: &Matrix) -> Result<f64> {
    let n = a.rows();
    let cells = a.as_slice();

    match n {
        1 => Ok(cells[0]),
        2 => Ok(cells[0] * cells[3] - cells[1] * cells[2]),
        _ => {
            let mut det = 0.0;
            for (k, &pivot) in cells[..n].iter().enumerate() {
                let sub = minor(a, 0, k)?;
                det += cofactor_sign(k) * pivot * det_expand(&sub)?;
            }
            Ok(det)
        }
    }
}

fn cofactor_matrix_impl(a: &Matrix, n: usize) -> Result<Matrix> {
    let mut out = Matrix::zeros(n, n)?;
    for i in 0..n {
        for j in 0..n {
            let sub = minor(a, i, j)?;
            out[(i, j)] = cofactor_sign(i + j) * det_expand(&sub)?;
        }
    }
    Ok(out)
}
