//! Operation trait implementations for the engine

use super::Engine;
use super::kernels::{binary_op_kernel, matmul_kernel, scale_kernel, transpose_kernel};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::{
    BinaryOp, BinaryOps, CompareOps, CompareOptions, MatmulOps, ScalarOps, ShapeOps,
    approx_equal, matmul_params, validate_operand, validate_same_shape,
};

impl Engine {
    fn binary_op(&self, op: BinaryOp, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let shape = validate_same_shape(op.name(), a, b)?;
        let mut out = Matrix::zeros(shape.rows(), shape.columns())?;
        binary_op_kernel(op, a.as_slice(), b.as_slice(), out.as_mut_slice());
        Ok(out)
    }
}

impl CompareOps for Engine {
    fn equals(&self, a: &Matrix, b: &Matrix) -> bool {
        approx_equal(a, b, &self.options().compare)
    }

    fn equals_with(&self, a: &Matrix, b: &Matrix, opts: &CompareOptions) -> bool {
        approx_equal(a, b, opts)
    }
}

impl BinaryOps for Engine {
    fn add(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        self.binary_op(BinaryOp::Add, a, b)
    }

    fn subtract(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        self.binary_op(BinaryOp::Sub, a, b)
    }
}

impl ScalarOps for Engine {
    fn scale(&self, a: &Matrix, scalar: f64) -> Result<Matrix> {
        let shape = validate_operand(a)?;
        let mut out = Matrix::zeros(shape.rows(), shape.columns())?;
        scale_kernel(a.as_slice(), scalar, out.as_mut_slice());
        Ok(out)
    }
}

impl MatmulOps for Engine {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let params = matmul_params(a, b)?;
        let out_shape = params.output_shape();
        let mut out = Matrix::zeros(out_shape.rows(), out_shape.columns())?;
        matmul_kernel(a.as_slice(), b.as_slice(), out.as_mut_slice(), params);
        Ok(out)
    }
}

impl ShapeOps for Engine {
    fn transpose(&self, a: &Matrix) -> Result<Matrix> {
        let shape = validate_operand(a)?;
        let out_shape = shape.transposed();
        let mut out = Matrix::zeros(out_shape.rows(), out_shape.columns())?;
        transpose_kernel(
            a.as_slice(),
            out.as_mut_slice(),
            shape.rows(),
            shape.columns(),
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineOptions;
    use crate::error::Error;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_add_and_subtract() {
        let engine = Engine::new();
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[0.5, -2.0], &[10.0, 0.0]]);

        let sum = engine.add(&a, &b).unwrap();
        assert_eq!(sum.to_vec(), [1.5, 0.0, 13.0, 4.0]);

        let diff = engine.subtract(&a, &b).unwrap();
        assert_eq!(diff.to_vec(), [0.5, 4.0, -7.0, 4.0]);

        // inputs untouched
        assert_eq!(a.to_vec(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_add_shape_mismatch() {
        let engine = Engine::new();
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(3, 2).unwrap();
        assert!(matches!(
            engine.add(&a, &b),
            Err(Error::DimensionMismatch { op: "add", .. })
        ));
        assert!(matches!(
            engine.subtract(&a, &b),
            Err(Error::DimensionMismatch { op: "subtract", .. })
        ));
    }

    #[test]
    fn test_invalid_operand_wins_over_mismatch() {
        let engine = Engine::new();
        let a = Matrix::new(2, 3).unwrap();
        assert!(matches!(
            engine.add(&a, &Matrix::default()),
            Err(Error::InvalidShape { .. })
        ));
        assert!(matches!(
            engine.multiply(&Matrix::default(), &a),
            Err(Error::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_scale() {
        let engine = Engine::new();
        let a = m(&[&[1.0, -2.0, 3.5]]);
        assert_eq!(engine.scale(&a, 2.0).unwrap().to_vec(), [2.0, -4.0, 7.0]);
        assert_eq!(engine.scale(&a, -1.0).unwrap().to_vec(), [-1.0, 2.0, -3.5]);

        let zero = engine.scale(&a, 0.0).unwrap();
        assert_eq!(zero.shape().as_array(), [1, 3]);
        assert!(zero.as_slice().iter().all(|&v| v == 0.0));

        assert!(matches!(
            engine.scale(&Matrix::default(), 2.0),
            Err(Error::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_multiply() {
        let engine = Engine::new();
        let a = m(&[&[1.0, 2.0, 3.0]]);
        let b = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let c = engine.multiply(&a, &b).unwrap();
        assert_eq!(c.shape().as_array(), [1, 2]);
        assert_eq!(c.to_vec(), [22.0, 28.0]);

        let c = engine.multiply(&b, &a.clone());
        assert!(matches!(c, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_transpose() {
        let engine = Engine::new();
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = engine.transpose(&a).unwrap();
        assert_eq!(t.shape().as_array(), [3, 2]);
        assert_eq!(t.to_vec(), [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);

        let mut released = a.clone();
        released.release();
        assert!(matches!(
            engine.transpose(&released),
            Err(Error::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_equals_uses_engine_options() {
        let a = m(&[&[1.0, 2.0]]);
        let b = m(&[&[1.001, 2.0]]);

        assert!(!Engine::new().equals(&a, &b));

        let loose = EngineOptions::default().with_compare(CompareOptions::new(2, 1e-2));
        assert!(Engine::with_options(loose).equals(&a, &b));
        assert!(Engine::new().equals_with(&a, &b, &CompareOptions::new(2, 1e-2)));
    }
}
