//! Approximate equality helpers

use crate::matrix::Matrix;

/// Configuration for approximate matrix comparison
///
/// Each cell is first rounded to `decimals` decimal digits, then two cells
/// are equal when their absolute difference is strictly below `epsilon`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOptions {
    /// Decimal digits kept when rounding each cell (default: 7)
    pub decimals: i32,
    /// Absolute tolerance applied after rounding (default: 1e-7)
    pub epsilon: f64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            decimals: 7,
            epsilon: 1e-7,
        }
    }
}

impl CompareOptions {
    /// Create options with explicit rounding and tolerance
    pub fn new(decimals: i32, epsilon: f64) -> Self {
        Self { decimals, epsilon }
    }

    /// Set the rounding precision
    pub fn with_decimals(mut self, decimals: i32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the absolute tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Round a value to the configured number of decimal digits
    ///
    /// Halfway cases round away from zero.
    #[inline]
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimals);
        (value * scale).round() / scale
    }

    /// Whether two cells compare equal
    #[inline]
    pub fn cells_equal(&self, a: f64, b: f64) -> bool {
        (self.round(a) - self.round(b)).abs() < self.epsilon
    }
}

/// Approximate equality of two matrices
///
/// False if either matrix is invalid or the shapes differ; otherwise true
/// only if every cell pair satisfies [`CompareOptions::cells_equal`].
pub fn approx_equal(a: &Matrix, b: &Matrix, opts: &CompareOptions) -> bool {
    if !a.is_valid() || !b.is_valid() || a.shape() != b.shape() {
        return false;
    }
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .all(|(&x, &y)| opts.cells_equal(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = CompareOptions::default();
        assert_eq!(opts.decimals, 7);
        assert_eq!(opts.epsilon, 1e-7);
    }

    #[test]
    fn test_rounding_absorbs_tiny_noise() {
        let opts = CompareOptions::default();
        assert!(opts.cells_equal(1.0, 1.0 + 1e-9));
        assert!(opts.cells_equal(-0.33333333, -0.333333334));
        assert!(!opts.cells_equal(1.0, 1.000001));
    }

    #[test]
    fn test_builder_overrides() {
        let opts = CompareOptions::default().with_decimals(2).with_epsilon(0.05);
        assert!(opts.cells_equal(1.001, 1.004));
        assert!(!opts.cells_equal(1.0, 1.1));
    }

    #[test]
    fn test_non_positive_epsilon_never_matches() {
        let opts = CompareOptions::new(7, 0.0);
        assert!(!opts.cells_equal(1.0, 1.0));
    }

    #[test]
    fn test_approx_equal_shapes_and_validity() {
        let opts = CompareOptions::default();
        let a = Matrix::new(3, 4).unwrap();
        let b = Matrix::new(4, 3).unwrap();
        assert!(!approx_equal(&a, &b, &opts));
        assert!(approx_equal(&a, &a.clone(), &opts));
        assert!(!approx_equal(&a, &Matrix::default(), &opts));
        assert!(!approx_equal(&Matrix::default(), &Matrix::default(), &opts));
    }

    #[test]
    fn test_single_mismatch_fails_whole_matrix() {
        let opts = CompareOptions::default();
        let a = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let mut b = a.clone();
        b[(1, 1)] = 4.1;
        assert!(!approx_equal(&a, &b, &opts));
        assert!(!approx_equal(&b, &a, &opts));
    }
}
