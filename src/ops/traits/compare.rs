//! Comparison operations trait.

use crate::matrix::Matrix;
use crate::ops::CompareOptions;

/// Comparison operations trait
pub trait CompareOps {
    /// Approximate equality using the implementor's configured options
    ///
    /// Returns `false` if either matrix is invalid or the shapes differ.
    fn equals(&self, a: &Matrix, b: &Matrix) -> bool;

    /// Approximate equality with explicit options
    fn equals_with(&self, a: &Matrix, b: &Matrix, opts: &CompareOptions) -> bool;
}
