//! Engine client and its configuration

use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::CompareOptions;

/// Configuration for an [`Engine`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineOptions {
    /// Options used by [`CompareOps::equals`](crate::ops::CompareOps::equals)
    pub compare: CompareOptions,
}

impl EngineOptions {
    /// Set the comparison options
    pub fn with_compare(mut self, compare: CompareOptions) -> Self {
        self.compare = compare;
        self
    }
}

/// Client for matrix operation dispatch
///
/// Holds no matrices and no mutable state, so one engine can be shared
/// freely; concurrent calls on disjoint matrices need no locking.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    /// Create an engine with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit options
    pub fn with_options(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Get the engine options
    #[inline]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Allocate a zero-filled `rows × columns` matrix
    pub fn create(&self, rows: isize, columns: isize) -> Result<Matrix> {
        Matrix::new(rows, columns)
    }

    /// Create an `n × n` identity matrix
    pub fn identity(&self, n: usize) -> Result<Matrix> {
        Matrix::identity(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let engine = Engine::new();
        assert_eq!(engine.options().compare, CompareOptions::default());
    }

    #[test]
    fn test_with_options() {
        let opts = EngineOptions::default().with_compare(CompareOptions::new(3, 1e-3));
        let engine = Engine::with_options(opts);
        assert_eq!(engine.options().compare.decimals, 3);
    }

    #[test]
    fn test_create_passes_through() {
        let engine = Engine::new();
        assert!(engine.create(2, 3).is_ok());
        assert!(engine.create(0, 3).is_err());
        assert_eq!(engine.identity(2).unwrap().to_vec(), [1.0, 0.0, 0.0, 1.0]);
    }
}
