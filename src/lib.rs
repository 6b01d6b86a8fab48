//! # densemat
//!
//! **Dense, real-valued matrix arithmetic for small systems.**
//!
//! densemat allocates `f64` matrices, compares them approximately, and
//! computes sums, differences, scalar products, matrix products, transposes,
//! determinants, cofactor matrices, adjugates and inverses.
//!
//! ## Features
//!
//! - **Owned storage**: every result is a fresh matrix that owns its buffer
//! - **Typed errors**: `InvalidShape`, `DimensionMismatch`, `SingularMatrix`,
//!   with integer [`Status`](error::Status) codes for code-based callers
//! - **Cofactor expansion**: determinant, cofactor matrix and inverse by
//!   recursive minors, exact for small integer matrices
//!
//! Determinants use direct cofactor expansion with no pivoting. Cost grows
//! factorially with the matrix order, so this crate targets small matrices.
//!
//! ## Quick Start
//!
//! ```rust
//! use densemat::prelude::*;
//!
//! let engine = Engine::new();
//!
//! let a = Matrix::from_rows(&[[2.0, 5.0, 7.0], [6.0, 3.0, 4.0], [5.0, -2.0, -3.0]])?;
//! let inv = engine.inverse(&a)?;
//! let eye = engine.multiply(&a, &inv)?;
//!
//! assert!(engine.equals(&eye, &Matrix::identity(3)?));
//! # Ok::<(), densemat::error::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod ops;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::LinearAlgebraAlgorithms;
    pub use crate::engine::{Engine, EngineOptions};
    pub use crate::error::{Error, Result, Status};
    pub use crate::matrix::{Matrix, Shape};
    pub use crate::ops::{BinaryOps, CompareOps, CompareOptions, MatmulOps, ScalarOps, ShapeOps};
}
