//! Operation traits for matrix operations.
//!
//! This module contains trait definitions for the matrix operations.
//! Implementations live in [`engine`](crate::engine).

mod binary;
mod compare;
mod matmul;
mod scalar;
mod shape;

pub use binary::BinaryOps;
pub use compare::CompareOps;
pub use matmul::MatmulOps;
pub use scalar::ScalarOps;
pub use shape::ShapeOps;
