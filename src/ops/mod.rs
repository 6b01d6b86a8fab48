//! Matrix operations
//!
//! This module defines operation traits and the validation helpers shared by
//! their implementations.
//!
//! # Design
//!
//! Operations are defined as traits implemented by [`Engine`](crate::engine::Engine).
//! Every operation validates its operands first, then allocates a fresh result
//! and runs a slice kernel over the operands' row-major buffers.
//!
//! ```text
//! Engine
//!   ├── CompareOps   equals, equals_with
//!   ├── BinaryOps    add, subtract
//!   ├── ScalarOps    scale
//!   ├── MatmulOps    multiply
//!   └── ShapeOps     transpose
//! ```
//!
//! # Validation Order
//!
//! 1. Every operand must be valid, else [`Error::InvalidShape`](crate::error::Error::InvalidShape).
//! 2. Shapes must be compatible, else [`Error::DimensionMismatch`](crate::error::Error::DimensionMismatch).
//!
//! Inputs are never mutated and a failing operation produces no result.

mod arithmetic;
mod compare;
mod matmul;
pub mod traits;

pub use arithmetic::*;
pub use compare::*;
pub use matmul::*;
pub use traits::*;
