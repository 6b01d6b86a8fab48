//! Matrix types
//!
//! This module provides the core `Matrix` type: a dense, row-major matrix of
//! `f64` values that exclusively owns its buffer.

mod core;
mod shape;
mod storage;

pub use core::Matrix;
pub use shape::Shape;
pub use storage::Storage;
