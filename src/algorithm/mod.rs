//! Algorithm contracts
//!
//! This module defines trait-based contracts for the matrix algorithms that
//! go beyond single-pass kernels. Each algorithm is defined as a trait first,
//! with its exact method described on the trait, then implemented by
//! [`Engine`](crate::engine::Engine).
//!
//! # Available Algorithm Contracts
//!
//! - [`LinearAlgebraAlgorithms`] - determinant, cofactor matrix, adjugate, inverse

pub mod linalg;

pub use linalg::LinearAlgebraAlgorithms;
