//! Matrix engine
//!
//! [`Engine`] is the client through which every operation is dispatched. It
//! is stateless apart from its [`EngineOptions`], runs every operation
//! synchronously on the calling thread, and allocates only the result and
//! the temporaries (minors, intermediates) local to one call.
//!
//! ```text
//! Engine
//!   ├── ops.rs      CompareOps, BinaryOps, ScalarOps, MatmulOps, ShapeOps
//!   ├── linalg.rs   LinearAlgebraAlgorithms (recursive cofactor expansion)
//!   └── kernels.rs  slice kernels over row-major buffers
//! ```

mod client;
mod kernels;
mod linalg;
mod ops;

pub use client::{Engine, EngineOptions};
