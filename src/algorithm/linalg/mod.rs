//! Linear algebra algorithm contracts
//!
//! # Module Structure
//!
//! - `traits`: the LinearAlgebraAlgorithms trait
//! - `helpers`: validation utilities and cofactor signs
//!
//! # Numerical Limitations
//!
//! Determinants are computed by direct cofactor expansion along the first
//! row, with no pivoting or scaling. Cost grows as `O(n!)` and accuracy is
//! only acceptable for small, well-conditioned matrices. The singularity test
//! in `inverse` is an exact `det == 0.0` comparison.

pub mod helpers;
pub mod traits;

pub use helpers::*;
pub use traits::*;
