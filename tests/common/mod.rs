//! Common test utilities
#![allow(dead_code)]

use densemat::engine::Engine;
use densemat::matrix::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Create an engine with default options for testing
pub fn create_engine() -> Engine {
    Engine::new()
}

/// Build a matrix from row literals
pub fn matrix_from(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

/// Deterministic RNG for property tests
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random `rows × columns` matrix with cells uniform in `[-10, 10)`
pub fn random_matrix(rng: &mut StdRng, rows: usize, columns: usize) -> Matrix {
    let data: Vec<f64> = (0..rows * columns)
        .map(|_| rng.random_range(-10.0..10.0))
        .collect();
    Matrix::from_slice(&data, rows, columns).unwrap()
}

/// Random `n × n` matrix with small integer cells in `[-5, 5]`
///
/// Integer cells keep cofactor expansion exact, so singularity is decided
/// without rounding noise.
pub fn random_integer_matrix(rng: &mut StdRng, n: usize) -> Matrix {
    let data: Vec<f64> = (0..n * n)
        .map(|_| rng.random_range(-5i32..=5) as f64)
        .collect();
    Matrix::from_slice(&data, n, n).unwrap()
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
