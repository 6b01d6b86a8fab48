//! Randomized property checks over small shapes
//!
//! Each test draws matrices from a fixed seed so failures reproduce.

mod common;

use common::{create_engine, random_integer_matrix, random_matrix, seeded_rng};
use densemat::prelude::*;
use rand::Rng;

const CASES: usize = 64;

#[test]
fn test_equals_is_reflexive_and_symmetric() {
    let engine = create_engine();
    let mut rng = seeded_rng(1);
    for _ in 0..CASES {
        let rows = rng.random_range(1..=5);
        let columns = rng.random_range(1..=5);
        let a = random_matrix(&mut rng, rows, columns);
        let b = random_matrix(&mut rng, rows, columns);
        assert!(engine.equals(&a, &a));
        assert_eq!(engine.equals(&a, &b), engine.equals(&b, &a));
    }
}

#[test]
fn test_differing_shapes_never_equal() {
    let engine = create_engine();
    let mut rng = seeded_rng(2);
    for _ in 0..CASES {
        let rows = rng.random_range(1..=4);
        let columns = rng.random_range(1..=4);
        let a = random_matrix(&mut rng, rows, columns);
        let b = random_matrix(&mut rng, rows + 1, columns);
        assert!(!engine.equals(&a, &b));
    }
}

#[test]
fn test_add_then_subtract_roundtrips() {
    let engine = create_engine();
    let mut rng = seeded_rng(3);
    for _ in 0..CASES {
        let rows = rng.random_range(1..=6);
        let columns = rng.random_range(1..=6);
        let a = random_matrix(&mut rng, rows, columns);
        let b = random_matrix(&mut rng, rows, columns);
        let sum = engine.add(&a, &b).unwrap();
        let back = engine.subtract(&sum, &b).unwrap();
        assert!(engine.equals(&back, &a), "a = {a:?}, b = {b:?}");
    }
}

#[test]
fn test_transpose_is_an_involution() {
    let engine = create_engine();
    let mut rng = seeded_rng(4);
    for _ in 0..CASES {
        let rows = rng.random_range(1..=6);
        let columns = rng.random_range(1..=6);
        let a = random_matrix(&mut rng, rows, columns);
        let t = engine.transpose(&a).unwrap();
        assert_eq!(t.shape(), a.shape().transposed());
        let tt = engine.transpose(&t).unwrap();
        assert_eq!(tt, a);
    }
}

#[test]
fn test_identity_determinant_is_one() {
    let engine = create_engine();
    for n in 1..=7 {
        let eye = Matrix::identity(n).unwrap();
        assert_eq!(engine.determinant(&eye).unwrap(), 1.0, "n = {n}");
    }
}

#[test]
fn test_multiply_by_inverse_gives_identity() {
    let engine = create_engine();
    let mut rng = seeded_rng(5);
    let mut checked = 0;
    while checked < CASES {
        let n = rng.random_range(1..=4);
        let a = random_integer_matrix(&mut rng, n);
        match engine.inverse(&a) {
            Ok(inv) => {
                let product = engine.multiply(&a, &inv).unwrap();
                let eye = Matrix::identity(n).unwrap();
                assert!(engine.equals(&product, &eye), "a = {a:?}, a^-1 = {inv:?}");
                checked += 1;
            }
            Err(Error::SingularMatrix) => {
                assert_eq!(engine.determinant(&a).unwrap(), 0.0);
            }
            Err(e) => panic!("unexpected error {e} for {a:?}"),
        }
    }
}

#[test]
fn test_multiply_mismatch_always_rejected() {
    let engine = create_engine();
    let mut rng = seeded_rng(6);
    for _ in 0..CASES {
        let m = rng.random_range(1..=4);
        let k = rng.random_range(1..=4);
        let n = rng.random_range(1..=4);
        let a = random_matrix(&mut rng, m, k);
        let b = random_matrix(&mut rng, k + 1, n);
        assert_eq!(
            Status::of(&engine.multiply(&a, &b)),
            Status::DimensionMismatch
        );
    }
}

#[test]
fn test_determinant_of_transpose_matches() {
    let engine = create_engine();
    let mut rng = seeded_rng(7);
    for _ in 0..CASES {
        let n = rng.random_range(1..=5);
        let a = random_integer_matrix(&mut rng, n);
        let t = engine.transpose(&a).unwrap();
        assert_eq!(
            engine.determinant(&a).unwrap(),
            engine.determinant(&t).unwrap()
        );
    }
}
