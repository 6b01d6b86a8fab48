//! Slice kernels over row-major `f64` buffers
//!
//! Kernels assume validated dimensions: callers check shapes and allocate
//! `out` before dispatching. Indexing out of range panics like any slice
//! access, which only happens on a caller bug.

use crate::ops::{BinaryOp, MatmulParams};

/// Execute a binary operation element-wise
#[inline]
pub fn binary_op_kernel(op: BinaryOp, a: &[f64], b: &[f64], out: &mut [f64]) {
    debug_assert!(a.len() == out.len() && b.len() == out.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = op.apply(x, y);
    }
}

/// Multiply every element by `scalar`
#[inline]
pub fn scale_kernel(a: &[f64], scalar: f64, out: &mut [f64]) {
    debug_assert_eq!(a.len(), out.len());
    for (o, &x) in out.iter_mut().zip(a) {
        *o = x * scalar;
    }
}

/// Divide every element by `divisor`
#[inline]
pub fn div_scalar_kernel(a: &[f64], divisor: f64, out: &mut [f64]) {
    debug_assert_eq!(a.len(), out.len());
    for (o, &x) in out.iter_mut().zip(a) {
        *o = x / divisor;
    }
}

/// Matrix multiplication: C = A @ B
///
/// Plain triple loop; each output cell accumulates its products in
/// ascending `k` order starting from zero.
pub fn matmul_kernel(a: &[f64], b: &[f64], out: &mut [f64], params: MatmulParams) {
    let MatmulParams { m, k, n } = params;
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(out.len(), m * n);

    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        for j in 0..n {
            let mut sum = 0.0;
            for (kk, &a_val) in a_row.iter().enumerate() {
                sum += a_val * b[kk * n + j];
            }
            out[i * n + j] = sum;
        }
    }
}

/// Transpose a `rows × columns` matrix into a `columns × rows` buffer
pub fn transpose_kernel(a: &[f64], out: &mut [f64], rows: usize, columns: usize) {
    debug_assert_eq!(a.len(), rows * columns);
    debug_assert_eq!(out.len(), rows * columns);

    for i in 0..rows {
        for j in 0..columns {
            out[j * rows + i] = a[i * columns + j];
        }
    }
}

/// Copy the minor of an `n × n` matrix with `skip_row` and `skip_col`
/// removed into an `(n-1) × (n-1)` buffer, preserving relative order
pub fn minor_kernel(a: &[f64], n: usize, skip_row: usize, skip_col: usize, out: &mut [f64]) {
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(out.len(), (n - 1) * (n - 1));

    let mut dst = 0;
    for (i, row) in a.chunks_exact(n).enumerate() {
        if i == skip_row {
            continue;
        }
        for (j, &value) in row.iter().enumerate() {
            if j == skip_col {
                continue;
            }
            out[dst] = value;
            dst += 1;
        }
    }
}
