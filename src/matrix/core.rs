//! Core Matrix type

use super::{Shape, Storage};
use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense, row-major matrix of `f64` values
///
/// A `Matrix` consists of:
/// - **Shape**: rows × columns
/// - **Storage**: an exclusively owned buffer of exactly `rows * columns`
///   cells, addressed as `row * columns + col`
///
/// # Validity
///
/// A matrix is *valid* when both dimensions are positive and the buffer holds
/// exactly `rows * columns` cells. [`Matrix::default`] (never created) and a
/// [`release`](Matrix::release)d matrix are invalid; every engine operation
/// rejects them with [`Error::InvalidShape`] before reading any cell.
///
/// # Example
///
/// ```
/// use densemat::prelude::*;
///
/// let mut m = Matrix::new(2, 2)?;
/// m[(0, 0)] = 4.0;
/// m[(1, 1)] = 2.0;
/// assert_eq!(m.get(1, 1), Some(2.0));
/// # Ok::<(), densemat::error::Error>(())
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Matrix {
    shape: Shape,
    storage: Storage,
}

impl Matrix {
    /// Allocate a `rows × columns` matrix with every cell set to zero
    ///
    /// Returns [`Error::InvalidShape`] if either dimension is not positive or
    /// the buffer cannot be allocated.
    pub fn new(rows: isize, columns: isize) -> Result<Self> {
        if rows <= 0 || columns <= 0 {
            return Err(Error::invalid_shape(rows, columns));
        }
        Self::zeros(rows as usize, columns as usize)
    }

    /// Allocate a zero-filled matrix from unsigned dimensions
    pub fn zeros(rows: usize, columns: usize) -> Result<Self> {
        let shape = Shape::new(rows, columns);
        if !shape.is_valid() {
            return Err(Error::invalid_dims(rows, columns));
        }
        let len = shape
            .checked_len()
            .ok_or_else(|| Error::invalid_dims(rows, columns))?;
        let storage = Storage::zeroed(len, rows, columns)?;
        Ok(Self { shape, storage })
    }

    /// Create a matrix from row-major data
    ///
    /// Returns [`Error::InvalidShape`] for non-positive dimensions and
    /// [`Error::DimensionMismatch`] if `data.len() != rows * columns`.
    pub fn from_slice(data: &[f64], rows: usize, columns: usize) -> Result<Self> {
        let shape = Shape::new(rows, columns);
        if !shape.is_valid() {
            return Err(Error::invalid_dims(rows, columns));
        }
        if shape.checked_len() != Some(data.len()) {
            return Err(Error::dimension_mismatch(
                "from_slice",
                shape.as_array(),
                [1, data.len()],
            ));
        }
        let storage = Storage::from_slice(data, rows, columns)?;
        Ok(Self { shape, storage })
    }

    /// Create a matrix from a list of rows
    ///
    /// All rows must have the same, positive length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        let mut out = Self::zeros(rows.len(), columns)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(Error::dimension_mismatch(
                    "from_rows",
                    [1, columns],
                    [1, row.len()],
                ));
            }
            out.row_mut(i).copy_from_slice(row);
        }
        Ok(out)
    }

    /// Create an `n × n` identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        let mut out = Self::zeros(n, n)?;
        for i in 0..n {
            out[(i, i)] = 1.0;
        }
        Ok(out)
    }

    /// Release the backing buffer
    ///
    /// The matrix becomes invalid (0 × 0, no buffer). Calling this again, or
    /// on a matrix that was never created, is a no-op. Dropping a matrix
    /// releases it as well.
    pub fn release(&mut self) {
        if self.is_valid() {
            self.storage.release();
        }
        self.shape = Shape::default();
    }

    // ===== Accessors =====

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    /// Number of columns
    #[inline]
    pub fn columns(&self) -> usize {
        self.shape.columns()
    }

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the matrix holds no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Whether the matrix has positive dimensions and a fully allocated buffer
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.shape.is_valid() && self.shape.checked_len() == Some(self.storage.len())
    }

    /// Whether rows == columns
    #[inline]
    pub fn is_square(&self) -> bool {
        self.shape.is_square()
    }

    /// Get the storage
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Row-major cell values
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.storage.as_slice()
    }

    /// Mutable row-major cell values
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.storage.as_mut_slice()
    }

    /// Copy cells out into a `Vec`
    pub fn to_vec(&self) -> Vec<f64> {
        self.storage.as_slice().to_vec()
    }

    /// Cell at `(row, col)`, or `None` if out of range
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows() && col < self.columns() {
            self.as_slice().get(self.shape.offset(row, col)).copied()
        } else {
            None
        }
    }

    /// Set cell `(row, col)`
    ///
    /// Returns [`Error::InvalidShape`] if the matrix is invalid or the index is
    /// out of range.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if !self.is_valid() || row >= self.rows() || col >= self.columns() {
            return Err(Error::invalid_dims(row, col));
        }
        let offset = self.shape.offset(row, col);
        self.as_mut_slice()[offset] = value;
        Ok(())
    }

    /// Row `i` as a slice, or `None` if out of range
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.rows() && self.is_valid() {
            let start = self.shape.offset(i, 0);
            Some(&self.as_slice()[start..start + self.columns()])
        } else {
            None
        }
    }

    #[inline]
    fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let start = self.shape.offset(i, 0);
        let columns = self.columns();
        &mut self.as_mut_slice()[start..start + columns]
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on zero, so invalid matrices yield no rows
        let columns = self.columns().max(1);
        let rows = if self.is_valid() { self.rows() } else { 0 };
        self.as_slice().chunks_exact(columns).take(rows)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if the index is out of range.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows() && col < self.columns(),
            "index ({row}, {col}) out of range for {} matrix",
            self.shape
        );
        &self.as_slice()[self.shape.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows() && col < self.columns(),
            "index ({row}, {col}) out of range for {} matrix",
            self.shape
        );
        let offset = self.shape.offset(row, col);
        &mut self.as_mut_slice()[offset]
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &self.shape)
            .field("rows", &self.iter_rows().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix({})", self.shape)
    }
}
