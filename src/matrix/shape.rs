//! Shape type: rows × columns of a matrix

use std::fmt;

/// Dimensions of a matrix
///
/// A zero in either dimension marks a matrix that was never created or has
/// been released.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    rows: usize,
    columns: usize,
}

impl Shape {
    /// Create a shape.
    #[inline]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Whether both dimensions are positive.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.rows > 0 && self.columns > 0
    }

    /// Whether rows == columns.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Number of cells, or `None` on overflow.
    #[inline]
    pub const fn checked_len(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Number of cells, saturating at `usize::MAX`.
    #[inline]
    pub const fn len(&self) -> usize {
        match self.checked_len() {
            Some(len) => len,
            None => usize::MAX,
        }
    }

    /// Whether the shape holds no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shape with rows and columns swapped.
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self::new(self.columns, self.rows)
    }

    /// Shape as `[rows, columns]`.
    #[inline]
    pub const fn as_array(&self) -> [usize; 2] {
        [self.rows, self.columns]
    }

    /// Row-major offset of `(row, col)`.
    #[inline]
    pub const fn offset(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.rows, self.columns)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

impl From<[usize; 2]> for Shape {
    fn from(value: [usize; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<(usize, usize)> for Shape {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}
