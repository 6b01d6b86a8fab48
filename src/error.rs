//! Error types for densemat

use thiserror::Error;

/// Result type alias using densemat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in matrix operations
///
/// Variants are declared in taxonomy order; see [`Error::status`] for the
/// code each one reports.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A matrix argument has non-positive dimensions or no backing buffer
    #[error("Invalid matrix shape: {rows}x{columns}")]
    InvalidShape {
        /// Row count as seen by the operation
        rows: isize,
        /// Column count as seen by the operation
        columns: isize,
    },

    /// Shapes are individually valid but incompatible for the operation
    #[error("Dimension mismatch in '{op}': {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side shape `[rows, columns]`
        lhs: [usize; 2],
        /// Right-hand side (or required) shape `[rows, columns]`
        rhs: [usize; 2],
    },

    /// Square matrix with an exactly zero determinant passed to inverse
    #[error("Matrix is singular (determinant is zero)")]
    SingularMatrix,
}

impl Error {
    /// Create an invalid shape error
    pub fn invalid_shape(rows: isize, columns: isize) -> Self {
        Self::InvalidShape { rows, columns }
    }

    /// Create an invalid shape error from unsigned dimensions
    ///
    /// Dimensions above `isize::MAX` saturate.
    pub fn invalid_dims(rows: usize, columns: usize) -> Self {
        Self::invalid_shape(saturating_isize(rows), saturating_isize(columns))
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(op: &'static str, lhs: [usize; 2], rhs: [usize; 2]) -> Self {
        Self::DimensionMismatch { op, lhs, rhs }
    }

    /// Status code reported for this error
    ///
    /// `SingularMatrix` has no code of its own and reports
    /// [`Status::DimensionMismatch`], the calculation-error code.
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidShape { .. } => Status::InvalidShape,
            Self::DimensionMismatch { .. } | Self::SingularMatrix => Status::DimensionMismatch,
        }
    }
}

fn saturating_isize(v: usize) -> isize {
    isize::try_from(v).unwrap_or(isize::MAX)
}

/// Integer status codes for callers that consume plain result codes
///
/// The set and order of codes are fixed. Use the [`Error`] variant to tell a
/// singular matrix apart from a shape mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    /// Operation succeeded
    Ok = 0,
    /// See [`Error::InvalidShape`]
    InvalidShape = 1,
    /// See [`Error::DimensionMismatch`] and [`Error::SingularMatrix`]
    DimensionMismatch = 2,
}

impl Status {
    /// Status of an operation result
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(e) => e.status(),
        }
    }

    /// Numeric code
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether this status denotes success
    #[inline]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl From<&Error> for Status {
    fn from(err: &Error) -> Self {
        err.status()
    }
}
