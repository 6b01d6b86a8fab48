//! Storage: exclusively owned, fallibly allocated cell buffer

use crate::error::{Error, Result};

/// Backing buffer for a matrix
///
/// Storage is never shared between matrices: `Clone` performs a deep copy.
/// Memory is released when the storage is dropped or [`Storage::release`]d.
#[derive(Clone, Default, PartialEq)]
pub struct Storage {
    data: Vec<f64>,
}

impl Storage {
    /// Allocate `len` zero-filled cells
    ///
    /// A failed reservation is reported as [`Error::InvalidShape`] carrying the
    /// requested dimensions, since the caller cannot distinguish it from an
    /// unusable shape.
    pub fn zeroed(len: usize, rows: usize, columns: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::invalid_dims(rows, columns))?;
        data.resize(len, 0.0);
        Ok(Self { data })
    }

    /// Allocate storage holding a copy of `values`
    pub fn from_slice(values: &[f64], rows: usize, columns: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(values.len())
            .map_err(|_| Error::invalid_dims(rows, columns))?;
        data.extend_from_slice(values);
        Ok(Self { data })
    }

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the storage holds no cells (never allocated or released)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View as a slice
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// View as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Free the buffer, leaving empty storage behind
    pub fn release(&mut self) {
        self.data = Vec::new();
    }

    /// Size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<f64>()
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.data.len())
            .field("capacity", &self.data.capacity())
            .finish()
    }
}
