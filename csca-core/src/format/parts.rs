//! Raw CSC parts bundle
//!
//! The three parallel arrays of a compressed sparse column matrix together
//! with its shape. This is the hand-off type between storages and external
//! consumers that expect the exact CSC layout (for example a native sparse
//! factorization adapter).

extern crate alloc;
use alloc::vec::Vec;

use crate::error::Result;
use crate::validation::validate_csc_structure;

/// Owned CSC arrays plus shape
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CscParts<T> {
    /// Number of rows
    pub nrows: usize,
    /// Number of columns
    pub ncols: usize,
    /// Stored values, column by column
    pub values: Vec<T>,
    /// Row index of each stored value
    pub row_indices: Vec<usize>,
    /// Column start offsets, length ncols + 1
    pub column_pointers: Vec<usize>,
}

impl<T> CscParts<T> {
    /// Bundle raw arrays without checking them
    pub const fn new(
        nrows: usize,
        ncols: usize,
        values: Vec<T>,
        row_indices: Vec<usize>,
        column_pointers: Vec<usize>,
    ) -> Self {
        Self {
            nrows,
            ncols,
            values,
            row_indices,
            column_pointers,
        }
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Check the arrays against the CSC invariants
    pub fn validate(&self) -> Result<()> {
        validate_csc_structure(
            self.nrows,
            self.ncols,
            self.values.len(),
            &self.row_indices,
            &self.column_pointers,
        )
    }
}
