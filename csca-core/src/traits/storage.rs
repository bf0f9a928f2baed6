//! Core sparse storage capability traits
//!
//! These traits declare what every concrete storage format must support:
//! point reads, entry mutation that preserves the format's invariants, and
//! conversion into the CSC layout. They own no data.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use num_traits::Zero;

use super::element::MatrixElement;
use crate::error::{CscaError, Result};
use crate::format::StorageFormat;
#[cfg(feature = "alloc")]
use crate::format::CscParts;

/// Core sparse storage trait for format-agnostic access and mutation
///
/// Positions without a stored entry are zero. The mutators report expected
/// structural outcomes (entry present or absent) through their `bool`
/// result and never leave the storage partially modified.
pub trait SparseStorage {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Tag of the concrete storage variant
    fn storage_format(&self) -> StorageFormat;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Number of rows
    fn row_count(&self) -> usize {
        self.dimensions().0
    }

    /// Number of columns
    fn column_count(&self) -> usize {
        self.dimensions().1
    }

    /// Number of stored entries, not the matrix area
    fn nnz(&self) -> usize;

    /// Look up the entry at (row, col)
    ///
    /// Returns `None` when no entry is stored or the position is out of
    /// bounds.
    fn try_get(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Look up the entry at (row, col), failing when none is stored
    ///
    /// Distinguishes "no entry" from "entry is zero": stored entries are
    /// never zero, so a missing entry is an error rather than `0`.
    fn get(&self, row: usize, col: usize) -> Result<Self::Element> {
        let (rows, cols) = self.dimensions();
        if row >= rows || col >= cols {
            return Err(CscaError::IndexOutOfBounds { row, col });
        }
        self.try_get(row, col)
            .ok_or(CscaError::MissingEntry { row, col })
    }

    /// Whether an entry is stored at (row, col)
    fn contains(&self, row: usize, col: usize) -> bool {
        self.try_get(row, col).is_some()
    }

    /// Insert a new entry
    ///
    /// Returns `false` without mutating when an entry already exists.
    fn insert(&mut self, row: usize, col: usize, value: Self::Element) -> bool;

    /// Insert a new entry, skipping zero values
    ///
    /// A zero `value` is a no-op reported as `false`.
    fn insert_checked(&mut self, row: usize, col: usize, value: Self::Element) -> bool {
        if value.is_zero() {
            return false;
        }
        self.insert(row, col, value)
    }

    /// Overwrite an existing entry
    ///
    /// Returns `false` without mutating when no entry exists.
    fn replace(&mut self, row: usize, col: usize, value: Self::Element) -> bool;

    /// Overwrite an existing entry, refusing zero values
    ///
    /// A zero `value` is reported as `false` and the entry keeps its old
    /// value. It is *not* removed; use [`SparseStorage::remove`] for that.
    fn replace_checked(&mut self, row: usize, col: usize, value: Self::Element) -> bool {
        if value.is_zero() {
            return false;
        }
        self.replace(row, col, value)
    }

    /// Delete an existing entry
    ///
    /// Returns `false` when no entry exists.
    fn remove(&mut self, row: usize, col: usize) -> bool;
}

/// Extension trait for whole-row/column access and format conversion
/// (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait StorageOperations: SparseStorage {
    /// Get all stored entries of a row as (col, value), in column order
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Get all stored entries of a column as (row, value), in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;

    /// Copy this storage into the raw CSC layout
    ///
    /// Identity copy for CSC storages, a conversion for any other format.
    fn to_csc_parts(&self) -> CscParts<Self::Element>;
}
