//! Compressed sparse column storage
//!
//! [`CompressedColumn`] keeps three parallel arrays:
//!
//! - `values`: stored entries, column by column
//! - `row_indices`: row of each stored entry
//! - `column_pointers`: `ncols + 1` offsets, column `c` owns
//!   `values[column_pointers[c]..column_pointers[c + 1]]`
//!
//! Row indices are strictly increasing inside every column. Entry mutators
//! shift the pointers of all following columns by one; the algebra in
//! [`algebra`] and [`embed`] builds new storages with sorted-merge scans and
//! never densifies a sparse result.

mod accumulator;
pub mod algebra;
pub mod embed;
mod ops;

use std::ops::Range;

use csca_core::{
    validate_csc_structure, validate_dimensions, CscParts, CscaError, MatrixElement, Result,
    SparseStorage, StorageFormat, StorageOperations,
};
use tracing::{trace, warn};

use crate::config::StorageConfig;
use crate::dense::DenseMatrix;
use crate::layout::CscLayout;
use crate::vector::SparseVector;

/// Compressed sparse column matrix
///
/// Deserialization goes through [`CscParts`] and rejects arrays that break
/// the CSC structure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "CscParts<T>",
        into = "CscParts<T>",
        bound(
            serialize = "T: Clone + serde::Serialize",
            deserialize = "T: MatrixElement + serde::Deserialize<'de>"
        )
    )
)]
pub struct CompressedColumn<T> {
    nrows: usize,
    ncols: usize,
    values: Vec<T>,
    row_indices: Vec<usize>,
    column_pointers: Vec<usize>,
}

impl<T: MatrixElement> CompressedColumn<T> {
    /// Create an empty storage with room for `capacity` entries
    pub fn with_capacity(nrows: usize, ncols: usize, capacity: usize) -> Result<Self> {
        validate_dimensions(nrows, ncols)?;
        Ok(Self {
            nrows,
            ncols,
            values: Vec::with_capacity(capacity),
            row_indices: Vec::with_capacity(capacity),
            column_pointers: vec![0; ncols + 1],
        })
    }

    /// Create an empty storage
    pub fn new(nrows: usize, ncols: usize) -> Result<Self> {
        Self::with_capacity(nrows, ncols, 0)
    }

    /// Create an empty storage sized by `config`
    ///
    /// Fails with `NotImplemented` when the config asks for another format.
    pub fn with_config(nrows: usize, ncols: usize, config: &StorageConfig) -> Result<Self> {
        if config.format != StorageFormat::Csc {
            return Err(CscaError::NotImplemented(config.format));
        }
        Self::with_capacity(nrows, ncols, config.capacity)
    }

    /// Take ownership of raw CSC arrays after validating them
    pub fn from_raw_parts(
        nrows: usize,
        ncols: usize,
        values: Vec<T>,
        row_indices: Vec<usize>,
        column_pointers: Vec<usize>,
    ) -> Result<Self> {
        validate_csc_structure(nrows, ncols, values.len(), &row_indices, &column_pointers)?;
        Ok(Self::from_raw_parts_unchecked(
            nrows,
            ncols,
            values,
            row_indices,
            column_pointers,
        ))
    }

    /// Take ownership of raw CSC arrays without validation
    ///
    /// The caller guarantees the column-range and row-order invariants.
    pub const fn from_raw_parts_unchecked(
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

    /// Build from the non-zero entries of a dense matrix
    pub fn from_dense(dense: &DenseMatrix<T>) -> Result<Self> {
        Self::from_dense_with_config(dense, &StorageConfig::default())
    }

    /// Build from a dense matrix, keeping zeros if `config` says so
    pub fn from_dense_with_config(dense: &DenseMatrix<T>, config: &StorageConfig) -> Result<Self> {
        let (nrows, ncols) = dense.shape();
        let mut out = Self::with_config(nrows, ncols, config)?;
        for col in 0..ncols {
            for row in 0..nrows {
                let value = dense[(row, col)];
                if !(config.drop_zeros && value.is_zero()) {
                    out.row_indices.push(row);
                    out.values.push(value);
                }
            }
            out.column_pointers[col + 1] = out.values.len();
        }
        Ok(out)
    }

    /// Build from (row, col, value) triplets in any order
    ///
    /// Duplicate positions are summed. Entries summing to zero are dropped.
    pub fn from_triplets(
        nrows: usize,
        ncols: usize,
        triplets: &[(usize, usize, T)],
    ) -> Result<Self> {
        Self::from_triplets_with_config(nrows, ncols, triplets, &StorageConfig::default())
    }

    /// Build from triplets, keeping zeros if `config` says so
    pub fn from_triplets_with_config(
        nrows: usize,
        ncols: usize,
        triplets: &[(usize, usize, T)],
        config: &StorageConfig,
    ) -> Result<Self> {
        let mut out = Self::with_config(nrows, ncols, config)?;
        let mut sorted: Vec<(usize, usize, T)> = Vec::with_capacity(triplets.len());
        for &(row, col, value) in triplets {
            csca_core::check_index(row, col, (nrows, ncols))?;
            sorted.push((row, col, value));
        }
        sorted.sort_by_key(|&(row, col, _)| (col, row));

        let mut counts = vec![0usize; ncols];
        let mut index = 0;
        while index < sorted.len() {
            let (row, col, mut sum) = sorted[index];
            index += 1;
            while index < sorted.len() && sorted[index].0 == row && sorted[index].1 == col {
                sum = sum + sorted[index].2;
                index += 1;
            }
            if config.drop_zeros && sum.is_zero() {
                continue;
            }
            out.row_indices.push(row);
            out.values.push(sum);
            counts[col] += 1;
        }
        for col in 0..ncols {
            out.column_pointers[col + 1] = out.column_pointers[col] + counts[col];
        }
        Ok(out)
    }

    /// Square identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        validate_dimensions(n, n)?;
        Ok(Self {
            nrows: n,
            ncols: n,
            values: vec![T::from_f64(1.0); n],
            row_indices: (0..n).collect(),
            column_pointers: (0..=n).collect(),
        })
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.ncols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Stored values, column by column
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Row index of every stored value
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    /// Column start offsets, length `ncols + 1`
    pub fn column_pointers(&self) -> &[usize] {
        &self.column_pointers
    }

    /// Consume into (values, row_indices, column_pointers)
    pub fn into_raw_parts(self) -> (Vec<T>, Vec<usize>, Vec<usize>) {
        (self.values, self.row_indices, self.column_pointers)
    }

    /// Borrow the arrays in the exact CSC layout expected by native
    /// factorization libraries
    pub fn layout(&self) -> CscLayout<'_, T> {
        CscLayout {
            nrows: self.nrows,
            ncols: self.ncols,
            values: &self.values,
            row_indices: &self.row_indices,
            column_pointers: &self.column_pointers,
        }
    }

    /// Offset range of column `col`
    #[inline]
    pub(crate) fn column_range(&self, col: usize) -> Range<usize> {
        self.column_pointers[col]..self.column_pointers[col + 1]
    }

    /// Stored (row, value) pairs of one column in row order
    ///
    /// # Panics
    ///
    /// Panics if `col >= column_count()`.
    pub fn column(&self, col: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        let range = self.column_range(col);
        self.row_indices[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter())
    }

    /// All stored (row, col, value) triples in column-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        (0..self.ncols).flat_map(move |col| self.column(col).map(move |(row, v)| (row, col, v)))
    }

    /// Locate `row` inside column `col`
    ///
    /// Scans while the stored row is smaller than the target. Returns
    /// `Ok(offset)` on a match, `Err(offset)` with the insertion point
    /// otherwise.
    fn search(&self, row: usize, col: usize) -> std::result::Result<usize, usize> {
        let Range { start, end } = self.column_range(col);
        let mut index = start;
        while index < end && self.row_indices[index] < row {
            index += 1;
        }
        if index < end && self.row_indices[index] == row {
            Ok(index)
        } else {
            Err(index)
        }
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.nrows && col < self.ncols
    }

    /// Look up the entry at (row, col)
    pub fn try_get(&self, row: usize, col: usize) -> Option<T> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.search(row, col).ok().map(|offset| self.values[offset])
    }

    /// Look up the entry at (row, col), failing when none is stored
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        csca_core::check_index(row, col, self.shape())?;
        self.try_get(row, col)
            .ok_or(CscaError::MissingEntry { row, col })
    }

    /// Whether an entry is stored at (row, col)
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.try_get(row, col).is_some()
    }

    /// Insert a new entry
    ///
    /// Returns `false` without mutating if the entry exists or the position
    /// is out of bounds. Zero values are stored as given; see
    /// [`CompressedColumn::insert_checked`].
    pub fn insert(&mut self, row: usize, col: usize, value: T) -> bool {
        if !self.in_bounds(row, col) {
            warn!(row, col, shape = ?self.shape(), "insert outside matrix shape");
            return false;
        }
        match self.search(row, col) {
            Ok(_) => false,
            Err(offset) => {
                self.values.insert(offset, value);
                self.row_indices.insert(offset, row);
                for pointer in &mut self.column_pointers[col + 1..] {
                    *pointer += 1;
                }
                trace!(row, col, offset, "inserted entry");
                true
            }
        }
    }

    /// Insert a new entry unless `value` is zero
    pub fn insert_checked(&mut self, row: usize, col: usize, value: T) -> bool {
        if value.is_zero() {
            return false;
        }
        self.insert(row, col, value)
    }

    /// Overwrite an existing entry in place
    pub fn replace(&mut self, row: usize, col: usize, value: T) -> bool {
        if !self.in_bounds(row, col) {
            warn!(row, col, shape = ?self.shape(), "replace outside matrix shape");
            return false;
        }
        match self.search(row, col) {
            Ok(offset) => {
                self.values[offset] = value;
                trace!(row, col, offset, "replaced entry");
                true
            }
            Err(_) => false,
        }
    }

    /// Overwrite an existing entry unless `value` is zero
    ///
    /// A zero `value` reports `false` and leaves the old value stored; the
    /// entry is not removed.
    pub fn replace_checked(&mut self, row: usize, col: usize, value: T) -> bool {
        if value.is_zero() {
            return false;
        }
        self.replace(row, col, value)
    }

    /// Delete an existing entry
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        if !self.in_bounds(row, col) {
            warn!(row, col, shape = ?self.shape(), "remove outside matrix shape");
            return false;
        }
        match self.search(row, col) {
            Ok(offset) => {
                self.values.remove(offset);
                self.row_indices.remove(offset);
                for pointer in &mut self.column_pointers[col + 1..] {
                    *pointer -= 1;
                }
                trace!(row, col, offset, "removed entry");
                true
            }
            Err(_) => false,
        }
    }

    /// Dense copy
    pub fn to_dense(&self) -> DenseMatrix<T> {
        let mut dense = DenseMatrix::zeros(self.nrows, self.ncols);
        for (row, col, &value) in self.iter() {
            dense[(row, col)] = value;
        }
        dense
    }

    /// Dense copy as nested rows
    pub fn to_array(&self) -> Vec<Vec<T>> {
        self.to_dense().to_rows()
    }

    /// Dense copy, row-major
    pub fn to_row_major_vec(&self) -> Vec<T> {
        self.to_dense().into_vec()
    }

    /// Dense copy, column-major
    pub fn to_column_major_vec(&self) -> Vec<T> {
        let mut out = vec![T::zero(); self.nrows * self.ncols];
        for (row, col, &value) in self.iter() {
            out[col * self.nrows + row] = value;
        }
        out
    }

    /// One sparse vector per row
    pub fn row_vectors(&self) -> Vec<SparseVector<T>> {
        let mut rows: Vec<SparseVector<T>> =
            (0..self.nrows).map(|_| SparseVector::new(self.ncols)).collect();
        // Column-major traversal visits each row's columns in ascending order
        for (row, col, &value) in self.iter() {
            rows[row].push(col, value);
        }
        rows
    }

    /// One sparse vector per column
    pub fn column_vectors(&self) -> Vec<SparseVector<T>> {
        (0..self.ncols)
            .map(|col| {
                let range = self.column_range(col);
                let mut vector = SparseVector::with_capacity(self.nrows, range.len());
                for (row, &value) in self.column(col) {
                    vector.push(row, value);
                }
                vector
            })
            .collect()
    }

    /// Format conversion escape hatch; identity copy for CSC
    pub fn to_compressed_column(&self) -> Self {
        self.clone()
    }
}

impl<T: MatrixElement> SparseStorage for CompressedColumn<T> {
    type Element = T;

    fn storage_format(&self) -> StorageFormat {
        StorageFormat::Csc
    }

    fn dimensions(&self) -> (usize, usize) {
        self.shape()
    }

    fn nnz(&self) -> usize {
        CompressedColumn::nnz(self)
    }

    fn try_get(&self, row: usize, col: usize) -> Option<T> {
        CompressedColumn::try_get(self, row, col)
    }

    fn insert(&mut self, row: usize, col: usize, value: T) -> bool {
        CompressedColumn::insert(self, row, col, value)
    }

    fn replace(&mut self, row: usize, col: usize, value: T) -> bool {
        CompressedColumn::replace(self, row, col, value)
    }

    fn remove(&mut self, row: usize, col: usize) -> bool {
        CompressedColumn::remove(self, row, col)
    }
}

impl<T: MatrixElement> StorageOperations for CompressedColumn<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        if row_index >= self.nrows {
            return Vec::new();
        }
        (0..self.ncols)
            .filter_map(|col| {
                self.search(row_index, col)
                    .ok()
                    .map(|offset| (col, self.values[offset]))
            })
            .collect()
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        if col_index >= self.ncols {
            return Vec::new();
        }
        self.column(col_index).map(|(row, &v)| (row, v)).collect()
    }

    fn to_csc_parts(&self) -> CscParts<T> {
        CscParts::from(self.clone())
    }
}

impl<T> From<CompressedColumn<T>> for CscParts<T> {
    fn from(matrix: CompressedColumn<T>) -> Self {
        CscParts::new(
            matrix.nrows,
            matrix.ncols,
            matrix.values,
            matrix.row_indices,
            matrix.column_pointers,
        )
    }
}

impl<T: MatrixElement> TryFrom<CscParts<T>> for CompressedColumn<T> {
    type Error = CscaError;

    fn try_from(parts: CscParts<T>) -> Result<Self> {
        Self::from_raw_parts(
            parts.nrows,
            parts.ncols,
            parts.values,
            parts.row_indices,
            parts.column_pointers,
        )
    }
}
