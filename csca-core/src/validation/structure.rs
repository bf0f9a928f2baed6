//! CSC structural validation
//!
//! Checks raw arrays against the column-range and row-order invariants
//! before they are accepted as a storage.

use crate::error::{CscaError, Result};
use crate::validation::shape::validate_dimensions;

/// Validate raw CSC arrays
///
/// Verifies that:
/// - `column_pointers` has length `ncols + 1`, starts at 0 and ends at `nnz`
/// - `column_pointers` is non-decreasing
/// - `row_indices` has length `nnz`, every index is below `nrows`
/// - row indices are strictly increasing within each column
pub fn validate_csc_structure(
    nrows: usize,
    ncols: usize,
    nnz: usize,
    row_indices: &[usize],
    column_pointers: &[usize],
) -> Result<()> {
    validate_dimensions(nrows, ncols)?;

    let Some(expected_len) = ncols.checked_add(1) else {
        return Err(CscaError::InvalidStructure("ncols overflow when adding 1"));
    };
    if column_pointers.len() != expected_len {
        return Err(CscaError::InvalidStructure(
            "column pointers length must be ncols + 1",
        ));
    }
    if row_indices.len() != nnz {
        return Err(CscaError::InvalidStructure(
            "row indices and values must have equal length",
        ));
    }
    if column_pointers.first().copied().unwrap_or(0) != 0 {
        return Err(CscaError::InvalidStructure(
            "first column pointer must be 0",
        ));
    }
    if column_pointers.last().copied().unwrap_or(0) != nnz {
        return Err(CscaError::InvalidStructure(
            "last column pointer must equal nnz",
        ));
    }

    if column_pointers.windows(2).any(|w| w[1] < w[0]) {
        return Err(CscaError::InvalidStructure(
            "column pointers must be non-decreasing",
        ));
    }

    for (&start, &end) in column_pointers.iter().zip(column_pointers.iter().skip(1)) {
        let Some(column_rows) = row_indices.get(start..end) else {
            return Err(CscaError::InvalidStructure(
                "column pointers must be within [0, nnz]",
            ));
        };
        let mut previous: Option<usize> = None;
        for &row in column_rows {
            if row >= nrows {
                return Err(CscaError::InvalidStructure("row index out of bounds"));
            }
            if previous.is_some_and(|prev| row <= prev) {
                return Err(CscaError::InvalidStructure(
                    "row indices must be strictly increasing within each column",
                ));
            }
            previous = Some(row);
        }
    }

    Ok(())
}
