//! Shape validation for sparse algebra operands
//!
//! Each check corresponds to one family of binary operations. Shapes are
//! passed as (rows, cols); vectors are treated as single columns.

use crate::error::{CscaError, Result};

/// Validate construction dimensions
///
/// Both row and column counts must be positive.
pub const fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(CscaError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

/// Validate that a position lies inside a shape
pub const fn check_index(row: usize, col: usize, shape: (usize, usize)) -> Result<()> {
    if row >= shape.0 || col >= shape.1 {
        return Err(CscaError::IndexOutOfBounds { row, col });
    }
    Ok(())
}

/// Element-wise operations: shapes must be identical
pub fn check_same_shape(
    op: &'static str,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left != right {
        return Err(CscaError::ShapeMismatch { op, left, right });
    }
    Ok(())
}

/// `A·B`: columns of A must equal rows of B
pub fn check_product_shape(
    op: &'static str,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left.1 != right.0 {
        return Err(CscaError::ShapeMismatch { op, left, right });
    }
    Ok(())
}

/// `Aᵗ·B`: row counts must match
pub fn check_transpose_product_shape(
    op: &'static str,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left.0 != right.0 {
        return Err(CscaError::ShapeMismatch { op, left, right });
    }
    Ok(())
}

/// `A·Bᵗ`: column counts must match
pub fn check_product_transpose_shape(
    op: &'static str,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left.1 != right.1 {
        return Err(CscaError::ShapeMismatch { op, left, right });
    }
    Ok(())
}
