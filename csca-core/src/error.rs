//! Error types for CSCA operations

use crate::format::StorageFormat;

/// Errors that can occur during CSCA operations
///
/// Expected structural outcomes of the entry mutators (entry already present,
/// entry missing) are reported as `bool` and never appear here. Everything in
/// this enum is a contract violation by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CscaError {
    /// Operand shapes are incompatible with the requested operation
    ShapeMismatch {
        /// Name of the operation that rejected the operands
        op: &'static str,
        /// Left operand shape as (rows, cols)
        left: (usize, usize),
        /// Right operand shape as (rows, cols)
        right: (usize, usize),
    },
    /// No entry is stored at the requested position
    MissingEntry { row: usize, col: usize },
    /// Position lies outside the matrix shape
    IndexOutOfBounds { row: usize, col: usize },
    /// Row or column count is zero
    InvalidDimensions { rows: usize, cols: usize },
    /// Raw parts violate the CSC layout
    InvalidStructure(&'static str),
    /// Storage format has no engine
    NotImplemented(StorageFormat),
}

/// Coarse classification of [`CscaError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller passed arguments that violate the operation contract
    InvalidArgument,
    /// The request names a capability that does not exist yet
    NotImplemented,
}

impl CscaError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            CscaError::NotImplemented(_) => ErrorCategory::NotImplemented,
            CscaError::ShapeMismatch { .. }
            | CscaError::MissingEntry { .. }
            | CscaError::IndexOutOfBounds { .. }
            | CscaError::InvalidDimensions { .. }
            | CscaError::InvalidStructure(_) => ErrorCategory::InvalidArgument,
        }
    }
}

impl core::fmt::Display for CscaError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CscaError::ShapeMismatch { op, left, right } => write!(
                f,
                "Shape mismatch in {op}: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            CscaError::MissingEntry { row, col } => {
                write!(f, "No entry stored at ({row}, {col})")
            }
            CscaError::IndexOutOfBounds { row, col } => {
                write!(f, "Index ({row}, {col}) out of bounds")
            }
            CscaError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid dimensions {rows}x{cols}: both must be positive")
            }
            CscaError::InvalidStructure(msg) => write!(f, "Invalid CSC structure: {msg}"),
            CscaError::NotImplemented(format) => {
                write!(f, "Operation not implemented for {format} storage")
            }
        }
    }
}

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for CscaError {}

/// Result type for CSCA operations
pub type Result<T> = core::result::Result<T, CscaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let shape = CscaError::ShapeMismatch {
            op: "add",
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(shape.category(), ErrorCategory::InvalidArgument);
        assert_eq!(
            CscaError::NotImplemented(StorageFormat::Csr).category(),
            ErrorCategory::NotImplemented
        );
        assert_eq!(
            CscaError::MissingEntry { row: 0, col: 0 }.category(),
            ErrorCategory::InvalidArgument
        );
    }
}
