//! CSCA - Compressed Sparse Column Algebra
//!
//! This library provides a generic sparse matrix engine built on the
//! compressed sparse column (CSC) layout, with in-place entry mutation and
//! exact sparse algebra: sums, products, transpose products, scalar action,
//! and products with dense matrices and vectors.
//!
//! ## Architecture
//!
//! CSCA follows a clean contract/implementation separation:
//!
//! - **csca-core**: Element trait, storage contract, format tags, errors and validation (no_std)
//! - **csca**: The CSC engine, the format-tagged [`Storage`] handle and the dense/vector
//!   collaborators
//!
//! ## Quick Start
//!
//! ```rust
//! use csca::{CompressedColumn, DenseMatrix};
//!
//! fn example() -> csca::Result<()> {
//!     let a = CompressedColumn::from_dense(&DenseMatrix::from_rows(&[[1.0, 4.0], [2.0, 0.0]])?)?;
//!     let b = CompressedColumn::identity(2)?;
//!
//!     let product = a.mul(&b)?;
//!     assert_eq!(product.get(0, 1)?, 4.0);
//!     assert!(!product.contains(1, 1));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Invariant-preserving mutation**: `insert`, `replace` and `remove` keep rows sorted
//!   per column
//! - **Sparse algebra**: merge-scan sums, accumulator products, dot-product transpose products
//! - **Dense embedding**: sums and products against dense matrices and vectors
//! - **Solver hand-off**: [`CscLayout`] borrows the raw arrays for native factorization libraries
//! - **Serde**: storages and collaborators serialize with the `serde` feature

// Re-export core abstractions and format definitions
pub use csca_core::{
    // Core traits
    MatrixElement, SparseStorage, StorageOperations,
    // Format definitions
    CscParts, DataType, StorageFormat,
    // Error handling
    CscaError, ErrorCategory, Result,
};

// Implementation modules
pub mod config;
pub mod csc;
pub mod dense;
pub mod layout;
pub mod storage;
pub mod vector;

// Public exports
pub use config::StorageConfig;
pub use csc::CompressedColumn;
pub use dense::{DenseMatrix, DenseVector};
pub use layout::CscLayout;
pub use storage::Storage;
pub use vector::SparseVector;
