//! Abstract interfaces for CSCA storages
//!
//! This module defines the trait abstractions shared by every storage
//! format. Traits are pure interfaces - no concrete storage lives here.

pub mod element;
pub mod storage;

pub use element::MatrixElement;
#[cfg(feature = "alloc")]
pub use storage::StorageOperations;
pub use storage::SparseStorage;
