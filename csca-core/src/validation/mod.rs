//! Validation utilities for CSCA storages
//!
//! This module contains pure validation functions with no allocation.
//! All functions are checks on shapes and index layout.

pub mod shape;
pub mod structure;

pub use shape::{
    check_index, check_product_shape, check_product_transpose_shape, check_same_shape,
    check_transpose_product_shape, validate_dimensions,
};
pub use structure::validate_csc_structure;
