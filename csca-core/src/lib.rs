#![no_std]

//! CSCA Core - Sparse Storage Contract Definitions
//!
//! This crate provides the element trait, storage format tags, error
//! taxonomy and validation rules shared by every sparse storage format.
//! It performs no allocation unless the `alloc` feature is enabled.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::{
    check_index, check_product_shape, check_product_transpose_shape, check_same_shape,
    check_transpose_product_shape, validate_csc_structure, validate_dimensions,
};
