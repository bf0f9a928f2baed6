//! Format definitions for CSCA storage
//!
//! This module contains pure data structure definitions: the tags naming
//! storage formats and element types, and the raw CSC parts bundle handed
//! between storages and external adapters. No algebra lives here.

#[cfg(feature = "alloc")]
pub mod parts;
pub mod tags;

#[cfg(feature = "alloc")]
pub use parts::CscParts;
pub use tags::{DataType, StorageFormat};
