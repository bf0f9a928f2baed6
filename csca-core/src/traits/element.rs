//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix entries and combined by the sparse algebra.

use core::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

use crate::format::DataType;

/// Trait for types that can be stored as matrix elements
///
/// Every element type must provide:
/// - an additive identity (via [`Zero`]), which is the implicit value of
///   every position without a stored entry
/// - `+`, `-`, `*`, `/` closed over the type
/// - equality, used to detect cancellation to zero
///
/// All methods are resolved at compile time; the algebra is monomorphized
/// per element type.
pub trait MatrixElement:
    Copy
    + PartialEq
    + core::fmt::Debug
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Get the DataType tag for this element type
    fn data_type() -> DataType;

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Additive inverse, computed as `0 - self`
    #[inline]
    fn negate(self) -> Self {
        Self::zero() - self
    }
}

impl MatrixElement for f32 {
    fn data_type() -> DataType {
        DataType::F32
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn negate(self) -> Self {
        -self
    }
}

impl MatrixElement for f64 {
    fn data_type() -> DataType {
        DataType::F64
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn negate(self) -> Self {
        -self
    }
}

impl MatrixElement for i32 {
    fn data_type() -> DataType {
        DataType::I32
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }
}

impl MatrixElement for i64 {
    fn data_type() -> DataType {
        DataType::I64
    }

    fn from_f64(value: f64) -> Self {
        value as i64
    }
}
