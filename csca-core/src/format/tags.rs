//! Storage format and element type tags
//!
//! Small `#[repr(u8)]` enums identifying the concrete storage variant behind
//! a sparse storage and the numeric type of its entries.

/// Sparse storage formats known to CSCA
///
/// Only [`StorageFormat::Csc`] has an engine today. The other tags exist so
/// that requests for them fail loudly instead of silently converting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StorageFormat {
    /// Coordinate (COO) format - row, col, value triplets
    Coo = 0,
    /// Compressed Sparse Row (CSR) format
    Csr = 1,
    /// Compressed Sparse Column (CSC) format
    #[default]
    Csc = 2,
}

impl StorageFormat {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageFormat::Coo),
            1 => Some(StorageFormat::Csr),
            2 => Some(StorageFormat::Csc),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StorageFormat::Coo => write!(f, "COO"),
            StorageFormat::Csr => write!(f, "CSR"),
            StorageFormat::Csc => write!(f, "CSC"),
        }
    }
}

/// Element types supported by the storage engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DataType {
    /// 32-bit floating point
    F32 = 0,
    /// 64-bit floating point
    F64 = 1,
    /// 32-bit signed integer
    I32 = 2,
    /// 64-bit signed integer
    I64 = 3,
}

impl DataType {
    /// Width of one element in bytes
    pub const fn size_bytes(self) -> usize {
        match self {
            DataType::F32 | DataType::I32 => 4,
            DataType::F64 | DataType::I64 => 8,
        }
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::F32 => write!(f, "f32"),
            DataType::F64 => write!(f, "f64"),
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
        }
    }
}
