//! Storage construction configuration

use csca_core::StorageFormat;

/// Configuration for building sparse storages
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    /// Storage format to build
    pub format: StorageFormat,
    /// Number of entries to reserve up front
    pub capacity: usize,
    /// Drop zero values when building from dense data or triplets
    pub drop_zeros: bool,
}

impl StorageConfig {
    /// Config for the given format with default capacity
    pub fn with_format(format: StorageFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Set the number of reserved entries
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Keep explicit zeros when building from dense data or triplets
    pub fn with_explicit_zeros(mut self) -> Self {
        self.drop_zeros = false;
        self
    }

    /// Estimate a reservation from the expected fill ratio
    pub fn estimate_capacity(rows: usize, cols: usize, density: f64) -> usize {
        let area = rows.saturating_mul(cols) as f64;
        (area * density.clamp(0.0, 1.0)).ceil() as usize
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            format: StorageFormat::Csc,
            capacity: 0,
            drop_zeros: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = StorageConfig::with_format(StorageFormat::Csr)
            .with_capacity(16)
            .with_explicit_zeros();
        assert_eq!(config.format, StorageFormat::Csr);
        assert_eq!(config.capacity, 16);
        assert!(!config.drop_zeros);
        assert!(StorageConfig::default().drop_zeros);
    }

    #[test]
    fn test_estimate_capacity() {
        assert_eq!(StorageConfig::estimate_capacity(100, 100, 0.05), 500);
        assert_eq!(StorageConfig::estimate_capacity(10, 10, 2.0), 100);
        assert_eq!(StorageConfig::estimate_capacity(3, 3, 0.0), 0);
    }
}
