//! Borrowed CSC layout for native factorization adapters
//!
//! Sparse Cholesky libraries take the three CSC arrays verbatim, usually
//! with 32 or 64 bit signed indices and raw value buffers. [`CscLayout`]
//! borrows a storage's arrays without copying and offers the narrowing
//! conversions and byte views such adapters need.

use bytemuck::Pod;
use csca_core::{CscParts, CscaError, DataType, MatrixElement, Result};

/// Borrowed view of the exact CSC arrays of a storage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CscLayout<'a, T> {
    pub nrows: usize,
    pub ncols: usize,
    pub values: &'a [T],
    pub row_indices: &'a [usize],
    pub column_pointers: &'a [usize],
}

impl<'a, T: MatrixElement> CscLayout<'a, T> {
    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Element type tag, used by adapters to pick the matching solver routine
    pub fn data_type(&self) -> DataType {
        T::data_type()
    }

    /// Length in bytes of the value buffer
    pub fn value_byte_len(&self) -> usize {
        self.nnz() * T::data_type().size_bytes()
    }

    /// Row indices and column pointers as `i32`, the common "int" index
    /// width of native solvers
    pub fn to_i32_indices(&self) -> Result<(Vec<i32>, Vec<i32>)> {
        Ok((
            narrow_indices(self.row_indices)?,
            narrow_indices(self.column_pointers)?,
        ))
    }

    /// Row indices and column pointers as `i64`
    pub fn to_i64_indices(&self) -> Result<(Vec<i64>, Vec<i64>)> {
        Ok((
            narrow_indices(self.row_indices)?,
            narrow_indices(self.column_pointers)?,
        ))
    }

    /// Raw bytes of the row indices in native endianness
    pub fn row_index_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.row_indices)
    }

    /// Raw bytes of the column pointers in native endianness
    pub fn column_pointer_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.column_pointers)
    }

    /// Owned copy of the arrays
    pub fn to_parts(&self) -> CscParts<T> {
        CscParts::new(
            self.nrows,
            self.ncols,
            self.values.to_vec(),
            self.row_indices.to_vec(),
            self.column_pointers.to_vec(),
        )
    }
}

impl<'a, T: MatrixElement + Pod> CscLayout<'a, T> {
    /// Raw bytes of the values in native endianness
    pub fn value_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.values)
    }
}

fn narrow_indices<I: TryFrom<usize>>(indices: &[usize]) -> Result<Vec<I>> {
    indices
        .iter()
        .map(|&index| {
            I::try_from(index).map_err(|_| {
                CscaError::InvalidStructure("index does not fit the requested integer width")
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_indices() {
        let values = [1.0f64, 2.0];
        let rows = [0usize, 3];
        let pointers = [0usize, 1, 2];
        let layout = CscLayout {
            nrows: 4,
            ncols: 2,
            values: &values,
            row_indices: &rows,
            column_pointers: &pointers,
        };
        let (r, p) = layout.to_i32_indices().unwrap();
        assert_eq!(r, vec![0, 3]);
        assert_eq!(p, vec![0, 1, 2]);
        assert_eq!(layout.nnz(), 2);
        assert_eq!(layout.data_type(), DataType::F64);
        assert_eq!(layout.data_type().to_string(), "f64");
        assert_eq!(layout.value_byte_len(), 16);
        assert_eq!(layout.value_bytes().len(), layout.value_byte_len());
        assert_eq!(
            layout.row_index_bytes().len(),
            2 * std::mem::size_of::<usize>()
        );
    }

    #[test]
    fn test_narrow_overflow() {
        let huge = [usize::MAX];
        assert!(narrow_indices::<i32>(&huge).is_err());
        assert!(narrow_indices::<i64>(&huge).is_err());
        assert_eq!(narrow_indices::<i64>(&[7]).unwrap(), vec![7i64]);
    }
}
