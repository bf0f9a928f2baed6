//! Sparse vector container
//!
//! Sorted index/value pairs over a fixed logical size. Produced by the
//! row/column extraction of a storage and by the sparse matrix-vector
//! products.

use csca_core::{CscaError, MatrixElement, Result};

/// Sparse vector with strictly increasing indices
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "VectorParts<T>",
        into = "VectorParts<T>",
        bound(
            serialize = "T: Clone + serde::Serialize",
            deserialize = "T: MatrixElement + serde::Deserialize<'de>"
        )
    )
)]
pub struct SparseVector<T> {
    size: usize,
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: MatrixElement> SparseVector<T> {
    /// Empty vector of the given logical size
    pub fn new(size: usize) -> Self {
        Self::with_capacity(size, 0)
    }

    /// Empty vector with room for `capacity` entries
    pub fn with_capacity(size: usize, capacity: usize) -> Self {
        Self {
            size,
            indices: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Build from parallel index/value vectors
    ///
    /// Indices must be strictly increasing and below `size`.
    pub fn from_parts(size: usize, indices: Vec<usize>, values: Vec<T>) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(CscaError::InvalidStructure(
                "indices and values must have equal length",
            ));
        }
        if indices.iter().any(|&i| i >= size) {
            return Err(CscaError::InvalidStructure("vector index out of bounds"));
        }
        if indices.windows(2).any(|w| w[1] <= w[0]) {
            return Err(CscaError::InvalidStructure(
                "vector indices must be strictly increasing",
            ));
        }
        Ok(Self {
            size,
            indices,
            values,
        })
    }

    /// Keep the non-zero components of a dense slice
    pub fn from_dense(values: &[T]) -> Self {
        let mut vector = Self::new(values.len());
        for (index, &value) in values.iter().enumerate() {
            if !value.is_zero() {
                vector.push(index, value);
            }
        }
        vector
    }

    /// Logical length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Look up a component; `None` when not stored
    pub fn try_get(&self, index: usize) -> Option<T> {
        self.indices
            .binary_search(&index)
            .ok()
            .map(|offset| self.values[offset])
    }

    /// Look up a component, failing when none is stored
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= self.size {
            return Err(CscaError::IndexOutOfBounds { row: index, col: 0 });
        }
        self.try_get(index)
            .ok_or(CscaError::MissingEntry { row: index, col: 0 })
    }

    /// Insert a new component; `false` if already stored or out of bounds
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        if index >= self.size {
            return false;
        }
        match self.indices.binary_search(&index) {
            Ok(_) => false,
            Err(offset) => {
                self.indices.insert(offset, index);
                self.values.insert(offset, value);
                true
            }
        }
    }

    /// Delete a stored component; `false` if none is stored
    pub fn remove(&mut self, index: usize) -> bool {
        match self.indices.binary_search(&index) {
            Ok(offset) => {
                self.indices.remove(offset);
                self.values.remove(offset);
                true
            }
            Err(_) => false,
        }
    }

    /// Iterate stored (index, value) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter())
    }

    /// Dense copy
    pub fn to_dense(&self) -> Vec<T> {
        let mut dense = vec![T::zero(); self.size];
        for (index, &value) in self.iter() {
            dense[index] = value;
        }
        dense
    }

    /// Append past the last stored index
    ///
    /// Callers guarantee `index` is larger than every stored index.
    pub(crate) fn push(&mut self, index: usize, value: T) {
        debug_assert!(self.indices.last().map_or(true, |&last| last < index));
        self.indices.push(index);
        self.values.push(value);
    }
}

/// Serialized form of [`SparseVector`], checked by `from_parts` on the way in
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct VectorParts<T> {
    size: usize,
    indices: Vec<usize>,
    values: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> From<SparseVector<T>> for VectorParts<T> {
    fn from(vector: SparseVector<T>) -> Self {
        Self {
            size: vector.size,
            indices: vector.indices,
            values: vector.values,
        }
    }
}

#[cfg(feature = "serde")]
impl<T: MatrixElement> TryFrom<VectorParts<T>> for SparseVector<T> {
    type Error = CscaError;

    fn try_from(parts: VectorParts<T>) -> Result<Self> {
        Self::from_parts(parts.size, parts.indices, parts.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut v = SparseVector::new(6);
        assert!(v.insert(4, 1.0));
        assert!(v.insert(1, 2.0));
        assert!(!v.insert(4, 3.0));
        assert!(!v.insert(6, 3.0));
        assert_eq!(v.indices(), &[1, 4]);
        assert_eq!(v.try_get(4), Some(1.0));
        assert_eq!(v.try_get(0), None);
    }

    #[test]
    fn test_get_distinguishes_missing() {
        let v = SparseVector::from_dense(&[0, 5, 0]);
        assert_eq!(v.nnz(), 1);
        assert_eq!(v.get(1), Ok(5));
        assert_eq!(v.get(0), Err(CscaError::MissingEntry { row: 0, col: 0 }));
        assert_eq!(v.get(3), Err(CscaError::IndexOutOfBounds { row: 3, col: 0 }));
    }

    #[test]
    fn test_from_parts_rejects_unsorted() {
        assert!(SparseVector::from_parts(4, vec![2, 1], vec![1.0, 1.0]).is_err());
        assert!(SparseVector::from_parts(4, vec![1, 4], vec![1.0, 1.0]).is_err());
        assert!(SparseVector::from_parts(4, vec![0, 3], vec![1.0, 1.0]).is_ok());
    }

    #[test]
    fn test_remove_and_dense() {
        let mut v = SparseVector::from_dense(&[1.0, 0.0, 3.0]);
        assert!(v.remove(0));
        assert!(!v.remove(0));
        assert_eq!(v.to_dense(), vec![0.0, 0.0, 3.0]);
    }
}
