//! Format-tagged sparse storage
//!
//! [`Storage`] is the caller-facing handle over every concrete storage
//! engine. Binary operations dispatch on the variant pair with an exhaustive
//! `match`, so adding an engine forces every operation to decide how it
//! pairs with the existing ones. Format tags without an engine are rejected
//! at construction with [`CscaError::NotImplemented`].

use std::ops::{Add, Div, Mul, Neg, Sub};

use csca_core::{
    CscParts, CscaError, MatrixElement, Result, SparseStorage, StorageFormat, StorageOperations,
};

use crate::config::StorageConfig;
use crate::csc::CompressedColumn;
use crate::dense::{DenseMatrix, DenseVector};
use crate::vector::SparseVector;

/// Sparse matrix in one of the supported storage formats
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "T: Clone + serde::Serialize",
        deserialize = "T: MatrixElement + serde::Deserialize<'de>"
    ))
)]
pub enum Storage<T> {
    CompressedColumn(CompressedColumn<T>),
}

impl<T: MatrixElement> Storage<T> {
    /// Create an empty storage in the format named by `config`
    pub fn with_config(nrows: usize, ncols: usize, config: &StorageConfig) -> Result<Self> {
        match config.format {
            StorageFormat::Csc => {
                CompressedColumn::with_config(nrows, ncols, config).map(Self::from)
            }
            StorageFormat::Coo | StorageFormat::Csr => {
                Err(CscaError::NotImplemented(config.format))
            }
        }
    }

    /// Build from the non-zero entries of a dense matrix in the format
    /// named by `config`
    pub fn from_dense(dense: &DenseMatrix<T>, config: &StorageConfig) -> Result<Self> {
        match config.format {
            StorageFormat::Csc => {
                CompressedColumn::from_dense_with_config(dense, config).map(Self::from)
            }
            StorageFormat::Coo | StorageFormat::Csr => {
                Err(CscaError::NotImplemented(config.format))
            }
        }
    }

    /// Borrow the CSC engine, if this is one
    pub fn as_compressed_column(&self) -> Option<&CompressedColumn<T>> {
        match self {
            Storage::CompressedColumn(m) => Some(m),
        }
    }

    /// Take the CSC engine out, if this is one
    pub fn into_compressed_column(self) -> Option<CompressedColumn<T>> {
        match self {
            Storage::CompressedColumn(m) => Some(m),
        }
    }

    /// Copy into CSC, converting if needed
    pub fn to_compressed_column(&self) -> CompressedColumn<T> {
        match self {
            Storage::CompressedColumn(m) => m.to_compressed_column(),
        }
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Storage::CompressedColumn(m) => m.shape(),
        }
    }

    /// Dense copy
    pub fn to_dense(&self) -> DenseMatrix<T> {
        match self {
            Storage::CompressedColumn(m) => m.to_dense(),
        }
    }

    /// Dense copy as nested rows
    pub fn to_array(&self) -> Vec<Vec<T>> {
        match self {
            Storage::CompressedColumn(m) => m.to_array(),
        }
    }

    pub fn to_row_major_vec(&self) -> Vec<T> {
        match self {
            Storage::CompressedColumn(m) => m.to_row_major_vec(),
        }
    }

    pub fn to_column_major_vec(&self) -> Vec<T> {
        match self {
            Storage::CompressedColumn(m) => m.to_column_major_vec(),
        }
    }

    pub fn row_vectors(&self) -> Vec<SparseVector<T>> {
        match self {
            Storage::CompressedColumn(m) => m.row_vectors(),
        }
    }

    pub fn column_vectors(&self) -> Vec<SparseVector<T>> {
        match self {
            Storage::CompressedColumn(m) => m.column_vectors(),
        }
    }

    /// Transposed copy in the same format
    pub fn transpose(&self) -> Self {
        match self {
            Storage::CompressedColumn(m) => m.transpose().into(),
        }
    }

    /// Element-wise sum
    pub fn add(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Storage::CompressedColumn(a), Storage::CompressedColumn(b)) => {
                a.add(b).map(Self::from)
            }
        }
    }

    /// Element-wise difference
    pub fn sub(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Storage::CompressedColumn(a), Storage::CompressedColumn(b)) => {
                a.sub(b).map(Self::from)
            }
        }
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        match self {
            Storage::CompressedColumn(m) => m.neg().into(),
        }
    }

    /// Matrix product `self · other`
    pub fn mul(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Storage::CompressedColumn(a), Storage::CompressedColumn(b)) => {
                a.mul(b).map(Self::from)
            }
        }
    }

    /// `selfᵗ · other`
    pub fn transpose_mul(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Storage::CompressedColumn(a), Storage::CompressedColumn(b)) => {
                a.transpose_mul(b).map(Self::from)
            }
        }
    }

    /// `self · otherᵗ`
    pub fn mul_transpose(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Storage::CompressedColumn(a), Storage::CompressedColumn(b)) => {
                a.mul_transpose(b).map(Self::from)
            }
        }
    }

    /// `self + dense`; addition commutes, so this also serves `dense + self`
    pub fn add_dense(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        match self {
            Storage::CompressedColumn(m) => m.add_dense(dense),
        }
    }

    pub fn sub_dense(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        match self {
            Storage::CompressedColumn(m) => m.sub_dense(dense),
        }
    }

    pub fn dense_sub(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        match self {
            Storage::CompressedColumn(m) => m.dense_sub(dense),
        }
    }

    pub fn mul_dense(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        match self {
            Storage::CompressedColumn(m) => m.mul_dense(dense),
        }
    }

    pub fn dense_mul(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        match self {
            Storage::CompressedColumn(m) => m.dense_mul(dense),
        }
    }

    pub fn transpose_mul_dense(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        match self {
            Storage::CompressedColumn(m) => m.transpose_mul_dense(dense),
        }
    }

    pub fn dense_transpose_mul(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        match self {
            Storage::CompressedColumn(m) => m.dense_transpose_mul(dense),
        }
    }

    pub fn mul_dense_transpose(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        match self {
            Storage::CompressedColumn(m) => m.mul_dense_transpose(dense),
        }
    }

    pub fn dense_mul_transpose(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        match self {
            Storage::CompressedColumn(m) => m.dense_mul_transpose(dense),
        }
    }

    /// Right scalar product
    pub fn scale(&self, factor: T) -> Self {
        match self {
            Storage::CompressedColumn(m) => m.scale(factor).into(),
        }
    }

    /// Left scalar product
    pub fn scale_left(&self, factor: T) -> Self {
        match self {
            Storage::CompressedColumn(m) => m.scale_left(factor).into(),
        }
    }

    pub fn div_scalar(&self, divisor: T) -> Self {
        match self {
            Storage::CompressedColumn(m) => m.div_scalar(divisor).into(),
        }
    }

    pub fn mul_vector(&self, vector: &DenseVector<T>) -> Result<DenseVector<T>> {
        match self {
            Storage::CompressedColumn(m) => m.mul_vector(vector),
        }
    }

    pub fn mul_sparse_vector(&self, vector: &SparseVector<T>) -> Result<SparseVector<T>> {
        match self {
            Storage::CompressedColumn(m) => m.mul_sparse_vector(vector),
        }
    }

    pub fn transpose_mul_vector(&self, vector: &DenseVector<T>) -> Result<DenseVector<T>> {
        match self {
            Storage::CompressedColumn(m) => m.transpose_mul_vector(vector),
        }
    }

    pub fn transpose_mul_sparse_vector(
        &self,
        vector: &SparseVector<T>,
    ) -> Result<SparseVector<T>> {
        match self {
            Storage::CompressedColumn(m) => m.transpose_mul_sparse_vector(vector),
        }
    }
}

impl<T> From<CompressedColumn<T>> for Storage<T> {
    fn from(matrix: CompressedColumn<T>) -> Self {
        Storage::CompressedColumn(matrix)
    }
}

impl<T: MatrixElement> SparseStorage for Storage<T> {
    type Element = T;

    fn storage_format(&self) -> StorageFormat {
        match self {
            Storage::CompressedColumn(m) => m.storage_format(),
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        self.shape()
    }

    fn nnz(&self) -> usize {
        match self {
            Storage::CompressedColumn(m) => m.nnz(),
        }
    }

    fn try_get(&self, row: usize, col: usize) -> Option<T> {
        match self {
            Storage::CompressedColumn(m) => m.try_get(row, col),
        }
    }

    fn insert(&mut self, row: usize, col: usize, value: T) -> bool {
        match self {
            Storage::CompressedColumn(m) => m.insert(row, col, value),
        }
    }

    fn replace(&mut self, row: usize, col: usize, value: T) -> bool {
        match self {
            Storage::CompressedColumn(m) => m.replace(row, col, value),
        }
    }

    fn remove(&mut self, row: usize, col: usize) -> bool {
        match self {
            Storage::CompressedColumn(m) => m.remove(row, col),
        }
    }
}

impl<T: MatrixElement> StorageOperations for Storage<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        match self {
            Storage::CompressedColumn(m) => m.get_row(row_index),
        }
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        match self {
            Storage::CompressedColumn(m) => m.get_col(col_index),
        }
    }

    fn to_csc_parts(&self) -> CscParts<T> {
        match self {
            Storage::CompressedColumn(m) => m.to_csc_parts(),
        }
    }
}

impl<T: MatrixElement> Neg for &Storage<T> {
    type Output = Storage<T>;

    fn neg(self) -> Storage<T> {
        Storage::neg(self)
    }
}

impl<T: MatrixElement> Mul<T> for &Storage<T> {
    type Output = Storage<T>;

    fn mul(self, factor: T) -> Storage<T> {
        self.scale(factor)
    }
}

impl<T: MatrixElement> Div<T> for &Storage<T> {
    type Output = Storage<T>;

    fn div(self, divisor: T) -> Storage<T> {
        self.div_scalar(divisor)
    }
}

impl<T: MatrixElement> Add for &Storage<T> {
    type Output = Result<Storage<T>>;

    fn add(self, rhs: Self) -> Self::Output {
        Storage::add(self, rhs)
    }
}

impl<T: MatrixElement> Sub for &Storage<T> {
    type Output = Result<Storage<T>>;

    fn sub(self, rhs: Self) -> Self::Output {
        Storage::sub(self, rhs)
    }
}

impl<T: MatrixElement> Mul for &Storage<T> {
    type Output = Result<Storage<T>>;

    fn mul(self, rhs: Self) -> Self::Output {
        Storage::mul(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(rows: &[&[f64]]) -> Storage<f64> {
        let dense = DenseMatrix::from_rows(rows).unwrap();
        Storage::from_dense(&dense, &StorageConfig::default()).unwrap()
    }

    #[test]
    fn test_unimplemented_formats_rejected() {
        for format in [StorageFormat::Coo, StorageFormat::Csr] {
            let config = StorageConfig::with_format(format);
            assert_eq!(
                Storage::<f64>::with_config(3, 3, &config),
                Err(CscaError::NotImplemented(format))
            );
            let err = Storage::from_dense(&DenseMatrix::<f64>::zeros(2, 2), &config).unwrap_err();
            assert_eq!(err.category(), csca_core::ErrorCategory::NotImplemented);
        }
    }

    #[test]
    fn test_dispatch_matches_engine() {
        let a = storage(&[&[1.0, 4.0, -2.0], &[2.0, 7.0, 3.0]]);
        let b = storage(&[&[5.0, -1.0, 6.0], &[-2.0, 1.0, -3.0]]);
        let sum = (&a + &b).unwrap();
        assert_eq!(sum.to_array(), vec![vec![6.0, 3.0, 4.0], vec![0.0, 8.0, 0.0]]);
        assert!(!sum.contains(1, 0));
        assert_eq!(sum.storage_format(), StorageFormat::Csc);

        let ab_t = a.mul_transpose(&b).unwrap();
        assert_eq!(
            ab_t.to_dense(),
            a.to_dense().matmul(&b.to_dense().transpose()).unwrap()
        );
        assert_eq!((&a * &b).unwrap_err().category(), csca_core::ErrorCategory::InvalidArgument);
        assert_eq!((&a / 4.0).to_array()[1], vec![0.5, 1.75, 0.75]);
        assert_eq!((-&a).try_get(0, 0), Some(-1.0));
    }

    #[test]
    fn test_dense_and_vector_dispatch_matches_engine() {
        let a = storage(&[&[1.0, 0.0, -2.0], &[0.0, 7.0, 3.0]]);
        let engine = a.as_compressed_column().unwrap();
        let same = DenseMatrix::from_rows(&[[2.0, 1.0, 0.0], [-1.0, 0.0, 4.0]]).unwrap();
        let right = DenseMatrix::from_rows(&[[1.0, 2.0], [0.0, -1.0], [3.0, 0.5]]).unwrap();
        let tall = DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, -1.0]]).unwrap();

        assert_eq!(a.add_dense(&same), engine.add_dense(&same));
        assert_eq!(a.sub_dense(&same), engine.sub_dense(&same));
        assert_eq!(a.dense_sub(&same), engine.dense_sub(&same));
        assert_eq!(a.mul_dense(&right), engine.mul_dense(&right));
        assert_eq!(a.dense_mul(&tall), engine.dense_mul(&tall));
        assert_eq!(a.transpose_mul_dense(&tall), engine.transpose_mul_dense(&tall));
        assert_eq!(a.dense_transpose_mul(&tall), engine.dense_transpose_mul(&tall));
        assert_eq!(a.mul_dense_transpose(&same), engine.mul_dense_transpose(&same));
        assert_eq!(a.dense_mul_transpose(&same), engine.dense_mul_transpose(&same));
        assert!(a.mul_dense(&same).is_err());

        let v = DenseVector::new(vec![1.0, -1.0, 2.0]);
        let sv = SparseVector::from_dense(&[1.0, 0.0, 2.0]);
        let w = DenseVector::new(vec![0.5, 2.0]);
        let sw = SparseVector::from_dense(&[0.0, 2.0]);
        assert_eq!(a.mul_vector(&v), engine.mul_vector(&v));
        assert_eq!(a.mul_vector(&v).unwrap().as_slice(), &[-3.0, -1.0]);
        assert_eq!(a.mul_sparse_vector(&sv), engine.mul_sparse_vector(&sv));
        assert_eq!(a.transpose_mul_vector(&w), engine.transpose_mul_vector(&w));
        assert_eq!(
            a.transpose_mul_sparse_vector(&sw),
            engine.transpose_mul_sparse_vector(&sw)
        );
        assert_eq!(
            a.transpose_mul_sparse_vector(&sw).unwrap().to_dense(),
            vec![0.0, 14.0, 6.0]
        );

        assert_eq!(a.scale(2.0).to_dense(), engine.scale(2.0).to_dense());
        assert_eq!(a.scale_left(2.0).to_dense(), engine.scale_left(2.0).to_dense());
        assert_eq!(a.transpose().shape(), (3, 2));
        assert_eq!(a.to_column_major_vec(), engine.to_column_major_vec());
        assert_eq!(a.row_vectors(), engine.row_vectors());
        assert_eq!(a.column_vectors(), engine.column_vectors());
    }

    #[test]
    fn test_mutation_through_trait() {
        let mut s = Storage::<f64>::with_config(2, 2, &StorageConfig::default()).unwrap();
        assert!(s.insert(1, 0, 3.0));
        assert!(!s.insert(1, 0, 4.0));
        assert!(s.replace(1, 0, 4.0));
        assert_eq!(s.get(1, 0), Ok(4.0));
        assert!(s.remove(1, 0));
        assert_eq!(s.nnz(), 0);
        assert_eq!(s.get_row(1), Vec::new());
    }

    #[test]
    fn test_engine_access() {
        let s = storage(&[&[0.0, 2.0]]);
        assert_eq!(s.as_compressed_column().map(CompressedColumn::nnz), Some(1));
        assert_eq!(s.to_compressed_column().nnz(), 1);
        let engine = s.into_compressed_column().unwrap();
        assert_eq!(Storage::from(engine).shape(), (1, 2));
    }
}
