//! Embedding operators between CSC storages and dense containers
//!
//! Sums and differences with a dense matrix produce a dense matrix; the
//! dense operand is copied and the sparse entries are overlaid. Products
//! scan the stored entries once, column by column, and scatter into the
//! dense result. Vector operands are treated as single columns, so their
//! shape in error reports is `(size, 1)`.

use std::cmp::Ordering;

use csca_core::{
    check_product_shape, check_product_transpose_shape, check_same_shape,
    check_transpose_product_shape, MatrixElement, Result,
};
use tracing::debug;

use super::accumulator::ColumnAccumulator;
use super::CompressedColumn;
use crate::dense::{DenseMatrix, DenseVector};
use crate::vector::SparseVector;

impl<T: MatrixElement> CompressedColumn<T> {
    /// `self + dense`, also used for `dense + self`
    pub fn add_dense(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        check_same_shape("add_dense", self.shape(), dense.shape())?;
        debug!(left = ?self.shape(), right = ?dense.shape(), "add_dense");
        let mut out = dense.clone();
        for (row, col, &value) in self.iter() {
            out[(row, col)] = value + out[(row, col)];
        }
        Ok(out)
    }

    /// `self - dense`
    pub fn sub_dense(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        check_same_shape("sub_dense", self.shape(), dense.shape())?;
        debug!(left = ?self.shape(), right = ?dense.shape(), "sub_dense");
        let mut out = dense.map(MatrixElement::negate);
        for (row, col, &value) in self.iter() {
            out[(row, col)] = value - dense[(row, col)];
        }
        Ok(out)
    }

    /// `dense - self`
    pub fn dense_sub(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        check_same_shape("dense_sub", dense.shape(), self.shape())?;
        debug!(left = ?dense.shape(), right = ?self.shape(), "dense_sub");
        let mut out = dense.clone();
        for (row, col, &value) in self.iter() {
            out[(row, col)] = out[(row, col)] - value;
        }
        Ok(out)
    }

    /// `self · dense`
    pub fn mul_dense(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        check_product_shape("mul_dense", self.shape(), dense.shape())?;
        debug!(left = ?self.shape(), right = ?dense.shape(), "mul_dense");
        let width = dense.column_count();
        let mut out = DenseMatrix::zeros(self.nrows, width);
        for (row, k, &a) in self.iter() {
            for j in 0..width {
                out[(row, j)] = out[(row, j)] + a * dense[(k, j)];
            }
        }
        Ok(out)
    }

    /// `dense · self`
    pub fn dense_mul(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        check_product_shape("dense_mul", dense.shape(), self.shape())?;
        debug!(left = ?dense.shape(), right = ?self.shape(), "dense_mul");
        let height = dense.row_count();
        let mut out = DenseMatrix::zeros(height, self.ncols);
        for (k, col, &b) in self.iter() {
            for i in 0..height {
                out[(i, col)] = out[(i, col)] + dense[(i, k)] * b;
            }
        }
        Ok(out)
    }

    /// `selfᵗ · dense`
    pub fn transpose_mul_dense(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        check_transpose_product_shape("transpose_mul_dense", self.shape(), dense.shape())?;
        debug!(left = ?self.shape(), right = ?dense.shape(), "transpose_mul_dense");
        let width = dense.column_count();
        let mut out = DenseMatrix::zeros(self.ncols, width);
        for (k, col, &a) in self.iter() {
            for j in 0..width {
                out[(col, j)] = out[(col, j)] + a * dense[(k, j)];
            }
        }
        Ok(out)
    }

    /// `denseᵗ · self`
    pub fn dense_transpose_mul(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        check_transpose_product_shape("dense_transpose_mul", dense.shape(), self.shape())?;
        debug!(left = ?dense.shape(), right = ?self.shape(), "dense_transpose_mul");
        let width = dense.column_count();
        let mut out = DenseMatrix::zeros(width, self.ncols);
        for (k, col, &b) in self.iter() {
            for i in 0..width {
                out[(i, col)] = out[(i, col)] + dense[(k, i)] * b;
            }
        }
        Ok(out)
    }

    /// `self · denseᵗ`
    pub fn mul_dense_transpose(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        check_product_transpose_shape("mul_dense_transpose", self.shape(), dense.shape())?;
        debug!(left = ?self.shape(), right = ?dense.shape(), "mul_dense_transpose");
        let height = dense.row_count();
        let mut out = DenseMatrix::zeros(self.nrows, height);
        for (row, k, &a) in self.iter() {
            for j in 0..height {
                out[(row, j)] = out[(row, j)] + a * dense[(j, k)];
            }
        }
        Ok(out)
    }

    /// `dense · selfᵗ`
    pub fn dense_mul_transpose(&self, dense: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        check_product_transpose_shape("dense_mul_transpose", dense.shape(), self.shape())?;
        debug!(left = ?dense.shape(), right = ?self.shape(), "dense_mul_transpose");
        let height = dense.row_count();
        let mut out = DenseMatrix::zeros(height, self.nrows);
        for (j, k, &b) in self.iter() {
            for i in 0..height {
                out[(i, j)] = out[(i, j)] + dense[(i, k)] * b;
            }
        }
        Ok(out)
    }

    /// `self · v`
    pub fn mul_vector(&self, vector: &DenseVector<T>) -> Result<DenseVector<T>> {
        check_product_shape("mul_vector", self.shape(), (vector.size(), 1))?;
        debug!(left = ?self.shape(), right = ?(vector.size(), 1), "mul_vector");
        let mut out = DenseVector::zeros(self.nrows);
        for col in 0..self.ncols {
            let factor = vector[col];
            if factor.is_zero() {
                continue;
            }
            for (row, &a) in self.column(col) {
                out[row] = out[row] + a * factor;
            }
        }
        Ok(out)
    }

    /// `self · v` for a sparse `v`; cancelled rows are not stored
    pub fn mul_sparse_vector(&self, vector: &SparseVector<T>) -> Result<SparseVector<T>> {
        check_product_shape("mul_sparse_vector", self.shape(), (vector.size(), 1))?;
        debug!(left = ?self.shape(), right = ?(vector.size(), 1), "mul_sparse_vector");
        let mut acc = ColumnAccumulator::new(self.nrows);
        for (col, &factor) in vector.iter() {
            for (row, &a) in self.column(col) {
                acc.accumulate(row, a * factor);
            }
        }
        let mut out = SparseVector::new(self.nrows);
        acc.drain_into(|row, value| out.push(row, value));
        Ok(out)
    }

    /// `selfᵗ · v`, equivalently `vᵗ · self`
    pub fn transpose_mul_vector(&self, vector: &DenseVector<T>) -> Result<DenseVector<T>> {
        check_transpose_product_shape("transpose_mul_vector", self.shape(), (vector.size(), 1))?;
        debug!(left = ?self.shape(), right = ?(vector.size(), 1), "transpose_mul_vector");
        let mut out = DenseVector::zeros(self.ncols);
        for col in 0..self.ncols {
            let mut sum = T::zero();
            for (row, &a) in self.column(col) {
                sum = sum + a * vector[row];
            }
            out[col] = sum;
        }
        Ok(out)
    }

    /// `selfᵗ · v` for a sparse `v`
    ///
    /// Each component is a merge-walk of one stored column against the
    /// vector's sorted indices.
    pub fn transpose_mul_sparse_vector(&self, vector: &SparseVector<T>) -> Result<SparseVector<T>> {
        check_transpose_product_shape(
            "transpose_mul_sparse_vector",
            self.shape(),
            (vector.size(), 1),
        )?;
        debug!(left = ?self.shape(), right = ?(vector.size(), 1), "transpose_mul_sparse_vector");
        let (indices, factors) = (vector.indices(), vector.values());
        let mut out = SparseVector::new(self.ncols);
        for col in 0..self.ncols {
            let range = self.column_range(col);
            let (mut i, mut j) = (range.start, 0);
            let mut sum = T::zero();
            while i < range.end && j < indices.len() {
                match self.row_indices[i].cmp(&indices[j]) {
                    Ordering::Less => i += 1,
                    Ordering::Greater => j += 1,
                    Ordering::Equal => {
                        sum = sum + self.values[i] * factors[j];
                        i += 1;
                        j += 1;
                    }
                }
            }
            if !sum.is_zero() {
                out.push(col, sum);
            }
        }
        Ok(out)
    }
}
