//! Sparse-sparse and scalar algebra on CSC storages
//!
//! Every operation here is pure: operands are borrowed, a new storage is
//! returned. Element-wise operations merge the two sorted row runs of each
//! column; products either accumulate into a reused dense scratch column or
//! merge-walk pairs of columns as dot products.

use std::cmp::Ordering;

use csca_core::{
    check_product_shape, check_product_transpose_shape, check_same_shape,
    check_transpose_product_shape, MatrixElement, Result,
};
use tracing::debug;

use super::accumulator::ColumnAccumulator;
use super::CompressedColumn;

/// Output arrays of a storage built column by column
struct ColumnBuilder<T> {
    values: Vec<T>,
    row_indices: Vec<usize>,
    column_pointers: Vec<usize>,
}

impl<T: MatrixElement> ColumnBuilder<T> {
    fn new(ncols: usize, capacity: usize) -> Self {
        let mut column_pointers = Vec::with_capacity(ncols + 1);
        column_pointers.push(0);
        Self {
            values: Vec::with_capacity(capacity),
            row_indices: Vec::with_capacity(capacity),
            column_pointers,
        }
    }

    #[inline]
    fn push(&mut self, row: usize, value: T) {
        self.row_indices.push(row);
        self.values.push(value);
    }

    #[inline]
    fn finish_column(&mut self) {
        self.column_pointers.push(self.values.len());
    }

    fn build(self, nrows: usize, ncols: usize) -> CompressedColumn<T> {
        debug_assert_eq!(self.column_pointers.len(), ncols + 1);
        CompressedColumn::from_raw_parts_unchecked(
            nrows,
            ncols,
            self.values,
            self.row_indices,
            self.column_pointers,
        )
    }
}

impl<T: MatrixElement> CompressedColumn<T> {
    /// Element-wise sum `self + other`
    ///
    /// Entries whose sum cancels to zero are dropped.
    pub fn add(&self, other: &Self) -> Result<Self> {
        check_same_shape("add", self.shape(), other.shape())?;
        debug!(shape = ?self.shape(), left_nnz = self.nnz(), right_nnz = other.nnz(), "sparse add");
        Ok(self.merge(other, |a, b| a + b, |b| b))
    }

    /// Element-wise difference `self - other`
    ///
    /// Entries whose difference cancels to zero are dropped; entries only
    /// present in `other` are negated.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        check_same_shape("sub", self.shape(), other.shape())?;
        debug!(shape = ?self.shape(), left_nnz = self.nnz(), right_nnz = other.nnz(), "sparse sub");
        Ok(self.merge(other, |a, b| a - b, MatrixElement::negate))
    }

    /// Sorted two-cursor merge of every column pair
    fn merge<B, R>(&self, other: &Self, both: B, right_only: R) -> Self
    where
        B: Fn(T, T) -> T,
        R: Fn(T) -> T,
    {
        let mut out = ColumnBuilder::new(self.ncols, self.nnz() + other.nnz());
        for col in 0..self.ncols {
            let left = self.column_range(col);
            let right = other.column_range(col);
            let (mut i, mut j) = (left.start, right.start);

            while i < left.end && j < right.end {
                let (row_i, row_j) = (self.row_indices[i], other.row_indices[j]);
                match row_i.cmp(&row_j) {
                    Ordering::Less => {
                        out.push(row_i, self.values[i]);
                        i += 1;
                    }
                    Ordering::Greater => {
                        out.push(row_j, right_only(other.values[j]));
                        j += 1;
                    }
                    Ordering::Equal => {
                        let value = both(self.values[i], other.values[j]);
                        if !value.is_zero() {
                            out.push(row_i, value);
                        }
                        i += 1;
                        j += 1;
                    }
                }
            }
            for offset in i..left.end {
                out.push(self.row_indices[offset], self.values[offset]);
            }
            for offset in j..right.end {
                out.push(other.row_indices[offset], right_only(other.values[offset]));
            }
            out.finish_column();
        }
        out.build(self.nrows, self.ncols)
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        self.map_values(MatrixElement::negate)
    }

    /// Right scalar product `self * factor`
    ///
    /// Scaling by zero yields an empty storage of the same shape.
    pub fn scale(&self, factor: T) -> Self {
        if factor.is_zero() {
            return self.empty_like();
        }
        self.map_values(|v| v * factor)
    }

    /// Left scalar product `factor * self`
    pub fn scale_left(&self, factor: T) -> Self {
        if factor.is_zero() {
            return self.empty_like();
        }
        self.map_values(|v| factor * v)
    }

    /// Scalar division `self / divisor`
    pub fn div_scalar(&self, divisor: T) -> Self {
        self.map_values(|v| v / divisor)
    }

    /// Structural copy with every value transformed
    fn map_values<F: Fn(T) -> T>(&self, f: F) -> Self {
        Self::from_raw_parts_unchecked(
            self.nrows,
            self.ncols,
            self.values.iter().map(|&v| f(v)).collect(),
            self.row_indices.clone(),
            self.column_pointers.clone(),
        )
    }

    fn empty_like(&self) -> Self {
        Self::from_raw_parts_unchecked(
            self.nrows,
            self.ncols,
            Vec::new(),
            Vec::new(),
            vec![0; self.ncols + 1],
        )
    }

    /// Matrix product `self · other`
    ///
    /// Each result column `j` is accumulated in a dense scratch column of
    /// length `self.row_count()`: for every `(k, j)` stored in `other`,
    /// column `k` of `self` is scaled and added in.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        check_product_shape("mul", self.shape(), other.shape())?;
        debug!(left = ?self.shape(), right = ?other.shape(), "sparse mul");

        let mut acc = ColumnAccumulator::new(self.nrows);
        let mut out = ColumnBuilder::new(other.ncols, self.nnz().max(other.nnz()));
        for j in 0..other.ncols {
            for (k, &b) in other.column(j) {
                for (i, &a) in self.column(k) {
                    acc.accumulate(i, a * b);
                }
            }
            acc.drain_into(|row, value| out.push(row, value));
            out.finish_column();
        }
        Ok(out.build(self.nrows, other.ncols))
    }

    /// Transpose product `selfᵗ · other`
    ///
    /// Cell `(r, c)` is the dot product of column `r` of `self` with column
    /// `c` of `other`, computed by merge-walking both sorted row runs. No
    /// transposed copy of `self` is built.
    pub fn transpose_mul(&self, other: &Self) -> Result<Self> {
        check_transpose_product_shape("transpose_mul", self.shape(), other.shape())?;
        debug!(left = ?self.shape(), right = ?other.shape(), "sparse transpose_mul");

        let mut out = ColumnBuilder::new(other.ncols, self.nnz().max(other.nnz()));
        for c in 0..other.ncols {
            let right = other.column_range(c);
            if right.is_empty() {
                out.finish_column();
                continue;
            }
            for r in 0..self.ncols {
                let left = self.column_range(r);
                let (mut i, mut j) = (left.start, right.start);
                let mut sum = T::zero();
                while i < left.end && j < right.end {
                    match self.row_indices[i].cmp(&other.row_indices[j]) {
                        Ordering::Less => i += 1,
                        Ordering::Greater => j += 1,
                        Ordering::Equal => {
                            sum = sum + self.values[i] * other.values[j];
                            i += 1;
                            j += 1;
                        }
                    }
                }
                if !sum.is_zero() {
                    out.push(r, sum);
                }
            }
            out.finish_column();
        }
        Ok(out.build(self.ncols, other.ncols))
    }

    /// Product with a transpose `self · otherᵗ`
    ///
    /// Result column `j` is row `j` of `other`. One cursor per column of
    /// `other` walks it once in storage order; at step `j` every column
    /// whose cursor sits on row `j` contributes its scaled column of `self`
    /// and advances.
    pub fn mul_transpose(&self, other: &Self) -> Result<Self> {
        check_product_transpose_shape("mul_transpose", self.shape(), other.shape())?;
        debug!(left = ?self.shape(), right = ?other.shape(), "sparse mul_transpose");

        let mut cursor: Vec<usize> = other.column_pointers[..other.ncols].to_vec();
        let mut valid: Vec<bool> = (0..other.ncols)
            .map(|k| cursor[k] < other.column_pointers[k + 1])
            .collect();

        let mut acc = ColumnAccumulator::new(self.nrows);
        let mut out = ColumnBuilder::new(other.nrows, self.nnz().max(other.nnz()));
        for j in 0..other.nrows {
            for k in 0..other.ncols {
                if !valid[k] || other.row_indices[cursor[k]] != j {
                    continue;
                }
                let b = other.values[cursor[k]];
                for (i, &a) in self.column(k) {
                    acc.accumulate(i, a * b);
                }
                cursor[k] += 1;
                valid[k] = cursor[k] < other.column_pointers[k + 1];
            }
            acc.drain_into(|row, value| out.push(row, value));
            out.finish_column();
        }
        Ok(out.build(self.nrows, other.nrows))
    }

    /// Transposed copy, built with a counting sort over row indices
    pub fn transpose(&self) -> Self {
        let nnz = self.nnz();
        let mut column_pointers = vec![0usize; self.nrows + 1];
        for &row in &self.row_indices {
            column_pointers[row + 1] += 1;
        }
        for row in 0..self.nrows {
            column_pointers[row + 1] += column_pointers[row];
        }

        let mut next = column_pointers.clone();
        let mut values = vec![T::zero(); nnz];
        let mut row_indices = vec![0usize; nnz];
        for col in 0..self.ncols {
            for offset in self.column_range(col) {
                let row = self.row_indices[offset];
                let dest = next[row];
                row_indices[dest] = col;
                values[dest] = self.values[offset];
                next[row] += 1;
            }
        }
        Self::from_raw_parts_unchecked(self.ncols, self.nrows, values, row_indices, column_pointers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DenseMatrix;
    use csca_core::CscaError;

    fn csc(rows: &[&[f64]]) -> CompressedColumn<f64> {
        CompressedColumn::from_dense(&DenseMatrix::from_rows(rows).unwrap()).unwrap()
    }

    #[test]
    fn test_add_drops_cancelled_entry() {
        let a = csc(&[&[1.0, 4.0, -2.0], &[2.0, 7.0, 3.0]]);
        let b = csc(&[&[5.0, -1.0, 6.0], &[-2.0, 1.0, -3.0]]);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.to_array(), vec![vec![6.0, 3.0, 4.0], vec![0.0, 8.0, 0.0]]);
        assert!(!sum.contains(1, 0));
        assert!(!sum.contains(1, 2));
        assert_eq!(sum.nnz(), 4);
    }

    #[test]
    fn test_sub_negates_right_only() {
        let a = csc(&[&[1.0, 0.0], &[0.0, 2.0]]);
        let b = csc(&[&[1.0, 3.0], &[0.0, 0.0]]);
        let diff = a.sub(&b).unwrap();
        assert_eq!(diff.to_array(), vec![vec![0.0, -3.0], vec![0.0, 2.0]]);
        assert_eq!(diff.nnz(), 2);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = csc(&[&[1.0, 2.0]]);
        let b = csc(&[&[1.0], &[2.0]]);
        assert_eq!(
            a.add(&b),
            Err(CscaError::ShapeMismatch {
                op: "add",
                left: (1, 2),
                right: (2, 1)
            })
        );
        assert!(a.sub(&b).is_err());
        assert!(a.mul(&a).is_err());
        assert!(a.transpose_mul(&b).is_err());
        assert!(a.mul_transpose(&b).is_err());
    }

    #[test]
    fn test_scalar_division() {
        let a = csc(&[&[1.0, 4.0, -2.0], &[2.0, 7.0, 3.0]]);
        let q = a.div_scalar(4.0);
        assert_eq!(
            q.to_array(),
            vec![vec![0.25, 1.0, -0.5], vec![0.5, 1.75, 0.75]]
        );
        assert_eq!(q.row_indices(), a.row_indices());
    }

    #[test]
    fn test_scale_and_neg() {
        let a = csc(&[&[1.0, 0.0], &[-2.0, 3.0]]);
        assert_eq!(a.scale(2.0).values(), &[2.0, -4.0, 6.0]);
        assert_eq!(a.scale_left(-1.0), a.neg());
        let zero = a.scale(0.0);
        assert_eq!(zero.nnz(), 0);
        assert_eq!(zero.shape(), (2, 2));
    }

    #[test]
    fn test_mul_matches_dense() {
        let a = csc(&[&[1.0, 0.0, 2.0], &[0.0, 3.0, 0.0]]);
        let b = csc(&[&[0.0, 1.0], &[4.0, 0.0], &[5.0, -0.5]]);
        let product = a.mul(&b).unwrap();
        let expected = a.to_dense().matmul(&b.to_dense()).unwrap();
        assert_eq!(product.to_dense(), expected);
        assert_eq!(product.shape(), (2, 2));
    }

    #[test]
    fn test_mul_skips_cancellation() {
        let a = csc(&[&[1.0, 1.0]]);
        let b = csc(&[&[2.0], &[-2.0]]);
        let product = a.mul(&b).unwrap();
        assert_eq!(product.nnz(), 0);
        assert_eq!(product.column_pointers(), &[0, 0]);
    }

    #[test]
    fn test_transpose_products_match_dense() {
        let a = csc(&[&[1.0, 0.0, 2.0], &[0.0, 3.0, 0.0], &[4.0, 0.0, 5.0]]);
        let b = csc(&[&[0.0, 1.0], &[6.0, 0.0], &[0.0, -1.0]]);

        let atb = a.transpose_mul(&b).unwrap();
        let expected = a.to_dense().transpose().matmul(&b.to_dense()).unwrap();
        assert_eq!(atb.to_dense(), expected);

        let c = csc(&[&[1.0, 0.0, 1.0], &[0.0, 2.0, 0.0]]);
        let act = a.mul_transpose(&c).unwrap();
        let expected = a.to_dense().matmul(&c.to_dense().transpose()).unwrap();
        assert_eq!(act.to_dense(), expected);
        assert_eq!(act.shape(), (3, 2));
    }

    #[test]
    fn test_transpose() {
        let a = csc(&[&[1.0, 0.0, 2.0], &[0.0, 3.0, 0.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.to_dense(), a.to_dense().transpose());
        assert_eq!(t.transpose(), a);
    }
}
