//! Dense matrix and vector containers
//!
//! Thin row-major wrappers used as the dense side of the embedding
//! operators. They carry no algebra beyond what the sparse engine and its
//! tests need.

use std::ops::{Index, IndexMut};

use csca_core::{check_index, check_product_shape, CscaError, MatrixElement, Result};

/// Row-major dense matrix
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "RowMajorParts<T>",
        into = "RowMajorParts<T>",
        bound(
            serialize = "T: Clone + serde::Serialize",
            deserialize = "T: MatrixElement + serde::Deserialize<'de>"
        )
    )
)]
pub struct DenseMatrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T: MatrixElement> DenseMatrix<T> {
    /// Create a matrix filled with zeros
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            data: vec![T::zero(); nrows * ncols],
        }
    }

    /// Create from a row-major buffer
    pub fn from_row_major(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != nrows * ncols {
            return Err(CscaError::ShapeMismatch {
                op: "from_row_major",
                left: (nrows, ncols),
                right: (data.len(), 1),
            });
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Create from a slice of equally sized rows
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(CscaError::ShapeMismatch {
                    op: "from_rows",
                    left: (nrows, ncols),
                    right: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.ncols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Bounds-checked element access
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        check_index(row, col, self.shape()).ok()?;
        Some(self.data[row * self.ncols + col])
    }

    /// Row-major backing buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume into the row-major backing buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.nrows)
            .map(|row| self.data[row * self.ncols..(row + 1) * self.ncols].to_vec())
            .collect()
    }

    /// Apply `f` to every element
    pub fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        Self {
            nrows: self.nrows,
            ncols: self.ncols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Transposed copy
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.ncols {
            for row in 0..self.nrows {
                data.push(self.data[row * self.ncols + col]);
            }
        }
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
            data,
        }
    }

    /// Naive triple-loop product, the reference the sparse kernels are
    /// checked against
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        check_product_shape("dense matmul", self.shape(), other.shape())?;
        let mut out = Self::zeros(self.nrows, other.ncols);
        for i in 0..self.nrows {
            for j in 0..other.ncols {
                let mut sum = T::zero();
                for k in 0..self.ncols {
                    sum = sum + self[(i, k)] * other[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        Ok(out)
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.nrows && col < self.ncols, "index out of bounds");
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.nrows && col < self.ncols, "index out of bounds");
        &mut self.data[row * self.ncols + col]
    }
}

/// Dense vector
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseVector<T> {
    data: Vec<T>,
}

impl<T: MatrixElement> DenseVector<T> {
    /// Wrap an existing buffer
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Vector of zeros
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![T::zero(); size],
        }
    }

    /// Number of components
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Bounds-checked component access
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for DenseVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> Index<usize> for DenseVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DenseVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

/// Serialized form of [`DenseMatrix`], length-checked on the way in
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RowMajorParts<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> From<DenseMatrix<T>> for RowMajorParts<T> {
    fn from(matrix: DenseMatrix<T>) -> Self {
        Self {
            nrows: matrix.nrows,
            ncols: matrix.ncols,
            data: matrix.data,
        }
    }
}

#[cfg(feature = "serde")]
impl<T: MatrixElement> TryFrom<RowMajorParts<T>> for DenseMatrix<T> {
    type Error = CscaError;

    fn try_from(parts: RowMajorParts<T>) -> Result<Self> {
        Self::from_row_major(parts.nrows, parts.ncols, parts.data)
    }
}
