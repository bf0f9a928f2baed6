//! Operator overloads for CSC storages
//!
//! Operators act on references and never consume their operands. Binary
//! operators between containers can fail on shape, so their output is a
//! `Result`; scalar operators and negation cannot fail.

use std::ops::{Add, Div, Mul, Neg, Sub};

use csca_core::{MatrixElement, Result};

use super::CompressedColumn;
use crate::dense::{DenseMatrix, DenseVector};
use crate::vector::SparseVector;

impl<T: MatrixElement> Neg for &CompressedColumn<T> {
    type Output = CompressedColumn<T>;

    fn neg(self) -> CompressedColumn<T> {
        CompressedColumn::neg(self)
    }
}

impl<T: MatrixElement> Mul<T> for &CompressedColumn<T> {
    type Output = CompressedColumn<T>;

    fn mul(self, factor: T) -> CompressedColumn<T> {
        self.scale(factor)
    }
}

impl<T: MatrixElement> Div<T> for &CompressedColumn<T> {
    type Output = CompressedColumn<T>;

    fn div(self, divisor: T) -> CompressedColumn<T> {
        self.div_scalar(divisor)
    }
}

macro_rules! impl_scalar_left_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<&CompressedColumn<$t>> for $t {
                type Output = CompressedColumn<$t>;

                fn mul(self, matrix: &CompressedColumn<$t>) -> CompressedColumn<$t> {
                    matrix.scale_left(self)
                }
            }
        )*
    };
}

impl_scalar_left_mul!(f32, f64, i32, i64);

impl<T: MatrixElement> Add for &CompressedColumn<T> {
    type Output = Result<CompressedColumn<T>>;

    fn add(self, rhs: Self) -> Self::Output {
        CompressedColumn::add(self, rhs)
    }
}

impl<T: MatrixElement> Sub for &CompressedColumn<T> {
    type Output = Result<CompressedColumn<T>>;

    fn sub(self, rhs: Self) -> Self::Output {
        CompressedColumn::sub(self, rhs)
    }
}

impl<T: MatrixElement> Mul for &CompressedColumn<T> {
    type Output = Result<CompressedColumn<T>>;

    fn mul(self, rhs: Self) -> Self::Output {
        CompressedColumn::mul(self, rhs)
    }
}

impl<T: MatrixElement> Add<&DenseMatrix<T>> for &CompressedColumn<T> {
    type Output = Result<DenseMatrix<T>>;

    fn add(self, rhs: &DenseMatrix<T>) -> Self::Output {
        self.add_dense(rhs)
    }
}

impl<T: MatrixElement> Add<&CompressedColumn<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>>;

    fn add(self, rhs: &CompressedColumn<T>) -> Self::Output {
        rhs.add_dense(self)
    }
}

impl<T: MatrixElement> Sub<&DenseMatrix<T>> for &CompressedColumn<T> {
    type Output = Result<DenseMatrix<T>>;

    fn sub(self, rhs: &DenseMatrix<T>) -> Self::Output {
        self.sub_dense(rhs)
    }
}

impl<T: MatrixElement> Sub<&CompressedColumn<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>>;

    fn sub(self, rhs: &CompressedColumn<T>) -> Self::Output {
        rhs.dense_sub(self)
    }
}

impl<T: MatrixElement> Mul<&DenseMatrix<T>> for &CompressedColumn<T> {
    type Output = Result<DenseMatrix<T>>;

    fn mul(self, rhs: &DenseMatrix<T>) -> Self::Output {
        self.mul_dense(rhs)
    }
}

impl<T: MatrixElement> Mul<&CompressedColumn<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>>;

    fn mul(self, rhs: &CompressedColumn<T>) -> Self::Output {
        rhs.dense_mul(self)
    }
}

impl<T: MatrixElement> Mul<&DenseVector<T>> for &CompressedColumn<T> {
    type Output = Result<DenseVector<T>>;

    fn mul(self, rhs: &DenseVector<T>) -> Self::Output {
        self.mul_vector(rhs)
    }
}

impl<T: MatrixElement> Mul<&SparseVector<T>> for &CompressedColumn<T> {
    type Output = Result<SparseVector<T>>;

    fn mul(self, rhs: &SparseVector<T>) -> Self::Output {
        self.mul_sparse_vector(rhs)
    }
}
