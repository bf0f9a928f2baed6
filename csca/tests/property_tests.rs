//! Property-based tests using proptest.
//!
//! These tests check laws that must hold for every input rather than
//! specific values:
//!   - CSC structure survives arbitrary insert/remove sequences
//!   - Dense round trips are exact
//!   - Sums, differences and products agree with the dense reference
//!
//! Integer elements keep every comparison exact.

use csca::{CompressedColumn, CscaError, DenseMatrix};
use csca_core::validate_csc_structure;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Sparse-ish dense matrix of small integers with the given shape
fn dense_with_shape(rows: usize, cols: usize) -> impl Strategy<Value = DenseMatrix<i64>> {
    prop::collection::vec(prop_oneof![3 => Just(0i64), 2 => -5i64..=5], rows * cols)
        .prop_map(move |data| DenseMatrix::from_row_major(rows, cols, data).unwrap())
}

fn dense_matrix() -> impl Strategy<Value = DenseMatrix<i64>> {
    (1usize..7, 1usize..7).prop_flat_map(|(r, c)| dense_with_shape(r, c))
}

/// Two matrices of the same shape
fn same_shape_pair() -> impl Strategy<Value = (DenseMatrix<i64>, DenseMatrix<i64>)> {
    (1usize..7, 1usize..7).prop_flat_map(|(r, c)| (dense_with_shape(r, c), dense_with_shape(r, c)))
}

/// `(m x k)` and `(k x n)` matrices
fn product_pair() -> impl Strategy<Value = (DenseMatrix<i64>, DenseMatrix<i64>)> {
    (1usize..6, 1usize..6, 1usize..6)
        .prop_flat_map(|(m, k, n)| (dense_with_shape(m, k), dense_with_shape(k, n)))
}

fn sparse(dense: &DenseMatrix<i64>) -> CompressedColumn<i64> {
    CompressedColumn::from_dense(dense).unwrap()
}

fn assert_structure(m: &CompressedColumn<i64>) -> Result<(), TestCaseError> {
    let (rows, cols) = m.shape();
    prop_assert!(
        validate_csc_structure(rows, cols, m.nnz(), m.row_indices(), m.column_pointers()).is_ok()
    );
    prop_assert_eq!(m.column_pointers()[cols], m.nnz());
    Ok(())
}

fn no_stored_zeros(m: &CompressedColumn<i64>) -> bool {
    m.values().iter().all(|&v| v != 0)
}

// ---------------------------------------------------------------------------
// 1. Structure is preserved by entry mutation
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_mutation_preserves_structure(
        ops in prop::collection::vec((0usize..5, 0usize..5, 1i64..9, any::<bool>()), 0..40),
    ) {
        let mut m = CompressedColumn::<i64>::new(5, 5).unwrap();
        let mut mirror = DenseMatrix::<i64>::zeros(5, 5);
        for (row, col, value, insert) in ops {
            if insert {
                let fresh = mirror[(row, col)] == 0;
                prop_assert_eq!(m.insert(row, col, value), fresh);
                if fresh {
                    mirror[(row, col)] = value;
                }
            } else {
                let present = mirror[(row, col)] != 0;
                prop_assert_eq!(m.remove(row, col), present);
                mirror[(row, col)] = 0;
            }
            assert_structure(&m)?;
        }
        prop_assert_eq!(m.to_dense(), mirror);
    }

    #[test]
    fn prop_remove_after_insert_restores_arrays(
        dense in dense_matrix(),
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
    ) {
        let mut m = sparse(&dense);
        let (rows, cols) = m.shape();
        let (row, col) = (row_seed % rows, col_seed % cols);
        prop_assume!(!m.contains(row, col));

        let before = m.clone();
        prop_assert!(m.insert(row, col, 42));
        assert_structure(&m)?;
        prop_assert!(m.remove(row, col));
        prop_assert_eq!(m, before);
    }

    #[test]
    fn prop_dense_round_trip(dense in dense_matrix()) {
        let m = sparse(&dense);
        assert_structure(&m)?;
        prop_assert!(no_stored_zeros(&m));
        prop_assert_eq!(m.to_dense(), dense.clone());
        prop_assert_eq!(m.to_array(), dense.to_rows());
        prop_assert_eq!(m.transpose().to_dense(), dense.transpose());
    }
}

// ---------------------------------------------------------------------------
// 2. Element-wise algebra
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_add_then_sub_is_identity((a, b) in same_shape_pair()) {
        let (sa, sb) = (sparse(&a), sparse(&b));
        let sum = sa.add(&sb).unwrap();
        prop_assert!(no_stored_zeros(&sum));
        assert_structure(&sum)?;

        let back = sum.sub(&sb).unwrap();
        prop_assert!(no_stored_zeros(&back));
        prop_assert_eq!(back.to_dense(), a);
        prop_assert_eq!(back, sa);
    }

    #[test]
    fn prop_sub_self_is_empty(a in dense_matrix()) {
        let sa = sparse(&a);
        let diff = sa.sub(&sa).unwrap();
        prop_assert_eq!(diff.nnz(), 0);
        prop_assert_eq!(sa.add(&sa.neg()).unwrap().nnz(), 0);
    }

    #[test]
    fn prop_dense_embedding_matches_dense((a, b) in same_shape_pair()) {
        let sa = sparse(&a);
        let sum = sa.add_dense(&b).unwrap();
        let diff = sa.sub_dense(&b).unwrap();
        let rdiff = sa.dense_sub(&b).unwrap();
        let positions = (0..a.row_count()).flat_map(|r| (0..a.column_count()).map(move |c| (r, c)));
        for (row, col) in positions {
            prop_assert_eq!(sum[(row, col)], a[(row, col)] + b[(row, col)]);
            prop_assert_eq!(diff[(row, col)], a[(row, col)] - b[(row, col)]);
            prop_assert_eq!(rdiff[(row, col)], b[(row, col)] - a[(row, col)]);
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Products agree with the naive dense reference
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_mul_matches_naive((a, b) in product_pair()) {
        let product = sparse(&a).mul(&sparse(&b)).unwrap();
        assert_structure(&product)?;
        prop_assert!(no_stored_zeros(&product));
        prop_assert_eq!(product.to_dense(), a.matmul(&b).unwrap());
    }

    #[test]
    fn prop_mul_transpose_law((a, b) in product_pair()) {
        let (sa, sb) = (sparse(&a), sparse(&b));
        let left = sa.mul(&sb).unwrap().transpose();
        let right = sb.transpose().mul(&sa.transpose()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_transpose_products_match_naive((a, b) in product_pair()) {
        // a is m x k, b is k x n
        let (sa, sb) = (sparse(&a), sparse(&b));
        let at = sa.transpose();
        let bt = sb.transpose();

        let atb = at.transpose_mul(&sb).unwrap();
        prop_assert!(no_stored_zeros(&atb));
        prop_assert_eq!(atb.to_dense(), a.matmul(&b).unwrap());

        let abt = sa.mul_transpose(&bt).unwrap();
        prop_assert!(no_stored_zeros(&abt));
        assert_structure(&abt)?;
        prop_assert_eq!(abt.to_dense(), a.matmul(&b).unwrap());
    }

    #[test]
    fn prop_dense_products_match_naive((a, b) in product_pair()) {
        let (sa, sb) = (sparse(&a), sparse(&b));
        let expected = a.matmul(&b).unwrap();
        prop_assert_eq!(sa.mul_dense(&b).unwrap(), expected.clone());
        prop_assert_eq!(sb.dense_mul(&a).unwrap(), expected.clone());
        prop_assert_eq!(sa.transpose().transpose_mul_dense(&b).unwrap(), expected.clone());
        prop_assert_eq!(sb.dense_transpose_mul(&a.transpose()).unwrap(), expected.clone());
        prop_assert_eq!(sa.mul_dense_transpose(&b.transpose()).unwrap(), expected.clone());
        prop_assert_eq!(sb.transpose().dense_mul_transpose(&a).unwrap(), expected);
    }

    #[test]
    fn prop_vector_products_match_naive((a, b) in product_pair()) {
        let sa = sparse(&a);
        let column: Vec<i64> = (0..b.row_count()).map(|k| b[(k, 0)]).collect();
        let expected: Vec<i64> = (0..a.row_count())
            .map(|i| (0..a.column_count()).map(|k| a[(i, k)] * column[k]).sum())
            .collect();

        let dense = sa.mul_vector(&column.clone().into()).unwrap();
        prop_assert_eq!(dense.as_slice(), expected.as_slice());

        let sparse_v = csca::SparseVector::from_dense(&column);
        let product = sa.mul_sparse_vector(&sparse_v).unwrap();
        prop_assert_eq!(product.to_dense(), expected.clone());
        prop_assert!(product.values().iter().all(|&v| v != 0));

        let transposed = sa.transpose();
        let t_dense = transposed.transpose_mul_vector(&column.clone().into()).unwrap();
        prop_assert_eq!(t_dense.as_slice(), expected.as_slice());
        let t_sparse = transposed.transpose_mul_sparse_vector(&sparse_v).unwrap();
        prop_assert_eq!(t_sparse.to_dense(), expected);
    }

    #[test]
    fn prop_mul_shape_law(
        a in dense_matrix(),
        b in dense_matrix(),
    ) {
        let result = sparse(&a).mul(&sparse(&b));
        if a.column_count() == b.row_count() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(
                result,
                Err(CscaError::ShapeMismatch { op: "mul", left: a.shape(), right: b.shape() })
            );
        }
    }
}
