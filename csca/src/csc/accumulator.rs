//! Dense scratch accumulator for column-at-a-time products
//!
//! One accumulator is allocated per product and reused for every result
//! column. Only touched slots are reset between columns, so the per-column
//! cost follows the number of multiply-adds rather than the row count.

use csca_core::MatrixElement;

pub(crate) struct ColumnAccumulator<T> {
    sums: Vec<T>,
    touched: Vec<bool>,
    rows: Vec<usize>,
}

impl<T: MatrixElement> ColumnAccumulator<T> {
    pub(crate) fn new(nrows: usize) -> Self {
        Self {
            sums: vec![T::zero(); nrows],
            touched: vec![false; nrows],
            rows: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn accumulate(&mut self, row: usize, value: T) {
        if self.touched[row] {
            self.sums[row] = self.sums[row] + value;
        } else {
            self.touched[row] = true;
            self.sums[row] = value;
            self.rows.push(row);
        }
    }

    /// Emit the non-zero sums in ascending row order and reset the touched
    /// slots for the next column
    pub(crate) fn drain_into<F: FnMut(usize, T)>(&mut self, mut emit: F) {
        self.rows.sort_unstable();
        for &row in &self.rows {
            let sum = self.sums[row];
            if !sum.is_zero() {
                emit(row, sum);
            }
            self.touched[row] = false;
            self.sums[row] = T::zero();
        }
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_sorted_and_skips_cancelled() {
        let mut acc = ColumnAccumulator::new(5);
        acc.accumulate(3, 2.0);
        acc.accumulate(0, 1.0);
        acc.accumulate(3, -2.0);
        acc.accumulate(4, 0.5);

        let mut out = Vec::new();
        acc.drain_into(|row, value| out.push((row, value)));
        assert_eq!(out, vec![(0, 1.0), (4, 0.5)]);

        // Slots are clean for the next column
        acc.accumulate(3, 1.5);
        let mut out = Vec::new();
        acc.drain_into(|row, value| out.push((row, value)));
        assert_eq!(out, vec![(3, 1.5)]);
    }
}
