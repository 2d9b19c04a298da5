use super::{find_pivot, Matrix, PivotStep};
use crate::vector::F2Vector;

/// The reduced row echelon form of a matrix, together with the row operations that produce it.
///
/// If `M` is the input matrix, then `left * M == reduced` and `left_inverse * left` is the
/// identity. The `i`th nonzero row of `reduced` has its leading one in column `pivots[i]`, and
/// that column is zero in every other row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEchelon {
    pub left: Matrix,
    pub reduced: Matrix,
    pub left_inverse: Matrix,
    pub pivots: Vec<usize>,
}

impl RowEchelon {
    pub fn compute(matrix: Matrix) -> Self {
        Self::compute_traced(matrix, |_| {})
    }

    /// Row reduces `matrix`, calling `trace` after each pivot. No column operations are performed,
    /// so `column_additions` is always zero.
    #[tracing::instrument(
        skip_all,
        fields(rows = matrix.rows(), columns = matrix.columns(), rank = tracing::field::Empty)
    )]
    pub fn compute_traced(matrix: Matrix, mut trace: impl FnMut(PivotStep)) -> Self {
        let rows = matrix.rows();
        let mut reduced = matrix;
        let mut left = Matrix::identity(rows);
        let mut left_inverse = Matrix::identity(rows);
        let mut pivots = Vec::new();

        let mut cursor = 0;
        let mut column_start = 0;
        while let Some((pivot_row, pivot_column)) = find_pivot(&reduced, cursor, column_start) {
            let rows_swapped = pivot_row > cursor;
            if rows_swapped {
                reduced.swap_rows(cursor, pivot_row);
                left.swap_rows(cursor, pivot_row);
                left_inverse.swap_columns(cursor, pivot_row);
            }

            let targets: Vec<usize> = (0..rows)
                .filter(|&row| row != cursor && reduced.entry(row, pivot_column) != 0)
                .collect();
            for &row in &targets {
                reduced.add_row(row, cursor);
                left.add_row(row, cursor);
                left_inverse.add_column(cursor, row);
            }

            let step = PivotStep {
                step: cursor,
                pivot: (pivot_row, pivot_column),
                rows_swapped,
                columns_swapped: false,
                row_additions: targets.len(),
                column_additions: 0,
            };
            tracing::trace!(?step, "row reduction pivot");
            trace(step);

            pivots.push(pivot_column);
            cursor += 1;
            column_start = pivot_column + 1;
        }
        tracing::Span::current().record("rank", pivots.len());

        Self {
            left,
            reduced,
            left_inverse,
            pivots,
        }
    }

    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// The nonzero rows of the reduced matrix, in order.
    pub fn into_nonzero_rows(self) -> Vec<F2Vector> {
        let rank = self.rank();
        self.reduced.into_vec().into_iter().take(rank).collect()
    }
}

impl Matrix {
    /// Computes the reduced row echelon form of `self`. See [`RowEchelon`].
    ///
    /// # Example
    /// ```
    /// # use f2::matrix::Matrix;
    /// let m = Matrix::from_vec(&[vec![0, 1, 1],
    ///                            vec![1, 1, 0],
    ///                            vec![1, 0, 1]]);
    ///
    /// let rref = m.row_echelon_form();
    /// assert_eq!(rref.pivots, vec![0, 1]);
    /// assert_eq!(rref.reduced.to_vec(), vec![vec![1, 0, 1], vec![0, 1, 1], vec![0, 0, 0]]);
    /// ```
    pub fn row_echelon_form(self) -> RowEchelon {
        RowEchelon::compute(self)
    }
}
