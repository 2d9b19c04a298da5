use super::{find_pivot, Matrix};

/// A record of one completed pivot step of [`SmithForm::compute_traced`] or
/// [`RowEchelon::compute_traced`](super::RowEchelon::compute_traced).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PivotStep {
    /// The index of the step, which is also the row the pivot is moved to.
    pub step: usize,
    /// The position of the pivot before it was moved.
    pub pivot: (usize, usize),
    pub rows_swapped: bool,
    pub columns_swapped: bool,
    pub row_additions: usize,
    pub column_additions: usize,
}

/// The Smith normal form of a matrix over $\mathbb{F}_2$.
///
/// If `M` is the input matrix, then `left * M * right == diagonal`, where `diagonal` has `rank`
/// leading ones on its diagonal and zeros everywhere else, and `left_inverse` is the inverse of
/// `left`.
///
/// # Example
/// ```
/// # use f2::matrix::{Matrix, SmithForm};
/// let m = Matrix::from_vec(&[vec![1, 1, 0],
///                            vec![1, 0, 1],
///                            vec![0, 1, 1]]);
///
/// let snf = SmithForm::compute(m.clone());
/// assert_eq!(snf.rank, 2);
/// assert_eq!(&(&snf.left * &m) * &snf.right, snf.diagonal);
/// assert!((&snf.left_inverse * &snf.left).is_identity());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmithForm {
    pub left: Matrix,
    pub right: Matrix,
    pub diagonal: Matrix,
    pub left_inverse: Matrix,
    pub rank: usize,
}

impl SmithForm {
    pub fn compute(matrix: Matrix) -> Self {
        Self::compute_traced(matrix, |_| {})
    }

    /// Computes the Smith normal form, calling `trace` after each pivot step.
    ///
    /// At the start of step `s`, the top left `s x s` block of the working matrix is the identity
    /// and the rest of the first `s` rows and columns is zero. The step moves the first pivot of
    /// the remaining block (in the order of [`find_pivot`]) to `(s, s)` and clears its column and
    /// row. Over $\mathbb{F}_2$ every pivot is already 1, so no scaling is needed.
    #[tracing::instrument(
        skip_all,
        fields(rows = matrix.rows(), columns = matrix.columns(), rank = tracing::field::Empty)
    )]
    pub fn compute_traced(matrix: Matrix, mut trace: impl FnMut(PivotStep)) -> Self {
        let (rows, columns) = matrix.dimensions();
        let mut diagonal = matrix;
        let mut left = Matrix::identity(rows);
        let mut right = Matrix::identity(columns);
        let mut left_inverse = Matrix::identity(rows);

        let mut rank = 0;
        for s in 0..std::cmp::min(rows, columns) {
            let Some((pivot_row, pivot_column)) = find_pivot(&diagonal, s, s) else {
                break;
            };

            let rows_swapped = pivot_row > s;
            if rows_swapped {
                diagonal.swap_rows(s, pivot_row);
                left.swap_rows(s, pivot_row);
                left_inverse.swap_columns(s, pivot_row);
            }
            let columns_swapped = pivot_column > s;
            if columns_swapped {
                diagonal.swap_columns(s, pivot_column);
                right.swap_columns(s, pivot_column);
            }

            let targets: Vec<usize> = (s + 1..rows)
                .filter(|&row| diagonal.entry(row, s) != 0)
                .collect();
            for &row in &targets {
                diagonal.add_row(row, s);
                left.add_row(row, s);
                left_inverse.add_column(s, row);
            }

            let column_targets: Vec<usize> = (s + 1..columns)
                .filter(|&column| diagonal.entry(s, column) != 0)
                .collect();
            for &column in &column_targets {
                diagonal.add_column(column, s);
                right.add_column(column, s);
            }

            rank = s + 1;
            let step = PivotStep {
                step: s,
                pivot: (pivot_row, pivot_column),
                rows_swapped,
                columns_swapped,
                row_additions: targets.len(),
                column_additions: column_targets.len(),
            };
            tracing::trace!(?step, "smith normal form pivot");
            trace(step);
        }
        tracing::Span::current().record("rank", rank);

        Self {
            left,
            right,
            diagonal,
            left_inverse,
            rank,
        }
    }

    /// The dimension of the kernel of the input matrix.
    pub fn nullity(&self) -> usize {
        self.right.columns() - self.rank
    }

    /// The last `nullity` columns of `right`. These form a basis of the kernel of the input
    /// matrix, as columns.
    pub fn kernel(&self) -> Matrix {
        let columns = self.right.columns();
        self.right.submatrix(0..columns, self.rank..columns)
    }

    /// The first `rank` columns of `left_inverse`. These form a basis of the image of the input
    /// matrix, as columns.
    pub fn image(&self) -> Matrix {
        let rows = self.left_inverse.rows();
        self.left_inverse.submatrix(0..rows, 0..self.rank)
    }

    /// The columns of `left_inverse` after the image columns, spanning a complement of the image.
    pub fn cokernel(&self) -> Matrix {
        let rows = self.left_inverse.rows();
        self.left_inverse.submatrix(0..rows, self.rank..rows)
    }

    /// The rows of `left` matching [`SmithForm::cokernel`]. The product `cokernel() *
    /// cokernel_projection()` is the projection onto the cokernel columns along the image.
    pub fn cokernel_projection(&self) -> Matrix {
        let rows = self.left.rows();
        self.left.submatrix(self.rank..rows, 0..rows)
    }
}

impl Matrix {
    /// Computes the Smith normal form of `self`. See [`SmithForm`].
    pub fn smith_normal_form(self) -> SmithForm {
        SmithForm::compute(self)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::matrix::arbitrary::MatrixArbParams;

    fn assert_factorization(m: &Matrix, snf: &SmithForm) {
        assert_eq!(&(&snf.left * m) * &snf.right, snf.diagonal);
        assert!((&snf.left_inverse * &snf.left).is_identity());
        assert!((&snf.left * &snf.left_inverse).is_identity());
    }

    #[test]
    fn triangle_boundary() {
        // Boundary of the three edges of a triangle
        let m = Matrix::from_vec(&[vec![1, 1, 0], vec![1, 0, 1], vec![0, 1, 1]]);
        let snf = m.clone().smith_normal_form();
        assert_factorization(&m, &snf);
        assert_eq!(snf.rank, 2);
        assert_eq!(snf.diagonal.count_ones(), 2);
        assert_eq!(
            snf.diagonal.to_vec(),
            vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]
        );
        assert_eq!(snf.kernel().transpose().to_vec(), vec![vec![1, 1, 1]]);
        assert!((&m * &snf.kernel()).is_zero());
    }

    #[test]
    fn steps_are_traced() {
        let m = Matrix::from_vec(&[vec![0, 1, 1], vec![1, 1, 0]]);
        let mut steps = Vec::new();
        let snf = SmithForm::compute_traced(m, |step| steps.push(step));
        assert_eq!(snf.rank, 2);
        assert_eq!(
            steps,
            vec![
                PivotStep {
                    step: 0,
                    pivot: (1, 0),
                    rows_swapped: true,
                    columns_swapped: false,
                    row_additions: 0,
                    column_additions: 1,
                },
                PivotStep {
                    step: 1,
                    pivot: (1, 1),
                    rows_swapped: false,
                    columns_swapped: false,
                    row_additions: 0,
                    column_additions: 1,
                },
            ]
        );
    }

    #[test]
    fn empty_matrices() {
        for (rows, columns) in [(0, 0), (0, 4), (4, 0)] {
            let snf = Matrix::new(rows, columns).smith_normal_form();
            assert_eq!(snf.rank, 0);
            assert_eq!(snf.nullity(), columns);
            assert!(snf.left.is_identity() && snf.right.is_identity());
            assert_eq!(snf.kernel().dimensions(), (columns, columns));
            assert_eq!(snf.image().dimensions(), (rows, 0));
        }
    }

    proptest! {
        #[test]
        fn factorization(m in any::<Matrix>()) {
            let snf = m.clone().smith_normal_form();
            prop_assert_eq!(&(&snf.left * &m) * &snf.right, snf.diagonal.clone());
            prop_assert!((&snf.left_inverse * &snf.left).is_identity());
            prop_assert_eq!(snf.diagonal.count_ones(), snf.rank);
            prop_assert_eq!(snf.rank + snf.nullity(), m.columns());
            for i in 0..snf.rank {
                prop_assert_eq!(snf.diagonal.entry(i, i), 1);
            }
        }

        #[test]
        fn kernel_and_image(m in any::<Matrix>()) {
            let snf = m.clone().smith_normal_form();
            prop_assert!((&m * &snf.kernel()).is_zero());
            let projection = &snf.cokernel() * &snf.cokernel_projection();
            prop_assert!((&projection * &snf.image()).is_zero());
            prop_assert_eq!(&projection * &projection, projection.clone());
        }

        #[test]
        fn diagonal_is_fixed(d in Matrix::arbitrary_smith_form_with(MatrixArbParams::default())) {
            let snf = d.clone().smith_normal_form();
            prop_assert_eq!(&snf.diagonal, &d);
            prop_assert!(snf.left.is_identity());
            prop_assert!(snf.right.is_identity());
        }
    }
}
