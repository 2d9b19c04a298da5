use super::Matrix;

/// Finds the first nonzero entry of the submatrix `m[row_start.., column_start..]`.
///
/// Columns are scanned in increasing order, and within a column the rows are scanned in increasing
/// order. The solvers rely on this order: it decides which pivot is used when there are several
/// candidates, and hence which transformation matrices come out.
///
/// # Example
/// ```
/// # use f2::matrix::{find_pivot, Matrix};
/// let m = Matrix::from_vec(&[vec![0, 0, 1],
///                            vec![0, 1, 0],
///                            vec![0, 1, 1]]);
///
/// assert_eq!(find_pivot(&m, 0, 0), Some((1, 1)));
/// assert_eq!(find_pivot(&m, 2, 2), Some((2, 2)));
/// assert_eq!(find_pivot(&m, 0, 3), None);
/// ```
pub fn find_pivot(m: &Matrix, row_start: usize, column_start: usize) -> Option<(usize, usize)> {
    (column_start..m.columns())
        .flat_map(|column| (row_start..m.rows()).map(move |row| (row, column)))
        .find(|&(row, column)| m.entry(row, column) != 0)
}
