use std::fmt;
use std::hash::Hash;

use f2::matrix::Matrix;

use crate::{ChainBasis, ComplexError};

/// The matrix of the boundary map $\partial \colon C_k \to C_{k - 1}$, where `upper` is a basis of
/// $C_k$ and `lower` a basis of $C_{k - 1}$. Entry $(i, j)$ is 1 exactly when the `i`th cell of
/// `lower` is a face of the `j`th cell of `upper`.
///
/// Every face of a cell of `upper` must be in `lower`, since otherwise the bases do not come from
/// a simplicial complex.
///
/// # Example
/// ```
/// # use simplicial::{boundary_map, Cell, ChainBasis};
/// let vertices = ChainBasis::new(0, [1, 2, 3].map(|v| Cell::new([v]))).unwrap();
/// let edges = ChainBasis::new(1, [[1, 2], [2, 3]].map(Cell::new)).unwrap();
///
/// let boundary = boundary_map(&vertices, &edges).unwrap();
/// assert_eq!(boundary.to_vec(), vec![vec![1, 0], vec![1, 1], vec![0, 1]]);
/// ```
#[tracing::instrument(skip_all, fields(lower = lower.len(), upper = upper.len()))]
pub fn boundary_map<V>(lower: &ChainBasis<V>, upper: &ChainBasis<V>) -> Result<Matrix, ComplexError>
where
    V: Clone + Eq + Hash + fmt::Display,
{
    if lower.dimension() + 1 != upper.dimension() {
        return Err(ComplexError::IncompatibleBases {
            lower: lower.dimension(),
            upper: upper.dimension(),
        });
    }

    let mut result = Matrix::new(lower.len(), upper.len());
    for (column, cell) in upper.iter().enumerate() {
        for face in cell.faces() {
            let row = lower
                .index_of(&face)
                .ok_or_else(|| ComplexError::MalformedComplex {
                    face: face.to_string(),
                    cell: cell.to_string(),
                })?;
            result.set_entry(row, column, 1);
        }
    }
    Ok(result)
}
