use std::fmt;

use f2::vector::F2Vector;
use rustc_hash::FxHashMap as HashMap;

use crate::{Cell, ComplexError};

/// An ordered basis of the chain group $C_k$. The position of a cell in the basis is its index as
/// a row or column of a boundary matrix.
#[derive(Clone)]
pub struct ChainBasis<V> {
    dimension: usize,
    cells: Vec<Cell<V>>,
    index: HashMap<Cell<V>, usize>,
}

impl<V> ChainBasis<V>
where
    V: Clone + Eq + std::hash::Hash + fmt::Display,
{
    /// Creates a basis out of `cells`, in the order given. Repeated cells are only kept the first
    /// time they occur.
    pub fn new(
        dimension: usize,
        cells: impl IntoIterator<Item = Cell<V>>,
    ) -> Result<Self, ComplexError> {
        let mut result = Self {
            dimension,
            cells: Vec::new(),
            index: HashMap::default(),
        };
        for cell in cells {
            if cell.dimension() != dimension {
                return Err(ComplexError::CellDimension {
                    cell: cell.to_string(),
                    expected: dimension,
                });
            }
            if result.index.contains_key(&cell) {
                continue;
            }
            result.index.insert(cell.clone(), result.cells.len());
            result.cells.push(cell);
        }
        Ok(result)
    }

    /// Creates a basis out of distinct cells of dimension `dimension`.
    pub(crate) fn from_distinct(dimension: usize, cells: Vec<Cell<V>>) -> Self {
        let index = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.clone(), i))
            .collect();
        Self {
            dimension,
            cells,
            index,
        }
    }

    pub fn index_of(&self, cell: &Cell<V>) -> Option<usize> {
        self.index.get(cell).copied()
    }

    /// The cells whose coordinate in `chain` is 1.
    pub fn interpret(&self, chain: &F2Vector) -> Result<Vec<Cell<V>>, ComplexError> {
        if chain.len() != self.len() {
            return Err(ComplexError::ArgumentMismatch {
                expected: self.len(),
                found: chain.len(),
            });
        }
        Ok(chain
            .iter_nonzero()
            .map(|i| self.cells[i].clone())
            .collect())
    }

    /// The chain that is the sum of `cells`. A cell listed twice cancels out.
    pub fn chain<'a>(
        &self,
        cells: impl IntoIterator<Item = &'a Cell<V>>,
    ) -> Result<F2Vector, ComplexError>
    where
        V: 'a,
    {
        let mut result = F2Vector::new(self.len());
        for cell in cells {
            let i = self
                .index_of(cell)
                .ok_or_else(|| ComplexError::UnknownCell {
                    cell: cell.to_string(),
                })?;
            result.add_basis_element(i);
        }
        Ok(result)
    }
}

impl<V> ChainBasis<V> {
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell<V>] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<Cell<V>> {
        self.cells.iter()
    }
}

impl<'a, V> IntoIterator for &'a ChainBasis<V> {
    type IntoIter = std::slice::Iter<'a, Cell<V>>;
    type Item = &'a Cell<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Display> fmt::Debug for ChainBasis<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "C_{} ", self.dimension)?;
        f.debug_list().entries(&self.cells).finish()
    }
}
