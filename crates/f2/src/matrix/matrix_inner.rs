use std::fmt;
use std::ops::Range;

use serde::{Serialize, Serializer};

use super::MatrixError;
use crate::vector::F2Vector;

/// A matrix! In particular, a dense matrix with values in $\mathbb{F}_2$. Rows are stored as
/// bit-packed [`F2Vector`]s, so row operations are much cheaper than column operations.
///
/// A matrix knows its number of columns even when it has no rows. Boundary maps out of or into the
/// zero chain group are perfectly good matrices and every operation below accepts them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    vectors: Vec<F2Vector>,
}

/// The order in which [`Matrix::product`] multiplies its factors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ProductOrder {
    /// `a_0 a_1 ... a_n`
    #[default]
    Forward,
    /// `a_n ... a_1 a_0`
    Reverse,
}

impl Matrix {
    /// Produces a new matrix with the specified number of rows and columns, initialized to the 0
    /// matrix.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            vectors: (0..rows).map(|_| F2Vector::new(columns)).collect(),
        }
    }

    pub fn identity(dim: usize) -> Self {
        let mut result = Self::new(dim, dim);
        for (i, row) in result.vectors.iter_mut().enumerate() {
            row.add_basis_element(i);
        }
        result
    }

    /// Produces a matrix from a list of rows, each of which must have length `columns`.
    pub fn from_rows(vectors: Vec<F2Vector>, columns: usize) -> Self {
        for row in &vectors {
            assert_eq!(row.len(), columns, "row has the wrong number of columns");
        }
        Self {
            rows: vectors.len(),
            columns,
            vectors,
        }
    }

    /// Produces a Matrix from an `&[Vec<u32>]` object. Entries are reduced mod 2. If the number of
    /// rows is 0, the number of columns is also assumed to be zero.
    ///
    /// # Example
    /// ```
    /// # use f2::matrix::Matrix;
    /// let input = [vec![1, 0, 1],
    ///              vec![0, 1, 1]];
    ///
    /// let m = Matrix::from_vec(&input);
    /// assert_eq!(m.rows(), 2);
    /// assert_eq!(m.columns(), 3);
    /// assert_eq!(m.to_vec(), input);
    /// ```
    pub fn from_vec(input: &[Vec<u32>]) -> Self {
        let columns = input.first().map_or(0, Vec::len);
        Self::from_rows(
            input.iter().map(|row| F2Vector::from_slice(row)).collect(),
            columns,
        )
    }

    pub fn to_vec(&self) -> Vec<Vec<u32>> {
        self.vectors.iter().map(F2Vector::to_vec).collect()
    }

    pub fn into_vec(self) -> Vec<F2Vector> {
        self.vectors
    }

    /// Gets the number of rows in the matrix.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Gets the number of columns in the matrix.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn entry(&self, row: usize, column: usize) -> u32 {
        self.vectors[row].entry(column)
    }

    pub fn set_entry(&mut self, row: usize, column: usize, value: u32) {
        self.vectors[row].set_entry(column, value);
    }

    pub fn row(&self, row: usize) -> &F2Vector {
        &self.vectors[row]
    }

    pub fn iter(&self) -> std::slice::Iter<F2Vector> {
        self.vectors.iter()
    }

    /// The column `column` as a vector of length `self.rows()`.
    pub fn column(&self, column: usize) -> F2Vector {
        let mut result = F2Vector::new(self.rows);
        for (i, row) in self.vectors.iter().enumerate() {
            if row.entry(column) != 0 {
                result.add_basis_element(i);
            }
        }
        result
    }

    /// Number of nonzero entries. For a matrix in Smith normal form, this is the rank.
    pub fn count_ones(&self) -> usize {
        self.vectors.iter().map(F2Vector::weight).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.vectors.iter().all(F2Vector::is_zero)
    }

    pub fn is_identity(&self) -> bool {
        self.rows == self.columns
            && self
                .vectors
                .iter()
                .enumerate()
                .all(|(i, row)| row.weight() == 1 && row.entry(i) == 1)
    }

    pub fn transpose(&self) -> Self {
        let mut result = Self::new(self.columns, self.rows);
        for (i, row) in self.vectors.iter().enumerate() {
            for j in row.iter_nonzero() {
                result.vectors[j].add_basis_element(i);
            }
        }
        result
    }

    /// Copies out the submatrix consisting of the rows in `rows` and the columns in `columns`.
    ///
    /// # Example
    /// ```
    /// # use f2::matrix::Matrix;
    /// let m = Matrix::from_vec(&[vec![1, 0, 1],
    ///                            vec![0, 1, 1],
    ///                            vec![1, 1, 0]]);
    ///
    /// assert_eq!(m.submatrix(1..3, 1..3).to_vec(), vec![vec![1, 1], vec![1, 0]]);
    /// assert_eq!(m.submatrix(0..3, 3..3).dimensions(), (3, 0));
    /// ```
    pub fn submatrix(&self, rows: Range<usize>, columns: Range<usize>) -> Self {
        assert!(rows.end <= self.rows && columns.end <= self.columns);
        let width = columns.len();
        Self::from_rows(
            self.vectors[rows]
                .iter()
                .map(|row| row.slice(columns.clone()))
                .collect(),
            width,
        )
    }
}

/// Elementary operations. Each of these is its own inverse.
impl Matrix {
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.vectors.swap(i, j);
    }

    pub fn swap_columns(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for row in &mut self.vectors {
            row.swap_entries(i, j);
        }
    }

    /// Replaces row `target` with the sum of rows `target` and `source`.
    pub fn add_row(&mut self, target: usize, source: usize) {
        debug_assert_ne!(target, source);
        let (target, source) = if target < source {
            let (head, tail) = self.vectors.split_at_mut(source);
            (&mut head[target], &tail[0])
        } else {
            let (head, tail) = self.vectors.split_at_mut(target);
            (&mut tail[0], &head[source])
        };
        target.add(source);
    }

    /// Replaces column `target` with the sum of columns `target` and `source`.
    pub fn add_column(&mut self, target: usize, source: usize) {
        debug_assert_ne!(target, source);
        for row in &mut self.vectors {
            if row.entry(source) != 0 {
                row.add_basis_element(target);
            }
        }
    }
}

/// Arithmetic.
impl Matrix {
    /// Computes `self * rhs`.
    ///
    /// # Example
    /// ```
    /// # use f2::matrix::{Matrix, MatrixError};
    /// let a = Matrix::from_vec(&[vec![1, 1], vec![0, 1]]);
    /// let b = Matrix::from_vec(&[vec![1, 0, 1], vec![1, 1, 0]]);
    ///
    /// assert_eq!(a.multiply(&b).unwrap().to_vec(), vec![vec![0, 1, 1], vec![1, 1, 0]]);
    /// assert!(matches!(b.multiply(&a), Err(MatrixError::DimensionMismatch { .. })));
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.columns != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                operation: "multiply",
                left: self.dimensions(),
                right: rhs.dimensions(),
            });
        }
        let mut result = Self::new(self.rows, rhs.columns);
        for (i, row) in self.vectors.iter().enumerate() {
            for k in row.iter_nonzero() {
                result.vectors[i].add(&rhs.vectors[k]);
            }
        }
        Ok(result)
    }

    /// The entrywise sum of a list of matrices of the same shape.
    pub fn sum<'a>(terms: impl IntoIterator<Item = &'a Self>) -> Result<Self, MatrixError> {
        let mut terms = terms.into_iter();
        let mut result = terms
            .next()
            .ok_or(MatrixError::EmptyInput { operation: "sum" })?
            .clone();
        for term in terms {
            if term.dimensions() != result.dimensions() {
                return Err(MatrixError::DimensionMismatch {
                    operation: "sum",
                    left: result.dimensions(),
                    right: term.dimensions(),
                });
            }
            result += term;
        }
        Ok(result)
    }

    /// Multiplies a non-empty sequence of matrices in the given order.
    ///
    /// # Example
    /// ```
    /// # use f2::matrix::{Matrix, ProductOrder};
    /// let a = Matrix::from_vec(&[vec![1, 1]]);
    /// let b = Matrix::from_vec(&[vec![1], vec![0]]);
    ///
    /// assert_eq!(Matrix::product([&a, &b], ProductOrder::Forward).unwrap().dimensions(), (1, 1));
    /// assert_eq!(Matrix::product([&a, &b], ProductOrder::Reverse).unwrap().dimensions(), (2, 2));
    /// ```
    pub fn product<'a>(
        factors: impl IntoIterator<Item = &'a Self>,
        order: ProductOrder,
    ) -> Result<Self, MatrixError> {
        let mut factors: Vec<&Self> = factors.into_iter().collect();
        if order == ProductOrder::Reverse {
            factors.reverse();
        }
        let (first, rest) = factors
            .split_first()
            .ok_or(MatrixError::EmptyInput {
                operation: "multiply",
            })?;
        rest.iter()
            .try_fold((*first).clone(), |acc, factor| acc.multiply(factor))
    }
}

impl std::ops::Index<usize> for Matrix {
    type Output = F2Vector;

    fn index(&self, i: usize) -> &Self::Output {
        &self.vectors[i]
    }
}

impl std::ops::Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Matrix {
        match self.multiply(rhs) {
            Ok(result) => result,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        assert_eq!(self.dimensions(), rhs.dimensions());

        for (row, other) in self.vectors.iter_mut().zip(&rhs.vectors) {
            row.add(other);
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let mut it = self.iter();
        if let Some(x) = it.next() {
            write!(f, "[\n    {x}")?;
        } else {
            write!(f, "[]")?;
            return Ok(());
        }
        for x in it {
            write!(f, ",\n    {x}")?;
        }
        write!(f, "\n]")?;
        Ok(())
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}x{} ", self.rows, self.columns)?;
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.vectors.serialize(serializer)
    }
}
