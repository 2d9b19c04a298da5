use proptest::prelude::*;

use super::Matrix;
use crate::vector::F2Vector;

pub const MAX_ROWS: usize = 40;
pub const MAX_COLUMNS: usize = 40;

#[derive(Debug, Clone)]
pub struct MatrixArbParams {
    pub rows: BoxedStrategy<usize>,
    pub columns: BoxedStrategy<usize>,
}

impl Default for MatrixArbParams {
    fn default() -> Self {
        Self {
            rows: (0..=MAX_ROWS).boxed(),
            columns: (0..=MAX_COLUMNS).boxed(),
        }
    }
}

impl Arbitrary for Matrix {
    type Parameters = MatrixArbParams;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        (args.rows, args.columns)
            .prop_flat_map(|(rows, columns)| {
                let row = proptest::collection::vec(0..=1u32, columns);
                (Just(columns), proptest::collection::vec(row, rows))
            })
            .prop_map(|(columns, rows)| {
                let vectors = rows.iter().map(|row| F2Vector::from_slice(row)).collect();
                Self::from_rows(vectors, columns)
            })
            .boxed()
    }
}

impl Matrix {
    /// Generates a matrix in reduced row echelon form, together with its pivot columns.
    pub fn arbitrary_rref_with(args: MatrixArbParams) -> impl Strategy<Value = (Self, Vec<usize>)> {
        (args.rows, args.columns)
            .prop_flat_map(|(rows, columns)| {
                let pivots = proptest::sample::subsequence(
                    (0..columns).collect::<Vec<_>>(),
                    0..=std::cmp::min(rows, columns),
                );
                let noise = proptest::collection::vec(
                    proptest::collection::vec(0..=1u32, columns),
                    rows,
                );
                (Just((rows, columns)), pivots, noise)
            })
            .prop_map(|((rows, columns), pivots, noise)| {
                let mut m = Self::new(rows, columns);
                for (row, &pivot) in pivots.iter().enumerate() {
                    m.set_entry(row, pivot, 1);
                    for column in pivot + 1..columns {
                        if !pivots.contains(&column) {
                            m.set_entry(row, column, noise[row][column]);
                        }
                    }
                }
                (m, pivots)
            })
    }

    /// Generates a matrix in Smith normal form: some number of leading ones on the diagonal and
    /// zeros elsewhere.
    pub fn arbitrary_smith_form_with(args: MatrixArbParams) -> impl Strategy<Value = Self> {
        (args.rows, args.columns)
            .prop_flat_map(|(rows, columns)| {
                (Just((rows, columns)), 0..=std::cmp::min(rows, columns))
            })
            .prop_map(|((rows, columns), rank)| {
                let mut m = Self::new(rows, columns);
                for i in 0..rank {
                    m.set_entry(i, i, 1);
                }
                m
            })
    }
}
