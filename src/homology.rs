//! Homology of a chain complex over $\mathbb{F}_2$ from two consecutive boundary matrices.
//!
//! Given $\partial_k \colon C_k \to C_{k - 1}$ and $\partial_{k + 1} \colon C_{k + 1} \to C_k$,
//! the Smith normal forms $L_1 \partial_k R_1 = S_1$ and $L_2 \partial_{k + 1} R_2 = S_2$ give
//!
//!  - a basis of $Z_k = \ker \partial_k$, the last columns of $R_1$;
//!  - a basis of $B_k = \operatorname{im} \partial_{k + 1}$, the first columns of $L_2^{-1}$;
//!  - a complement of $B_k$, the remaining columns of $L_2^{-1}$, together with the projection
//!    onto it along $B_k$, which uses the matching rows of $L_2$.
//!
//! Projecting the cycles onto the complement and row reducing the result gives one representative
//! for each basis element of $H_k = Z_k / B_k$.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

use f2::matrix::{Matrix, MatrixError, ProductOrder};
use f2::vector::F2Vector;
use serde::Serialize;
use simplicial::{Cell, ChainBasis};

use crate::coset::{image_group, shortest_representatives, CosetLimits};
use crate::error::{HomologyError, Result};

/// Boundary matrices of a chain complex, keyed by the dimension of their source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryMaps {
    maps: BTreeMap<usize, Matrix>,
}

impl BoundaryMaps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dimension: usize, boundary: Matrix) -> Option<Matrix> {
        self.maps.insert(dimension, boundary)
    }

    pub fn get(&self, dimension: usize) -> Option<&Matrix> {
        self.maps.get(&dimension)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = usize> + '_ {
        self.maps.keys().copied()
    }

    /// The largest $k$ for which both $\partial_k$ and $\partial_{k + 1}$ could be present.
    fn max_homology_dimension(&self) -> usize {
        self.maps
            .keys()
            .next_back()
            .map_or(0, |&top| top.saturating_sub(1))
    }

    fn require(&self, dimension: usize) -> Result<&Matrix> {
        self.get(dimension)
            .ok_or(HomologyError::MissingBoundaryMap { dimension })
    }
}

impl FromIterator<(usize, Matrix)> for BoundaryMaps {
    fn from_iter<I: IntoIterator<Item = (usize, Matrix)>>(iter: I) -> Self {
        Self {
            maps: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomologyOptions {
    /// Replace each representative by all the minimal weight cycles in its class.
    pub shortest: bool,
    pub coset_limits: CosetLimits,
}

/// Generators of a homology group. `Basis` holds one representative per basis element, while
/// `CosetMap` holds, for the `i`th basis element, every shortest cycle in its class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HomologyGenerators<T> {
    Basis(Vec<T>),
    CosetMap(BTreeMap<usize, Vec<T>>),
}

impl<T> HomologyGenerators<T> {
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(T) -> Result<U, E>,
    ) -> Result<HomologyGenerators<U>, E> {
        Ok(match self {
            Self::Basis(basis) => {
                HomologyGenerators::Basis(basis.into_iter().map(f).collect::<Result<_, E>>()?)
            }
            Self::CosetMap(map) => {
                let mut result = BTreeMap::new();
                for (class, cycles) in map {
                    let cycles: Vec<U> =
                        cycles.into_iter().map(&mut f).collect::<Result<_, E>>()?;
                    result.insert(class, cycles);
                }
                HomologyGenerators::CosetMap(result)
            }
        })
    }

    /// The number of homology classes the generators describe.
    pub fn num_classes(&self) -> usize {
        match self {
            Self::Basis(basis) => basis.len(),
            Self::CosetMap(map) => map.len(),
        }
    }
}

/// The homology group $H_k$ of a chain complex, together with the ranks it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomologyGroup {
    pub dimension: usize,
    /// The rank of $\partial_k$.
    pub boundary_rank: usize,
    /// The rank of $\partial_{k + 1}$.
    pub next_boundary_rank: usize,
    /// The dimension of the cycles $Z_k$.
    pub nullity: usize,
    pub betti: usize,
    /// The dimension of the complement of $B_k$ in $C_k$.
    pub cokernel_dimension: usize,
    /// One cycle for each basis element of $H_k$, in reduced row echelon form.
    pub representatives: Vec<F2Vector>,
    /// A basis of the boundaries $B_k$.
    #[serde(skip)]
    pub boundaries: Vec<F2Vector>,
}

impl HomologyGroup {
    /// Computes $H_k$ from $\partial_k$ (`boundary`) and $\partial_{k + 1}$ (`next_boundary`).
    #[tracing::instrument(skip(boundary, next_boundary), fields(chains = boundary.columns()))]
    pub fn compute(boundary: Matrix, next_boundary: Matrix, dimension: usize) -> Result<Self> {
        if next_boundary.rows() != boundary.columns() {
            return Err(MatrixError::DimensionMismatch {
                operation: "compose",
                left: boundary.dimensions(),
                right: next_boundary.dimensions(),
            }
            .into());
        }
        if !boundary.multiply(&next_boundary)?.is_zero() {
            return Err(HomologyError::NotAChainComplex { dimension });
        }

        let chains = boundary.columns();
        let snf = boundary.smith_normal_form();
        let next_snf = next_boundary.smith_normal_form();

        let nullity = snf.nullity();
        let betti = nullity - next_snf.rank;
        let cokernel_dimension = chains - next_snf.rank;
        tracing::debug!(rank = snf.rank, "rank of d_{dimension}");
        tracing::debug!(rank = next_snf.rank, "rank of d_{}", dimension + 1);
        tracing::debug!(nullity, betti, cokernel_dimension);

        let projection = Matrix::product(
            [
                &next_snf.cokernel(),
                &next_snf.cokernel_projection(),
                &snf.kernel(),
            ],
            ProductOrder::Forward,
        )?
        .transpose();
        let representatives = projection.row_echelon_form().into_nonzero_rows();
        tracing::debug!(
            representatives = %itertools::join(&representatives, " "),
            "homology basis"
        );

        Ok(Self {
            dimension,
            boundary_rank: snf.rank,
            next_boundary_rank: next_snf.rank,
            nullity,
            betti,
            cokernel_dimension,
            representatives,
            boundaries: next_snf.image().transpose().into_vec(),
        })
    }

    /// Computes $H_k$ from the boundary maps in dimensions `dimension` and `dimension + 1`.
    ///
    /// A `dimension` outside `1..=top - 1`, where `top` is the largest dimension with a boundary
    /// map, is an [`HomologyError::InvalidDimension`]. A gap below `top` is reported as
    /// [`HomologyError::MissingBoundaryMap`].
    pub fn from_boundary_maps(maps: &BoundaryMaps, dimension: usize) -> Result<Self> {
        if dimension == 0 || dimension > maps.max_homology_dimension() {
            return Err(HomologyError::InvalidDimension {
                dimension,
                max: maps.max_homology_dimension(),
            });
        }
        let boundary = maps.require(dimension)?;
        let next_boundary = maps.require(dimension + 1)?;
        Self::compute(boundary.clone(), next_boundary.clone(), dimension)
    }

    /// The generators of the group, as chains. With `options.shortest`, every class is described
    /// by all of its minimal weight cycles, unless there are no boundaries to add.
    pub fn generators(&self, options: &HomologyOptions) -> Result<HomologyGenerators<F2Vector>> {
        if !options.shortest {
            return Ok(HomologyGenerators::Basis(self.representatives.clone()));
        }
        let Some(group) = image_group(&self.boundaries, &options.coset_limits)? else {
            return Ok(HomologyGenerators::Basis(self.representatives.clone()));
        };
        Ok(HomologyGenerators::CosetMap(
            self.representatives
                .iter()
                .map(|representative| shortest_representatives(representative, &group))
                .enumerate()
                .collect(),
        ))
    }
}

impl fmt::Display for HomologyGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let k = self.dimension;
        writeln!(f, "H_{k}: betti number {}", self.betti)?;
        writeln!(
            f,
            "  rank d_{k} = {}, rank d_{} = {}, nullity d_{k} = {}",
            self.boundary_rank,
            k + 1,
            self.next_boundary_rank,
            self.nullity
        )
    }
}

/// Computes generators of $H_k$ as chains.
pub fn compute_homology_basis(
    maps: &BoundaryMaps,
    dimension: usize,
    options: &HomologyOptions,
) -> Result<HomologyGenerators<F2Vector>> {
    HomologyGroup::from_boundary_maps(maps, dimension)?.generators(options)
}

/// Computes generators of $H_k$ as lists of cells, where `basis` indexes the columns of
/// $\partial_k$.
pub fn compute_homology_basis_with_cells<V>(
    maps: &BoundaryMaps,
    dimension: usize,
    basis: &ChainBasis<V>,
    options: &HomologyOptions,
) -> Result<HomologyGenerators<Vec<Cell<V>>>>
where
    V: Clone + Eq + Hash + fmt::Display,
{
    let generators = compute_homology_basis(maps, dimension, options)?;
    Ok(generators.try_map(|chain| basis.interpret(&chain))?)
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use simplicial::ComplexError;

    use super::*;

    fn matrix(rows: &[&[u32]]) -> Matrix {
        Matrix::from_vec(&rows.iter().map(|row| row.to_vec()).collect::<Vec<_>>())
    }

    /// The boundary maps of a triangle on the vertices 1, 2, 3. The edges are ordered (1, 2),
    /// (1, 3), (2, 3).
    fn triangle(filled: bool) -> BoundaryMaps {
        let next = if filled {
            matrix(&[&[1], &[1], &[1]])
        } else {
            Matrix::new(3, 0)
        };
        [
            (1, matrix(&[&[1, 1, 0], &[1, 0, 1], &[0, 1, 1]])),
            (2, next),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn hollow_triangle() {
        let group = HomologyGroup::from_boundary_maps(&triangle(false), 1).unwrap();
        assert_eq!(group.boundary_rank, 2);
        assert_eq!(group.next_boundary_rank, 0);
        assert_eq!(group.betti, 1);
        assert_eq!(group.cokernel_dimension, 3);
        assert_eq!(group.representatives, vec![F2Vector::from_slice(&[1, 1, 1])]);
        expect![[r#"
            H_1: betti number 1
              rank d_1 = 2, rank d_2 = 0, nullity d_1 = 1
        "#]]
        .assert_eq(&group.to_string());
    }

    #[test]
    fn filled_triangle() {
        let group = HomologyGroup::from_boundary_maps(&triangle(true), 1).unwrap();
        assert_eq!(group.next_boundary_rank, 1);
        assert_eq!(group.betti, 0);
        assert!(group.representatives.is_empty());
        assert_eq!(group.boundaries, vec![F2Vector::from_slice(&[1, 1, 1])]);

        let options = HomologyOptions {
            shortest: true,
            ..Default::default()
        };
        assert_eq!(
            group.generators(&options).unwrap(),
            HomologyGenerators::CosetMap(BTreeMap::new())
        );
    }

    #[test]
    fn shortest_without_boundaries() {
        let options = HomologyOptions {
            shortest: true,
            ..Default::default()
        };
        let generators = compute_homology_basis(&triangle(false), 1, &options).unwrap();
        assert_eq!(
            generators,
            HomologyGenerators::Basis(vec![F2Vector::from_slice(&[1, 1, 1])])
        );
    }

    #[test]
    fn interpret_cells() {
        let edges = ChainBasis::new(1, [[1, 2], [1, 3], [2, 3]].map(Cell::new)).unwrap();
        let generators =
            compute_homology_basis_with_cells(&triangle(false), 1, &edges, &Default::default())
                .unwrap();
        expect![[r#"
            Basis(
                [
                    [
                        (1, 2),
                        (1, 3),
                        (2, 3),
                    ],
                ],
            )
        "#]]
        .assert_debug_eq(&generators);

        let too_short = ChainBasis::new(1, [[1, 2], [1, 3]].map(Cell::new)).unwrap();
        let err =
            compute_homology_basis_with_cells(&triangle(false), 1, &too_short, &Default::default())
                .unwrap_err();
        assert!(matches!(
            err,
            HomologyError::Complex(ComplexError::ArgumentMismatch {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn invalid_dimensions() {
        let maps = triangle(false);
        assert!(matches!(
            compute_homology_basis(&maps, 0, &Default::default()),
            Err(HomologyError::InvalidDimension {
                dimension: 0,
                max: 1
            })
        ));
        assert!(matches!(
            compute_homology_basis(&maps, 2, &Default::default()),
            Err(HomologyError::InvalidDimension {
                dimension: 2,
                max: 1
            })
        ));
        assert!(matches!(
            compute_homology_basis(&BoundaryMaps::new(), 1, &Default::default()),
            Err(HomologyError::InvalidDimension {
                dimension: 1,
                max: 0
            })
        ));
    }

    #[test]
    fn missing_map_below_top() {
        let maps: BoundaryMaps = [
            (1, matrix(&[&[1, 1, 0], &[1, 0, 1], &[0, 1, 1]])),
            (3, Matrix::new(0, 0)),
        ]
        .into_iter()
        .collect();
        let err = compute_homology_basis(&maps, 1, &Default::default()).unwrap_err();
        assert!(matches!(err, HomologyError::MissingBoundaryMap { dimension: 2 }));
        assert_eq!(err.to_string(), "no boundary map in dimension 2");
    }

    #[test]
    fn incompatible_maps() {
        let maps: BoundaryMaps = [
            (1, matrix(&[&[1, 1, 0], &[1, 0, 1], &[0, 1, 1]])),
            (2, matrix(&[&[1], &[1]])),
        ]
        .into_iter()
        .collect();
        let err = compute_homology_basis(&maps, 1, &Default::default()).unwrap_err();
        assert_eq!(err.to_string(), "cannot compose a 3x3 matrix with a 2x1 matrix");

        let maps: BoundaryMaps = [
            (1, matrix(&[&[1, 1, 0], &[1, 0, 1], &[0, 1, 1]])),
            (2, matrix(&[&[1], &[0], &[0]])),
        ]
        .into_iter()
        .collect();
        assert!(matches!(
            compute_homology_basis(&maps, 1, &Default::default()),
            Err(HomologyError::NotAChainComplex { dimension: 1 })
        ));
    }

    #[test]
    fn generators_map() {
        let generators =
            HomologyGenerators::CosetMap(BTreeMap::from([(0, vec![1, 2]), (1, vec![3])]));
        assert_eq!(generators.num_classes(), 2);
        let doubled = generators
            .try_map(|x| if x < 3 { Ok(2 * x) } else { Err(x) })
            .unwrap_err();
        assert_eq!(doubled, 3);
    }
}
