use std::fmt;
use std::ops::RangeInclusive;

use itertools::Itertools;
use serde::Serialize;
use simplicial::{boundary_map, Cell, Hypergraph, Vertex};

use crate::error::{HomologyError, Result};
use crate::homology::{HomologyGenerators, HomologyGroup, HomologyOptions};

/// The homology of the simplicial complex generated by a hypergraph in one dimension, with the
/// generators written as lists of cells.
#[derive(Debug, Clone, Serialize)]
pub struct HypergraphHomology {
    #[serde(flatten)]
    pub group: HomologyGroup,
    pub generators: HomologyGenerators<Vec<Cell<Vertex>>>,
}

/// The dimensions $k$ in which [`compute_hypergraph_homology`] can compute $H_k$. These are
/// $1 \leq k < n$, where $n$ is the size of the largest hyperedge.
pub fn valid_dimensions(hypergraph: &Hypergraph) -> RangeInclusive<usize> {
    1..=hypergraph.max_edge_size().saturating_sub(1)
}

/// Computes $H_k$ of the simplicial complex generated by `hypergraph`.
#[tracing::instrument(skip(hypergraph, options), fields(edges = hypergraph.num_edges()))]
pub fn compute_hypergraph_homology(
    hypergraph: &Hypergraph,
    dimension: usize,
    options: &HomologyOptions,
) -> Result<HypergraphHomology> {
    let valid = valid_dimensions(hypergraph);
    if !valid.contains(&dimension) {
        return Err(HomologyError::InvalidDimension {
            dimension,
            max: *valid.end(),
        });
    }

    let lower = hypergraph.k_chain_basis(dimension - 1);
    let chains = hypergraph.k_chain_basis(dimension);
    let upper = hypergraph.k_chain_basis(dimension + 1);

    let group = HomologyGroup::compute(
        boundary_map(&lower, &chains)?,
        boundary_map(&chains, &upper)?,
        dimension,
    )?;
    let generators = group
        .generators(options)?
        .try_map(|chain| chains.interpret(&chain))?;

    Ok(HypergraphHomology { group, generators })
}

fn format_chain(cells: &[Cell<Vertex>]) -> String {
    if cells.is_empty() {
        String::from("0")
    } else {
        cells.iter().join(" + ")
    }
}

impl fmt::Display for HypergraphHomology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.group)?;
        match &self.generators {
            HomologyGenerators::Basis(basis) => {
                for (i, cells) in basis.iter().enumerate() {
                    writeln!(f, "  generator {i}: {}", format_chain(cells))?;
                }
            }
            HomologyGenerators::CosetMap(map) => {
                for (i, cycles) in map {
                    writeln!(f, "  class {i}, {} shortest cycles:", cycles.len())?;
                    for cells in cycles {
                        writeln!(f, "    {}", format_chain(cells))?;
                    }
                }
            }
        }
        Ok(())
    }
}
