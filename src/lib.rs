//! Mod 2 homology of the simplicial complexes generated by hypergraphs.
//!
//! The main entry points are [`compute_hypergraph_homology`], which works directly with a
//! [`Hypergraph`](simplicial::Hypergraph), and [`compute_homology_basis`], which works with any
//! chain complex given by its [`BoundaryMaps`]. Both return generators for the homology group,
//! optionally replaced by the shortest cycles in each class (see [`coset`]).

#![allow(clippy::many_single_char_names)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::redundant_closure_for_method_calls)]

pub mod coset;
pub mod error;
pub mod homology;
pub mod hypergraph;
pub mod utils;

pub use error::HomologyError;
pub use homology::{
    compute_homology_basis, compute_homology_basis_with_cells, BoundaryMaps, HomologyGenerators,
    HomologyGroup, HomologyOptions,
};
pub use hypergraph::{compute_hypergraph_homology, valid_dimensions, HypergraphHomology};
