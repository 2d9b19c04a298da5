//! Abstract simplicial complexes generated by the hyperedges of a hypergraph.
//!
//! A hyperedge with $n$ vertices generates the $(n - 1)$-simplex on those vertices together with
//! all of its faces. This crate enumerates the $k$-cells of the resulting complex as a
//! [`ChainBasis`] and assembles the boundary matrices $\partial_k \colon C_k \to C_{k - 1}$ over
//! $\mathbb{F}_2$ between consecutive bases.

mod boundary;
mod cell;
mod chain_basis;
mod error;
mod hypergraph;
mod vertex;

pub use boundary::boundary_map;
pub use cell::Cell;
pub use chain_basis::ChainBasis;
pub use error::ComplexError;
pub use hypergraph::Hypergraph;
pub use vertex::Vertex;
