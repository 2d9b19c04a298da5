use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use serde::Deserialize;

use crate::{Cell, ChainBasis, ComplexError, Vertex};

/// A hypergraph, viewed as the simplicial complex generated by its hyperedges.
///
/// The JSON description is one of
///  - `{"edges": {"e1": [1, 2, 3], "e2": [3, 4]}}`
///  - `{"e1": [1, 2, 3], "e2": [3, 4]}`
///  - `[[1, 2, 3], [3, 4]]`
///
/// where vertices are integers or strings. Unnamed edges are named by their position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "HypergraphRepr")]
pub struct Hypergraph {
    edges: BTreeMap<String, Vec<Vertex>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EdgeList {
    Named(BTreeMap<String, Vec<Vertex>>),
    Listed(Vec<Vec<Vertex>>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HypergraphRepr {
    Wrapped { edges: EdgeList },
    Bare(EdgeList),
}

impl From<EdgeList> for Hypergraph {
    fn from(edges: EdgeList) -> Self {
        match edges {
            EdgeList::Named(edges) => Self::from_named_edges(edges),
            EdgeList::Listed(edges) => Self::from_edges(edges),
        }
    }
}

impl From<HypergraphRepr> for Hypergraph {
    fn from(repr: HypergraphRepr) -> Self {
        match repr {
            HypergraphRepr::Wrapped { edges } | HypergraphRepr::Bare(edges) => edges.into(),
        }
    }
}

impl Hypergraph {
    pub fn from_named_edges<I, S, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, E)>,
        S: Into<String>,
        E: IntoIterator,
        E::Item: Into<Vertex>,
    {
        Self {
            edges: edges
                .into_iter()
                .map(|(name, edge)| {
                    let vertices = edge
                        .into_iter()
                        .map(Into::<Vertex>::into)
                        .sorted()
                        .dedup()
                        .collect();
                    (name.into(), vertices)
                })
                .collect(),
        }
    }

    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: IntoIterator,
        E::Item: Into<Vertex>,
    {
        Self::from_named_edges(
            edges
                .into_iter()
                .enumerate()
                .map(|(i, edge)| (i.to_string(), edge)),
        )
    }

    pub fn from_json(value: serde_json::Value) -> Result<Self, ComplexError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ComplexError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &[Vertex])> {
        self.edges
            .iter()
            .map(|(name, vertices)| (name.as_str(), vertices.as_slice()))
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> BTreeSet<&Vertex> {
        self.edges.values().flatten().collect()
    }

    /// The number of vertices of the largest hyperedge. The generated complex has cells of
    /// dimension up to one less than this.
    pub fn max_edge_size(&self) -> usize {
        self.edges.values().map(Vec::len).max().unwrap_or(0)
    }

    /// The $k$-cells of the generated complex, in sorted order. These are the $(k + 1)$-element
    /// subsets of the hyperedges.
    #[tracing::instrument(skip(self))]
    pub fn k_chain_basis(&self, k: usize) -> ChainBasis<Vertex> {
        let cells: BTreeSet<Cell<Vertex>> = self
            .edges
            .values()
            .filter(|edge| edge.len() > k)
            .flat_map(|edge| edge.iter().cloned().combinations(k + 1))
            .map(Cell::new)
            .collect();
        tracing::debug!(cells = cells.len(), "enumerated cells");
        ChainBasis::from_distinct(k, cells.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use itertools::Itertools;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(r#"{"edges": {"a": [1, 2, 3], "b": [3, 4]}}"#)]
    #[case(r#"{"a": [3, 2, 1], "b": [4, 3]}"#)]
    #[case(r#"[[1, 2, 3], [3, 4, 4]]"#)]
    fn parse_formats(#[case] json: &str) {
        let hypergraph = Hypergraph::from_json_str(json).unwrap();
        assert_eq!(hypergraph.num_edges(), 2);
        assert_eq!(hypergraph.max_edge_size(), 3);
        assert_eq!(hypergraph.vertices().len(), 4);
        assert_eq!(
            hypergraph.k_chain_basis(1).len(),
            4,
            "edges of {json}: (1, 2), (1, 3), (2, 3), (3, 4)"
        );
    }

    #[test]
    fn named_vertices() {
        let hypergraph =
            Hypergraph::from_json(serde_json::json!({ "e": ["b", "a", 7], "f": ["a", "c"] }))
                .unwrap();
        let basis = hypergraph.k_chain_basis(1);
        expect!["(7, a) (7, b) (a, b) (a, c)"]
            .assert_eq(&basis.iter().map(|c| c.to_string()).join(" "));
    }

    #[test]
    fn chain_bases() {
        let hypergraph = Hypergraph::from_edges([vec![1i64, 2, 3, 4], vec![4, 5]]);
        assert_eq!(hypergraph.k_chain_basis(0).len(), 5);
        assert_eq!(hypergraph.k_chain_basis(1).len(), 7);
        assert_eq!(hypergraph.k_chain_basis(2).len(), 4);
        assert_eq!(hypergraph.k_chain_basis(3).len(), 1);
        assert!(hypergraph.k_chain_basis(4).is_empty());
        assert_eq!(hypergraph.k_chain_basis(3).dimension(), 3);
    }

    #[test]
    fn invalid_json() {
        let err = Hypergraph::from_json_str(r#"{"edges": 3}"#).unwrap_err();
        assert!(matches!(err, ComplexError::InvalidHypergraph(_)));
        assert!(Hypergraph::from_json_str(r#"[[1, 2.5]]"#).is_err());
    }
}
