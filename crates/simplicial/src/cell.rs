use std::fmt;

use itertools::Itertools;
use serde::Serialize;

/// A $k$-cell of a simplicial complex, i.e. a set of $k + 1$ vertices. The vertices are kept
/// sorted, so two cells are equal exactly when they have the same vertices.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Cell<V> {
    vertices: Vec<V>,
}

impl<V: Ord> Cell<V> {
    /// Creates the cell spanned by `vertices`. Repeated vertices are collapsed.
    ///
    /// # Panics
    /// Panics if `vertices` is empty.
    pub fn new(vertices: impl IntoIterator<Item = V>) -> Self {
        let mut vertices: Vec<V> = vertices.into_iter().collect();
        assert!(!vertices.is_empty(), "a cell needs at least one vertex");
        vertices.sort();
        vertices.dedup();
        Self { vertices }
    }
}

impl<V> Cell<V> {
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }
}

impl<V: Clone> Cell<V> {
    /// The codimension one faces of the cell. The `i`th face omits the `i`th vertex. A vertex has
    /// no faces.
    pub fn faces(&self) -> impl Iterator<Item = Self> + '_ {
        let n = if self.vertices.len() > 1 {
            self.vertices.len()
        } else {
            0
        };
        (0..n).map(move |omitted| Self {
            vertices: self
                .vertices
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != omitted)
                .map(|(_, v)| v.clone())
                .collect(),
        })
    }
}

impl<V: fmt::Display> fmt::Display for Cell<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.vertices.iter().format(", "))
    }
}

impl<V: fmt::Display> fmt::Debug for Cell<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
