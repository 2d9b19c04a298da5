use std::fmt;

use serde::{Deserialize, Serialize};

/// A vertex of a hypergraph, as it appears in its JSON description. Integer vertices order before
/// named ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Vertex {
    Index(i64),
    Name(String),
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<i64> for Vertex {
    fn from(i: i64) -> Self {
        Self::Index(i)
    }
}

impl From<&str> for Vertex {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for Vertex {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}
