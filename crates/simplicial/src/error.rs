use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComplexError {
    #[error("face {face} of cell {cell} is missing from the chain basis")]
    MalformedComplex { face: String, cell: String },
    #[error("expected a chain of length {expected}, found one of length {found}")]
    ArgumentMismatch { expected: usize, found: usize },
    #[error("cell {cell} does not have dimension {expected}")]
    CellDimension { cell: String, expected: usize },
    #[error("cell {cell} is not in the chain basis")]
    UnknownCell { cell: String },
    #[error("cannot build a boundary map from dimension {upper} to dimension {lower}")]
    IncompatibleBases { lower: usize, upper: usize },
    #[error("invalid hypergraph")]
    InvalidHypergraph(#[from] serde_json::Error),
}
