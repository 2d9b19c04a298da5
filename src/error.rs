use f2::matrix::MatrixError;
use simplicial::ComplexError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HomologyError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error(transparent)]
    Complex(#[from] ComplexError),
    #[error("dimension {dimension} is out of range: homology is available in dimensions 1 to {max}")]
    InvalidDimension { dimension: usize, max: usize },
    #[error("no boundary map in dimension {dimension}")]
    MissingBoundaryMap { dimension: usize },
    #[error("the boundary group has rank {rank}, above the enumeration limit of {limit}")]
    ResourceLimitExceeded { rank: usize, limit: usize },
    #[error("the boundary maps in dimensions {dimension} and {} do not compose to zero", .dimension + 1)]
    NotAChainComplex { dimension: usize },
}

pub type Result<T, E = HomologyError> = std::result::Result<T, E>;
