use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("cannot {operation} a {}x{} matrix with a {}x{} matrix", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("cannot {operation} an empty list of matrices")]
    EmptyInput { operation: &'static str },
}
