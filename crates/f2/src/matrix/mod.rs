mod echelon;
mod error;
mod matrix_inner;
mod pivot;
mod smith;

#[cfg(feature = "proptest")]
pub mod arbitrary;

pub use echelon::RowEchelon;
pub use error::MatrixError;
pub use matrix_inner::{Matrix, ProductOrder};
pub use pivot::find_pivot;
pub use smith::{PivotStep, SmithForm};
