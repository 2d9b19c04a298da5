//! Dense linear algebra over $\mathbb{F}_2$.
//!
//! Vectors are bit-packed into 64-bit limbs and matrices are stored as a list of row vectors. On
//! top of the elementary row and column operations the crate provides the two factorizations that
//! homology computations are built from:
//!
//!  - [`matrix::SmithForm`], a diagonalization $LMR = S$ with $L$ and $R$ invertible, together
//!    with the inverse of $L$;
//!  - [`matrix::RowEchelon`], a reduction $LM = S$ with $S$ in reduced row echelon form.
//!
//! Both solvers follow a fixed pivot search order (see [`matrix::find_pivot`]), so the
//! transformation matrices they return are deterministic.

#![allow(clippy::many_single_char_names)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::redundant_closure_for_method_calls)]

pub(crate) mod limb;
pub mod matrix;
pub mod vector;
