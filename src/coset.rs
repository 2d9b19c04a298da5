//! Brute force search for short representatives of homology classes.
//!
//! A homology class is a coset $z + B_k$ of the boundary group. Enumerating the coset means
//! enumerating $B_k$, which has $2^r$ elements where $r$ is the rank of $\partial_{k + 1}$. This
//! is only feasible for small complexes, so the enumeration is opt-in and refused above
//! [`CosetLimits::max_boundary_rank`].

use f2::vector::F2Vector;

use crate::error::{HomologyError, Result};

pub const DEFAULT_MAX_BOUNDARY_RANK: usize = 20;

/// Ranks above this are never enumerated, whatever [`CosetLimits::max_boundary_rank`] says.
pub const HARD_MAX_BOUNDARY_RANK: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosetLimits {
    /// The largest rank of boundary group that will be enumerated. Values above
    /// [`HARD_MAX_BOUNDARY_RANK`] are clamped to it.
    pub max_boundary_rank: usize,
}

impl CosetLimits {
    pub fn effective_max_boundary_rank(&self) -> usize {
        std::cmp::min(self.max_boundary_rank, HARD_MAX_BOUNDARY_RANK)
    }
}

impl Default for CosetLimits {
    fn default() -> Self {
        Self {
            max_boundary_rank: DEFAULT_MAX_BOUNDARY_RANK,
        }
    }
}

/// Lists every element of the span of `basis`, sorted by weight. Elements of the same weight are
/// in the order they are generated.
///
/// Returns `None` if `basis` spans the zero group.
#[tracing::instrument(skip_all, fields(rank = basis.len()))]
pub fn image_group(basis: &[F2Vector], limits: &CosetLimits) -> Result<Option<Vec<F2Vector>>> {
    if basis.iter().all(F2Vector::is_zero) {
        return Ok(None);
    }
    let rank = basis.len();
    let limit = limits.effective_max_boundary_rank();
    let too_large = HomologyError::ResourceLimitExceeded { rank, limit };
    if rank > limit {
        return Err(too_large);
    }
    tracing::warn!(
        rank,
        "enumerating the boundary group, which is only practical for small complexes"
    );

    // Gray code order, so consecutive elements differ by one basis vector.
    let mut current = F2Vector::new(basis[0].len());
    let size = 1usize << rank;
    let mut group = Vec::new();
    if group.try_reserve_exact(size).is_err() {
        return Err(too_large);
    }
    group.push(current.clone());
    for i in 1..size {
        current.add(&basis[i.trailing_zeros() as usize]);
        group.push(current.clone());
    }
    group.sort_by_key(F2Vector::weight);
    Ok(Some(group))
}

/// The coset `representative + group`, sorted by weight and then by entries.
pub fn coset(representative: &F2Vector, group: &[F2Vector]) -> Vec<F2Vector> {
    let mut coset: Vec<F2Vector> = group
        .iter()
        .map(|boundary| {
            let mut cycle = boundary.clone();
            cycle.add(representative);
            cycle
        })
        .collect();
    coset.sort_by(|a, b| a.weight().cmp(&b.weight()).then_with(|| a.cmp(b)));
    coset
}

/// The elements of minimal weight in the coset `representative + group`.
pub fn shortest_representatives(representative: &F2Vector, group: &[F2Vector]) -> Vec<F2Vector> {
    let mut coset = coset(representative, group);
    if let Some(min) = coset.first().map(F2Vector::weight) {
        coset.retain(|cycle| cycle.weight() == min);
    }
    coset
}
