use std::ops::Range;

pub(crate) type Limb = u64;

pub(crate) const BITS_PER_LIMB: usize = Limb::BITS as usize;

/// A struct containing the information required to access a specific entry in an array of `Limb`s.
#[derive(Copy, Clone)]
pub(crate) struct LimbBitIndexPair {
    pub(crate) limb: usize,
    pub(crate) bit_index: usize,
}

pub(crate) const fn limb_bit_index_pair(idx: usize) -> LimbBitIndexPair {
    LimbBitIndexPair {
        limb: idx / BITS_PER_LIMB,
        bit_index: idx % BITS_PER_LIMB,
    }
}

/// Return the number of limbs required to hold `len` entries.
pub(crate) const fn number(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        limb_bit_index_pair(len - 1).limb + 1
    }
}

/// Return the range of limbs that contain the entries in `start..end`.
pub(crate) fn range(start: usize, end: usize) -> Range<usize> {
    let min = limb_bit_index_pair(start).limb;
    let max = if end > 0 {
        limb_bit_index_pair(end - 1).limb + 1
    } else {
        0
    };
    min..max.max(min)
}

/// Iterate over the positions of the set bits of `limb`, shifted by `offset`, in increasing order.
pub(crate) fn ones(mut limb: Limb, offset: usize) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if limb == 0 {
            return None;
        }
        let bit = limb.trailing_zeros() as usize;
        limb &= limb - 1;
        Some(offset + bit)
    })
}
