use std::cmp::Ordering;
use std::ops::Range;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::limb::{self, Limb, BITS_PER_LIMB};

/// A vector over $\mathbb{F}_2$, packed 64 entries to a limb.
///
/// Bits past `len` in the last limb are always zero. All the operations below preserve this, so
/// equality, hashing and [`F2Vector::weight`] can work limb by limb.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct F2Vector {
    len: usize,
    limbs: Vec<Limb>,
}

impl F2Vector {
    /// The zero vector of length `len`.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            limbs: vec![0; limb::number(len)],
        }
    }

    /// Builds a vector from a slice of entries. Entries are reduced mod 2.
    ///
    /// # Example
    /// ```
    /// # use f2::vector::F2Vector;
    /// let v = F2Vector::from_slice(&[1, 0, 3, 2]);
    /// assert_eq!(v.to_vec(), vec![1, 0, 1, 0]);
    /// ```
    pub fn from_slice(slice: &[u32]) -> Self {
        let mut result = Self::new(slice.len());
        for (i, &x) in slice.iter().enumerate() {
            if x % 2 == 1 {
                result.add_basis_element(i);
            }
        }
        result
    }

    /// The vector of length `len` whose only nonzero entry is at `index`.
    pub fn basis_element(len: usize, index: usize) -> Self {
        let mut result = Self::new(len);
        result.add_basis_element(index);
        result
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn entry(&self, index: usize) -> u32 {
        assert!(
            index < self.len,
            "index {index} out of range for vector of length {}",
            self.len
        );
        let pair = limb::limb_bit_index_pair(index);
        ((self.limbs[pair.limb] >> pair.bit_index) & 1) as u32
    }

    pub fn set_entry(&mut self, index: usize, value: u32) {
        assert!(
            index < self.len,
            "index {index} out of range for vector of length {}",
            self.len
        );
        let pair = limb::limb_bit_index_pair(index);
        let limb = &mut self.limbs[pair.limb];
        *limb &= !((1 as Limb) << pair.bit_index);
        *limb |= ((value % 2) as Limb) << pair.bit_index;
    }

    /// Adds the `index`th basis vector, i.e. flips the entry at `index`.
    pub fn add_basis_element(&mut self, index: usize) {
        assert!(
            index < self.len,
            "index {index} out of range for vector of length {}",
            self.len
        );
        let pair = limb::limb_bit_index_pair(index);
        self.limbs[pair.limb] ^= (1 as Limb) << pair.bit_index;
    }

    /// Exchanges the entries at positions `i` and `j`.
    pub fn swap_entries(&mut self, i: usize, j: usize) {
        let (a, b) = (self.entry(i), self.entry(j));
        if a != b {
            self.add_basis_element(i);
            self.add_basis_element(j);
        }
    }

    /// Adds `other` to `self`. Over $\mathbb{F}_2$ this is a limbwise xor.
    pub fn add(&mut self, other: &Self) {
        assert_eq!(self.len, other.len, "cannot add vectors of different lengths");
        for (x, y) in self.limbs.iter_mut().zip(&other.limbs) {
            *x ^= y;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    /// The Hamming weight, i.e. the number of nonzero entries.
    pub fn weight(&self) -> usize {
        self.limbs.iter().map(|limb| limb.count_ones() as usize).sum()
    }

    pub fn first_nonzero(&self) -> Option<usize> {
        self.iter_nonzero().next()
    }

    /// Copies out the entries in `range` as a new vector.
    pub fn slice(&self, range: Range<usize>) -> Self {
        assert!(range.start <= range.end && range.end <= self.len);
        let mut result = Self::new(range.len());
        for i in limb::range(range.start, range.end) {
            for j in limb::ones(self.limbs[i], i * BITS_PER_LIMB) {
                if range.contains(&j) {
                    result.add_basis_element(j - range.start);
                }
            }
        }
        result
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len).map(move |i| self.entry(i))
    }

    /// Iterate over the positions of the nonzero entries, in increasing order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = usize> + '_ {
        self.limbs
            .iter()
            .enumerate()
            .flat_map(|(i, &limb)| limb::ones(limb, i * BITS_PER_LIMB))
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}

impl From<&F2Vector> for Vec<u32> {
    fn from(v: &F2Vector) -> Self {
        v.to_vec()
    }
}

impl From<&[u32]> for F2Vector {
    fn from(slice: &[u32]) -> Self {
        Self::from_slice(slice)
    }
}

/// Vectors are ordered by length, then lexicographically by entries.
impl Ord for F2Vector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len
            .cmp(&other.len)
            .then_with(|| self.iter().cmp(other.iter()))
    }
}

impl PartialOrd for F2Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for F2Vector {
    /// # Example
    /// ```
    /// # use f2::vector::F2Vector;
    /// let v = F2Vector::from_slice(&[0, 1, 1]);
    /// assert_eq!(&format!("{v}"), "[0, 1, 1]");
    /// assert_eq!(&format!("{v:#}"), "011");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if f.alternate() {
            for v in self.iter() {
                write!(f, "{v}")?;
            }
            Ok(())
        } else {
            write!(f, "[{}]", self.iter().format(", "))
        }
    }
}

impl std::fmt::Debug for F2Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl Serialize for F2Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Vec::<u32>::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for F2Vector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<u32>::deserialize(deserializer)?;
        if let Some(x) = entries.iter().find(|&&x| x > 1) {
            return Err(serde::de::Error::custom(format!(
                "entry {x} is not an element of F_2"
            )));
        }
        Ok(Self::from_slice(&entries))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn arb_entries() -> impl Strategy<Value = Vec<u32>> {
        proptest::collection::vec(0..2u32, 0..300)
    }

    fn arb_entries_pair() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
        (0usize..300).prop_flat_map(|len| {
            (
                proptest::collection::vec(0..2u32, len),
                proptest::collection::vec(0..2u32, len),
            )
        })
    }

    #[rstest]
    #[case(&[], "[]")]
    #[case(&[1], "[1]")]
    #[case(&[1, 0, 1, 1], "[1, 0, 1, 1]")]
    fn display(#[case] entries: &[u32], #[case] expected: &str) {
        assert_eq!(format!("{}", F2Vector::from_slice(entries)), expected);
    }

    #[test]
    fn entries_across_limbs() {
        let mut v = F2Vector::new(130);
        v.set_entry(0, 1);
        v.set_entry(63, 1);
        v.set_entry(64, 1);
        v.add_basis_element(129);
        assert_eq!(v.iter_nonzero().collect::<Vec<_>>(), vec![0, 63, 64, 129]);
        assert_eq!(v.weight(), 4);
        v.set_entry(63, 0);
        assert_eq!(v.entry(63), 0);
        assert_eq!(v.first_nonzero(), Some(0));
    }

    #[test]
    fn swap_entries() {
        let mut v = F2Vector::from_slice(&[1, 0, 0, 1]);
        v.swap_entries(0, 1);
        assert_eq!(v.to_vec(), vec![0, 1, 0, 1]);
        v.swap_entries(1, 3);
        assert_eq!(v.to_vec(), vec![0, 1, 0, 1]);
    }

    #[test]
    fn ordering() {
        let a = F2Vector::from_slice(&[0, 1, 1]);
        let b = F2Vector::from_slice(&[1, 0, 0]);
        let c = F2Vector::from_slice(&[0, 0, 0, 0]);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn serde_round_trip() {
        let v = F2Vector::from_slice(&[1, 0, 1]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1,0,1]");
        let w: F2Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, w);
        assert!(serde_json::from_str::<F2Vector>("[1,2]").is_err());
    }

    proptest! {
        #[test]
        fn test_add((v_arr, w_arr) in arb_entries_pair()) {
            let mut v = F2Vector::from_slice(&v_arr);
            let w = F2Vector::from_slice(&w_arr);
            v.add(&w);
            let expected: Vec<u32> = v_arr.iter().zip(&w_arr).map(|(x, y)| (x + y) % 2).collect();
            prop_assert_eq!(v.to_vec(), expected);
        }

        #[test]
        fn test_weight_and_nonzero(v_arr in arb_entries()) {
            let v = F2Vector::from_slice(&v_arr);
            let nonzero: Vec<usize> = (0..v_arr.len()).filter(|&i| v_arr[i] == 1).collect();
            prop_assert_eq!(v.weight(), nonzero.len());
            prop_assert_eq!(v.iter_nonzero().collect::<Vec<_>>(), nonzero);
            prop_assert_eq!(v.is_zero(), v_arr.iter().all(|&x| x == 0));
        }

        #[test]
        fn test_slice(v_arr in arb_entries(), a in 0usize..300, b in 0usize..300) {
            let (start, end) = (a.min(b).min(v_arr.len()), a.max(b).min(v_arr.len()));
            let v = F2Vector::from_slice(&v_arr);
            prop_assert_eq!(v.slice(start..end).to_vec(), v_arr[start..end].to_vec());
        }
    }
}
