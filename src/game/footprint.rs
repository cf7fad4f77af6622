//! [`Footprint`] is a set of board cells packed into a single [u64], one bit
//! per cell. Win groups, the cells owned by one side and the learned shapes
//! are all footprints, so the questions the learner asks ("is this shape
//! inside that one?", "how many cells are still missing?") become a couple of
//! bit operations.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Sub};

use itertools::Itertools;

/// Represents a set of cells and provides common set operations over them.
/// The least significant bit corresponds to the cell with index 0.
///
/// Footprint is a thin wrapper around [u64].
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Footprint {
    bits: u64,
}

impl Footprint {
    /// Constructs a footprint from pre-calculated bits.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Constructs a footprint representing an empty set of cells.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_bits(0)
    }

    /// Returns raw bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Set holding exactly the given cells.
    #[must_use]
    pub fn from_indices(indices: &[usize]) -> Self {
        let mut result = Self::empty();
        for &index in indices {
            result |= Self::from(index);
        }
        result
    }

    /// Returns true if this footprint contains given cell.
    #[must_use]
    pub const fn is_set(self, index: usize) -> bool {
        (self.bits & (1u64 << index)) != 0
    }

    /// Returns true if no cell is in the set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of cells in the set.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.bits.count_ones()
    }

    /// Returns true if every cell of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// An efficient way to iterate over the set cells, in increasing index
    /// order.
    #[must_use]
    pub const fn iter(self) -> FootprintIterator {
        FootprintIterator { bits: self.bits }
    }
}

impl fmt::Debug for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}

impl BitOr for Footprint {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits | rhs.bits)
    }
}

impl BitOrAssign for Footprint {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for Footprint {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits & rhs.bits)
    }
}

impl Sub for Footprint {
    type Output = Self;

    /// [Relative complement], i.e. Result = LHS \ RHS.
    ///
    /// [Relative complement]: https://en.wikipedia.org/wiki/Complement_%28set_theory%29#Relative_complement
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits & !rhs.bits)
    }
}

impl From<usize> for Footprint {
    fn from(index: usize) -> Self {
        debug_assert!(index < 64, "footprint holds cells 0..64, got {index}");
        Self::from_bits(1u64 << index)
    }
}

impl IntoIterator for Footprint {
    type Item = usize;
    type IntoIter = FootprintIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterates over set cells of a [`Footprint`] from the least significant 1
/// bit to the most significant one.
#[derive(Clone, Debug)]
pub struct FootprintIterator {
    bits: u64,
}

impl Iterator for FootprintIterator {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        // Get the LS1B and consume it from the iterator.
        let next_index = self.bits.trailing_zeros();
        self.bits ^= 1 << next_index;
        Some(next_index as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FootprintIterator {}
