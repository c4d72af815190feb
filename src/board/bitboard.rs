//! Bitboard implementation for occupancy masks

use super::{Pos, TOTAL_CELLS};

/// Mask with one bit per board cell
const FULL_MASK: u128 = (1u128 << TOTAL_CELLS) - 1;

/// Bitboard representation of one side's marks.
/// A single u128 covers the 100 cells (bit index = row * 10 + col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: u128,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u128 << pos.to_index();
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Union of two bitboards
    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard { bits: self.bits | other.bits }
    }

    /// Cells not set in this bitboard
    #[inline]
    pub fn complement(self) -> Bitboard {
        Bitboard { bits: !self.bits & FULL_MASK }
    }

    /// Iterate over set bit positions, lowest index (row-major) first
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u128,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;

        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}
