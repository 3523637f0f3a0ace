//! Packed storage for one color's pieces.
//!
//! Under the hood a [`Bitboard`] is a `u64` with one bit per space. By convention,
//! the MSB is the upper-left of the board, and bits proceed in row-major order.

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Dark: E4 and D5.
pub const DARK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for Light: D4 and E5.
pub const LIGHT_START: Bitboard = Bitboard(0x0000001008000000);

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if every bit set in `other` is also set here.
    #[inline]
    pub fn covers(self, other: Bitboard) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bitmask = Bitboard::from(1u64 << (self.remaining - 1));
        let bit = !(self.bitboard & bitmask).is_empty();
        self.remaining -= 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bits {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_bitboards_are_disjoint() {
        assert!((DARK_START & LIGHT_START).is_empty());
        assert_eq!(DARK_START.count_occupied(), 2);
        assert_eq!(LIGHT_START.count_occupied(), 2);
        assert_eq!((DARK_START | LIGHT_START).count_empty(), 60);
    }

    #[test]
    fn bits_run_row_major() {
        let bits: Vec<bool> = Bitboard::from(1u64 << 63).into_iter().collect();
        assert_eq!(bits.len(), NUM_SPACES);
        assert!(bits[0]);
        assert!(bits[1..].iter().all(|&bit| !bit));
    }

    #[test]
    fn covers_subsets_only() {
        let both = DARK_START | LIGHT_START;
        assert!(both.covers(DARK_START));
        assert!(!DARK_START.covers(both));
        assert!(DARK_START.covers(Bitboard::default()));
    }

    #[test]
    fn display_marks_set_bits() {
        let rendered = DARK_START.to_string();
        assert!(rendered.starts_with("   A B C D E F G H"));
        assert!(rendered.contains(" 4 . . . . # . . . "));
        assert!(rendered.contains(" 5 . . . # . . . . "));
    }
}
