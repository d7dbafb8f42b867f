//! Core types for the Coin Flip Gym simulations.
//!
//! This crate provides the shared data types used across the simulation:
//! single coin flips, flip patterns, the pattern catalogue, and the
//! `Winnings` balance newtype used by the betting strategy.

use derive_more::{Add, AddAssign, From, Into, Neg, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Constants
// =============================================================================

/// Pattern length used by the puzzle set (all 5-flip head/tail patterns).
pub const PUZZLE_PATTERN_LEN: usize = 5;

/// Inline storage capacity for patterns. Puzzle patterns are 5 flips;
/// longer patterns spill to the heap.
const PATTERN_INLINE: usize = 8;

// =============================================================================
// Flip
// =============================================================================

/// A single coin-flip outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flip {
    Heads,
    Tails,
}

impl Flip {
    /// The one-character symbol used in pattern notation.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Flip::Heads => 'H',
            Flip::Tails => 'T',
        }
    }

    /// Parse a single pattern symbol.
    #[inline]
    pub fn from_symbol(symbol: char) -> Option<Flip> {
        match symbol {
            'H' => Some(Flip::Heads),
            'T' => Some(Flip::Tails),
            _ => None,
        }
    }
}

impl fmt::Display for Flip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// =============================================================================
// Pattern
// =============================================================================

/// Error raised when constructing a [`Pattern`] from invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Patterns must contain at least one flip.
    Empty,
    /// The input contained a character other than 'H' or 'T'.
    InvalidSymbol(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Empty => write!(f, "pattern cannot be empty"),
            PatternError::InvalidSymbol(c) => {
                write!(f, "invalid flip symbol '{}' (expected 'H' or 'T')", c)
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// A fixed, ordered sequence of flips to search for in a flip stream.
///
/// Patterns are non-empty by construction. The puzzle set uses length 5,
/// but any length >= 1 is supported.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern(SmallVec<[Flip; PATTERN_INLINE]>);

impl Pattern {
    /// Create a pattern from a flip slice.
    pub fn new(flips: &[Flip]) -> Result<Self, PatternError> {
        if flips.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Pattern(SmallVec::from_slice(flips)))
    }

    /// Number of flips in the pattern. Always >= 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for slice-like ergonomics.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The pattern's flips in order.
    #[inline]
    pub fn flips(&self) -> &[Flip] {
        &self.0
    }

    /// Iterate over the pattern's flips.
    pub fn iter(&self) -> impl Iterator<Item = Flip> + '_ {
        self.0.iter().copied()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }
        let flips = s
            .chars()
            .map(|c| Flip::from_symbol(c).ok_or(PatternError::InvalidSymbol(c)))
            .collect::<Result<SmallVec<_>, _>>()?;
        Ok(Pattern(flips))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flip in &self.0 {
            write!(f, "{}", flip.symbol())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({})", self)
    }
}

// =============================================================================
// Pattern catalogue
// =============================================================================

/// All `2^len` head/tail patterns of the given length, in H-before-T
/// lexicographic order (`HHHHH` first and `TTTTT` last for length 5).
///
/// # Panics
/// Panics if `len` is 0 or large enough to overflow the catalogue size.
pub fn pattern_catalogue(len: usize) -> Vec<Pattern> {
    assert!(len >= 1, "catalogue patterns must be non-empty");
    assert!(len < 32, "catalogue would not fit in memory");
    (0..1u64 << len)
        .map(|bits| {
            let flips = (0..len)
                .map(|i| {
                    if (bits >> (len - 1 - i)) & 1 == 0 {
                        Flip::Heads
                    } else {
                        Flip::Tails
                    }
                })
                .collect::<SmallVec<_>>();
            Pattern(flips)
        })
        .collect()
}

// =============================================================================
// Winnings
// =============================================================================

/// A betting balance in whole units (newtype for type safety).
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
)]
pub struct Winnings(pub i64);

impl Winnings {
    pub const ZERO: Winnings = Winnings(0);

    /// Raw value.
    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }

    /// Check if the balance is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Debug for Winnings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Winnings({})", self.0)
    }
}

impl fmt::Display for Winnings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
