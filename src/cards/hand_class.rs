//! Starting-hand classes and their notation.
//!
//! There are 169 strategically distinct starting hands:
//! - 13 pairs (AA, KK, ..., 22)
//! - 78 suited hands (AKs, AQs, ..., 32s)
//! - 78 offsuit hands (AKo, AQo, ..., 32o)
//!
//! The canonical notation (`AA`, `AKs`, `72o`) puts the higher rank first and
//! is the key into the theory tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::card::{Card, HoleCards, Rank};
use crate::error::{Result, TrainerError};

/// Number of starting-hand classes.
pub const NUM_HAND_CLASSES: usize = 169;

/// Shape of a starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandShape {
    PocketPair,
    Suited,
    Offsuit,
}

/// One of the 169 starting-hand classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandClass {
    /// Higher (or equal) rank.
    pub high: Rank,
    /// Lower (or equal) rank.
    pub low: Rank,
    /// Whether suited. Always false for pairs.
    pub suited: bool,
}

impl HandClass {
    /// Create a class, ordering the ranks higher first.
    pub fn new(r1: Rank, r2: Rank, suited: bool) -> Self {
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        Self {
            high,
            low,
            suited: suited && high != low,
        }
    }

    /// Class of a pair of hole cards.
    pub fn of(hole_cards: &HoleCards) -> Self {
        Self::new(
            hole_cards.card1.rank(),
            hole_cards.card2.rank(),
            hole_cards.is_suited(),
        )
    }

    /// Get hand class from index (0-168).
    /// Pairs: 0-12 (22-AA), suited: 13-90, offsuit: 91-168.
    pub fn from_index(index: u8) -> Option<Self> {
        let rank = |i: u8| Rank::ALL[i as usize];
        match index {
            0..=12 => Some(Self::new(rank(index), rank(index), false)),
            13..=90 => {
                let (r1, r2) = decode_triangular(index - 13);
                Some(Self::new(rank(r1), rank(r2), true))
            }
            91..=168 => {
                let (r1, r2) = decode_triangular(index - 91);
                Some(Self::new(rank(r1), rank(r2), false))
            }
            _ => None,
        }
    }

    /// Get the hand class index (0-168).
    pub fn index(&self) -> u8 {
        let r1 = self.high.index() as u8;
        let r2 = self.low.index() as u8;
        if r1 == r2 {
            r1
        } else if self.suited {
            13 + encode_triangular(r1, r2)
        } else {
            91 + encode_triangular(r1, r2)
        }
    }

    /// Iterate all 169 classes in index order.
    pub fn all() -> impl Iterator<Item = HandClass> {
        (0..NUM_HAND_CLASSES as u8).filter_map(Self::from_index)
    }

    /// Check if this class is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Shape of the class.
    pub fn shape(&self) -> HandShape {
        if self.is_pair() {
            HandShape::PocketPair
        } else if self.suited {
            HandShape::Suited
        } else {
            HandShape::Offsuit
        }
    }

    /// Number of card combinations for this class.
    pub fn num_combos(&self) -> u8 {
        match self.shape() {
            HandShape::PocketPair => 6, // C(4,2)
            HandShape::Suited => 4,
            HandShape::Offsuit => 12,
        }
    }

    /// Parse canonical notation: higher rank first, uppercase rank symbols,
    /// no suffix for pairs, lowercase `s`/`o` otherwise.
    pub fn from_notation(notation: &str) -> Result<Self> {
        let invalid = || TrainerError::InvalidNotation(format!("starting hand: {notation:?}"));
        let chars: Vec<char> = notation.chars().collect();

        let canonical_rank = |c: char| {
            if c.is_ascii_lowercase() {
                None
            } else {
                Rank::from_symbol(c)
            }
        };

        let (r1, r2) = match chars.as_slice() {
            [a, b] | [a, b, _] => (
                canonical_rank(*a).ok_or_else(invalid)?,
                canonical_rank(*b).ok_or_else(invalid)?,
            ),
            _ => return Err(invalid()),
        };
        if r1 < r2 {
            return Err(invalid());
        }

        match (r1 == r2, chars.get(2)) {
            (true, None) => Ok(Self::new(r1, r2, false)),
            (false, Some('s')) => Ok(Self::new(r1, r2, true)),
            (false, Some('o')) => Ok(Self::new(r1, r2, false)),
            _ => Err(invalid()),
        }
    }
}

impl FromStr for HandClass {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_notation(s)
    }
}

impl fmt::Display for HandClass {
    /// Canonical notation, e.g. "AKs", "QQ", "72o".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)?;
        match self.shape() {
            HandShape::PocketPair => Ok(()),
            HandShape::Suited => write!(f, "s"),
            HandShape::Offsuit => write!(f, "o"),
        }
    }
}

/// Canonical starting-hand notation for exactly two cards.
///
/// ```
/// use poker_trainer_core::{get_hand_notation, parse_cards};
///
/// let cards = parse_cards("Ks As").unwrap();
/// assert_eq!(get_hand_notation(&cards).unwrap(), "AKs");
/// ```
pub fn get_hand_notation(cards: &[Card]) -> Result<String> {
    let hole_cards = HoleCards::from_cards(cards)?;
    Ok(HandClass::of(&hole_cards).to_string())
}

/// Shape (pair / suited / offsuit) of exactly two cards.
pub fn get_hand_category(cards: &[Card]) -> Result<HandShape> {
    let hole_cards = HoleCards::from_cards(cards)?;
    Ok(HandClass::of(&hole_cards).shape())
}

/// Encode two ranks (r1 > r2) into a triangular index.
fn encode_triangular(r1: u8, r2: u8) -> u8 {
    r1 * (r1 - 1) / 2 + r2
}

/// Decode triangular index to two ranks (r1 > r2).
fn decode_triangular(idx: u8) -> (u8, u8) {
    let mut r1 = 1u8;
    let mut remaining = idx;
    while remaining >= r1 {
        remaining -= r1;
        r1 += 1;
    }
    (r1, remaining)
}
