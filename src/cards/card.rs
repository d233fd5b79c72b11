//! Card representation for the trainer.
//!
//! This module provides the fundamental card types:
//! - `Rank`: 2 through Ace, with ordinal 2-14 and a one-character symbol
//! - `Suit`: hearts, diamonds, clubs, spades
//! - `Card`: an immutable (rank, suit) pair
//! - `HoleCards`: a player's two private cards, higher rank first
//!
//! Cards use the two-character letter notation (`As`, `Td`, `7c`) for
//! parsing and `Display`, and a pretty notation (`A♠`) for UI text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TrainerError};

/// Rank of a card. The discriminant is the rank ordinal (2-14, Ace high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// Rank symbols indexed by `ordinal - 2`.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Rank ordinal, 2-14.
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based index (0 = deuce, 12 = ace).
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 2
    }

    /// Display symbol (2-9, T, J, Q, K, A).
    pub fn symbol(self) -> char {
        RANK_CHARS[self.index()]
    }

    /// Rank from its ordinal.
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            2..=14 => Some(Self::ALL[value as usize - 2]),
            _ => None,
        }
    }

    /// Rank from its symbol, case-insensitive.
    pub fn from_symbol(c: char) -> Option<Rank> {
        let upper = c.to_ascii_uppercase();
        RANK_CHARS
            .iter()
            .position(|&r| r == upper)
            .map(|i| Self::ALL[i])
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Suit of a card. Suits carry no order of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Notation letter (h, d, c, s).
    pub fn letter(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    /// Pretty symbol for UI text.
    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    /// Suit from its notation letter, case-insensitive.
    pub fn from_letter(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single playing card.
///
/// Two cards are the same card iff rank and suit both match. `Card` has no
/// `Ord`: hand logic orders cards by [`Card::rank`] only, which would
/// disagree with equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card from rank and suit.
    #[inline]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The card's rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The card's suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Pretty notation, e.g. `A♠`.
    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Parse a card from a string like "As", "kh", "2C".
impl FromStr for Card {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(TrainerError::InvalidNotation(format!(
                "card must be two characters: {s:?}"
            )));
        }

        let suit = Suit::from_letter(chars[1])
            .ok_or_else(|| TrainerError::InvalidNotation(format!("invalid suit: {}", chars[1])))?;
        let rank = Rank::from_symbol(chars[0])
            .ok_or_else(|| TrainerError::InvalidNotation(format!("invalid rank: {}", chars[0])))?;

        Ok(Self::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = TrainerError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parse a single two-character card notation.
pub fn parse_card(s: &str) -> Result<Card> {
    s.parse()
}

/// Parse whitespace-separated card notations ("As Kh Qd").
/// Fails on the first malformed card.
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split_whitespace().map(parse_card).collect()
}

/// A player's two hole cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards {
    /// First card (higher rank by convention).
    pub card1: Card,
    /// Second card.
    pub card2: Card,
}

impl HoleCards {
    /// Create hole cards, ordering by rank (higher first).
    pub fn new(card1: Card, card2: Card) -> Self {
        if card1.rank() >= card2.rank() {
            Self { card1, card2 }
        } else {
            Self {
                card1: card2,
                card2: card1,
            }
        }
    }

    /// Build hole cards from a slice that must hold exactly two cards.
    pub fn from_cards(cards: &[Card]) -> Result<Self> {
        match cards {
            [a, b] => Ok(Self::new(*a, *b)),
            _ => Err(TrainerError::InvalidHandSize {
                expected: "2",
                actual: cards.len(),
            }),
        }
    }

    /// Check if hole cards are suited.
    pub fn is_suited(&self) -> bool {
        self.card1.suit() == self.card2.suit()
    }

    /// Check if hole cards are a pair.
    pub fn is_pair(&self) -> bool {
        self.card1.rank() == self.card2.rank()
    }

    /// Get both cards as an array.
    pub fn cards(&self) -> [Card; 2] {
        [self.card1, self.card2]
    }

    /// Check if a card conflicts with these hole cards.
    pub fn contains(&self, card: Card) -> bool {
        self.card1 == card || self.card2 == card
    }
}

impl FromStr for HoleCards {
    type Err = TrainerError;

    /// Parse hole cards from "AhKs" or "Ah Ks".
    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let chars: Vec<char> = compact.chars().collect();
        if chars.len() != 4 {
            return Err(TrainerError::InvalidNotation(format!(
                "hole cards must be four characters: {s:?}"
            )));
        }
        let c1: Card = chars[..2].iter().collect::<String>().parse()?;
        let c2: Card = chars[2..].iter().collect::<String>().parse()?;
        Ok(Self::new(c1, c2))
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.card1, self.card2)
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
