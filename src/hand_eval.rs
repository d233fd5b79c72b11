//! Poker hand evaluation.
//!
//! This module provides hand ranking and comparison for 5-7 card poker hands.
//! A 5-card hand is classified directly from its rank counts, suit and
//! straight pattern; 6 and 7 card hands are ranked by the best 5-card subset.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::cards::{Card, HoleCards, Rank};
use crate::error::{Result, TrainerError};

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandRank {
    /// All categories, worst first.
    pub const ALL: [HandRank; 10] = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
        HandRank::RoyalFlush,
    ];

    /// Category ordinal, 1 (high card) to 10 (royal flush).
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Get the category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }

    /// Length of the tiebreaker vector for this category.
    pub fn tiebreaker_len(&self) -> usize {
        match self {
            HandRank::FourOfAKind | HandRank::FullHouse => 2,
            HandRank::TwoPair => 3,
            HandRank::ThreeOfAKind | HandRank::OnePair => 4,
            _ => 5,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The strength of a hand: a category plus rank ordinals that break ties
/// within it, most significant first.
///
/// Field order matters: the derived ordering compares `rank` first, then
/// the tiebreakers lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    /// Hand category.
    pub rank: HandRank,
    /// Rank ordinals (2-14) in order of importance.
    pub tiebreakers: Vec<u8>,
}

impl HandStrength {
    /// Create a new hand strength.
    pub fn new(rank: HandRank, tiebreakers: Vec<u8>) -> Self {
        Self { rank, tiebreakers }
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)
    }
}

/// Hand evaluator for poker hands.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandEvaluator;

impl HandEvaluator {
    /// Create a new hand evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a 5, 6 or 7 card hand.
    pub fn evaluate(&self, cards: &[Card]) -> Result<HandStrength> {
        self.best_hand(cards).map(|(strength, _)| strength)
    }

    /// Find the best 5-card hand among 5-7 cards.
    ///
    /// Returns the winning strength and the subset that produces it. When
    /// several subsets tie, the first one enumerated wins.
    pub fn best_hand(&self, cards: &[Card]) -> Result<(HandStrength, [Card; 5])> {
        let n = cards.len();
        if !(5..=7).contains(&n) {
            return Err(TrainerError::InvalidHandSize {
                expected: "5-7",
                actual: n,
            });
        }

        let mut best: Option<(HandStrength, [Card; 5])> = None;

        // Try all C(n, 5) combinations: 1, 6 or 21
        for a in 0..(n - 4) {
            for b in (a + 1)..(n - 3) {
                for c in (b + 1)..(n - 2) {
                    for d in (c + 1)..(n - 1) {
                        for e in (d + 1)..n {
                            let hand = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                            let strength = self.evaluate_5(&hand);
                            log::trace!("subset {:?} -> {:?}", hand, strength);
                            if best.as_ref().map_or(true, |(current, _)| strength > *current) {
                                best = Some((strength, hand));
                            }
                        }
                    }
                }
            }
        }

        // n >= 5, so the loops ran at least once
        best.ok_or(TrainerError::InvalidHandSize {
            expected: "5-7",
            actual: n,
        })
    }

    /// Evaluate exactly five cards.
    pub fn evaluate_5(&self, cards: &[Card; 5]) -> HandStrength {
        let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank().value()).collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight_high = self.find_straight(&ranks);

        if let Some(high) = straight_high {
            if is_flush {
                if high == Rank::Ace.value() {
                    return HandStrength::new(HandRank::RoyalFlush, ranks);
                }
                return HandStrength::new(HandRank::StraightFlush, straight_tiebreakers(high, ranks));
            }
        }

        // Rank groups sorted by (count desc, rank desc)
        let mut rank_counts = [0u8; 15];
        for &r in &ranks {
            rank_counts[r as usize] += 1;
        }
        let mut groups: Vec<(u8, u8)> = (2..=14u8)
            .rev()
            .filter(|&r| rank_counts[r as usize] > 0)
            .map(|r| (rank_counts[r as usize], r))
            .collect();
        groups.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

        let pattern: Vec<u8> = groups.iter().map(|g| g.0).collect();
        let group_ranks: Vec<u8> = groups.iter().map(|g| g.1).collect();

        match pattern.as_slice() {
            [4, 1] => return HandStrength::new(HandRank::FourOfAKind, group_ranks),
            [3, 2] => return HandStrength::new(HandRank::FullHouse, group_ranks),
            _ => {}
        }
        if is_flush {
            return HandStrength::new(HandRank::Flush, ranks);
        }
        if let Some(high) = straight_high {
            return HandStrength::new(HandRank::Straight, straight_tiebreakers(high, ranks));
        }

        match pattern.as_slice() {
            [3, 1, 1] => HandStrength::new(HandRank::ThreeOfAKind, group_ranks),
            [2, 2, 1] => HandStrength::new(HandRank::TwoPair, group_ranks),
            [2, 1, 1, 1] => HandStrength::new(HandRank::OnePair, group_ranks),
            _ => HandStrength::new(HandRank::HighCard, ranks),
        }
    }

    /// Find a straight among five ranks sorted descending.
    /// Returns the high card of the straight (5 for the wheel).
    fn find_straight(&self, ranks: &[u8]) -> Option<u8> {
        let rank_bits = ranks.iter().fold(0u16, |bits, &r| bits | (1 << r));
        if rank_bits.count_ones() != 5 {
            return None;
        }

        // Five consecutive ranks
        let low = rank_bits.trailing_zeros();
        if rank_bits == 0b11111 << low {
            return Some(low as u8 + 4);
        }

        // Wheel: A-2-3-4-5
        const WHEEL: u16 = (1 << 14) | 0b11_1100;
        if rank_bits == WHEEL {
            return Some(Rank::Five.value());
        }

        None
    }

    /// Compare two holdings on a shared board.
    pub fn compare(&self, hole1: &HoleCards, hole2: &HoleCards, board: &[Card]) -> Result<Ordering> {
        let with_board = |hole: &HoleCards| {
            let mut cards = hole.cards().to_vec();
            cards.extend_from_slice(board);
            cards
        };
        let strength1 = self.evaluate(&with_board(hole1))?;
        let strength2 = self.evaluate(&with_board(hole2))?;
        Ok(strength1.cmp(&strength2))
    }
}

/// Tiebreakers for a straight. A wheel plays its ace low, so it is listed
/// last and the hand orders below a six-high straight.
fn straight_tiebreakers(high: u8, ranks: Vec<u8>) -> Vec<u8> {
    if high == Rank::Five.value() {
        vec![5, 4, 3, 2, Rank::Ace.value()]
    } else {
        ranks
    }
}

/// Evaluate a 5-7 card hand with the default evaluator.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandStrength> {
    HandEvaluator::new().evaluate(cards)
}
