//! A 52-card deck with dealing functionality.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use super::card::{Card, Rank, Suit};
use crate::error::{Result, TrainerError};

/// A deck of playing cards.
///
/// The deck is an ordered sequence that always holds a duplicate-free
/// subset of the 52 standard cards. Dealing takes from the front.
#[derive(Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Size of a full deck.
    pub const FULL_SIZE: usize = 52;

    /// Create a new deck in standard order: every rank of hearts, then
    /// diamonds, clubs and spades.
    pub fn new() -> Self {
        Self {
            cards: Self::standard_cards(),
        }
    }

    /// Create a full deck with specific cards removed.
    pub fn without(dead_cards: &[Card]) -> Self {
        let mut deck = Self::new();
        deck.remove(dead_cards);
        deck
    }

    fn standard_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(Self::FULL_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Restore all 52 cards in standard order.
    pub fn reset(&mut self) {
        self.cards = Self::standard_cards();
    }

    /// Shuffle the remaining cards in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal `n` cards from the front of the deck.
    ///
    /// Fails without touching the deck if fewer than `n` cards remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>> {
        if n > self.cards.len() {
            return Err(TrainerError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Deal a single card.
    pub fn deal_one(&mut self) -> Result<Card> {
        let mut dealt = self.deal(1)?;
        Ok(dealt.remove(0))
    }

    /// Remove specific cards from the deck. Cards not present are skipped.
    pub fn remove(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }

    /// Check if a card is still in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Get the number of remaining cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get remaining cards as a slice.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} cards)", self.len())
    }
}
