//! Cards, decks, starting-hand classes and ranges.
//!
//! ## Modules
//!
//! - `card`: Rank, suit, card and hole-card representations
//! - `deck`: The 52-card deck
//! - `hand_class`: The 169 starting-hand classes and their notation
//! - `range`: Sets of hand classes and range notation parsing

pub mod card;
pub mod deck;
pub mod hand_class;
pub mod range;

pub use card::{parse_card, parse_cards, Card, HoleCards, Rank, Suit};
pub use deck::Deck;
pub use hand_class::{get_hand_category, get_hand_notation, HandClass, HandShape};
pub use range::Range;
