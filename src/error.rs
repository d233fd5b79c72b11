//! Error types for the trainer core.
//!
//! Every failure here is a local validation error surfaced straight to
//! the caller. Nothing is retried.

use thiserror::Error;

use crate::scenario::Action;

/// Errors produced by card parsing, hand evaluation, dealing and grading.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainerError {
    /// Malformed card or starting-hand string.
    #[error("Invalid notation: {0}")]
    InvalidNotation(String),

    /// Wrong number of cards for the requested operation.
    #[error("Invalid hand size: expected {expected}, got {actual}")]
    InvalidHandSize {
        /// Human-readable expectation, e.g. "5-7" or "2".
        expected: &'static str,
        /// Number of cards actually supplied.
        actual: usize,
    },

    /// `deal` asked for more cards than the deck holds.
    #[error("Not enough cards in deck: requested {requested}, have {remaining}")]
    DeckExhausted {
        /// Cards requested.
        requested: usize,
        /// Cards left in the deck.
        remaining: usize,
    },

    /// Range notation that could not be parsed.
    #[error("Invalid range notation: {0}")]
    InvalidRange(String),

    /// Chosen action is not legal in the scenario (strict grading only).
    #[error("Action {action} is not available in this scenario")]
    UnavailableAction {
        /// The rejected action.
        action: Action,
    },

    /// Configuration could not be read or failed validation.
    #[error("Config error: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrainerError>;
