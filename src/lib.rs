//! # Poker Trainer Core
//!
//! Hand-strength evaluation and preflop decision grading for a poker skills
//! trainer.
//!
//! ## Features
//!
//! - **Card Model**: Cards, decks, the 169 starting-hand classes and range notation
//! - **Hand Evaluator**: Ranks any 5-7 card hand with a total order and tiebreakers
//! - **Preflop Theory**: Position opening ranges, hand tiers and pot odds
//! - **Decision Grading**: Grades a chosen action, names the best one and explains why
//! - **Batch Grading**: Grades many decisions in parallel
//!
//! ## Quick Start
//!
//! ```
//! use poker_trainer_core::{evaluate_decision, Action, Grade, Position, Scenario};
//!
//! // Aces on the button, folded to us
//! let scenario = Scenario::simple(Position::Btn, "As Ad", "", 1.5, 0.0).unwrap();
//!
//! let eval = evaluate_decision(&scenario, Action::Fold).unwrap();
//! assert_eq!(eval.grade, Grade::Blunder);
//! assert_eq!(eval.best_action, Action::Raise);
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: Cards, deck, hand classes and ranges
//! - [`hand_eval`]: 5-7 card hand evaluation
//! - [`position`]: Table positions
//! - [`scenario`]: Actions, streets and training scenarios
//! - [`theory`]: Opening ranges, tiers and pot odds
//! - [`grading`]: Decision grading
//! - [`config`]: JSON configuration
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Decision Grading Engine                      │
//! │  - Opening / facing-aggression regimes   - Explanations         │
//! │  - Decision table                        - Batch grading        │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ reads
//!                               ▼
//!         ┌─────────────────────┼─────────────────────┐
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//!    ┌──────────┐        ┌────────────┐        ┌────────────┐
//!    │ Scenario │        │   Theory   │        │   Hand     │
//!    │  input   │        │ ranges/tier│        │ Evaluator  │
//!    └──────────┘        └────────────┘        └────────────┘
//!         │                     │                     │
//!         └─────────────────────┼─────────────────────┘
//!                               ▼
//!                        ┌────────────┐
//!                        │ Card Model │
//!                        └────────────┘
//! ```

#![warn(missing_docs)]

/// Cards, decks, starting-hand classes and ranges.
pub mod cards;

/// Trainer configuration.
pub mod config;

/// Error types.
pub mod error;

/// Decision grading engine.
pub mod grading;

/// Hand strength evaluation.
pub mod hand_eval;

/// Table positions.
pub mod position;

/// Scenario input types.
pub mod scenario;

/// Preflop theory tables.
pub mod theory;

// Re-export commonly used types at crate root for convenience
pub use cards::{
    get_hand_category, get_hand_notation, parse_card, parse_cards, Card, Deck, HandClass,
    HandShape, HoleCards, Range, Rank, Suit,
};
pub use config::{GradingConfig, TrainerConfig};
pub use error::{Result, TrainerError};
pub use grading::{evaluate_decision, DecisionEvaluation, DecisionEvaluator, Grade};
pub use hand_eval::{evaluate_hand, HandEvaluator, HandRank, HandStrength};
pub use position::{positions_between, Position, PositionCategory};
pub use scenario::{Action, PlayerAction, Scenario, Street};
pub use theory::{
    calculate_pot_odds, get_hand_strength_tier, is_in_opening_range, should_open_raise, HandTier,
    OpeningRanges,
};
