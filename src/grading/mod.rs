//! Decision grading.
//!
//! Grades a player's chosen action in a [`Scenario`](crate::scenario::Scenario)
//! against the opening ranges, hand tiers and pot odds in [`crate::theory`].
//!
//! ## Modules
//!
//! - `grade`: Grades and the graded result
//! - `policy`: The decision table (spot × action → grade, best action)
//! - `explain`: Explanation text for each table outcome
//! - `evaluator`: Scenario handling, config, batch grading

pub mod evaluator;
pub mod explain;
pub mod grade;
pub mod policy;

pub use evaluator::{evaluate_decision, DecisionEvaluator};
pub use grade::{DecisionEvaluation, Grade};
pub use policy::{Reason, Spot, Verdict};
