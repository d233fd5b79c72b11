//! Grades and graded results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::scenario::Action;

/// Quality of a decision, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Grade {
    /// A serious mistake.
    Blunder = 1,
    /// A clear error.
    Mistake = 2,
    /// Playable but not ideal.
    Inaccurate = 3,
    /// A solid move, close to optimal.
    Good = 4,
    /// The best or one of the best moves.
    Excellent = 5,
}

impl Grade {
    /// All grades, best first.
    pub const ALL: [Grade; 5] = [
        Grade::Excellent,
        Grade::Good,
        Grade::Inaccurate,
        Grade::Mistake,
        Grade::Blunder,
    ];

    /// Ordinal, 5 (excellent) to 1 (blunder).
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Inaccurate => "Inaccurate",
            Grade::Mistake => "Mistake",
            Grade::Blunder => "Blunder",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Grade::Excellent => "The best or one of the best moves",
            Grade::Good => "A solid move, close to optimal",
            Grade::Inaccurate => "Playable but not ideal",
            Grade::Mistake => "A clear error",
            Grade::Blunder => "A serious mistake",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of grading one decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionEvaluation {
    /// The action the player chose.
    pub chosen_action: Action,
    /// How good that choice was.
    pub grade: Grade,
    /// The theoretically best action.
    pub best_action: Action,
    /// Why.
    pub explanation: String,
    /// Grades of the other legal actions.
    #[serde(default)]
    pub alternative_actions: BTreeMap<Action, Grade>,
}

impl DecisionEvaluation {
    /// Human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Your action: {}\nGrade: {}\nBest action: {}\n\n{}",
            self.chosen_action, self.grade, self.best_action, self.explanation
        )
    }

    /// True when the chosen action is the best one.
    pub fn is_best(&self) -> bool {
        self.chosen_action == self.best_action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_ordering() {
        assert!(Grade::Excellent > Grade::Good);
        assert!(Grade::Good > Grade::Inaccurate);
        assert!(Grade::Mistake > Grade::Blunder);
        for pair in Grade::ALL.windows(2) {
            assert_eq!(pair[0].value(), pair[1].value() + 1);
        }
    }

    #[test]
    fn test_grade_labels() {
        assert_eq!(Grade::Excellent.to_string(), "Excellent");
        assert_eq!(Grade::Blunder.description(), "A serious mistake");
    }

    #[test]
    fn test_summary() {
        let eval = DecisionEvaluation {
            chosen_action: Action::Fold,
            grade: Grade::Blunder,
            best_action: Action::Raise,
            explanation: "Never fold aces.".to_string(),
            alternative_actions: BTreeMap::new(),
        };
        assert_eq!(
            eval.summary(),
            "Your action: fold\nGrade: Blunder\nBest action: raise\n\nNever fold aces."
        );
        assert!(!eval.is_best());
    }
}
