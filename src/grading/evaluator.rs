//! Decision evaluator: grades a chosen action in a scenario.

use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::cards::{HandClass, HoleCards};
use crate::config::{GradingConfig, TrainerConfig};
use crate::error::{Result, TrainerError};
use crate::scenario::{Action, Scenario, Street};
use crate::theory::{calculate_pot_odds, get_hand_strength_tier, OpeningRanges};

use super::explain::{explain, Context, POSTFLOP_EXPLANATION};
use super::grade::{DecisionEvaluation, Grade};
use super::policy::{judge, Spot};

/// Grades decisions against the opening ranges and tier tables.
///
/// The evaluator is immutable once built and can be shared across threads.
#[derive(Debug, Clone)]
pub struct DecisionEvaluator {
    config: GradingConfig,
    ranges: OpeningRanges,
}

impl Default for DecisionEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionEvaluator {
    /// Evaluator with default grading and the built-in ranges.
    pub fn new() -> Self {
        Self {
            config: GradingConfig::default(),
            ranges: OpeningRanges::standard().clone(),
        }
    }

    /// Evaluator for a trainer config. Fails if the config is invalid or a
    /// range override does not parse.
    pub fn with_config(config: &TrainerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: config.grading.clone(),
            ranges: config.opening_ranges()?,
        })
    }

    /// Grading configuration in use.
    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// Opening ranges in use.
    pub fn opening_ranges(&self) -> &OpeningRanges {
        &self.ranges
    }

    /// Grade `chosen` in `scenario`.
    ///
    /// Preflop decisions go through the decision table. Postflop decisions
    /// are not analysed yet and always grade as Good.
    pub fn evaluate_decision(&self, scenario: &Scenario, chosen: Action) -> Result<DecisionEvaluation> {
        let legal = scenario.legal_actions();
        if self.config.strict_actions && !legal.contains(&chosen) {
            log::warn!("rejecting {} (legal: {:?})", chosen, legal);
            return Err(TrainerError::UnavailableAction { action: chosen });
        }

        if scenario.street != Street::Preflop {
            log::debug!("{} decision: postflop placeholder", scenario.street);
            return Ok(DecisionEvaluation {
                chosen_action: chosen,
                grade: Grade::Good,
                best_action: chosen,
                explanation: POSTFLOP_EXPLANATION.to_string(),
                alternative_actions: BTreeMap::new(),
            });
        }

        let hole_cards = HoleCards::from_cards(&scenario.hero_cards)?;
        let notation = HandClass::of(&hole_cards).to_string();
        let position = scenario.hero_position;
        let tier = get_hand_strength_tier(&notation);
        let pot_odds = calculate_pot_odds(scenario.pot_size, scenario.current_bet);

        let spot = if scenario.is_opening() {
            Spot::Opening {
                in_range: self.ranges.contains(&notation, position),
                tier,
            }
        } else {
            Spot::FacingAggression {
                tier,
                good_odds: pot_odds < self.config.pot_odds_call_threshold,
            }
        };

        let verdict = judge(spot, chosen);
        log::debug!(
            "{} {} {:?}: {} -> {} (best {})",
            position,
            notation,
            spot,
            chosen,
            verdict.grade,
            verdict.best_action
        );

        let ctx = Context {
            notation: &notation,
            position,
            tier,
            pot_odds,
        };

        let alternative_actions = if self.config.include_alternatives {
            legal
                .iter()
                .filter(|&&action| action != chosen)
                .map(|&action| (action, judge(spot, action).grade))
                .collect()
        } else {
            BTreeMap::new()
        };

        Ok(DecisionEvaluation {
            chosen_action: chosen,
            grade: verdict.grade,
            best_action: verdict.best_action,
            explanation: explain(verdict.reason, &ctx),
            alternative_actions,
        })
    }

    /// Grade many decisions in parallel. Results are in input order.
    pub fn evaluate_batch(&self, decisions: &[(Scenario, Action)]) -> Vec<Result<DecisionEvaluation>> {
        decisions
            .par_iter()
            .map(|(scenario, action)| self.evaluate_decision(scenario, *action))
            .collect()
    }
}

/// Grade a decision with the default evaluator.
pub fn evaluate_decision(scenario: &Scenario, chosen: Action) -> Result<DecisionEvaluation> {
    DecisionEvaluator::new().evaluate_decision(scenario, chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::scenario::PlayerAction;

    fn opening(position: Position, cards: &str) -> Scenario {
        Scenario::simple(position, cards, "", 1.5, 0.0).unwrap()
    }

    fn facing(position: Position, cards: &str, pot: f64, bet: f64) -> Scenario {
        Scenario::simple(position, cards, "", pot, bet)
            .unwrap()
            .with_action(PlayerAction::with_amount(Position::Utg, Action::Raise, bet))
    }

    #[test]
    fn test_open_aces_from_button() {
        let eval = evaluate_decision(&opening(Position::Btn, "As Ad"), Action::Raise).unwrap();
        assert_eq!(eval.grade, Grade::Excellent);
        assert_eq!(eval.best_action, Action::Raise);
        assert_eq!(
            eval.explanation,
            "Excellent! AA is a premium hand and should be raised from BTN."
        );
    }

    #[test]
    fn test_fold_aces_is_blunder() {
        let eval = evaluate_decision(&opening(Position::Btn, "As Ad"), Action::Fold).unwrap();
        assert_eq!(eval.grade, Grade::Blunder);
        assert_eq!(eval.best_action, Action::Raise);
    }

    #[test]
    fn test_fold_trash_utg() {
        let eval = evaluate_decision(&opening(Position::Utg, "7h 2d"), Action::Fold).unwrap();
        assert_eq!(eval.grade, Grade::Excellent);
        assert_eq!(eval.best_action, Action::Fold);
        assert_eq!(eval.explanation, "Correct fold. 72o is too weak to open from UTG.");
    }

    #[test]
    fn test_limp_is_mistake() {
        let eval = evaluate_decision(&opening(Position::Co, "Kh Qh"), Action::Call).unwrap();
        assert_eq!(eval.grade, Grade::Mistake);
        assert_eq!(eval.best_action, Action::Raise);
        assert!(eval.explanation.starts_with("Limping"));
    }

    #[test]
    fn test_opening_requires_no_bet() {
        // No history, but a bet to call: facing aggression
        let s = Scenario::simple(Position::Bb, "Ks Kd", "", 4.5, 2.0).unwrap();
        let eval = evaluate_decision(&s, Action::Call).unwrap();
        assert_eq!(eval.best_action, Action::Raise);
        assert_eq!(eval.grade, Grade::Good);
    }

    #[test]
    fn test_playable_hand_with_poor_odds_folds() {
        // 3 / (7.5 + 3) = 0.2857 >= 0.25
        let s = facing(Position::Btn, "8s 8d", 7.5, 3.0);
        let eval = evaluate_decision(&s, Action::Fold).unwrap();
        assert_eq!(eval.best_action, Action::Fold);
        assert_eq!(eval.grade, Grade::Excellent);

        let call = evaluate_decision(&s, Action::Call).unwrap();
        assert_eq!(call.grade, Grade::Inaccurate);
    }

    #[test]
    fn test_playable_hand_with_good_odds_calls() {
        // 2 / (10 + 2) = 0.1667 < 0.25
        let s = facing(Position::Btn, "8s 8d", 10.0, 2.0);
        let eval = evaluate_decision(&s, Action::Call).unwrap();
        assert_eq!(eval.best_action, Action::Call);
        assert_eq!(eval.grade, Grade::Good);
        assert_eq!(eval.explanation, "88 can call with good pot odds (16.7%).");
    }

    #[test]
    fn test_call_threshold_is_configurable() {
        let config = TrainerConfig::from_json_str(r#"{"grading": {"pot_odds_call_threshold": 0.3}}"#)
            .unwrap();
        let evaluator = DecisionEvaluator::with_config(&config).unwrap();
        let s = facing(Position::Btn, "8s 8d", 7.5, 3.0);
        assert_eq!(evaluator.evaluate_decision(&s, Action::Call).unwrap().best_action, Action::Call);
    }

    #[test]
    fn test_alternatives_cover_other_legal_actions() {
        let eval = evaluate_decision(&opening(Position::Btn, "As Ad"), Action::Raise).unwrap();
        let expected: BTreeMap<Action, Grade> =
            [(Action::Fold, Grade::Blunder), (Action::Check, Grade::Mistake)]
                .into_iter()
                .collect();
        assert_eq!(eval.alternative_actions, expected);

        let config = TrainerConfig::from_json_str(r#"{"grading": {"include_alternatives": false}}"#)
            .unwrap();
        let evaluator = DecisionEvaluator::with_config(&config).unwrap();
        let eval = evaluator
            .evaluate_decision(&opening(Position::Btn, "As Ad"), Action::Raise)
            .unwrap();
        assert!(eval.alternative_actions.is_empty());
    }

    #[test]
    fn test_unknown_action_is_lenient_by_default() {
        let eval = evaluate_decision(&opening(Position::Btn, "As Ad"), Action::AllIn).unwrap();
        assert_eq!(eval.grade, Grade::Mistake);
        assert_eq!(eval.explanation, "Unexpected action for this situation.");
    }

    #[test]
    fn test_strict_mode_rejects_unavailable_action() {
        let config = TrainerConfig::from_json_str(r#"{"grading": {"strict_actions": true}}"#).unwrap();
        let evaluator = DecisionEvaluator::with_config(&config).unwrap();
        let s = opening(Position::Btn, "As Ad");

        assert_eq!(
            evaluator.evaluate_decision(&s, Action::AllIn),
            Err(TrainerError::UnavailableAction { action: Action::AllIn })
        );
        assert!(evaluator.evaluate_decision(&s, Action::Raise).is_ok());
    }

    #[test]
    fn test_postflop_is_placeholder() {
        let s = Scenario::simple(Position::Btn, "As Ad", "Kd 7c 2h", 6.0, 0.0).unwrap();
        let eval = evaluate_decision(&s, Action::Check).unwrap();
        assert_eq!(eval.grade, Grade::Good);
        assert_eq!(eval.best_action, Action::Check);
        assert_eq!(eval.explanation, POSTFLOP_EXPLANATION);
        assert!(eval.alternative_actions.is_empty());
    }

    #[test]
    fn test_requires_two_hero_cards() {
        let s = opening(Position::Btn, "As");
        assert_eq!(
            evaluate_decision(&s, Action::Raise),
            Err(TrainerError::InvalidHandSize { expected: "2", actual: 1 })
        );
    }

    #[test]
    fn test_custom_ranges_are_used() {
        let config = TrainerConfig::from_json_str(r#"{"opening_ranges": {"UTG": "22+"}}"#).unwrap();
        let evaluator = DecisionEvaluator::with_config(&config).unwrap();
        let eval = evaluator
            .evaluate_decision(&opening(Position::Utg, "As Kd"), Action::Raise)
            .unwrap();
        assert_eq!(eval.best_action, Action::Fold);
        assert_eq!(eval.grade, Grade::Inaccurate);
    }

    #[test]
    fn test_batch_preserves_order() {
        let decisions = vec![
            (opening(Position::Btn, "As Ad"), Action::Raise),
            (opening(Position::Btn, "As Ad"), Action::Fold),
            (opening(Position::Utg, "7h 2d"), Action::Fold),
            (opening(Position::Utg, "7h"), Action::Fold),
        ];
        let evaluator = DecisionEvaluator::new();
        let results = evaluator.evaluate_batch(&decisions);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().grade, Grade::Excellent);
        assert_eq!(results[1].as_ref().unwrap().grade, Grade::Blunder);
        assert_eq!(results[2].as_ref().unwrap().grade, Grade::Excellent);
        assert!(results[3].is_err());

        for ((scenario, action), result) in decisions.iter().zip(&results) {
            assert_eq!(result, &evaluator.evaluate_decision(scenario, *action));
        }
    }
}
