//! The preflop decision table.
//!
//! Grading is a pure function of the spot (regime plus the facts about the
//! hero's hand that matter in it) and the chosen action. It produces a
//! grade, the best action and a [`Reason`] that the narrative layer turns
//! into text. Keeping the table free of text makes the policy easy to audit.
//!
//! | regime            | hand                    | best  |
//! |-------------------|-------------------------|-------|
//! | opening           | in range                | raise |
//! | opening           | out of range            | fold  |
//! | facing aggression | tier 1                  | raise |
//! | facing aggression | tier 2                  | call  |
//! | facing aggression | tier 3, good pot odds   | call  |
//! | facing aggression | tier 3, poor pot odds   | fold  |
//! | facing aggression | tier 4-5                | fold  |

use crate::scenario::Action;
use crate::theory::HandTier;

use super::grade::Grade;

/// A preflop decision point, reduced to what the table needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spot {
    /// Nobody has acted and there is nothing to call.
    Opening {
        /// Hand is in the position's opening range.
        in_range: bool,
        /// Hand tier.
        tier: HandTier,
    },
    /// There is action or a bet in front of the hero.
    FacingAggression {
        /// Hand tier.
        tier: HandTier,
        /// Pot odds are below the call threshold.
        good_odds: bool,
    },
}

/// Which explanation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// Raised an in-range hand.
    OpenInRange,
    /// Folded an out-of-range hand.
    FoldOutOfRange,
    /// Raised an out-of-range hand of tier 3 or better.
    MarginalRaise,
    /// Raised an out-of-range hand of tier 4 or worse.
    TooWeakToRaise,
    /// Folded an in-range premium hand.
    FoldedPremium,
    /// Folded an in-range strong hand.
    FoldedStrong,
    /// Folded any other in-range hand.
    FoldedInRange,
    /// Called with nothing to call.
    Limp,
    /// Re-raised a premium hand.
    PremiumReraise,
    /// Flatted a premium hand.
    PremiumCall,
    /// Folded a premium hand to a raise.
    PremiumFold,
    /// Continued with a strong hand.
    StrongContinue,
    /// Folded a strong hand to a raise.
    StrongFold,
    /// Called a playable hand getting a good price.
    GoodOddsCall,
    /// Folded a playable hand getting a good price.
    GoodOddsFold,
    /// Raised a playable hand getting a good price.
    GoodOddsRaise,
    /// Folded a playable hand getting a poor price.
    PoorOddsFold,
    /// Continued with a playable hand getting a poor price.
    PoorOddsContinue,
    /// Folded a weak hand to a raise.
    WeakFold,
    /// Continued with a weak hand.
    WeakContinue,
    /// Action outside the table.
    Unexpected,
}

/// Outcome of grading one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// The grade.
    pub grade: Grade,
    /// The best action in the spot.
    pub best_action: Action,
    /// Explanation key.
    pub reason: Reason,
}

/// Best action for a spot.
pub fn best_action(spot: Spot) -> Action {
    match spot {
        Spot::Opening { in_range: true, .. } => Action::Raise,
        Spot::Opening { in_range: false, .. } => Action::Fold,
        Spot::FacingAggression { tier, good_odds } => match tier {
            HandTier::Premium => Action::Raise,
            HandTier::Strong => Action::Call,
            HandTier::Playable if good_odds => Action::Call,
            _ => Action::Fold,
        },
    }
}

/// Grade an action in a spot.
pub fn judge(spot: Spot, chosen: Action) -> Verdict {
    let best_action = best_action(spot);
    let (grade, reason) = match spot {
        Spot::Opening { in_range, tier } => judge_opening(in_range, tier, chosen, best_action),
        Spot::FacingAggression { tier, good_odds } => judge_facing(tier, good_odds, chosen),
    };
    Verdict {
        grade,
        best_action,
        reason,
    }
}

fn judge_opening(in_range: bool, tier: HandTier, chosen: Action, best: Action) -> (Grade, Reason) {
    use Action::*;
    use Grade::*;

    if chosen == best {
        let reason = if in_range {
            Reason::OpenInRange
        } else {
            Reason::FoldOutOfRange
        };
        return (Excellent, reason);
    }

    match (chosen, in_range) {
        (Raise, false) if tier <= HandTier::Playable => (Inaccurate, Reason::MarginalRaise),
        (Raise, false) => (Mistake, Reason::TooWeakToRaise),
        (Fold, true) => match tier {
            HandTier::Premium => (Blunder, Reason::FoldedPremium),
            HandTier::Strong => (Mistake, Reason::FoldedStrong),
            _ => (Inaccurate, Reason::FoldedInRange),
        },
        (Call, _) => (Mistake, Reason::Limp),
        _ => (Mistake, Reason::Unexpected),
    }
}

fn judge_facing(tier: HandTier, good_odds: bool, chosen: Action) -> (Grade, Reason) {
    use Action::*;
    use Grade::*;

    match tier {
        HandTier::Premium => match chosen {
            Raise => (Excellent, Reason::PremiumReraise),
            Call => (Good, Reason::PremiumCall),
            Fold => (Blunder, Reason::PremiumFold),
            _ => (Mistake, Reason::Unexpected),
        },
        HandTier::Strong => match chosen {
            Call => (Excellent, Reason::StrongContinue),
            Raise => (Good, Reason::StrongContinue),
            _ => (Mistake, Reason::StrongFold),
        },
        HandTier::Playable if good_odds => match chosen {
            Call => (Good, Reason::GoodOddsCall),
            Fold => (Inaccurate, Reason::GoodOddsFold),
            _ => (Inaccurate, Reason::GoodOddsRaise),
        },
        HandTier::Playable => match chosen {
            Fold => (Excellent, Reason::PoorOddsFold),
            _ => (Inaccurate, Reason::PoorOddsContinue),
        },
        HandTier::Marginal | HandTier::Trash => match chosen {
            Fold => (Excellent, Reason::WeakFold),
            _ => (Mistake, Reason::WeakContinue),
        },
    }
}
