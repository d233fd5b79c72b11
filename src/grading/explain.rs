//! Explanation text for graded decisions.

use crate::position::Position;
use crate::theory::HandTier;

use super::policy::Reason;

/// Explanation used for every postflop decision.
pub const POSTFLOP_EXPLANATION: &str =
    "Post-flop analysis is simplified for now. Full evaluation coming soon.";

/// Facts the explanation text refers to.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Canonical starting-hand notation.
    pub notation: &'a str,
    /// Hero's position.
    pub position: Position,
    /// Hand tier.
    pub tier: HandTier,
    /// Pot odds of calling.
    pub pot_odds: f64,
}

/// How an opening hand is described when raising it was right.
fn tier_phrase(tier: HandTier) -> &'static str {
    match tier {
        HandTier::Premium => "a premium hand",
        HandTier::Strong => "a strong hand",
        HandTier::Playable => "a playable hand",
        HandTier::Marginal => "a marginal hand",
        HandTier::Trash => "playable",
    }
}

/// Render the explanation for a reason.
pub fn explain(reason: Reason, ctx: &Context<'_>) -> String {
    let n = ctx.notation;
    let pos = ctx.position;

    match reason {
        Reason::OpenInRange => format!(
            "Excellent! {} is {} and should be raised from {}.",
            n,
            tier_phrase(ctx.tier),
            pos
        ),
        Reason::FoldOutOfRange => format!("Correct fold. {n} is too weak to open from {pos}."),
        Reason::MarginalRaise => format!(
            "{n} is marginal from {pos}. Folding is more standard, but raising can work."
        ),
        Reason::TooWeakToRaise => {
            format!("{n} is too weak to raise from {pos}. This hand should be folded.")
        }
        Reason::FoldedPremium => format!(
            "Folding {n} is a serious mistake! This is a premium hand that should always be raised."
        ),
        Reason::FoldedStrong => format!("{n} is a strong hand that should be raised from {pos}."),
        Reason::FoldedInRange => {
            format!("{n} should be raised from {pos}, though it's not a critical error to fold.")
        }
        Reason::Limp => {
            "Limping (just calling) is generally weak play. You should either raise or fold."
                .to_string()
        }
        Reason::PremiumReraise => format!("{n} is premium. Re-raising is the best play."),
        Reason::PremiumCall => {
            format!("Calling with {n} is acceptable, though re-raising is more aggressive.")
        }
        Reason::PremiumFold => {
            format!("Never fold {n} to a single raise! This is a premium hand.")
        }
        Reason::StrongContinue => format!("{n} is strong enough to continue."),
        Reason::StrongFold => format!("{n} is too strong to fold to a single raise."),
        Reason::GoodOddsCall => format!(
            "{} can call with good pot odds ({:.1}%).",
            n,
            ctx.pot_odds * 100.0
        ),
        Reason::GoodOddsFold => {
            "Folding is acceptable but you're getting good odds to call.".to_string()
        }
        Reason::GoodOddsRaise => format!("Re-raising {n} is aggressive but can work."),
        Reason::PoorOddsFold => format!("{n} is marginal. Folding is correct with poor odds."),
        Reason::PoorOddsContinue => "Calling is loose here, but not terrible.".to_string(),
        Reason::WeakFold => format!("{n} is too weak to continue. Easy fold."),
        Reason::WeakContinue => format!("{n} is not strong enough to call a raise."),
        Reason::Unexpected => "Unexpected action for this situation.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(notation: &str, tier: HandTier) -> Context<'_> {
        Context {
            notation,
            position: Position::Btn,
            tier,
            pot_odds: 0.2,
        }
    }

    #[test]
    fn test_opening_text() {
        assert_eq!(
            explain(Reason::OpenInRange, &ctx("AA", HandTier::Premium)),
            "Excellent! AA is a premium hand and should be raised from BTN."
        );
        assert_eq!(
            explain(Reason::OpenInRange, &ctx("K5s", HandTier::Trash)),
            "Excellent! K5s is playable and should be raised from BTN."
        );
        assert_eq!(
            explain(Reason::FoldOutOfRange, &ctx("72o", HandTier::Trash)),
            "Correct fold. 72o is too weak to open from BTN."
        );
    }

    #[test]
    fn test_pot_odds_formatting() {
        assert_eq!(
            explain(Reason::GoodOddsCall, &ctx("88", HandTier::Playable)),
            "88 can call with good pot odds (20.0%)."
        );
    }
}
