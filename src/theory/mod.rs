//! Static preflop theory: opening ranges, hand tiers and pot odds.
//!
//! All tables are process-wide read-only data built on first use, so every
//! lookup here is a pure function that is safe to call from many threads.
//!
//! ## Modules
//!
//! - `ranges`: Position-indexed opening ranges
//! - `tiers`: Starting-hand strength tiers

pub mod ranges;
pub mod tiers;

pub use ranges::{is_in_opening_range, should_open_raise, OpeningRanges};
pub use tiers::{get_hand_strength_tier, HandTier};

/// Pot odds: the share of the final pot the hero puts in by calling.
///
/// Returns 0.0 when there is nothing to call.
pub fn calculate_pot_odds(pot_size: f64, bet_to_call: f64) -> f64 {
    if bet_to_call == 0.0 {
        return 0.0;
    }
    bet_to_call / (pot_size + bet_to_call)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pot_odds() {
        assert_eq!(calculate_pot_odds(10.0, 0.0), 0.0);
        assert!((calculate_pot_odds(7.5, 3.0) - 0.2857).abs() < 1e-4);
        assert!((calculate_pot_odds(10.0, 10.0) - 0.5).abs() < 1e-12);
        assert!(calculate_pot_odds(1.5, 100.0) < 1.0);
    }
}
