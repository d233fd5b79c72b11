//! Hand range utilities.
//!
//! A range is a set of starting-hand classes, written in the usual range
//! notation: "AA", "AKs", "AKo", "AK" (both suited and offsuit), "TT+",
//! "AQs+", "A5s-A2s".

use std::fmt;

use super::card::{HoleCards, Rank};
use super::hand_class::HandClass;
use crate::error::{Result, TrainerError};

/// A poker range represented as a set of hand classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Range {
    /// Bitset of included hand classes (169 bits)
    classes: [u64; 3],
}

impl Range {
    /// Create an empty range.
    pub fn empty() -> Self {
        Self { classes: [0; 3] }
    }

    /// Create a range with all hands.
    pub fn all() -> Self {
        let mut range = Self::empty();
        for hc in HandClass::all() {
            range.add(hc);
        }
        range
    }

    /// Build a range from canonical single-class notations ("AA", "AKs").
    /// Entries that are not canonical notation are skipped.
    pub fn from_hands<'a>(hands: impl IntoIterator<Item = &'a str>) -> Self {
        let mut range = Self::empty();
        for hc in hands.into_iter().filter_map(|h| HandClass::from_notation(h).ok()) {
            range.add(hc);
        }
        range
    }

    /// Add a hand class to the range.
    pub fn add(&mut self, hand_class: HandClass) {
        let idx = hand_class.index();
        self.classes[(idx / 64) as usize] |= 1u64 << (idx % 64);
    }

    /// Remove a hand class from the range.
    pub fn remove(&mut self, hand_class: HandClass) {
        let idx = hand_class.index();
        self.classes[(idx / 64) as usize] &= !(1u64 << (idx % 64));
    }

    /// Check if a hand class is in the range.
    pub fn contains_class(&self, hand_class: HandClass) -> bool {
        let idx = hand_class.index();
        (self.classes[(idx / 64) as usize] & (1u64 << (idx % 64))) != 0
    }

    /// Check if hole cards are in this range.
    pub fn contains(&self, hole_cards: &HoleCards) -> bool {
        self.contains_class(HandClass::of(hole_cards))
    }

    /// Check if a canonical notation is in this range. Anything that is not
    /// canonical notation is not in any range.
    pub fn contains_notation(&self, notation: &str) -> bool {
        HandClass::from_notation(notation)
            .map(|hc| self.contains_class(hc))
            .unwrap_or(false)
    }

    /// Count the number of hand classes in the range.
    pub fn num_classes(&self) -> usize {
        self.classes.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Count the total number of combos in the range.
    pub fn num_combos(&self) -> usize {
        self.iter_classes().map(|hc| hc.num_combos() as usize).sum()
    }

    /// Fraction of all 1326 combos covered by the range.
    pub fn coverage(&self) -> f64 {
        self.num_combos() as f64 / 1326.0
    }

    /// Iterate over hand classes in the range.
    pub fn iter_classes(&self) -> impl Iterator<Item = HandClass> + '_ {
        HandClass::all().filter(move |hc| self.contains_class(*hc))
    }

    /// Parse a range from notation string.
    /// Supports: "AA", "AKs", "AKo", "AK", "TT+", "AQs+", "A5s-A2s"
    pub fn from_notation(notation: &str) -> Result<Self> {
        let mut range = Self::empty();

        for part in notation.split(',').map(str::trim) {
            if part.is_empty() {
                continue;
            }
            Self::parse_part(&mut range, part)?;
        }

        Ok(range)
    }

    /// Parse a single part of range notation.
    fn parse_part(range: &mut Range, part: &str) -> Result<()> {
        // Range notation (e.g., "A5s-A2s")
        if let Some((start, end)) = part.split_once('-') {
            return Self::parse_span(range, start.trim(), end.trim());
        }

        // Plus notation (e.g., "TT+", "AQs+")
        if let Some(hand) = part.strip_suffix('+') {
            return Self::parse_plus(range, hand);
        }

        Self::parse_single(range, part)
    }

    /// Parse a single hand notation like "AA", "AKs", "AKo", "AK".
    fn parse_single(range: &mut Range, hand: &str) -> Result<()> {
        let (high, low, suffix) = Self::parse_hand(hand)?;

        if high == low {
            range.add(HandClass::new(high, low, false));
            return Ok(());
        }
        let (suited, offsuit) = Self::suffix_flags(suffix);
        if suited {
            range.add(HandClass::new(high, low, true));
        }
        if offsuit {
            range.add(HandClass::new(high, low, false));
        }
        Ok(())
    }

    /// Parse plus notation like "TT+" or "AQs+".
    fn parse_plus(range: &mut Range, hand: &str) -> Result<()> {
        let (high, low, suffix) = Self::parse_hand(hand)?;

        if high == low {
            // Pairs: TT+ means TT, JJ, QQ, KK, AA
            for rank in Rank::ALL.iter().filter(|r| **r >= high) {
                range.add(HandClass::new(*rank, *rank, false));
            }
            return Ok(());
        }

        // Non-pairs: AQs+ means AQs, AKs
        let (suited, offsuit) = Self::suffix_flags(suffix);
        for kicker in Rank::ALL.iter().filter(|r| **r >= low && **r < high) {
            if suited {
                range.add(HandClass::new(high, *kicker, true));
            }
            if offsuit {
                range.add(HandClass::new(high, *kicker, false));
            }
        }
        Ok(())
    }

    /// Parse span notation like "A5s-A2s" or "99-66".
    fn parse_span(range: &mut Range, start: &str, end: &str) -> Result<()> {
        let invalid = || TrainerError::InvalidRange(format!("{}-{}", start, end));
        let (s_high, s_low, s_suffix) = Self::parse_hand(start)?;
        let (e_high, e_low, e_suffix) = Self::parse_hand(end)?;

        if s_suffix != e_suffix {
            return Err(invalid());
        }

        // Pair span: both ends are pairs
        if s_high == s_low && e_high == e_low {
            let (lo, hi) = if s_high <= e_high { (s_high, e_high) } else { (e_high, s_high) };
            for rank in Rank::ALL.iter().filter(|r| **r >= lo && **r <= hi) {
                range.add(HandClass::new(*rank, *rank, false));
            }
            return Ok(());
        }

        // Must have same high card for a kicker span
        if s_high != e_high || s_high == s_low || e_high == e_low {
            return Err(invalid());
        }

        let (lo, hi) = if s_low <= e_low { (s_low, e_low) } else { (e_low, s_low) };
        let (suited, offsuit) = Self::suffix_flags(s_suffix);
        for kicker in Rank::ALL.iter().filter(|r| **r >= lo && **r <= hi) {
            if suited {
                range.add(HandClass::new(s_high, *kicker, true));
            }
            if offsuit {
                range.add(HandClass::new(s_high, *kicker, false));
            }
        }
        Ok(())
    }

    /// Split a hand like "AKs" into (high, low, suffix). Rank order and case
    /// are not significant here.
    fn parse_hand(hand: &str) -> Result<(Rank, Rank, Option<char>)> {
        let chars: Vec<char> = hand.chars().collect();
        if chars.len() < 2 || chars.len() > 3 {
            return Err(TrainerError::InvalidRange(hand.to_string()));
        }

        let r1 = Self::parse_rank(chars[0])?;
        let r2 = Self::parse_rank(chars[1])?;
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };

        let suffix = match chars.get(2).map(|c| c.to_ascii_lowercase()) {
            None => None,
            Some(c @ ('s' | 'o')) if high != low => Some(c),
            Some(c) => {
                return Err(TrainerError::InvalidRange(format!(
                    "invalid suffix {c:?} in {hand} (expected 's' or 'o')"
                )))
            }
        };

        Ok((high, low, suffix))
    }

    /// (include suited, include offsuit) for a suffix.
    fn suffix_flags(suffix: Option<char>) -> (bool, bool) {
        match suffix {
            Some('s') => (true, false),
            Some('o') => (false, true),
            _ => (true, true),
        }
    }

    /// Parse a single rank character.
    fn parse_rank(c: char) -> Result<Rank> {
        Rank::from_symbol(c)
            .ok_or_else(|| TrainerError::InvalidRange(format!("invalid rank character: {c}")))
    }
}

impl fmt::Display for Range {
    /// Comma-separated canonical notations, strongest index first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut classes: Vec<HandClass> = self.iter_classes().collect();
        classes.reverse();
        let names: Vec<String> = classes.iter().map(HandClass::to_string).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_all() {
        let empty = Range::empty();
        assert_eq!(empty.num_classes(), 0);
        assert_eq!(empty.num_combos(), 0);

        let all = Range::all();
        assert_eq!(all.num_classes(), 169);
        assert_eq!(all.num_combos(), 1326);
        assert!((all.coverage() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_pairs() {
        let range = Range::from_notation("AA").unwrap();
        assert_eq!(range.num_classes(), 1);
        assert_eq!(range.num_combos(), 6);

        let range = Range::from_notation("AA, KK, QQ").unwrap();
        assert_eq!(range.num_classes(), 3);
        assert_eq!(range.num_combos(), 18);
    }

    #[test]
    fn test_parse_suited_offsuit() {
        let suited = Range::from_notation("AKs").unwrap();
        assert_eq!(suited.num_combos(), 4);

        let offsuit = Range::from_notation("AKo").unwrap();
        assert_eq!(offsuit.num_combos(), 12);

        let both = Range::from_notation("AK").unwrap();
        assert_eq!(both.num_classes(), 2);
        assert_eq!(both.num_combos(), 16);
    }

    #[test]
    fn test_parse_plus_notation() {
        // TT+ should include TT, JJ, QQ, KK, AA
        let range = Range::from_notation("TT+").unwrap();
        assert_eq!(range.num_classes(), 5);
        assert_eq!(range.num_combos(), 30);

        // AQs+ should include AQs, AKs
        let range = Range::from_notation("AQs+").unwrap();
        assert_eq!(range.num_classes(), 2);
        assert!(range.contains_notation("AKs"));
        assert!(!range.contains_notation("AJs"));
    }

    #[test]
    fn test_parse_span_notation() {
        // A5s-A2s should include A2s, A3s, A4s, A5s
        let range = Range::from_notation("A5s-A2s").unwrap();
        assert_eq!(range.num_classes(), 4);
        assert_eq!(range.num_combos(), 16);

        let pairs = Range::from_notation("99-66").unwrap();
        assert_eq!(pairs.num_classes(), 4);
        assert!(pairs.contains_notation("77"));
        assert!(!pairs.contains_notation("TT"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Range::from_notation("AX").is_err());
        assert!(Range::from_notation("AKx").is_err());
        assert!(Range::from_notation("AAs").is_err());
        assert!(Range::from_notation("A5s-K2s").is_err());
        assert!(Range::from_notation("A5s-A2o").is_err());
        assert!(Range::from_notation("AKQJ").is_err());
    }

    #[test]
    fn test_utg_style_notation_matches_explicit_list() {
        let compact = Range::from_notation("99+, ATs+, AQo+, KJs+").unwrap();
        let explicit = Range::from_hands([
            "AA", "KK", "QQ", "JJ", "TT", "99", "AKs", "AQs", "AJs", "ATs", "AKo", "AQo", "KQs",
            "KJs",
        ]);
        assert_eq!(compact, explicit);
        assert_eq!(compact.num_classes(), 14);
    }

    #[test]
    fn test_contains_hole_cards() {
        let range = Range::from_notation("AA, KK, AKs").unwrap();

        let aa: HoleCards = "AhAs".parse().unwrap();
        assert!(range.contains(&aa));

        let aks: HoleCards = "AhKh".parse().unwrap();
        assert!(range.contains(&aks));

        let ako: HoleCards = "AhKd".parse().unwrap();
        assert!(!range.contains(&ako));
    }

    #[test]
    fn test_contains_notation_rejects_non_canonical() {
        let range = Range::from_notation("AKs").unwrap();
        assert!(range.contains_notation("AKs"));
        assert!(!range.contains_notation("KAs"));
        assert!(!range.contains_notation("aks"));
    }

    #[test]
    fn test_display() {
        let range = Range::from_notation("AKs, AA").unwrap();
        assert_eq!(range.to_string(), "AKs, AA");
    }
}
