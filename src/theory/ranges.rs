//! Preflop opening ranges by position.
//!
//! The built-in tables are simplified full-ring ranges, from roughly 15% of
//! hands under the gun to about 45% on the button. The big blind uses the
//! small blind's range.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::cards::{get_hand_notation, Card, HoleCards, Range};
use crate::error::{Result, TrainerError};
use crate::position::Position;

const UTG: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99",
    "AKs", "AQs", "AJs", "ATs",
    "AKo", "AQo",
    "KQs", "KJs",
];

const UTG1: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88",
    "AKs", "AQs", "AJs", "ATs", "A9s",
    "AKo", "AQo", "AJo",
    "KQs", "KJs", "KTs",
    "QJs",
];

const UTG2: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77",
    "AKs", "AQs", "AJs", "ATs", "A9s", "A8s",
    "AKo", "AQo", "AJo",
    "KQs", "KJs", "KTs",
    "QJs", "QTs",
    "JTs",
];

const MP: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66",
    "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A5s",
    "AKo", "AQo", "AJo", "ATo",
    "KQs", "KJs", "KTs", "K9s",
    "QJs", "QTs",
    "JTs", "J9s",
    "T9s",
];

const MP1: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55",
    "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s",
    "AKo", "AQo", "AJo", "ATo",
    "KQs", "KJs", "KTs", "K9s",
    "QJs", "QTs", "Q9s",
    "JTs", "J9s",
    "T9s", "T8s",
    "98s",
];

const CO: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22",
    "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    "AKo", "AQo", "AJo", "ATo", "A9o",
    "KQs", "KJs", "KTs", "K9s", "K8s",
    "KQo", "KJo",
    "QJs", "QTs", "Q9s",
    "JTs", "J9s", "J8s",
    "T9s", "T8s",
    "98s", "97s",
    "87s",
];

const BTN: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22",
    "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    "AKo", "AQo", "AJo", "ATo", "A9o", "A8o", "A7o", "A6o", "A5o",
    "KQs", "KJs", "KTs", "K9s", "K8s", "K7s", "K6s", "K5s",
    "KQo", "KJo", "KTo", "K9o",
    "QJs", "QTs", "Q9s", "Q8s", "Q7s",
    "QJo", "QTo",
    "JTs", "J9s", "J8s", "J7s",
    "JTo", "J9o",
    "T9s", "T8s", "T7s",
    "T9o",
    "98s", "97s", "96s",
    "98o",
    "87s", "86s",
    "76s",
    "65s",
];

/// Small blind; the big blind shares it.
const BLINDS: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22",
    "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    "AKo", "AQo", "AJo", "ATo", "A9o",
    "KQs", "KJs", "KTs", "K9s",
    "KQo", "KJo",
    "QJs", "QTs", "Q9s",
    "JTs", "J9s",
    "T9s", "T8s",
    "98s",
    "87s",
];

/// Built-in hand list for a position.
fn standard_hands(position: Position) -> &'static [&'static str] {
    match position {
        Position::Utg => UTG,
        Position::Utg1 => UTG1,
        Position::Utg2 => UTG2,
        Position::Mp => MP,
        Position::Mp1 => MP1,
        Position::Co => CO,
        Position::Btn => BTN,
        Position::Sb | Position::Bb => BLINDS,
    }
}

static STANDARD: LazyLock<OpeningRanges> = LazyLock::new(|| {
    let ranges = Position::ALL
        .iter()
        .map(|&pos| (pos, Range::from_hands(standard_hands(pos).iter().copied())))
        .collect();
    OpeningRanges { ranges }
});

/// Opening ranges keyed by position.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningRanges {
    ranges: FxHashMap<Position, Range>,
}

impl OpeningRanges {
    /// The built-in tables, built once per process.
    pub fn standard() -> &'static OpeningRanges {
        &STANDARD
    }

    /// The built-in tables with some positions replaced.
    ///
    /// Keys are position names ("UTG+1", "BTN"); values are range notation
    /// ("99+, ATs+, AQo+, KJs+").
    pub fn from_overrides(overrides: &BTreeMap<String, String>) -> Result<Self> {
        let mut ranges = Self::standard().clone();
        for (key, notation) in overrides {
            let position: Position = key
                .parse()
                .map_err(|_| TrainerError::Config(format!("unknown position {key:?} in opening_ranges")))?;
            let range = Range::from_notation(notation)?;
            log::warn!(
                "overriding {} opening range: {} classes ({:.1}% of hands)",
                position,
                range.num_classes(),
                range.coverage() * 100.0
            );
            ranges.set(position, range);
        }
        Ok(ranges)
    }

    /// Replace the range for one position.
    pub fn set(&mut self, position: Position, range: Range) {
        self.ranges.insert(position, range);
    }

    /// Range for a position, if one is defined.
    pub fn range(&self, position: Position) -> Option<&Range> {
        self.ranges.get(&position)
    }

    /// Check a canonical notation against a position's range. Unknown
    /// positions and non-canonical notation are never in range.
    pub fn contains(&self, notation: &str, position: Position) -> bool {
        self.range(position)
            .is_some_and(|range| range.contains_notation(notation))
    }

    /// Check hole cards against a position's range.
    pub fn contains_hole_cards(&self, hole_cards: &HoleCards, position: Position) -> bool {
        self.range(position)
            .is_some_and(|range| range.contains(hole_cards))
    }
}

/// Check if a hand is in the built-in opening range for a position.
pub fn is_in_opening_range(notation: &str, position: Position) -> bool {
    OpeningRanges::standard().contains(notation, position)
}

/// Whether two hole cards should be opened from a position.
pub fn should_open_raise(cards: &[Card], position: Position) -> Result<bool> {
    let notation = get_hand_notation(cards)?;
    Ok(is_in_opening_range(&notation, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn test_opening_range_lookup() {
        assert!(is_in_opening_range("AA", Position::Btn));
        assert!(!is_in_opening_range("72o", Position::Utg));
        assert!(is_in_opening_range("65s", Position::Btn));
        assert!(!is_in_opening_range("65s", Position::Co));
        assert!(is_in_opening_range("A5s", Position::Mp));
        assert!(!is_in_opening_range("A6s", Position::Mp));
    }

    #[test]
    fn test_non_canonical_notation_is_out_of_range() {
        assert!(!is_in_opening_range("KAs", Position::Btn));
        assert!(!is_in_opening_range("aa", Position::Btn));
        assert!(!is_in_opening_range("", Position::Btn));
    }

    #[test]
    fn test_table_sizes() {
        let table = OpeningRanges::standard();
        let classes = |p| table.range(p).map_or(0, Range::num_classes);
        assert_eq!(classes(Position::Utg), 14);
        assert_eq!(classes(Position::Utg1), 19);
        assert_eq!(classes(Position::Utg2), 23);
        assert_eq!(classes(Position::Mp), 30);
        assert_eq!(classes(Position::Mp1), 36);
        assert_eq!(classes(Position::Co), 49);
        assert_eq!(classes(Position::Btn), 72);
        assert_eq!(classes(Position::Sb), 46);
        assert_eq!(table.range(Position::Sb), table.range(Position::Bb));
    }

    #[test]
    fn test_ranges_widen_with_position() {
        let table = OpeningRanges::standard();
        let order = [
            Position::Utg,
            Position::Utg1,
            Position::Utg2,
            Position::Mp,
            Position::Mp1,
            Position::Co,
            Position::Btn,
        ];
        for pair in order.windows(2) {
            let (tight, wide) = (table.range(pair[0]).unwrap(), table.range(pair[1]).unwrap());
            assert!(
                tight.iter_classes().all(|hc| wide.contains_class(hc)),
                "{} range should be a subset of {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_should_open_raise() {
        let aa = parse_cards("As Ad").unwrap();
        assert!(should_open_raise(&aa, Position::Utg).unwrap());

        let trash = parse_cards("7h 2d").unwrap();
        assert!(!should_open_raise(&trash, Position::Btn).unwrap());

        assert!(should_open_raise(&parse_cards("As").unwrap(), Position::Btn).is_err());
    }

    #[test]
    fn test_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert("UTG".to_string(), "QQ+, AKs".to_string());
        let ranges = OpeningRanges::from_overrides(&overrides).unwrap();

        assert!(ranges.contains("AKs", Position::Utg));
        assert!(!ranges.contains("JJ", Position::Utg));
        assert!(ranges.contains("JJ", Position::Utg1));
        assert!(is_in_opening_range("JJ", Position::Utg));

        overrides.insert("HJ".to_string(), "AA".to_string());
        assert!(matches!(
            OpeningRanges::from_overrides(&overrides),
            Err(TrainerError::Config(_))
        ));

        let mut bad = BTreeMap::new();
        bad.insert("BTN".to_string(), "AX".to_string());
        assert!(matches!(
            OpeningRanges::from_overrides(&bad),
            Err(TrainerError::InvalidRange(_))
        ));
    }
}
