//! Starting-hand strength tiers.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// Strength tier of a starting hand, 1 (premium) to 5 (trash).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandTier {
    /// AA, KK, QQ and AK.
    Premium = 1,
    /// Strong pairs and big aces.
    Strong = 2,
    /// Medium pairs, suited broadways.
    Playable = 3,
    /// Small pairs, suited aces and connectors.
    Marginal = 4,
    /// Everything else.
    Trash = 5,
}

impl HandTier {
    /// Tier number, 1-5.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Tier from its number.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(HandTier::Premium),
            2 => Some(HandTier::Strong),
            3 => Some(HandTier::Playable),
            4 => Some(HandTier::Marginal),
            5 => Some(HandTier::Trash),
            _ => None,
        }
    }

    /// Short label.
    pub fn name(&self) -> &'static str {
        match self {
            HandTier::Premium => "premium",
            HandTier::Strong => "strong",
            HandTier::Playable => "playable",
            HandTier::Marginal => "marginal",
            HandTier::Trash => "trash",
        }
    }
}

impl fmt::Display for HandTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

const TIER_1: &[&str] = &["AA", "KK", "QQ", "AKs", "AKo"];

const TIER_2: &[&str] = &["JJ", "TT", "99", "AQs", "AJs", "AQo", "KQs", "AJo"];

const TIER_3: &[&str] = &[
    "88", "77", "66", "55",
    "ATs", "A9s", "A8s",
    "KJs", "KTs", "KQo",
    "QJs", "QTs",
    "JTs",
];

const TIER_4: &[&str] = &[
    "44", "33", "22",
    "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    "ATo", "A9o",
    "K9s", "K8s",
    "KJo", "KTo",
    "Q9s", "QJo",
    "J9s", "JTo",
    "T9s", "T8s",
    "98s", "97s",
    "87s", "86s",
    "76s", "75s",
    "65s",
];

static TIERS: LazyLock<FxHashMap<&'static str, HandTier>> = LazyLock::new(|| {
    let tables = [
        (TIER_1, HandTier::Premium),
        (TIER_2, HandTier::Strong),
        (TIER_3, HandTier::Playable),
        (TIER_4, HandTier::Marginal),
    ];
    let mut tiers = FxHashMap::default();
    for (hands, tier) in tables {
        for &hand in hands {
            tiers.insert(hand, tier);
        }
    }
    tiers
});

/// Tier of a canonical starting-hand notation. Anything not in tiers 1-4,
/// including malformed notation, is trash.
pub fn get_hand_strength_tier(notation: &str) -> HandTier {
    TIERS.get(notation).copied().unwrap_or(HandTier::Trash)
}
