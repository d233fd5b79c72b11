//! Seats at a 9-handed table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TrainerError};

/// Position at a 9-handed table, in preflop action order.
///
/// The discriminant is the act order, 1 (earliest) through 9. The blinds
/// come last: they act last preflop and first after the flop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Position {
    /// Under the gun.
    #[serde(rename = "UTG")]
    Utg = 1,
    /// Under the gun +1.
    #[serde(rename = "UTG+1", alias = "UTG1")]
    Utg1 = 2,
    /// Under the gun +2.
    #[serde(rename = "UTG+2", alias = "UTG2")]
    Utg2 = 3,
    /// Middle position.
    #[serde(rename = "MP")]
    Mp = 4,
    /// Middle position +1.
    #[serde(rename = "MP+1", alias = "MP1")]
    Mp1 = 5,
    /// Cutoff.
    #[serde(rename = "CO")]
    Co = 6,
    /// Button.
    #[serde(rename = "BTN")]
    Btn = 7,
    /// Small blind.
    #[serde(rename = "SB")]
    Sb = 8,
    /// Big blind.
    #[serde(rename = "BB")]
    Bb = 9,
}

/// Coarse grouping of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionCategory {
    /// UTG through UTG+2.
    Early,
    /// MP and MP+1.
    Middle,
    /// Cutoff and button.
    Late,
    /// Small and big blind.
    Blind,
}

impl PositionCategory {
    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            PositionCategory::Early => "early",
            PositionCategory::Middle => "middle",
            PositionCategory::Late => "late",
            PositionCategory::Blind => "blind",
        }
    }
}

impl fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Position {
    /// All positions in act order.
    pub const ALL: [Position; 9] = [
        Position::Utg,
        Position::Utg1,
        Position::Utg2,
        Position::Mp,
        Position::Mp1,
        Position::Co,
        Position::Btn,
        Position::Sb,
        Position::Bb,
    ];

    /// Get position from its act order (1-9).
    pub fn from_order(order: u8) -> Option<Self> {
        match order {
            1..=9 => Some(Self::ALL[order as usize - 1]),
            _ => None,
        }
    }

    /// Act order, 1 (earliest) through 9.
    pub fn order(&self) -> u8 {
        *self as u8
    }

    /// Short name used in notation and tables.
    pub fn abbr(&self) -> &'static str {
        match self {
            Position::Utg => "UTG",
            Position::Utg1 => "UTG+1",
            Position::Utg2 => "UTG+2",
            Position::Mp => "MP",
            Position::Mp1 => "MP+1",
            Position::Co => "CO",
            Position::Btn => "BTN",
            Position::Sb => "SB",
            Position::Bb => "BB",
        }
    }

    /// Long descriptive name.
    pub fn full_name(&self) -> &'static str {
        match self {
            Position::Utg => "Under the Gun",
            Position::Utg1 => "Under the Gun +1",
            Position::Utg2 => "Under the Gun +2",
            Position::Mp => "Middle Position",
            Position::Mp1 => "Middle Position +1",
            Position::Co => "Cutoff",
            Position::Btn => "Button",
            Position::Sb => "Small Blind",
            Position::Bb => "Big Blind",
        }
    }

    /// Position category.
    pub fn category(&self) -> PositionCategory {
        match self {
            Position::Utg | Position::Utg1 | Position::Utg2 => PositionCategory::Early,
            Position::Mp | Position::Mp1 => PositionCategory::Middle,
            Position::Co | Position::Btn => PositionCategory::Late,
            Position::Sb | Position::Bb => PositionCategory::Blind,
        }
    }

    /// Check if this is an early position.
    pub fn is_early(&self) -> bool {
        self.category() == PositionCategory::Early
    }

    /// Check if this is a middle position.
    pub fn is_middle(&self) -> bool {
        self.category() == PositionCategory::Middle
    }

    /// Check if this is a late position.
    pub fn is_late(&self) -> bool {
        self.category() == PositionCategory::Late
    }

    /// Check if this is a blind position.
    pub fn is_blind(&self) -> bool {
        self.category() == PositionCategory::Blind
    }

    /// Relative positional advantage, 0.0 (UTG) to 1.0 (button).
    ///
    /// The blinds score low: they are out of position for the rest of the
    /// hand. The big blind edges the small blind by closing preflop action.
    pub fn strength(&self) -> f64 {
        match self {
            Position::Utg => 0.0,
            Position::Utg1 => 0.15,
            Position::Utg2 => 0.25,
            Position::Mp => 0.35,
            Position::Mp1 => 0.50,
            Position::Co => 0.70,
            Position::Btn => 1.0,
            Position::Sb => 0.20,
            Position::Bb => 0.30,
        }
    }
}

/// Number of seats between two positions in act order.
pub fn positions_between(pos1: Position, pos2: Position) -> u8 {
    pos1.order().abs_diff(pos2.order())
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbr())
    }
}

/// Parse a position from its abbreviation ("UTG+1") or the enum-style
/// name without the plus ("UTG1"). Case-insensitive.
impl FromStr for Position {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        let compact = upper.replace('+', "");
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.abbr().replace('+', "") == compact)
            .ok_or_else(|| TrainerError::InvalidNotation(format!("position: {s:?}")))
    }
}
