//! Training scenarios: the situation a player is asked to act in.
//!
//! A [`Scenario`] is read-only input to grading. It is authored or generated
//! elsewhere and usually arrives as JSON, so every field except the hero's
//! position and cards has a serde default.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{parse_cards, Card};
use crate::error::Result;
use crate::position::Position;

/// Possible poker actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Pass with nothing to call.
    Check,
    /// Match the current bet.
    Call,
    /// First bet on a postflop street.
    Bet,
    /// Raise the current bet. Opening the pot preflop is a raise.
    Raise,
    /// Put all chips in.
    AllIn,
}

impl Action {
    /// All actions.
    pub const ALL: [Action; 6] = [
        Action::Fold,
        Action::Check,
        Action::Call,
        Action::Bet,
        Action::Raise,
        Action::AllIn,
    ];

    /// Lowercase wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call => "call",
            Action::Bet => "bet",
            Action::Raise => "raise",
            Action::AllIn => "all_in",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Betting rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    /// Before the flop.
    #[default]
    Preflop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
}

impl Street {
    /// Street implied by the number of board cards.
    pub fn from_board_len(n: usize) -> Option<Street> {
        match n {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }

    /// Number of board cards on this street.
    pub fn board_cards(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Difficulty label attached to authored scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// An action taken by a player before the hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAction {
    /// Who acted.
    pub position: Position,
    /// What they did.
    pub action: Action,
    /// Bet or raise size in big blinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl PlayerAction {
    /// Create an action without an amount.
    pub fn new(position: Position, action: Action) -> Self {
        Self {
            position,
            action,
            amount: None,
        }
    }

    /// Create an action with an amount in big blinds.
    pub fn with_amount(position: Position, action: Action, amount: f64) -> Self {
        Self {
            position,
            action,
            amount: Some(amount),
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount {
            Some(amount) => write!(f, "{} {} {}BB", self.position, self.action, amount),
            None => write!(f, "{} {}", self.position, self.action),
        }
    }
}

fn default_pot_size() -> f64 {
    1.5
}

/// A decision point presented to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Library identifier, if any.
    #[serde(default)]
    pub id: Option<u32>,
    /// Short title.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Betting round.
    #[serde(default)]
    pub street: Street,
    /// Hero's seat.
    pub hero_position: Position,
    /// Hero's hole cards. Grading requires exactly two.
    pub hero_cards: Vec<Card>,
    /// Community cards, empty preflop.
    #[serde(default)]
    pub board_cards: Vec<Card>,
    /// Actions before the hero, in order.
    #[serde(default)]
    pub action_history: Vec<PlayerAction>,
    /// Pot in big blinds.
    #[serde(default = "default_pot_size")]
    pub pot_size: f64,
    /// Amount the hero must call, in big blinds.
    #[serde(default)]
    pub current_bet: f64,
    /// Legal actions. Empty means "derive from the bet to call".
    #[serde(default)]
    pub available_actions: Vec<Action>,
    /// Difficulty label.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Topic tags such as "pot_odds".
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Scenario {
    /// Build a scenario from card notation. The street is inferred from the
    /// number of board cards; an unusual count falls back to preflop and
    /// leaves the scenario invalid.
    pub fn simple(
        hero_position: Position,
        hero_cards: &str,
        board_cards: &str,
        pot_size: f64,
        current_bet: f64,
    ) -> Result<Self> {
        let hero_cards = parse_cards(hero_cards)?;
        let board_cards = parse_cards(board_cards)?;
        let street = Street::from_board_len(board_cards.len()).unwrap_or_default();

        Ok(Self {
            id: None,
            name: String::new(),
            description: String::new(),
            street,
            hero_position,
            hero_cards,
            board_cards,
            action_history: Vec::new(),
            pot_size,
            current_bet,
            available_actions: Self::default_actions(current_bet),
            difficulty: Difficulty::default(),
            tags: Vec::new(),
        })
    }

    /// Add a prior action.
    pub fn with_action(mut self, action: PlayerAction) -> Self {
        self.action_history.push(action);
        self
    }

    /// Actions normally open to a player given the bet to call: fold, then
    /// check or call, then raise.
    pub fn default_actions(current_bet: f64) -> Vec<Action> {
        if current_bet == 0.0 {
            vec![Action::Fold, Action::Check, Action::Raise]
        } else {
            vec![Action::Fold, Action::Call, Action::Raise]
        }
    }

    /// The legal actions, derived from the bet to call when none were given.
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.available_actions.is_empty() {
            Self::default_actions(self.current_bet)
        } else {
            self.available_actions.clone()
        }
    }

    /// True when nobody has acted and there is nothing to call.
    pub fn is_opening(&self) -> bool {
        self.action_history.is_empty() && self.current_bet == 0.0
    }

    /// Two hero cards and a board that matches the street.
    pub fn is_valid(&self) -> bool {
        self.hero_cards.len() == 2 && self.board_cards.len() == self.street.board_cards()
    }

    /// Human-readable description of the situation.
    pub fn description_text(&self) -> String {
        let join = |cards: &[Card]| {
            cards
                .iter()
                .map(Card::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut lines = vec![format!("Position: {}", self.hero_position.full_name())];
        if !self.hero_cards.is_empty() {
            lines.push(format!("Your hand: {}", join(&self.hero_cards)));
        }
        if !self.board_cards.is_empty() {
            lines.push(format!("Board: {}", join(&self.board_cards)));
        }
        lines.push(format!("Pot: {}BB", self.pot_size));
        if self.current_bet > 0.0 {
            lines.push(format!("Bet to call: {}BB", self.current_bet));
        }

        lines.push("\nAction before you:".to_string());
        if self.action_history.is_empty() {
            lines.push("  (You are first to act)".to_string());
        } else {
            lines.extend(self.action_history.iter().map(|a| format!("  {}", a)));
        }

        lines.join("\n")
    }
}
