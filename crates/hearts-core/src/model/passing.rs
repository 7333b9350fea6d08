use crate::model::card::Card;
use crate::model::player::{PlayerId, PlayerPosition};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassingDirection {
    Left,
    Right,
    Across,
    /// No exchange this hand.
    #[serde(rename = "none", alias = "hold")]
    Hold,
}

impl PassingDirection {
    pub const CYCLE: [PassingDirection; 4] = [
        PassingDirection::Left,
        PassingDirection::Right,
        PassingDirection::Across,
        PassingDirection::Hold,
    ];

    /// Direction for a 1-based hand number.
    pub const fn for_hand(hand_number: u32) -> PassingDirection {
        let index = (hand_number.saturating_sub(1) % 4) as usize;
        Self::CYCLE[index]
    }

    pub const fn next(self) -> PassingDirection {
        match self {
            PassingDirection::Left => PassingDirection::Right,
            PassingDirection::Right => PassingDirection::Across,
            PassingDirection::Across => PassingDirection::Hold,
            PassingDirection::Hold => PassingDirection::Left,
        }
    }

    pub const fn requires_selection(self) -> bool {
        !matches!(self, PassingDirection::Hold)
    }

    pub const fn target(self, seat: PlayerPosition) -> PlayerPosition {
        match self {
            PassingDirection::Left => seat.next(),
            PassingDirection::Right => seat.previous(),
            PassingDirection::Across => seat.opposite(),
            PassingDirection::Hold => seat,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PassingDirection::Left => "left",
            PassingDirection::Right => "right",
            PassingDirection::Across => "across",
            PassingDirection::Hold => "none",
        }
    }
}

impl FromStr for PassingDirection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(PassingDirection::Left),
            "right" => Ok(PassingDirection::Right),
            "across" => Ok(PassingDirection::Across),
            "none" | "hold" => Ok(PassingDirection::Hold),
            other => Err(format!("unknown passing direction `{other}`")),
        }
    }
}

/// Three-card selections keyed by player, held until the exchange runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSelections {
    by_player: HashMap<PlayerId, [Card; 3]>,
}

impl PassSelections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: &PlayerId) -> Option<&[Card; 3]> {
        self.by_player.get(player)
    }

    pub fn contains(&self, player: &PlayerId) -> bool {
        self.by_player.contains_key(player)
    }

    pub fn len(&self) -> usize {
        self.by_player.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_player.is_empty()
    }

    /// Copy with `player`'s selection replaced.
    pub fn with_selection(&self, player: PlayerId, cards: [Card; 3]) -> Self {
        let mut by_player = self.by_player.clone();
        by_player.insert(player, cards);
        Self { by_player }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &[Card; 3])> {
        self.by_player.iter()
    }
}

impl FromIterator<(PlayerId, [Card; 3])> for PassSelections {
    fn from_iter<I: IntoIterator<Item = (PlayerId, [Card; 3])>>(iter: I) -> Self {
        Self {
            by_player: iter.into_iter().collect(),
        }
    }
}
