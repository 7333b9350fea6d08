mod pass;
mod play;

pub use pass::{PassPlanner, evaluate_card_danger, select_ai_cards_to_pass};
pub use play::{
    PlayDecision, PlayPlanner, evaluate_card_safety, select_ai_card_to_play, select_card_to_follow,
    select_card_to_lead, select_card_to_slough,
};

use hearts_core::model::card::Card;
use std::fmt;
use std::str::FromStr;

/// Fewer tricks than this played counts as the early hand.
pub(crate) const EARLY_HAND_TRICKS: usize = 4;
/// From this many tricks played the hand is in its late stage.
pub(crate) const LATE_HAND_TRICKS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BotDifficulty {
    Easy,
    #[default]
    Normal,
}

impl BotDifficulty {
    pub const fn as_str(self) -> &'static str {
        match self {
            BotDifficulty::Easy => "easy",
            BotDifficulty::Normal => "normal",
        }
    }
}

impl fmt::Display for BotDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotDifficulty {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(BotDifficulty::Easy),
            "normal" => Ok(BotDifficulty::Normal),
            other => Err(format!("unknown bot difficulty '{other}'")),
        }
    }
}

/// First card with the highest value; later equal cards never displace it.
pub(crate) fn highest(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .copied()
        .reduce(|best, card| if card.value() > best.value() { card } else { best })
}

/// First card with the lowest value.
pub(crate) fn lowest(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .copied()
        .reduce(|best, card| if card.value() < best.value() { card } else { best })
}

pub(crate) fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
