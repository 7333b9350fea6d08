use crate::error::GameError;
use crate::model::card::Card;
use crate::model::player::PlayerId;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayedCard {
    pub card: Card,
    pub player_id: PlayerId,
}

impl PlayedCard {
    pub fn new(card: Card, player_id: impl Into<PlayerId>) -> Self {
        Self {
            card,
            player_id: player_id.into(),
        }
    }
}

/// The trick in progress: zero to four plays, the first one sets the led suit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trick {
    plays: Vec<PlayedCard>,
}

impl Trick {
    pub const SIZE: usize = 4;

    pub fn new() -> Self {
        Self {
            plays: Vec::with_capacity(Self::SIZE),
        }
    }

    pub fn plays(&self) -> &[PlayedCard] {
        &self.plays
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == Self::SIZE
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|play| play.card.suit)
    }

    pub fn contains_penalty(&self) -> bool {
        self.plays.iter().any(|play| play.card.is_penalty())
    }

    pub fn push(&mut self, play: PlayedCard) -> Result<(), GameError> {
        if self.is_complete() {
            return Err(GameError::TrickFull);
        }
        self.plays.push(play);
        Ok(())
    }

    /// Cards in play order, once all four are down.
    pub fn cards(&self) -> Option<[Card; 4]> {
        match self.plays.as_slice() {
            [a, b, c, d] => Some([a.card, b.card, c.card, d.card]),
            _ => None,
        }
    }
}

impl TryFrom<Vec<PlayedCard>> for Trick {
    type Error = GameError;

    fn try_from(plays: Vec<PlayedCard>) -> Result<Self, Self::Error> {
        if plays.len() > Self::SIZE {
            return Err(GameError::TrickFull);
        }
        Ok(Self { plays })
    }
}
