use crate::error::GameError;
use crate::model::card::Card;
use crate::model::passing::{PassSelections, PassingDirection};
use crate::model::player::{Player, PlayerId, PlayerPosition};
use crate::model::suit::Suit;
use crate::model::trick::Trick;
use serde::{Deserialize, Serialize};

pub const TRICKS_PER_HAND: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    Passing,
    Playing,
    HandComplete,
    GameOver,
}

/// Full session snapshot. Owned by the caller; rule functions borrow it and hand back a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub players: [Player; 4],
    pub current_player: PlayerPosition,
    pub dealer: PlayerPosition,
    pub phase: GamePhase,
    pub passing_direction: PassingDirection,
    /// Starts at 1.
    pub hand_number: u32,
    pub current_trick: Trick,
    pub hearts_broken: bool,
    pub selected_cards_for_passing: PassSelections,
}

impl GameState {
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player.index()]
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self, seat: PlayerPosition) -> &Player {
        &self.players[seat.index()]
    }

    pub fn seat_of(&self, id: &PlayerId) -> Result<PlayerPosition, GameError> {
        self.players
            .iter()
            .position(|player| &player.id == id)
            .and_then(PlayerPosition::from_index)
            .ok_or_else(|| GameError::UnknownPlayer(id.clone()))
    }

    pub fn player_by_id(&self, id: &PlayerId) -> Result<&Player, GameError> {
        self.seat_of(id).map(|seat| self.player(seat))
    }

    pub fn is_player_turn(&self, id: &PlayerId) -> bool {
        &self.current_player().id == id
    }

    /// Tricks completed so far this hand, across every player.
    pub fn tricks_played(&self) -> usize {
        self.players.iter().map(|p| p.tricks_taken.len()).sum()
    }

    pub fn is_first_trick(&self) -> bool {
        self.tricks_played() == 0
    }

    pub fn led_suit(&self) -> Option<Suit> {
        self.current_trick.lead_suit()
    }

    /// Cards held, captured, or on the table. 52 in every reachable state.
    pub fn card_count(&self) -> usize {
        self.players
            .iter()
            .map(|p| p.hand.len() + p.captured_cards())
            .sum::<usize>()
            + self.current_trick.len()
    }

    pub fn hand_points(&self) -> [i32; 4] {
        std::array::from_fn(|i| self.players[i].hand_points())
    }

    pub fn total_scores(&self) -> [i32; 4] {
        std::array::from_fn(|i| self.players[i].total_score)
    }
}

pub fn find_two_of_clubs_holder(players: &[Player; 4]) -> Option<PlayerPosition> {
    players
        .iter()
        .position(|player| player.hand.contains(Card::TWO_OF_CLUBS))
        .and_then(PlayerPosition::from_index)
}
