use crate::model::card::Card;
use crate::model::passing::{PassSelections, PassingDirection};
use crate::model::player::{Player, PlayerId, PlayerPosition};
use crate::model::state::{GamePhase, GameState};
use crate::model::trick::{PlayedCard, Trick};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire form of [`GameState`]. Passing selections are flattened to an ordered list of
/// `(player, cards)` pairs in seat order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub players: [Player; 4],
    pub current_player_index: usize,
    pub dealer_index: usize,
    pub phase: GamePhase,
    pub passing_direction: PassingDirection,
    pub hand_number: u32,
    pub current_trick: Vec<PlayedCard>,
    pub hearts_broken: bool,
    pub selected_cards_for_passing: Vec<(PlayerId, [Card; 3])>,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("saved game is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("saved game storage failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("saved game is inconsistent: {0}")]
    Corrupt(String),
}

impl SavedGame {
    pub fn capture(state: &GameState) -> Self {
        let selected_cards_for_passing = state
            .players
            .iter()
            .filter_map(|player| {
                state
                    .selected_cards_for_passing
                    .get(&player.id)
                    .map(|cards| (player.id.clone(), *cards))
            })
            .collect();

        SavedGame {
            players: state.players.clone(),
            current_player_index: state.current_player.index(),
            dealer_index: state.dealer.index(),
            phase: state.phase,
            passing_direction: state.passing_direction,
            hand_number: state.hand_number,
            current_trick: state.current_trick.plays().to_vec(),
            hearts_broken: state.hearts_broken,
            selected_cards_for_passing,
        }
    }

    pub fn restore(self) -> Result<GameState, PersistenceError> {
        let seat = |index: usize, field: &str| {
            PlayerPosition::from_index(index)
                .ok_or_else(|| PersistenceError::Corrupt(format!("{field} {index} out of range")))
        };
        let current_player = seat(self.current_player_index, "currentPlayerIndex")?;
        let dealer = seat(self.dealer_index, "dealerIndex")?;

        let current_trick = Trick::try_from(self.current_trick)
            .map_err(|err| PersistenceError::Corrupt(err.to_string()))?;

        for (id, _) in &self.selected_cards_for_passing {
            if !self.players.iter().any(|player| &player.id == id) {
                return Err(PersistenceError::Corrupt(format!(
                    "passing selection for unknown player `{id}`"
                )));
            }
        }
        let selected_cards_for_passing: PassSelections =
            self.selected_cards_for_passing.into_iter().collect();

        Ok(GameState {
            players: self.players,
            current_player,
            dealer,
            phase: self.phase,
            passing_direction: self.passing_direction,
            hand_number: self.hand_number,
            current_trick,
            hearts_broken: self.hearts_broken,
            selected_cards_for_passing,
        })
    }
}

pub fn serialize_game_state(state: &GameState) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(&SavedGame::capture(state))?)
}

pub fn deserialize_game_state(json: &str) -> Result<GameState, PersistenceError> {
    let saved: SavedGame = serde_json::from_str(json)?;
    saved.restore()
}
