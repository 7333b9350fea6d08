use crate::error::GameError;
use crate::model::player::{Player, PlayerId};
use crate::model::state::{GamePhase, GameState};

pub const GAME_OVER_THRESHOLD: i32 = 100;

pub fn should_game_end(players: &[Player]) -> bool {
    players
        .iter()
        .any(|player| player.total_score >= GAME_OVER_THRESHOLD)
}

/// Lowest total wins; ties go to the earliest seat.
pub fn determine_winner(players: &[Player]) -> Result<PlayerId, GameError> {
    let (first, rest) = players.split_first().ok_or(GameError::EmptyPlayerSet)?;
    let winner = rest.iter().fold(first, |best, player| {
        if player.total_score < best.total_score {
            player
        } else {
            best
        }
    });
    Ok(winner.id.clone())
}

pub fn transition_to_game_over(mut state: GameState) -> GameState {
    state.phase = GamePhase::GameOver;
    state
}

pub fn check_and_transition_to_game_over(state: GameState) -> GameState {
    if should_game_end(&state.players) {
        transition_to_game_over(state)
    } else {
        state
    }
}
