mod heuristic;

pub use heuristic::HeuristicPolicy;

use crate::bot::BotDifficulty;
use hearts_core::GameError;
use hearts_core::model::card::Card;
use hearts_core::model::hand::Hand;
use hearts_core::model::player::PlayerPosition;
use hearts_core::model::state::GameState;

/// What a policy sees when asked to act for `seat`.
pub struct PolicyContext<'a> {
    pub seat: PlayerPosition,
    pub hand: &'a Hand,
    pub state: &'a GameState,
}

impl<'a> PolicyContext<'a> {
    pub fn for_seat(state: &'a GameState, seat: PlayerPosition) -> Self {
        Self {
            seat,
            hand: &state.player(seat).hand,
            state,
        }
    }
}

/// Decision interface for computer-controlled seats.
pub trait Policy: Send {
    /// Three cards to pass, or `None` when this hand holds.
    fn choose_pass(&mut self, ctx: &PolicyContext) -> Result<Option<[Card; 3]>, GameError>;

    /// One legal card for the current trick.
    fn choose_play(&mut self, ctx: &PolicyContext) -> Result<Card, GameError>;
}

pub fn policy_for(difficulty: BotDifficulty) -> Box<dyn Policy> {
    Box::new(HeuristicPolicy::new(difficulty))
}
