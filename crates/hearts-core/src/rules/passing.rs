use crate::error::{GameError, SelectionProblem};
use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::passing::PassSelections;
use crate::model::player::{PlayerId, PlayerPosition};
use crate::model::state::{GamePhase, GameState, find_two_of_clubs_holder};

pub const PASS_SIZE: usize = 3;

/// Exactly three distinct cards, all currently in `hand`.
pub fn validate_selection(cards: &[Card], hand: &Hand) -> Result<[Card; 3], SelectionProblem> {
    let selection: [Card; 3] = cards
        .try_into()
        .map_err(|_| SelectionProblem::WrongCount(cards.len()))?;

    for (i, card) in selection.iter().enumerate() {
        if selection[..i].contains(card) {
            return Err(SelectionProblem::DuplicateCard(*card));
        }
        if !hand.contains(*card) {
            return Err(SelectionProblem::CardNotInHand(*card));
        }
    }
    Ok(selection)
}

/// Records a selection without touching any hand.
pub fn select_cards_for_passing(
    state: &GameState,
    player_id: &PlayerId,
    cards: &[Card],
) -> Result<GameState, GameError> {
    let player = state.player_by_id(player_id)?;
    let selection =
        validate_selection(cards, &player.hand).map_err(GameError::InvalidPassingSelection)?;

    let mut next = state.clone();
    next.selected_cards_for_passing = state
        .selected_cards_for_passing
        .with_selection(player_id.clone(), selection);
    Ok(next)
}

pub fn all_players_have_selected(state: &GameState) -> bool {
    state.players.iter().all(|player| {
        state
            .selected_cards_for_passing
            .get(&player.id)
            .is_some_and(|cards| validate_selection(cards, &player.hand).is_ok())
    })
}

/// Runs the four-way exchange in one step and moves play on. With no passing this hand the
/// state simply enters play.
pub fn execute_card_passing(state: &GameState) -> Result<GameState, GameError> {
    let mut next = state.clone();
    next.selected_cards_for_passing = PassSelections::new();
    next.phase = GamePhase::Playing;

    let direction = state.passing_direction;
    if !direction.requires_selection() {
        return Ok(next);
    }
    if !all_players_have_selected(state) {
        return Err(GameError::IncompletePassing);
    }

    let mut outgoing = [[Card::TWO_OF_CLUBS; PASS_SIZE]; 4];
    for (slot, player) in outgoing.iter_mut().zip(state.players.iter()) {
        *slot = *state
            .selected_cards_for_passing
            .get(&player.id)
            .ok_or(GameError::IncompletePassing)?;
    }

    for seat in PlayerPosition::LOOP {
        let hand = &mut next.players[seat.index()].hand;
        for card in outgoing[seat.index()] {
            hand.remove(card);
        }
    }
    for seat in PlayerPosition::LOOP {
        let target = direction.target(seat);
        let hand = &mut next.players[target.index()].hand;
        for card in outgoing[seat.index()] {
            hand.add(card);
        }
    }

    if let Some(holder) = find_two_of_clubs_holder(&next.players) {
        next.current_player = holder;
    }
    Ok(next)
}
