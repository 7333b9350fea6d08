use crate::error::GameError;
use crate::model::card::Card;
use crate::model::player::PlayerId;
use crate::model::state::{GamePhase, GameState, TRICKS_PER_HAND};
use crate::model::trick::{PlayedCard, Trick};
use crate::rules::validation::would_break_hearts;

/// Appends a play to the current trick. Legality and turn order are the caller's concern.
pub fn add_card_to_trick(
    state: &GameState,
    card: Card,
    player_id: &PlayerId,
) -> Result<GameState, GameError> {
    state.seat_of(player_id)?;

    let mut next = state.clone();
    next.hearts_broken = state.hearts_broken || would_break_hearts(card, state);
    next.current_trick
        .push(PlayedCard::new(card, player_id.clone()))?;
    Ok(next)
}

/// Highest card of the led suit wins; off-suit cards never do.
pub fn determine_trick_winner(trick: &[PlayedCard]) -> Result<PlayerId, GameError> {
    let [lead, rest @ ..] = trick else {
        return Err(GameError::MalformedTrick { len: 0 });
    };
    if trick.len() != Trick::SIZE {
        return Err(GameError::MalformedTrick { len: trick.len() });
    }

    let led = lead.card.suit;
    let winner = rest.iter().fold(lead, |best, play| {
        if play.card.suit == led && play.card.value() > best.card.value() {
            play
        } else {
            best
        }
    });
    Ok(winner.player_id.clone())
}

pub fn is_hand_complete(state: &GameState) -> bool {
    state.tricks_played() == TRICKS_PER_HAND
}

/// Awards the complete trick to its winner, who leads next.
pub fn resolve_trick(state: &GameState) -> Result<GameState, GameError> {
    let plays = state.current_trick.plays();
    let cards = state
        .current_trick
        .cards()
        .ok_or(GameError::MalformedTrick { len: plays.len() })?;
    let winner_id = determine_trick_winner(plays)?;
    let winner = state.seat_of(&winner_id)?;

    let broke_hearts = plays.iter().any(|play| {
        play.card.is_heart() && state.led_suit().is_some_and(|led| !led.is_heart())
    });

    let mut next = state.clone();
    next.players[winner.index()].tricks_taken.push(cards);
    next.current_player = winner;
    next.current_trick = Trick::new();
    next.hearts_broken = state.hearts_broken || broke_hearts;

    if is_hand_complete(&next) {
        next.phase = GamePhase::HandComplete;
    }
    Ok(next)
}
