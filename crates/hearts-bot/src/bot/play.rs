use super::{EARLY_HAND_TRICKS, LATE_HAND_TRICKS, format_cards, highest, lowest};
use hearts_core::GameError;
use hearts_core::model::card::Card;
use hearts_core::model::hand::Hand;
use hearts_core::model::rank::Rank;
use hearts_core::model::state::GameState;
use hearts_core::model::suit::Suit;
use hearts_core::model::trick::Trick;
use hearts_core::rules::validation::get_valid_plays;
use std::cmp::Reverse;
use tracing::{Level, event};

const QUEEN_OF_SPADES_RISK: i32 = 50;
const HEART_RANK_MULT: i32 = 2;
const LOW_SPADE_MAX: u8 = 11;
const LOW_HEART_MAX: u8 = 7;
const HIGH_HEART_MIN: u8 = 10;

/// Risk of playing `card`; lower is safer.
pub fn evaluate_card_safety(card: Card) -> i32 {
    let value = i32::from(card.value());
    let mut risk = 0;
    if card.is_queen_of_spades() {
        risk += QUEEN_OF_SPADES_RISK;
    }
    if card.is_heart() {
        risk += value * HEART_RANK_MULT;
    }
    if card.is_high() {
        risk += value;
    }
    risk
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayDecision {
    pub card: Card,
    pub reason: &'static str,
}

impl PlayDecision {
    const fn new(card: Card, reason: &'static str) -> Self {
        Self { card, reason }
    }
}

pub fn select_card_to_lead(
    hand: &Hand,
    valid: &[Card],
    state: &GameState,
) -> Result<Card, GameError> {
    let first = *valid.first().ok_or(GameError::NoValidPlays)?;
    if valid.len() == 1 {
        return Ok(first);
    }
    Ok(lead(hand, valid, state).card)
}

pub fn select_card_to_follow(
    hand: &Hand,
    valid: &[Card],
    state: &GameState,
) -> Result<Card, GameError> {
    let first = *valid.first().ok_or(GameError::NoValidPlays)?;
    if valid.len() == 1 {
        return Ok(first);
    }
    Ok(follow(hand, valid, state).card)
}

pub fn select_card_to_slough(valid: &[Card], state: &GameState) -> Result<Card, GameError> {
    let first = *valid.first().ok_or(GameError::NoValidPlays)?;
    if valid.len() == 1 {
        return Ok(first);
    }
    Ok(slough(valid, &state.current_trick).card)
}

/// Always returns a member of `get_valid_plays(hand, state)`.
pub fn select_ai_card_to_play(hand: &Hand, state: &GameState) -> Result<Card, GameError> {
    decide(hand, state).map(|decision| decision.card)
}

pub struct PlayPlanner;

impl PlayPlanner {
    pub fn choose(hand: &Hand, state: &GameState) -> Result<Card, GameError> {
        let decision = decide(hand, state)?;
        event!(
            target: "hearts_bot::play_decision",
            Level::DEBUG,
            seat = %state.current_player,
            tricks_played = state.tricks_played(),
            trick_len = state.current_trick.len(),
            hearts_broken = state.hearts_broken,
            card = %decision.card,
            reason = decision.reason,
        );
        Ok(decision.card)
    }

    pub fn decide(hand: &Hand, state: &GameState) -> Result<PlayDecision, GameError> {
        decide(hand, state)
    }
}

fn decide(hand: &Hand, state: &GameState) -> Result<PlayDecision, GameError> {
    let valid = get_valid_plays(hand, state);
    let first = *valid.first().ok_or(GameError::NoValidPlays)?;
    if valid.len() == 1 {
        return Ok(PlayDecision::new(first, "only_legal"));
    }

    let decision = match state.led_suit() {
        None => lead(hand, &valid, state),
        Some(led) if hand.has_suit(led) => follow(hand, &valid, state),
        Some(_) => slough(&valid, &state.current_trick),
    };
    event!(
        target: "hearts_bot::play_decision",
        Level::TRACE,
        legal = %format_cards(&valid),
        card = %decision.card,
    );
    Ok(decision)
}

fn lead(hand: &Hand, valid: &[Card], state: &GameState) -> PlayDecision {
    let tricks_played = state.tricks_played();
    let early = tricks_played < EARLY_HAND_TRICKS;
    let late = tricks_played >= LATE_HAND_TRICKS;

    let (hearts, others): (Vec<Card>, Vec<Card>) = valid.iter().partition(|card| card.is_heart());

    if !others.is_empty() {
        if early && !hand.has_queen_of_spades() {
            let low_spades: Vec<Card> = others
                .iter()
                .copied()
                .filter(|card| card.suit == Suit::Spades && card.value() <= LOW_SPADE_MAX)
                .collect();
            if let Some(card) = lowest(&low_spades) {
                return PlayDecision::new(card, "lead_flush_spades");
            }
        }

        if !late {
            let very_low = others
                .iter()
                .copied()
                .filter(|card| card.is_very_low())
                .min_by_key(|card| Reverse(hand.count_suit(card.suit)));
            if let Some(card) = very_low {
                return PlayDecision::new(card, "lead_very_low_long_suit");
            }
        }

        let best = others
            .iter()
            .copied()
            .min_by_key(|card| (card.is_high(), Reverse(hand.count_suit(card.suit)), card.value()));
        if let Some(card) = best {
            return PlayDecision::new(card, "lead_long_suit_low");
        }
    }

    if late {
        let mut low_hearts: Vec<Card> = hearts
            .iter()
            .copied()
            .filter(|card| card.value() <= LOW_HEART_MAX)
            .collect();
        low_hearts.sort_by_key(|card| card.value());
        if let Some(&card) = low_hearts.get(1).or(low_hearts.first()) {
            return PlayDecision::new(card, "lead_low_heart_late");
        }
    }

    match highest(&hearts) {
        Some(card) => PlayDecision::new(card, "lead_highest_heart"),
        None => PlayDecision::new(valid[0], "lead_fallback"),
    }
}

fn follow(hand: &Hand, valid: &[Card], state: &GameState) -> PlayDecision {
    let Some(led) = state.led_suit() else {
        return lead(hand, valid, state);
    };

    let plays = state.current_trick.plays();
    let highest_in_trick = plays
        .iter()
        .filter(|play| play.card.suit == led)
        .map(|play| play.card.value())
        .max()
        .unwrap_or(0);
    let trick_is_dangerous = plays.iter().any(|play| play.card.is_penalty());

    if state.is_first_trick() && !state.current_trick.is_complete() {
        if let Some(card) = highest(valid) {
            return PlayDecision::new(card, "follow_first_trick_high");
        }
    }

    let (winning, losing): (Vec<Card>, Vec<Card>) = valid
        .iter()
        .partition(|card| card.value() > highest_in_trick);
    let late = state.tricks_played() >= LATE_HAND_TRICKS;
    let others: Vec<Card> = valid.iter().copied().filter(|card| !card.is_very_low()).collect();

    if !losing.is_empty() {
        let losing_non_low: Vec<Card> = losing
            .iter()
            .copied()
            .filter(|card| !card.is_very_low())
            .collect();
        if let Some(card) = highest(&losing_non_low) {
            return PlayDecision::new(card, "follow_undershoot");
        }
        if late || losing.len() == valid.len() {
            if let Some(card) = highest(&losing) {
                return PlayDecision::new(card, "follow_undershoot_low");
            }
        }
    }

    if !winning.is_empty() {
        if trick_is_dangerous && !others.is_empty() {
            let winning_non_low: Vec<Card> = winning
                .iter()
                .copied()
                .filter(|card| !card.is_very_low())
                .collect();
            if let Some(card) = lowest(&winning_non_low) {
                return PlayDecision::new(card, "follow_win_cheap");
            }
        }
        if let Some(card) = lowest(&winning) {
            return PlayDecision::new(card, "follow_win_lowest");
        }
    }

    match highest(&others) {
        Some(card) => PlayDecision::new(card, "follow_fallback_high"),
        None => PlayDecision::new(valid[0], "follow_fallback"),
    }
}

fn slough(valid: &[Card], trick: &Trick) -> PlayDecision {
    if let Some(&queen) = valid.iter().find(|card| card.is_queen_of_spades()) {
        return PlayDecision::new(queen, "slough_queen");
    }

    let last_to_play = trick.len() == Trick::SIZE - 1;
    let hearts: Vec<Card> = valid.iter().copied().filter(|card| card.is_heart()).collect();

    let ace_of_hearts = hearts.iter().copied().find(|card| card.rank == Rank::Ace);
    if let (Some(ace), true) = (ace_of_hearts, last_to_play) {
        return PlayDecision::new(ace, "slough_ace_of_hearts_last");
    }

    let high_hearts: Vec<Card> = hearts
        .iter()
        .copied()
        .filter(|card| card.value() >= HIGH_HEART_MIN)
        .collect();
    if let Some(card) = highest(&high_hearts) {
        return PlayDecision::new(card, "slough_high_heart");
    }

    let high_cards: Vec<Card> = valid.iter().copied().filter(|card| card.is_high()).collect();
    if !high_cards.is_empty() {
        let high_others: Vec<Card> = high_cards
            .iter()
            .copied()
            .filter(|card| !card.is_heart())
            .collect();
        if let Some(card) = highest(&high_others).or_else(|| highest(&high_cards)) {
            return PlayDecision::new(card, "slough_high_card");
        }
    }

    let mid_hearts: Vec<Card> = hearts
        .iter()
        .copied()
        .filter(|card| card.value() > 4)
        .collect();
    if let Some(card) = highest(&mid_hearts) {
        return PlayDecision::new(card, "slough_heart");
    }

    let non_very_low: Vec<Card> = valid.iter().copied().filter(|card| card.value() > 4).collect();
    if let Some(card) = highest(&non_very_low) {
        return PlayDecision::new(card, "slough_highest");
    }

    PlayDecision::new(highest(valid).unwrap_or(valid[0]), "slough_last_resort")
}
