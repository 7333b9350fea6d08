use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::state::GameState;
use crate::model::suit::Suit;

/// Penalty cards stay out of the first trick unless the hand holds nothing else.
pub fn is_valid_first_trick_play(card: Card, hand: &Hand) -> bool {
    !card.is_penalty() || hand.has_only_penalty_cards()
}

pub fn can_lead_hearts(hand: &Hand, hearts_broken: bool) -> bool {
    hearts_broken || hand.has_only_hearts()
}

/// Legal plays for `hand` against the trick in `state`. Never empty for a non-empty hand.
pub fn get_valid_plays(hand: &Hand, state: &GameState) -> Vec<Card> {
    let first_trick = state.is_first_trick();

    let Some(led) = state.led_suit() else {
        return valid_leads(hand, first_trick, state.hearts_broken);
    };

    if hand.has_suit(led) {
        return following(hand, led);
    }

    if first_trick {
        return hand
            .iter()
            .copied()
            .filter(|&card| is_valid_first_trick_play(card, hand))
            .collect();
    }
    hand.cards().to_vec()
}

fn valid_leads(hand: &Hand, first_trick: bool, hearts_broken: bool) -> Vec<Card> {
    if first_trick && hand.contains(Card::TWO_OF_CLUBS) {
        return vec![Card::TWO_OF_CLUBS];
    }

    let hearts_open = can_lead_hearts(hand, hearts_broken);
    let leads: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|&card| !first_trick || is_valid_first_trick_play(card, hand))
        .filter(|&card| !card.is_heart() || hearts_open)
        .collect();

    if leads.is_empty() {
        hand.cards().to_vec()
    } else {
        leads
    }
}

fn following(hand: &Hand, led: Suit) -> Vec<Card> {
    hand.iter().copied().filter(|card| card.suit == led).collect()
}

pub fn is_valid_play(card: Card, hand: &Hand, state: &GameState) -> bool {
    get_valid_plays(hand, state).contains(&card)
}

/// A heart sloughed onto a trick led in another suit breaks hearts; leading one never does.
pub fn would_break_hearts(card: Card, state: &GameState) -> bool {
    card.is_heart() && matches!(state.led_suit(), Some(led) if led != Suit::Hearts)
}
