use super::format_cards;
use hearts_core::GameError;
use hearts_core::model::card::Card;
use hearts_core::model::hand::Hand;
use hearts_core::model::passing::PassingDirection;
use hearts_core::model::rank::Rank;
use hearts_core::model::suit::Suit;
use hearts_core::rules::passing::PASS_SIZE;
use tracing::{Level, event};

const QUEEN_OF_SPADES_DANGER: i32 = 100;
const HIGH_SPADE_DANGER: i32 = 40;
const ACE_OF_HEARTS_DANGER: i32 = 50;
const HEART_RANK_MULT: i32 = 3;
const VERY_LOW_RELIEF: i32 = 20;
const SHORT_SUIT_LENGTH: usize = 3;
const SHORT_SUIT_MULT: i32 = 8;
const LONG_SPADES_LENGTH: usize = 5;
const LONG_SPADES_RELIEF: i32 = 10;
/// Danger above this marks a card as a worthwhile alternative to voiding a low singleton.
const ALTERNATIVE_DANGER: i32 = 20;
const LOW_SINGLETON_MAX: u8 = 6;

/// How badly a card wants to leave the hand; higher passes first.
pub fn evaluate_card_danger(card: Card, hand: &Hand) -> i32 {
    if card.is_queen_of_spades() {
        return QUEEN_OF_SPADES_DANGER;
    }

    let value = i32::from(card.value());
    let mut danger = 0;

    if card.suit == Suit::Spades && matches!(card.rank, Rank::Ace | Rank::King) {
        danger += HIGH_SPADE_DANGER;
    }

    if card.is_heart() {
        danger += if card.rank == Rank::Ace {
            ACE_OF_HEARTS_DANGER
        } else {
            value * HEART_RANK_MULT
        };
    }

    if card.is_high() {
        danger += value;
    }

    if card.is_very_low() {
        danger -= VERY_LOW_RELIEF;
    }

    let suit_length = hand.count_suit(card.suit);
    if suit_length <= SHORT_SUIT_LENGTH && card.value() >= 11 {
        danger += (4 - suit_length as i32) * SHORT_SUIT_MULT;
    }

    if card.suit == Suit::Spades && suit_length >= LONG_SPADES_LENGTH && card.value() <= 11 {
        danger -= LONG_SPADES_RELIEF;
    }

    danger
}

/// Three cards to pass, or `None` on a hold hand.
pub fn select_ai_cards_to_pass(
    hand: &Hand,
    direction: PassingDirection,
) -> Result<Option<[Card; 3]>, GameError> {
    if !direction.requires_selection() {
        return Ok(None);
    }
    if hand.len() < PASS_SIZE {
        return Err(GameError::NotEnoughCardsToPass { len: hand.len() });
    }

    let mut ranked: Vec<(Card, i32)> = hand
        .iter()
        .map(|&card| (card, evaluate_card_danger(card, hand)))
        .collect();
    // stable: equal danger keeps hand order
    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));

    let holds_queen = hand.has_queen_of_spades();
    let mut picks: Vec<Card> = Vec::with_capacity(PASS_SIZE);
    for &(card, _) in &ranked {
        if picks.len() >= PASS_SIZE {
            break;
        }

        let creates_void = hand.count_suit(card.suit) == 1;
        if creates_void && card.suit == Suit::Spades && holds_queen {
            continue;
        }
        if creates_void && card.value() <= LOW_SINGLETON_MAX {
            let has_alternative = ranked
                .iter()
                .any(|&(other, danger)| danger > ALTERNATIVE_DANGER && other.suit != card.suit);
            if has_alternative {
                continue;
            }
        }
        picks.push(card);
    }

    if picks.len() < PASS_SIZE {
        picks = ranked.iter().take(PASS_SIZE).map(|&(card, _)| card).collect();
    }
    Ok(Some([picks[0], picks[1], picks[2]]))
}

pub struct PassPlanner;

impl PassPlanner {
    pub fn choose(
        hand: &Hand,
        direction: PassingDirection,
    ) -> Result<Option<[Card; 3]>, GameError> {
        let selection = select_ai_cards_to_pass(hand, direction)?;
        if let Some(cards) = &selection {
            event!(
                target: "hearts_bot::pass_decision",
                Level::DEBUG,
                direction = direction.as_str(),
                hand_size = hand.len(),
                cards = %format_cards(cards),
            );
        }
        Ok(selection)
    }
}
