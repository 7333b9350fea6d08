use crate::error::GameError;
use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::array;
use std::collections::HashSet;

pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 13;

/// Exactly 52 distinct cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        let distinct: HashSet<Card> = cards.iter().copied().collect();
        if cards.len() != DECK_SIZE || distinct.len() != DECK_SIZE {
            return Err(GameError::InvalidDeck { len: cards.len() });
        }
        Ok(Self { cards })
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let standard = Self::standard();
        Self {
            cards: shuffle(standard.cards(), rng),
        }
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Round-robin deal: card `i` lands in hand `i % 4`.
    pub fn deal(&self) -> [Hand; 4] {
        let mut hands: [Hand; 4] = array::from_fn(|_| Hand::new());
        for (index, card) in self.cards.iter().enumerate() {
            hands[index % 4].add(*card);
        }
        hands
    }
}

/// Fisher-Yates permutation of `cards`; the input slice is left untouched.
pub fn shuffle<R: rand::Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
