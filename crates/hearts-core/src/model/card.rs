use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A playing card. Equality is suit plus rank; the comparison value is derived from the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const TWO_OF_CLUBS: Card = Card::new(Rank::Two, Suit::Clubs);
    pub const QUEEN_OF_SPADES: Card = Card::new(Rank::Queen, Suit::Spades);

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    pub const fn is_heart(self) -> bool {
        self.suit.is_heart()
    }

    pub const fn is_penalty(self) -> bool {
        self.is_heart() || self.is_queen_of_spades()
    }

    pub const fn is_queen_of_spades(self) -> bool {
        matches!(self.rank, Rank::Queen) && matches!(self.suit, Suit::Spades)
    }

    /// Two, three or four: cards that almost never win a trick.
    pub const fn is_very_low(self) -> bool {
        self.value() >= 2 && self.value() <= 4
    }

    /// Queen, king or ace.
    pub const fn is_high(self) -> bool {
        self.value() >= 12
    }

    pub fn penalty_value(self) -> u8 {
        if self.is_queen_of_spades() {
            13
        } else if self.is_heart() {
            1
        } else {
            0
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
