use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::rules::scoring::calculate_hand_score;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Seat at the table; seating order is fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PlayerPosition {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl PlayerPosition {
    pub const LOOP: [PlayerPosition; 4] = [
        PlayerPosition::North,
        PlayerPosition::East,
        PlayerPosition::South,
        PlayerPosition::West,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlayerPosition::North),
            1 => Some(PlayerPosition::East),
            2 => Some(PlayerPosition::South),
            3 => Some(PlayerPosition::West),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> PlayerPosition {
        match self {
            PlayerPosition::North => PlayerPosition::East,
            PlayerPosition::East => PlayerPosition::South,
            PlayerPosition::South => PlayerPosition::West,
            PlayerPosition::West => PlayerPosition::North,
        }
    }

    pub const fn previous(self) -> PlayerPosition {
        match self {
            PlayerPosition::North => PlayerPosition::West,
            PlayerPosition::East => PlayerPosition::North,
            PlayerPosition::South => PlayerPosition::East,
            PlayerPosition::West => PlayerPosition::South,
        }
    }

    pub const fn opposite(self) -> PlayerPosition {
        match self {
            PlayerPosition::North => PlayerPosition::South,
            PlayerPosition::East => PlayerPosition::West,
            PlayerPosition::South => PlayerPosition::North,
            PlayerPosition::West => PlayerPosition::East,
        }
    }
}

impl fmt::Display for PlayerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerPosition::North => "North",
            PlayerPosition::East => "East",
            PlayerPosition::South => "South",
            PlayerPosition::West => "West",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_human: bool,
    pub hand: Hand,
    /// One entry per trick won this hand, cards in play order.
    pub tricks_taken: Vec<[Card; 4]>,
    /// Penalty points for the current hand; -26 after shooting the moon.
    pub score: i32,
    pub total_score: i32,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, is_human: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_human,
            hand: Hand::new(),
            tricks_taken: Vec::new(),
            score: 0,
            total_score: 0,
        }
    }

    /// Live penalty tally from the tricks won so far.
    pub fn hand_points(&self) -> i32 {
        calculate_hand_score(&self.tricks_taken)
    }

    pub fn captured_cards(&self) -> usize {
        self.tricks_taken.len() * 4
    }
}

#[cfg(test)]
mod tests {
    use super::{Player, PlayerId, PlayerPosition};
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn next_wraps_around() {
        assert_eq!(PlayerPosition::West.next(), PlayerPosition::North);
    }

    #[test]
    fn previous_wraps_around() {
        assert_eq!(PlayerPosition::North.previous(), PlayerPosition::West);
    }

    #[test]
    fn opposite_is_expected() {
        assert_eq!(PlayerPosition::North.opposite(), PlayerPosition::South);
        assert_eq!(PlayerPosition::East.opposite(), PlayerPosition::West);
    }

    #[test]
    fn index_roundtrip() {
        for (i, seat) in PlayerPosition::LOOP.iter().enumerate() {
            assert_eq!(PlayerPosition::from_index(i), Some(*seat));
            assert_eq!(seat.index(), i);
        }
        assert_eq!(PlayerPosition::from_index(4), None);
    }

    #[test]
    fn new_player_starts_empty() {
        let player = Player::new("player-1", "Alice AI", false);
        assert_eq!(player.id, PlayerId::new("player-1"));
        assert!(player.hand.is_empty());
        assert!(player.tricks_taken.is_empty());
        assert_eq!((player.score, player.total_score), (0, 0));
    }

    #[test]
    fn hand_points_follow_captured_tricks() {
        let mut player = Player::new("p", "P", true);
        player.tricks_taken.push([
            Card::QUEEN_OF_SPADES,
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
        ]);
        assert_eq!(player.hand_points(), 14);
        assert_eq!(player.captured_cards(), 4);
    }
}
