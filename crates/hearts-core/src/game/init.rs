use crate::model::deck::Deck;
use crate::model::passing::{PassSelections, PassingDirection};
use crate::model::player::{Player, PlayerPosition};
use crate::model::state::{GamePhase, GameState, find_two_of_clubs_holder};
use crate::model::trick::Trick;

/// Seat 0 is the human, the rest are AI players.
pub fn default_players() -> [Player; 4] {
    [
        Player::new("player-0", "You", true),
        Player::new("player-1", "Alice AI", false),
        Player::new("player-2", "Bob AI", false),
        Player::new("player-3", "Charlie AI", false),
    ]
}

pub fn initialize_game() -> GameState {
    initialize_game_with_rng(&mut rand::thread_rng())
}

pub fn initialize_game_with_rng<R: rand::Rng + ?Sized>(rng: &mut R) -> GameState {
    initialize_game_from(default_players(), rng)
}

/// First hand for the given roster. Hands and trick piles of `players` are replaced.
pub fn initialize_game_from<R: rand::Rng + ?Sized>(players: [Player; 4], rng: &mut R) -> GameState {
    let mut players = players;
    for player in players.iter_mut() {
        player.score = 0;
        player.total_score = 0;
    }
    deal_hand(players, PlayerPosition::North, 1, rng)
}

pub fn initialize_new_hand(previous: &GameState) -> GameState {
    initialize_new_hand_with_rng(previous, &mut rand::thread_rng())
}

/// Next hand: fresh deal, scores reset, totals kept, dealer rotated.
pub fn initialize_new_hand_with_rng<R: rand::Rng + ?Sized>(
    previous: &GameState,
    rng: &mut R,
) -> GameState {
    deal_hand(
        previous.players.clone(),
        previous.dealer.next(),
        previous.hand_number + 1,
        rng,
    )
}

fn deal_hand<R: rand::Rng + ?Sized>(
    mut players: [Player; 4],
    dealer: PlayerPosition,
    hand_number: u32,
    rng: &mut R,
) -> GameState {
    let hands = Deck::shuffled(rng).deal();
    for (player, hand) in players.iter_mut().zip(hands) {
        player.hand = hand;
        player.tricks_taken = Vec::new();
        player.score = 0;
    }

    let passing_direction = PassingDirection::for_hand(hand_number);
    let phase = if passing_direction.requires_selection() {
        GamePhase::Passing
    } else {
        GamePhase::Playing
    };
    let current_player = find_two_of_clubs_holder(&players).unwrap_or(PlayerPosition::North);

    GameState {
        players,
        current_player,
        dealer,
        phase,
        passing_direction,
        hand_number,
        current_trick: Trick::new(),
        hearts_broken: false,
        selected_cards_for_passing: PassSelections::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{initialize_game, initialize_game_with_rng, initialize_new_hand_with_rng};
    use crate::model::card::Card;
    use crate::model::passing::PassingDirection;
    use crate::model::player::PlayerPosition;
    use crate::model::state::GamePhase;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn new_game_deals_thirteen_each_and_starts_passing_left() {
        let state = initialize_game();
        for player in &state.players {
            assert_eq!(player.hand.len(), 13);
            assert!(player.tricks_taken.is_empty());
        }
        let all: HashSet<Card> = state
            .players
            .iter()
            .flat_map(|p| p.hand.iter().copied())
            .collect();
        assert_eq!(all.len(), 52);
        assert_eq!(state.phase, GamePhase::Passing);
        assert_eq!(state.passing_direction, PassingDirection::Left);
        assert_eq!(state.hand_number, 1);
        assert_eq!(state.dealer, PlayerPosition::North);
        assert!(!state.hearts_broken);
        assert!(state.players[0].is_human);
        assert!(state.players[1..].iter().all(|p| !p.is_human));
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let a = initialize_game_with_rng(&mut StdRng::seed_from_u64(77));
        let b = initialize_game_with_rng(&mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn new_hand_keeps_totals_and_rotates() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut previous = initialize_game_with_rng(&mut rng);
        previous.players[1].total_score = 17;
        previous.players[1].score = 17;
        previous.hearts_broken = true;
        previous.phase = GamePhase::HandComplete;

        let next = initialize_new_hand_with_rng(&previous, &mut rng);
        assert_eq!(next.hand_number, 2);
        assert_eq!(next.passing_direction, PassingDirection::Right);
        assert_eq!(next.dealer, PlayerPosition::East);
        assert_eq!(next.players[1].total_score, 17);
        assert_eq!(next.players[1].score, 0);
        assert!(!next.hearts_broken);
        assert!(next.current_player().hand.contains(Card::TWO_OF_CLUBS));
        assert_eq!(next.card_count(), 52);
    }

    #[test]
    fn fourth_hand_holds_and_starts_in_play() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = initialize_game_with_rng(&mut rng);
        for _ in 0..3 {
            state = initialize_new_hand_with_rng(&state, &mut rng);
        }
        assert_eq!(state.hand_number, 4);
        assert_eq!(state.passing_direction, PassingDirection::Hold);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.dealer, PlayerPosition::West);
    }
}
