use hearts_core::game::init::{initialize_game_with_rng, initialize_new_hand_with_rng};
use hearts_core::model::card::Card;
use hearts_core::model::hand::Hand;
use hearts_core::model::passing::PassingDirection;
use hearts_core::model::player::{Player, PlayerPosition};
use hearts_core::model::rank::Rank;
use hearts_core::model::state::{GamePhase, GameState};
use hearts_core::model::suit::Suit;
use hearts_core::model::trick::{PlayedCard, Trick};
use hearts_core::rules::ending::{check_and_transition_to_game_over, determine_winner, should_game_end};
use hearts_core::rules::passing::{execute_card_passing, select_cards_for_passing};
use hearts_core::rules::scoring::score_hand;
use hearts_core::rules::trick::{determine_trick_winner, resolve_trick};
use hearts_core::rules::validation::get_valid_plays;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn seeded(seed: u64) -> GameState {
    initialize_game_with_rng(&mut StdRng::seed_from_u64(seed))
}

#[test]
fn opening_leader_must_play_two_of_clubs() {
    let mut state = seeded(7);
    state.phase = GamePhase::Playing;
    state.players[0].hand = Hand::with_cards(vec![
        Card::TWO_OF_CLUBS,
        Card::QUEEN_OF_SPADES,
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Nine, Suit::Diamonds),
    ]);
    state.current_player = PlayerPosition::North;

    let hand = state.players[0].hand.clone();
    assert_eq!(get_valid_plays(&hand, &state), vec![Card::TWO_OF_CLUBS]);
}

#[test]
fn club_trick_goes_to_the_ten() {
    let mut state = seeded(8);
    state.phase = GamePhase::Playing;
    let ids: Vec<_> = state.players.iter().map(|p| p.id.clone()).collect();
    let plays = vec![
        PlayedCard::new(card(Rank::Five, Suit::Clubs), ids[0].clone()),
        PlayedCard::new(card(Rank::Ten, Suit::Clubs), ids[1].clone()),
        PlayedCard::new(card(Rank::Three, Suit::Clubs), ids[2].clone()),
        PlayedCard::new(card(Rank::Seven, Suit::Clubs), ids[3].clone()),
    ];
    assert_eq!(determine_trick_winner(&plays).unwrap(), ids[1]);

    state.current_trick = Trick::try_from(plays).unwrap();
    let resolved = resolve_trick(&state).unwrap();
    assert_eq!(resolved.players[1].tricks_taken.len(), 1);
    assert_eq!(
        resolved.players[1].tricks_taken[0],
        [
            card(Rank::Five, Suit::Clubs),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Seven, Suit::Clubs),
        ]
    );
    assert_eq!(resolved.current_player, PlayerPosition::East);
    assert!(resolved.current_trick.is_empty());
}

#[test]
fn taking_every_penalty_card_shoots_the_moon() {
    let mut players = seeded(9).players;
    let mut penalties: Vec<Card> = Rank::ORDERED
        .iter()
        .map(|&rank| card(rank, Suit::Hearts))
        .collect();
    penalties.push(Card::QUEEN_OF_SPADES);
    penalties.push(card(Rank::Two, Suit::Diamonds));
    penalties.push(card(Rank::Three, Suit::Diamonds));
    players[2].tricks_taken = penalties
        .chunks(4)
        .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
        .collect();
    players[2].total_score = 40;
    players[0].total_score = 10;

    let scored = score_hand(&players);
    assert_eq!(scored[2].score, -26);
    assert_eq!(scored[2].total_score, 14);
    for seat in [0, 1, 3] {
        assert_eq!(scored[seat].score, 0);
        assert_eq!(scored[seat].total_score, players[seat].total_score);
    }
}

#[test]
fn left_pass_delivers_cards_from_the_right_hand_neighbour() {
    let mut state = seeded(10);
    assert_eq!(state.passing_direction, PassingDirection::Left);

    let mut sent = Vec::new();
    for seat in 0..4 {
        let picks: Vec<Card> = state.players[seat].hand.cards()[3..6].to_vec();
        let id = state.players[seat].id.clone();
        state = select_cards_for_passing(&state, &id, &picks).unwrap();
        sent.push(picks);
    }
    let passed = execute_card_passing(&state).unwrap();

    assert_eq!(passed.phase, GamePhase::Playing);
    assert!(passed.selected_cards_for_passing.is_empty());
    for seat in PlayerPosition::LOOP {
        let hand = &passed.players[seat.index()].hand;
        assert_eq!(hand.len(), 13);
        for card in &sent[seat.previous().index()] {
            assert!(hand.contains(*card), "{seat} should hold {card}");
        }
        for card in &sent[seat.index()] {
            assert!(!hand.contains(*card));
        }
    }
    assert!(passed.current_player().hand.contains(Card::TWO_OF_CLUBS));
}

#[test]
fn game_ends_at_one_hundred_and_lowest_total_wins() {
    let mut players: Vec<Player> = seeded(11).players.to_vec();
    for (player, total) in players.iter_mut().zip([99, 40, 40, 75]) {
        player.total_score = total;
    }
    assert!(!should_game_end(&players));
    assert_eq!(determine_winner(&players).unwrap(), players[1].id);

    players[0].total_score = 100;
    assert!(should_game_end(&players));
}

#[test]
fn game_over_check_is_idempotent_below_threshold() {
    let state = seeded(12);
    let once = check_and_transition_to_game_over(state.clone());
    let twice = check_and_transition_to_game_over(once.clone());
    assert_eq!(once, state);
    assert_eq!(twice, state);
}

#[test]
fn hands_cycle_passing_direction_and_dealer() {
    let mut rng = StdRng::seed_from_u64(13);
    let first = initialize_game_with_rng(&mut rng);
    let second = initialize_new_hand_with_rng(&first, &mut rng);
    let third = initialize_new_hand_with_rng(&second, &mut rng);
    let fourth = initialize_new_hand_with_rng(&third, &mut rng);

    assert_eq!(
        [first.passing_direction, second.passing_direction, third.passing_direction, fourth.passing_direction],
        [PassingDirection::Left, PassingDirection::Right, PassingDirection::Across, PassingDirection::Hold]
    );
    assert_eq!(fourth.phase, GamePhase::Playing);
    assert_eq!(fourth.hand_number, 4);
    assert_eq!(second.dealer, first.dealer.next());
}
