use hearts_bot::BotDifficulty;
use hearts_core::game::init::default_players;
use hearts_core::game::store::{FileStore, GameStore, MemoryStore};
use hearts_core::model::card::Card;
use hearts_core::model::player::{Player, PlayerId, PlayerPosition};
use hearts_core::model::state::GamePhase;
use hearts_core::rules::validation::get_valid_plays;
use hearts_sim::session::{GameSession, Progress, SessionError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

const NORMAL: [BotDifficulty; 4] = [BotDifficulty::Normal; 4];

fn session_with(store: Box<dyn GameStore>, seed: u64) -> GameSession {
    GameSession::start(default_players(), NORMAL, store, StdRng::seed_from_u64(seed))
}

#[test]
fn fresh_session_is_saved_immediately() {
    let dir = tempdir().expect("temp dir");
    let saved = FileStore::in_dir(dir.path());
    let session = session_with(Box::new(FileStore::in_dir(dir.path())), 1);

    assert!(!session.resumed());
    assert_eq!(session.state().phase, GamePhase::Passing);
    assert_eq!(saved.load().as_ref(), Some(session.state()));
}

#[test]
fn human_seat_blocks_until_it_passes() {
    let mut session = session_with(Box::new(MemoryStore::new()), 2);

    assert_eq!(session.step(), Ok(Progress::PassesSelected));
    assert_eq!(
        session.step(),
        Ok(Progress::AwaitingHuman(PlayerPosition::North))
    );

    let human = session.state().players[0].clone();
    let picks: Vec<Card> = human.hand.cards()[..3].to_vec();
    session.select_passing_cards(&human.id, &picks).unwrap();
    assert_eq!(session.step(), Ok(Progress::PassingDone));

    let state = session.state();
    assert_eq!(state.phase, GamePhase::Playing);
    assert!(state.current_player().hand.contains(Card::TWO_OF_CLUBS));
    for card in picks {
        assert!(state.players[1].hand.contains(card));
    }
}

#[test]
fn play_card_enforces_phase_turn_and_legality() {
    let mut session = session_with(Box::new(MemoryStore::new()), 3).with_autoplay_humans(true);
    let leader_id = session.state().current_player().id.clone();

    assert_eq!(
        session.play_card(&leader_id, Card::TWO_OF_CLUBS),
        Err(SessionError::WrongPhase {
            expected: GamePhase::Playing,
            actual: GamePhase::Passing,
        })
    );

    assert_eq!(session.step(), Ok(Progress::PassingDone));
    let state = session.state().clone();
    let leader = state.current_player;
    let leader_id = state.player(leader).id.clone();
    let other_id = state.player(leader.next()).id.clone();

    assert_eq!(
        session.play_card(&other_id, Card::TWO_OF_CLUBS),
        Err(SessionError::NotYourTurn(other_id.clone()))
    );

    let illegal = state
        .player(leader)
        .hand
        .iter()
        .copied()
        .find(|card| *card != Card::TWO_OF_CLUBS)
        .expect("thirteen cards");
    assert_eq!(
        session.play_card(&leader_id, illegal),
        Err(SessionError::IllegalPlay {
            player: leader_id.clone(),
            card: illegal,
        })
    );
    assert_eq!(session.state(), &state);

    assert!(matches!(
        session.play_card(&PlayerId::new("ghost"), Card::TWO_OF_CLUBS),
        Err(SessionError::Rules(_))
    ));

    assert_eq!(
        session.play_card(&leader_id, Card::TWO_OF_CLUBS),
        Ok(Progress::CardPlayed)
    );
    let after = session.state();
    assert_eq!(after.current_trick.len(), 1);
    assert_eq!(after.current_player, leader.next());
    assert!(!after.player(leader).hand.contains(Card::TWO_OF_CLUBS));
}

#[test]
fn fourth_card_resolves_the_trick() {
    let mut session = session_with(Box::new(MemoryStore::new()), 4).with_autoplay_humans(true);
    assert_eq!(session.step(), Ok(Progress::PassingDone));

    let mut last = Progress::CardPlayed;
    for _ in 0..4 {
        let state = session.state().clone();
        let seat = state.current_player;
        let hand = &state.player(seat).hand;
        let card = get_valid_plays(hand, &state)[0];
        last = session.play_card(&state.player(seat).id, card).unwrap();
    }

    assert!(matches!(last, Progress::TrickWon(_)));
    let state = session.state();
    assert!(state.current_trick.is_empty());
    assert_eq!(state.tricks_played(), 1);
    assert_eq!(state.card_count(), 52);
}

#[test]
fn full_game_runs_to_the_end_and_clears_the_save() {
    let dir = tempdir().expect("temp dir");
    let saved = FileStore::in_dir(dir.path());
    let mut session =
        session_with(Box::new(FileStore::in_dir(dir.path())), 5).with_autoplay_humans(true);

    let summary = session.run_to_completion().expect("game completes");
    let state = session.state();
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(state.total_scores().iter().any(|&total| total >= 100));
    assert_eq!(summary.totals, state.total_scores());
    assert_eq!(
        summary.totals.iter().min(),
        Some(&state.player_by_id(&summary.winner).unwrap().total_score)
    );
    assert!(!saved.exists());

    assert_eq!(session.step(), Ok(Progress::GameOver(summary.winner.clone())));
    assert_eq!(session.start_new_hand(), Err(SessionError::GameOver));
}

#[test]
fn saved_game_is_resumed_where_it_stopped() {
    let dir = tempdir().expect("temp dir");
    let snapshot = {
        let mut session =
            session_with(Box::new(FileStore::in_dir(dir.path())), 6).with_autoplay_humans(true);
        for _ in 0..10 {
            session.step().unwrap();
        }
        session.state().clone()
    };

    let resumed = session_with(Box::new(FileStore::in_dir(dir.path())), 999);
    assert!(resumed.resumed());
    assert_eq!(resumed.state(), &snapshot);
}

#[test]
fn resumed_summary_names_come_from_the_saved_game() {
    let dir = tempdir().expect("temp dir");
    {
        let mut session =
            session_with(Box::new(FileStore::in_dir(dir.path())), 9).with_autoplay_humans(true);
        for _ in 0..5 {
            session.step().unwrap();
        }
    }

    let renamed = [
        Player::new("player-0", "North", false),
        Player::new("player-1", "East", false),
        Player::new("player-2", "South", false),
        Player::new("player-3", "West", false),
    ];
    let mut resumed = GameSession::start(
        renamed,
        NORMAL,
        Box::new(FileStore::in_dir(dir.path())),
        StdRng::seed_from_u64(10),
    )
    .with_autoplay_humans(true);
    assert!(resumed.resumed());

    let summary = resumed.run_to_completion().expect("game completes");
    let expected = default_players().map(|player| player.name);
    assert_eq!(summary.names, expected);
    assert!(summary.names.contains(&summary.winner_name));
}

#[test]
fn new_game_resets_the_table() {
    let mut session = session_with(Box::new(MemoryStore::new()), 7).with_autoplay_humans(true);
    for _ in 0..30 {
        session.step().unwrap();
    }
    session.new_game();
    let state = session.state();
    assert_eq!(state.hand_number, 1);
    assert_eq!(state.phase, GamePhase::Passing);
    assert_eq!(state.tricks_played(), 0);
    assert_eq!(state.total_scores(), [0; 4]);
}

#[test]
fn easy_and_normal_seats_share_a_table() {
    let difficulties = [
        BotDifficulty::Easy,
        BotDifficulty::Normal,
        BotDifficulty::Easy,
        BotDifficulty::Normal,
    ];
    let mut session = GameSession::start(
        default_players(),
        difficulties,
        Box::new(MemoryStore::new()),
        StdRng::seed_from_u64(8),
    )
    .with_autoplay_humans(true);
    let summary = session.run_to_completion().expect("game completes");
    assert!(summary.hands >= 1);
}
