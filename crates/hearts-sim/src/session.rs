use hearts_bot::{BotDifficulty, Policy, PolicyContext, policy_for};
use hearts_core::GameError;
use hearts_core::game::init::{initialize_game_from, initialize_new_hand_with_rng};
use hearts_core::game::store::GameStore;
use hearts_core::model::card::Card;
use hearts_core::model::player::{Player, PlayerId, PlayerPosition};
use hearts_core::model::state::{GamePhase, GameState};
use hearts_core::rules::ending::{check_and_transition_to_game_over, determine_winner};
use hearts_core::rules::passing::{
    all_players_have_selected, execute_card_passing, select_cards_for_passing,
};
use hearts_core::rules::scoring::score_hand;
use hearts_core::rules::trick::{add_card_to_trick, resolve_trick};
use hearts_core::rules::validation::is_valid_play;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("expected {expected:?} phase, game is in {actual:?}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),
    #[error("{card} is not a legal play for {player}")]
    IllegalPlay { player: PlayerId, card: Card },
    #[error("waiting for the human player at {0}")]
    AwaitingHuman(PlayerPosition),
    #[error("the game is over")]
    GameOver,
    #[error(transparent)]
    Rules(#[from] GameError),
}

/// What a single action moved the game to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    PassesSelected,
    PassingDone,
    CardPlayed,
    TrickWon(PlayerId),
    HandScored([i32; 4]),
    HandDealt(u32),
    GameOver(PlayerId),
    AwaitingHuman(PlayerPosition),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub winner: PlayerId,
    pub winner_name: String,
    /// Seat names as stored in the game state, which may predate the current roster.
    pub names: [String; 4],
    pub totals: [i32; 4],
    pub hands: u32,
}

/// Headless game driver: owns the state, consults seat policies, persists every change.
pub struct GameSession {
    state: GameState,
    roster: [Player; 4],
    policies: Vec<Box<dyn Policy>>,
    store: Box<dyn GameStore>,
    rng: StdRng,
    autoplay_humans: bool,
    resumed: bool,
}

impl GameSession {
    /// Resumes the stored game when one exists, otherwise deals a fresh one.
    pub fn start(
        roster: [Player; 4],
        difficulties: [BotDifficulty; 4],
        store: Box<dyn GameStore>,
        mut rng: StdRng,
    ) -> Self {
        let saved = store.load().filter(|state| state.phase != GamePhase::GameOver);
        let resumed = saved.is_some();
        let state = match saved {
            Some(state) => {
                info!(hand = state.hand_number, phase = ?state.phase, "resumed saved game");
                state
            }
            None => initialize_game_from(roster.clone(), &mut rng),
        };

        let mut session = Self {
            state,
            roster,
            policies: difficulties.into_iter().map(policy_for).collect(),
            store,
            rng,
            autoplay_humans: false,
            resumed,
        };
        if !resumed {
            session.announce_hand();
            session.persist();
        }
        session
    }

    /// Lets the seat policies act for human seats too.
    pub fn with_autoplay_humans(mut self, enabled: bool) -> Self {
        self.autoplay_humans = enabled;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn resumed(&self) -> bool {
        self.resumed
    }

    pub fn select_passing_cards(
        &mut self,
        player_id: &PlayerId,
        cards: &[Card],
    ) -> Result<(), SessionError> {
        self.expect_phase(GamePhase::Passing)?;
        self.state = select_cards_for_passing(&self.state, player_id, cards)?;
        self.persist();
        Ok(())
    }

    pub fn execute_passing(&mut self) -> Result<(), SessionError> {
        self.expect_phase(GamePhase::Passing)?;
        self.state = execute_card_passing(&self.state)?;
        debug!(
            direction = self.state.passing_direction.as_str(),
            leader = %self.state.current_player,
            "cards passed"
        );
        self.persist();
        Ok(())
    }

    /// Plays `card` for `player_id`, resolving the trick, scoring the hand and checking for
    /// game over as each becomes due.
    pub fn play_card(&mut self, player_id: &PlayerId, card: Card) -> Result<Progress, SessionError> {
        self.expect_phase(GamePhase::Playing)?;
        let seat = self.state.seat_of(player_id)?;
        if seat != self.state.current_player {
            return Err(SessionError::NotYourTurn(player_id.clone()));
        }
        let hand = &self.state.player(seat).hand;
        if !is_valid_play(card, hand, &self.state) {
            return Err(SessionError::IllegalPlay {
                player: player_id.clone(),
                card,
            });
        }

        let mut next = self.state.clone();
        next.players[seat.index()].hand.remove(card);
        let mut next = add_card_to_trick(&next, card, player_id)?;
        next.current_player = seat.next();

        if !next.current_trick.is_complete() {
            self.state = next;
            self.persist();
            return Ok(Progress::CardPlayed);
        }

        let resolved = resolve_trick(&next)?;
        let winner = resolved.current_player().id.clone();
        debug!(
            winner = %winner,
            tricks_played = resolved.tricks_played(),
            hearts_broken = resolved.hearts_broken,
            "trick won"
        );
        self.state = resolved;

        if self.state.phase != GamePhase::HandComplete {
            self.persist();
            return Ok(Progress::TrickWon(winner));
        }
        self.finish_hand()
    }

    /// Advances the game by one automatic action.
    pub fn step(&mut self) -> Result<Progress, SessionError> {
        match self.state.phase {
            GamePhase::Passing => self.step_passing(),
            GamePhase::Playing => {
                let seat = self.state.current_player;
                if self.waits_for_human(seat) {
                    return Ok(Progress::AwaitingHuman(seat));
                }
                let ctx = PolicyContext::for_seat(&self.state, seat);
                let card = self.policies[seat.index()].choose_play(&ctx)?;
                let player_id = self.state.player(seat).id.clone();
                self.play_card(&player_id, card)
            }
            GamePhase::HandComplete => {
                self.start_new_hand()?;
                Ok(Progress::HandDealt(self.state.hand_number))
            }
            GamePhase::GameOver => Ok(Progress::GameOver(determine_winner(&self.state.players)?)),
        }
    }

    /// Steps until the game ends. Stops with `AwaitingHuman` if a human seat must act.
    pub fn run_to_completion(&mut self) -> Result<GameSummary, SessionError> {
        loop {
            match self.step()? {
                Progress::GameOver(_) => return self.summary(),
                Progress::AwaitingHuman(seat) => return Err(SessionError::AwaitingHuman(seat)),
                _ => {}
            }
        }
    }

    pub fn start_new_hand(&mut self) -> Result<(), SessionError> {
        self.expect_phase(GamePhase::HandComplete)?;
        self.state = initialize_new_hand_with_rng(&self.state, &mut self.rng);
        self.announce_hand();
        self.persist();
        Ok(())
    }

    /// Abandons the current game and deals a new one for the same table.
    pub fn new_game(&mut self) {
        self.state = initialize_game_from(self.roster.clone(), &mut self.rng);
        self.resumed = false;
        self.announce_hand();
        self.persist();
    }

    pub fn summary(&self) -> Result<GameSummary, SessionError> {
        if self.state.phase != GamePhase::GameOver {
            return Err(SessionError::WrongPhase {
                expected: GamePhase::GameOver,
                actual: self.state.phase,
            });
        }
        let winner = determine_winner(&self.state.players)?;
        let winner_name = self.state.player_by_id(&winner)?.name.clone();
        Ok(GameSummary {
            winner,
            winner_name,
            names: self.state.players.each_ref().map(|player| player.name.clone()),
            totals: self.state.total_scores(),
            hands: self.state.hand_number,
        })
    }

    fn step_passing(&mut self) -> Result<Progress, SessionError> {
        let mut selected_any = false;
        for seat in PlayerPosition::LOOP {
            let player = self.state.player(seat);
            if self.state.selected_cards_for_passing.contains(&player.id)
                || self.waits_for_human(seat)
            {
                continue;
            }
            let ctx = PolicyContext::for_seat(&self.state, seat);
            let Some(cards) = self.policies[seat.index()].choose_pass(&ctx)? else {
                continue;
            };
            let player_id = player.id.clone();
            self.state = select_cards_for_passing(&self.state, &player_id, &cards)?;
            selected_any = true;
        }

        if !self.state.passing_direction.requires_selection()
            || all_players_have_selected(&self.state)
        {
            self.execute_passing()?;
            return Ok(Progress::PassingDone);
        }
        if selected_any {
            self.persist();
            return Ok(Progress::PassesSelected);
        }

        let waiting = PlayerPosition::LOOP
            .into_iter()
            .find(|&seat| {
                !self
                    .state
                    .selected_cards_for_passing
                    .contains(&self.state.player(seat).id)
            })
            .unwrap_or(self.state.current_player);
        Ok(Progress::AwaitingHuman(waiting))
    }

    fn finish_hand(&mut self) -> Result<Progress, SessionError> {
        self.state.players = score_hand(&self.state.players);
        let scores = self.state.players.each_ref().map(|player| player.score);
        info!(
            hand = self.state.hand_number,
            scores = ?scores,
            totals = ?self.state.total_scores(),
            "hand scored"
        );

        self.state = check_and_transition_to_game_over(self.state.clone());
        if self.state.phase == GamePhase::GameOver {
            let winner = determine_winner(&self.state.players)?;
            info!(winner = %winner, hands = self.state.hand_number, "game over");
            self.store.clear();
            return Ok(Progress::GameOver(winner));
        }

        self.persist();
        Ok(Progress::HandScored(scores))
    }

    fn waits_for_human(&self, seat: PlayerPosition) -> bool {
        self.state.player(seat).is_human && !self.autoplay_humans
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), SessionError> {
        match self.state.phase {
            GamePhase::GameOver if expected != GamePhase::GameOver => Err(SessionError::GameOver),
            actual if actual != expected => Err(SessionError::WrongPhase { expected, actual }),
            _ => Ok(()),
        }
    }

    fn announce_hand(&self) {
        info!(
            hand = self.state.hand_number,
            dealer = %self.state.dealer,
            passing = self.state.passing_direction.as_str(),
            "hand dealt"
        );
    }

    fn persist(&mut self) {
        self.store.save(&self.state);
    }
}
