use super::{Policy, PolicyContext};
use crate::bot::{BotDifficulty, PassPlanner, PlayPlanner};
use hearts_core::GameError;
use hearts_core::model::card::Card;
use hearts_core::rules::passing::PASS_SIZE;
use hearts_core::rules::validation::get_valid_plays;
use tracing::{Level, event};

/// Routes decisions to the planners, or to the naive easy picks.
pub struct HeuristicPolicy {
    difficulty: BotDifficulty,
}

impl HeuristicPolicy {
    pub fn new(difficulty: BotDifficulty) -> Self {
        Self { difficulty }
    }

    pub fn easy() -> Self {
        Self::new(BotDifficulty::Easy)
    }

    pub fn normal() -> Self {
        Self::new(BotDifficulty::Normal)
    }
}

impl Policy for HeuristicPolicy {
    fn choose_pass(&mut self, ctx: &PolicyContext) -> Result<Option<[Card; 3]>, GameError> {
        let direction = ctx.state.passing_direction;
        match self.difficulty {
            BotDifficulty::Easy => {
                if !direction.requires_selection() {
                    return Ok(None);
                }
                let cards = ctx.hand.cards();
                if cards.len() < PASS_SIZE {
                    return Err(GameError::NotEnoughCardsToPass { len: cards.len() });
                }
                let selection = [cards[0], cards[1], cards[2]];
                log_pass(ctx, self.difficulty, &selection, "easy_first_three");
                Ok(Some(selection))
            }
            BotDifficulty::Normal => PassPlanner::choose(ctx.hand, direction),
        }
    }

    fn choose_play(&mut self, ctx: &PolicyContext) -> Result<Card, GameError> {
        match self.difficulty {
            BotDifficulty::Easy => {
                let legal = get_valid_plays(ctx.hand, ctx.state);
                let chosen = legal.first().copied().ok_or(GameError::NoValidPlays)?;
                event!(
                    target: "hearts_bot::play_decision",
                    Level::DEBUG,
                    seat = %ctx.seat,
                    difficulty = %self.difficulty,
                    legal_count = legal.len(),
                    card = %chosen,
                    reason = "easy_first_legal",
                );
                Ok(chosen)
            }
            BotDifficulty::Normal => PlayPlanner::choose(ctx.hand, ctx.state),
        }
    }
}

fn log_pass(ctx: &PolicyContext, difficulty: BotDifficulty, selection: &[Card; 3], reason: &str) {
    event!(
        target: "hearts_bot::pass_decision",
        Level::DEBUG,
        seat = %ctx.seat,
        difficulty = %difficulty,
        hand_size = ctx.hand.len(),
        cards = %crate::bot::format_cards(selection),
        reason,
    );
}
