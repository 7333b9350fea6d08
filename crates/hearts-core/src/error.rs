use crate::model::card::Card;
use crate::model::player::PlayerId;
use thiserror::Error;

/// Caller-contract violations raised by the rules engine. A returned error means the input
/// state was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("trick must hold exactly 4 cards to be resolved, found {len}")]
    MalformedTrick { len: usize },
    #[error("trick already holds 4 cards")]
    TrickFull,
    #[error("invalid passing selection: {0}")]
    InvalidPassingSelection(SelectionProblem),
    #[error("not all players have selected cards for passing")]
    IncompletePassing,
    #[error("player `{0}` is not seated in this game")]
    UnknownPlayer(PlayerId),
    #[error("no valid plays available")]
    NoValidPlays,
    #[error("cannot determine a winner with no players")]
    EmptyPlayerSet,
    #[error("hand must hold at least 3 cards to pass, found {len}")]
    NotEnoughCardsToPass { len: usize },
    #[error("deck must contain 52 distinct cards, found {len} cards")]
    InvalidDeck { len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionProblem {
    #[error("must select exactly 3 cards, got {0}")]
    WrongCount(usize),
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("{0} selected more than once")]
    DuplicateCard(Card),
}
