pub mod error;
pub mod game;
pub mod model;
pub mod rules;

pub use error::{GameError, SelectionProblem};
