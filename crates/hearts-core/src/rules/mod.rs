//! Hearts rules as pure transformations over [`GameState`](crate::model::state::GameState).

pub mod ending;
pub mod passing;
pub mod scoring;
pub mod trick;
pub mod validation;
