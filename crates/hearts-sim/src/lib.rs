pub mod config;
pub mod logging;
pub mod session;

use crate::config::{SeatConfig, SimConfig, ValidationError};
use hearts_bot::BotDifficulty;
use hearts_core::model::player::Player;

/// Seat roster and bot difficulties as configured, in seat order.
pub fn table_from_config(
    config: &SimConfig,
) -> Result<([Player; 4], [BotDifficulty; 4]), ValidationError> {
    let seats: &[SeatConfig; 4] =
        config
            .players
            .as_slice()
            .try_into()
            .map_err(|_| ValidationError::InvalidField {
                field: "players".to_string(),
                message: format!("exactly 4 players required, found {}", config.players.len()),
            })?;
    let roster = seats
        .each_ref()
        .map(|seat| Player::new(seat.id.as_str(), seat.name.as_str(), seat.human));
    let difficulties = seats.each_ref().map(|seat| BotDifficulty::from(seat.difficulty));
    Ok((roster, difficulties))
}
