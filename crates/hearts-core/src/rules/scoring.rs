use crate::model::card::Card;
use crate::model::player::Player;

pub const MOON_POINTS: i32 = 26;
const QUEEN_OF_SPADES_POINTS: i32 = 13;

pub fn count_hearts(tricks: &[[Card; 4]]) -> usize {
    tricks.iter().flatten().filter(|card| card.is_heart()).count()
}

pub fn has_queen_of_spades(tricks: &[[Card; 4]]) -> bool {
    tricks.iter().flatten().any(|card| card.is_queen_of_spades())
}

/// One point per heart plus 13 for the queen of spades.
pub fn calculate_hand_score(tricks: &[[Card; 4]]) -> i32 {
    let hearts = count_hearts(tricks) as i32;
    let queen = if has_queen_of_spades(tricks) {
        QUEEN_OF_SPADES_POINTS
    } else {
        0
    };
    hearts + queen
}

pub fn has_shot_the_moon(score: i32) -> bool {
    score == MOON_POINTS
}

/// Hand scores with the moon inversion applied: a 26-point taker scores -26 instead.
pub fn hand_scores(players: &[Player; 4]) -> [i32; 4] {
    let mut scores = players.each_ref().map(|player| calculate_hand_score(&player.tricks_taken));
    if let Some(shooter) = scores.iter().position(|&score| has_shot_the_moon(score)) {
        scores[shooter] = -MOON_POINTS;
    }
    scores
}

/// Scores a finished hand: sets each player's hand score and folds it into the running total.
pub fn score_hand(players: &[Player; 4]) -> [Player; 4] {
    let scores = hand_scores(players);
    let mut scored = players.clone();
    for (player, score) in scored.iter_mut().zip(scores) {
        player.score = score;
        player.total_score += score;
    }
    scored
}
