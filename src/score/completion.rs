use super::hole_index;
use crate::model::RoundScores;

/// True when every listed player has a score on `hole`. An empty player list
/// is never complete.
#[must_use]
pub fn is_hole_scored<S: AsRef<str>>(hole: i32, players: &[S], scores: &RoundScores) -> bool {
    if players.is_empty() {
        return false;
    }
    let Some(idx) = hole_index(hole) else {
        return false;
    };
    players.iter().all(|player_id| {
        scores
            .get(player_id.as_ref())
            .and_then(|entries| entries.get(idx))
            .is_some_and(|entry| entry.score.is_some())
    })
}

/// First hole in `1..=hole_count` that is not fully scored for the players.
/// Falls back to hole 1 when there are no players or every hole is done.
#[must_use]
pub fn first_incomplete_hole<S: AsRef<str>>(
    players: &[S],
    scores: &RoundScores,
    hole_count: i32,
) -> i32 {
    if players.is_empty() {
        return 1;
    }
    (1..=hole_count)
        .find(|&hole| !is_hole_scored(hole, players, scores))
        .unwrap_or(1)
}

/// Number of holes fully scored for the players.
#[must_use]
pub fn group_progress<S: AsRef<str>>(players: &[S], scores: &RoundScores, hole_count: i32) -> i32 {
    let done = (1..=hole_count)
        .filter(|&hole| is_hole_scored(hole, players, scores))
        .count();
    i32::try_from(done).unwrap_or(i32::MAX)
}
