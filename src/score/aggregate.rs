use std::collections::BTreeSet;

use super::hole_index;
use super::par::{fallback_hole_par, player_hole_par};
use crate::model::{DEFAULT_HOLE_COUNT, Round, ScoreClass, ToParTone};

/// Sum of every entered score for the player; 0 when nothing is entered.
#[must_use]
pub fn total_score(player_id: &str, round: &Round) -> i32 {
    round
        .player_scores(player_id)
        .iter()
        .filter_map(|entry| entry.score)
        .sum()
}

/// Sum restricted to the given 1-based hole numbers. Unplayed holes and
/// hole numbers outside the card count as nothing.
#[must_use]
pub fn section_total(player_id: &str, round: &Round, hole_numbers: &[i32]) -> i32 {
    let Some(entries) = round.scores.get(player_id) else {
        return 0;
    };
    let distinct: BTreeSet<i32> = hole_numbers.iter().copied().collect();
    distinct
        .into_iter()
        .filter_map(hole_index)
        .filter_map(|idx| entries.get(idx).and_then(|entry| entry.score))
        .sum()
}

/// Strokes over (positive) or under (negative) par across the holes the
/// player has completed.
///
/// Returns `None` when the course par is unknown or the player has not
/// entered a score yet; `Some(0)` means exactly even.
#[must_use]
pub fn score_to_par(
    player_id: &str,
    round: &Round,
    course_par: Option<i32>,
    course_holes: Option<i32>,
) -> Option<i32> {
    let course_par = course_par?;
    let holes = course_holes.unwrap_or(DEFAULT_HOLE_COUNT);
    fallback_hole_par(Some(course_par), Some(holes))?;

    let mut strokes = 0;
    let mut par_total = 0;
    let mut any_scored = false;
    for (idx, entry) in round.player_scores(player_id).iter().enumerate() {
        let Some(score) = entry.score else {
            continue;
        };
        let hole = i32::try_from(idx).ok()? + 1;
        let par = player_hole_par(round, player_id, hole, Some(course_par), Some(holes))?;
        strokes += score;
        par_total += par;
        any_scored = true;
    }

    any_scored.then_some(strokes - par_total)
}

/// `E` for even or unknown, `+N` over par, `-N` under par.
#[must_use]
pub fn format_relative_to_par(value: Option<i32>) -> String {
    match value {
        None | Some(0) => "E".to_string(),
        Some(v) if v > 0 => format!("+{v}"),
        Some(v) => v.to_string(),
    }
}

#[must_use]
pub fn classify(score: Option<i32>, par: Option<i32>) -> Option<ScoreClass> {
    let (score, par) = (score?, par?);
    Some(ScoreClass::from_diff(score - par))
}

#[must_use]
pub fn color_for(value: Option<i32>) -> ToParTone {
    match value {
        Some(v) if v < 0 => ToParTone::UnderPar,
        Some(v) if v > 0 => ToParTone::OverPar,
        _ => ToParTone::Even,
    }
}

#[must_use]
pub fn hole_score(player_id: &str, round: &Round, hole: i32) -> Option<i32> {
    let idx = hole_index(hole)?;
    round
        .player_scores(player_id)
        .get(idx)
        .and_then(|entry| entry.score)
}

/// Count of holes with an entered score, the "thru" figure on a leaderboard.
#[must_use]
pub fn holes_played(player_id: &str, round: &Round) -> i32 {
    let played = round
        .player_scores(player_id)
        .iter()
        .filter(|entry| entry.score.is_some())
        .count();
    i32::try_from(played).unwrap_or(i32::MAX)
}
