use super::hole_index;
use crate::model::{DEFAULT_HOLE_COUNT, Round};

/// Even split of the aggregate course par across its holes, floored.
#[must_use]
pub fn fallback_hole_par(course_par: Option<i32>, course_holes: Option<i32>) -> Option<i32> {
    let course_par = course_par.filter(|p| *p > 0)?;
    let holes = course_holes.unwrap_or(DEFAULT_HOLE_COUNT);
    if holes <= 0 {
        return None;
    }
    Some(course_par.div_euclid(holes))
}

/// Par from the round's own per-hole table, if it has one for `hole`.
#[must_use]
pub fn table_par(round: &Round, hole: i32) -> Option<i32> {
    let idx = hole_index(hole)?;
    round
        .hole_pars
        .as_ref()
        .and_then(|pars| pars.get(idx))
        .copied()
        .filter(|p| *p > 0)
}

/// Par recorded on any player's entry for `hole`, in player id order.
#[must_use]
pub fn recorded_par(round: &Round, hole: i32) -> Option<i32> {
    let idx = hole_index(hole)?;
    round
        .scores
        .values()
        .filter_map(|entries| entries.get(idx))
        .find_map(|entry| entry.par.filter(|p| *p > 0))
}

/// Par used for `player_id` on `hole` when computing relative-to-par:
/// the round's table, then the player's own entry, then the even split.
#[must_use]
pub fn player_hole_par(
    round: &Round,
    player_id: &str,
    hole: i32,
    course_par: Option<i32>,
    course_holes: Option<i32>,
) -> Option<i32> {
    table_par(round, hole)
        .or_else(|| {
            let idx = hole_index(hole)?;
            round
                .player_scores(player_id)
                .get(idx)
                .and_then(|entry| entry.par.filter(|p| *p > 0))
        })
        .or_else(|| fallback_hole_par(course_par, course_holes))
}

/// Par shown while entering scores for `hole`. Never fails: falls back to
/// `default_par` when nothing is known about the hole.
#[must_use]
pub fn entry_par(round: &Round, hole: i32, default_par: i32) -> i32 {
    table_par(round, hole)
        .or_else(|| recorded_par(round, hole))
        .or_else(|| {
            fallback_hole_par(round.course_par(), Some(round.hole_count())).filter(|p| *p > 0)
        })
        .unwrap_or(default_par)
}
