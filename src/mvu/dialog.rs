use crate::error::CoreError;
use crate::model::{MAX_STROKES, MIN_STROKES, PlayerId, Round};
use crate::mvu::session::GroupSession;
use crate::score::{entry_par, hole_score};
use crate::storage::{RoundContext, ScoreCommit};

/// Accepts `score` as a stroke count for `hole`.
///
/// # Errors
///
/// Will return `Err` if `score` is outside `MIN_STROKES..=MAX_STROKES`
pub fn check_strokes(hole: i32, score: i32) -> Result<i32, CoreError> {
    if (MIN_STROKES..=MAX_STROKES).contains(&score) {
        Ok(score)
    } else {
        Err(CoreError::InvalidScore { hole, score })
    }
}

/// Proposed scores for every player on the hole being entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreDraft {
    hole: i32,
    par: i32,
    entries: Vec<(PlayerId, i32)>,
}

impl ScoreDraft {
    /// Seeds each player from their stored score on `hole`, else the hole's par.
    #[must_use]
    pub fn seed(round: &Round, hole: i32, player_ids: &[PlayerId], default_par: i32) -> Self {
        let par = entry_par(round, hole, default_par);
        let entries = player_ids
            .iter()
            .map(|player_id| {
                let proposed = hole_score(player_id, round, hole).unwrap_or(par);
                (player_id.clone(), proposed)
            })
            .collect();
        Self { hole, par, entries }
    }

    #[must_use]
    pub fn hole(&self) -> i32 {
        self.hole
    }

    #[must_use]
    pub fn par(&self) -> i32 {
        self.par
    }

    #[must_use]
    pub fn entries(&self) -> &[(PlayerId, i32)] {
        &self.entries
    }

    #[must_use]
    pub fn score(&self, player_id: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(id, _)| id == player_id)
            .map(|(_, score)| *score)
    }

    fn adjust(&mut self, player_id: &str, f: impl FnOnce(i32) -> i32) -> Option<i32> {
        let (_, score) = self.entries.iter_mut().find(|(id, _)| id == player_id)?;
        *score = f(*score).clamp(MIN_STROKES, MAX_STROKES);
        Some(*score)
    }

    pub fn increment(&mut self, player_id: &str) -> Option<i32> {
        self.adjust(player_id, |s| s.saturating_add(1))
    }

    /// Never goes below one stroke.
    pub fn decrement(&mut self, player_id: &str) -> Option<i32> {
        self.adjust(player_id, |s| s.saturating_sub(1))
    }

    /// Replaces a player's proposed score; out-of-range strokes are refused,
    /// never clamped.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `score` is outside `MIN_STROKES..=MAX_STROKES`
    pub fn set(&mut self, player_id: &str, score: i32) -> Result<Option<i32>, CoreError> {
        let score = check_strokes(self.hole, score)?;
        Ok(self.adjust(player_id, |_| score))
    }

    #[must_use]
    pub fn commits(&self, context: &RoundContext, round_id: &str) -> Vec<ScoreCommit> {
        self.entries
            .iter()
            .map(|(player_id, score)| ScoreCommit {
                context: context.clone(),
                round_id: round_id.to_string(),
                player_id: player_id.clone(),
                hole: self.hole,
                score: *score,
            })
            .collect()
    }
}

/// Result of one save: what to commit, and the draft for the next hole
/// (`None` once the last hole has been saved and the dialog is closed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveAndAdvance {
    pub commits: Vec<ScoreCommit>,
    pub next: Option<ScoreDraft>,
}

/// Commits the draft for the dialog hole and moves on: to the next hole with
/// the dialog still open, or closes the dialog after the last hole.
///
/// A draft seeded for some other hole is stale: nothing is committed and the
/// dialog stays put with a fresh draft for the dialog hole.
pub fn save_and_advance(
    session: &mut GroupSession,
    draft: &ScoreDraft,
    round: &Round,
    context: &RoundContext,
    default_par: i32,
    total_holes: i32,
) -> SaveAndAdvance {
    if draft.hole() != session.dialog_hole {
        return SaveAndAdvance {
            commits: Vec::new(),
            next: Some(ScoreDraft::seed(
                round,
                session.dialog_hole,
                session.player_ids(),
                default_par,
            )),
        };
    }

    let commits = draft.commits(context, session.round_id());

    let next = if session.dialog_hole < total_holes {
        session.advance_dialog();
        Some(ScoreDraft::seed(
            round,
            session.dialog_hole,
            session.player_ids(),
            default_par,
        ))
    } else {
        session.close_dialog();
        None
    };

    SaveAndAdvance { commits, next }
}
