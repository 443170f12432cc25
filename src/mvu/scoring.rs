use serde::Serialize;

use crate::error::CoreError;
use crate::model::{PlayerGroup, PlayerId, Round};
use crate::mvu::dialog::{ScoreDraft, save_and_advance};
use crate::mvu::session::{CommitMode, GroupSession, SessionConfig};
use crate::storage::ScoreCommit;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommitFailure {
    pub player_id: PlayerId,
    pub hole: i32,
    pub score: i32,
    pub message: String,
}

/// Session plus the open dialog's draft and the outcome of commits in flight.
#[derive(Clone, Debug)]
pub struct ScoringModel {
    pub config: SessionConfig,
    pub session: GroupSession,
    pub draft: Option<ScoreDraft>,
    pub pending_commits: usize,
    pub commit_failures: Vec<CommitFailure>,
}

impl ScoringModel {
    #[must_use]
    pub fn new(config: SessionConfig, round: &Round, group: &PlayerGroup) -> Self {
        Self {
            config,
            session: GroupSession::new(round, group),
            draft: None,
            pending_commits: 0,
            commit_failures: Vec::new(),
        }
    }

    /// Hands failed commits to the host for display and forgets them.
    pub fn take_commit_failures(&mut self) -> Vec<CommitFailure> {
        std::mem::take(&mut self.commit_failures)
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    RoundSupplied(PlayerGroup),
    ToggleExpanded(PlayerId),
    OpenDialog(Option<i32>),
    CloseDialog,
    TogglePicker,
    SetPickerOpen(bool),
    Increment(PlayerId),
    Decrement(PlayerId),
    /// Out-of-range strokes leave the draft unchanged.
    SetScore(PlayerId, i32),
    SaveAndAdvance,
    CommitSucceeded(Vec<ScoreCommit>),
    CommitFailed {
        commits: Vec<ScoreCommit>,
        error: CoreError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CommitScore(ScoreCommit),
    CommitHole(Vec<ScoreCommit>),
}

impl Effect {
    #[must_use]
    pub fn commit_count(&self) -> usize {
        match self {
            Self::CommitScore(_) => 1,
            Self::CommitHole(commits) => commits.len(),
        }
    }
}

/// Applies one message against the latest round snapshot. Never performs
/// I/O; persistence is returned as effects for the runtime to run.
pub fn update(model: &mut ScoringModel, round: &Round, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::RoundSupplied(group) => {
            if model.session.resync(round, &group) {
                model.draft = None;
            } else if model.session.is_dialog_open
                && model
                    .draft
                    .as_ref()
                    .is_none_or(|draft| draft.hole() != model.session.dialog_hole)
            {
                model.draft = Some(ScoreDraft::seed(
                    round,
                    model.session.dialog_hole,
                    model.session.player_ids(),
                    model.config.default_par,
                ));
            }
            vec![]
        }
        Msg::ToggleExpanded(player_id) => {
            model.session.toggle_expanded(&player_id);
            vec![]
        }
        Msg::OpenDialog(hole) => {
            model.session.open_dialog(hole);
            model.draft = Some(ScoreDraft::seed(
                round,
                model.session.dialog_hole,
                model.session.player_ids(),
                model.config.default_par,
            ));
            vec![]
        }
        Msg::CloseDialog => {
            model.session.close_dialog();
            model.draft = None;
            vec![]
        }
        Msg::TogglePicker => {
            model.session.toggle_picker();
            vec![]
        }
        Msg::SetPickerOpen(open) => {
            model.session.set_picker_open(open);
            vec![]
        }
        Msg::Increment(player_id) => {
            if let Some(draft) = model.draft.as_mut() {
                draft.increment(&player_id);
            }
            vec![]
        }
        Msg::Decrement(player_id) => {
            if let Some(draft) = model.draft.as_mut() {
                draft.decrement(&player_id);
            }
            vec![]
        }
        Msg::SetScore(player_id, score) => {
            if let Some(draft) = model.draft.as_mut() {
                let _ = draft.set(&player_id, score);
            }
            vec![]
        }
        Msg::SaveAndAdvance => {
            if !model.session.is_dialog_open {
                return vec![];
            }
            let Some(draft) = model.draft.take() else {
                return vec![];
            };
            let saved = save_and_advance(
                &mut model.session,
                &draft,
                round,
                &model.config.context,
                model.config.default_par,
                round.hole_count(),
            );
            model.draft = saved.next;
            model.pending_commits += saved.commits.len();
            if saved.commits.is_empty() {
                return vec![];
            }
            match model.config.commit_mode {
                CommitMode::PerPlayer => saved
                    .commits
                    .into_iter()
                    .map(Effect::CommitScore)
                    .collect(),
                CommitMode::Batched => vec![Effect::CommitHole(saved.commits)],
            }
        }
        Msg::CommitSucceeded(commits) => {
            model.pending_commits = model.pending_commits.saturating_sub(commits.len());
            vec![]
        }
        Msg::CommitFailed { commits, error } => {
            model.pending_commits = model.pending_commits.saturating_sub(commits.len());
            model
                .commit_failures
                .extend(commits.into_iter().map(|commit| CommitFailure {
                    player_id: commit.player_id,
                    hole: commit.hole,
                    score: commit.score,
                    message: error.to_string(),
                }));
            vec![]
        }
    }
}
