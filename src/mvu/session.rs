use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{DEFAULT_HOLE_PAR, PlayerGroup, PlayerId, Round};
use crate::score::first_incomplete_hole;
use crate::storage::RoundContext;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CommitMode {
    /// One commit per player; a failure for one player does not stop the others.
    #[default]
    PerPlayer,
    /// One all-or-nothing commit per hole.
    Batched,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    #[serde(default)]
    pub context: RoundContext,
    #[serde(default)]
    pub commit_mode: CommitMode,
    #[serde(default = "default_par")]
    pub default_par: i32,
}

fn default_par() -> i32 {
    DEFAULT_HOLE_PAR
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            context: RoundContext::Standalone,
            commit_mode: CommitMode::PerPlayer,
            default_par: DEFAULT_HOLE_PAR,
        }
    }
}

/// What a session is "about". Position is only re-derived when this changes.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SessionIdentity {
    round_id: String,
    members: BTreeSet<PlayerId>,
}

impl SessionIdentity {
    fn of(round: &Round, group: &PlayerGroup) -> Self {
        Self {
            round_id: round.id.clone(),
            members: group.player_ids.iter().cloned().collect(),
        }
    }
}

/// Live editing state for one group on one round.
#[derive(Clone, Debug)]
pub struct GroupSession {
    identity: SessionIdentity,
    pub group: PlayerGroup,
    pub hole_count: i32,
    pub current_hole: i32,
    pub dialog_hole: i32,
    pub expanded_player_ids: BTreeSet<PlayerId>,
    pub is_dialog_open: bool,
    pub is_hole_picker_open: bool,
}

impl GroupSession {
    #[must_use]
    pub fn new(round: &Round, group: &PlayerGroup) -> Self {
        let hole_count = round.hole_count();
        let start = first_incomplete_hole(&group.player_ids, &round.scores, hole_count);
        Self {
            identity: SessionIdentity::of(round, group),
            group: group.clone(),
            hole_count,
            current_hole: start,
            dialog_hole: start,
            expanded_player_ids: BTreeSet::new(),
            is_dialog_open: false,
            is_hole_picker_open: false,
        }
    }

    #[must_use]
    pub fn round_id(&self) -> &str {
        &self.identity.round_id
    }

    #[must_use]
    pub fn player_ids(&self) -> &[PlayerId] {
        &self.group.player_ids
    }

    /// Takes a fresh round snapshot. A different round or a different set of
    /// group members starts the session over; anything else (typically a
    /// saved score) keeps the current position. Returns true on a restart.
    pub fn resync(&mut self, round: &Round, group: &PlayerGroup) -> bool {
        let identity = SessionIdentity::of(round, group);
        if identity != self.identity {
            *self = Self::new(round, group);
            return true;
        }

        self.group = group.clone();
        self.hole_count = round.hole_count();
        if self.hole_count >= 1 {
            self.current_hole = self.current_hole.clamp(1, self.hole_count);
            self.dialog_hole = self.dialog_hole.clamp(1, self.hole_count);
        }
        false
    }

    pub fn toggle_expanded(&mut self, player_id: &str) {
        if !self.expanded_player_ids.remove(player_id) {
            self.expanded_player_ids.insert(player_id.to_string());
        }
    }

    #[must_use]
    pub fn is_expanded(&self, player_id: &str) -> bool {
        self.expanded_player_ids.contains(player_id)
    }

    /// Opens score entry on `hole`, or on the current hole when none is
    /// given. Hole numbers below 1 are ignored.
    pub fn open_dialog(&mut self, hole: Option<i32>) {
        match hole.filter(|h| *h >= 1) {
            Some(hole) => {
                self.current_hole = hole;
                self.dialog_hole = hole;
            }
            None => self.dialog_hole = self.current_hole,
        }
        self.is_dialog_open = true;
        self.is_hole_picker_open = false;
    }

    /// Closes score entry; the current hole follows wherever the dialog
    /// ended up and every expanded card collapses.
    pub fn close_dialog(&mut self) {
        self.is_dialog_open = false;
        self.current_hole = self.dialog_hole;
        self.expanded_player_ids.clear();
    }

    pub fn toggle_picker(&mut self) {
        self.is_hole_picker_open = !self.is_hole_picker_open;
    }

    pub fn set_picker_open(&mut self, open: bool) {
        self.is_hole_picker_open = open;
    }

    pub(crate) fn advance_dialog(&mut self) {
        self.dialog_hole += 1;
        self.current_hole = self.dialog_hole;
    }
}
