use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_HOLE_COUNT: i32 = 18;
pub const DEFAULT_HOLE_PAR: i32 = 4;
pub const MIN_STROKES: i32 = 1;
pub const MAX_STROKES: i32 = 15;

pub type PlayerId = String;

/// Per-player hole entries, indexed `0..holes`. A short vector means the
/// trailing holes have not been played.
pub type RoundScores = BTreeMap<PlayerId, Vec<HoleScore>>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl Player {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
            team_id: None,
        }
    }

    #[must_use]
    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain_id: Option<PlayerId>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HoleScore {
    pub hole: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HoleScore {
    #[must_use]
    pub fn played(hole: i32, score: i32) -> Self {
        Self {
            hole,
            score: Some(score),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_par(mut self, par: i32) -> Self {
        self.par = Some(par);
        self
    }
}

fn default_hole_count() -> i32 {
    DEFAULT_HOLE_COUNT
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_hole_count")]
    pub holes: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par: Option<i32>,
}

impl Default for CourseDetails {
    fn default() -> Self {
        Self {
            name: None,
            holes: DEFAULT_HOLE_COUNT,
            par: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub player_ids: Vec<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tee_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_hole: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_details: Option<CourseDetails>,
    #[serde(default)]
    pub format: String,
    /// Authoritative par per hole, indexed `0..holes`. Takes precedence over
    /// any par recorded on individual `HoleScore` entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole_pars: Option<Vec<i32>>,
    #[serde(default)]
    pub scores: RoundScores,
    #[serde(default)]
    pub player_groups: Vec<PlayerGroup>,
}

impl Round {
    /// Number of holes on the course, falling back to 18 when the course
    /// details are missing.
    #[must_use]
    pub fn hole_count(&self) -> i32 {
        self.course_details
            .as_ref()
            .map_or(DEFAULT_HOLE_COUNT, |c| c.holes)
    }

    #[must_use]
    pub fn course_par(&self) -> Option<i32> {
        self.course_details.as_ref().and_then(|c| c.par)
    }

    #[must_use]
    pub fn group(&self, group_id: &str) -> Option<&PlayerGroup> {
        self.player_groups.iter().find(|g| g.id == group_id)
    }

    #[must_use]
    pub fn player_scores(&self, player_id: &str) -> &[HoleScore] {
        self.scores.get(player_id).map_or(&[], Vec::as_slice)
    }

    /// Writes `score` into the player's entry for `hole` (1-based), padding
    /// the sequence with unplayed holes as needed.
    pub fn set_score(&mut self, player_id: &str, hole: i32, score: i32) {
        let Ok(idx) = usize::try_from(hole - 1) else {
            return;
        };
        let entries = self.scores.entry(player_id.to_string()).or_default();
        while entries.len() <= idx {
            let next_hole = i32::try_from(entries.len()).unwrap_or(i32::MAX - 1) + 1;
            entries.push(HoleScore {
                hole: next_hole,
                ..HoleScore::default()
            });
        }
        entries[idx].score = Some(score);
    }
}
