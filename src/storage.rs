use ahash::AHashMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::{MAX_STROKES, MIN_STROKES, PlayerId, Round};

/// Which screen a scoring session belongs to. Carried on every commit so a
/// single store can route standalone, tournament and tour rounds.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RoundContext {
    #[default]
    Standalone,
    #[serde(rename_all = "camelCase")]
    Tournament { tournament_id: String },
    #[serde(rename_all = "camelCase")]
    Tour { tour_id: String, event_id: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCommit {
    pub context: RoundContext,
    pub round_id: String,
    pub player_id: PlayerId,
    pub hole: i32,
    pub score: i32,
}

/// Why a store refused or failed a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError(String);

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for StorageError {}

#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn save_score(&self, commit: &ScoreCommit) -> Result<(), StorageError>;

    /// Saves every player's score for one hole. Implementations that can
    /// should make this all-or-nothing; the default saves one at a time and
    /// stops at the first failure.
    async fn save_hole(&self, commits: &[ScoreCommit]) -> Result<(), StorageError> {
        for commit in commits {
            self.save_score(commit).await?;
        }
        Ok(())
    }
}

pub type RoundMap = Arc<RwLock<AHashMap<String, Round>>>;

/// Process-local store keyed by round id.
#[derive(Clone, Default)]
pub struct MemoryScoreStore {
    rounds: RoundMap,
    log: Arc<RwLock<Vec<ScoreCommit>>>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_round(&self, round: Round) {
        self.rounds.write().await.insert(round.id.clone(), round);
    }

    pub async fn round(&self, round_id: &str) -> Option<Round> {
        self.rounds.read().await.get(round_id).cloned()
    }

    /// Every commit applied so far, in order.
    pub async fn commit_log(&self) -> Vec<ScoreCommit> {
        self.log.read().await.clone()
    }
}

fn validate(rounds: &AHashMap<String, Round>, commit: &ScoreCommit) -> Result<(), StorageError> {
    let round = rounds
        .get(&commit.round_id)
        .ok_or_else(|| StorageError::new(format!("round {} not found", commit.round_id)))?;
    if commit.hole < 1 || commit.hole > round.hole_count() {
        return Err(StorageError::new(format!(
            "hole {} is outside 1..={} for round {}",
            commit.hole,
            round.hole_count(),
            commit.round_id
        )));
    }
    if !(MIN_STROKES..=MAX_STROKES).contains(&commit.score) {
        return Err(StorageError::new(format!(
            "score {} for {} on hole {} is outside {MIN_STROKES}..={MAX_STROKES}",
            commit.score, commit.player_id, commit.hole
        )));
    }
    Ok(())
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn save_score(&self, commit: &ScoreCommit) -> Result<(), StorageError> {
        let mut rounds = self.rounds.write().await;
        validate(&rounds, commit)?;
        if let Some(round) = rounds.get_mut(&commit.round_id) {
            round.set_score(&commit.player_id, commit.hole, commit.score);
        }
        self.log.write().await.push(commit.clone());
        Ok(())
    }

    async fn save_hole(&self, commits: &[ScoreCommit]) -> Result<(), StorageError> {
        let mut rounds = self.rounds.write().await;
        for commit in commits {
            validate(&rounds, commit)?;
        }
        for commit in commits {
            if let Some(round) = rounds.get_mut(&commit.round_id) {
                round.set_score(&commit.player_id, commit.hole, commit.score);
            }
        }
        self.log.write().await.extend(commits.iter().cloned());
        Ok(())
    }
}
