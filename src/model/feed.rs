use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::PlayerId;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ShoutOutKind {
    Birdie,
    Eagle,
    HoleInOne,
    Other,
}

impl ShoutOutKind {
    #[must_use]
    pub fn headline(self, hole_number: i32) -> String {
        match self {
            Self::Birdie => format!("Birdie on hole {hole_number}"),
            Self::Eagle => format!("Eagle on hole {hole_number}"),
            Self::HoleInOne => format!("Hole in one on hole {hole_number}!"),
            Self::Other => format!("Shout-out on hole {hole_number}"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShoutOut {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ShoutOutKind,
    pub player_id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_id: Option<String>,
    pub hole_number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ShoutOut {
    /// The user's message, or a headline derived from the achievement.
    #[must_use]
    pub fn display_message(&self) -> String {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.kind.headline(self.hole_number))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub id: String,
    pub player_id: PlayerId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FeedKind {
    ShoutOut,
    Highlight,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum FeedData {
    ShoutOut(ShoutOut),
    Highlight(Highlight),
}

/// Shared envelope around either feed variant, ordered by `timestamp`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FeedItem {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub data: FeedData,
}

impl FeedItem {
    #[must_use]
    pub fn kind(&self) -> FeedKind {
        match self.data {
            FeedData::ShoutOut(_) => FeedKind::ShoutOut,
            FeedData::Highlight(_) => FeedKind::Highlight,
        }
    }

    #[must_use]
    pub fn player_id(&self) -> &str {
        match &self.data {
            FeedData::ShoutOut(s) => &s.player_id,
            FeedData::Highlight(h) => &h.player_id,
        }
    }

    #[must_use]
    pub fn round_id(&self) -> Option<&str> {
        match &self.data {
            FeedData::ShoutOut(s) => s.round_id.as_deref(),
            FeedData::Highlight(h) => h.round_id.as_deref(),
        }
    }
}

impl From<ShoutOut> for FeedItem {
    fn from(shout_out: ShoutOut) -> Self {
        Self {
            id: shout_out.id.clone(),
            timestamp: shout_out.timestamp,
            data: FeedData::ShoutOut(shout_out),
        }
    }
}

impl From<Highlight> for FeedItem {
    fn from(highlight: Highlight) -> Self {
        Self {
            id: highlight.id.clone(),
            timestamp: highlight.timestamp,
            data: FeedData::Highlight(highlight),
        }
    }
}
