//! Generated content, alternative titles, history items and session state.
//!
//! Field names serialize in camelCase so persisted blobs keep the
//! `{currentTopic, currentContent}` / `[{id, timestamp, videoTopic, content}]`
//! shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the history log.
pub const HISTORY_CAPACITY: usize = 10;

/// Maximum number of alternative titles exposed to callers.
pub const MAX_ALTERNATIVE_TITLES: usize = 3;

/// Inclusive upper bound of an alternative title's SEO score.
pub const MAX_SEO_SCORE: u8 = 100;

/// One primary generation result.
///
/// Length and cardinality targets (60-70 character title, 10-15 hashtags,
/// ~40 keywords) are prompt hints and are not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
    pub keywords: Vec<String>,
    pub pinned_comment: String,
}

impl GeneratedContent {
    /// Names of required fields that are blank (empty string or empty list).
    ///
    /// An empty result means every field carries a value.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        let mut blank = Vec::new();
        if self.title.trim().is_empty() {
            blank.push("title");
        }
        if self.description.trim().is_empty() {
            blank.push("description");
        }
        if self.hashtags.is_empty() {
            blank.push("hashtags");
        }
        if self.keywords.is_empty() {
            blank.push("keywords");
        }
        if self.pinned_comment.trim().is_empty() {
            blank.push("pinnedComment");
        }
        blank
    }
}

/// A candidate replacement title with its click-through score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeTitle {
    pub title: String,
    /// 0-100 inclusive.
    pub seo_score: u8,
}

impl AlternativeTitle {
    /// Build a title from a raw provider score, clamping it into 0-100.
    pub fn from_raw_score(title: String, raw_score: i64) -> Self {
        let seo_score = raw_score.clamp(0, i64::from(MAX_SEO_SCORE)) as u8;
        Self { title, seo_score }
    }

    /// Coarse rating bucket used when rendering scores.
    pub fn rating(&self) -> ScoreRating {
        match self.seo_score {
            70..=u8::MAX => ScoreRating::High,
            40..=69 => ScoreRating::Medium,
            _ => ScoreRating::Low,
        }
    }
}

/// Rating bucket of an SEO score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRating {
    High,
    Medium,
    Low,
}

/// Immutable snapshot of one past successful primary generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub video_topic: String,
    pub content: GeneratedContent,
}

impl HistoryItem {
    /// Creation time as a UTC datetime, if the stored timestamp is in range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// The topic being edited and the content currently displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub current_topic: String,
    #[serde(default)]
    pub current_content: Option<GeneratedContent>,
}

impl SessionState {
    pub fn new(current_topic: impl Into<String>, current_content: Option<GeneratedContent>) -> Self {
        Self {
            current_topic: current_topic.into(),
            current_content,
        }
    }
}
