use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry as delivered by a feed, prior to normalization
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// A parsed feed with its raw entries
#[derive(Debug, Clone)]
pub struct ParsedFeed {
    pub title: Option<String>,
    pub entries: Vec<RawEntry>,
}

/// The canonical news item used throughout the pipeline.
/// Constructed once during normalization and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    /// Sortable publish time
    pub published_at: DateTime<Utc>,
    /// Display form of `published_at` (UTC, `%Y-%m-%d %H:%M`)
    pub published: String,
    /// Plain-text summary, markup stripped and truncated
    pub summary: String,
}
