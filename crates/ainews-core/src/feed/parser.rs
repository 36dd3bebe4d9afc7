use chrono::{DateTime, Utc};
use feed_rs::parser;

use super::models::{ParsedFeed, RawEntry};
use crate::{Error, Result};

/// Parse RSS/Atom feed content into raw entries
pub fn parse_feed(content: &[u8]) -> Result<ParsedFeed> {
    let feed = parser::parse(content).map_err(|e| Error::FeedParse(e.to_string()))?;

    let title = feed.title.map(|t| t.content);

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| {
            let title = entry.title.map(|t| t.content);

            let link = entry.links.first().map(|l| l.href.clone());

            let summary = entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body));

            let published_at = entry
                .published
                .or(entry.updated)
                .map(|dt| DateTime::<Utc>::from(dt));

            RawEntry {
                title,
                link,
                summary,
                published_at,
            }
        })
        .collect();

    Ok(ParsedFeed { title, entries })
}
