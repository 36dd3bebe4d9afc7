use html2text::render::TrivialDecorator;

use super::models::{NewsItem, RawEntry};
use crate::{Error, Result};

/// Marker appended to summaries that were cut at the configured length
pub const TRUNCATION_MARKER: &str = "...";

/// Title used for entries that carry none
const UNTITLED: &str = "Untitled";

/// Convert a raw feed entry into a canonical news item.
///
/// The link and publish time are required; an entry missing either is
/// malformed and expected to be skipped (not fatal) by the caller. A
/// missing title falls back to a placeholder, a missing summary becomes
/// an empty string.
pub fn normalize_entry(entry: &RawEntry, summary_length: usize) -> Result<NewsItem> {
    let title = entry
        .title
        .clone()
        .unwrap_or_else(|| UNTITLED.to_string());

    let link = entry
        .link
        .clone()
        .filter(|l| !l.is_empty())
        .ok_or_else(|| Error::MalformedEntry(format!("entry '{}' has no link", title)))?;

    let published_at = entry
        .published_at
        .ok_or_else(|| Error::MalformedEntry(format!("entry '{}' has no publish time", title)))?;
    let published = published_at.format("%Y-%m-%d %H:%M").to_string();

    let summary = entry
        .summary
        .as_deref()
        .map(|s| clean_summary(s, summary_length))
        .unwrap_or_default();

    Ok(NewsItem {
        title,
        link,
        published_at,
        published,
        summary,
    })
}

/// Strip markup from a summary and truncate it to `max_chars` characters,
/// appending the truncation marker only when something was actually cut
pub fn clean_summary(html: &str, max_chars: usize) -> String {
    let text = strip_html(html);
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}{}", &text[..idx], TRUNCATION_MARKER),
        None => text,
    }
}

/// Convert HTML content to plain text with whitespace collapsed
fn strip_html(html: &str) -> String {
    let text = html2text::from_read_with_decorator(html.as_bytes(), 80, TrivialDecorator::new())
        .unwrap_or_else(|_| html.to_string());
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
