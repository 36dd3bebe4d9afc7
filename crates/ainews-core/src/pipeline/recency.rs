use chrono::{DateTime, Duration, Utc};

/// Whether an entry published at `published_at` falls within the trailing
/// `window` ending at `now`.
///
/// The lower bound is inclusive: an entry published exactly at
/// `now - window` is recent. Entries without a publish time never are.
pub fn is_recent(
    published_at: Option<DateTime<Utc>>,
    window: Duration,
    now: DateTime<Utc>,
) -> bool {
    match published_at {
        Some(t) => t >= now - window && t <= now,
        None => false,
    }
}
