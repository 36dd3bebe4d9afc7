use chrono::{DateTime, Duration, Utc};

use super::recency::is_recent;
use crate::config::PipelineConfig;
use crate::feed::{normalize_entry, FeedFetcher, NewsItem, ParsedFeed};

/// Fetch every configured feed in order and merge the results into one
/// list sorted by publish time, newest first.
///
/// Feeds are fetched sequentially. A feed that fails to fetch or parse
/// contributes zero items and does not abort the run.
pub async fn collect_news(fetcher: &mut FeedFetcher, config: &PipelineConfig) -> Vec<NewsItem> {
    let now = Utc::now();
    let mut items = Vec::new();

    for url in &config.feed_urls {
        match fetcher.fetch(url).await {
            Ok(feed) => {
                let accepted = items_from_feed(&feed, config, now);
                tracing::info!(
                    "Feed '{}': accepted {} of {} entries",
                    url,
                    accepted.len(),
                    feed.entries.len()
                );
                items.extend(accepted);
            }
            Err(e) => {
                tracing::error!("Failed to fetch feed '{}': {}", url, e);
            }
        }
    }

    sort_items(&mut items);
    items
}

/// Per-feed stage: consider at most `max_items_per_feed` entries, drop
/// those outside the recency window (when one is configured), and
/// normalize the rest. Malformed entries are logged and skipped.
pub fn items_from_feed(
    feed: &ParsedFeed,
    config: &PipelineConfig,
    now: DateTime<Utc>,
) -> Vec<NewsItem> {
    let window = config
        .recency_window_hours
        .map(|hours| Duration::hours(hours as i64));

    let mut accepted = Vec::new();

    for entry in feed.entries.iter().take(config.max_items_per_feed) {
        if let Some(window) = window {
            if !is_recent(entry.published_at, window, now) {
                continue;
            }
        }

        match normalize_entry(entry, config.summary_length) {
            Ok(item) => accepted.push(item),
            Err(e) => tracing::warn!("Skipping entry: {}", e),
        }
    }

    accepted
}

/// Stable sort by publish time, newest first; ties keep input order
pub fn sort_items(items: &mut [NewsItem]) {
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::RawEntry;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 4, 12, 0, 0).unwrap()
    }

    fn entry(link: &str, hours_ago: i64) -> RawEntry {
        RawEntry {
            title: Some(format!("Story {}", link)),
            link: Some(format!("https://example.com/{}", link)),
            summary: Some("A summary.".to_string()),
            published_at: Some(now() - Duration::hours(hours_ago)),
        }
    }

    fn feed(entries: Vec<RawEntry>) -> ParsedFeed {
        ParsedFeed {
            title: Some("Fixture".to_string()),
            entries,
        }
    }

    fn config() -> PipelineConfig {
        PipelineConfig {
            feed_urls: Vec::new(),
            max_items_per_feed: 20,
            summary_length: 300,
            recency_window_hours: None,
        }
    }

    #[test]
    fn test_cap_bounds_entries_considered() {
        let mut cfg = config();
        cfg.max_items_per_feed = 2;

        let f = feed(vec![entry("a", 1), entry("b", 2), entry("c", 3)]);
        let items = items_from_feed(&f, &cfg, now());

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].link, "https://example.com/a");
        assert_eq!(items[1].link, "https://example.com/b");
    }

    #[test]
    fn test_malformed_entries_are_skipped_not_fatal() {
        let mut bad = entry("bad", 1);
        bad.link = None;

        let f = feed(vec![entry("a", 1), bad, entry("b", 2)]);
        let items = items_from_feed(&f, &config(), now());

        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_recency_window_drops_old_entries() {
        let mut cfg = config();
        cfg.recency_window_hours = Some(24);

        let mut undated = entry("undated", 1);
        undated.published_at = None;

        let f = feed(vec![entry("fresh", 1), entry("stale", 48), undated]);
        let items = items_from_feed(&f, &cfg, now());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].link, "https://example.com/fresh");
    }

    #[test]
    fn test_no_window_keeps_old_entries() {
        let f = feed(vec![entry("fresh", 1), entry("stale", 48)]);
        let items = items_from_feed(&f, &config(), now());
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_merged_output_is_sorted_descending() {
        let cfg = config();
        let mut items = items_from_feed(&feed(vec![entry("a", 5), entry("b", 1)]), &cfg, now());
        items.extend(items_from_feed(
            &feed(vec![entry("c", 3), entry("d", 10)]),
            &cfg,
            now(),
        ));

        sort_items(&mut items);

        let order: Vec<&str> = items.iter().map(|i| i.link.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "https://example.com/b",
                "https://example.com/c",
                "https://example.com/a",
                "https://example.com/d",
            ]
        );

        for pair in items.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }

    #[test]
    fn test_sort_ties_preserve_input_order() {
        let cfg = config();
        let mut items = items_from_feed(
            &feed(vec![entry("first", 2), entry("second", 2), entry("third", 2)]),
            &cfg,
            now(),
        );

        sort_items(&mut items);

        assert_eq!(items[0].link, "https://example.com/first");
        assert_eq!(items[1].link, "https://example.com/second");
        assert_eq!(items[2].link, "https://example.com/third");
    }

    #[test]
    fn test_failed_feed_contributes_zero_items() {
        // Two feeds, one good and one erroring: the aggregator loop drops
        // the failed feed and keeps going, exactly as modelled here.
        let cfg = config();
        let results: Vec<crate::Result<ParsedFeed>> = vec![
            Ok(feed(vec![entry("a", 2), entry("b", 1), entry("c", 3)])),
            Err(crate::Error::FeedParse("connection refused".to_string())),
        ];

        let mut items = Vec::new();
        for result in results {
            if let Ok(feed) = result {
                items.extend(items_from_feed(&feed, &cfg, now()));
            }
        }
        sort_items(&mut items);

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].link, "https://example.com/b");
        assert_eq!(items[2].link, "https://example.com/c");
    }
}
