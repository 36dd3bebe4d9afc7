use super::models::ParsedFeed;

/// Bounded least-recently-used cache of parsed feeds, keyed by URL.
///
/// Entries are kept most-recently-used first; inserting past capacity
/// evicts from the tail. Lookups are linear; the cache holds at most a
/// few hundred feeds.
pub struct FeedCache {
    capacity: usize,
    entries: Vec<(String, ParsedFeed)>,
}

impl FeedCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    /// Look up a URL, refreshing its recency on a hit
    pub fn get(&mut self, url: &str) -> Option<&ParsedFeed> {
        let idx = self.entries.iter().position(|(u, _)| u.as_str() == url)?;
        let entry = self.entries.remove(idx);
        self.entries.insert(0, entry);
        Some(&self.entries[0].1)
    }

    /// Insert or replace a URL's feed, evicting the least-recently-used
    /// entry if the cache is full
    pub fn insert(&mut self, url: String, feed: ParsedFeed) {
        if let Some(idx) = self.entries.iter().position(|(u, _)| *u == url) {
            self.entries.remove(idx);
        }
        self.entries.insert(0, (url, feed));
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(title: &str) -> ParsedFeed {
        ParsedFeed {
            title: Some(title.to_string()),
            entries: Vec::new(),
        }
    }

    #[test]
    fn test_get_miss_and_hit() {
        let mut cache = FeedCache::new(4);
        assert!(cache.get("https://a.example/feed").is_none());

        cache.insert("https://a.example/feed".to_string(), feed("a"));
        let hit = cache.get("https://a.example/feed").unwrap();
        assert_eq!(hit.title.as_deref(), Some("a"));
    }

    #[test]
    fn test_capacity_bound_evicts_least_recently_used() {
        let mut cache = FeedCache::new(2);
        cache.insert("a".to_string(), feed("a"));
        cache.insert("b".to_string(), feed("b"));
        cache.insert("c".to_string(), feed("c"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_get_refreshes_recency() {
        let mut cache = FeedCache::new(2);
        cache.insert("a".to_string(), feed("a"));
        cache.insert("b".to_string(), feed("b"));

        // Touch "a" so "b" becomes the eviction candidate
        assert!(cache.get("a").is_some());
        cache.insert("c".to_string(), feed("c"));

        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn test_insert_replaces_existing_url() {
        let mut cache = FeedCache::new(2);
        cache.insert("a".to_string(), feed("old"));
        cache.insert("a".to_string(), feed("new"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a").unwrap().title.as_deref(), Some("new"));
    }

    #[test]
    fn test_zero_capacity_caches_nothing() {
        let mut cache = FeedCache::new(0);
        cache.insert("a".to_string(), feed("a"));
        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());
    }
}
