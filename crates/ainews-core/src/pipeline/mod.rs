mod aggregator;
mod recency;

pub use aggregator::{collect_news, items_from_feed, sort_items};
pub use recency::is_recent;
