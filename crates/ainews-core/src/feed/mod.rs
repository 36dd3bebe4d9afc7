mod cache;
mod fetcher;
mod models;
mod normalizer;
mod parser;

pub use cache::FeedCache;
pub use fetcher::FeedFetcher;
pub use models::{NewsItem, ParsedFeed, RawEntry};
pub use normalizer::{clean_summary, normalize_entry};
pub use parser::parse_feed;
