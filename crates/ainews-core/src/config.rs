use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub publish: PublishConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            output: OutputConfig::default(),
            publish: PublishConfig::default(),
            sync: SyncConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Ordered list of RSS/Atom feed URLs
    #[serde(default = "default_feed_urls")]
    pub feed_urls: Vec<String>,
    /// Maximum entries considered per feed
    #[serde(default = "default_max_items_per_feed")]
    pub max_items_per_feed: usize,
    /// Summary truncation length in characters
    #[serde(default = "default_summary_length")]
    pub summary_length: usize,
    /// Trailing recency window in hours (absent = keep all entries)
    #[serde(default)]
    pub recency_window_hours: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            feed_urls: default_feed_urls(),
            max_items_per_feed: default_max_items_per_feed(),
            summary_length: default_summary_length(),
            recency_window_hours: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the rendered artifacts are written to
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Publish rendered artifacts after a run
    #[serde(default)]
    pub enabled: bool,
    /// Remote repository URL (ssh or https)
    #[serde(default)]
    pub remote: String,
    /// Branch to push to; must match the local HEAD branch
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            remote: String::new(),
            branch: default_branch(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Capacity of the per-URL feed cache
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_feed_urls() -> Vec<String> {
    vec![
        "https://www.artificialintelligence-news.com/feed/".to_string(),
        "https://venturebeat.com/tag/ai/feed/".to_string(),
    ]
}

fn default_max_items_per_feed() -> usize {
    20
}

fn default_summary_length() -> usize {
    300
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("news_output")
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_cache_capacity() -> usize {
    128
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/ainews/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("ainews")
            .join("config.toml")
    }

    /// Get the output directory (with tilde expansion)
    pub fn output_dir(&self) -> PathBuf {
        expand_tilde(&self.output.dir)
    }
}
