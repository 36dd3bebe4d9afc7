use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;

use ainews_core::feed::FeedFetcher;
use ainews_core::pipeline::collect_news;
use ainews_core::render::{write_html_page, write_text_report};
use ainews_core::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    let artifacts = fetch_and_render(config).await?;

    if artifacts.is_empty() {
        println!("No artifacts produced.");
    } else {
        println!("Wrote {} artifact(s) to {}", artifacts.len(), config.output_dir().display());
    }

    Ok(())
}

/// Run the aggregation pipeline and render both artifacts.
///
/// A failed artifact write is logged and reported absent; the sibling
/// artifact is unaffected. An empty item list produces no artifacts.
pub async fn fetch_and_render(config: &AppConfig) -> Result<Vec<PathBuf>> {
    let mut fetcher = FeedFetcher::new(&config.sync)?;
    let items = collect_news(&mut fetcher, &config.pipeline).await;

    if items.is_empty() {
        println!("No news items fetched.");
        return Ok(Vec::new());
    }
    println!("Fetched {} news items.", items.len());

    let generated_at = Local::now();
    let output_dir = config.output_dir();
    let mut artifacts = Vec::new();

    match write_text_report(&items, &output_dir, generated_at) {
        Ok(path) => {
            tracing::info!("Wrote text report: {}", path.display());
            artifacts.push(path);
        }
        Err(e) => tracing::error!("Failed to write text report: {}", e),
    }

    match write_html_page(&items, &output_dir, generated_at) {
        Ok(path) => {
            tracing::info!("Wrote HTML page: {}", path.display());
            artifacts.push(path);
        }
        Err(e) => tracing::error!("Failed to write HTML page: {}", e),
    }

    Ok(artifacts)
}
