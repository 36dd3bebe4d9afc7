use anyhow::Result;

use ainews_core::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    let artifacts = super::fetch::fetch_and_render(config).await?;

    if !config.publish.enabled {
        return Ok(());
    }

    if artifacts.is_empty() {
        tracing::warn!("No artifacts produced; skipping publish");
        return Ok(());
    }

    super::publish::run(config).await
}
