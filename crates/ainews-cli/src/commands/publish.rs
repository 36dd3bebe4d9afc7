use anyhow::Result;

use ainews_core::publish::{GitPublisher, PublishOutcome};
use ainews_core::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    let repo_dir = std::env::current_dir()?;
    let publisher = GitPublisher::new(&config.publish, &repo_dir);

    match publisher.publish(&config.output_dir()).await {
        Ok(PublishOutcome::Pushed) => {
            println!("Published to branch '{}'.", config.publish.branch);
        }
        Ok(PublishOutcome::NothingToPublish) => {
            println!("Nothing changed; skipped publish.");
        }
        Err(e) => {
            tracing::error!("Publish failed: {}", e);
            println!("Publish failed; see log for details.");
        }
    }

    Ok(())
}
