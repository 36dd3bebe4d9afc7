use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ainews_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "ainews")]
#[command(author, version, about = "Aggregate AI news feeds into text and HTML digests")]
struct Cli {
    /// Path to the configuration file (default: ~/.config/ainews/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch feeds, render artifacts, and publish them if enabled
    Run,
    /// Fetch feeds and render artifacts without publishing
    Fetch,
    /// Publish the current output directory without fetching
    Publish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = match cli.config {
        Some(path) => AppConfig::load_from(&path)?,
        None => AppConfig::load()?,
    };

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(&config).await,
        Some(Commands::Fetch) => commands::fetch::run(&config).await,
        Some(Commands::Publish) => commands::publish::run(&config).await,
    }
}
