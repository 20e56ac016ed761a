use clap::Parser;
use tracing_subscriber::EnvFilter;

use items_api::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up JWT_SECRET, ITEMS_BASE_PATH, etc.
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `items-api token` output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = items_api::config::config();
    tracing::debug!("Starting Items API in {:?} mode", config.environment);

    cli::run(Cli::parse()).await
}
