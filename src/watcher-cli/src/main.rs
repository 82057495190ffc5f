use anyhow::Result;
use clap::Parser;
use watcher_cli::cli::{self, Cli};
use watcher_cli::telemetry;
use watcher_core::Config;
use watcher_rs::WatcherClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Logging depends on the config, so report a load failure once tracing is up
    let loaded = Config::load(&args.config);
    let config = args.apply_overrides(loaded.as_ref().cloned().unwrap_or_default());

    let _guard = telemetry::init_telemetry(&config.logging)?;
    if let Err(e) = &loaded {
        tracing::warn!("Failed to load {} ({}), using defaults", args.config, e);
    }

    tracing::debug!(base_url = %config.base_url, "Connecting");
    let client = WatcherClient::from_config(&config)?;

    let response = cli::run(&args.command, &client).await?;
    println!("{}", cli::render(&response, args.compact)?);

    Ok(())
}
