use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::io::Read;
use watcher_core::Config;
use watcher_rs::{Params, WatcherClient};

#[derive(Debug, Parser)]
#[command(name = "watcher", version, about = "Manage search-engine watches")]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, default_value = "watcher.json")]
    pub config: String,

    /// Cluster URL, overrides `base_url` from the config file
    #[arg(long, env = "WATCHER_URL")]
    pub url: Option<String>,

    /// Print responses on a single line
    #[arg(long)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show watcher plugin info
    Info,
    /// Show watcher service stats
    Stats,
    /// Start the watcher service
    Start,
    /// Stop the watcher service
    Stop,
    /// Restart the watcher service
    Restart,
    /// Create or replace a watch
    PutWatch {
        id: String,
        /// File holding the watch definition, `-` for stdin
        #[arg(long)]
        body: String,
        #[arg(long)]
        master_timeout: Option<String>,
    },
    /// Retrieve a watch definition
    GetWatch { id: String },
    /// Delete a watch
    DeleteWatch {
        id: String,
        /// Ignore locks held on the watch
        #[arg(long)]
        force: bool,
        #[arg(long)]
        master_timeout: Option<String>,
    },
    /// Acknowledge a watch's actions
    AckWatch {
        id: String,
        #[arg(long)]
        master_timeout: Option<String>,
    },
    /// Execute a watch now
    ExecuteWatch {
        id: String,
        /// File holding the execution control body, `-` for stdin
        #[arg(long)]
        body: Option<String>,
    },
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(url) = &self.url {
            config.base_url = url.clone();
        }
        config
    }
}

fn timeout_params(master_timeout: &Option<String>) -> Params {
    match master_timeout {
        Some(timeout) => Params::new().master_timeout(timeout.clone()),
        None => Params::new(),
    }
}

/// Read a JSON document from a file, or from stdin when `source` is `-`.
pub fn read_body(source: &str) -> Result<Value> {
    let contents = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read body from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read body from {source}"))?
    };

    serde_json::from_str(&contents).with_context(|| format!("Body in {source} is not valid JSON"))
}

/// Run one subcommand against the client and return the response document.
pub async fn run(command: &Command, client: &WatcherClient) -> Result<Value> {
    tracing::debug!(?command, "Running command");

    let response = match command {
        Command::Info => client.info(Params::new()).await?,
        Command::Stats => client.stats(Params::new()).await?,
        Command::Start => client.start(Params::new()).await?,
        Command::Stop => client.stop(Params::new()).await?,
        Command::Restart => client.restart(Params::new()).await?,
        Command::PutWatch {
            id,
            body,
            master_timeout,
        } => {
            let body = read_body(body)?;
            client
                .put_watch(id, body, timeout_params(master_timeout))
                .await?
        }
        Command::GetWatch { id } => client.get_watch(id, Params::new()).await?,
        Command::DeleteWatch {
            id,
            force,
            master_timeout,
        } => {
            let mut params = timeout_params(master_timeout);
            if *force {
                params = params.force(true);
            }
            client.delete_watch(id, params).await?
        }
        Command::AckWatch { id, master_timeout } => {
            client.ack_watch(id, timeout_params(master_timeout)).await?
        }
        Command::ExecuteWatch { id, body } => {
            let body = body.as_deref().map(read_body).transpose()?;
            client.execute_watch(id, body, Params::new()).await?
        }
    };

    Ok(response)
}

/// Render a response for stdout.
pub fn render(response: &Value, compact: bool) -> Result<String> {
    let out = if compact {
        serde_json::to_string(response)?
    } else {
        serde_json::to_string_pretty(response)?
    };
    Ok(out)
}
