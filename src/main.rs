use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskdeck::config::{Config, ConfigStore};
use taskdeck::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "taskdeck", about = "Terminal client for task and project management")]
struct Args {
    /// Backend base URL (overrides the config file).
    #[arg(long)]
    base_url: Option<String>,

    /// Serve built-in sample data instead of talking to a backend.
    #[arg(long)]
    offline: bool,

    /// Path to the config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append logs to this file. The terminal itself belongs to the UI, so
    /// there is no logging without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path).context("failed to load configuration")?;

    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if args.offline {
        config.api.offline = true;
    }
    config.validate().context("invalid configuration")?;

    tracing::info!(
        base_url = %config.api.base_url,
        offline = config.api.offline,
        "starting taskdeck"
    );

    let store = ConfigStore::new(config, config_path);
    runtime::run(store).await
}
