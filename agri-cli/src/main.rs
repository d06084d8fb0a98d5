//! Agri CLI - Command line companion for the crop analytics dashboard.

use agri_core::api::AnalyticsClient;
use agri_core::config::{ApiConfig, DEFAULT_BASE_URL};
use clap::Parser;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "agri-cli",
    version,
    about = "Crop monitoring analytics from the terminal"
)]
struct Cli {
    /// Base URL of the analytics service
    #[arg(short = 'u', long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: agri_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ApiConfig::new(&cli.base_url).with_timeout(Duration::from_secs(cli.timeout_secs));
    log::debug!("Using analytics service at {}", config.base_url());
    let client = AnalyticsClient::new(config)?;
    agri_cmd::run(cli.command, client).await
}
