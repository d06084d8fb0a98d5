//! Command implementations for the crop analytics CLI.
//!
//! The commands drive the same view state as the browser dashboards, so a
//! terminal session sees exactly what the dashboards would show: one-shot
//! reports, or a polling watch that keeps the last good snapshot on failure.

use agri_core::api::AnalyticsClient;
use agri_core::imagery::AnalysisMode;
use clap::Subcommand;
use std::time::Duration;

pub mod crop;
pub mod report;
pub mod satellite;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch crop analytics once and print the dashboard report
    CropAnalysis {
        /// Field id to show details for
        #[arg(short = 'f', long)]
        field: Option<String>,
    },

    /// Poll crop analytics on a fixed interval until interrupted
    Watch {
        /// Seconds between refreshes
        #[arg(short = 'i', long, default_value_t = 300)]
        interval_secs: u64,

        /// Field id to show details for
        #[arg(short = 'f', long)]
        field: Option<String>,

        /// Stop after this many refreshes
        #[arg(short = 'n', long)]
        count: Option<u32>,
    },

    /// Fetch the satellite image list once and print the viewer report
    SatelliteImages {
        /// Band to display: ndvi, rgb or nir
        #[arg(short = 'm', long, default_value = "ndvi")]
        mode: AnalysisMode,

        /// Image id to select instead of the first one
        #[arg(short = 's', long)]
        select: Option<String>,
    },
}

pub async fn run(command: Command, client: AnalyticsClient) -> anyhow::Result<()> {
    match command {
        Command::CropAnalysis { field } => {
            crop::run_crop_analysis(&client, field.as_deref()).await
        }
        Command::Watch {
            interval_secs,
            field,
            count,
        } => {
            let options = crop::WatchOptions {
                period: Duration::from_secs(interval_secs.max(1)),
                field,
                max_polls: count,
            };
            crop::run_watch(&client, &options).await
        }
        Command::SatelliteImages { mode, select } => {
            satellite::run_satellite_images(&client, mode, select.as_deref()).await
        }
    }
}
