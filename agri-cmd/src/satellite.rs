//! Satellite image command.

use crate::report::satellite_report;
use agri_core::api::AnalyticsClient;
use agri_core::ids::ImageId;
use agri_core::imagery::AnalysisMode;
use agri_core::satellite::SatelliteViewerState;

/// Fetch the image list once and print the viewer report in `mode`,
/// optionally selecting `select` instead of the first image.
pub async fn run_satellite_images(
    client: &AnalyticsClient,
    mode: AnalysisMode,
    select: Option<&str>,
) -> anyhow::Result<()> {
    let result = client.satellite_images().await;
    if let Err(e) = &result {
        anyhow::bail!(
            "Failed to fetch {}: {}",
            client.config().satellite_images_url(),
            e
        );
    }

    let mut state = SatelliteViewerState::new();
    state.apply(result);
    state.set_mode(mode);
    if let Some(id) = select {
        state.select(&ImageId::from(id));
    }

    println!("{}", satellite_report(&state));
    Ok(())
}
