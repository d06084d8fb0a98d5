//! Satellite Image Viewer
//!
//! Browses the satellite captures published by the analytics service.
//!
//! Data flow:
//! 1. On mount: fetch `/api/satellite-images` once (no polling) and select the
//!    first record. A failed or empty fetch leaves nothing selected.
//! 2. Mode buttons switch between the NDVI, true color and near infrared
//!    renderings of the selected record without refetching.
//! 3. Clicking a timeline thumbnail replaces the selection; the mode is kept.

use agri_dash_ui::components::{
    ImageMetricsPanel, ImagePanel, ImageTimeline, LoadingSpinner, ModeSelector,
};
use agri_dash_ui::fetch;
use agri_dash_ui::state::SatelliteDashboardState;
use agri_dash_ui::theme::EARTH_700;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("satellite-viewer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(SatelliteDashboardState::new);

    // ─── Single fetch on mount ───
    use_future(move || async move {
        let config = fetch::api_config();
        log::info!("Satellite image source: {}", config.satellite_images_url());
        let result = fetch::satellite_images(&config).await;
        state.viewer.write().apply(result);
        state.loading.set(false);
    });

    rsx! {
        div {
            class: "satellite-viewer",
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                class: "viewer-header",
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h3 { style: "margin: 0; color: {EARTH_700};", "Satellite Imagery Analysis" }
                ModeSelector {}
            }

            if *state.loading.read() {
                LoadingSpinner { message: "Loading satellite imagery...".to_string() }
            } else {
                div {
                    class: "viewer-content",
                    style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px;",
                    div { class: "image-display", ImagePanel {} }
                    ImageTimeline {}
                }
                ImageMetricsPanel {}
            }
        }
    }
}
