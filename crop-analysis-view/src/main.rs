//! Crop Analysis View
//!
//! Periodically pulls aggregate analytics from the analytics service and shows
//! the NDVI trend, field health distribution, yield forecast and a field
//! detail panel.
//!
//! Data flow:
//! 1. A refresh coroutine fetches `/api/crop-analysis` on mount and then once
//!    per trigger it receives.
//! 2. `use_interval` sends a trigger every 5 minutes while the view is mounted;
//!    the Refresh button sends one on demand. Both go through the same
//!    coroutine, so refreshes never overlap. Triggers that queued up while a
//!    request was in flight collapse into one refresh, and every request is
//!    aborted after the configured timeout.
//! 3. Each refresh takes a sequence token first. A successful response replaces
//!    the whole snapshot; a failure is logged and the previous snapshot stays.
//! 4. Chart payloads are memoized from the snapshot and re-rendered via D3.js
//!    only when they change.

use agri_core::chart::{HealthBarChart, NdviLineChart};
use agri_core::config::{ApiConfig, CROP_REFRESH_PERIOD};
use agri_core::refresh::{coalesce, RefreshTrigger};
use agri_dash_ui::components::{
    ChartContainer, ChartHeader, FieldDetails, FieldSelector, StatusIndicator, StatusPanel,
    YieldSummary,
};
use agri_dash_ui::interval::use_interval;
use agri_dash_ui::state::CropDashboardState;
use agri_dash_ui::theme::{StatusLevel, MUTED_TEXT, PRIMARY_600, PRIMARY_700};
use agri_dash_ui::{fetch, js_bridge};
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;

/// DOM ids for the D3 chart container divs.
const NDVI_CHART_ID: &str = "ndvi-chart";
const HEALTH_CHART_ID: &str = "health-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("crop-analysis-root"))
        .launch(App);
}

/// Fetch once and reconcile the outcome into the view state.
async fn refresh(mut state: CropDashboardState, config: &ApiConfig) {
    let token = state.analysis.write().begin_refresh();
    state.refreshing.set(true);
    let result = fetch::crop_analysis(config).await;
    state.analysis.write().apply(token, result);
    state.refreshing.set(false);
}

fn status_indicators() -> Vec<StatusIndicator> {
    vec![
        StatusIndicator::new(StatusLevel::Green, "Satellite Data: Active"),
        StatusIndicator::new(StatusLevel::Green, "NDVI Processing: Online"),
        StatusIndicator::new(StatusLevel::Yellow, "Cloud Coverage: 15%"),
        StatusIndicator::new(StatusLevel::Green, "ML Models: Operational"),
    ]
}

#[component]
fn App() -> Element {
    let state = use_context_provider(CropDashboardState::new);

    // ─── Refresh worker: one fetch on mount, then one per trigger ───
    let refresher = use_coroutine(move |mut rx: UnboundedReceiver<RefreshTrigger>| async move {
        let config = fetch::api_config();
        log::info!("Crop analysis source: {}", config.crop_analysis_url());
        refresh(state, &config).await;
        while let Some(trigger) = rx.next().await {
            let (trigger, absorbed) = coalesce(trigger, &mut rx);
            log::debug!(
                "Crop analysis refresh: {:?} ({} queued triggers merged)",
                trigger,
                absorbed
            );
            refresh(state, &config).await;
        }
    });

    // ─── Recurring 5-minute poll, cancelled on unmount ───
    let ticks = refresher.tx();
    use_interval(CROP_REFRESH_PERIOD, move || {
        let _ = ticks.unbounded_send(RefreshTrigger::Scheduled);
    });

    // ─── Chart payloads, recomputed only when the snapshot changes ───
    let ndvi_chart = use_memo(move || NdviLineChart::new(&state.analysis.read().snapshot().ndvi));
    let health_chart =
        use_memo(move || HealthBarChart::new(&state.analysis.read().snapshot().health));

    use_effect(move || {
        js_bridge::init_charts();
        js_bridge::render_line_chart(NDVI_CHART_ID, &ndvi_chart.read());
        js_bridge::render_bar_chart(HEALTH_CHART_ID, &health_chart.read());
    });

    use_drop(|| {
        js_bridge::destroy_chart(NDVI_CHART_ID);
        js_bridge::destroy_chart(HEALTH_CHART_ID);
    });

    // ─── Render ───
    let (loaded, yield_prediction) = {
        let analysis = state.analysis.read();
        (
            analysis.has_loaded(),
            analysis.snapshot().yield_prediction.clone(),
        )
    };
    let refreshing = *state.refreshing.read();

    rsx! {
        div {
            class: "crop-analysis",
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                class: "analysis-header",
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 12px;",
                div {
                    h2 { style: "margin: 0; color: {PRIMARY_700};", "Crop Forecasting with Remote Sensing" }
                    p {
                        style: "margin: 4px 0 0 0; color: {MUTED_TEXT};",
                        "NDVI Analytics & Time-series ML for Crop Health Monitoring"
                    }
                }
                button {
                    style: "padding: 6px 12px; border: 1px solid {PRIMARY_600}; color: {PRIMARY_600}; background: white; border-radius: 4px; cursor: pointer;",
                    disabled: refreshing,
                    onclick: move |_| refresher.send(RefreshTrigger::Manual),
                    if refreshing { "Refreshing..." } else { "Refresh" }
                }
            }

            div {
                class: "analysis-grid",
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px;",

                div {
                    class: "chart-container",
                    ChartHeader { title: "NDVI Time Series Analysis".to_string() }
                    ChartContainer { id: NDVI_CHART_ID.to_string(), empty: !loaded }
                }

                div {
                    class: "chart-container",
                    ChartHeader { title: "Field Health Distribution".to_string() }
                    ChartContainer { id: HEALTH_CHART_ID.to_string(), empty: !loaded }
                }

                if let Some(prediction) = yield_prediction {
                    YieldSummary { prediction }
                }

                div {
                    class: "field-management",
                    ChartHeader { title: "Field-Level Analysis".to_string() }
                    FieldSelector {}
                    FieldDetails {}
                }

                StatusPanel { indicators: status_indicators() }
            }
        }
    }
}
