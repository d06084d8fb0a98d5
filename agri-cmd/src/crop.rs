//! Crop analysis commands: one-shot report and polling watch.

use crate::report::crop_report;
use agri_core::api::AnalyticsClient;
use agri_core::crop::{ApplyOutcome, CropAnalysisState};
use agri_core::wire::CropAnalysisResponse;
use agri_core::FetchError;
use log::info;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Fetch crop analytics once and print the report.
///
/// Unlike the dashboard, a one-shot command has no previous snapshot to fall
/// back on, so a failed fetch is returned as an error.
pub async fn run_crop_analysis(client: &AnalyticsClient, field: Option<&str>) -> anyhow::Result<()> {
    let mut state = CropAnalysisState::new();
    let token = state.begin_refresh();
    let result = client.crop_analysis().await;
    if let Err(e) = &result {
        anyhow::bail!(
            "Failed to fetch {}: {}",
            client.config().crop_analysis_url(),
            e
        );
    }
    state.apply(token, result);
    if let Some(id) = field {
        state.select_field(id);
        if state.selected_field().is_none() {
            info!("Field {} is not in the current field list", id);
        }
    }
    println!("{}", crop_report(&state));
    Ok(())
}

pub struct WatchOptions {
    pub period: Duration,
    pub field: Option<String>,
    /// Stop after this many refreshes; run until interrupted when `None`
    pub max_polls: Option<u32>,
}

/// Poll `fetch` immediately and then every `options.period`, reconciling each
/// outcome into a `CropAnalysisState`.
///
/// `on_refresh` sees the state after every refresh together with its outcome.
/// Returns the final state once `max_polls` is reached or Ctrl-C is pressed;
/// the interval is dropped (cancelled) on return.
pub async fn watch<F, Fut, R>(
    mut fetch: F,
    options: &WatchOptions,
    mut on_refresh: R,
) -> CropAnalysisState
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<CropAnalysisResponse, FetchError>>,
    R: FnMut(&CropAnalysisState, ApplyOutcome),
{
    let mut state = CropAnalysisState::new();
    let mut ticker = tokio::time::interval(options.period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut polls: u32 = 0;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let token = state.begin_refresh();
                let result = fetch().await;
                let outcome = state.apply(token, result);
                if let Some(id) = options.field.as_deref() {
                    state.select_field(id);
                }
                on_refresh(&state, outcome);

                polls += 1;
                if options.max_polls.is_some_and(|max| polls >= max) {
                    break;
                }
            }
            _ = &mut shutdown => {
                info!("Interrupted, stopping watch");
                break;
            }
        }
    }
    state
}

/// Watch the analytics service and print the report after every refresh
/// that changed the snapshot.
pub async fn run_watch(client: &AnalyticsClient, options: &WatchOptions) -> anyhow::Result<()> {
    info!(
        "Watching {} every {}s",
        client.config().crop_analysis_url(),
        options.period.as_secs()
    );
    watch(
        || client.crop_analysis(),
        options,
        |state, outcome| match outcome {
            ApplyOutcome::Applied => println!("{}\n", crop_report(state)),
            ApplyOutcome::Failed if state.has_loaded() => {
                info!("Refresh failed; keeping the last snapshot")
            }
            ApplyOutcome::Failed | ApplyOutcome::Stale => {}
        },
    )
    .await;
    Ok(())
}
