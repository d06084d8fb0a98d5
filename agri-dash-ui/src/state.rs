//! View state managed via Dioxus context.
//!
//! Each app bundles its signals into one struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context`.

use agri_core::crop::CropAnalysisState;
use agri_core::satellite::SatelliteViewerState;
use dioxus::prelude::*;

/// State of the crop analysis view.
#[derive(Clone, Copy)]
pub struct CropDashboardState {
    /// Latest snapshot, field selection and request sequence
    pub analysis: Signal<CropAnalysisState>,
    /// Whether a refresh is in flight
    pub refreshing: Signal<bool>,
}

impl CropDashboardState {
    pub fn new() -> Self {
        Self {
            analysis: Signal::new(CropAnalysisState::new()),
            refreshing: Signal::new(false),
        }
    }
}

/// State of the satellite image viewer.
#[derive(Clone, Copy)]
pub struct SatelliteDashboardState {
    /// Image list, selected image and analysis mode
    pub viewer: Signal<SatelliteViewerState>,
    /// Whether the image list request is still pending
    pub loading: Signal<bool>,
}

impl SatelliteDashboardState {
    pub fn new() -> Self {
        Self {
            viewer: Signal::new(SatelliteViewerState::new()),
            loading: Signal::new(true),
        }
    }
}
