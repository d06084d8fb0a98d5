//! Analysis mode buttons (NDVI / True Color / Near Infrared).

use crate::state::SatelliteDashboardState;
use crate::theme::{PANEL_BORDER, PRIMARY_600};
use agri_core::imagery::AnalysisMode;
use dioxus::prelude::*;

/// Switching mode only changes which rendering of the selected image is shown.
#[component]
pub fn ModeSelector() -> Element {
    let state = use_context::<SatelliteDashboardState>();
    let current = state.viewer.read().mode();

    rsx! {
        div {
            class: "analysis-controls",
            style: "display: flex; gap: 6px;",
            for mode in AnalysisMode::ALL {
                ModeButton { key: "{mode}", mode, active: mode == current }
            }
        }
    }
}

#[component]
fn ModeButton(mode: AnalysisMode, active: bool) -> Element {
    let mut state = use_context::<SatelliteDashboardState>();
    let class = if active { "mode-btn active" } else { "mode-btn" };
    let label = mode.label();
    let style = if active {
        format!("padding: 4px 10px; border: 1px solid {PRIMARY_600}; background: {PRIMARY_600}; color: white; border-radius: 4px; cursor: pointer;")
    } else {
        format!("padding: 4px 10px; border: 1px solid {PANEL_BORDER}; background: white; color: #333; border-radius: 4px; cursor: pointer;")
    };

    rsx! {
        button {
            class: "{class}",
            style: "{style}",
            onclick: move |_| state.viewer.write().set_mode(mode),
            "{label}"
        }
    }
}
