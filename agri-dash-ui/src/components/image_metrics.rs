//! Derived metrics of the selected image.

use crate::state::SatelliteDashboardState;
use crate::theme::EARTH_700;
use dioxus::prelude::*;

#[component]
pub fn ImageMetricsPanel() -> Element {
    let state = use_context::<SatelliteDashboardState>();
    let metrics = state.viewer.read().metrics();

    let rows: Vec<(&str, String)> = match metrics {
        Some(m) => vec![
            ("Average NDVI:", m.avg_ndvi.to_string()),
            ("Vegetation Coverage:", format!("{}%", m.vegetation_coverage)),
            ("Healthy Vegetation:", format!("{}%", m.healthy_vegetation)),
            ("Stressed Areas:", format!("{}%", m.stressed_areas)),
        ],
        None => Vec::new(),
    };

    rsx! {
        div {
            class: "analysis-results",
            style: "margin-top: 16px;",
            h4 { style: "margin: 0 0 6px 0; color: {EARTH_700};", "Image Analysis Results" }
            if !rows.is_empty() {
                div {
                    class: "analysis-metrics",
                    style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 6px; font-size: 14px;",
                    for (name, value) in rows.into_iter() {
                        div {
                            class: "metric",
                            label { style: "font-weight: 600; margin-right: 4px;", "{name}" }
                            span { "{value}" }
                        }
                    }
                }
            }
        }
    }
}
