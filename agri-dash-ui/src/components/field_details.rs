//! Detail panel for the selected field.

use crate::state::CropDashboardState;
use crate::theme::PANEL_BORDER;
use dioxus::prelude::*;

/// Shows the selected field, re-resolved against the latest snapshot.
/// Renders nothing when no field resolves.
#[component]
pub fn FieldDetails() -> Element {
    let state = use_context::<CropDashboardState>();
    let field = state.analysis.read().selected_field().cloned();

    let Some(field) = field else {
        return rsx! {};
    };

    let tone = field.health_tone();
    let health_class = tone.text_class();
    let health_color = tone.text_color();
    let last_updated = field.last_updated_label();

    rsx! {
        div {
            class: "field-details",
            style: "margin-top: 8px; padding: 12px; border: 1px solid {PANEL_BORDER}; border-radius: 6px;",
            h4 { style: "margin: 0 0 8px 0;", "{field.name}" }
            div {
                class: "field-metrics",
                style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 6px; font-size: 14px;",
                div { class: "field-metric", span { "Area: {field.area} hectares" } }
                div { class: "field-metric", span { "Crop Type: {field.crop_type}" } }
                div {
                    class: "field-metric",
                    span {
                        class: "{health_class}",
                        style: "color: {health_color}; font-weight: 600;",
                        "Health: {field.health}"
                    }
                }
                div { class: "field-metric", span { "Current NDVI: {field.current_ndvi}" } }
                div { class: "field-metric", span { "Growth Stage: {field.growth_stage}" } }
                div { class: "field-metric", span { "Last Updated: {last_updated}" } }
            }
        }
    }
}
