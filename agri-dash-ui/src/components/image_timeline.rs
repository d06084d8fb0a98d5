//! Thumbnail timeline of the fetched images.

use crate::state::SatelliteDashboardState;
use crate::theme::{EARTH_100, EARTH_700, PRIMARY_600};
use agri_core::satellite::TimelineEntry;
use dioxus::prelude::*;

#[component]
pub fn ImageTimeline() -> Element {
    let state = use_context::<SatelliteDashboardState>();
    let entries = state.viewer.read().timeline();

    rsx! {
        div {
            class: "image-timeline",
            h4 { style: "margin: 0 0 6px 0; color: {EARTH_700};", "Image Timeline" }
            div {
                class: "timeline-images",
                style: "display: flex; gap: 8px; overflow-x: auto; padding-bottom: 4px;",
                for (index, entry) in entries.into_iter().enumerate() {
                    TimelineItem { key: "{index}", entry }
                }
            }
        }
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry) -> Element {
    let mut state = use_context::<SatelliteDashboardState>();
    let class = if entry.active { "timeline-item active" } else { "timeline-item" };
    let border = if entry.active { PRIMARY_600 } else { EARTH_100 };
    let id = entry.id.clone();

    rsx! {
        div {
            class: "{class}",
            style: "flex: 0 0 auto; width: 96px; padding: 4px; border: 2px solid {border}; border-radius: 6px; cursor: pointer; text-align: center;",
            onclick: move |_| state.viewer.write().select(&id),
            img {
                class: "timeline-thumbnail",
                src: "{entry.thumbnail}",
                alt: "{entry.alt}",
                style: "width: 100%; border-radius: 4px; display: block;",
            }
            span {
                class: "timeline-date",
                style: "font-size: 11px;",
                "{entry.date_label}"
            }
        }
    }
}
