//! Main image of the satellite viewer.

use crate::state::SatelliteDashboardState;
use dioxus::prelude::*;

/// The selected image in the active analysis mode, with capture details.
#[component]
pub fn ImagePanel() -> Element {
    let state = use_context::<SatelliteDashboardState>();
    let displayed = state.viewer.read().displayed_image();

    let Some(image) = displayed else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "satellite-image-container",
            img {
                class: "satellite-image",
                src: "{image.src}",
                alt: "{image.alt}",
                style: "width: 100%; border-radius: 6px; display: block;",
            }
            div {
                class: "image-info",
                style: "font-size: 13px; margin-top: 6px;",
                p { style: "margin: 2px 0;", "Date: {image.date_label}" }
                p { style: "margin: 2px 0;", "Resolution: {image.resolution}m" }
                p { style: "margin: 2px 0;", "Cloud Cover: {image.cloud_cover}%" }
            }
        }
    }
}
