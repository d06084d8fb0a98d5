//! Remote sensing status indicators.

use super::ChartHeader;
use crate::theme::StatusLevel;
use dioxus::prelude::*;

/// One line of the status panel.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusIndicator {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusIndicator {
    pub fn new(level: StatusLevel, text: &str) -> Self {
        Self {
            level,
            text: text.to_string(),
        }
    }
}

#[component]
pub fn StatusPanel(indicators: Vec<StatusIndicator>) -> Element {
    let rows: Vec<(&'static str, String)> = indicators
        .iter()
        .map(|indicator| (indicator.level.dot_color(), indicator.text.clone()))
        .collect();

    rsx! {
        div {
            class: "satellite-status",
            style: "margin: 16px 0;",
            ChartHeader { title: "Remote Sensing Status".to_string() }
            div {
                class: "status-indicators",
                for (dot_color, text) in rows.into_iter() {
                    div {
                        class: "status-item",
                        style: "display: flex; align-items: center; gap: 8px; margin: 4px 0; font-size: 14px;",
                        span {
                            class: "status-dot",
                            style: "display: inline-block; width: 10px; height: 10px; border-radius: 50%; background: {dot_color};",
                        }
                        span { "{text}" }
                    }
                }
            }
        }
    }
}
