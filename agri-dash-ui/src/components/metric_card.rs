//! Titled value card.

use crate::theme::{PRIMARY_50, PRIMARY_700};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub title: String,
    pub value: String,
}

#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div {
            class: "metric-card",
            style: "flex: 1; min-width: 140px; padding: 12px; background: {PRIMARY_50}; border-radius: 6px;",
            h4 {
                style: "margin: 0 0 6px 0; font-size: 13px; font-weight: 600;",
                "{props.title}"
            }
            span {
                class: "metric-value",
                style: "font-size: 20px; font-weight: bold; color: {PRIMARY_700};",
                "{props.value}"
            }
        }
    }
}
