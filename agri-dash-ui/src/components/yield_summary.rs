//! Yield forecast summary.

use super::{ChartHeader, MetricCard};
use agri_core::field::YieldPrediction;
use dioxus::prelude::*;

#[component]
pub fn YieldSummary(prediction: YieldPrediction) -> Element {
    rsx! {
        div {
            class: "prediction-summary",
            style: "margin: 16px 0;",
            ChartHeader { title: "Yield Forecasting Results".to_string() }
            div {
                class: "prediction-metrics",
                style: "display: flex; gap: 12px; flex-wrap: wrap;",
                MetricCard {
                    title: "Predicted Yield".to_string(),
                    value: format!("{} tons/ha", prediction.estimated_yield),
                }
                MetricCard {
                    title: "Confidence Level".to_string(),
                    value: format!("{}%", prediction.confidence),
                }
                MetricCard {
                    title: "Harvest Window".to_string(),
                    value: prediction.harvest_window.clone(),
                }
            }
        }
    }
}
