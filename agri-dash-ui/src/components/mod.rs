//! Reusable Dioxus RSX components for the crop dashboard apps.

mod chart_container;
mod chart_header;
mod field_details;
mod field_selector;
mod image_metrics;
mod image_panel;
mod image_timeline;
mod loading_spinner;
mod metric_card;
mod mode_selector;
mod status_panel;
mod yield_summary;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use field_details::FieldDetails;
pub use field_selector::FieldSelector;
pub use image_metrics::ImageMetricsPanel;
pub use image_panel::ImagePanel;
pub use image_timeline::ImageTimeline;
pub use loading_spinner::LoadingSpinner;
pub use metric_card::MetricCard;
pub use mode_selector::ModeSelector;
pub use status_panel::{StatusIndicator, StatusPanel};
pub use yield_summary::YieldSummary;
