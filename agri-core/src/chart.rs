//! Chart payloads for the D3 renderers.
//!
//! The fixed parts here carry domain meaning and must not drift: the NDVI axis
//! is pinned to [0, 1] and each health category always gets its own color.

use crate::health::HealthDistribution;
use crate::ndvi::NdviSeries;
use serde::Serialize;

pub const NDVI_STROKE: &str = "rgb(34, 197, 94)";
pub const NDVI_FILL: &str = "rgba(34, 197, 94, 0.2)";

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    pub label: &'static str,
    pub min: f64,
    /// `None` lets the renderer fit the data
    pub max: Option<f64>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendSpec {
    pub display: bool,
    pub position: &'static str,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartConfig {
    pub title: &'static str,
    pub dataset_label: &'static str,
    pub y_axis: AxisSpec,
    pub stroke: &'static str,
    pub fill: &'static str,
    pub tension: f64,
    pub legend: LegendSpec,
}

/// One reading on the x axis. Positioned by `index`; `label` is only the tick text.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct LinePoint {
    pub index: usize,
    pub label: String,
    pub value: f64,
}

/// NDVI time series line chart.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct NdviLineChart {
    pub config: LineChartConfig,
    pub points: Vec<LinePoint>,
}

impl NdviLineChart {
    pub fn new(series: &NdviSeries) -> Self {
        let points = series
            .labels()
            .into_iter()
            .zip(series.values())
            .enumerate()
            .map(|(index, (label, value))| LinePoint {
                index,
                label,
                value,
            })
            .collect();
        Self {
            config: LineChartConfig {
                title: "Vegetation Index Trends Over Time",
                dataset_label: "NDVI Values",
                y_axis: AxisSpec {
                    label: "NDVI Value",
                    min: 0.0,
                    max: Some(1.0),
                },
                stroke: NDVI_STROKE,
                fill: NDVI_FILL,
                tension: 0.1,
                legend: LegendSpec {
                    display: true,
                    position: "top",
                },
            },
            points,
        }
    }

    pub fn data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.points)
    }

    pub fn config_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.config)
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartConfig {
    pub title: &'static str,
    pub dataset_label: &'static str,
    pub y_axis: AxisSpec,
    pub legend: LegendSpec,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Field health distribution bar chart.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct HealthBarChart {
    pub config: BarChartConfig,
    pub bars: Vec<Bar>,
}

impl HealthBarChart {
    pub fn new(distribution: &HealthDistribution) -> Self {
        let bars = distribution
            .shares()
            .iter()
            .map(|share| Bar {
                label: share.category.label(),
                value: share.coverage,
                color: share.category.tone().bar_color(),
            })
            .collect();
        Self {
            config: BarChartConfig {
                title: "Current Field Health Status",
                dataset_label: "Field Coverage (%)",
                y_axis: AxisSpec {
                    label: "Coverage Percentage",
                    min: 0.0,
                    max: None,
                },
                legend: LegendSpec {
                    display: false,
                    position: "top",
                },
            },
            bars,
        }
    }

    pub fn data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.bars)
    }

    pub fn config_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndvi_axis_is_pinned() {
        let series = NdviSeries::from_parts(
            vec!["2024-06-01".to_string(), "2024-06-08".to_string()],
            vec![0.4, 0.5],
        );
        let chart = NdviLineChart::new(&series);
        assert_eq!(chart.config.y_axis.min, 0.0);
        assert_eq!(chart.config.y_axis.max, Some(1.0));
        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.points[0].label, "6/1/2024");

        let config: serde_json::Value = serde_json::from_str(&chart.config_json().unwrap()).unwrap();
        assert_eq!(config["yAxis"]["max"], 1.0);
        assert_eq!(config["stroke"], NDVI_STROKE);
        assert_eq!(config["legend"]["position"], "top");
    }

    #[test]
    fn test_ndvi_points_follow_truncated_series() {
        let series = NdviSeries::from_parts(
            vec!["2024-06-01".to_string(), "2024-06-08".to_string(), "2024-06-15".to_string()],
            vec![0.4],
        );
        assert_eq!(NdviLineChart::new(&series).points.len(), 1);
    }

    #[test]
    fn test_same_day_readings_keep_their_own_points() {
        let series = NdviSeries::from_parts(
            vec![
                "2024-06-01T08:00:00Z".to_string(),
                "2024-06-01T16:00:00Z".to_string(),
                "2024-06-02T08:00:00Z".to_string(),
            ],
            vec![0.41, 0.44, 0.47],
        );
        let chart = NdviLineChart::new(&series);
        let indices: Vec<usize> = chart.points.iter().map(|p| p.index).collect();
        let labels: Vec<&str> = chart.points.iter().map(|p| p.label.as_str()).collect();
        let values: Vec<f64> = chart.points.iter().map(|p| p.value).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(labels, vec!["6/1/2024", "6/1/2024", "6/2/2024"]);
        assert_eq!(values, vec![0.41, 0.44, 0.47]);

        let data: serde_json::Value = serde_json::from_str(&chart.data_json().unwrap()).unwrap();
        assert_eq!(data[1]["index"], 1);
        assert_eq!(data[1]["label"], "6/1/2024");
    }

    #[test]
    fn test_health_bars_use_fixed_colors() {
        let dist = HealthDistribution::from_values(&[40.0, 30.0, 15.0, 10.0, 5.0]);
        let chart = HealthBarChart::new(&dist);
        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label).collect();
        let colors: Vec<&str> = chart.bars.iter().map(|b| b.color).collect();
        let values: Vec<f64> = chart.bars.iter().map(|b| b.value).collect();
        assert_eq!(labels, vec!["Excellent", "Good", "Fair", "Poor", "Critical"]);
        assert_eq!(
            colors,
            vec![
                "rgba(34, 197, 94, 0.8)",
                "rgba(101, 163, 13, 0.8)",
                "rgba(234, 179, 8, 0.8)",
                "rgba(249, 115, 22, 0.8)",
                "rgba(239, 68, 68, 0.8)",
            ]
        );
        assert_eq!(values, vec![40.0, 30.0, 15.0, 10.0, 5.0]);
        assert!(!chart.config.legend.display);
    }

    #[test]
    fn test_bar_json_shape() {
        let dist = HealthDistribution::from_values(&[100.0]);
        let json = HealthBarChart::new(&dist).data_json().unwrap();
        assert_eq!(
            json,
            r#"[{"label":"Excellent","value":100.0,"color":"rgba(34, 197, 94, 0.8)"}]"#
        );
    }
}
