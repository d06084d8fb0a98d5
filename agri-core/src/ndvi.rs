use agri_utils::dates::display_date;
use serde::Serialize;

/// One NDVI reading.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct NdviPoint {
    /// ISO-8601 timestamp as sent by the service
    pub timestamp: String,
    /// Vegetation index, nominally in [0, 1]
    pub value: f64,
}

/// NDVI time series for the monitored area, oldest first as sent.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct NdviSeries {
    points: Vec<NdviPoint>,
}

impl NdviSeries {
    /// Pair timestamps with values by index.
    ///
    /// Mismatched lengths are truncated to the shorter side so labels and
    /// values always stay aligned.
    pub fn from_parts(timestamps: Vec<String>, values: Vec<f64>) -> Self {
        if timestamps.len() != values.len() {
            log::warn!(
                "NDVI series has {} timestamps but {} values; truncating",
                timestamps.len(),
                values.len()
            );
        }
        let points = timestamps
            .into_iter()
            .zip(values)
            .map(|(timestamp, value)| NdviPoint { timestamp, value })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[NdviPoint] {
        &self.points
    }

    /// Display labels (short dates), index-aligned with `values`.
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| display_date(&p.timestamp)).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::NdviSeries;

    fn stamps(n: usize) -> Vec<String> {
        (1..=n).map(|d| format!("2024-05-{:02}T00:00:00Z", d)).collect()
    }

    #[test]
    fn test_equal_lengths() {
        let series = NdviSeries::from_parts(stamps(3), vec![0.41, 0.52, 0.63]);
        assert_eq!(series.len(), 3);
        assert_eq!(series.labels(), vec!["5/1/2024", "5/2/2024", "5/3/2024"]);
        assert_eq!(series.values(), vec![0.41, 0.52, 0.63]);
    }

    #[test]
    fn test_more_timestamps_than_values() {
        let series = NdviSeries::from_parts(stamps(4), vec![0.3, 0.4]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.labels().len(), series.values().len());
        assert_eq!(series.points()[1].timestamp, "2024-05-02T00:00:00Z");
    }

    #[test]
    fn test_more_values_than_timestamps() {
        let series = NdviSeries::from_parts(stamps(1), vec![0.3, 0.4, 0.5]);
        assert_eq!(series.len(), 1);
        assert_eq!(series.values(), vec![0.3]);
    }

    #[test]
    fn test_empty() {
        let series = NdviSeries::from_parts(Vec::new(), vec![0.5]);
        assert!(series.is_empty());
        assert!(series.labels().is_empty());
    }
}
