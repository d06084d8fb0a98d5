use crate::ids::ImageId;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A satellite capture with its pre-rendered bands and derived metrics.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteImageRecord {
    pub id: ImageId,
    /// ISO-8601 capture timestamp
    pub capture_date: String,
    /// Cloud cover percentage
    pub cloud_cover: f64,
    /// Meters per pixel
    pub resolution: f64,
    /// NDVI-colorized rendering
    pub ndvi: String,
    /// True-color rendering
    pub rgb: String,
    /// Near-infrared rendering
    pub nir: String,
    pub thumbnail: String,
    #[serde(rename = "avgNDVI")]
    pub avg_ndvi: f64,
    /// Percentages of the scene
    pub vegetation_coverage: f64,
    pub healthy_vegetation: f64,
    pub stressed_areas: f64,
}

/// Which spectral rendering of the selected image is on screen.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Ndvi,
    Rgb,
    Nir,
}

impl AnalysisMode {
    /// Button order in the viewer header.
    pub const ALL: [AnalysisMode; 3] = [AnalysisMode::Ndvi, AnalysisMode::Rgb, AnalysisMode::Nir];

    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisMode::Ndvi => "ndvi",
            AnalysisMode::Rgb => "rgb",
            AnalysisMode::Nir => "nir",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalysisMode::Ndvi => "NDVI",
            AnalysisMode::Rgb => "True Color",
            AnalysisMode::Nir => "Near Infrared",
        }
    }

    /// The image reference this mode displays for a record.
    pub fn image_ref(self, record: &SatelliteImageRecord) -> &str {
        match self {
            AnalysisMode::Ndvi => &record.ndvi,
            AnalysisMode::Rgb => &record.rgb,
            AnalysisMode::Nir => &record.nir,
        }
    }

    pub fn alt_text(self) -> String {
        format!("Satellite image - {}", self.as_str().to_uppercase())
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown analysis mode '{}' (expected ndvi, rgb or nir)", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for AnalysisMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::SatelliteImageRecord;

    pub fn record(id: &str, date: &str) -> SatelliteImageRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "captureDate": date,
            "cloudCover": 12,
            "resolution": 10,
            "ndvi": format!("/img/{}/ndvi.png", id),
            "rgb": format!("/img/{}/rgb.png", id),
            "nir": format!("/img/{}/nir.png", id),
            "thumbnail": format!("/img/{}/thumb.png", id),
            "avgNDVI": 0.62,
            "vegetationCoverage": 78.5,
            "healthyVegetation": 64,
            "stressedAreas": 9.5
        }))
        .unwrap()
    }
}
