//! JSON bodies returned by the analytics service.

use crate::error::FetchError;
use crate::field::{Field, YieldPrediction};
use crate::imagery::SatelliteImageRecord;
use serde::{Deserialize, Serialize};

/// `GET /api/crop-analysis`
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropAnalysisResponse {
    pub ndvi: NdviPayload,
    /// Five coverage percentages in `HealthCategory::ALL` order
    pub health_distribution: Vec<f64>,
    pub fields: Vec<Field>,
    /// Absent or null until the service has a forecast
    #[serde(default)]
    pub yield_prediction: Option<YieldPrediction>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct NdviPayload {
    pub timestamps: Vec<String>,
    pub values: Vec<f64>,
}

/// Decode a crop analysis body.
pub fn decode_crop_analysis(body: &str) -> Result<CropAnalysisResponse, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a satellite image list body (`GET /api/satellite-images`).
pub fn decode_satellite_images(body: &str) -> Result<Vec<SatelliteImageRecord>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const CROP_ANALYSIS_JSON: &str = r#"{
        "ndvi": {
            "timestamps": ["2024-06-01T00:00:00Z", "2024-06-08T00:00:00Z", "2024-06-15T00:00:00Z"],
            "values": [0.55, 0.61, 0.68]
        },
        "healthDistribution": [40, 30, 15, 10, 5],
        "fields": [
            {
                "id": "F-001",
                "name": "North Parcel",
                "area": 42.5,
                "cropType": "Wheat",
                "health": "Excellent",
                "currentNDVI": 0.78,
                "growthStage": "Heading",
                "lastUpdated": "2024-06-15T06:00:00Z"
            },
            {
                "id": "F-002",
                "name": "River Bend",
                "area": 18,
                "cropType": "Maize",
                "health": "poor",
                "currentNDVI": 0.34,
                "growthStage": "V6",
                "lastUpdated": "2024-06-14T06:00:00Z"
            }
        ],
        "yieldPrediction": {
            "estimatedYield": 6.8,
            "confidence": 87,
            "harvestWindow": "Sep 15 - Oct 1"
        }
    }"#;

    pub const CROP_ANALYSIS_NO_YIELD_JSON: &str = r#"{
        "ndvi": {"timestamps": ["2024-07-01"], "values": [0.7]},
        "healthDistribution": [10, 20, 30, 25, 15],
        "fields": []
    }"#;
}
