use crate::health::{health_tone, HealthTone};
use crate::ids::FieldId;
use agri_utils::dates::display_date;
use serde::{Deserialize, Serialize};

/// A delineated agricultural parcel as reported by the analytics service.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    /// Area in hectares
    pub area: f64,
    pub crop_type: String,
    /// Health label, normally one of the `HealthCategory` labels in any case
    pub health: String,
    #[serde(rename = "currentNDVI")]
    pub current_ndvi: f64,
    pub growth_stage: String,
    /// ISO-8601 timestamp of the last analysis
    pub last_updated: String,
}

impl Field {
    pub fn health_tone(&self) -> HealthTone {
        health_tone(&self.health)
    }

    pub fn last_updated_label(&self) -> String {
        display_date(&self.last_updated)
    }

    /// Text of the field's entry in the selector.
    pub fn option_label(&self) -> String {
        format!("{} - {} ha", self.name, self.area)
    }
}

/// Yield forecast for the current season.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldPrediction {
    /// Tons per hectare
    pub estimated_yield: f64,
    /// Percentage
    pub confidence: f64,
    pub harvest_window: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD_JSON: &str = r#"{
        "id": 12,
        "name": "North Parcel",
        "area": 42.5,
        "cropType": "Wheat",
        "health": "good",
        "currentNDVI": 0.71,
        "growthStage": "Tillering",
        "lastUpdated": "2024-07-04T06:00:00Z"
    }"#;

    #[test]
    fn test_field_deserialize() {
        let field: Field = serde_json::from_str(FIELD_JSON).unwrap();
        assert_eq!(field.id.as_str(), "12");
        assert_eq!(field.crop_type, "Wheat");
        assert!((field.current_ndvi - 0.71).abs() < f64::EPSILON);
        assert_eq!(field.health_tone(), HealthTone::Lime);
        assert_eq!(field.last_updated_label(), "7/4/2024");
        assert_eq!(field.option_label(), "North Parcel - 42.5 ha");
    }

    #[test]
    fn test_yield_prediction_deserialize() {
        let prediction: YieldPrediction = serde_json::from_str(
            r#"{"estimatedYield": 6.8, "confidence": 87, "harvestWindow": "Sep 15 - Oct 1"}"#,
        )
        .unwrap();
        assert!((prediction.confidence - 87.0).abs() < f64::EPSILON);
        assert_eq!(prediction.harvest_window, "Sep 15 - Oct 1");
    }
}
