//! View state of the crop analysis dashboard.
//!
//! Every successful refresh replaces the whole snapshot at once; a failed
//! refresh leaves it untouched. The selected field is held by id and resolved
//! against the current field list on every read.

use crate::error::FetchError;
use crate::field::{Field, YieldPrediction};
use crate::health::HealthDistribution;
use crate::ids::FieldId;
use crate::ndvi::NdviSeries;
use crate::sequence::{RequestSequence, RequestToken};
use crate::wire::CropAnalysisResponse;
use log::{info, warn};

/// Everything one crop analysis response carries.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct CropSnapshot {
    pub ndvi: NdviSeries,
    pub health: HealthDistribution,
    pub fields: Vec<Field>,
    pub yield_prediction: Option<YieldPrediction>,
}

impl From<CropAnalysisResponse> for CropSnapshot {
    fn from(response: CropAnalysisResponse) -> Self {
        Self {
            ndvi: NdviSeries::from_parts(response.ndvi.timestamps, response.ndvi.values),
            health: HealthDistribution::from_values(&response.health_distribution),
            fields: response.fields,
            yield_prediction: response.yield_prediction,
        }
    }
}

impl CropSnapshot {
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| &f.id == id)
    }
}

/// Result of feeding a response into the state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ApplyOutcome {
    /// The snapshot was replaced.
    Applied,
    /// A newer response had already been applied; this one was dropped.
    Stale,
    /// The request failed; the previous snapshot is kept.
    Failed,
}

#[derive(Debug, Default, Clone)]
pub struct CropAnalysisState {
    snapshot: CropSnapshot,
    selected: Option<FieldId>,
    sequence: RequestSequence,
}

impl CropAnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a token for a refresh about to be sent.
    pub fn begin_refresh(&mut self) -> RequestToken {
        self.sequence.issue()
    }

    /// Reconcile the outcome of the refresh started with `token`.
    pub fn apply(
        &mut self,
        token: RequestToken,
        result: Result<CropAnalysisResponse, FetchError>,
    ) -> ApplyOutcome {
        match result {
            Ok(response) => {
                if !self.sequence.mark_applied(token) {
                    info!(
                        "Dropping stale crop analysis response #{}",
                        token.value()
                    );
                    return ApplyOutcome::Stale;
                }
                self.snapshot = CropSnapshot::from(response);
                info!(
                    "Crop analysis refreshed: {} NDVI points, {} fields",
                    self.snapshot.ndvi.len(),
                    self.snapshot.fields.len()
                );
                ApplyOutcome::Applied
            }
            Err(e) => {
                warn!("Error fetching crop analysis data: {}", e);
                ApplyOutcome::Failed
            }
        }
    }

    pub fn snapshot(&self) -> &CropSnapshot {
        &self.snapshot
    }

    /// Whether any refresh has ever been applied.
    pub fn has_loaded(&self) -> bool {
        self.sequence.last_applied().is_some()
    }

    /// Select a field by id. An empty id clears the selection, as does an id
    /// missing from the current list.
    pub fn select_field(&mut self, id: &str) {
        if id.is_empty() {
            self.selected = None;
            return;
        }
        let id = FieldId::from(id);
        self.selected = self.snapshot.field(&id).map(|f| f.id.clone());
    }

    /// The selected field as it appears in the latest snapshot.
    pub fn selected_field(&self) -> Option<&Field> {
        self.selected
            .as_ref()
            .and_then(|id| self.snapshot.field(id))
    }

    /// Id for the selector's `value`, empty when nothing resolves.
    pub fn selected_field_id(&self) -> &str {
        self.selected_field().map(|f| f.id.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthCategory;
    use crate::wire::decode_crop_analysis;
    use crate::wire::fixtures::{CROP_ANALYSIS_JSON, CROP_ANALYSIS_NO_YIELD_JSON};

    fn loaded_state() -> CropAnalysisState {
        let mut state = CropAnalysisState::new();
        let token = state.begin_refresh();
        let outcome = state.apply(token, decode_crop_analysis(CROP_ANALYSIS_JSON));
        assert_eq!(outcome, ApplyOutcome::Applied);
        state
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = CropAnalysisState::new();
        assert!(!state.has_loaded());
        assert!(state.snapshot().ndvi.is_empty());
        assert!(state.snapshot().health.is_empty());
        assert!(state.snapshot().fields.is_empty());
        assert!(state.snapshot().yield_prediction.is_none());
        assert!(state.selected_field().is_none());
    }

    #[test]
    fn test_success_replaces_every_part() {
        let state = loaded_state();
        let snap = state.snapshot();
        assert!(state.has_loaded());
        assert_eq!(snap.ndvi.len(), 3);
        assert_eq!(snap.health.coverage(HealthCategory::Excellent), Some(40.0));
        assert_eq!(snap.fields.len(), 2);
        assert_eq!(snap.yield_prediction.as_ref().map(|y| y.estimated_yield), Some(6.8));
    }

    #[test]
    fn test_failure_keeps_previous_snapshot() {
        let mut state = loaded_state();
        state.select_field("F-002");
        let before = state.snapshot().clone();

        let token = state.begin_refresh();
        let outcome = state.apply(token, Err(FetchError::Status(500)));

        assert_eq!(outcome, ApplyOutcome::Failed);
        assert_eq!(state.snapshot(), &before);
        assert_eq!(state.selected_field().map(|f| f.name.as_str()), Some("River Bend"));
    }

    #[test]
    fn test_failure_before_first_load_stays_empty() {
        let mut state = CropAnalysisState::new();
        let token = state.begin_refresh();
        let outcome = state.apply(token, Err(FetchError::Network("refused".to_string())));
        assert_eq!(outcome, ApplyOutcome::Failed);
        assert!(!state.has_loaded());
        assert!(state.snapshot().fields.is_empty());
    }

    #[test]
    fn test_absent_yield_replaces_previous_yield() {
        let mut state = loaded_state();
        let token = state.begin_refresh();
        state.apply(token, decode_crop_analysis(CROP_ANALYSIS_NO_YIELD_JSON));
        assert!(state.snapshot().yield_prediction.is_none());
        assert_eq!(state.snapshot().ndvi.len(), 1);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = CropAnalysisState::new();
        let slow = state.begin_refresh();
        let fast = state.begin_refresh();

        assert_eq!(
            state.apply(fast, decode_crop_analysis(CROP_ANALYSIS_NO_YIELD_JSON)),
            ApplyOutcome::Applied
        );
        assert_eq!(
            state.apply(slow, decode_crop_analysis(CROP_ANALYSIS_JSON)),
            ApplyOutcome::Stale
        );
        assert!(state.snapshot().fields.is_empty());
    }

    #[test]
    fn test_select_present_and_absent_field() {
        let mut state = loaded_state();
        state.select_field("F-001");
        assert_eq!(state.selected_field().map(|f| f.name.as_str()), Some("North Parcel"));
        assert_eq!(state.selected_field_id(), "F-001");

        state.select_field("F-999");
        assert!(state.selected_field().is_none());
        assert_eq!(state.selected_field_id(), "");

        state.select_field("F-001");
        state.select_field("");
        assert!(state.selected_field().is_none());
    }

    #[test]
    fn test_selection_resolves_against_latest_list() {
        let mut state = loaded_state();
        state.select_field("F-001");

        let token = state.begin_refresh();
        state.apply(token, decode_crop_analysis(CROP_ANALYSIS_NO_YIELD_JSON));
        assert!(state.selected_field().is_none());
    }

    #[test]
    fn test_selection_sees_refreshed_field_values() {
        let mut state = loaded_state();
        state.select_field("F-002");

        let updated = CROP_ANALYSIS_JSON.replace("\"currentNDVI\": 0.34", "\"currentNDVI\": 0.41");
        let token = state.begin_refresh();
        state.apply(token, decode_crop_analysis(&updated));

        let field = state.selected_field().unwrap();
        assert!((field.current_ndvi - 0.41).abs() < f64::EPSILON);
    }
}
