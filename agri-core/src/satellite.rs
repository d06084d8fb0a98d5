//! View state of the satellite image viewer.

use crate::error::FetchError;
use crate::ids::ImageId;
use crate::imagery::{AnalysisMode, SatelliteImageRecord};
use agri_utils::dates::display_date;
use log::{info, warn};

/// What the main image panel shows.
#[derive(Debug, PartialEq, Clone)]
pub struct DisplayedImage {
    pub src: String,
    pub alt: String,
    pub date_label: String,
    pub resolution: f64,
    pub cloud_cover: f64,
}

/// One thumbnail in the image timeline.
#[derive(Debug, PartialEq, Clone)]
pub struct TimelineEntry {
    pub id: ImageId,
    pub thumbnail: String,
    pub alt: String,
    pub date_label: String,
    pub active: bool,
}

/// Derived metrics of the selected image.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ImageMetrics {
    pub avg_ndvi: f64,
    pub vegetation_coverage: f64,
    pub healthy_vegetation: f64,
    pub stressed_areas: f64,
}

impl From<&SatelliteImageRecord> for ImageMetrics {
    fn from(record: &SatelliteImageRecord) -> Self {
        Self {
            avg_ndvi: record.avg_ndvi,
            vegetation_coverage: record.vegetation_coverage,
            healthy_vegetation: record.healthy_vegetation,
            stressed_areas: record.stressed_areas,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct SatelliteViewerState {
    images: Vec<SatelliteImageRecord>,
    selected: Option<SatelliteImageRecord>,
    mode: AnalysisMode,
}

impl SatelliteViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the fetched image list and select its first record.
    ///
    /// On failure the state is left as it was.
    pub fn apply(&mut self, result: Result<Vec<SatelliteImageRecord>, FetchError>) {
        match result {
            Ok(images) => {
                info!("Loaded {} satellite images", images.len());
                self.selected = images.first().cloned();
                self.images = images;
            }
            Err(e) => {
                warn!("Error fetching satellite images: {}", e);
            }
        }
    }

    /// Make the record with `id` the selection. Unknown ids are ignored.
    pub fn select(&mut self, id: &ImageId) {
        match self.images.iter().find(|image| &image.id == id) {
            Some(image) => self.selected = Some(image.clone()),
            None => warn!("Ignoring selection of unknown satellite image {}", id),
        }
    }

    pub fn set_mode(&mut self, mode: AnalysisMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn images(&self) -> &[SatelliteImageRecord] {
        &self.images
    }

    pub fn selected(&self) -> Option<&SatelliteImageRecord> {
        self.selected.as_ref()
    }

    pub fn displayed_image(&self) -> Option<DisplayedImage> {
        self.selected.as_ref().map(|image| DisplayedImage {
            src: self.mode.image_ref(image).to_string(),
            alt: self.mode.alt_text(),
            date_label: display_date(&image.capture_date),
            resolution: image.resolution,
            cloud_cover: image.cloud_cover,
        })
    }

    /// Timeline entries; the active one shares the selection's id.
    pub fn timeline(&self) -> Vec<TimelineEntry> {
        let selected_id = self.selected.as_ref().map(|image| &image.id);
        self.images
            .iter()
            .enumerate()
            .map(|(index, image)| TimelineEntry {
                id: image.id.clone(),
                thumbnail: image.thumbnail.clone(),
                alt: format!("Thumbnail {}", index),
                date_label: display_date(&image.capture_date),
                active: selected_id == Some(&image.id),
            })
            .collect()
    }

    pub fn metrics(&self) -> Option<ImageMetrics> {
        self.selected.as_ref().map(ImageMetrics::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imagery::fixtures::record;

    fn loaded() -> SatelliteViewerState {
        let mut state = SatelliteViewerState::new();
        state.apply(Ok(vec![
            record("s2-001", "2024-06-01T10:30:00Z"),
            record("s2-002", "2024-06-11T10:30:00Z"),
            record("s2-003", "2024-06-21T10:30:00Z"),
        ]));
        state
    }

    #[test]
    fn test_first_image_selected_on_load() {
        let state = loaded();
        assert_eq!(state.selected().map(|i| i.id.as_str()), Some("s2-001"));
        assert_eq!(state.mode(), AnalysisMode::Ndvi);
        let shown = state.displayed_image().unwrap();
        assert_eq!(shown.src, "/img/s2-001/ndvi.png");
        assert_eq!(shown.alt, "Satellite image - NDVI");
        assert_eq!(shown.date_label, "6/1/2024");
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        let mut state = SatelliteViewerState::new();
        state.apply(Ok(Vec::new()));
        assert!(state.selected().is_none());
        assert!(state.displayed_image().is_none());
        assert!(state.metrics().is_none());
        assert!(state.timeline().is_empty());
    }

    #[test]
    fn test_failure_leaves_state_empty() {
        let mut state = SatelliteViewerState::new();
        state.apply(Err(FetchError::Status(404)));
        assert!(state.images().is_empty());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_mode_switch_changes_only_displayed_ref() {
        let mut state = loaded();
        let timeline_before = state.timeline();
        let selected_before = state.selected().cloned();

        state.set_mode(AnalysisMode::Nir);

        assert_eq!(state.displayed_image().unwrap().src, "/img/s2-001/nir.png");
        assert_eq!(state.displayed_image().unwrap().alt, "Satellite image - NIR");
        assert_eq!(state.selected().cloned(), selected_before);
        assert_eq!(state.timeline(), timeline_before);
    }

    #[test]
    fn test_selection_keeps_mode() {
        let mut state = loaded();
        state.set_mode(AnalysisMode::Rgb);
        state.select(&ImageId::from("s2-003"));
        assert_eq!(state.mode(), AnalysisMode::Rgb);
        assert_eq!(state.displayed_image().unwrap().src, "/img/s2-003/rgb.png");
    }

    #[test]
    fn test_unknown_selection_is_ignored() {
        let mut state = loaded();
        state.select(&ImageId::from("missing"));
        assert_eq!(state.selected().map(|i| i.id.as_str()), Some("s2-001"));
    }

    #[test]
    fn test_timeline_highlights_by_id() {
        let mut state = loaded();
        state.select(&ImageId::from("s2-002"));
        let timeline = state.timeline();
        assert_eq!(timeline.len(), 3);
        let active: Vec<&str> = timeline
            .iter()
            .filter(|e| e.active)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(active, vec!["s2-002"]);
        assert_eq!(timeline[2].alt, "Thumbnail 2");
        assert_eq!(timeline[1].date_label, "6/11/2024");
    }

    #[test]
    fn test_metrics_follow_selection() {
        let state = loaded();
        let metrics = state.metrics().unwrap();
        assert!((metrics.avg_ndvi - 0.62).abs() < f64::EPSILON);
        assert!((metrics.stressed_areas - 9.5).abs() < f64::EPSILON);
    }
}
