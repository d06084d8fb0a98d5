//! Plain-text renderings of the dashboard views.

use agri_core::crop::CropAnalysisState;
use agri_core::satellite::SatelliteViewerState;

/// Report of the crop analysis view: NDVI series, health distribution, yield
/// forecast, field list and the selected field.
pub fn crop_report(state: &CropAnalysisState) -> String {
    let snapshot = state.snapshot();
    let mut lines = Vec::new();

    lines.push(format!("NDVI series ({} points)", snapshot.ndvi.len()));
    for (label, value) in snapshot.ndvi.labels().iter().zip(snapshot.ndvi.values()) {
        lines.push(format!("  {:<12} {:.2}", label, value));
    }

    lines.push("Health distribution".to_string());
    for share in snapshot.health.shares() {
        lines.push(format!("  {:<12} {}%", share.category.label(), share.coverage));
    }

    match &snapshot.yield_prediction {
        Some(prediction) => lines.push(format!(
            "Yield prediction: {} tons/ha ({}% confidence), harvest {}",
            prediction.estimated_yield, prediction.confidence, prediction.harvest_window
        )),
        None => lines.push("Yield prediction: not available".to_string()),
    }

    lines.push(format!("Fields ({})", snapshot.fields.len()));
    for field in &snapshot.fields {
        lines.push(format!(
            "  {:<10} {} [{}]",
            field.id,
            field.option_label(),
            field.health
        ));
    }

    if let Some(field) = state.selected_field() {
        lines.push(format!("Selected field: {}", field.name));
        lines.push(format!("  Area: {} hectares", field.area));
        lines.push(format!("  Crop Type: {}", field.crop_type));
        lines.push(format!(
            "  Health: {} ({})",
            field.health,
            field.health_tone().text_class()
        ));
        lines.push(format!("  Current NDVI: {}", field.current_ndvi));
        lines.push(format!("  Growth Stage: {}", field.growth_stage));
        lines.push(format!("  Last Updated: {}", field.last_updated_label()));
    }

    lines.join("\n")
}

/// Report of the satellite viewer: timeline with the active entry marked, the
/// displayed image and its metrics.
pub fn satellite_report(state: &SatelliteViewerState) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Image timeline ({} images)", state.images().len()));
    for entry in state.timeline() {
        let marker = if entry.active { '*' } else { ' ' };
        lines.push(format!(
            "{} {:<12} {:<10} {}",
            marker, entry.id, entry.date_label, entry.thumbnail
        ));
    }

    match state.displayed_image() {
        Some(image) => {
            lines.push(format!("Mode: {}", state.mode().label()));
            lines.push(format!("Image: {}", image.src));
            lines.push(format!("  Date: {}", image.date_label));
            lines.push(format!("  Resolution: {}m", image.resolution));
            lines.push(format!("  Cloud Cover: {}%", image.cloud_cover));
        }
        None => lines.push("No image selected".to_string()),
    }

    if let Some(metrics) = state.metrics() {
        lines.push("Image analysis results".to_string());
        lines.push(format!("  Average NDVI: {}", metrics.avg_ndvi));
        lines.push(format!("  Vegetation Coverage: {}%", metrics.vegetation_coverage));
        lines.push(format!("  Healthy Vegetation: {}%", metrics.healthy_vegetation));
        lines.push(format!("  Stressed Areas: {}%", metrics.stressed_areas));
    }

    lines.join("\n")
}
