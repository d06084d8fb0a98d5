use serde::{Deserialize, Serialize};

/// Ordinal field-condition buckets, best to worst.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum HealthCategory {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl HealthCategory {
    /// Fixed category order used by the health distribution on the wire and
    /// in the bar chart.
    pub const ALL: [HealthCategory; 5] = [
        HealthCategory::Excellent,
        HealthCategory::Good,
        HealthCategory::Fair,
        HealthCategory::Poor,
        HealthCategory::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HealthCategory::Excellent => "Excellent",
            HealthCategory::Good => "Good",
            HealthCategory::Fair => "Fair",
            HealthCategory::Poor => "Poor",
            HealthCategory::Critical => "Critical",
        }
    }

    /// Case-insensitive lookup of a health label as sent by the service.
    pub fn from_label(label: &str) -> Option<HealthCategory> {
        HealthCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }

    pub fn tone(self) -> HealthTone {
        match self {
            HealthCategory::Excellent => HealthTone::Green,
            HealthCategory::Good => HealthTone::Lime,
            HealthCategory::Fair => HealthTone::Yellow,
            HealthCategory::Poor => HealthTone::Orange,
            HealthCategory::Critical => HealthTone::Red,
        }
    }
}

/// Display color of a health value. Severity runs green to red; anything the
/// dashboard does not recognise is neutral gray.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HealthTone {
    Green,
    Lime,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl HealthTone {
    /// Tailwind text class.
    pub fn text_class(self) -> &'static str {
        match self {
            HealthTone::Green => "text-green-600",
            HealthTone::Lime => "text-lime-600",
            HealthTone::Yellow => "text-yellow-600",
            HealthTone::Orange => "text-orange-600",
            HealthTone::Red => "text-red-600",
            HealthTone::Gray => "text-gray-600",
        }
    }

    /// CSS color matching `text_class`, for inline styles.
    pub fn text_color(self) -> &'static str {
        match self {
            HealthTone::Green => "#16a34a",
            HealthTone::Lime => "#65a30d",
            HealthTone::Yellow => "#ca8a04",
            HealthTone::Orange => "#ea580c",
            HealthTone::Red => "#dc2626",
            HealthTone::Gray => "#4b5563",
        }
    }

    /// Bar fill used by the health distribution chart.
    pub fn bar_color(self) -> &'static str {
        match self {
            HealthTone::Green => "rgba(34, 197, 94, 0.8)",
            HealthTone::Lime => "rgba(101, 163, 13, 0.8)",
            HealthTone::Yellow => "rgba(234, 179, 8, 0.8)",
            HealthTone::Orange => "rgba(249, 115, 22, 0.8)",
            HealthTone::Red => "rgba(239, 68, 68, 0.8)",
            HealthTone::Gray => "rgba(107, 114, 128, 0.8)",
        }
    }
}

/// Tone for a raw health label.
pub fn health_tone(label: &str) -> HealthTone {
    HealthCategory::from_label(label)
        .map(HealthCategory::tone)
        .unwrap_or(HealthTone::Gray)
}

/// Coverage percentage of one health category.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct HealthShare {
    pub category: HealthCategory,
    pub coverage: f64,
}

/// Field coverage per health category, in the fixed category order.
///
/// Percentages are taken as sent; they are not required to sum to 100.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct HealthDistribution {
    shares: Vec<HealthShare>,
}

impl HealthDistribution {
    /// Pair wire values with `HealthCategory::ALL` by position. Values past
    /// the fifth are ignored; a short array yields fewer shares.
    pub fn from_values(values: &[f64]) -> Self {
        if values.len() != HealthCategory::ALL.len() {
            log::warn!(
                "Health distribution has {} values, expected {}",
                values.len(),
                HealthCategory::ALL.len()
            );
        }
        let shares = HealthCategory::ALL
            .iter()
            .zip(values)
            .map(|(&category, &coverage)| HealthShare { category, coverage })
            .collect();
        Self { shares }
    }

    pub fn shares(&self) -> &[HealthShare] {
        &self.shares
    }

    pub fn coverage(&self, category: HealthCategory) -> Option<f64> {
        self.shares
            .iter()
            .find(|share| share.category == category)
            .map(|share| share.coverage)
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}
