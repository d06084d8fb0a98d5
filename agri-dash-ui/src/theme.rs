//! Dashboard palette.

pub const PRIMARY_50: &str = "#f0fdf4";
pub const PRIMARY_500: &str = "#22c55e";
pub const PRIMARY_600: &str = "#16a34a";
pub const PRIMARY_700: &str = "#15803d";

pub const EARTH_100: &str = "#f3e8a0";
pub const EARTH_700: &str = "#654321";

pub const MUTED_TEXT: &str = "#666";
pub const PANEL_BORDER: &str = "#e0e0e0";

/// Color of a status indicator dot.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum StatusLevel {
    Green,
    Yellow,
}

impl StatusLevel {
    pub fn dot_color(self) -> &'static str {
        match self {
            StatusLevel::Green => PRIMARY_500,
            StatusLevel::Yellow => "#eab308",
        }
    }
}
