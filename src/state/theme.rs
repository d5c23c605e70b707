use egui::{Color32, Visuals};

/// Look of the chart windows: white background with dark ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Fill for single-series bars such as the statistics summary.
    pub accent: Color32,
    /// Color for outlier markers and value labels.
    pub ink: Color32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            accent: Color32::from_rgb(135, 206, 235), // skyblue
            ink: Color32::BLACK,
        }
    }

    pub fn visuals(&self) -> Visuals {
        Visuals::light()
    }
}
