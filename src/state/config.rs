use std::path::{Path, PathBuf};

use crate::error::{AnalysisError, Result};
use crate::state::mode::{Mode, ModeStyle};
use crate::state::theme::Theme;

pub const VERSION: &str = "0.1.0";

/// Window size of the smoothed-trend moving average.
pub const DEFAULT_ROLLING_WINDOW: usize = 50;
/// Bin count of the distribution histogram.
pub const DEFAULT_HISTOGRAM_BINS: usize = 50;
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];

/// Everything an analysis run needs, fixed at startup and passed down
/// explicitly to the loader and the renderer.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Directory holding the `<mode>_reviews_per_second.txt` files.
    pub data_dir: PathBuf,
    /// Modes to analyze, in report and legend order.
    pub modes: Vec<ModeStyle>,
    pub rolling_window: usize,
    pub histogram_bins: usize,
    pub window_size: [f32; 2],
    pub theme: Theme,
}

impl AnalysisConfig {
    /// All three modes, compared side by side.
    pub fn comparison() -> Self {
        Self::with_modes(&Mode::ALL)
    }

    /// A single mode on its own.
    pub fn single(mode: Mode) -> Self {
        Self::with_modes(&[mode])
    }

    fn with_modes(modes: &[Mode]) -> Self {
        Self {
            data_dir: PathBuf::from("."),
            modes: modes.iter().copied().map(ModeStyle::new).collect(),
            rolling_window: DEFAULT_ROLLING_WINDOW,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            window_size: DEFAULT_WINDOW_SIZE,
            theme: Theme::light(),
        }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Path of the log file for `mode`.
    pub fn log_path(&self, mode: Mode) -> PathBuf {
        self.data_dir.join(mode.file_name())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn validate(&self) -> Result<()> {
        if self.modes.is_empty() {
            return Err(AnalysisError::InvalidConfig("no modes selected".to_string()));
        }
        if self.rolling_window == 0 {
            return Err(AnalysisError::InvalidConfig(
                "rolling window must be at least 1".to_string(),
            ));
        }
        if self.histogram_bins == 0 {
            return Err(AnalysisError::InvalidConfig(
                "histogram needs at least 1 bin".to_string(),
            ));
        }
        for (i, style) in self.modes.iter().enumerate() {
            if self.modes[..i].iter().any(|s| s.mode == style.mode) {
                return Err(AnalysisError::InvalidConfig(format!(
                    "mode {} listed twice",
                    style.mode
                )));
            }
        }
        Ok(())
    }
}
