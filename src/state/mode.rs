use std::fmt;

/// Suffix shared by every per-mode throughput log.
pub const LOG_FILE_SUFFIX: &str = "_reviews_per_second.txt";

/// Execution strategy whose throughput log is being analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Parallel,
    Sequential,
    Distributed,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Parallel, Mode::Sequential, Mode::Distributed];

    /// Lowercase name used in file names.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Parallel => "parallel",
            Mode::Sequential => "sequential",
            Mode::Distributed => "distributed",
        }
    }

    /// Capitalized name used in reports and chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Parallel => "Parallel",
            Mode::Sequential => "Sequential",
            Mode::Distributed => "Distributed",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}{LOG_FILE_SUFFIX}", self.name())
    }

    /// Fixed chart color for this mode.
    pub fn color(&self) -> [u8; 4] {
        match self {
            Mode::Parallel => [0, 128, 0, 255],
            Mode::Sequential => [0, 0, 255, 255],
            Mode::Distributed => [255, 0, 0, 255],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A mode paired with the color its series is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeStyle {
    pub mode: Mode,
    pub color: [u8; 4],
}

impl ModeStyle {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            color: mode.color(),
        }
    }

    pub fn color32(&self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.color[0], self.color[1], self.color[2], self.color[3])
    }

    /// Same hue with the alpha channel replaced, for overlapping fills.
    pub fn translucent(&self, alpha: u8) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.color[0], self.color[1], self.color[2], alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_follow_convention() {
        assert_eq!(Mode::Parallel.file_name(), "parallel_reviews_per_second.txt");
        assert_eq!(Mode::Sequential.file_name(), "sequential_reviews_per_second.txt");
        assert_eq!(Mode::Distributed.file_name(), "distributed_reviews_per_second.txt");
    }

    #[test]
    fn test_colors_are_distinct() {
        let colors: Vec<[u8; 4]> = Mode::ALL.iter().map(|m| ModeStyle::new(*m).color).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
