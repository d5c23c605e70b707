use std::fmt;
use std::path::PathBuf;

use crate::state::mode::Mode;

/// Everything that can stop an analysis run.
#[derive(Debug)]
pub enum AnalysisError {
    /// The log file for a mode does not exist.
    FileNotFound { path: PathBuf },

    /// A log file could not be opened or read, or the report could not be written.
    Io { path: PathBuf, source: std::io::Error },

    /// A marker line whose value is not a non-negative integer.
    MalformedSample {
        path: PathBuf,
        line: usize,
        text: String,
    },

    /// A series with no samples reached a computation that needs at least one.
    InsufficientData { mode: Option<Mode> },

    /// Configuration values that cannot drive an analysis.
    InvalidConfig(String),

    /// The windowing backend failed to open or run a chart.
    Chart(String),
}

impl AnalysisError {
    /// Attach the mode to an `InsufficientData` error raised by a mode-agnostic
    /// computation. Other variants pass through untouched.
    pub fn for_mode(self, mode: Mode) -> Self {
        match self {
            AnalysisError::InsufficientData { mode: None } => {
                AnalysisError::InsufficientData { mode: Some(mode) }
            }
            other => other,
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::FileNotFound { path } => {
                write!(f, "Input file not found: {}", path.display())
            }
            AnalysisError::Io { path, source } => {
                write!(f, "I/O error on {}: {source}", path.display())
            }
            AnalysisError::MalformedSample { path, line, text } => write!(
                f,
                "Malformed sample in {} at line {line}: {text:?} is not a non-negative integer",
                path.display()
            ),
            AnalysisError::InsufficientData { mode: Some(mode) } => {
                write!(f, "Insufficient data: no samples found for {}", mode.label())
            }
            AnalysisError::InsufficientData { mode: None } => {
                write!(f, "Insufficient data: at least one sample is required")
            }
            AnalysisError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            AnalysisError::Chart(msg) => write!(f, "Chart error: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<eframe::Error> for AnalysisError {
    fn from(err: eframe::Error) -> Self {
        AnalysisError::Chart(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
