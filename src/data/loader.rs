use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::data::parser;
use crate::error::{AnalysisError, Result};
use crate::state::config::AnalysisConfig;
use crate::state::data_series::SampleSeries;
use crate::state::mode::Mode;

/// Open `path` and parse its per-second samples.
pub fn load_samples(path: &Path) -> Result<Vec<u64>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => AnalysisError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parser::parse_samples(BufReader::new(file), path)
}

/// Load the series for `mode` from its log file in the configured data directory.
pub fn load_series(config: &AnalysisConfig, mode: Mode) -> Result<SampleSeries> {
    let path = config.log_path(mode);
    let samples = load_samples(&path)?;
    if samples.is_empty() {
        tracing::warn!("No throughput lines found in {:?}", path);
    } else {
        tracing::info!(mode = %mode, samples = samples.len(), "Loaded {:?}", path);
    }
    Ok(SampleSeries::new(mode, samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalysisConfig::single(Mode::Parallel).with_data_dir(dir.path());
        match load_series(&config, Mode::Parallel) {
            Err(AnalysisError::FileNotFound { path }) => {
                assert_eq!(path, dir.path().join("parallel_reviews_per_second.txt"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_series_reads_mode_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = File::create(dir.path().join("distributed_reviews_per_second.txt")).unwrap();
        writeln!(file, "Analyzed Reviews per Second: 10").unwrap();
        writeln!(file, "shutting down").unwrap();
        writeln!(file, "Analyzed Reviews per Second: 0").unwrap();
        drop(file);

        let config = AnalysisConfig::comparison().with_data_dir(dir.path());
        let series = load_series(&config, Mode::Distributed).unwrap();
        assert_eq!(series.mode(), Mode::Distributed);
        assert_eq!(series.samples(), &[10, 0]);
    }

    #[test]
    fn test_loading_twice_is_identical() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for v in [5, 0, 12, 0, 7] {
            writeln!(file, "noise line").unwrap();
            writeln!(file, "Analyzed Reviews per Second: {v}").unwrap();
        }
        file.flush().unwrap();

        let first = load_samples(file.path()).unwrap();
        let second = load_samples(file.path()).unwrap();
        assert_eq!(first, vec![5, 0, 12, 0, 7]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Analyzed Reviews per Second: abc").unwrap();
        file.flush().unwrap();

        match load_samples(file.path()) {
            Err(AnalysisError::MalformedSample { path, line, .. }) => {
                assert_eq!(path, file.path());
                assert_eq!(line, 1);
            }
            other => panic!("expected MalformedSample, got {other:?}"),
        }
    }
}
