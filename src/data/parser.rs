use std::io::BufRead;
use std::path::Path;

use crate::error::{AnalysisError, Result};

/// Text that marks a per-second throughput line.
pub const MARKER: &str = "Analyzed Reviews per Second:";

/// Extract the per-second sample from a single line.
///
/// Returns `None` for lines without the marker, `Some(Ok(n))` for a marker
/// line with a valid count and `Some(Err(text))` with the trimmed remainder
/// when that remainder is not a non-negative integer.
pub fn parse_line(line: &str) -> Option<std::result::Result<u64, &str>> {
    let pos = line.find(MARKER)?;
    let value = line[pos + MARKER.len()..].trim();
    Some(value.parse::<u64>().map_err(|_| value))
}

/// Read every marker line from `reader`, keeping file order.
///
/// `origin` only labels errors. A malformed value aborts the whole parse.
pub fn parse_samples<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<u64>> {
    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| AnalysisError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
        match parse_line(&line) {
            None => continue,
            Some(Ok(value)) => samples.push(value),
            Some(Err(text)) => {
                return Err(AnalysisError::MalformedSample {
                    path: origin.to_path_buf(),
                    line: idx + 1,
                    text: text.to_string(),
                });
            }
        }
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Vec<u64>> {
        parse_samples(Cursor::new(text), Path::new("test.txt"))
    }

    #[test]
    fn test_parse_preserves_order_and_skips_noise() {
        let text = "\
Starting analysis
Analyzed Reviews per Second: 5
worker 3 connected
Analyzed Reviews per Second: 0
Analyzed Reviews per Second:12
queue drained: 4 remaining
Analyzed Reviews per Second:   0
[INFO] Analyzed Reviews per Second: 7
";
        assert_eq!(parse(text).unwrap(), vec![5, 0, 12, 0, 7]);
    }

    #[test]
    fn test_parse_without_marker_is_empty() {
        assert_eq!(parse("nothing here\nor here\n").unwrap(), Vec::<u64>::new());
        assert_eq!(parse("").unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn test_parse_handles_crlf() {
        let text = "Analyzed Reviews per Second: 3\r\nAnalyzed Reviews per Second: 4\r\n";
        assert_eq!(parse(text).unwrap(), vec![3, 4]);
    }

    #[test]
    fn test_malformed_value_is_rejected() {
        let text = "Analyzed Reviews per Second: 1\nAnalyzed Reviews per Second: abc\n";
        match parse(text) {
            Err(AnalysisError::MalformedSample { path, line, text }) => {
                assert_eq!(path, Path::new("test.txt"));
                assert_eq!(line, 2);
                assert_eq!(text, "abc");
            }
            other => panic!("expected malformed sample, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_and_empty_values_are_rejected() {
        assert!(matches!(
            parse("Analyzed Reviews per Second: -4\n"),
            Err(AnalysisError::MalformedSample { .. })
        ));
        assert!(matches!(
            parse("Analyzed Reviews per Second:\n"),
            Err(AnalysisError::MalformedSample { .. })
        ));
        assert!(matches!(
            parse("Analyzed Reviews per Second: 3.5\n"),
            Err(AnalysisError::MalformedSample { .. })
        ));
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("Analyzed Reviews per Second: 42"), Some(Ok(42)));
        assert_eq!(parse_line("Analyzed Reviews per Second: x1"), Some(Err("x1")));
        assert_eq!(parse_line("Analyzed reviews per second: 42"), None);
    }
}
