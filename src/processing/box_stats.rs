use crate::error::{AnalysisError, Result};

/// Whisker reach as a multiple of the interquartile range.
pub const WHISKER_IQR: f64 = 1.5;

/// Geometry of one box in a box plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    /// Samples outside the whiskers, ascending.
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    pub fn compute(samples: &[u64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(AnalysisError::InsufficientData { mode: None });
        }

        let mut sorted: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let q1 = percentile(&sorted, 0.25);
        let median = percentile(&sorted, 0.5);
        let q3 = percentile(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR * iqr;
        let high_fence = q3 + WHISKER_IQR * iqr;

        // Whiskers stop at the most extreme samples still inside the fences.
        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1)
            .min(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3)
            .max(q3);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < lower_whisker || v > upper_whisker)
            .collect();

        Ok(BoxSummary {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
        })
    }
}

/// Linearly interpolated percentile of an ascending, non-empty slice.
/// `p` is a fraction in `0.0..=1.0`.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 0.25), 1.75);
        assert_eq!(percentile(&sorted, 0.5), 2.5);
        assert_eq!(percentile(&sorted, 0.75), 3.25);
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert_eq!(percentile(&sorted, 1.0), 4.0);
        assert_eq!(percentile(&[9.0], 0.3), 9.0);
    }

    #[test]
    fn test_box_without_outliers() {
        let summary = BoxSummary::compute(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 4.0);
        assert_eq!(summary.lower_whisker, 1.0);
        assert_eq!(summary.upper_whisker, 5.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn test_far_sample_becomes_outlier() {
        let summary = BoxSummary::compute(&[10, 11, 12, 13, 14, 100]).unwrap();
        // q1 = 11.25, q3 = 13.75, fence = 17.5
        assert_eq!(summary.upper_whisker, 14.0);
        assert_eq!(summary.outliers, vec![100.0]);
        assert_eq!(summary.lower_whisker, 10.0);
    }

    #[test]
    fn test_empty_series_is_rejected() {
        assert!(matches!(
            BoxSummary::compute(&[]),
            Err(AnalysisError::InsufficientData { mode: None })
        ));
    }
}
