use crate::error::{AnalysisError, Result};

/// One histogram bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
    /// `count / (total * width)`, so all bins integrate to 1.
    pub density: f64,
}

impl Bin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Equal-width density histogram over the series' own value range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

impl Histogram {
    /// Bin `samples` into `bin_count` equal-width bins spanning min..=max.
    ///
    /// The last bin is closed on the right. When every sample is equal the
    /// range is widened to `value ± 0.5`.
    pub fn density(samples: &[u64], bin_count: usize) -> Result<Self> {
        if samples.is_empty() {
            return Err(AnalysisError::InsufficientData { mode: None });
        }
        if bin_count == 0 {
            return Err(AnalysisError::InvalidConfig(
                "histogram needs at least 1 bin".to_string(),
            ));
        }

        let min = samples.iter().copied().min().unwrap_or(0) as f64;
        let max = samples.iter().copied().max().unwrap_or(0) as f64;
        let (lo, hi) = if min == max { (min - 0.5, max + 0.5) } else { (min, max) };
        let width = (hi - lo) / bin_count as f64;

        let mut counts = vec![0usize; bin_count];
        for &v in samples {
            let idx = (((v as f64 - lo) / width) as usize).min(bin_count - 1);
            counts[idx] += 1;
        }

        let total = samples.len() as f64;
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                start: lo + i as f64 * width,
                end: lo + (i + 1) as f64 * width,
                count,
                density: count as f64 / (total * width),
            })
            .collect();

        Ok(Histogram { bins })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(hist: &Histogram) -> Vec<usize> {
        hist.bins.iter().map(|b| b.count).collect()
    }

    #[test]
    fn test_counts_and_edges() {
        let hist = Histogram::density(&[0, 1, 2, 3, 4], 4).unwrap();
        // max lands in the last, right-closed bin
        assert_eq!(counts(&hist), vec![1, 1, 1, 2]);
        assert_eq!(hist.bins[0].start, 0.0);
        assert_eq!(hist.bins[3].end, 4.0);
    }

    #[test]
    fn test_density_integrates_to_one() {
        let samples = [3, 9, 9, 14, 0, 27, 27, 27, 5, 11, 2];
        let hist = Histogram::density(&samples, 50).unwrap();
        let area: f64 = hist.bins.iter().map(|b| b.density * b.width()).sum();
        assert!((area - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_series_is_widened() {
        let hist = Histogram::density(&[6, 6, 6], 2).unwrap();
        assert_eq!(hist.bins[0].start, 5.5);
        assert_eq!(hist.bins[1].end, 6.5);
        assert_eq!(counts(&hist), vec![0, 3]);
    }

    #[test]
    fn test_empty_and_zero_bins() {
        assert!(matches!(
            Histogram::density(&[], 10),
            Err(AnalysisError::InsufficientData { .. })
        ));
        assert!(matches!(
            Histogram::density(&[1], 0),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }
}
