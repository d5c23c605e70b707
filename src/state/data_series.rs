use crate::error::Result;
use crate::processing::statistics::StatisticsRecord;
use crate::state::mode::Mode;

/// Per-second throughput readings for one mode, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSeries {
    mode: Mode,
    samples: Vec<u64>,
}

impl SampleSeries {
    pub fn new(mode: Mode, samples: Vec<u64>) -> Self {
        Self { mode, samples }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn samples(&self) -> &[u64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `[second, value]` pairs with the time axis starting at 1.
    pub fn timeline_points(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &v)| [(i + 1) as f64, v as f64])
            .collect()
    }

    pub fn statistics(&self) -> Result<StatisticsRecord> {
        StatisticsRecord::compute(&self.samples).map_err(|e| e.for_mode(self.mode))
    }
}
