use std::fmt;

use crate::error::{AnalysisError, Result};

/// Names of the summary statistics, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatisticKey {
    Total,
    Average,
    Max,
    Median,
    Min,
    StandardDeviation,
    PercentageZero,
}

impl StatisticKey {
    pub const ALL: [StatisticKey; 7] = [
        StatisticKey::Total,
        StatisticKey::Average,
        StatisticKey::Max,
        StatisticKey::Median,
        StatisticKey::Min,
        StatisticKey::StandardDeviation,
        StatisticKey::PercentageZero,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatisticKey::Total => "Total",
            StatisticKey::Average => "Average",
            StatisticKey::Max => "Max",
            StatisticKey::Median => "Median",
            StatisticKey::Min => "Min",
            StatisticKey::StandardDeviation => "Standard Deviation",
            StatisticKey::PercentageZero => "Percentage Zero Reviews",
        }
    }
}

/// A single statistic. Counts stay integral; derived values are floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatisticValue {
    Integer(u128),
    Float(f64),
}

impl StatisticValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            StatisticValue::Integer(v) => v as f64,
            StatisticValue::Float(v) => v,
        }
    }
}

impl fmt::Display for StatisticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatisticValue::Integer(v) => write!(f, "{v}"),
            StatisticValue::Float(v) => write!(f, "{v:.2}"),
        }
    }
}

/// Summary of one sample series.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsRecord {
    /// Sum of all samples, wide enough that no `u64` series overflows it.
    pub total: u128,
    pub average: f64,
    pub max: u64,
    pub median: f64,
    pub min: u64,
    /// Population standard deviation (divides by N).
    pub std_dev: f64,
    pub percentage_zero: f64,
}

impl StatisticsRecord {
    /// An empty series has no mean, so it is rejected with
    /// `InsufficientData` instead of producing NaN.
    pub fn compute(samples: &[u64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(AnalysisError::InsufficientData { mode: None });
        }

        let count = samples.len() as f64;
        let total: u128 = samples.iter().map(|&v| u128::from(v)).sum();
        let min = samples.iter().copied().min().unwrap_or(0);
        let max = samples.iter().copied().max().unwrap_or(0);
        let average = total as f64 / count;

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let n = sorted.len();
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
        } else {
            sorted[n / 2] as f64
        };

        let variance = samples
            .iter()
            .map(|&v| (v as f64 - average).powi(2))
            .sum::<f64>()
            / count;
        let std_dev = variance.sqrt();

        let zeros = samples.iter().filter(|&&v| v == 0).count();
        let percentage_zero = zeros as f64 / count * 100.0;

        Ok(StatisticsRecord {
            total,
            average,
            max,
            median,
            min,
            std_dev,
            percentage_zero,
        })
    }

    pub fn get(&self, key: StatisticKey) -> StatisticValue {
        match key {
            StatisticKey::Total => StatisticValue::Integer(self.total),
            StatisticKey::Average => StatisticValue::Float(self.average),
            StatisticKey::Max => StatisticValue::Integer(self.max.into()),
            StatisticKey::Median => StatisticValue::Float(self.median),
            StatisticKey::Min => StatisticValue::Integer(self.min.into()),
            StatisticKey::StandardDeviation => StatisticValue::Float(self.std_dev),
            StatisticKey::PercentageZero => StatisticValue::Float(self.percentage_zero),
        }
    }

    /// All statistics in report order.
    pub fn entries(&self) -> [(StatisticKey, StatisticValue); 7] {
        StatisticKey::ALL.map(|key| (key, self.get(key)))
    }
}
