//! Property-based tests for the parser and the statistics engine.

use std::io::Cursor;
use std::path::Path;

use proptest::prelude::*;
use reviewplot::data::parser;
use reviewplot::processing::histogram::Histogram;
use reviewplot::processing::rolling;
use reviewplot::processing::statistics::StatisticsRecord;

/// Lines that never contain the marker.
fn noise_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("worker connected".to_string()),
        Just("Analyzed reviews: 12".to_string()),
        r"[a-z ]{1,30}",
    ]
}

fn samples_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..10_000, 1..200)
}

proptest! {
    #[test]
    fn parse_recovers_values_in_order(
        values in prop::collection::vec(0u64..1_000_000, 0..50),
        noise in prop::collection::vec(noise_strategy(), 0..50),
    ) {
        let mut text = String::new();
        for (i, v) in values.iter().enumerate() {
            if let Some(line) = noise.get(i) {
                text.push_str(line);
                text.push('\n');
            }
            text.push_str(&format!("Analyzed Reviews per Second: {v}\n"));
        }
        let parsed = parser::parse_samples(Cursor::new(&text), Path::new("prop.txt")).unwrap();
        prop_assert_eq!(&parsed, &values);

        let again = parser::parse_samples(Cursor::new(&text), Path::new("prop.txt")).unwrap();
        prop_assert_eq!(parsed, again);
    }

    #[test]
    fn statistics_stay_within_bounds(samples in samples_strategy()) {
        let stats = StatisticsRecord::compute(&samples).unwrap();
        let min = stats.min as f64;
        let max = stats.max as f64;
        prop_assert!(stats.average >= min - 1e-9 && stats.average <= max + 1e-9);
        prop_assert!(stats.median >= min && stats.median <= max);
        prop_assert!(stats.std_dev >= 0.0);
        prop_assert!((0.0..=100.0).contains(&stats.percentage_zero));
        prop_assert_eq!(stats.total, samples.iter().map(|&v| u128::from(v)).sum::<u128>());
    }

    #[test]
    fn histogram_keeps_every_sample(samples in samples_strategy(), bins in 1usize..80) {
        let hist = Histogram::density(&samples, bins).unwrap();
        prop_assert_eq!(hist.bins.len(), bins);
        prop_assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), samples.len());
    }

    #[test]
    fn rolling_mean_defines_tail_only(samples in samples_strategy(), window in 1usize..60) {
        let out = rolling::rolling_mean(&samples, window);
        prop_assert_eq!(out.len(), samples.len());
        for (i, v) in out.iter().enumerate() {
            prop_assert_eq!(v.is_some(), i + 1 >= window);
        }
    }
}
