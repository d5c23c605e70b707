/// Simple moving average over a fixed `window`.
///
/// Position `i` holds the mean of samples `i + 1 - window ..= i`. The first
/// `window - 1` positions are undefined and come back as `None`, so the output
/// always has the same length as the input. A zero window yields nothing
/// defined.
pub fn rolling_mean(samples: &[u64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; samples.len()];
    }

    let mut out = Vec::with_capacity(samples.len());
    let mut sum: u128 = 0;
    for (i, &v) in samples.iter().enumerate() {
        sum += u128::from(v);
        if i >= window {
            sum -= u128::from(samples[i - window]);
        }
        if i + 1 >= window {
            out.push(Some(sum as f64 / window as f64));
        } else {
            out.push(None);
        }
    }
    out
}

/// Defined points of the moving average as `[second, mean]` pairs, with the
/// time axis starting at 1.
pub fn rolling_points(samples: &[u64], window: usize) -> Vec<[f64; 2]> {
    rolling_mean(samples, window)
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|mean| [(i + 1) as f64, mean]))
        .collect()
}
