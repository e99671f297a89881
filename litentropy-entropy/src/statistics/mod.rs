use libm::sqrt;

/// Descriptive statistics over a set of per-sentence entropy values.
///
/// `mean` is what the reports call a text's average entropy: each sentence
/// is measured on its own and the results are averaged, rather than
/// measuring the concatenated text once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EntropyStats {
    /// Number of samples the statistics were computed from.
    pub count: usize,
    /// The arithmetic mean of the sampled entropy values.
    pub mean: f64,
    /// Population standard deviation of the samples.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Calculates count, mean, standard deviation and range for a slice of values.
pub fn compute_stats(values: &[f64]) -> EntropyStats {
    if values.is_empty() {
        return EntropyStats::default();
    }

    let len = values.len() as f64;
    
    let mean = values.iter().sum::<f64>() / len;

    // Variance is the average of the squared differences from the mean.
    let variance = values.iter()
        .map(|value| {
            let diff = mean - value;
            diff * diff
        })
        .sum::<f64>() / len;

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    EntropyStats {
        count: values.len(),
        mean,
        std_dev: sqrt(variance),
        min,
        max,
    }
}
