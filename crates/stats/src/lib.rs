//! Statistical helper functions for the caeli drought-index toolkit.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator (matching R's `var()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator (matching R's `sd()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Mean of the natural logarithms of a slice.
///
/// Returns `None` if the slice is empty or any element is not strictly
/// positive and finite (the logarithm would be undefined or non-finite).
pub fn ln_mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let mut sum = 0.0;
    for &x in data {
        if !(x > 0.0) || !x.is_finite() {
            return None;
        }
        sum += x.ln();
    }
    Some(sum / data.len() as f64)
}

/// Counts the number of unique values in a slice, using an epsilon
/// tolerance of 1e-10 for floating-point comparison.
pub fn count_unique(values: &[f64]) -> usize {
    if values.is_empty() {
        return 0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    sorted
        .windows(2)
        .filter(|w| (w[1] - w[0]).abs() > 1e-10)
        .count()
        + 1
}
