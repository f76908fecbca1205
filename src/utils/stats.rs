//! Statistical utility functions.
//!
//! All dispersion measures here are population statistics (divide by `n`),
//! matching how flux thresholds are defined. Empty input yields NaN rather
//! than a default so that degenerate statistics propagate to the caller.

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the population variance of a slice (denominator `n`).
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / values.len() as f64
}

/// Calculate the population standard deviation of a slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Mean plus `n_std_dev` population standard deviations.
///
/// NaN for empty input.
pub fn sigma_threshold(values: &[f64], n_std_dev: f64) -> f64 {
    mean(values) + n_std_dev * population_std_dev(values)
}
