//! Moving-average threshold flare detection.
//!
//! A sample is flagged when its flux exceeds the local moving average plus a
//! global offset of `mean + n_std_dev * std` of the whole series. The flare
//! count is the number of flagged samples, so one multi-sample flare is
//! counted once per sample above threshold. The global statistics skip
//! non-finite samples; a NaN only blanks the averages whose window covers it.

use crate::core::FlareReport;
use crate::error::{FlareError, Result};
use crate::transform::moving_average_full;
use crate::utils::sigma_threshold;

/// Result of threshold flare detection.
#[derive(Debug, Clone)]
pub struct ThresholdResult {
    /// Indices of samples above the threshold curve.
    pub flagged_indices: Vec<usize>,
    /// Global offset `mean + n_std_dev * std` added to the moving average.
    pub threshold_value: f64,
    /// Per-sample threshold (moving average plus offset), one per input sample.
    pub threshold_curve: Vec<f64>,
}

impl ThresholdResult {
    /// Number of flagged samples.
    pub fn flare_count(&self) -> usize {
        self.flagged_indices.len()
    }

    /// Check if a specific sample was flagged.
    pub fn is_flagged(&self, index: usize) -> bool {
        self.flagged_indices.binary_search(&index).is_ok()
    }
}

/// Flag samples whose flux exceeds the moving-average threshold curve.
///
/// # Arguments
/// * `flux` - Flux series
/// * `n_std_dev` - Standard deviations above the mean for the global offset
/// * `window` - Moving average window, at least 1
pub fn threshold_flags(flux: &[f64], n_std_dev: f64, window: usize) -> Result<ThresholdResult> {
    if window == 0 {
        return Err(FlareError::InvalidParameter(
            "window must be at least 1".to_string(),
        ));
    }

    let finite: Vec<f64> = flux.iter().copied().filter(|v| v.is_finite()).collect();
    let threshold_value = sigma_threshold(&finite, n_std_dev);

    // The full-mode average is window - 1 samples longer; only the leading
    // entries line up with the input.
    let mut threshold_curve = moving_average_full(flux, window);
    threshold_curve.truncate(flux.len());
    for t in threshold_curve.iter_mut() {
        *t += threshold_value;
    }

    let flagged_indices: Vec<usize> = flux
        .iter()
        .zip(threshold_curve.iter())
        .enumerate()
        .filter(|(_, (&f, &t))| f > t)
        .map(|(i, _)| i)
        .collect();

    Ok(ThresholdResult {
        flagged_indices,
        threshold_value,
        threshold_curve,
    })
}

/// Count flare samples using the moving-average threshold.
pub fn detect_threshold(flux: &[f64], n_std_dev: f64, window: usize) -> Result<FlareReport> {
    let result = threshold_flags(flux, n_std_dev, window)?;
    Ok(FlareReport::new(result.flare_count()))
}
