//! Derivative-based flare detection.
//!
//! Flares rise faster than they decay and faster than ordinary stellar
//! variability, so this detector thresholds the discrete time derivative of
//! the flux instead of the flux itself. Positive and negative slopes get
//! separate thresholds:
//!
//! - rising: `mean(d1 > 0) + n_std_dev * std(d1 > 0)`
//! - falling: `mean(d1 < 0) - std(d1 < 0)`, a fixed one-sigma bound
//!
//! An empty partition yields a NaN threshold, which flags nothing on that
//! side. Flagged indices are then grouped into flares, see [`FlareCounting`].

use crate::config::FlareCounting;
use crate::core::{FlareReport, LightCurve};
use crate::error::{FlareError, Result};
use crate::utils::{mean, population_std_dev};

/// Positive and negative derivative thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeThresholds {
    /// Rising slopes above this value are flagged.
    pub positive: f64,
    /// Falling slopes below this value are flagged.
    pub negative: f64,
}

/// Forward-difference derivative of flux with respect to time.
///
/// `d1[i] = (flux[i+1] - flux[i]) / (time[i+1] - time[i])` and the last
/// element is 0. Fails on a repeated timestamp.
pub fn flux_derivative(series: &LightCurve) -> Result<Vec<f64>> {
    let time = series.time();
    let flux = series.flux();
    let n = series.len();

    let mut d1 = Vec::with_capacity(n);
    for i in 0..n - 1 {
        let dt = time[i + 1] - time[i];
        if dt == 0.0 {
            return Err(FlareError::DegenerateTimestep { index: i });
        }
        d1.push((flux[i + 1] - flux[i]) / dt);
    }
    d1.push(0.0);

    Ok(d1)
}

/// Compute the asymmetric thresholds from a derivative series.
pub fn derivative_thresholds(d1: &[f64], n_std_dev: f64) -> DerivativeThresholds {
    let rising: Vec<f64> = d1.iter().copied().filter(|&d| d > 0.0).collect();
    let falling: Vec<f64> = d1.iter().copied().filter(|&d| d < 0.0).collect();

    DerivativeThresholds {
        positive: n_std_dev * population_std_dev(&rising) + mean(&rising),
        negative: -population_std_dev(&falling) + mean(&falling),
    }
}

/// Indices whose derivative crosses either threshold, ascending.
pub fn flagged_indices(d1: &[f64], thresholds: &DerivativeThresholds) -> Vec<usize> {
    d1.iter()
        .enumerate()
        .filter(|(_, &d)| d > thresholds.positive || d < thresholds.negative)
        .map(|(i, _)| i)
        .collect()
}

/// Count flare onsets by walking sorted flagged indices.
///
/// A flare starts at the first index of a block of consecutive indices and
/// the walk stays inside it until a gap follows. Only indices with a
/// successor are examined, so an isolated flagged index at the very end is
/// never counted. A trailing block of two or more consecutive indices is
/// counted, since its first pair already enters the flare.
pub fn count_onsets(indices: &[usize]) -> usize {
    let mut count = 0;
    let mut in_flare = false;

    for pair in indices.windows(2) {
        if pair[1] - pair[0] > 1 {
            if !in_flare {
                count += 1;
            }
            in_flare = false;
        } else if !in_flare {
            count += 1;
            in_flare = true;
        }
    }

    count
}

/// Count maximal blocks of consecutive indices.
pub fn count_runs(indices: &[usize]) -> usize {
    if indices.is_empty() {
        return 0;
    }
    1 + indices.windows(2).filter(|w| w[1] - w[0] > 1).count()
}

/// Count flares from the flux derivative using the onset walk.
pub fn detect_derivative(series: &LightCurve, n_std_dev: f64) -> Result<FlareReport> {
    detect_derivative_with(series, n_std_dev, FlareCounting::OnsetWalk)
}

/// Count flares from the flux derivative with an explicit counting mode.
pub fn detect_derivative_with(
    series: &LightCurve,
    n_std_dev: f64,
    counting: FlareCounting,
) -> Result<FlareReport> {
    let d1 = flux_derivative(series)?;
    let thresholds = derivative_thresholds(&d1, n_std_dev);
    let flagged = flagged_indices(&d1, &thresholds);

    let flare_count = match counting {
        FlareCounting::OnsetWalk => count_onsets(&flagged),
        FlareCounting::ContiguousRuns => count_runs(&flagged),
    };

    Ok(FlareReport::new(flare_count))
}
