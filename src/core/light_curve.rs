//! LightCurve data structure: one star's time, flux and error samples.

use crate::error::{FlareError, Result};

/// Minimum number of samples a light curve must hold.
pub const MIN_SAMPLES: usize = 2;

/// A time-ordered series of (time, flux, error) samples for one star.
///
/// The three columns are aligned index-for-index. Time is non-decreasing but
/// not necessarily strictly increasing; analyses that divide by a time delta
/// report repeated timestamps as errors instead of dividing by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LightCurve {
    time: Vec<f64>,
    flux: Vec<f64>,
    error: Vec<f64>,
}

impl LightCurve {
    /// Create a light curve, validating lengths, finite time and time ordering.
    pub fn new(time: Vec<f64>, flux: Vec<f64>, error: Vec<f64>) -> Result<Self> {
        if time.len() != flux.len() || time.len() != error.len() {
            return Err(FlareError::InvalidSeries(format!(
                "column lengths differ: time={}, flux={}, error={}",
                time.len(),
                flux.len(),
                error.len()
            )));
        }

        if time.len() < MIN_SAMPLES {
            return Err(FlareError::InvalidSeries(format!(
                "need at least {} samples, got {}",
                MIN_SAMPLES,
                time.len()
            )));
        }

        if let Some(i) = time.iter().position(|t| !t.is_finite()) {
            return Err(FlareError::InvalidSeries(format!(
                "time at sample {} is not finite: {}",
                i, time[i]
            )));
        }

        if let Some(i) = time.windows(2).position(|w| w[1] < w[0]) {
            return Err(FlareError::InvalidSeries(format!(
                "time decreases between samples {} and {}",
                i,
                i + 1
            )));
        }

        Ok(Self { time, flux, error })
    }

    /// Create a light curve with zero measurement error.
    pub fn without_error(time: Vec<f64>, flux: Vec<f64>) -> Result<Self> {
        let error = vec![0.0; time.len()];
        Self::new(time, flux, error)
    }

    /// Observation times.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Flux measurements.
    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// Flux uncertainties, carried through unchanged.
    pub fn error(&self) -> &[f64] {
        &self.error
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Always false for a validated curve; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Time span covered, `max(time) - min(time)`.
    pub fn time_span(&self) -> f64 {
        // Non-decreasing, so the endpoints bound the range.
        self.time[self.time.len() - 1] - self.time[0]
    }
}
