//! Per-star analysis outputs.

use serde::Serialize;

/// Output of a flare detector for one light curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlareReport {
    /// Number of detected flares (samples or onsets depending on the detector).
    pub flare_count: usize,
}

impl FlareReport {
    pub fn new(flare_count: usize) -> Self {
        Self { flare_count }
    }

    /// Whether any flare was detected.
    pub fn has_flares(&self) -> bool {
        self.flare_count > 0
    }
}

/// Output of the rotation period estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodicityReport {
    /// Strongest positive frequency, in cycles per input time unit.
    pub dominant_frequency: f64,
    /// Largest spectral magnitude divided by the second largest (>= 1).
    pub oscillation_strength: f64,
}

impl PeriodicityReport {
    /// Rotation period implied by the dominant frequency.
    pub fn period(&self) -> f64 {
        1.0 / self.dominant_frequency
    }
}
