//! Analysis configuration shared by the detectors and the pipeline.

use serde::{Deserialize, Serialize};

/// How the derivative detector turns flagged indices into a flare count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlareCounting {
    /// Onset walk over the sorted flagged indices. A trailing isolated
    /// flagged index is never counted.
    #[default]
    OnsetWalk,
    /// One flare per maximal block of consecutive flagged indices.
    ContiguousRuns,
}

/// Parameters for a full per-star analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Standard deviations above the mean used for flare thresholds.
    pub n_std_dev: f64,
    /// Moving average window of the threshold detector (>= 1).
    pub window: usize,
    /// Counting mode of the derivative detector.
    pub counting: FlareCounting,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            n_std_dev: 1.5,
            window: 10,
            counting: FlareCounting::OnsetWalk,
        }
    }
}

impl AnalysisConfig {
    pub fn new(n_std_dev: f64, window: usize) -> Self {
        Self {
            n_std_dev,
            window,
            ..Self::default()
        }
    }

    /// Set the threshold in standard deviations.
    pub fn with_std_dev(mut self, n_std_dev: f64) -> Self {
        self.n_std_dev = n_std_dev;
        self
    }

    /// Set the moving average window.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the derivative counting mode.
    pub fn with_counting(mut self, counting: FlareCounting) -> Self {
        self.counting = counting;
        self
    }
}
