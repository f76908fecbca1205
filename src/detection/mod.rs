//! Flare and periodicity detection for light curves.
//!
//! This module provides:
//! - [`detect_threshold`]: flux above a moving-average threshold
//! - [`detect_derivative`]: steep rises and falls in the flux derivative
//! - [`estimate_rotation`]: dominant rotation frequency from the spectrum
//!
//! All three are pure functions of their input.

pub mod derivative;
pub mod fft;
pub mod rotation;
pub mod threshold;

pub use derivative::{
    count_onsets, count_runs, derivative_thresholds, detect_derivative, detect_derivative_with,
    flagged_indices, flux_derivative, DerivativeThresholds,
};
pub use fft::{fft_frequencies, fft_real, positive_spectrum};
pub use rotation::{estimate_rotation, estimate_rotation_with_step, GRID_STEP, MAX_GRID_POINTS};
pub use threshold::{detect_threshold, threshold_flags, ThresholdResult};
