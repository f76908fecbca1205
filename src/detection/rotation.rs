//! Rotation period estimation from the flux spectrum.
//!
//! Light curves are unevenly sampled, so the flux is first resampled onto a
//! uniform grid by linear interpolation. The strongest strictly positive
//! frequency of the resampled spectrum is taken as the rotation frequency,
//! and the ratio of the two largest magnitudes measures how much a single
//! periodic signal dominates.

use log::trace;

use super::fft::{positive_bin_count, positive_spectrum};
use crate::core::{LightCurve, PeriodicityReport};
use crate::error::{FlareError, Result};
use crate::transform::{interp_linear, uniform_grid};

/// Spacing of the uniform resampling grid, in input time units.
pub const GRID_STEP: f64 = 0.02;

/// Smallest resampled length with two strictly positive frequency bins.
const MIN_GRID_POINTS: usize = 5;

/// Largest resampled length accepted before allocating the grid.
pub const MAX_GRID_POINTS: usize = 1 << 24;

/// Estimate the dominant rotation frequency with the default grid step.
pub fn estimate_rotation(series: &LightCurve) -> Result<PeriodicityReport> {
    estimate_rotation_with_step(series, GRID_STEP)
}

/// Estimate the dominant rotation frequency on a grid with the given step.
pub fn estimate_rotation_with_step(series: &LightCurve, step: f64) -> Result<PeriodicityReport> {
    if !(step > 0.0) {
        return Err(FlareError::InvalidParameter(format!(
            "grid step must be positive, got {}",
            step
        )));
    }

    let time = series.time();
    let start = time[0];
    let stop = time[time.len() - 1];

    if !(series.time_span() > 0.0) {
        // All samples share one timestamp.
        return Err(FlareError::InsufficientData { needed: 2, got: 1 });
    }

    let points = (series.time_span() / step).ceil();
    if !(points <= MAX_GRID_POINTS as f64) {
        return Err(FlareError::InvalidParameter(format!(
            "time span {} at step {} needs {} grid points, limit is {}",
            series.time_span(),
            step,
            points,
            MAX_GRID_POINTS
        )));
    }

    let grid = uniform_grid(start, stop, step);
    if positive_bin_count(grid.len()) < 2 {
        return Err(FlareError::InsufficientData {
            needed: MIN_GRID_POINTS,
            got: grid.len(),
        });
    }

    let resampled = interp_linear(&grid, time, series.flux());
    if resampled.iter().any(|v| !v.is_finite()) {
        return Err(FlareError::InvalidSeries(
            "flux contains non-finite values".to_string(),
        ));
    }

    let spectrum = positive_spectrum(&resampled, step);
    trace!(
        "resampled {} samples onto {} grid points, {} positive bins",
        series.len(),
        grid.len(),
        spectrum.len()
    );

    let (dominant_frequency, strongest, second) = top_two(&spectrum);

    let oscillation_strength = if strongest == second {
        1.0
    } else {
        strongest / second
    };

    Ok(PeriodicityReport {
        dominant_frequency,
        oscillation_strength,
    })
}

/// Frequency of the largest magnitude, the largest magnitude, and the second
/// largest magnitude. Ties keep the lowest frequency.
fn top_two(spectrum: &[(f64, f64)]) -> (f64, f64, f64) {
    let (mut best_freq, mut best) = spectrum[0];
    let mut second = f64::NEG_INFINITY;

    for &(freq, magnitude) in &spectrum[1..] {
        if magnitude > best {
            second = best;
            best = magnitude;
            best_freq = freq;
        } else if magnitude > second {
            second = magnitude;
        }
    }

    (best_freq, best, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    /// Samples at 0.01 time units over [0, 40].
    fn sampled(f: impl Fn(f64) -> f64) -> LightCurve {
        let time: Vec<f64> = (0..=4000).map(|i| i as f64 * 0.01).collect();
        let flux = time.iter().map(|&t| f(t)).collect();
        LightCurve::without_error(time, flux).unwrap()
    }

    #[test]
    fn recovers_sinusoid_frequency() {
        let f0 = 0.37;
        let lc = sampled(|t| (2.0 * PI * f0 * t).sin());
        let report = estimate_rotation(&lc).unwrap();

        let bin_width = 1.0 / lc.time_span();
        assert!(
            (report.dominant_frequency - f0).abs() <= bin_width,
            "expected frequency near {}, got {}",
            f0,
            report.dominant_frequency
        );
        assert!(report.oscillation_strength >= 1.0);
    }

    #[test]
    fn equal_sinusoids_have_unit_strength() {
        let lc = sampled(|t| (2.0 * PI * 0.5 * t).sin() + (2.0 * PI * 1.25 * t).sin());
        let report = estimate_rotation(&lc).unwrap();
        assert_relative_eq!(report.oscillation_strength, 1.0, epsilon = 0.05);
        assert!(
            (report.dominant_frequency - 0.5).abs() < 0.03
                || (report.dominant_frequency - 1.25).abs() < 0.03
        );
    }

    #[test]
    fn single_sinusoid_with_noise_is_strongly_periodic() {
        let lc = sampled(|t| {
            let i = (t * 100.0).round() as usize;
            let noise = ((i * 7 + 3) % 13) as f64 - 6.0;
            (2.0 * PI * 0.5 * t).sin() + 0.001 * noise
        });
        let report = estimate_rotation(&lc).unwrap();
        assert_relative_eq!(report.dominant_frequency, 0.5, epsilon = 0.03);
        assert!(
            report.oscillation_strength > 10.0,
            "strength {}",
            report.oscillation_strength
        );
    }

    #[test]
    fn constant_flux_is_well_defined() {
        let lc = sampled(|_| 42.0);
        let report = estimate_rotation(&lc).unwrap();
        assert!(report.dominant_frequency > 0.0);
        assert!(report.oscillation_strength >= 1.0);
    }

    #[test]
    fn zero_time_span_is_insufficient() {
        let lc = LightCurve::without_error(vec![3.0, 3.0, 3.0], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(
            estimate_rotation(&lc),
            Err(FlareError::InsufficientData { needed: 2, got: 1 })
        );
    }

    #[test]
    fn short_span_is_insufficient() {
        // 0.05 / 0.02 -> 3 grid points, only one positive bin
        let lc = LightCurve::without_error(vec![0.0, 0.05], vec![1.0, 2.0]).unwrap();
        assert_eq!(
            estimate_rotation(&lc),
            Err(FlareError::InsufficientData { needed: 5, got: 3 })
        );
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let lc = sampled(|t| t.sin());
        assert!(matches!(
            estimate_rotation_with_step(&lc, 0.0),
            Err(FlareError::InvalidParameter(_))
        ));
    }

    #[test]
    fn oversized_grid_is_rejected_before_allocation() {
        let lc = LightCurve::without_error(vec![0.0, 1.0e6, 2.0e6], vec![1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            estimate_rotation(&lc),
            Err(FlareError::InvalidParameter(_))
        ));

        let lc = sampled(|t| t.sin());
        assert!(matches!(
            estimate_rotation_with_step(&lc, 1.0e-12),
            Err(FlareError::InvalidParameter(_))
        ));
    }

    #[test]
    fn non_finite_flux_is_rejected() {
        let lc = LightCurve::without_error(vec![0.0, 1.0, 2.0], vec![1.0, f64::NAN, 3.0]).unwrap();
        assert!(matches!(
            estimate_rotation(&lc),
            Err(FlareError::InvalidSeries(_))
        ));
    }

    #[test]
    fn top_two_prefers_lowest_frequency_on_tie() {
        let spectrum = [(0.1, 5.0), (0.2, 9.0), (0.3, 9.0), (0.4, 1.0)];
        let (freq, best, second) = top_two(&spectrum);
        assert_relative_eq!(freq, 0.2);
        assert_relative_eq!(best, 9.0);
        assert_relative_eq!(second, 9.0);
    }
}
