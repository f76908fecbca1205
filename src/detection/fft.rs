//! FFT utilities for rotation period estimation.
//!
//! Provides Fast Fourier Transform based tools for turning a uniformly
//! sampled flux series into a magnitude spectrum over physical frequencies.

use rustfft::{num_complex::Complex64, FftPlanner};

/// Compute the FFT of a real-valued signal.
///
/// Returns the complex frequency domain representation.
/// Only returns bins 0 to N/2 since the input is real-valued and the
/// spectrum is symmetric.
pub fn fft_real(signal: &[f64]) -> Vec<Complex64> {
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    let mut buffer: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    buffer.truncate(n / 2 + 1);
    buffer
}

/// Sample frequencies of an `n`-point DFT with the given sample spacing.
///
/// Bin `k` maps to `k / (n * spacing)` for the first half and to negative
/// frequencies for the second half; for even `n` the Nyquist bin is negative.
pub fn fft_frequencies(n: usize, spacing: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }

    let scale = 1.0 / (n as f64 * spacing);
    let split = n.div_ceil(2);
    (0..n)
        .map(|k| {
            if k < split {
                k as f64 * scale
            } else {
                -((n - k) as f64) * scale
            }
        })
        .collect()
}

/// Number of strictly positive frequency bins in an `n`-point DFT.
pub fn positive_bin_count(n: usize) -> usize {
    n.saturating_sub(1) / 2
}

/// Magnitude spectrum over strictly positive frequencies.
///
/// Returns `(frequency, |X[k]|)` pairs for `k = 1..=(n-1)/2`, in ascending
/// frequency order. The DC bin and (for even `n`) the Nyquist bin are excluded.
pub fn positive_spectrum(signal: &[f64], spacing: f64) -> Vec<(f64, f64)> {
    let n = signal.len();
    let count = positive_bin_count(n);
    if count == 0 {
        return Vec::new();
    }

    let coefficients = fft_real(signal);
    let frequencies = fft_frequencies(n, spacing);

    (1..=count)
        .map(|k| (frequencies[k], coefficients[k].norm()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn generate_sine(n: usize, period: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / period as f64).sin())
            .collect()
    }

    #[test]
    fn fft_real_pure_sine() {
        let signal = generate_sine(128, 16);
        let fft_result = fft_real(&signal);
        assert_eq!(fft_result.len(), 65);

        let max_idx = fft_result
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|(_, a), (_, b)| a.norm().partial_cmp(&b.norm()).unwrap())
            .map(|(i, _)| i)
            .unwrap();

        assert_eq!(max_idx, 8); // frequency index 8 = period 16
    }

    #[test]
    fn fft_real_empty() {
        assert!(fft_real(&[]).is_empty());
    }

    #[test]
    fn fft_frequencies_even_length() {
        let freqs = fft_frequencies(4, 0.5);
        let expected = [0.0, 0.5, -1.0, -0.5];
        for (f, e) in freqs.iter().zip(expected.iter()) {
            assert_relative_eq!(*f, *e);
        }
    }

    #[test]
    fn fft_frequencies_odd_length() {
        let freqs = fft_frequencies(5, 1.0);
        let expected = [0.0, 0.2, 0.4, -0.4, -0.2];
        for (f, e) in freqs.iter().zip(expected.iter()) {
            assert_relative_eq!(*f, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn positive_bin_count_excludes_dc_and_nyquist() {
        assert_eq!(positive_bin_count(0), 0);
        assert_eq!(positive_bin_count(2), 0);
        assert_eq!(positive_bin_count(4), 1);
        assert_eq!(positive_bin_count(5), 2);
        assert_eq!(positive_bin_count(6), 2);
    }

    #[test]
    fn positive_spectrum_locates_sine() {
        // 10 cycles over 200 samples at spacing 0.5 -> 0.1 cycles per unit
        let signal = generate_sine(200, 20);
        let spectrum = positive_spectrum(&signal, 0.5);
        assert_eq!(spectrum.len(), 99);

        let (freq, magnitude) = spectrum
            .iter()
            .copied()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
            .unwrap();
        assert_relative_eq!(freq, 0.1, epsilon = 1e-12);
        assert_relative_eq!(magnitude, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn positive_spectrum_too_short() {
        assert!(positive_spectrum(&[1.0, 2.0], 1.0).is_empty());
    }
}
