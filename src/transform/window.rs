//! Moving window functions.
//!
//! The moving average here uses "full" convolution semantics: the series is
//! conceptually zero-padded on both ends, so the output is `window - 1`
//! samples longer than the input and boundary values are attenuated (they
//! are always divided by `window`, not by the number of real samples).

/// Full discrete convolution of `signal` with `kernel`.
///
/// Output length is `signal.len() + kernel.len() - 1`; empty if either input
/// is empty.
pub fn convolve_full(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    if signal.is_empty() || kernel.is_empty() {
        return Vec::new();
    }

    let n = signal.len();
    let m = kernel.len();
    let mut result = vec![0.0; n + m - 1];

    for (i, &s) in signal.iter().enumerate() {
        for (j, &k) in kernel.iter().enumerate() {
            result[i + j] += s * k;
        }
    }

    result
}

/// Uniform moving average in "full" mode.
///
/// Equivalent to `convolve_full(series, &[1/window; window])` but computed as
/// a running sum in `O(n + window)`.
///
/// `result[i]` is the sum of `series[j]` for `max(0, i + 1 - window) <= j <= min(i, n - 1)`,
/// divided by `window`. Non-finite samples only affect the outputs whose
/// window covers them: NaN, or opposite infinities, give NaN; a single-signed
/// infinity gives that infinity.
pub fn moving_average_full(series: &[f64], window: usize) -> Vec<f64> {
    if series.is_empty() || window == 0 {
        return Vec::new();
    }

    let n = series.len();
    let len = n + window - 1;
    let scale = 1.0 / window as f64;
    let mut result = Vec::with_capacity(len);
    let mut running = WindowSum::default();

    for i in 0..len {
        if i < n {
            running.add(series[i]);
        }
        if i >= window {
            running.remove(series[i - window]);
        }
        result.push(running.value() * scale);
    }

    result
}

/// Running sum that keeps non-finite samples out of the finite total.
#[derive(Debug, Default)]
struct WindowSum {
    finite: f64,
    /// Counts of NaN, +inf and -inf samples in the window.
    non_finite: [usize; 3],
}

impl WindowSum {
    fn add(&mut self, x: f64) {
        match non_finite_slot(x) {
            Some(slot) => self.non_finite[slot] += 1,
            None => self.finite += x,
        }
    }

    fn remove(&mut self, x: f64) {
        match non_finite_slot(x) {
            Some(slot) => self.non_finite[slot] -= 1,
            None => self.finite -= x,
        }
    }

    fn value(&self) -> f64 {
        match self.non_finite {
            [0, 0, 0] => self.finite,
            [0, _, 0] => f64::INFINITY,
            [0, 0, _] => f64::NEG_INFINITY,
            _ => f64::NAN,
        }
    }
}

fn non_finite_slot(x: f64) -> Option<usize> {
    if x.is_nan() {
        Some(0)
    } else if x == f64::INFINITY {
        Some(1)
    } else if x == f64::NEG_INFINITY {
        Some(2)
    } else {
        None
    }
}
