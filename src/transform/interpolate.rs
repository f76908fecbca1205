//! Uniform time grids and linear interpolation.

/// Evenly spaced values in `[start, stop)` with the given step.
///
/// The number of points is `ceil((stop - start) / step)`, so the upper bound is
/// never included. Returns an empty grid when the range is empty or not
/// finite, or the step is not positive. Callers bound the count before
/// asking for very large grids.
pub fn uniform_grid(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(stop > start) {
        return Vec::new();
    }

    let count = ((stop - start) / step).ceil();
    if !count.is_finite() {
        return Vec::new();
    }
    (0..count as usize).map(|i| start + i as f64 * step).collect()
}

/// Piecewise-linear interpolation of `(xp, fp)` evaluated at `x`.
///
/// `xp` must be non-decreasing. Points left of `xp[0]` take `fp[0]`, points
/// right of the last sample take the last value. Where `xp` repeats a
/// timestamp the rightmost sample wins.
pub fn interp_linear(x: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    if xp.is_empty() || xp.len() != fp.len() {
        return vec![f64::NAN; x.len()];
    }

    let last = xp.len() - 1;
    x.iter()
        .map(|&xi| {
            // First sample strictly to the right of xi.
            let hi = xp.partition_point(|&v| v <= xi);
            if hi == 0 {
                fp[0]
            } else if hi > last {
                fp[last]
            } else {
                let lo = hi - 1;
                let slope = (fp[hi] - fp[lo]) / (xp[hi] - xp[lo]);
                fp[lo] + (xi - xp[lo]) * slope
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn uniform_grid_excludes_stop() {
        let grid = uniform_grid(0.0, 1.0, 0.25);
        assert_eq!(grid.len(), 4);
        assert_relative_eq!(grid[3], 0.75);
    }

    #[test]
    fn uniform_grid_partial_step_rounds_up() {
        let grid = uniform_grid(1.0, 2.1, 0.5);
        assert_eq!(grid, vec![1.0, 1.5, 2.0]);
    }

    #[test]
    fn uniform_grid_degenerate_inputs() {
        assert!(uniform_grid(1.0, 1.0, 0.02).is_empty());
        assert!(uniform_grid(2.0, 1.0, 0.02).is_empty());
        assert!(uniform_grid(0.0, 1.0, 0.0).is_empty());
        assert!(uniform_grid(0.0, 1.0, f64::NAN).is_empty());
        assert!(uniform_grid(0.0, f64::INFINITY, 0.02).is_empty());
        assert!(uniform_grid(f64::NEG_INFINITY, 1.0, 0.02).is_empty());
    }

    #[test]
    fn interp_linear_between_samples() {
        let xp = [0.0, 1.0, 3.0];
        let fp = [0.0, 10.0, 30.0];
        let result = interp_linear(&[0.5, 2.0, 3.0], &xp, &fp);
        assert_relative_eq!(result[0], 5.0);
        assert_relative_eq!(result[1], 20.0);
        assert_relative_eq!(result[2], 30.0);
    }

    #[test]
    fn interp_linear_clamps_outside_domain() {
        let xp = [1.0, 2.0];
        let fp = [4.0, 8.0];
        let result = interp_linear(&[0.0, 5.0], &xp, &fp);
        assert_eq!(result, vec![4.0, 8.0]);
    }

    #[test]
    fn interp_linear_repeated_timestamp_uses_rightmost() {
        let xp = [0.0, 1.0, 1.0, 2.0];
        let fp = [0.0, 1.0, 5.0, 7.0];
        let result = interp_linear(&[1.0, 1.5], &xp, &fp);
        assert_relative_eq!(result[0], 5.0);
        assert_relative_eq!(result[1], 6.0);
    }

    #[test]
    fn interp_linear_mismatched_inputs_are_nan() {
        let result = interp_linear(&[0.5], &[0.0, 1.0], &[1.0]);
        assert!(result[0].is_nan());
    }
}
