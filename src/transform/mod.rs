//! Series transformations used by the detectors.
//!
//! # Example
//!
//! ```
//! use lightcurve_flares::transform::{interp_linear, moving_average_full, uniform_grid};
//!
//! let flux = vec![1.0, 2.0, 3.0, 4.0];
//! let smoothed = moving_average_full(&flux, 2);
//! assert_eq!(smoothed.len(), flux.len() + 1);
//!
//! let grid = uniform_grid(0.0, 3.0, 0.5);
//! let resampled = interp_linear(&grid, &[0.0, 1.0, 2.0, 3.0], &flux);
//! assert_eq!(resampled.len(), grid.len());
//! ```

pub mod interpolate;
pub mod window;

pub use interpolate::{interp_linear, uniform_grid};
pub use window::{convolve_full, moving_average_full};
