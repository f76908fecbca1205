//! # lightcurve-flares
//!
//! Flare detection and rotation period estimation for stellar light curves.
//!
//! Provides two flare detectors (a moving-average flux threshold and an
//! asymmetric flux-derivative threshold) and an FFT-based rotation frequency
//! estimator, plus the file handling needed to run them over a tree of K2
//! campaign light curves and collect a per-star summary table.
//!
//! # Example
//!
//! ```
//! use lightcurve_flares::prelude::*;
//!
//! let time: Vec<f64> = (0..500).map(|i| i as f64 * 0.05).collect();
//! let mut flux: Vec<f64> = time.iter().map(|t| 100.0 + (0.8 * t).sin()).collect();
//! flux[200] = 400.0;
//!
//! let curve = LightCurve::without_error(time, flux).unwrap();
//! let flares = detect_threshold(curve.flux(), 1.5, 10).unwrap();
//! assert!(flares.flare_count >= 1);
//!
//! let rotation = estimate_rotation(&curve).unwrap();
//! assert!(rotation.oscillation_strength >= 1.0);
//! ```

#![allow(clippy::needless_range_loop)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]

pub mod config;
pub mod core;
pub mod detection;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod transform;
pub mod utils;

pub use error::{FlareError, Result};

pub mod prelude {
    pub use crate::config::{AnalysisConfig, FlareCounting};
    pub use crate::core::{FlareReport, LightCurve, PeriodicityReport};
    pub use crate::detection::{
        detect_derivative, detect_derivative_with, detect_threshold, estimate_rotation,
    };
    pub use crate::error::{FlareError, Result};
    pub use crate::pipeline::{analyze_curve, CurveAnalysis};
}
