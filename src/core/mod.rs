//! Core data structures for light curve analysis.

mod light_curve;
mod report;

pub use light_curve::{LightCurve, MIN_SAMPLES};
pub use report::{FlareReport, PeriodicityReport};
