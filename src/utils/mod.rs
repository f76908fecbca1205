//! Utility functions shared by the detectors.

pub mod stats;

pub use stats::{mean, population_std_dev, population_variance, sigma_threshold};
