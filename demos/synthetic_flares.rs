//! Runs every analysis on a synthetic flaring, rotating star.
//!
//! Run with: cargo run --example synthetic_flares

use lightcurve_flares::prelude::*;
use std::f64::consts::TAU;

fn main() {
    println!("=== lightcurve-flares: synthetic star ===\n");

    // 1. Build a detrended light curve: 2.5 day rotation plus three flares
    //    with a fast rise and exponential decay.
    let time: Vec<f64> = (0..2000).map(|i| i as f64 * 0.0204).collect();
    let flare_starts = [350, 900, 1500];
    let flux: Vec<f64> = time
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let rotation = 2.0 * (TAU * t / 2.5).sin();
            let flares: f64 = flare_starts
                .iter()
                .filter(|&&start| i >= start)
                .map(|&start| 60.0 * (-((i - start) as f64) / 3.0).exp())
                .sum();
            rotation + flares
        })
        .collect();

    let curve = LightCurve::without_error(time, flux).unwrap();
    println!(
        "Light curve: {} samples over {:.1} days\n",
        curve.len(),
        curve.time_span()
    );

    // 2. Threshold detector across several sigma levels
    println!("--- Threshold detector (window 10) ---");
    for n_std_dev in [0.5, 1.0, 1.5, 2.0, 3.0] {
        let report = detect_threshold(curve.flux(), n_std_dev, 10).unwrap();
        println!("  n_std_dev {:.1}: {} flagged samples", n_std_dev, report.flare_count);
    }

    // 3. Derivative detector in both counting modes
    println!("\n--- Derivative detector (n_std_dev 1.5) ---");
    let onsets = detect_derivative(&curve, 1.5).unwrap();
    let runs = detect_derivative_with(&curve, 1.5, FlareCounting::ContiguousRuns).unwrap();
    println!("  onset walk:      {} flares", onsets.flare_count);
    println!("  contiguous runs: {} flares", runs.flare_count);

    // 4. Rotation estimate
    println!("\n--- Rotation ---");
    let rotation = estimate_rotation(&curve).unwrap();
    println!(
        "  dominant frequency {:.4} /day (period {:.3} days, true 2.5)",
        rotation.dominant_frequency,
        rotation.period()
    );
    println!("  oscillation strength {:.2}", rotation.oscillation_strength);

    // 5. Everything at once through the pipeline entry point
    let analysis = analyze_curve(&curve, &AnalysisConfig::default(), true).unwrap();
    println!("\n--- analyze_curve ---\n  {:?}", analysis);
}
