//! Per-star orchestration.
//!
//! Light curves are laid out as `<root>/<campaign>/<star type>/<name>.csv`
//! with a sibling `<name>.info`. Each selected star is analysed independently
//! (in parallel) and yields one [`StarRow`]; failures are logged and skipped
//! so one bad file never aborts a run. Rows keep discovery order.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::AnalysisConfig;
use crate::core::{FlareReport, LightCurve, PeriodicityReport};
use crate::detection::{detect_derivative_with, detect_threshold, estimate_rotation};
use crate::error::Result;
use crate::io::dat::collect_with_extension;
use crate::io::{
    info_path_for, read_light_curve, read_star_info, DataError, DataResult, StarList, StarRow,
};

/// Results of running the analyses on one light curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveAnalysis {
    pub threshold: FlareReport,
    /// Present when the extended analyses ran.
    pub derivative: Option<FlareReport>,
    pub periodicity: Option<PeriodicityReport>,
}

/// Run the threshold detector, and with `extended` also the derivative
/// detector and rotation estimator.
pub fn analyze_curve(
    curve: &LightCurve,
    config: &AnalysisConfig,
    extended: bool,
) -> Result<CurveAnalysis> {
    let threshold = detect_threshold(curve.flux(), config.n_std_dev, config.window)?;

    if !extended {
        return Ok(CurveAnalysis {
            threshold,
            derivative: None,
            periodicity: None,
        });
    }

    let derivative = detect_derivative_with(curve, config.n_std_dev, config.counting)?;
    let periodicity = estimate_rotation(curve)?;

    Ok(CurveAnalysis {
        threshold,
        derivative: Some(derivative),
        periodicity: Some(periodicity),
    })
}

/// Star name, star type and campaign derived from a light curve path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarLocation {
    pub dirname: String,
    pub startype: String,
    pub name: String,
}

impl StarLocation {
    /// Split `<campaign>/<star type>/<name>.csv` into its parts. Missing
    /// directory levels become empty strings.
    pub fn from_path(path: &Path) -> Self {
        let component = |p: Option<&Path>| {
            p.and_then(Path::file_name)
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        };

        let type_dir = path.parent();
        let campaign_dir = type_dir.and_then(Path::parent);

        Self {
            dirname: component(campaign_dir),
            startype: component(type_dir),
            name: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}

/// All light curve CSV files below `root`, sorted.
pub fn discover_light_curves(root: &Path) -> DataResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_with_extension(root, "csv", &mut files)?;
    files.sort();
    Ok(files)
}

/// Analyse one light curve file together with its metadata.
pub fn analyze_star(path: &Path, config: &AnalysisConfig, extended: bool) -> DataResult<StarRow> {
    let location = StarLocation::from_path(path);
    let curve = read_light_curve(path)?;
    let star_info = read_star_info(&info_path_for(path))?;
    let analysis =
        analyze_curve(&curve, config, extended).map_err(|e| DataError::analysis(path, e))?;

    debug!(
        "{}: {} samples, {} threshold flares",
        path.display(),
        curve.len(),
        analysis.threshold.flare_count
    );

    Ok(StarRow {
        dirname: location.dirname,
        startype: location.startype,
        name: location.name,
        numflares: analysis.threshold.flare_count,
        teff: star_info.teff,
        derivflares: analysis.derivative.map(|r| r.flare_count),
        logg: star_info.logg,
        feh: star_info.feh,
        radius: star_info.radius,
        luminosity: star_info.luminosity,
        kepmag: star_info.kepmag,
        jmag: star_info.jmag,
        kmag: star_info.kmag,
        rotation_frequency: analysis.periodicity.map(|r| r.dominant_frequency),
        oscillation_strength: analysis.periodicity.map(|r| r.oscillation_strength),
    })
}

/// Analyse every selected light curve below `root`.
///
/// With a `selection`, only files whose stem appears in the list are
/// analysed. Stars that fail are logged and left out of the result.
pub fn process_curves(
    root: &Path,
    selection: Option<&StarList>,
    config: &AnalysisConfig,
    extended: bool,
) -> DataResult<Vec<StarRow>> {
    let files: Vec<PathBuf> = discover_light_curves(root)?
        .into_iter()
        .filter(|path| match selection {
            Some(list) => path
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|stem| list.contains(stem)),
            None => true,
        })
        .collect();

    info!(
        "processing {} light curves under {}",
        files.len(),
        root.display()
    );

    let results: Vec<DataResult<StarRow>> = files
        .par_iter()
        .map(|path| analyze_star(path, config, extended))
        .collect();

    let mut rows = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(row) => {
                info!("{}/{}/{}: {} flares", row.dirname, row.startype, row.name, row.numflares);
                rows.push(row);
            }
            Err(e) => warn!("skipping star: {}", e),
        }
    }

    info!("analysed {} of {} stars", rows.len(), files.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlareError;

    #[test]
    fn location_from_campaign_layout() {
        let loc = StarLocation::from_path(Path::new("/data/C4/COOL/210317378.csv"));
        assert_eq!(loc.dirname, "C4");
        assert_eq!(loc.startype, "COOL");
        assert_eq!(loc.name, "210317378");
    }

    #[test]
    fn location_with_missing_levels() {
        let loc = StarLocation::from_path(Path::new("star.csv"));
        assert_eq!(loc.dirname, "");
        assert_eq!(loc.startype, "");
        assert_eq!(loc.name, "star");
    }

    #[test]
    fn basic_analysis_skips_extended_detectors() {
        let time: Vec<f64> = (0..50).map(|i| i as f64 * 0.1).collect();
        let mut flux = vec![100.0; 50];
        flux[25] = 1000.0;
        let curve = LightCurve::without_error(time, flux).unwrap();

        let analysis = analyze_curve(&curve, &AnalysisConfig::default(), false).unwrap();
        assert_eq!(analysis.threshold.flare_count, 1);
        assert!(analysis.derivative.is_none());
        assert!(analysis.periodicity.is_none());
    }

    #[test]
    fn extended_analysis_runs_all_detectors() {
        let time: Vec<f64> = (0..500).map(|i| i as f64 * 0.05).collect();
        let flux: Vec<f64> = time
            .iter()
            .map(|t| 100.0 + (2.0 * std::f64::consts::PI * 0.4 * t).sin())
            .collect();
        let curve = LightCurve::without_error(time, flux).unwrap();

        let analysis = analyze_curve(&curve, &AnalysisConfig::default(), true).unwrap();
        assert!(analysis.derivative.is_some());
        let periodicity = analysis.periodicity.unwrap();
        assert!((periodicity.dominant_frequency - 0.4).abs() < 0.05);
    }

    #[test]
    fn extended_analysis_propagates_timestep_errors() {
        let curve =
            LightCurve::without_error(vec![0.0, 1.0, 1.0, 2.0], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(
            analyze_curve(&curve, &AnalysisConfig::default(), true),
            Err(FlareError::DegenerateTimestep { index: 1 })
        );
    }
}
