//! Per-star `.info` metadata files.
//!
//! Each light curve `<name>.csv` has a sibling `<name>.info`. Its second line
//! is a comma-separated record:
//!
//! ```text
//! name, teff, logg, feh, radius, luminosity, kepmag, jmag, kmag
//! ```
//!
//! Only `teff` is required. Trailing stellar parameters are optional and are
//! read only when the record has enough columns.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{DataError, DataResult};

const RECORD_LINE: usize = 1;
const TEFF_COLUMN: usize = 1;

/// Stellar parameters for one star.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StarInfo {
    /// Effective temperature, kept as written in the file.
    pub teff: String,
    pub logg: Option<f64>,
    /// Metallicity [Fe/H].
    pub feh: Option<f64>,
    pub radius: Option<f64>,
    pub luminosity: Option<f64>,
    pub kepmag: Option<f64>,
    pub jmag: Option<f64>,
    pub kmag: Option<f64>,
}

/// Path of the `.info` file belonging to a light curve.
pub fn info_path_for(light_curve: &Path) -> PathBuf {
    light_curve.with_extension("info")
}

/// Read the metadata file at `path`.
pub fn read_star_info(path: &Path) -> DataResult<StarInfo> {
    let text = fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
    parse_star_info(&text, path)
}

/// Parse metadata text. `path` is only used in errors.
pub fn parse_star_info(text: &str, path: &Path) -> DataResult<StarInfo> {
    let malformed = |reason: String| DataError::MalformedMetadata {
        path: path.to_path_buf(),
        reason,
    };

    let line = text
        .lines()
        .nth(RECORD_LINE)
        .ok_or_else(|| malformed(format!("expected a record on line {}", RECORD_LINE + 1)))?;

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() <= TEFF_COLUMN {
        return Err(malformed(format!(
            "expected at least {} columns, got {}",
            TEFF_COLUMN + 1,
            fields.len()
        )));
    }

    let optional = |column: usize, name: &str| -> DataResult<Option<f64>> {
        match fields.get(column) {
            None => Ok(None),
            Some(field) if field.is_empty() => Ok(None),
            Some(field) => field
                .parse::<f64>()
                .map(Some)
                .map_err(|_| malformed(format!("{} value {:?} is not a number", name, field))),
        }
    };

    Ok(StarInfo {
        teff: fields[TEFF_COLUMN].to_string(),
        logg: optional(2, "logg")?,
        feh: optional(3, "feh")?,
        radius: optional(4, "radius")?,
        luminosity: optional(5, "luminosity")?,
        kepmag: optional(6, "kepmag")?,
        jmag: optional(7, "jmag")?,
        kmag: optional(8, "kmag")?,
    })
}
