//! Summary table of per-star results.

use std::path::Path;

use serde::Serialize;

use super::{DataError, DataResult};

/// One row of the summary table.
///
/// The extended fields are `None` when only the threshold detector ran.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarRow {
    /// Campaign directory, e.g. `C4`.
    pub dirname: String,
    /// Star class directory, e.g. `COOL`.
    pub startype: String,
    pub name: String,
    /// Flagged samples from the threshold detector.
    pub numflares: usize,
    pub teff: String,
    /// Flares from the derivative detector.
    pub derivflares: Option<usize>,
    pub logg: Option<f64>,
    pub feh: Option<f64>,
    pub radius: Option<f64>,
    pub luminosity: Option<f64>,
    pub kepmag: Option<f64>,
    pub jmag: Option<f64>,
    pub kmag: Option<f64>,
    pub rotation_frequency: Option<f64>,
    pub oscillation_strength: Option<f64>,
}

const BASIC_HEADER: [&str; 6] = ["", "dirname", "startype", "name", "numflares", "teff"];

const EXTENDED_HEADER: [&str; 16] = [
    "",
    "dirname",
    "startype",
    "name",
    "numflares",
    "derivflares",
    "teff",
    "logg",
    "feh",
    "radius",
    "luminosity",
    "kepmag",
    "jmag",
    "kmag",
    "rotation_frequency",
    "oscillation_strength",
];

#[derive(Serialize)]
struct BasicRecord<'a> {
    #[serde(rename = "")]
    index: usize,
    dirname: &'a str,
    startype: &'a str,
    name: &'a str,
    numflares: usize,
    teff: &'a str,
}

#[derive(Serialize)]
struct ExtendedRecord<'a> {
    #[serde(rename = "")]
    index: usize,
    dirname: &'a str,
    startype: &'a str,
    name: &'a str,
    numflares: usize,
    derivflares: Option<usize>,
    teff: &'a str,
    logg: Option<f64>,
    feh: Option<f64>,
    radius: Option<f64>,
    luminosity: Option<f64>,
    kepmag: Option<f64>,
    jmag: Option<f64>,
    kmag: Option<f64>,
    rotation_frequency: Option<f64>,
    oscillation_strength: Option<f64>,
}

/// Write rows as CSV with a leading unnamed index column.
///
/// With `extended` the derivative, stellar parameter and rotation columns are
/// included; otherwise only the basic flare table is written. An empty
/// table still gets its header line.
pub fn write_summary(path: &Path, rows: &[StarRow], extended: bool) -> DataResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    // Headers come from the first serialized record.
    if rows.is_empty() {
        if extended {
            writer.write_record(EXTENDED_HEADER)?;
        } else {
            writer.write_record(BASIC_HEADER)?;
        }
    }

    for (index, row) in rows.iter().enumerate() {
        if extended {
            writer.serialize(ExtendedRecord {
                index,
                dirname: &row.dirname,
                startype: &row.startype,
                name: &row.name,
                numflares: row.numflares,
                derivflares: row.derivflares,
                teff: &row.teff,
                logg: row.logg,
                feh: row.feh,
                radius: row.radius,
                luminosity: row.luminosity,
                kepmag: row.kepmag,
                jmag: row.jmag,
                kmag: row.kmag,
                rotation_frequency: row.rotation_frequency,
                oscillation_strength: row.oscillation_strength,
            })?;
        } else {
            writer.serialize(BasicRecord {
                index,
                dirname: &row.dirname,
                startype: &row.startype,
                name: &row.name,
                numflares: row.numflares,
                teff: &row.teff,
            })?;
        }
    }

    writer.flush().map_err(|e| DataError::io(path, e))?;
    Ok(())
}
