//! Reading light curve CSV files.
//!
//! Files have a single header line followed by `time,flux,error` rows. Header
//! names are not interpreted; columns are taken by position.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::{DataError, DataResult};
use crate::core::LightCurve;

const COLUMNS: [&str; 3] = ["time", "flux", "error"];

/// Read and validate a light curve from a CSV file.
pub fn read_light_curve(path: &Path) -> DataResult<LightCurve> {
    let file = File::open(path).map_err(|e| DataError::io(path, e))?;
    parse_light_curve(file, path)
}

/// Parse a light curve from any reader. `path` is only used in errors.
pub fn parse_light_curve<R: Read>(reader: R, path: &Path) -> DataResult<LightCurve> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut time = Vec::new();
    let mut flux = Vec::new();
    let mut error = Vec::new();

    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        // Header is row 1.
        let row = i + 2;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let [t, f, e] = parse_row(&record).map_err(|reason| DataError::MalformedRow {
            path: path.to_path_buf(),
            row,
            reason,
        })?;
        time.push(t);
        flux.push(f);
        error.push(e);
    }

    LightCurve::new(time, flux, error).map_err(|e| DataError::analysis(path, e))
}

fn parse_row(record: &StringRecord) -> Result<[f64; 3], String> {
    if record.len() < COLUMNS.len() {
        return Err(format!(
            "expected {} columns, got {}",
            COLUMNS.len(),
            record.len()
        ));
    }

    let mut values = [0.0; 3];
    for (slot, (name, field)) in values.iter_mut().zip(COLUMNS.iter().zip(record.iter())) {
        *slot = field
            .parse::<f64>()
            .map_err(|_| format!("{} value {:?} is not a number", name, field))?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlareError;

    fn parse(text: &str) -> DataResult<LightCurve> {
        parse_light_curve(text.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn parses_positional_columns() {
        let lc = parse("t,f,e\n0.0,10.0,0.5\n0.02, 11.0 ,0.5\n0.04,9.5,0.4\n").unwrap();
        assert_eq!(lc.time(), &[0.0, 0.02, 0.04]);
        assert_eq!(lc.flux(), &[10.0, 11.0, 9.5]);
        assert_eq!(lc.error(), &[0.5, 0.5, 0.4]);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let lc = parse("a,b,c,d\n0,1,2,3\n1,4,5,6\n").unwrap();
        assert_eq!(lc.flux(), &[1.0, 4.0]);
    }

    #[test]
    fn short_row_is_malformed() {
        let err = parse("t,f,e\n0,1,2\n1,2\n").unwrap_err();
        match err {
            DataError::MalformedRow { row, .. } => assert_eq!(row, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_field_is_malformed() {
        let err = parse("t,f,e\n0,abc,2\n1,2,3\n").unwrap_err();
        assert!(err.to_string().contains("flux value \"abc\""));
    }

    #[test]
    fn too_few_samples_is_rejected() {
        let err = parse("t,f,e\n0,1,2\n").unwrap_err();
        assert!(matches!(
            err,
            DataError::Analysis {
                source: FlareError::InvalidSeries(_),
                ..
            }
        ));
    }

    #[test]
    fn nan_values_are_kept() {
        let lc = parse("t,f,e\n0,NaN,1\n1,2,1\n").unwrap();
        assert!(lc.flux()[0].is_nan());
    }
}
