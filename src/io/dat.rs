//! Conversion of whitespace-delimited `.dat` light curves to `.csv`.
//!
//! The header line is copied unchanged. Every following line is trimmed and
//! each run of whitespace becomes a single comma.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{DataError, DataResult};

/// Convert the text of a `.dat` file to CSV.
pub fn convert_dat_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut lines = text.split_inclusive('\n');

    if let Some(header) = lines.next() {
        output.push_str(header);
    }

    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        output.push_str(&fields.join(","));
        output.push('\n');
    }

    output
}

/// Convert one `.dat` file, writing `<stem>.csv` next to it.
pub fn convert_dat_file(path: &Path) -> DataResult<PathBuf> {
    let text = fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
    let out_path = path.with_extension("csv");
    fs::write(&out_path, convert_dat_text(&text)).map_err(|e| DataError::io(&out_path, e))?;
    debug!("converted {} -> {}", path.display(), out_path.display());
    Ok(out_path)
}

/// Convert every `.dat` file below `root`, returning the written paths.
pub fn convert_tree(root: &Path) -> DataResult<Vec<PathBuf>> {
    let mut dat_files = Vec::new();
    collect_with_extension(root, "dat", &mut dat_files)?;
    dat_files.sort();

    let written = dat_files
        .iter()
        .map(|path| convert_dat_file(path))
        .collect::<DataResult<Vec<_>>>()?;

    info!("converted {} .dat files under {}", written.len(), root.display());
    Ok(written)
}

/// Recursively collect files under `dir` whose extension matches (case-insensitive).
pub(crate) fn collect_with_extension(
    dir: &Path,
    extension: &str,
    out: &mut Vec<PathBuf>,
) -> DataResult<()> {
    let read_dir = fs::read_dir(dir).map_err(|e| DataError::io(dir, e))?;

    for entry in read_dir {
        let entry = entry.map_err(|e| DataError::io(dir, e))?;
        let path = entry.path();

        if path.is_dir() {
            collect_with_extension(&path, extension, out)?;
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        {
            out.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_kept_verbatim() {
        let text = "# time   flux  error\n 1.0   2.0\t3.0 \n4.0 5.0 6.0\n";
        let csv = convert_dat_text(text);
        assert_eq!(csv, "# time   flux  error\n1.0,2.0,3.0\n4.0,5.0,6.0\n");
    }

    #[test]
    fn missing_trailing_newline_is_added() {
        assert_eq!(convert_dat_text("h\n1 2 3"), "h\n1,2,3\n");
    }

    #[test]
    fn blank_lines_stay_blank() {
        assert_eq!(convert_dat_text("h\n\n1 2\n"), "h\n\n1,2\n");
    }

    #[test]
    fn empty_input() {
        assert_eq!(convert_dat_text(""), "");
    }

    #[test]
    fn convert_tree_writes_csv_beside_dat() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("C4").join("COOL");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("201.dat"), "time flux err\n0.0  1.0 0.1\n").unwrap();
        fs::write(nested.join("notes.txt"), "ignore me").unwrap();

        let written = convert_tree(dir.path()).unwrap();
        assert_eq!(written, vec![nested.join("201.csv")]);
        let csv = fs::read_to_string(nested.join("201.csv")).unwrap();
        assert_eq!(csv, "time flux err\n0.0,1.0,0.1\n");
    }
}
