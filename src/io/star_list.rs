//! Star selection list.
//!
//! A CSV file with an `mdwarf_star` column naming the stars to analyse.
//! Identifiers are compared as text, so numeric EPIC ids and string names
//! both work.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::{DataError, DataResult};

/// Header of the identifier column.
pub const STAR_COLUMN: &str = "mdwarf_star";

/// Identifiers of the stars selected for analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarList {
    entries: Vec<String>,
}

impl StarList {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Whether any entry contains `name` as a substring.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.contains(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// Read a star list file.
pub fn read_star_list(path: &Path) -> DataResult<StarList> {
    let file = File::open(path).map_err(|e| DataError::io(path, e))?;
    parse_star_list(file, path)
}

/// Parse a star list from any reader. `path` is only used in errors.
pub fn parse_star_list<R: Read>(reader: R, path: &Path) -> DataResult<StarList> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let column = rdr
        .headers()?
        .iter()
        .position(|h| h == STAR_COLUMN)
        .ok_or_else(|| DataError::MalformedMetadata {
            path: path.to_path_buf(),
            reason: format!("missing {:?} column", STAR_COLUMN),
        })?;

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(value) = record.get(column).filter(|v| !v.is_empty()) {
            entries.push(value.to_string());
        }
    }

    Ok(StarList::new(entries))
}
