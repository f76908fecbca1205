//! File formats around the analyses.
//!
//! Everything that touches the filesystem lives here: `.dat` conversion,
//! light curve CSV parsing, per-star `.info` metadata, the star selection
//! list and the summary table. The detectors never see a path.

pub mod dat;
pub mod light_curve;
pub mod metadata;
pub mod star_list;
pub mod summary;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::FlareError;

pub use dat::{convert_dat_file, convert_dat_text, convert_tree};
pub use light_curve::{parse_light_curve, read_light_curve};
pub use metadata::{info_path_for, parse_star_info, read_star_info, StarInfo};
pub use star_list::{read_star_list, StarList};
pub use summary::{write_summary, StarRow};

/// Result type alias for file operations.
pub type DataResult<T> = std::result::Result<T, DataError>;

/// Errors raised while reading or writing data files.
#[derive(Error, Debug)]
pub enum DataError {
    /// Filesystem error with the offending path.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV reader or writer error.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A light curve row could not be parsed.
    #[error("{}: row {row}: {reason}", path.display())]
    MalformedRow {
        path: PathBuf,
        row: usize,
        reason: String,
    },

    /// A metadata or list file does not have the expected layout.
    #[error("{}: {reason}", path.display())]
    MalformedMetadata { path: PathBuf, reason: String },

    /// The parsed series was rejected by the analyses.
    #[error("{}: {source}", path.display())]
    Analysis {
        path: PathBuf,
        #[source]
        source: FlareError,
    },
}

impl DataError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn analysis(path: &Path, source: FlareError) -> Self {
        Self::Analysis {
            path: path.to_path_buf(),
            source,
        }
    }
}
