use std::path::PathBuf;
use thiserror::Error;

/// Why a single data row could not become a pet record.
///
/// The loader recovers from all of these by skipping the row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Unknown pet type: {0}")]
    UnknownSpecies(String),

    #[error("Malformed {field}: '{value}'")]
    MalformedField { field: &'static str, value: String },

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// The row itself could not be decoded, e.g. invalid UTF-8
    #[error("Unreadable row: {0}")]
    Unreadable(String),
}

/// Errors that stop the whole load.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not find the pet database file ({})", .0.display())]
    DataSourceMissing(PathBuf),

    #[error("Failed to read pet database at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse pet database at {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Pet database at {} has no header row", .0.display())]
    EmptySource(PathBuf),
}
