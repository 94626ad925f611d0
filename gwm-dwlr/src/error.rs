use std::path::PathBuf;
use thiserror::Error;

/// Errors that can halt a dataset load or reject a selection.
///
/// Row-level validation failures never show up here; invalid rows are
/// dropped by the parser.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Default dataset unreachable, bad status, or a body that is not text.
    #[error("Error loading data: {0}")]
    Fetch(String),

    /// Delimited text that could not be read at all.
    #[error("Error parsing CSV: {0}")]
    Parse(String),

    /// No row survived validation.
    #[error("No data available")]
    EmptyDataset,

    /// Uploaded file could not be read.
    #[error("Failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown station '{0}'")]
    UnknownStation(String),
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        DashboardError::Parse(err.to_string())
    }
}
