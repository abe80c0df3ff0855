use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the bundle table.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The bundle file could not be opened or read.
    #[error("failed to read bundle file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed (missing column, malformed CSV).
    #[error("failed to parse bundle row: {0}")]
    Parse(#[from] csv::Error),
}
