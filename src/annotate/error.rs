use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an annotator lexicon.
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// The lexicon file could not be read.
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The lexicon file is not valid JSON or has the wrong shape.
    #[error("failed to parse lexicon {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An entry's embedding does not match the lexicon's declared dimension.
    #[error("embedding for '{form}' has {actual} dimensions, lexicon declares {expected}")]
    DimensionMismatch {
        form: String,
        expected: usize,
        actual: usize,
    },

    /// The lexicon declares a zero embedding dimension.
    #[error("lexicon declares a zero embedding dimension")]
    ZeroDimension,
}
