//! Bundle source.
//!
//! Bundles arrive as a flat CSV table with at least `bundle_id` and
//! `bundle_name` columns. Extra columns are ignored; fields are trimmed.

mod error;


use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use error::BundleError;

/// One bundle to be matched: an identifier plus the display name that is
/// also its scored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleRecord {
    pub bundle_id: String,
    pub bundle_name: String,
}

impl BundleRecord {
    pub fn new(bundle_id: impl Into<String>, bundle_name: impl Into<String>) -> Self {
        Self {
            bundle_id: bundle_id.into(),
            bundle_name: bundle_name.into(),
        }
    }
}

/// Loads bundles from a CSV file.
pub fn load_bundles(path: &Path) -> Result<Vec<BundleRecord>, BundleError> {
    let file = File::open(path).map_err(|source| BundleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let bundles = read_bundles(file)?;
    info!(path = %path.display(), bundles = bundles.len(), "Bundle file loaded");
    Ok(bundles)
}

/// Reads bundles from any CSV reader.
pub fn read_bundles<R: Read>(reader: R) -> Result<Vec<BundleRecord>, BundleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut bundles = Vec::new();
    for record in csv_reader.deserialize() {
        let bundle: BundleRecord = record?;
        bundles.push(bundle);
    }
    Ok(bundles)
}
