//! Result sink.
//!
//! Serializes the flat [`ResultRow`] table for downstream consumers:
//! a JSON report wrapping the rows with run metadata, or a plain CSV table
//! (absent scores/ranks render as empty cells).

mod error;

#[cfg(test)]
mod tests;

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::ResultRow;

pub use error::ReportError;

/// The result table plus run metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Organisation whose catalog was matched against.
    pub organisation: String,
    /// Number of bundles in the run.
    pub bundle_count: usize,
    /// Number of codelists in the catalog.
    pub codelist_count: usize,
    /// The flat result table, bundle input order preserved.
    pub results: Vec<ResultRow>,
}

impl MatchReport {
    /// Wraps `results` with metadata, stamped now.
    pub fn new(
        organisation: impl Into<String>,
        bundle_count: usize,
        codelist_count: usize,
        results: Vec<ResultRow>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            organisation: organisation.into(),
            bundle_count,
            codelist_count,
            results,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Writes the flat row table as CSV with a header row. `None` scores and
/// ranks become empty cells.
pub fn write_csv<W: Write>(rows: &[ResultRow], writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
