use thiserror::Error;

/// Errors raised while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize report as CSV: {0}")]
    Csv(#[from] csv::Error),
}
