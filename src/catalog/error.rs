use thiserror::Error;

/// Errors raised by a codelist catalog source. All variants are fatal to
/// the run; the core never retries.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The organisation identifier is not in the known set. Raised before
    /// any I/O happens.
    #[error("unknown organisation '{0}'")]
    UnknownOrganisation(String),

    /// The catalog endpoint answered with a non-success status.
    #[error("catalog request to {url} returned status {status}")]
    Status { status: u16, url: String },

    /// The request failed in transit or the payload could not be decoded.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
