//! Codelist catalog source.
//!
//! The engine consumes codelists through the [`CatalogSource`] trait;
//! [`OpenCodelistsClient`] is the production implementation against the
//! OpenCodelists API. Catalog failures are fatal to the run: unknown
//! organisations are rejected before any I/O, and transport failures
//! propagate unmodified with no retry.

/// OpenCodelists HTTP client and the known-organisation sets.
pub mod client;
mod error;
/// Codelist and API payload types.
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


use async_trait::async_trait;

pub use client::{AUTOMATED_UPLOAD_ORGS, DEFAULT_BASE_URL, ORGANISATIONS, OpenCodelistsClient};
pub use error::CatalogError;
pub use types::Codelist;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockCatalogSource;

/// Source of codelist catalogs, keyed by organisation identifier.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches every codelist published by `organisation`.
    ///
    /// Fails with [`CatalogError::UnknownOrganisation`] for identifiers
    /// outside the known set, and with a distinct transport/status error
    /// when the fetch itself fails.
    async fn fetch_codelists(&self, organisation: &str) -> Result<Vec<Codelist>, CatalogError>;
}
