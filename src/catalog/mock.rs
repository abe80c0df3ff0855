use std::collections::HashMap;

use async_trait::async_trait;

use super::CatalogSource;
use super::error::CatalogError;
use super::types::Codelist;

/// Catalog source returning canned codelists per organisation.
#[derive(Debug, Default)]
pub struct MockCatalogSource {
    catalogs: HashMap<String, Vec<Codelist>>,
}

impl MockCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the catalog returned for `organisation`.
    pub fn with_organisation(
        mut self,
        organisation: impl Into<String>,
        codelists: Vec<Codelist>,
    ) -> Self {
        self.catalogs.insert(organisation.into(), codelists);
        self
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_codelists(&self, organisation: &str) -> Result<Vec<Codelist>, CatalogError> {
        self.catalogs
            .get(organisation)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownOrganisation(organisation.to_string()))
    }
}
