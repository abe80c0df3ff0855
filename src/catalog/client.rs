//! OpenCodelists catalog client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info};

use super::CatalogSource;
use super::error::CatalogError;
use super::types::{Codelist, CodelistIndex};

/// Organisations with a published codelist catalog.
pub const ORGANISATIONS: &[&str] = &[
    "ebm-datalab",
    "exeter",
    "lshtm",
    "guest",
    "ardens",
    "opensafely-collaborators",
    "opensafely",
    "qmul-multimorbidity",
    "primis-covid19-vacc-uptake-old",
    "primis-covid19-vacc-uptake",
    "qcovid",
    "nhsd-primary-care-domain-refsets",
    "openprescribing",
    "recovery",
    "pincer",
    "nhsbsa",
    "nhsd",
    "prescqipp",
    "bristol",
    "ons",
    "phc",
    "ukrr",
    "ukhsa",
    "multiply-qmul",
    "nhs-devon",
    "reducehf",
    "ihme",
];

/// Organisations whose catalogs are uploaded automatically and carry no
/// methodology or description text.
pub const AUTOMATED_UPLOAD_ORGS: &[&str] = &[
    "nhsd-primary-care-domain-refsets",
    "primis-covid19-vacc-uptake-old",
    "primis-covid19-vacc-uptake",
];

/// Base URL of the production catalog.
pub const DEFAULT_BASE_URL: &str = "https://www.opencodelists.org";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the OpenCodelists catalog API.
#[derive(Debug, Clone)]
pub struct OpenCodelistsClient {
    http: HttpClient,
    base_url: String,
}

impl OpenCodelistsClient {
    /// Client against the production catalog with the default timeout.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Client against `base_url` with an explicit request timeout.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| HttpClient::new());

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn index_url(&self, organisation: &str) -> String {
        format!("{}/api/v1/codelist/{}/", self.base_url, organisation)
    }

    fn codelist_url(&self, full_slug: &str) -> String {
        format!("{}/codelist/{}", self.base_url, full_slug)
    }
}

impl Default for OpenCodelistsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for OpenCodelistsClient {
    async fn fetch_codelists(&self, organisation: &str) -> Result<Vec<Codelist>, CatalogError> {
        if !ORGANISATIONS.contains(&organisation) {
            return Err(CatalogError::UnknownOrganisation(organisation.to_string()));
        }

        let detailed = !AUTOMATED_UPLOAD_ORGS.contains(&organisation);
        let url = self.index_url(organisation);

        debug!(%url, detailed, "Fetching codelist catalog");

        let mut request = self.http.get(&url);
        if detailed {
            request = request.query(&[("description", "true"), ("methodology", "true")]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let index: CodelistIndex = response.json().await?;

        let codelists: Vec<Codelist> = index
            .codelists
            .into_iter()
            .map(|entry| Codelist {
                name: entry.name,
                url: self.codelist_url(&entry.full_slug),
                methodology: if detailed { entry.methodology } else { None },
                description: if detailed { entry.description } else { None },
            })
            .collect();

        info!(
            organisation,
            codelists = codelists.len(),
            "Catalog fetched"
        );

        Ok(codelists)
    }
}
