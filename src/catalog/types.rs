use serde::{Deserialize, Serialize};

use crate::constants::FIELD_SEPARATOR;

/// One catalog entry: a reference concept bundles are matched against.
///
/// Immutable once fetched. Methodology and description are present only for
/// organisations whose catalog carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Codelist {
    /// Display name.
    pub name: String,
    /// Canonical URL.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Codelist {
    /// Codelist with a name and URL only.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            methodology: None,
            description: None,
        }
    }

    pub fn with_methodology(mut self, methodology: impl Into<String>) -> Self {
        self.methodology = Some(methodology.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The single document both similarity signals score: name, methodology
    /// and description joined, skipping absent or empty fields.
    pub fn scored_text(&self) -> String {
        let fields = [
            Some(self.name.as_str()),
            self.methodology.as_deref(),
            self.description.as_deref(),
        ];

        fields
            .into_iter()
            .flatten()
            .filter(|field| !field.is_empty())
            .collect::<Vec<_>>()
            .join(FIELD_SEPARATOR)
    }
}

/// Payload shape of the codelist index endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct CodelistIndex {
    pub codelists: Vec<CodelistIndexEntry>,
}

/// One entry of the codelist index payload.
#[derive(Debug, Deserialize)]
pub(crate) struct CodelistIndexEntry {
    pub name: String,
    pub full_slug: String,
    #[serde(default)]
    pub methodology: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
