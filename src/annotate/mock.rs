use std::collections::HashMap;

use super::Annotator;
use super::types::AnnotatedToken;

/// Annotator returning canned token sequences keyed by exact input text.
///
/// Texts without a registered sequence annotate to an empty sequence.
#[derive(Debug, Default)]
pub struct MockAnnotator {
    documents: HashMap<String, Vec<AnnotatedToken>>,
}

impl MockAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the token sequence returned for `text`.
    pub fn with_document(mut self, text: impl Into<String>, tokens: Vec<AnnotatedToken>) -> Self {
        self.documents.insert(text.into(), tokens);
        self
    }

    pub fn insert(&mut self, text: impl Into<String>, tokens: Vec<AnnotatedToken>) {
        self.documents.insert(text.into(), tokens);
    }
}

impl Annotator for MockAnnotator {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken> {
        self.documents.get(text).cloned().unwrap_or_default()
    }
}
