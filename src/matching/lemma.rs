//! Lemma-set construction.

use crate::annotate::AnnotatedToken;

use super::types::{LemmaKey, LemmaSet};

/// Builds the [`LemmaSet`] for a document from its annotated tokens.
///
/// Keeps non-whitespace tokens whose POS is in the content whitelist and
/// collapses duplicate (lemma, POS) pairs. Empty input yields an empty set.
pub fn lemma_set(tokens: &[AnnotatedToken]) -> LemmaSet {
    tokens
        .iter()
        .filter(|token| !token.is_whitespace && token.pos.is_content())
        .map(|token| LemmaKey::new(token.lemma.clone(), token.pos))
        .collect()
}
