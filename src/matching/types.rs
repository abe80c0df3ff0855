use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::annotate::PosTag;
use crate::bundles::BundleRecord;
use crate::catalog::Codelist;
use crate::constants::NO_MATCH_NAME;

/// A (lemma, POS) pair used as the unit of lexical overlap.
///
/// A dedicated record rather than a bare tuple so POS-aware filtering stays
/// explicit at the type level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LemmaKey {
    /// Canonical dictionary form.
    pub lemma: String,
    /// Part-of-speech tag the form was observed with.
    pub pos: PosTag,
}

impl LemmaKey {
    pub fn new(lemma: impl Into<String>, pos: PosTag) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
        }
    }
}

/// Overlap between two [`LemmaSet`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LemmaOverlap {
    /// Number of shared (lemma, POS) pairs.
    pub shared: usize,
    /// `true` when at least one shared pair has a key POS (NOUN/PROPN).
    pub has_key_pos: bool,
}

/// Set of unique (lemma, POS) pairs for one document, filtered to the
/// content POS whitelist. Duplicates collapse (set semantics).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LemmaSet(HashSet<LemmaKey>);

impl LemmaSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: LemmaKey) -> bool {
        self.0.insert(key)
    }

    pub fn contains(&self, key: &LemmaKey) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LemmaKey> {
        self.0.iter()
    }

    /// Computes the intersection size and whether it contains a key-POS
    /// pair, in one pass.
    pub fn overlap(&self, other: &LemmaSet) -> LemmaOverlap {
        let mut shared = 0;
        let mut has_key_pos = false;
        for key in &self.0 {
            if other.contains(key) {
                shared += 1;
                has_key_pos |= key.pos.is_key();
            }
        }
        LemmaOverlap {
            shared,
            has_key_pos,
        }
    }
}

impl FromIterator<LemmaKey> for LemmaSet {
    fn from_iter<I: IntoIterator<Item = LemmaKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Mean embedding vector of a document's qualifying tokens.
///
/// Always the result of averaging at least one embedding; a document with
/// no qualifying token has *no* `DocumentVector` (never a zero vector).
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentVector(Vec<f32>);

impl DocumentVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything the pairwise scorer needs about one document, derived once
/// from a single annotator pass.
#[derive(Debug, Clone, Default)]
pub struct DocumentProfile {
    /// Content-POS (lemma, POS) pairs.
    pub lemmas: LemmaSet,
    /// Mean content-token embedding, absent when no token qualifies.
    pub vector: Option<DocumentVector>,
}

/// One row of the flat result table: a qualifying (bundle, codelist) pair,
/// or the sentinel "no match" row for a bundle with an empty shortlist.
///
/// Score/rank fields are `None` on the sentinel row; `cosine_score` and
/// `cosine_rank` are additionally `None` whenever the semantic score is
/// undefined for the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub bundle_id: String,
    pub bundle_name: String,
    pub codelist_name: String,
    pub codelist_url: String,
    pub jaccard_score: Option<f32>,
    pub jaccard_rank: Option<u32>,
    pub cosine_score: Option<f32>,
    pub cosine_rank: Option<u32>,
}

impl ResultRow {
    /// Row for a codelist that qualified for the bundle's shortlist.
    pub fn matched(
        bundle: &BundleRecord,
        codelist: &Codelist,
        jaccard_score: f32,
        jaccard_rank: u32,
        cosine_score: Option<f32>,
        cosine_rank: Option<u32>,
    ) -> Self {
        Self {
            bundle_id: bundle.bundle_id.clone(),
            bundle_name: bundle.bundle_name.clone(),
            codelist_name: codelist.name.clone(),
            codelist_url: codelist.url.clone(),
            jaccard_score: Some(jaccard_score),
            jaccard_rank: Some(jaccard_rank),
            cosine_score,
            cosine_rank,
        }
    }

    /// Sentinel row emitted when no codelist qualifies for a bundle.
    pub fn no_match(bundle: &BundleRecord) -> Self {
        Self {
            bundle_id: bundle.bundle_id.clone(),
            bundle_name: bundle.bundle_name.clone(),
            codelist_name: NO_MATCH_NAME.to_string(),
            codelist_url: String::new(),
            jaccard_score: None,
            jaccard_rank: None,
            cosine_score: None,
            cosine_rank: None,
        }
    }

    /// Returns `true` for the sentinel "no match" row.
    pub fn is_no_match(&self) -> bool {
        self.jaccard_score.is_none()
    }
}
