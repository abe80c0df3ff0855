//! Codematch library crate (used by the CLI binary and integration tests).
//!
//! Ranks bundles (named groups to be classified) against a catalog of
//! codelists using two independent similarity signals: lexical overlap of
//! lemmatized, POS-filtered tokens and cosine similarity of mean
//! word-embedding vectors.
//!
//! # Public API Surface
//!
//! ## Core Engine
//! - [`MatchEngine`] - per-bundle annotate → score → rank → merge pipeline
//! - [`ResultRow`] - one row of the flat result table
//! - [`LemmaSet`], [`DocumentVector`], [`DocumentProfile`] - derived
//!   per-document data
//!
//! ## Annotation
//! - [`Annotator`] - injected text-annotation capability
//! - [`LexiconAnnotator`], [`LexiconConfig`] - lexicon-backed production
//!   annotator (with stub mode)
//! - [`AnnotatedToken`], [`PosTag`] - token model
//!
//! ## Collaborators
//! - [`CatalogSource`], [`OpenCodelistsClient`] - codelist catalog fetch
//! - [`load_bundles`] - CSV bundle source
//! - [`MatchReport`] - JSON/CSV result sink
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `CODEMATCH_*` environment configuration
//! - Matching constants live in [`constants`]
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod annotate;
pub mod bundles;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod matching;
pub mod report;

pub use annotate::{
    AnnotateError, AnnotatedToken, Annotator, Lexicon, LexiconAnnotator, LexiconConfig,
    LexiconEntry, PosTag,
};
#[cfg(any(test, feature = "mock"))]
pub use annotate::MockAnnotator;

pub use bundles::{BundleError, BundleRecord, load_bundles, read_bundles};

pub use catalog::{
    AUTOMATED_UPLOAD_ORGS, CatalogError, CatalogSource, Codelist, DEFAULT_BASE_URL, ORGANISATIONS,
    OpenCodelistsClient,
};
#[cfg(any(test, feature = "mock"))]
pub use catalog::MockCatalogSource;

pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_TOP_N, NO_MATCH_NAME};

pub use matching::{
    DocumentProfile, DocumentVector, LemmaKey, LemmaOverlap, LemmaSet, MatchEngine, PairScores,
    RankedCandidate, ResultRow, competition_ranks, competition_ranks_partial, cosine_score,
    cosine_similarity, jaccard_score, lemma_set, mean_vector, score_pair,
};

pub use report::{MatchReport, ReportError, write_csv};
