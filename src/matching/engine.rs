//! The match engine: annotate → score → rank → merge.

use std::cmp::Ordering;

use tracing::{debug, info};

use crate::annotate::Annotator;
use crate::bundles::BundleRecord;
use crate::catalog::Codelist;
use crate::constants::DEFAULT_TOP_N;

use super::lemma::lemma_set;
use super::rank::{competition_ranks, competition_ranks_partial};
use super::scorer::{PairScores, score_pair};
use super::types::{DocumentProfile, ResultRow};
use super::vector::mean_vector;

/// One codelist with its scores and ranks against a particular bundle.
///
/// Carries the codelist itself rather than a position into some shared
/// array, so scores and ranks can never drift out of alignment with the
/// candidate they describe.
#[derive(Debug, Clone)]
pub struct RankedCandidate<'a> {
    pub codelist: &'a Codelist,
    pub jaccard_score: f32,
    pub jaccard_rank: u32,
    pub cosine_score: Option<f32>,
    pub cosine_rank: Option<u32>,
}

impl RankedCandidate<'_> {
    /// `true` when the candidate places in the top `top_n` of either axis.
    ///
    /// The lexical axis additionally requires a nonzero score: when every
    /// lexical score for a bundle is 0.0 (e.g. an empty bundle lemma set),
    /// nothing qualifies by that axis. An undefined cosine rank never
    /// qualifies by the semantic axis.
    pub fn qualifies(&self, top_n: usize) -> bool {
        let lexical = self.jaccard_score > 0.0 && self.jaccard_rank as usize <= top_n;
        let semantic = self
            .cosine_rank
            .is_some_and(|rank| rank as usize <= top_n);
        lexical || semantic
    }
}

/// Scores and ranks bundles against a codelist catalog.
///
/// A single synchronous batch: one annotator pass per document, then all
/// pairwise scores, then per-bundle ranking and shortlist merging. The
/// engine is total over well-typed inputs: degenerate documents produce
/// defined scores (0.0 / undefined), never errors.
pub struct MatchEngine<A> {
    annotator: A,
    top_n: usize,
}

impl<A: Annotator> MatchEngine<A> {
    /// Engine with the default shortlist size.
    pub fn new(annotator: A) -> Self {
        Self::with_top_n(annotator, DEFAULT_TOP_N)
    }

    /// Engine with an explicit shortlist size per ranking axis.
    pub fn with_top_n(annotator: A, top_n: usize) -> Self {
        Self { annotator, top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn annotator(&self) -> &A {
        &self.annotator
    }

    /// Derives a document's profile: one annotator pass over the
    /// lower-cased text, fanned out into the lemma set and the mean vector.
    ///
    /// Lower-casing happens here, once, so both signal paths see the same
    /// casing policy.
    pub fn profile(&self, text: &str) -> DocumentProfile {
        let lowered = text.to_lowercase();
        let tokens = self.annotator.annotate(&lowered);
        DocumentProfile {
            lemmas: lemma_set(&tokens),
            vector: mean_vector(&tokens),
        }
    }

    /// Runs the full match: every bundle against every codelist.
    ///
    /// Returns the flat result table, bundle input order preserved, each
    /// bundle contributing its shortlist rows (or one sentinel row).
    pub fn run(&self, bundles: &[BundleRecord], codelists: &[Codelist]) -> Vec<ResultRow> {
        info!(
            bundles = bundles.len(),
            codelists = codelists.len(),
            top_n = self.top_n,
            "Starting match run"
        );

        let codelist_profiles: Vec<DocumentProfile> = codelists
            .iter()
            .map(|codelist| self.profile(&codelist.scored_text()))
            .collect();

        let mut rows = Vec::with_capacity(bundles.len());
        for bundle in bundles {
            let profile = self.profile(&bundle.bundle_name);
            let candidates = self.rank_candidates(&profile, codelists, &codelist_profiles);
            rows.extend(self.shortlist(bundle, candidates));
        }

        info!(rows = rows.len(), "Match run complete");
        rows
    }

    /// Scores one bundle profile against every codelist and ranks both
    /// axes independently.
    pub fn rank_candidates<'a>(
        &self,
        bundle_profile: &DocumentProfile,
        codelists: &'a [Codelist],
        codelist_profiles: &[DocumentProfile],
    ) -> Vec<RankedCandidate<'a>> {
        let scores: Vec<PairScores> = codelist_profiles
            .iter()
            .map(|codelist_profile| score_pair(bundle_profile, codelist_profile))
            .collect();

        let jaccard_ranks =
            competition_ranks(&scores.iter().map(|s| s.jaccard).collect::<Vec<_>>());
        let cosine_ranks =
            competition_ranks_partial(&scores.iter().map(|s| s.cosine).collect::<Vec<_>>());

        codelists
            .iter()
            .zip(scores)
            .zip(jaccard_ranks.into_iter().zip(cosine_ranks))
            .map(
                |((codelist, pair), (jaccard_rank, cosine_rank))| RankedCandidate {
                    codelist,
                    jaccard_score: pair.jaccard,
                    jaccard_rank,
                    cosine_score: pair.cosine,
                    cosine_rank,
                },
            )
            .collect()
    }

    /// Selects the union of top-N candidates by either axis and emits the
    /// bundle's result rows, sorted by jaccard score descending with
    /// codelist name as the tie key. An empty shortlist yields exactly one
    /// sentinel row.
    fn shortlist(&self, bundle: &BundleRecord, candidates: Vec<RankedCandidate<'_>>) -> Vec<ResultRow> {
        let mut selected: Vec<RankedCandidate<'_>> = candidates
            .into_iter()
            .filter(|candidate| candidate.qualifies(self.top_n))
            .collect();

        debug!(
            bundle_id = %bundle.bundle_id,
            shortlisted = selected.len(),
            "Shortlist assembled"
        );

        if selected.is_empty() {
            return vec![ResultRow::no_match(bundle)];
        }

        selected.sort_by(|a, b| {
            b.jaccard_score
                .partial_cmp(&a.jaccard_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.codelist.name.cmp(&b.codelist.name))
        });

        selected
            .into_iter()
            .map(|candidate| {
                ResultRow::matched(
                    bundle,
                    candidate.codelist,
                    candidate.jaccard_score,
                    candidate.jaccard_rank,
                    candidate.cosine_score,
                    candidate.cosine_rank,
                )
            })
            .collect()
    }
}
