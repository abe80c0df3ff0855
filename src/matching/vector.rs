//! Document-vector aggregation and cosine similarity.

use tracing::warn;

use crate::annotate::AnnotatedToken;

use super::types::DocumentVector;

/// Computes the elementwise mean embedding of a document's qualifying
/// tokens: non-whitespace, content-POS, with a defined embedding.
///
/// Returns `None` when no token qualifies; callers must treat that as a
/// distinct state from a zero vector. Tokens whose embedding dimension
/// disagrees with the first qualifying token violate the annotator contract
/// and are dropped with a warning.
pub fn mean_vector(tokens: &[AnnotatedToken]) -> Option<DocumentVector> {
    let mut sum: Vec<f32> = Vec::new();
    let mut count = 0usize;

    for token in tokens {
        if token.is_whitespace || !token.pos.is_content() {
            continue;
        }
        let Some(embedding) = token.embedding.as_deref() else {
            continue;
        };

        if sum.is_empty() {
            sum = vec![0.0; embedding.len()];
        } else if embedding.len() != sum.len() {
            warn!(
                lemma = %token.lemma,
                expected_dim = sum.len(),
                actual_dim = embedding.len(),
                "Dropping token: embedding dimension mismatch"
            );
            continue;
        }

        for (acc, value) in sum.iter_mut().zip(embedding) {
            *acc += value;
        }
        count += 1;
    }

    if count == 0 {
        return None;
    }

    for value in &mut sum {
        *value /= count as f32;
    }

    Some(DocumentVector::new(sum))
}

/// Cosine similarity of two vectors: dot product over the product of norms.
///
/// Returns `None` when the vectors have different lengths, are empty, or
/// either norm is zero. The score is undefined, not zero, in those cases.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let mut dot_product = 0.0f32;
    let mut norm_a_sq = 0.0f32;
    let mut norm_b_sq = 0.0f32;

    for (&av, &bv) in a.iter().zip(b.iter()) {
        dot_product += av * bv;
        norm_a_sq += av * av;
        norm_b_sq += bv * bv;
    }

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        None
    } else {
        Some(dot_product / (norm_a * norm_b))
    }
}
