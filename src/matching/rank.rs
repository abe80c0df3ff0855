//! Competition ranking.
//!
//! Descending, 1-based: the best score gets rank 1, equal scores share a
//! rank, and ranks skip consistently with tie count: scores
//! `[0.5, 0.5, 0.2]` rank `[1, 1, 3]`.

use std::cmp::Ordering;

/// Ranks `scores` descending with competition semantics.
pub fn competition_ranks(scores: &[f32]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0u32; scores.len()];
    let mut current_rank = 1u32;
    for (position, &idx) in order.iter().enumerate() {
        if position > 0 && scores[idx] < scores[order[position - 1]] {
            current_rank = position as u32 + 1;
        }
        ranks[idx] = current_rank;
    }
    ranks
}

/// Ranks partially-defined scores descending with competition semantics.
///
/// Undefined scores are excluded from the comparison entirely and keep rank
/// `None`: the worst rank, tied among themselves, sorting after every
/// defined rank.
pub fn competition_ranks_partial(scores: &[Option<f32>]) -> Vec<Option<u32>> {
    let mut defined: Vec<(usize, f32)> = scores
        .iter()
        .enumerate()
        .filter_map(|(idx, score)| score.map(|value| (idx, value)))
        .collect();
    defined.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut ranks = vec![None; scores.len()];
    let mut current_rank = 1u32;
    for (position, &(idx, value)) in defined.iter().enumerate() {
        if position > 0 && value < defined[position - 1].1 {
            current_rank = position as u32 + 1;
        }
        ranks[idx] = Some(current_rank);
    }
    ranks
}
