//! Relevance scoring and alias grouping for the selected set.
//!
//! Both computations read the *raw* similarities, not the normalized
//! working copies used during selection. The asymmetry is intentional:
//! normalization makes relevance and diversity comparable for the greedy
//! combination, but reported relevance is a property of the raw document
//! similarity within the selected subset.

use std::cmp::Ordering;

use crate::error::{ExtractionError, Result};
use crate::similarity::matrix::SimilarityMatrix;

/// Max-normalized relevance for the selected candidates, in selection
/// order: each raw document similarity divided by the maximum over the
/// selected set, so the most document-similar selection scores 1.0.
pub(crate) fn relevance_scores(doc_sim: &[f64], selected: &[usize]) -> Result<Vec<f64>> {
    let max = selected
        .iter()
        .map(|&i| doc_sim[i])
        .fold(f64::NEG_INFINITY, f64::max);
    if max == 0.0 {
        return Err(ExtractionError::DegenerateStatistics(
            "zero maximum document similarity in the selected set".to_string(),
        ));
    }
    Ok(selected.iter().map(|&i| doc_sim[i] / max).collect())
}

/// Alias groups for the selected candidates, in selection order.
///
/// For each selected candidate, every *other* candidate (selected or
/// not) is sorted by descending raw similarity, ties broken by ascending
/// index; the group is the prefix of that ordering with similarity at or
/// above `threshold`. The candidate itself is excluded structurally via
/// the matrix's masked diagonal, so no alias list contains its own
/// keyphrase.
pub(crate) fn alias_groups(
    matrix: &SimilarityMatrix,
    candidates: &[String],
    selected: &[usize],
    threshold: f64,
) -> Vec<Vec<String>> {
    selected
        .iter()
        .map(|&s| {
            let mut sims: Vec<(usize, f64)> = matrix.row(s).collect();
            sims.sort_by(|a, b| match b.1.total_cmp(&a.1) {
                Ordering::Equal => a.0.cmp(&b.0),
                other => other,
            });
            sims.into_iter()
                .take_while(|&(_, sim)| sim >= threshold)
                .map(|(i, _)| candidates[i].clone())
                .collect()
        })
        .collect()
}
