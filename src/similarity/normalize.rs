//! Score normalization for MMR selection.
//!
//! Raw document-relevance and inter-candidate similarities live on
//! different scales; before they can be linearly combined they are made
//! comparable: scale by the maximum, then re-center to a z-score and add
//! a 0.5 offset. Document similarities use global statistics, the
//! pairwise matrix uses per-column statistics with the masked diagonal
//! excluded throughout.
//!
//! Normalized values feed *selection only*; relevance reporting reads
//! the raw similarities (see [`crate::mmr::postprocess`]).

use crate::error::{ExtractionError, Result};
use crate::similarity::matrix::SimilarityMatrix;

/// Offset added after re-centering so typical scores stay positive.
const CENTER_OFFSET: f64 = 0.5;

/// Normalize the document-similarity vector with global statistics.
///
/// A zero maximum makes max-scaling undefined and is reported as
/// [`ExtractionError::DegenerateStatistics`]. A zero standard deviation
/// (all values identical) collapses every entry to the 0.5 offset.
pub fn normalize_doc(doc_sim: &[f64]) -> Result<Vec<f64>> {
    let max = doc_sim.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == 0.0 {
        return Err(ExtractionError::DegenerateStatistics(
            "zero maximum in document similarities".to_string(),
        ));
    }
    let scaled: Vec<f64> = doc_sim.iter().map(|v| v / max).collect();
    let (mean, std) = mean_std(scaled.iter().copied());
    if std == 0.0 {
        return Ok(vec![CENTER_OFFSET; scaled.len()]);
    }
    Ok(scaled
        .iter()
        .map(|v| CENTER_OFFSET + (v - mean) / std)
        .collect())
}

/// Normalize the pairwise matrix column by column, returning a dense
/// row-major working copy for selection scoring.
///
/// Diagonal entries neither contribute to the column statistics nor are
/// written with a meaningful value (they stay 0.0 and are never read by
/// the selector, which only scores unselected-vs-selected pairs).
pub fn normalize_between(matrix: &SimilarityMatrix) -> Result<Vec<f64>> {
    let n = matrix.len();
    let mut out = vec![0.0; n * n];
    if n < 2 {
        // No off-diagonal entries exist.
        return Ok(out);
    }
    for j in 0..n {
        let max = matrix.column(j).fold(f64::NEG_INFINITY, f64::max);
        if max == 0.0 {
            return Err(ExtractionError::DegenerateStatistics(format!(
                "zero maximum in similarity column {j}"
            )));
        }
        let (mean, std) = mean_std(matrix.column(j).map(|v| v / max));
        for i in 0..n {
            let Some(sim) = matrix.get(i, j) else {
                continue;
            };
            let scaled = sim / max;
            out[i * n + j] = if std == 0.0 {
                CENTER_OFFSET
            } else {
                CENTER_OFFSET + (scaled - mean) / std
            };
        }
    }
    Ok(out)
}

/// Mean and population standard deviation (matching numpy's default).
fn mean_std(values: impl Iterator<Item = f64> + Clone) -> (f64, f64) {
    let count = values.clone().count();
    if count == 0 {
        return (0.0, 0.0);
    }
    let mean = values.clone().sum::<f64>() / count as f64;
    let variance = values.map(|v| (v - mean) * (v - mean)).sum::<f64>() / count as f64;
    (mean, variance.sqrt())
}
