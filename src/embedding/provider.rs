//! The embedding provider contract.
//!
//! Providers map an ordered batch of text snippets to fixed-dimension
//! vectors, one row per input. The batch is the unit of work: all
//! candidates of a document are embedded in a single call because the
//! normalization statistics need the complete set at once. An all-zero
//! row signals "unknown/unembeddable" and is filtered together with its
//! candidate before the similarity engine sees either.
//!
//! The selector receives an already-constructed provider handle; there
//! is no process-wide singleton.

use crate::error::{ExtractionError, Result};

/// A source of text embeddings.
///
/// Implementations may wrap a local model, a remote service, or a test
/// fixture; the core only depends on this interface. A provider failure
/// aborts the current document's extraction — retries, if desired,
/// belong to the implementation.
pub trait EmbeddingProvider {
    /// Embed a batch of texts, returning one row per input in input
    /// order. All rows must share the same dimensionality; an all-zero
    /// row marks the input as unknown.
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>>;
}

impl<P: EmbeddingProvider + ?Sized> EmbeddingProvider for &P {
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>> {
        (**self).embed_batch(texts)
    }
}

/// Validate the shape of a provider batch: one row per input, uniform
/// dimensionality. Violations are provider failures, not caller errors.
pub(crate) fn check_batch(inputs: usize, rows: &[Vec<f64>]) -> Result<()> {
    if rows.len() != inputs {
        return Err(ExtractionError::Provider(format!(
            "expected {inputs} embedding rows, got {}",
            rows.len()
        )));
    }
    if let Some(first) = rows.first() {
        let dim = first.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(ExtractionError::Provider(format!(
                    "embedding row {i} has dimension {}, expected {dim}",
                    row.len()
                )));
            }
        }
    }
    Ok(())
}

/// Drop candidates whose embedding row is all zeros ("unknown"),
/// keeping the remaining candidates and rows aligned and in order.
pub fn filter_unknown(
    candidates: Vec<String>,
    embeddings: Vec<Vec<f64>>,
) -> (Vec<String>, Vec<Vec<f64>>) {
    let mut kept_candidates = Vec::with_capacity(candidates.len());
    let mut kept_embeddings = Vec::with_capacity(embeddings.len());
    for (candidate, row) in candidates.into_iter().zip(embeddings) {
        if row.iter().any(|&v| v != 0.0) {
            kept_candidates.push(candidate);
            kept_embeddings.push(row);
        }
    }
    (kept_candidates, kept_embeddings)
}
