//! MMR selection
//!
//! Greedy Maximal Marginal Relevance over candidate embeddings: pick the
//! candidate most similar to the document, then repeatedly pick the
//! candidate maximizing `β · doc_sim − (1−β) · max_sim_to_selected` over
//! the normalized similarities, ties broken by lowest original index.
//!
//! The selector is stateless between calls: each [`MmrSelector::select`]
//! processes one document's candidate set to completion, and all
//! similarity matrices are local to that run.

pub mod postprocess;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, Result};
use crate::similarity::matrix::{doc_similarities, SimilarityMatrix};
use crate::similarity::normalize::{normalize_between, normalize_doc};
use crate::types::{ExtractionResult, Keyphrase};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for MMR selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MmrConfig {
    /// Number of keyphrases to select.
    pub top_n: usize,
    /// Tradeoff between relevance (β→1) and diversity (β→0).
    pub beta: f64,
    /// Minimum similarity for a candidate to count as an alias of a
    /// selected keyphrase.
    pub alias_threshold: f64,
}

impl Default for MmrConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            beta: 0.65,
            alias_threshold: 0.8,
        }
    }
}

impl MmrConfig {
    /// Defaults for key-sentence extraction, which weighs diversity
    /// more heavily than phrase extraction.
    pub fn for_sentences() -> Self {
        Self {
            beta: 0.5,
            ..Self::default()
        }
    }

    /// Set the number of keyphrases to select.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the relevance/diversity tradeoff weight.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Set the alias similarity threshold.
    pub fn with_alias_threshold(mut self, threshold: f64) -> Self {
        self.alias_threshold = threshold;
        self
    }

    /// Reject invalid parameters before any computation.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(ExtractionError::InvalidTopN);
        }
        if !(0.0..=1.0).contains(&self.beta) {
            return Err(ExtractionError::InvalidBeta(self.beta));
        }
        if !(0.0..=1.0).contains(&self.alias_threshold) {
            return Err(ExtractionError::InvalidThreshold(self.alias_threshold));
        }
        Ok(())
    }
}

// ============================================================================
// Selector
// ============================================================================

/// MMR-based keyphrase selector.
#[derive(Debug, Clone, Default)]
pub struct MmrSelector {
    config: MmrConfig,
}

impl MmrSelector {
    /// Create a selector with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selector with custom config.
    pub fn with_config(config: MmrConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MmrConfig {
        &self.config
    }

    /// Select up to `top_n` diverse keyphrases from the candidates.
    ///
    /// `candidates` and `embeddings` must be row-aligned and free of
    /// all-zero rows (see [`crate::embedding::filter_unknown`]);
    /// `doc_embedding` must share their dimensionality. An empty
    /// candidate set yields the empty result, not an error.
    ///
    /// With fewer candidates than `top_n` every candidate is returned in
    /// input order and the diversity machinery is skipped entirely.
    pub fn select(
        &self,
        candidates: &[String],
        embeddings: &[Vec<f64>],
        doc_embedding: &[f64],
    ) -> Result<ExtractionResult> {
        self.config.validate()?;

        if candidates.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!("no candidates to select from");
            return Ok(ExtractionResult::empty());
        }
        if embeddings.len() != candidates.len() {
            return Err(ExtractionError::RowCountMismatch {
                candidates: candidates.len(),
                rows: embeddings.len(),
            });
        }
        for row in embeddings {
            if row.len() != doc_embedding.len() {
                return Err(ExtractionError::DimensionMismatch {
                    expected: doc_embedding.len(),
                    got: row.len(),
                });
            }
        }

        let doc_sim = doc_similarities(embeddings, doc_embedding);
        let matrix = SimilarityMatrix::pairwise(embeddings);

        let selected = if self.config.top_n >= candidates.len() {
            // Not enough candidates for a meaningful choice: keep all,
            // in input order.
            (0..candidates.len()).collect()
        } else {
            self.select_greedy(&doc_sim, &matrix)?
        };

        let scores = postprocess::relevance_scores(&doc_sim, &selected)?;
        let aliases = postprocess::alias_groups(
            &matrix,
            candidates,
            &selected,
            self.config.alias_threshold,
        );

        let keyphrases = selected
            .iter()
            .zip(scores)
            .zip(aliases)
            .map(|((&idx, relevance), aliases)| Keyphrase {
                text: candidates[idx].clone(),
                relevance,
                aliases,
            })
            .collect();
        Ok(ExtractionResult { keyphrases })
    }

    /// The greedy loop. Caller guarantees `top_n < n`, hence `n >= 2`.
    fn select_greedy(&self, doc_sim: &[f64], matrix: &SimilarityMatrix) -> Result<Vec<usize>> {
        let n = doc_sim.len();
        let beta = self.config.beta;
        let doc_norm = normalize_doc(doc_sim)?;

        let first = argmax(doc_norm.iter().copied());
        let mut selected = Vec::with_capacity(self.config.top_n);
        selected.push(first);
        let mut unselected: Vec<usize> = (0..n).filter(|&i| i != first).collect();

        if self.config.top_n == 1 {
            return Ok(selected);
        }

        // Only normalized when at least one diversity iteration runs.
        let between_norm = normalize_between(matrix)?;

        while selected.len() < self.config.top_n {
            let mut best_pos = 0;
            let mut best_score = f64::NEG_INFINITY;
            // Ascending index order + strict comparison = lowest-index
            // tie-break.
            for (pos, &i) in unselected.iter().enumerate() {
                let max_to_selected = selected
                    .iter()
                    .map(|&s| between_norm[i * n + s])
                    .fold(f64::NEG_INFINITY, f64::max);
                let score = beta * doc_norm[i] - (1.0 - beta) * max_to_selected;
                if score > best_score {
                    best_score = score;
                    best_pos = pos;
                }
            }
            selected.push(unselected.remove(best_pos));
        }
        Ok(selected)
    }
}

/// Index of the maximum value; first occurrence wins ties.
fn argmax(values: impl Iterator<Item = f64>) -> usize {
    let mut best_idx = 0;
    let mut best = f64::NEG_INFINITY;
    for (i, v) in values.enumerate() {
        if v > best {
            best = v;
            best_idx = i;
        }
    }
    best_idx
}

// ============================================================================
// Tests
// ============================================================================
