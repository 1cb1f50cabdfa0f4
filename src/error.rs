//! Error types for keyphrase extraction.
//!
//! Every fallible operation in the crate returns [`Result`]. The taxonomy
//! distinguishes invalid caller input (rejected before any computation),
//! degenerate similarity statistics discovered during normalization, and
//! embedding-provider failures. An empty candidate set is deliberately
//! *not* an error — it surfaces as an empty [`ExtractionResult`]
//! (see [`crate::types::ExtractionResult`]).

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors raised during keyphrase extraction.
///
/// No partial results accompany an error: a failed run produces nothing
/// for the current document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// `top_n` was zero; at least one keyphrase must be requested.
    #[error("top_n must be at least 1")]
    InvalidTopN,

    /// The MMR tradeoff weight was outside `[0, 1]`.
    #[error("beta must lie in [0, 1], got {0}")]
    InvalidBeta(f64),

    /// The alias similarity threshold was outside `[0, 1]`.
    #[error("alias_threshold must lie in [0, 1], got {0}")]
    InvalidThreshold(f64),

    /// The embedding matrix row count does not match the candidate count.
    #[error("embedding rows ({rows}) do not match candidate count ({candidates})")]
    RowCountMismatch { candidates: usize, rows: usize },

    /// An embedding row has a different dimension than expected.
    #[error("embedding dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A similarity maximum was exactly zero, so max-scaling is undefined.
    #[error("degenerate similarity statistics: {0}")]
    DegenerateStatistics(String),

    /// The embedding provider failed or returned a malformed batch.
    #[error("embedding provider failed: {0}")]
    Provider(String),

    /// The requested language has no candidate grammar.
    #[error("language not handled: {0}")]
    UnsupportedLanguage(String),
}
