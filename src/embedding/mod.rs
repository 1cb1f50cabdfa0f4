//! Embedding provider boundary
//!
//! The trait-based contract for turning text batches into vectors, plus
//! the shape checks and unknown-row filtering applied to provider output.

pub mod provider;

pub use provider::{filter_unknown, EmbeddingProvider};
