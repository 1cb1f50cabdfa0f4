//! Similarity engine
//!
//! Cosine similarity between embeddings, the pairwise candidate matrix
//! with its masked diagonal, and the normalization applied before MMR
//! scoring.

pub mod matrix;
pub mod normalize;

pub use matrix::{cosine, doc_similarities, SimilarityMatrix};
