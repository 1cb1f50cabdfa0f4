//! # embedrank
//!
//! Keyphrase extraction by embedding similarity with Maximal Marginal
//! Relevance (MMR). Candidates are noun phrases extracted from POS-tagged
//! text, embedded through a pluggable [`EmbeddingProvider`], and selected
//! greedily to balance document relevance against redundancy among the
//! picks.
//!
//! ## Modules
//!
//! - [`types`]: tagged input text, POS tags, and extraction results
//! - [`candidates`]: grammar-based candidate phrases and stopwords
//! - [`embedding`]: the provider trait and unknown-candidate filtering
//! - [`similarity`]: cosine similarities and their normalization
//! - [`mmr`]: the greedy selector, relevance scores, and alias groups
//! - [`extract`]: the end-to-end pipeline
//!
//! ## Example
//!
//! Selection over precomputed embeddings:
//!
//! ```
//! use embedrank::{MmrConfig, MmrSelector};
//!
//! let candidates = vec!["machine learning".to_string(), "cat".to_string()];
//! let embeddings = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
//! let doc_embedding = vec![1.0, 0.2];
//!
//! let selector = MmrSelector::with_config(MmrConfig::default().with_top_n(2));
//! let result = selector.select(&candidates, &embeddings, &doc_embedding)?;
//! assert_eq!(result.texts(), vec!["machine learning", "cat"]);
//! # Ok::<(), embedrank::ExtractionError>(())
//! ```
//!
//! For full documents, wire an [`EmbeddingProvider`] into a
//! [`KeyphraseExtractor`] and feed it [`TaggedText`] built from your
//! tagger's output.
//!
//! ## Feature flags
//!
//! - `tracing`: per-stage spans and warnings via the `tracing` crate

pub mod candidates;
pub mod embedding;
pub mod error;
pub mod extract;
pub mod mmr;
pub mod similarity;
pub mod types;

pub use candidates::{CandidateConfig, PhraseExtractor, StopwordFilter};
pub use embedding::{filter_unknown, EmbeddingProvider};
pub use error::{ExtractionError, Result};
pub use extract::KeyphraseExtractor;
pub use mmr::{MmrConfig, MmrSelector};
pub use types::{ExtractionResult, Keyphrase, Lang, PosTag, TaggedText, Token};
