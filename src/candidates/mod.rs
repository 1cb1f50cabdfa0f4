//! Candidate generation: grammar-based phrase extraction and stopword
//! filtering over tagged input text.

pub mod extractor;
pub mod stopwords;

pub use extractor::{CandidateConfig, PhraseExtractor};
pub use stopwords::StopwordFilter;
