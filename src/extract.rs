//! End-to-end extraction pipeline
//!
//! [`KeyphraseExtractor`] wires candidate generation, embedding, and MMR
//! selection together: extract candidate phrases from the tagged document,
//! embed them in one batch, drop candidates the provider does not know,
//! embed the document context, and hand everything to the selector.
//!
//! Two pipelines share the machinery: [`extract_keyphrases`] works on
//! grammar candidates, [`extract_key_sentences`] on whole sentences (with
//! a diversity-heavier default β).
//!
//! [`extract_keyphrases`]: KeyphraseExtractor::extract_keyphrases
//! [`extract_key_sentences`]: KeyphraseExtractor::extract_key_sentences

use crate::candidates::PhraseExtractor;
use crate::embedding::provider::check_batch;
use crate::embedding::{filter_unknown, EmbeddingProvider};
use crate::error::{ExtractionError, Result};
use crate::mmr::{MmrConfig, MmrSelector};
use crate::types::{ExtractionResult, TaggedText};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("extraction_stage", stage = $name).entered();
    };
}

/// The full keyphrase extraction pipeline over an embedding provider.
#[derive(Debug, Clone)]
pub struct KeyphraseExtractor<P> {
    provider: P,
    phrase_extractor: PhraseExtractor,
    selector: MmrSelector,
    sentence_selector: MmrSelector,
    use_filtered_context: bool,
}

impl<P: EmbeddingProvider> KeyphraseExtractor<P> {
    /// Create a pipeline with default configuration.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            phrase_extractor: PhraseExtractor::default(),
            selector: MmrSelector::new(),
            sentence_selector: MmrSelector::with_config(MmrConfig::for_sentences()),
            use_filtered_context: true,
        }
    }

    /// Replace the candidate extractor.
    pub fn with_phrase_extractor(mut self, phrase_extractor: PhraseExtractor) -> Self {
        self.phrase_extractor = phrase_extractor;
        self
    }

    /// Set the MMR configuration for keyphrase extraction.
    pub fn with_config(mut self, config: MmrConfig) -> Self {
        self.selector = MmrSelector::with_config(config);
        self
    }

    /// Set the MMR configuration for key-sentence extraction.
    pub fn with_sentence_config(mut self, config: MmrConfig) -> Self {
        self.sentence_selector = MmrSelector::with_config(config);
        self
    }

    /// Choose the document context sent to the provider: the text
    /// restricted to candidate words (default) or the full text.
    pub fn with_filtered_context(mut self, use_filtered_context: bool) -> Self {
        self.use_filtered_context = use_filtered_context;
        self
    }

    /// Extract up to `top_n` keyphrases from a tagged document.
    ///
    /// Documents that yield no candidates, or whose candidates are all
    /// unknown to the provider, produce the empty result.
    pub fn extract_keyphrases(&self, text: &TaggedText) -> Result<ExtractionResult> {
        trace_stage!("candidates");
        let candidates = self.phrase_extractor.extract(text);
        self.select(candidates, text, &self.selector)
    }

    /// Extract up to `top_n` key sentences from a tagged document.
    pub fn extract_key_sentences(&self, text: &TaggedText) -> Result<ExtractionResult> {
        trace_stage!("sentences");
        let sentences = self.phrase_extractor.extract_sentences(text);
        self.select(sentences, text, &self.sentence_selector)
    }

    fn select(
        &self,
        candidates: Vec<String>,
        text: &TaggedText,
        selector: &MmrSelector,
    ) -> Result<ExtractionResult> {
        // Reject bad parameters before any provider round trip.
        selector.config().validate()?;

        if candidates.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!("document produced no candidates");
            return Ok(ExtractionResult::empty());
        }

        trace_stage!("embed_candidates");
        let embeddings = self.provider.embed_batch(&candidates)?;
        check_batch(candidates.len(), &embeddings)?;
        let (candidates, embeddings) = filter_unknown(candidates, embeddings);
        if candidates.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!("no candidate is known to the embedding provider");
            return Ok(ExtractionResult::empty());
        }

        trace_stage!("embed_document");
        let context = if self.use_filtered_context {
            text.candidate_filtered_text()
        } else {
            text.full_text()
        };
        let mut doc_rows = self.provider.embed_batch(&[context])?;
        check_batch(1, &doc_rows)?;
        let doc_embedding = doc_rows.pop().ok_or_else(|| {
            ExtractionError::Provider("empty document embedding batch".to_string())
        })?;

        trace_stage!("select");
        selector.select(&candidates, &embeddings, &doc_embedding)
    }
}
