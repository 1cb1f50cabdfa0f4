//! Candidate phrase extraction
//!
//! Scans tagged sentences for noun-phrase candidates using a per-language
//! grammar over the POS tags:
//!
//! - English, German: (NOUN|ADJ)* (NOUN)+ — a run of nouns and adjectives
//!   trimmed back to its last noun
//! - French: (NOUN|ADJ)* (NOUN)+ (ADJ)* — trailing adjectives stay
//!
//! Candidates never cross a sentence boundary, and words marked
//! [`PosTag::Short`] break a run like any non-candidate tag does.

use rustc_hash::FxHashSet;

use crate::candidates::stopwords::StopwordFilter;
use crate::types::{Lang, TaggedText, Token};

/// Configuration for candidate extraction.
#[derive(Debug, Clone)]
pub struct CandidateConfig {
    /// Maximum number of words in a candidate phrase.
    pub max_phrase_words: usize,
    /// Drop candidates contained (on word boundaries) in a longer candidate.
    pub no_subset: bool,
    /// Drop candidates made up entirely of stopwords.
    pub drop_stopword_only: bool,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            max_phrase_words: 5,
            no_subset: false,
            drop_stopword_only: true,
        }
    }
}

/// Candidate phrase extractor.
#[derive(Debug, Clone, Default)]
pub struct PhraseExtractor {
    config: CandidateConfig,
    stopwords: Option<StopwordFilter>,
}

impl PhraseExtractor {
    /// Create an extractor with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom config.
    pub fn with_config(config: CandidateConfig) -> Self {
        Self {
            config,
            stopwords: None,
        }
    }

    /// Set the maximum phrase length in words.
    pub fn with_max_phrase_words(mut self, max_phrase_words: usize) -> Self {
        self.config.max_phrase_words = max_phrase_words;
        self
    }

    /// Drop candidates that are word-boundary substrings of a longer one.
    pub fn with_no_subset(mut self, no_subset: bool) -> Self {
        self.config.no_subset = no_subset;
        self
    }

    /// Supply a stopword filter instead of loading the stock list for the
    /// document's language.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    /// Extract candidate phrases in first-occurrence order, deduplicated.
    pub fn extract(&self, text: &TaggedText) -> Vec<String> {
        let stock;
        let stopwords = if self.config.drop_stopword_only {
            Some(match &self.stopwords {
                Some(filter) => filter,
                None => {
                    stock = StopwordFilter::new(text.lang());
                    &stock
                }
            })
        } else {
            None
        };

        let mut seen = FxHashSet::default();
        let mut candidates = Vec::new();
        for sentence in text.sentences() {
            for phrase in self.sentence_phrases(sentence, text.lang()) {
                let words = phrase.split_whitespace().count();
                if words == 0 || words > self.config.max_phrase_words {
                    continue;
                }
                if let Some(filter) = stopwords {
                    if filter.is_stopword_phrase(&phrase) {
                        continue;
                    }
                }
                if seen.insert(phrase.clone()) {
                    candidates.push(phrase);
                }
            }
        }

        if self.config.no_subset {
            candidates = unique_ngram_candidates(candidates);
        }
        candidates
    }

    /// Whole sentences as candidates, deduplicated in document order.
    /// Empty sentences are skipped.
    pub fn extract_sentences(&self, text: &TaggedText) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut sentences = Vec::new();
        for sentence in text.sentences() {
            let joined = sentence
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            if joined.is_empty() {
                continue;
            }
            if seen.insert(joined.clone()) {
                sentences.push(joined);
            }
        }
        sentences
    }

    /// Grammar matches within one sentence.
    fn sentence_phrases(&self, sentence: &[Token], lang: Lang) -> Vec<String> {
        let mut phrases = Vec::new();
        let mut i = 0;
        while i < sentence.len() {
            if !sentence[i].tag.is_candidate_word() {
                i += 1;
                continue;
            }
            // Maximal noun/adjective run.
            let start = i;
            while i < sentence.len() && sentence[i].tag.is_candidate_word() {
                i += 1;
            }
            let run = &sentence[start..i];

            let phrase_tokens = match lang {
                // Trailing adjectives do not belong to the phrase.
                Lang::En | Lang::De => {
                    match run.iter().rposition(|t| t.tag.is_noun()) {
                        Some(last_noun) => &run[..=last_noun],
                        None => continue,
                    }
                }
                // French adjectives follow the noun.
                Lang::Fr => {
                    if run.iter().any(|t| t.tag.is_noun()) {
                        run
                    } else {
                        continue;
                    }
                }
            };
            phrases.push(
                phrase_tokens
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }
        phrases
    }
}

/// Remove candidates contained in a longer candidate on word boundaries.
///
/// Candidates are considered longest-first (ties resolved lexically, so
/// the result is deterministic); the survivors keep that order.
fn unique_ngram_candidates(candidates: Vec<String>) -> Vec<String> {
    let mut ordered = candidates;
    ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut kept: Vec<String> = Vec::new();
    for candidate in ordered {
        if !kept.iter().any(|longer| contains_phrase(longer, &candidate)) {
            kept.push(candidate);
        }
    }
    kept
}

/// Word-boundary containment: "learning" is not in "deep learnings".
fn contains_phrase(haystack: &str, needle: &str) -> bool {
    let padded_hay = format!(" {haystack} ");
    let padded_needle = format!(" {needle} ");
    padded_hay.contains(&padded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(word: &str, label: &str) -> (String, String) {
        (word.to_string(), label.to_string())
    }

    fn tagged(sentences: &[Vec<(String, String)>]) -> TaggedText {
        TaggedText::new(sentences, Lang::En)
    }

    #[test]
    fn test_adjective_noun_phrase() {
        let text = tagged(&[vec![
            tag("The", "DT"),
            tag("quick", "JJ"),
            tag("brown", "JJ"),
            tag("fox", "NN"),
            tag("jumps", "VBZ"),
        ]]);
        let extractor = PhraseExtractor::new();
        assert_eq!(extractor.extract(&text), vec!["quick brown fox"]);
    }

    #[test]
    fn test_trailing_adjective_trimmed_in_english() {
        // "fox red" would need the run trimmed back to the noun.
        let text = tagged(&[vec![tag("fox", "NN"), tag("red", "JJ"), tag(".", ".")]]);
        let extractor = PhraseExtractor::new();
        assert_eq!(extractor.extract(&text), vec!["fox"]);
    }

    #[test]
    fn test_french_keeps_trailing_adjective() {
        let text = TaggedText::new(
            &[vec![tag("apprentissage", "NC"), tag("automatique", "ADJ")]],
            Lang::Fr,
        );
        let extractor = PhraseExtractor::new();
        assert_eq!(extractor.extract(&text), vec!["apprentissage automatique"]);
    }

    #[test]
    fn test_adjectives_alone_are_no_candidate() {
        let text = tagged(&[vec![tag("quick", "JJ"), tag("brown", "JJ")]]);
        let extractor = PhraseExtractor::new();
        assert!(extractor.extract(&text).is_empty());
    }

    #[test]
    fn test_noun_adjective_noun_stays_whole() {
        // The grammar allows adjectives between nouns.
        let text = tagged(&[vec![
            tag("network", "NN"),
            tag("neural", "JJ"),
            tag("architecture", "NN"),
        ]]);
        let extractor = PhraseExtractor::new();
        assert_eq!(
            extractor.extract(&text),
            vec!["network neural architecture"]
        );
    }

    #[test]
    fn test_short_word_breaks_run() {
        // "ai" is below the default minimum word length.
        let text = tagged(&[vec![
            tag("machine", "NN"),
            tag("ai", "NN"),
            tag("learning", "NN"),
        ]]);
        let extractor = PhraseExtractor::new();
        assert_eq!(extractor.extract(&text), vec!["machine", "learning"]);
    }

    #[test]
    fn test_candidates_never_cross_sentences() {
        let text = tagged(&[
            vec![tag("machine", "NN")],
            vec![tag("learning", "NN")],
        ]);
        let extractor = PhraseExtractor::new();
        assert_eq!(extractor.extract(&text), vec!["machine", "learning"]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let text = tagged(&[
            vec![tag("fox", "NN"), tag("hunts", "VBZ"), tag("rabbit", "NN")],
            vec![tag("fox", "NN")],
        ]);
        let extractor = PhraseExtractor::new();
        assert_eq!(extractor.extract(&text), vec!["fox", "rabbit"]);
    }

    #[test]
    fn test_max_phrase_words() {
        let text = tagged(&[vec![
            tag("one", "NN"),
            tag("two", "NN"),
            tag("three", "NN"),
            tag("four", "NN"),
        ]]);
        let extractor = PhraseExtractor::new().with_max_phrase_words(3);
        assert!(extractor.extract(&text).is_empty());
    }

    #[test]
    fn test_stopword_only_candidates_dropped() {
        // Tagger noise can label a stopword as a noun.
        let text = tagged(&[vec![
            tag("the", "NN"),
            tag("jumps", "VBZ"),
            tag("fox", "NN"),
        ]]);
        let extractor = PhraseExtractor::new();
        assert_eq!(extractor.extract(&text), vec!["fox"]);
    }

    #[test]
    fn test_stopword_filtering_can_be_disabled() {
        let text = tagged(&[vec![tag("the", "NN")]]);
        let extractor = PhraseExtractor::with_config(CandidateConfig {
            drop_stopword_only: false,
            ..CandidateConfig::default()
        });
        assert_eq!(extractor.extract(&text), vec!["the"]);
    }

    #[test]
    fn test_no_subset_prunes_contained_candidates() {
        let text = tagged(&[
            vec![tag("learning", "NN")],
            vec![tag("deep", "JJ"), tag("learning", "NN")],
        ]);
        let extractor = PhraseExtractor::new().with_no_subset(true);
        assert_eq!(extractor.extract(&text), vec!["deep learning"]);
    }

    #[test]
    fn test_no_subset_respects_word_boundaries() {
        let filter = StopwordFilter::empty();
        let text = tagged(&[
            vec![tag("learnings", "NNS")],
            vec![tag("deep", "JJ"), tag("learning", "NN")],
        ]);
        let extractor = PhraseExtractor::new()
            .with_no_subset(true)
            .with_stopwords(filter);
        let mut got = extractor.extract(&text);
        got.sort();
        assert_eq!(got, vec!["deep learning", "learnings"]);
    }

    #[test]
    fn test_extract_sentences() {
        let text = tagged(&[
            vec![tag("The", "DT"), tag("fox", "NN"), tag("runs", "VBZ")],
            vec![],
            vec![tag("The", "DT"), tag("fox", "NN"), tag("runs", "VBZ")],
            vec![tag("It", "PRP"), tag("rests", "VBZ")],
        ]);
        let extractor = PhraseExtractor::new();
        assert_eq!(
            extractor.extract_sentences(&text),
            vec!["the fox runs", "it rests"]
        );
    }

    #[test]
    fn test_empty_text() {
        let text = tagged(&[]);
        let extractor = PhraseExtractor::new();
        assert!(extractor.extract(&text).is_empty());
        assert!(extractor.extract_sentences(&text).is_empty());
    }
}
