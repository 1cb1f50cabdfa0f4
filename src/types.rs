//! Core types: POS tags, tagged input text, and extraction results.
//!
//! [`TaggedText`] is the crate's input representation. It owns the text
//! normalization policy applied before candidate extraction: every token
//! is lowercased, words shorter than the minimum word length are marked
//! with [`PosTag::Short`] so they cannot join a candidate phrase, and
//! French/German tagger labels are converted to their Penn equivalents
//! at construction time.

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

// ============================================================================
// POS tags
// ============================================================================

/// Coarse part-of-speech tag, reduced to what candidate extraction needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Adverb,
    Determiner,
    Preposition,
    Cardinal,
    Punctuation,
    /// Word below the minimum word length; never part of a candidate.
    Short,
    Other,
}

impl PosTag {
    /// True for common and proper nouns.
    pub fn is_noun(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// True for tags that may appear inside a candidate phrase
    /// (nouns and adjectives).
    pub fn is_candidate_word(self) -> bool {
        self.is_noun() || self == PosTag::Adjective
    }

    /// Map a tagger label to a [`PosTag`].
    ///
    /// Penn Treebank labels are handled for all languages; for French and
    /// German the language-specific noun and adjective labels (`NC`, `NE`,
    /// `NPP`, `ADJA`, ...) are folded into their Penn equivalents.
    pub fn from_label(label: &str, lang: Lang) -> Self {
        if lang != Lang::En {
            match label {
                "NN" | "NNE" | "NE" | "N" | "NPP" | "NC" | "NOUN" => return PosTag::Noun,
                "ADJA" | "ADJ" => return PosTag::Adjective,
                _ => {}
            }
        }
        match label {
            "NN" | "NNS" => PosTag::Noun,
            "NNP" | "NNPS" => PosTag::ProperNoun,
            "JJ" | "JJR" | "JJS" => PosTag::Adjective,
            l if l.starts_with("VB") => PosTag::Verb,
            l if l.starts_with("RB") => PosTag::Adverb,
            "DT" => PosTag::Determiner,
            "IN" => PosTag::Preposition,
            "CD" | "CARD" => PosTag::Cardinal,
            "." | "," | ":" | ";" | "!" | "?" | "``" | "''" | "-LRB-" | "-RRB-" => {
                PosTag::Punctuation
            }
            _ => PosTag::Other,
        }
    }
}

// ============================================================================
// Language
// ============================================================================

/// Languages with a candidate grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lang {
    En,
    Fr,
    De,
}

impl std::str::FromStr for Lang {
    type Err = ExtractionError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "en" | "english" => Ok(Lang::En),
            "fr" | "french" => Ok(Lang::Fr),
            "de" | "german" => Ok(Lang::De),
            other => Err(ExtractionError::UnsupportedLanguage(other.to_string())),
        }
    }
}

// ============================================================================
// Tokens and tagged text
// ============================================================================

/// A single tagged token. The surface form is stored lowercased
/// (extraction lowercases by policy; original casing is not preserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub tag: PosTag,
}

impl Token {
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

/// Default minimum word length for candidate words.
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// The tagged input document: one `Vec<Token>` per sentence.
///
/// Construction applies the normalization policy once; downstream stages
/// read the tokens as-is.
#[derive(Debug, Clone)]
pub struct TaggedText {
    sentences: Vec<Vec<Token>>,
    lang: Lang,
}

impl TaggedText {
    /// Build from `(word, tagger label)` sentences with the default
    /// minimum word length.
    pub fn new(tagged_sentences: &[Vec<(String, String)>], lang: Lang) -> Self {
        Self::with_min_word_len(tagged_sentences, lang, DEFAULT_MIN_WORD_LEN)
    }

    /// Build with an explicit minimum word length. Words shorter than
    /// `min_word_len` (in characters) are tagged [`PosTag::Short`] so
    /// they neither become candidate words nor extend a phrase.
    pub fn with_min_word_len(
        tagged_sentences: &[Vec<(String, String)>],
        lang: Lang,
        min_word_len: usize,
    ) -> Self {
        let sentences = tagged_sentences
            .iter()
            .map(|sentence| {
                sentence
                    .iter()
                    .map(|(word, label)| {
                        let text = word.to_lowercase();
                        let tag = if text.chars().count() < min_word_len {
                            PosTag::Short
                        } else {
                            PosTag::from_label(label, lang)
                        };
                        Token::new(text, tag)
                    })
                    .collect()
            })
            .collect();
        Self { sentences, lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn sentences(&self) -> &[Vec<Token>] {
        &self.sentences
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.iter().all(|s| s.is_empty())
    }

    /// The whole document as one space-joined lowercased string, used as
    /// the unfiltered embedding context.
    pub fn full_text(&self) -> String {
        self.join_tokens(|_| true)
    }

    /// The document restricted to candidate words (nouns and adjectives
    /// of sufficient length), used as the filtered embedding context.
    pub fn candidate_filtered_text(&self) -> String {
        self.join_tokens(|t| t.tag.is_candidate_word())
    }

    fn join_tokens(&self, keep: impl Fn(&Token) -> bool) -> String {
        let mut out = String::new();
        for sentence in &self.sentences {
            for token in sentence {
                if keep(token) {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(&token.text);
                }
            }
        }
        out
    }
}

// ============================================================================
// Results
// ============================================================================

/// One selected keyphrase with its relevance score and alias group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyphrase {
    /// The candidate string (lowercased by extraction policy).
    pub text: String,
    /// Raw document similarity divided by the maximum over the selected
    /// set; the selected candidate most similar to the document scores 1.0.
    pub relevance: f64,
    /// Candidates (from the full candidate set) whose similarity to this
    /// keyphrase meets the alias threshold. Never contains the keyphrase
    /// itself.
    pub aliases: Vec<String>,
}

/// Ordered extraction output. Order is selection order: the first entry
/// was chosen by pure document similarity; later entries interleave
/// diversity, so relevance is not necessarily monotone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub keyphrases: Vec<Keyphrase>,
}

impl ExtractionResult {
    /// The empty result: the legitimate "nothing extractable" outcome.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.keyphrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyphrases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyphrase> {
        self.keyphrases.iter()
    }

    /// Selected candidate strings, in selection order.
    pub fn texts(&self) -> Vec<&str> {
        self.keyphrases.iter().map(|k| k.text.as_str()).collect()
    }

    /// Relevance scores, parallel to [`Self::texts`].
    pub fn relevance_scores(&self) -> Vec<f64> {
        self.keyphrases.iter().map(|k| k.relevance).collect()
    }

    /// Alias lists, parallel to [`Self::texts`].
    pub fn alias_lists(&self) -> Vec<&[String]> {
        self.keyphrases.iter().map(|k| k.aliases.as_slice()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(word: &str, label: &str) -> (String, String) {
        (word.to_string(), label.to_string())
    }

    #[test]
    fn test_pos_tag_from_penn_labels() {
        assert_eq!(PosTag::from_label("NN", Lang::En), PosTag::Noun);
        assert_eq!(PosTag::from_label("NNS", Lang::En), PosTag::Noun);
        assert_eq!(PosTag::from_label("NNP", Lang::En), PosTag::ProperNoun);
        assert_eq!(PosTag::from_label("JJ", Lang::En), PosTag::Adjective);
        assert_eq!(PosTag::from_label("VBZ", Lang::En), PosTag::Verb);
        assert_eq!(PosTag::from_label("DT", Lang::En), PosTag::Determiner);
        assert_eq!(PosTag::from_label("XYZ", Lang::En), PosTag::Other);
    }

    #[test]
    fn test_pos_tag_language_specific_conversion() {
        // German/French noun and adjective labels fold into Penn tags.
        assert_eq!(PosTag::from_label("NC", Lang::Fr), PosTag::Noun);
        assert_eq!(PosTag::from_label("NPP", Lang::Fr), PosTag::Noun);
        assert_eq!(PosTag::from_label("NE", Lang::De), PosTag::Noun);
        assert_eq!(PosTag::from_label("ADJA", Lang::De), PosTag::Adjective);
        // But not for English.
        assert_eq!(PosTag::from_label("NC", Lang::En), PosTag::Other);
    }

    #[test]
    fn test_lang_parsing() {
        assert_eq!("en".parse::<Lang>().unwrap(), Lang::En);
        assert_eq!("French".parse::<Lang>().unwrap(), Lang::Fr);
        assert_eq!("de".parse::<Lang>().unwrap(), Lang::De);
        assert!("es".parse::<Lang>().is_err());
    }

    #[test]
    fn test_tagged_text_lowercases() {
        let text = TaggedText::new(
            &[vec![tag("Machine", "NN"), tag("Learning", "NN")]],
            Lang::En,
        );
        assert_eq!(text.sentences()[0][0].text, "machine");
        assert_eq!(text.sentences()[0][1].text, "learning");
    }

    #[test]
    fn test_short_words_are_marked() {
        let text = TaggedText::new(&[vec![tag("AI", "NN"), tag("model", "NN")]], Lang::En);
        assert_eq!(text.sentences()[0][0].tag, PosTag::Short);
        assert_eq!(text.sentences()[0][1].tag, PosTag::Noun);
    }

    #[test]
    fn test_min_word_len_override() {
        let text = TaggedText::with_min_word_len(&[vec![tag("AI", "NN")]], Lang::En, 2);
        assert_eq!(text.sentences()[0][0].tag, PosTag::Noun);
    }

    #[test]
    fn test_full_and_filtered_text() {
        let text = TaggedText::new(
            &[vec![
                tag("The", "DT"),
                tag("quick", "JJ"),
                tag("fox", "NN"),
                tag("jumps", "VBZ"),
            ]],
            Lang::En,
        );
        assert_eq!(text.full_text(), "the quick fox jumps");
        assert_eq!(text.candidate_filtered_text(), "quick fox");
    }

    #[test]
    fn test_empty_text() {
        let text = TaggedText::new(&[], Lang::En);
        assert!(text.is_empty());
        assert_eq!(text.full_text(), "");
    }

    #[test]
    fn test_result_parallel_accessors() {
        let result = ExtractionResult {
            keyphrases: vec![
                Keyphrase {
                    text: "machine learning".to_string(),
                    relevance: 1.0,
                    aliases: vec!["deep learning".to_string()],
                },
                Keyphrase {
                    text: "cat".to_string(),
                    relevance: 0.4,
                    aliases: vec![],
                },
            ],
        };
        assert_eq!(result.texts(), vec!["machine learning", "cat"]);
        assert_eq!(result.relevance_scores(), vec![1.0, 0.4]);
        assert_eq!(result.alias_lists()[0], &["deep learning".to_string()]);
        assert!(result.alias_lists()[1].is_empty());
    }

    #[test]
    fn test_result_serializes() {
        let result = ExtractionResult {
            keyphrases: vec![Keyphrase {
                text: "fox".to_string(),
                relevance: 1.0,
                aliases: vec![],
            }],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["keyphrases"][0]["text"], "fox");
    }
}
