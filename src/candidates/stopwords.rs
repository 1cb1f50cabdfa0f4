//! Stopword filtering
//!
//! Stopword lists come from the `stop-words` crate for the supported
//! languages, with optional custom additions. The filter works on the
//! lowercased tokens produced by [`crate::types::TaggedText`], so lookups
//! never re-normalize case.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::types::Lang;

/// A stopword lookup for one language.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(Lang::En)
    }
}

impl StopwordFilter {
    /// Load the stock stopword list for a language.
    pub fn new(lang: Lang) -> Self {
        let list = match lang {
            Lang::En => LANGUAGE::English,
            Lang::Fr => LANGUAGE::French,
            Lang::De => LANGUAGE::German,
        };
        let stopwords = get(list).iter().map(|s| s.to_lowercase()).collect();
        Self { stopwords }
    }

    /// An empty filter that treats no word as a stopword.
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Build a filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add words to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Expects lowercased input.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// True if every whitespace-separated word of the phrase is a stopword.
    pub fn is_stopword_phrase(&self, phrase: &str) -> bool {
        let mut words = phrase.split_whitespace();
        let mut any = false;
        for word in words.by_ref() {
            if !self.is_stopword(word) {
                return false;
            }
            any = true;
        }
        any
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new(Lang::En);
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("learning"));
    }

    #[test]
    fn test_french_and_german_stopwords() {
        let fr = StopwordFilter::new(Lang::Fr);
        assert!(fr.is_stopword("le"));
        assert!(fr.is_stopword("et"));
        assert!(!fr.is_stopword("apprentissage"));

        let de = StopwordFilter::new(Lang::De);
        assert!(de.is_stopword("der"));
        assert!(de.is_stopword("und"));
        assert!(!de.is_stopword("maschine"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "Words"]);
        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_stopword_phrase() {
        let filter = StopwordFilter::new(Lang::En);
        assert!(filter.is_stopword_phrase("of the"));
        assert!(!filter.is_stopword_phrase("state of the art"));
        assert!(!filter.is_stopword_phrase(""));
    }
}
