//! Text normalization
//!
//! Turns raw extracted text into lemmatized tokens: lowercase, split on
//! non-word characters, keep purely alphabetic runs, drop stopwords,
//! lemmatize, drop tokens shorter than the configured minimum.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use pdfvocab_utils::AnalysisConfig;

use crate::lemmatizer::Lemmatizer;
use crate::stopwords::is_stopword;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

static HYPHEN_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w)-[ \t]*\r?\n[ \t]*").expect("hyphen pattern is valid"));

/// Counters for one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationStats {
    pub raw_tokens: usize,
    pub non_alphabetic: usize,
    pub stopwords: usize,
    pub too_short: usize,
    pub kept: usize,
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    min_token_length: usize,
    join_hyphenated: bool,
}

impl Normalizer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            min_token_length: config.min_token_length,
            join_hyphenated: config.join_hyphenated,
        }
    }

    pub fn min_token_length(&self) -> usize {
        self.min_token_length
    }

    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.normalize_with_stats(text).0
    }

    pub fn normalize_with_stats(&self, text: &str) -> (Vec<String>, NormalizationStats) {
        let joined = if self.join_hyphenated {
            HYPHEN_BREAK.replace_all(text, "$1")
        } else {
            std::borrow::Cow::Borrowed(text)
        };
        let lowered = joined.to_lowercase();

        let lemmatizer = Lemmatizer::global();
        let mut stats = NormalizationStats::default();
        let mut tokens = Vec::new();

        for word in WORD.find_iter(&lowered).map(|m| m.as_str()) {
            stats.raw_tokens += 1;

            if !word.chars().all(char::is_alphabetic) {
                stats.non_alphabetic += 1;
                continue;
            }
            if is_stopword(word) {
                stats.stopwords += 1;
                continue;
            }

            let lemma = lemmatizer.lemmatize(word);
            // "wills" -> "will"
            if is_stopword(&lemma) {
                stats.stopwords += 1;
                continue;
            }
            if lemma.chars().count() < self.min_token_length {
                stats.too_short += 1;
                continue;
            }
            tokens.push(lemma);
        }

        stats.kept = tokens.len();
        debug!(
            raw = stats.raw_tokens,
            non_alphabetic = stats.non_alphabetic,
            stopwords = stats.stopwords,
            too_short = stats.too_short,
            kept = stats.kept,
            "Normalized text"
        );

        (tokens, stats)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn normalizer(min_token_length: usize) -> Normalizer {
        Normalizer::new(&AnalysisConfig {
            min_token_length,
            join_hyphenated: true,
        })
    }

    #[test]
    fn test_cats_and_running_scenario() {
        let tokens = normalizer(2).normalize("Cats cats run running. The cat ran.");
        assert_eq!(tokens, vec!["cat", "cat", "run", "run", "cat", "run"]);
    }

    #[test]
    fn test_mixed_tokens_are_discarded() {
        let tokens = normalizer(1).normalize("abc123 42 foo_bar chapter 7 rivers");
        assert_eq!(tokens, vec!["chapter", "river"]);
    }

    #[test]
    fn test_punctuation_splits_words() {
        let tokens = normalizer(3).normalize("river,bank;(forest)—meadow");
        assert_eq!(tokens, vec!["river", "bank", "forest", "meadow"]);
    }

    #[test]
    fn test_default_minimum_drops_short_words() {
        let (tokens, stats) = Normalizer::default().normalize_with_stats("ox go big elephant");
        assert_eq!(tokens, vec!["big", "elephant"]);
        assert_eq!(stats.too_short, 2);
    }

    #[test]
    fn test_stopwords_removed_before_lemmatizing() {
        let (tokens, stats) = normalizer(1).normalize_with_stats("The dogs and the cats were here");
        assert_eq!(tokens, vec!["dog", "cat"]);
        assert_eq!(stats.stopwords, 5);
    }

    #[test]
    fn test_hyphenated_line_breaks_are_joined() {
        let tokens = normalizer(3).normalize("a long exam-\nple of wrap-\r\n  ping");
        assert_eq!(tokens, vec!["long", "example", "wrap"]);
    }

    #[test]
    fn test_hyphen_join_can_be_disabled() {
        let normalizer = Normalizer::new(&AnalysisConfig {
            min_token_length: 3,
            join_hyphenated: false,
        });
        assert_eq!(normalizer.normalize("exam-\nple"), vec!["exam", "ple"]);
    }

    #[test]
    fn test_apostrophes_split_contractions() {
        let tokens = normalizer(2).normalize("Don't stop the reader's journey");
        assert_eq!(tokens, vec!["stop", "reader", "journey"]);
    }

    #[test]
    fn test_empty_text() {
        let (tokens, stats) = Normalizer::default().normalize_with_stats("  \n 123 !!! ");
        assert!(tokens.is_empty());
        assert_eq!(stats.raw_tokens, 1);
        assert_eq!(stats.non_alphabetic, 1);
    }

    proptest! {
        #[test]
        fn prop_tokens_are_lowercase_alphabetic(text in "[A-Za-z0-9 ,.'\n-]{0,200}", min in 1usize..6) {
            let tokens = normalizer(min).normalize(&text);
            for token in &tokens {
                prop_assert!(token.chars().all(char::is_alphabetic));
                prop_assert_eq!(token.to_lowercase(), token.clone());
                prop_assert!(token.chars().count() >= min);
                prop_assert!(!is_stopword(token));
            }
        }

        #[test]
        fn prop_normalization_is_deterministic(text in "[A-Za-z ,.\n]{0,200}") {
            let n = Normalizer::default();
            prop_assert_eq!(n.normalize(&text), n.normalize(&text));
        }
    }
}
