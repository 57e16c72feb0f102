use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lowercase words the reader already knows.
///
/// Immutable once built; an empty set excludes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownWords {
    words: HashSet<String>,
}

impl KnownWords {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the set, lowercasing and trimming each entry and skipping blanks.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_normalizes() {
        let known = KnownWords::from_words(["  Apple ", "", "PEAR", "   "]);
        assert_eq!(known.len(), 2);
        assert!(known.contains("apple"));
        assert!(known.contains("pear"));
        assert!(!known.contains("Apple"));
    }

    #[test]
    fn test_empty() {
        let known = KnownWords::empty();
        assert!(known.is_empty());
        assert!(!known.contains("anything"));
    }
}
