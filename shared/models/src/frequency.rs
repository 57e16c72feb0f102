use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vocabulary::KnownWords;

/// Word occurrence counts in first-occurrence order.
///
/// Built once by [`FrequencyTable::tally`]; there is no mutating API after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: IndexMap<String, u64>,
}

impl FrequencyTable {
    pub fn tally<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: IndexMap<String, u64> = IndexMap::new();
        for token in tokens {
            let token = token.as_ref();
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_string(), 1);
                }
            }
        }
        Self { counts }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens tallied.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    pub fn ranked(&self) -> RankedList {
        RankedList::from_table(self)
    }

    pub fn top(&self, n: usize) -> RankedList {
        self.ranked().truncate(n)
    }

    /// Split into known and unknown tables, preserving first-occurrence order.
    pub fn partition(&self, known: &KnownWords) -> FrequencyPartition {
        let mut known_counts = IndexMap::new();
        let mut unknown_counts = IndexMap::new();

        for (word, count) in &self.counts {
            if known.contains(word) {
                known_counts.insert(word.clone(), *count);
            } else {
                unknown_counts.insert(word.clone(), *count);
            }
        }

        FrequencyPartition {
            known: FrequencyTable {
                counts: known_counts,
            },
            unknown: FrequencyTable {
                counts: unknown_counts,
            },
        }
    }
}

/// Known/unknown halves of a [`FrequencyTable`]. Every word of the source
/// table lands in exactly one half.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyPartition {
    pub known: FrequencyTable,
    pub unknown: FrequencyTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

/// Entries sorted by descending count. Ties keep first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedList {
    entries: Vec<RankedEntry>,
}

impl RankedList {
    pub fn from_table(table: &FrequencyTable) -> Self {
        let mut entries: Vec<RankedEntry> = table
            .iter()
            .map(|(word, count)| RankedEntry {
                word: word.to_string(),
                count,
            })
            .collect();
        // sort_by is stable, so equal counts stay in insertion order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// First `min(n, len)` entries.
    pub fn truncate(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn max_count(&self) -> Option<u64> {
        self.entries.first().map(|entry| entry.count)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_and_order() {
        let table = FrequencyTable::tally(["cat", "cat", "run", "run", "cat", "run"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 6);
        assert_eq!(table.get("cat"), Some(3));
        assert_eq!(table.get("run"), Some(3));
        assert_eq!(table.get("dog"), None);

        let words: Vec<&str> = table.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["cat", "run"]);
    }

    #[test]
    fn test_ranked_ties_follow_first_occurrence() {
        let table = FrequencyTable::tally(["zeta", "alpha", "alpha", "zeta", "mid"]);
        let ranked = table.ranked();
        let words: Vec<&str> = ranked.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["zeta", "alpha", "mid"]);
        assert_eq!(ranked.max_count(), Some(2));
    }

    #[test]
    fn test_ranked_descending() {
        let table = FrequencyTable::tally(["a", "b", "b", "c", "c", "c"]);
        let ranked = table.ranked();
        let counts: Vec<u64> = ranked.iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![3, 2, 1]);
    }

    #[test]
    fn test_top_n_truncation() {
        let table = FrequencyTable::tally(["a", "b", "b", "c", "c", "c"]);
        assert_eq!(table.top(2).len(), 2);
        assert_eq!(table.top(10).len(), 3);
        assert_eq!(table.top(0).len(), 0);
        assert_eq!(table.top(1).entries()[0].word, "c");
    }

    #[test]
    fn test_partition_with_empty_known_set() {
        let table = FrequencyTable::tally(["apple", "pear", "apple"]);
        let partition = table.partition(&KnownWords::empty());
        assert!(partition.known.is_empty());
        assert_eq!(partition.unknown, table);
    }

    #[test]
    fn test_partition_splits_known_words() {
        let table = FrequencyTable::tally(["apple", "pear", "apple", "plum"]);
        let known = KnownWords::from_words(["pear"]);
        let partition = table.partition(&known);

        assert_eq!(partition.known.get("pear"), Some(1));
        assert_eq!(partition.unknown.get("pear"), None);
        assert_eq!(partition.unknown.get("apple"), Some(2));
        assert_eq!(partition.known.len() + partition.unknown.len(), table.len());
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::tally(Vec::<String>::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.ranked().is_empty());
        assert_eq!(table.ranked().max_count(), None);
    }

    #[test]
    fn test_ranked_json() {
        let ranked = FrequencyTable::tally(["cat", "cat"]).ranked();
        assert_eq!(ranked.to_json().unwrap(), r#"[{"word":"cat","count":2}]"#);
    }
}
