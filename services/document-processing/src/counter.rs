//! Frequency counting.

use pdfvocab_models::{FrequencyTable, KnownWords};

/// Full table plus its known/unknown split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCounts {
    pub all: FrequencyTable,
    pub known: FrequencyTable,
    pub unknown: FrequencyTable,
}

impl WordCounts {
    /// Number of tokens counted, duplicates included.
    pub fn token_count(&self) -> u64 {
        self.all.total()
    }
}

pub fn count_words<S: AsRef<str>>(tokens: &[S], known: &KnownWords) -> WordCounts {
    let all = FrequencyTable::tally(tokens);
    let partition = all.partition(known);

    WordCounts {
        all,
        known: partition.known,
        unknown: partition.unknown,
    }
}
