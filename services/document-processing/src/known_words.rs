//! Known-words file loading.

use std::path::Path;

use pdfvocab_models::KnownWords;
use pdfvocab_utils::{PdfVocabError, PdfVocabResult};
use tracing::info;

use crate::lemmatizer::Lemmatizer;

/// Load a newline-delimited word list. `None` yields an empty set.
///
/// Every entry is stored lowercased and trimmed, and also in its lemmatized
/// form so that listing `cats` excludes the counted token `cat`.
pub fn load_known_words(path: Option<&Path>) -> PdfVocabResult<KnownWords> {
    let Some(path) = path else {
        info!("No known words file provided, using an empty known words list");
        return Ok(KnownWords::empty());
    };

    if path.is_dir() {
        return Err(PdfVocabError::config(format!(
            "Known words path '{}' is a directory",
            path.display()
        )));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        PdfVocabError::config(format!(
            "Failed to read known words file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let known = parse_known_words(&contents);
    info!("Loaded {} known words from {}", known.len(), path.display());
    Ok(known)
}

pub fn parse_known_words(contents: &str) -> KnownWords {
    let lemmatizer = Lemmatizer::global();
    let words = contents
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .flat_map(|word| {
            let lemma = lemmatizer.lemmatize(&word);
            [word, lemma]
        });

    KnownWords::from_words(words)
}
