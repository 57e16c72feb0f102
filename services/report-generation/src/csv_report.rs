//! CSV frequency reports
//!
//! One `word,count` row per ranked entry below a `Word,Frequency` header.

use std::path::{Path, PathBuf};

use pdfvocab_models::{FrequencyTable, RankedList};
use pdfvocab_utils::{PdfVocabError, PdfVocabResult};
use tracing::info;

pub const CSV_HEADER: [&str; 2] = ["Word", "Frequency"];

/// Written report location and its number of data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Rank `table` and write it to `path`, keeping only the first `top_n`
/// entries when a limit is given.
pub fn write_frequency_csv(
    table: &FrequencyTable,
    path: &Path,
    top_n: Option<usize>,
) -> PdfVocabResult<ReportSummary> {
    let ranked = match top_n {
        Some(n) => {
            info!("Saving top {} words to CSV: {}", n, path.display());
            table.top(n)
        }
        None => {
            info!("Saving all {} words to CSV: {}", table.len(), path.display());
            table.ranked()
        }
    };

    write_ranked_csv(&ranked, path)
}

pub fn write_ranked_csv(ranked: &RankedList, path: &Path) -> PdfVocabResult<ReportSummary> {
    let io_error = |e: csv::Error| PdfVocabError::io(path, e.to_string());

    // The writer owns the file; dropping it on any early return closes the handle.
    let mut writer = csv::Writer::from_path(path).map_err(io_error)?;
    writer.write_record(CSV_HEADER).map_err(io_error)?;

    for entry in ranked {
        let count = entry.count.to_string();
        writer
            .write_record([entry.word.as_str(), count.as_str()])
            .map_err(io_error)?;
    }

    writer
        .flush()
        .map_err(|e| PdfVocabError::io(path, e.to_string()))?;

    Ok(ReportSummary {
        path: path.to_path_buf(),
        rows: ranked.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_rows(path: &Path) -> Vec<(String, u64)> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        assert_eq!(reader.headers().unwrap(), &csv::StringRecord::from(vec!["Word", "Frequency"]));
        reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].parse().unwrap())
            })
            .collect()
    }

    #[test]
    fn test_all_words_written_descending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all_words.csv");
        let table = FrequencyTable::tally(["cat", "cat", "run", "run", "cat", "run", "dog"]);

        let summary = write_frequency_csv(&table, &path, None).unwrap();
        assert_eq!(summary.rows, 3);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Word,Frequency\ncat,3\nrun,3\ndog,1\n");
    }

    #[test]
    fn test_top_n_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top2.csv");
        let table = FrequencyTable::tally(["a", "b", "b", "c", "c", "c"]);

        let summary = write_frequency_csv(&table, &path, Some(2)).unwrap();
        assert_eq!(summary.rows, 2);
        assert_eq!(
            read_rows(&path),
            vec![("c".to_string(), 3), ("b".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_n_larger_than_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top100.csv");
        let table = FrequencyTable::tally(["a", "b"]);

        let summary = write_frequency_csv(&table, &path, Some(100)).unwrap();
        assert_eq!(summary.rows, 2);
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("excluded_known_words.csv");

        let summary = write_frequency_csv(&FrequencyTable::default(), &path, None).unwrap();
        assert_eq!(summary.rows, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Word,Frequency\n");
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("all_words.csv");

        let err = write_frequency_csv(&FrequencyTable::tally(["a"]), &path, None).unwrap_err();
        assert!(matches!(err, PdfVocabError::Io { .. }));
        assert_eq!(err.exit_code(), 4);
    }
}
