//! Run Pipeline
//!
//! extract -> normalize -> count -> report. Configuration and extraction
//! failures abort the run; each CSV report and word cloud is written
//! independently and a failure there is only recorded.

use std::path::{Path, PathBuf};

use tracing::info;

use pdfvocab_document_processing::{
    count_words, load_known_words, Normalizer, PdfProcessor, WordCounts,
};
use pdfvocab_models::{FrequencyTable, KnownWords};
use pdfvocab_report_generation::{
    write_frequency_csv, OutputFiles, RenderSummary, ReportSummary, WordCloudRenderer,
};
use pdfvocab_utils::{
    ensure_output_dir, log_warn, validate_pdf_path, validate_top_n, AnalysisConfig, AppConfig,
    PdfVocabError, PdfVocabResult,
};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub pdf_path: PathBuf,
    pub top_n: usize,
    pub known_words_file: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub render_wordclouds: bool,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_dir: PathBuf,
    pub total_tokens: u64,
    pub distinct_words: usize,
    pub known_words: usize,
    pub unknown_words: usize,
    pub reports: Vec<ReportSummary>,
    pub clouds: Vec<RenderSummary>,
    /// Per-file failures that did not stop the run.
    pub failures: Vec<PdfVocabError>,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Normalize `text` and count it against `known`.
pub fn analyze_text(text: &str, known: &KnownWords, config: &AnalysisConfig) -> WordCounts {
    let tokens = Normalizer::new(config).normalize(text);
    count_words(&tokens, known)
}

pub fn run(options: &RunOptions, config: &AppConfig) -> PdfVocabResult<RunReport> {
    validate_pdf_path(&options.pdf_path)?;
    validate_top_n(options.top_n)?;

    info!("Processing PDF: {}", options.pdf_path.display());
    let known = load_known_words(options.known_words_file.as_deref())?;
    let content = PdfProcessor::new().extract_file(&options.pdf_path)?;

    info!("Lemmatizing and normalizing words");
    let counts = analyze_text(&content.text, &known, &config.analysis);
    info!(
        tokens = counts.token_count(),
        distinct = counts.all.len(),
        known = counts.known.len(),
        unknown = counts.unknown.len(),
        "Counted words"
    );

    ensure_output_dir(&options.output_dir)?;

    let files = OutputFiles::new(&options.output_dir, options.top_n);
    let renderer = WordCloudRenderer::new(config.wordcloud.clone());
    let mut outputs = Outputs::default();

    outputs.report(write_frequency_csv(&counts.unknown, &files.unknown_csv(), Some(options.top_n)));
    if options.render_wordclouds {
        outputs.cloud(render(&renderer, &counts.unknown, options.top_n, &files.unknown_cloud()));
    }

    outputs.report(write_frequency_csv(&counts.known, &files.excluded_known_csv(), None));
    outputs.report(write_frequency_csv(&counts.all, &files.all_words_csv(), None));
    if options.render_wordclouds {
        outputs.cloud(render(&renderer, &counts.all, options.top_n, &files.all_words_cloud()));
    }

    Ok(RunReport {
        output_dir: options.output_dir.clone(),
        total_tokens: counts.token_count(),
        distinct_words: counts.all.len(),
        known_words: counts.known.len(),
        unknown_words: counts.unknown.len(),
        reports: outputs.reports,
        clouds: outputs.clouds,
        failures: outputs.failures,
    })
}

fn render(
    renderer: &WordCloudRenderer,
    table: &FrequencyTable,
    top_n: usize,
    path: &Path,
) -> PdfVocabResult<RenderSummary> {
    renderer.render(&table.top(top_n), top_n, path)
}

#[derive(Default)]
struct Outputs {
    reports: Vec<ReportSummary>,
    clouds: Vec<RenderSummary>,
    failures: Vec<PdfVocabError>,
}

impl Outputs {
    fn report(&mut self, result: PdfVocabResult<ReportSummary>) {
        match result {
            Ok(summary) => self.reports.push(summary),
            Err(e) => self.fail(e),
        }
    }

    fn cloud(&mut self, result: PdfVocabResult<RenderSummary>) {
        match result {
            Ok(summary) => self.clouds.push(summary),
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: PdfVocabError) {
        log_warn!("Skipping output: {}", error);
        self.failures.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(min_token_length: usize) -> AnalysisConfig {
        AnalysisConfig {
            min_token_length,
            join_hyphenated: true,
        }
    }

    #[test]
    fn test_analyze_scenario() {
        let counts = analyze_text(
            "Cats cats run running. The cat ran.",
            &KnownWords::empty(),
            &analysis(2),
        );

        let ranked = counts.all.ranked();
        let rows: Vec<(&str, u64)> = ranked.iter().map(|e| (e.word.as_str(), e.count)).collect();
        assert_eq!(rows, vec![("cat", 3), ("run", 3)]);
        assert_eq!(counts.unknown, counts.all);
        assert!(counts.known.is_empty());
    }

    #[test]
    fn test_analyze_with_known_words() {
        let known = KnownWords::from_words(["run"]);
        let counts = analyze_text("Cats cats run running. The cat ran.", &known, &analysis(2));
        assert_eq!(counts.known.get("run"), Some(3));
        assert_eq!(counts.unknown.get("cat"), Some(3));
        assert_eq!(counts.unknown.get("run"), None);
    }

    #[test]
    fn test_inflected_forms_share_known_lemma() {
        let known = KnownWords::from_words(["include", "provide"]);
        let counts = analyze_text(
            "We include it. Including this, it was included and provided.",
            &known,
            &AnalysisConfig::default(),
        );

        let rows: Vec<(String, u64)> = counts
            .all
            .ranked()
            .iter()
            .map(|e| (e.word.clone(), e.count))
            .collect();
        assert_eq!(rows, vec![("include".to_string(), 3), ("provide".to_string(), 1)]);
        assert_eq!(counts.known, counts.all);
        assert!(counts.unknown.is_empty());
    }

    #[test]
    fn test_missing_pdf_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("results").join("missing");
        let options = RunOptions {
            pdf_path: dir.path().join("missing.pdf"),
            top_n: 10,
            known_words_file: None,
            output_dir: output_dir.clone(),
            render_wordclouds: false,
        };

        let err = run(&options, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(!output_dir.exists());
    }

    #[test]
    fn test_zero_top_n_is_config_error() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        let options = RunOptions {
            pdf_path: file.path().to_path_buf(),
            top_n: 0,
            known_words_file: None,
            output_dir: file.path().with_extension("out"),
            render_wordclouds: false,
        };

        let err = run(&options, &AppConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}
