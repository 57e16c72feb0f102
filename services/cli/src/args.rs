use clap::Parser;
use std::path::{Path, PathBuf};

use pdfvocab_report_generation::OutputFiles;

use crate::pipeline::RunOptions;

#[derive(Parser, Debug, Clone)]
#[command(name = "pdfvocab")]
#[command(
    version,
    about = "Extract words from a PDF, exclude known words, generate frequency CSVs and word clouds",
    long_about = None
)]
pub struct Cli {
    /// Path to the PDF file to process
    pub pdf_path: PathBuf,

    /// Number of top words to save and draw
    #[arg(long = "top_n", short = 'n', alias = "num_top_words", default_value_t = 100)]
    pub top_n: usize,

    /// Text file with one known word per line, excluded from the unknown-words report
    #[arg(long = "known_words_file", short = 'k')]
    pub known_words_file: Option<PathBuf>,

    /// Output directory (default: ./results/<pdf name without extension>)
    #[arg(long = "output_dir", short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Extra configuration file layered over config/default and config/local
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive, overrides logging.level
    #[arg(long = "log_level")]
    pub log_level: Option<String>,

    /// Only write the CSV reports
    #[arg(long = "no_wordcloud")]
    pub no_wordcloud: bool,
}

impl Cli {
    /// Resolve defaults relative to `cwd`.
    pub fn run_options(&self, cwd: &Path) -> RunOptions {
        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| OutputFiles::default_dir(cwd, &self.pdf_path));

        RunOptions {
            pdf_path: self.pdf_path.clone(),
            top_n: self.top_n,
            known_words_file: self.known_words_file.clone(),
            output_dir,
            render_wordclouds: !self.no_wordcloud,
        }
    }
}
