//! pdfvocab
//!
//! Extracts the vocabulary of a PDF and writes frequency reports and word
//! clouds for it.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use pdfvocab_cli::{run, Cli};
use pdfvocab_utils::{init_logging, AppConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("warning: {:#}", e);
    }
    if let Ok(json) = serde_json::to_string(&config) {
        debug!(config = %json, "Effective configuration");
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let options = cli.run_options(&cwd);

    match run(&options, &config) {
        Ok(report) => {
            info!(
                tokens = report.total_tokens,
                distinct = report.distinct_words,
                failed_outputs = report.failures.len(),
                "Done"
            );
            info!("Results saved in directory: {}", report.output_dir.display());
            if !report.is_complete() {
                eprintln!(
                    "warning: {} output file(s) could not be written",
                    report.failures.len()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
