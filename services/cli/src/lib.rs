//! pdfvocab command line driver
//!
//! Argument parsing and the single-pass pipeline that ties extraction,
//! analysis and report generation together.

pub mod args;
pub mod pipeline;

pub use args::Cli;
pub use pipeline::{analyze_text, run, RunOptions, RunReport};
