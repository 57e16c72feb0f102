//! pdfvocab Report Generation
//!
//! Frequency CSV reports and word cloud images for an analysed document.

pub mod csv_report;
pub mod output;
pub mod wordcloud;

pub use csv_report::{write_frequency_csv, write_ranked_csv, ReportSummary, CSV_HEADER};
pub use output::OutputFiles;
pub use wordcloud::{RenderSummary, WordCloudRenderer};
