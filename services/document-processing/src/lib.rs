//! pdfvocab Document Processing
//!
//! Text extraction from PDF documents and the vocabulary analysis that runs
//! on the extracted text: normalization, lemmatization, stopword removal and
//! frequency counting.

pub mod pdf_processor;
pub mod known_words;
pub mod stopwords;
pub mod lemmatizer;
pub mod normalizer;
pub mod counter;

pub use pdf_processor::{PdfContent, PdfMetadata, PdfProcessor, PageContent};
pub use known_words::{load_known_words, parse_known_words};
pub use stopwords::is_stopword;
pub use lemmatizer::{lemmatize, Lemmatizer};
pub use normalizer::{NormalizationStats, Normalizer};
pub use counter::{count_words, WordCounts};
