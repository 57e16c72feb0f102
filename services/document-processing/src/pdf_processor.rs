//! PDF Processor
//!
//! Extracts the text layer of a PDF document, page by page.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use pdfvocab_utils::{PdfVocabError, PdfVocabResult};
use tracing::{debug, info};

/// PDF processing result
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// All pages in document order, one newline between pages.
    pub text: String,
    pub pages: Vec<PageContent>,
    pub metadata: PdfMetadata,
}

/// Single page content
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

impl PageContent {
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// PDF metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfMetadata {
    pub page_count: usize,
    pub text_page_count: usize,
    pub byte_size: usize,
}

/// PDF processor
pub struct PdfProcessor;

impl PdfProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Read and extract a PDF from disk.
    pub fn extract_file(&self, path: &Path) -> PdfVocabResult<PdfContent> {
        let data = std::fs::read(path)
            .map_err(|e| PdfVocabError::extraction(path, format!("Failed to read file: {}", e)))?;
        self.extract(path, &data)
    }

    /// Extract content from PDF bytes. `origin` only labels errors.
    pub fn extract(&self, origin: &Path, data: &[u8]) -> PdfVocabResult<PdfContent> {
        let raw_pages = extract_pages(origin, data)?;
        info!("Reading {} pages from {}", raw_pages.len(), origin.display());

        let pages: Vec<PageContent> = raw_pages
            .into_iter()
            .enumerate()
            .map(|(index, text)| PageContent {
                page_number: index + 1,
                text,
            })
            .collect();

        let text_page_count = pages.iter().filter(|page| page.has_text()).count();
        if text_page_count == 0 {
            return Err(PdfVocabError::extraction(
                origin,
                "PDF contains no extractable text (may be scanned/image-only)",
            ));
        }
        debug!(
            pages = pages.len(),
            text_pages = text_page_count,
            "Extracted text layer"
        );

        let text = pages
            .iter()
            .map(|page| page.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Ok(PdfContent {
            text,
            metadata: PdfMetadata {
                page_count: pages.len(),
                text_page_count,
                byte_size: data.len(),
            },
            pages,
        })
    }
}

impl Default for PdfProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// pdf-extract panics on some malformed input instead of returning an error,
/// so the call runs behind an unwind boundary.
fn extract_pages(origin: &Path, data: &[u8]) -> PdfVocabResult<Vec<String>> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(PdfVocabError::extraction(
            origin,
            format!("Failed to extract text from PDF: {}", e),
        )),
        Err(_) => Err(PdfVocabError::extraction(
            origin,
            "PDF extraction panicked (malformed document)",
        )),
    }
}
