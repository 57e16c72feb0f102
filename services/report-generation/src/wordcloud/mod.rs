//! Word cloud rendering
//!
//! Layout is deterministic for a given font, but the rasterized PNG is not
//! guaranteed to be byte-identical across font files or library versions.

pub mod font;
pub mod layout;
pub mod palette;

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use imageproc::drawing::draw_text_mut;
use tracing::{debug, info};

use pdfvocab_models::RankedList;
use pdfvocab_utils::{PdfVocabError, PdfVocabResult, WordCloudConfig};

pub use layout::{layout_words, Layout, PlacedWord, TextMeasure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub path: PathBuf,
    pub words_placed: usize,
    pub words_skipped: usize,
}

pub struct WordCloudRenderer {
    config: WordCloudConfig,
}

impl WordCloudRenderer {
    pub fn new(config: WordCloudConfig) -> Self {
        Self { config }
    }

    /// Render the first `max_words` entries of `ranked` to a PNG at `output`.
    pub fn render(
        &self,
        ranked: &RankedList,
        max_words: usize,
        output: &Path,
    ) -> PdfVocabResult<RenderSummary> {
        if ranked.is_empty() || max_words == 0 {
            return Err(PdfVocabError::render(format!(
                "Nothing to render for {}: no words",
                output.display()
            )));
        }
        info!(
            "Generating word cloud from top {} words: {}",
            max_words.min(ranked.len()),
            output.display()
        );

        let background = palette::parse_hex_color(&self.config.background_color)?;
        let source = font::resolve_font(self.config.font_path.as_deref())?;
        let font = font::load_font(&source)?;

        let layout = layout_words(
            ranked,
            max_words,
            &self.config,
            &font::GlyphMeasure { font: &font },
        );
        if layout.placed.is_empty() {
            return Err(PdfVocabError::render(format!(
                "No word fits on a {}x{} canvas",
                self.config.width, self.config.height
            )));
        }
        if !layout.skipped.is_empty() {
            debug!(skipped = layout.skipped.len(), "Some words did not fit");
        }

        let mut canvas = RgbImage::from_pixel(self.config.width, self.config.height, background);
        let total = layout.placed.len();
        for word in &layout.placed {
            draw_text_mut(
                &mut canvas,
                palette::rank_color(word.rank, total),
                word.x,
                word.y,
                word.font_size,
                &font,
                &word.word,
            );
        }

        canvas
            .save_with_format(output, ImageFormat::Png)
            .map_err(|e| {
                PdfVocabError::render(format!("Failed to save {}: {}", output.display(), e))
            })?;
        info!("Word cloud image saved: {}", output.display());

        Ok(RenderSummary {
            path: output.to_path_buf(),
            words_placed: layout.placed.len(),
            words_skipped: layout.skipped.len(),
        })
    }
}
