use std::path::PathBuf;

use ab_glyph::{FontArc, PxScale};
use imageproc::drawing::text_size;
use tracing::debug;

use pdfvocab_utils::{PdfVocabError, PdfVocabResult};

use super::layout::TextMeasure;

/// Checked in order when no font is configured.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// DejaVu Sans, shipped with the crate (Bitstream Vera license, see
/// `assets/DejaVuSans-LICENSE.txt`).
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Bundled,
}

/// A configured font must exist. Without one, the first installed system
/// font wins and the bundled font is the last resort.
pub fn resolve_font(configured: Option<&str>) -> PdfVocabResult<FontSource> {
    if let Some(path) = configured {
        let path = PathBuf::from(path);
        if !path.is_file() {
            return Err(PdfVocabError::render(format!(
                "Configured font '{}' does not exist",
                path.display()
            )));
        }
        return Ok(FontSource::File(path));
    }

    Ok(SYSTEM_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
        .map(FontSource::File)
        .unwrap_or(FontSource::Bundled))
}

pub fn load_font(source: &FontSource) -> PdfVocabResult<FontArc> {
    match source {
        FontSource::File(path) => {
            let bytes = std::fs::read(path).map_err(|e| {
                PdfVocabError::render(format!("Failed to read font '{}': {}", path.display(), e))
            })?;
            let font = FontArc::try_from_vec(bytes).map_err(|e| {
                PdfVocabError::render(format!("Invalid font '{}': {}", path.display(), e))
            })?;
            debug!("Loaded font {}", path.display());
            Ok(font)
        }
        FontSource::Bundled => {
            let font = FontArc::try_from_slice(BUNDLED_FONT)
                .map_err(|e| PdfVocabError::render(format!("Invalid bundled font: {}", e)))?;
            debug!("Loaded bundled font");
            Ok(font)
        }
    }
}

pub struct GlyphMeasure<'a> {
    pub font: &'a FontArc,
}

impl TextMeasure for GlyphMeasure<'_> {
    fn measure(&self, text: &str, font_size: f32) -> (u32, u32) {
        text_size(PxScale::from(font_size), self.font, text)
    }
}
