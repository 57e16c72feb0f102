use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PdfVocabError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Extraction error: {path} - {message}")]
    Extraction { path: String, message: String },

    #[error("I/O error: {path} - {message}")]
    Io { path: String, message: String },

    #[error("Render error: {message}")]
    Render { message: String },
}

impl PdfVocabError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn extraction(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Extraction {
            path: path.as_ref().display().to_string(),
            message: message.into(),
        }
    }

    pub fn io(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Extraction { .. } => "EXTRACTION_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::Render { .. } => "RENDER_ERROR",
        }
    }

    /// Process exit code reported by the command line driver.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config { .. } => 2,
            Self::Extraction { .. } => 3,
            Self::Io { .. } => 4,
            Self::Render { .. } => 5,
        }
    }
}

pub type PdfVocabResult<T> = Result<T, PdfVocabError>;

// Conversion from common error types
impl From<config::ConfigError> for PdfVocabError {
    fn from(error: config::ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
