use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::{Validate, ValidationError};

use crate::error::{PdfVocabError, PdfVocabResult};
use crate::validation::validate_model;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    #[validate]
    pub analysis: AnalysisConfig,
    #[validate]
    pub wordcloud: WordCloudConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalysisConfig {
    /// Tokens shorter than this (in characters) are dropped after lemmatization.
    #[validate(range(min = 1, max = 64))]
    pub min_token_length: usize,
    /// Rejoin words split by a hyphen at a line break before tokenizing.
    pub join_hyphenated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_font_range"))]
pub struct WordCloudConfig {
    #[validate(range(min = 16, max = 16384))]
    pub width: u32,
    #[validate(range(min = 16, max = 16384))]
    pub height: u32,
    #[validate(length(min = 7, max = 7))]
    pub background_color: String,
    #[validate(range(min = 1.0))]
    pub max_font_size: f32,
    #[validate(range(min = 1.0))]
    pub min_font_size: f32,
    /// Font size decrement applied when a word does not fit.
    #[validate(range(min = 0.5))]
    pub font_step: f32,
    /// 0.0 ranks words purely by order, 1.0 scales purely by frequency.
    #[validate(range(min = 0.0, max = 1.0))]
    pub relative_scaling: f32,
    pub margin: u32,
    pub font_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

fn validate_font_range(config: &WordCloudConfig) -> Result<(), ValidationError> {
    if config.min_font_size > config.max_font_size {
        return Err(ValidationError::new("font_range"));
    }
    Ok(())
}

impl AppConfig {
    /// Load configuration layered over the built-in defaults.
    ///
    /// Sources, lowest precedence first: defaults, `config/default`,
    /// `config/local`, the explicit file (if any), `PDFVOCAB__*` variables.
    pub fn load(explicit: Option<&Path>) -> PdfVocabResult<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(PdfVocabError::config(format!(
                    "Configuration file '{}' does not exist",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: AppConfig = builder
            .add_source(
                Environment::with_prefix("PDFVOCAB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate_all()?;
        Ok(config)
    }

    pub fn validate_all(&self) -> PdfVocabResult<()> {
        validate_model(self)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            wordcloud: WordCloudConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_token_length: 3,
            join_hyphenated: true,
        }
    }
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 800,
            background_color: "#ffffff".to_string(),
            max_font_size: 200.0,
            min_font_size: 8.0,
            font_step: 2.0,
            relative_scaling: 0.5,
            margin: 4,
            font_path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
            file_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate_all().is_ok());
        assert_eq!(config.analysis.min_token_length, 3);
        assert_eq!(config.wordcloud.width, 1600);
        assert_eq!(config.wordcloud.height, 800);
    }

    #[test]
    fn test_zero_min_token_length_rejected() {
        let mut config = AppConfig::default();
        config.analysis.min_token_length = 0;

        let err = config.validate_all().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_inverted_font_range_rejected() {
        let mut config = AppConfig::default();
        config.wordcloud.min_font_size = 300.0;

        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[analysis]\nmin_token_length = 2\n\n[wordcloud]\nwidth = 400").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.analysis.min_token_length, 2);
        assert_eq!(config.wordcloud.width, 400);
        assert_eq!(config.wordcloud.height, 800);
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let err = AppConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, PdfVocabError::Config { .. }));
    }
}
