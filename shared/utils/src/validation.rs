use crate::error::{PdfVocabError, PdfVocabResult};
use std::path::Path;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

pub fn validate_model<T: Validate>(model: &T) -> PdfVocabResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(PdfVocabError::config(error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages(None, errors, &mut messages);
    messages.join(", ")
}

fn collect_messages(prefix: Option<&str>, errors: &ValidationErrors, messages: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let field = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = match &error.code {
                        std::borrow::Cow::Borrowed("length") => {
                            format!("Length validation failed for field '{}'", field)
                        }
                        std::borrow::Cow::Borrowed("range") => {
                            format!("Value out of range for field '{}'", field)
                        }
                        std::borrow::Cow::Borrowed("font_range") => {
                            "min_font_size must not exceed max_font_size".to_string()
                        }
                        _ => format!("Validation failed for field '{}': {}", field, error.code),
                    };
                    messages.push(message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(Some(&field), nested, messages),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(Some(&format!("{}[{}]", field, index)), nested, messages);
                }
            }
        }
    }
}

/// Checks that the input document exists, is a regular file and carries a
/// `.pdf` extension.
pub fn validate_pdf_path(path: &Path) -> PdfVocabResult<()> {
    if !path.exists() {
        return Err(PdfVocabError::config(format!(
            "PDF file '{}' does not exist",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(PdfVocabError::config(format!(
            "'{}' is not a regular file",
            path.display()
        )));
    }

    validate_file_type(path, &["pdf"])
}

pub fn validate_file_type(path: &Path, allowed_types: &[&str]) -> PdfVocabResult<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !allowed_types.contains(&extension.to_lowercase().as_str()) {
        return Err(PdfVocabError::config(format!(
            "File type '{}' not allowed. Allowed types: {}",
            extension,
            allowed_types.join(", ")
        )));
    }

    Ok(())
}

pub fn validate_top_n(top_n: usize) -> PdfVocabResult<()> {
    if top_n == 0 {
        return Err(PdfVocabError::config("top_n must be a positive integer"));
    }

    Ok(())
}

/// Creates `dir` if needed and checks that files can be created inside it.
pub fn ensure_output_dir(dir: &Path) -> PdfVocabResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        PdfVocabError::io(dir, format!("Could not create output directory: {}", e))
    })?;

    let check = dir.join(".pdfvocab-write-check");
    std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&check)
        .map_err(|e| PdfVocabError::io(dir, format!("Output directory is not writable: {}", e)))?;
    std::fs::remove_file(&check)
        .map_err(|e| PdfVocabError::io(&check, format!("Could not remove write check: {}", e)))?;

    Ok(())
}
