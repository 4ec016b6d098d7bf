//! RL-003: Resume record loading and validation.
//!
//! Reads a resume from JSON or YAML (chosen by extension) and validates the
//! few constraints serde cannot express:
//! - The person's name must not be blank
//! - Text fields should not arrive pre-escaped (lint, non-fatal)

use super::escape::looks_escaped;
use super::types::ResumeRecord;
use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Input encoding of a resume record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
}

impl RecordFormat {
    /// `.yaml`/`.yml` select YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                RecordFormat::Yaml
            }
            _ => RecordFormat::Json,
        }
    }
}

/// Validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Parse a resume record file from disk.
pub fn parse_record_file(path: &Path) -> Result<ResumeRecord> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format = RecordFormat::from_path(path);
    debug!(path = %path.display(), ?format, bytes = content.len(), "parsing resume record");
    parse_record(&content, format).map_err(|message| Error::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse a resume record from a string.
pub fn parse_record(content: &str, format: RecordFormat) -> std::result::Result<ResumeRecord, String> {
    match format {
        RecordFormat::Json => {
            serde_json::from_str(content).map_err(|e| format!("JSON parse error: {}", e))
        }
        RecordFormat::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| format!("YAML parse error: {}", e))
        }
    }
}

/// Validate a parsed record. Returns a list of errors (empty = valid).
pub fn validate_record(record: &ResumeRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if record.personal_info.name.trim().is_empty() {
        errors.push(ValidationError {
            message: "personal_info.name must not be empty".to_string(),
        });
    }

    for (i, lang) in record.additional_information.languages.iter().enumerate() {
        if lang.language.trim().is_empty() {
            errors.push(ValidationError {
                message: format!("additional_information.languages[{}] has no language", i),
            });
        }
    }

    errors
}

/// Report text fields that already contain LaTeX escapes.
///
/// These would be escaped a second time and render with visible backslashes.
pub fn lint_record(record: &ResumeRecord) -> Vec<String> {
    record
        .text_fields()
        .into_iter()
        .filter(|(_, value)| looks_escaped(value))
        .map(|(path, _)| format!("{} appears already escaped; it will be escaped again", path))
        .collect()
}

/// Parse, validate and lint a record file in one step.
pub fn load_record(path: &Path) -> Result<(ResumeRecord, Vec<String>)> {
    let record = parse_record_file(path)?;
    let errors = validate_record(&record);
    if !errors.is_empty() {
        return Err(Error::InvalidRecord(
            errors.into_iter().map(|e| e.message).collect(),
        ));
    }
    let warnings = lint_record(&record);
    Ok((record, warnings))
}
