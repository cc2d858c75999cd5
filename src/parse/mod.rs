//! Parse phase: JSON/YAML → typed questionnaire document.

pub mod types;

pub use types::*;

use std::path::Path;

use crate::error::QuestionnaireError;

/// Text format of a questionnaire document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Infer the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DocumentFormat::Json => "JSON",
            DocumentFormat::Yaml => "YAML",
        }
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = QuestionnaireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            other => Err(QuestionnaireError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Deserialize a questionnaire document in the given format.
pub fn parse(source: &str, format: DocumentFormat) -> Result<QuestionnaireDocument, QuestionnaireError> {
    match format {
        DocumentFormat::Json => parse_json(source),
        DocumentFormat::Yaml => parse_yaml(source),
    }
}

pub fn parse_json(source: &str) -> Result<QuestionnaireDocument, QuestionnaireError> {
    serde_json::from_str(source).map_err(|e| QuestionnaireError::Parse {
        format: DocumentFormat::Json,
        message: e.to_string(),
    })
}

pub fn parse_yaml(source: &str) -> Result<QuestionnaireDocument, QuestionnaireError> {
    serde_yaml::from_str(source).map_err(|e| QuestionnaireError::Parse {
        format: DocumentFormat::Yaml,
        message: e.to_string(),
    })
}
