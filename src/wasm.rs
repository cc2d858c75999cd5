//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::{QuestionnaireError, Violation};
use crate::parse::DocumentFormat;
use crate::questionnaire::Questionnaire;

/// Parse and validate a questionnaire document (`format` is "json" or "yaml").
/// Returns a JSON object tagged by `status`.
#[wasm_bindgen]
pub fn validate_questionnaire(source: &str, format: &str) -> JsValue {
    let result = validate_questionnaire_inner(source, format);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_questionnaire_inner(source: &str, format: &str) -> ValidationReport {
    let questionnaire = format
        .parse::<DocumentFormat>()
        .and_then(|format| Questionnaire::parse(source, format));

    match questionnaire {
        Ok(q) => {
            let mut identifiers: Vec<String> =
                q.identifiers().identifiers().map(String::from).collect();
            identifiers.sort_unstable();
            ValidationReport::Valid { identifiers }
        }
        Err(QuestionnaireError::Validation(err)) => ValidationReport::Invalid {
            violations: err.into_violations(),
        },
        Err(other) => ValidationReport::ParseError {
            message: other.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize)]
#[serde(tag = "status")]
enum ValidationReport {
    #[serde(rename = "valid")]
    Valid { identifiers: Vec<String> },
    #[serde(rename = "invalid")]
    Invalid { violations: Vec<Violation> },
    #[serde(rename = "parseError")]
    ParseError { message: String },
}
