//! The validated questionnaire.

use std::path::Path;

use crate::error::{QuestionnaireError, ValidationError};
use crate::parse::{self, DocumentFormat, Question, QuestionNode, QuestionnaireDocument};
use crate::validate::{self, registry::IdentifierMap};

/// A questionnaire whose structure has been checked.
///
/// Only constructed through a successful validation, so every identifier is unique
/// and every `next_question`/`goto` resolves. Immutable afterwards.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    document: QuestionnaireDocument,
    identifiers: IdentifierMap,
}

impl Questionnaire {
    /// Validate `document`. A rejected document yields every violation at once.
    pub fn from_document(document: QuestionnaireDocument) -> Result<Self, ValidationError> {
        let identifiers = validate::validate(&document)?;
        Ok(Questionnaire {
            document,
            identifiers,
        })
    }

    pub fn parse(source: &str, format: DocumentFormat) -> Result<Self, QuestionnaireError> {
        let document = parse::parse(source, format)?;
        Ok(Self::from_document(document)?)
    }

    pub fn from_json(source: &str) -> Result<Self, QuestionnaireError> {
        Self::parse(source, DocumentFormat::Json)
    }

    pub fn from_yaml(source: &str) -> Result<Self, QuestionnaireError> {
        Self::parse(source, DocumentFormat::Yaml)
    }

    /// Read, parse and validate a document; the format comes from the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuestionnaireError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path).ok_or_else(|| {
            QuestionnaireError::UnsupportedFormat(path.display().to_string())
        })?;
        tracing::debug!(path = %path.display(), format = format.name(), "loading questionnaire");

        let source = std::fs::read_to_string(path).map_err(|source| QuestionnaireError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source, format)
    }

    /// Look up a Question or Switch by identifier.
    pub fn get_node(&self, identifier: &str) -> Option<&QuestionNode> {
        self.identifiers.get(&self.document.questions, identifier)
    }

    pub fn get_question(&self, identifier: &str) -> Option<&Question> {
        self.get_node(identifier)?.as_question()
    }

    /// Run the structural check again on the held document.
    pub fn revalidate(&self) -> Result<IdentifierMap, ValidationError> {
        validate::validate(&self.document)
    }

    pub fn identifiers(&self) -> &IdentifierMap {
        &self.identifiers
    }

    pub fn initial_template(&self) -> &str {
        &self.document.initial_template
    }

    pub fn initial_commentary(&self) -> &str {
        &self.document.initial_commentary
    }

    pub fn feedback_url(&self) -> Option<&str> {
        self.document.feedback_url.as_deref()
    }

    pub fn questions(&self) -> &[QuestionNode] {
        &self.document.questions
    }

    pub fn document(&self) -> &QuestionnaireDocument {
        &self.document
    }

    pub fn into_document(self) -> QuestionnaireDocument {
        self.document
    }
}

impl TryFrom<QuestionnaireDocument> for Questionnaire {
    type Error = ValidationError;

    fn try_from(document: QuestionnaireDocument) -> Result<Self, Self::Error> {
        Questionnaire::from_document(document)
    }
}
