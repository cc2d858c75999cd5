//! Error types shared across the parse and validate phases.

use std::path::PathBuf;

use serde::Serialize;

use crate::parse::DocumentFormat;
use crate::validate::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Validate,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Validate => write!(f, "Validate"),
        }
    }
}

/// Top-level failure of loading a questionnaire.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("[Parse] failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("[Parse] unsupported document format '{0}'")]
    UnsupportedFormat(String),
    #[error("[Parse] failed to parse {} questionnaire: {message}", .format.name())]
    Parse {
        format: DocumentFormat,
        message: String,
    },
    #[error("[Validate] {0}")]
    Validation(#[from] ValidationError),
}

impl QuestionnaireError {
    pub fn phase(&self) -> Phase {
        match self {
            QuestionnaireError::Io { .. }
            | QuestionnaireError::UnsupportedFormat(_)
            | QuestionnaireError::Parse { .. } => Phase::Parse,
            QuestionnaireError::Validation(_) => Phase::Validate,
        }
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            QuestionnaireError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Malformed node shape, raised while deserializing a tree node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("node declares both `question` and `switch`")]
    AmbiguousNode,
    #[error("node must declare either `question` or `switch`")]
    UnknownNode,
    #[error("{kind} node is missing `{field}`")]
    MissingField {
        field: &'static str,
        kind: &'static str,
    },
    #[error("`{field}` is not a field of a {kind} node")]
    ForeignField {
        field: &'static str,
        kind: &'static str,
    },
}

// =============================================================================
// STRUCTURAL VIOLATIONS
// =============================================================================

/// What went wrong, with the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ViolationKind {
    /// A second node declared an identifier already bound earlier in the walk.
    #[serde(rename = "duplicate_id")]
    DuplicateIdentifier { identifier: String },
    /// A `next_question` or `goto` names an identifier no node declares.
    #[serde(rename = "invalid_reference")]
    UnresolvedReference {
        #[serde(rename = "ref")]
        reference: String,
    },
}

impl ViolationKind {
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::DuplicateIdentifier { .. } => "duplicate_id",
            ViolationKind::UnresolvedReference { .. } => "invalid_reference",
        }
    }

    /// The identifier or reference that triggered the violation.
    pub fn value(&self) -> &str {
        match self {
            ViolationKind::DuplicateIdentifier { identifier } => identifier,
            ViolationKind::UnresolvedReference { reference } => reference,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    #[serde(flatten)]
    pub kind: ViolationKind,
    pub location: Location,
    pub message: String,
}

impl Violation {
    pub fn duplicate_identifier(location: Location, identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Violation {
            message: format!("Duplicate id '{}'", identifier),
            kind: ViolationKind::DuplicateIdentifier { identifier },
            location,
        }
    }

    pub fn unresolved_reference(location: Location, reference: impl Into<String>) -> Self {
        let reference = reference.into();
        Violation {
            message: format!("Unknown reference '{}'", reference),
            kind: ViolationKind::UnresolvedReference { reference },
            location,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} [{}]", self.location, self.message, self.code())
    }
}

/// Every structural violation found in one validation run. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Wrap the collected violations; `None` when there are none.
    pub fn new(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(ValidationError { violations })
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = if self.violations.len() == 1 { "" } else { "s" };
        write!(
            f,
            "{} validation error{} for Questionnaire",
            self.violations.len(),
            plural
        )?;
        for violation in &self.violations {
            write!(f, "\n{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
