//! Rust types for the questionnaire document.
//!
//! These types are the serde target for questionnaire JSON/YAML. Tree nodes are
//! discriminated at parse time: a `question` key makes a [`Question`], a `switch`
//! key makes a [`Switch`].

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

// =============================================================================
// TOP-LEVEL DOCUMENT
// =============================================================================

/// A parsed, not yet validated questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireDocument {
    pub initial_template: String,
    #[serde(default)]
    pub initial_commentary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_url: Option<String>,
    pub questions: Vec<QuestionNode>,
}

// =============================================================================
// TREE NODES
// =============================================================================

/// A member of a question list: either a question or a multi-way switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawNode")]
pub enum QuestionNode {
    Question(Question),
    Switch(Switch),
}

impl QuestionNode {
    /// The identifier this node declares, if any.
    ///
    /// Questions always declare one: the explicit `id`, or their own question text.
    /// Switches only declare an explicit, non-empty `id`.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            QuestionNode::Question(q) => Some(q.identifier()),
            QuestionNode::Switch(s) => non_empty(&s.id),
        }
    }

    pub fn as_question(&self) -> Option<&Question> {
        match self {
            QuestionNode::Question(q) => Some(q),
            QuestionNode::Switch(_) => None,
        }
    }

    pub fn as_switch(&self) -> Option<&Switch> {
        match self {
            QuestionNode::Question(_) => None,
            QuestionNode::Switch(s) => Some(s),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            QuestionNode::Question(_) => "question",
            QuestionNode::Switch(_) => "switch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    pub answers: Vec<Answer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_question: Option<String>,
}

impl Question {
    /// Effective identifier: `id` when set, otherwise the question text itself.
    pub fn identifier(&self) -> &str {
        non_empty(&self.id).unwrap_or(&self.question)
    }

    pub fn next_question(&self) -> Option<&str> {
        non_empty(&self.next_question)
    }

    pub fn answer(&self, label: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.answer == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    pub switch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    pub questions: Vec<QuestionNode>,
}

// =============================================================================
// ANSWERS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    #[serde(default)]
    pub tooltip: String,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goto: Option<String>,
    #[serde(default)]
    pub commentary: String,
}

impl Answer {
    pub fn goto(&self) -> Option<&str> {
        non_empty(&self.goto)
    }
}

/// A code replacement applied when its answer is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub replacement: String,
    pub code: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// =============================================================================
// RAW NODE (deserialization only)
// =============================================================================

/// Superset of both node shapes, narrowed into a [`QuestionNode`] by `TryFrom`.
#[derive(Deserialize)]
struct RawNode {
    question: Option<String>,
    switch: Option<String>,
    id: Option<String>,
    variable: Option<String>,
    answers: Option<Vec<Answer>>,
    next_question: Option<String>,
    cases: Option<Vec<Case>>,
}

impl TryFrom<RawNode> for QuestionNode {
    type Error = SchemaError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        match (raw.question, raw.switch) {
            (Some(_), Some(_)) => Err(SchemaError::AmbiguousNode),
            (None, None) => Err(SchemaError::UnknownNode),
            (Some(question), None) => {
                if raw.cases.is_some() {
                    return Err(SchemaError::ForeignField {
                        field: "cases",
                        kind: "question",
                    });
                }
                let answers = raw.answers.ok_or(SchemaError::MissingField {
                    field: "answers",
                    kind: "question",
                })?;
                Ok(QuestionNode::Question(Question {
                    question,
                    id: raw.id,
                    variable: raw.variable,
                    answers,
                    next_question: raw.next_question,
                }))
            }
            (None, Some(switch)) => {
                let foreign = [
                    ("answers", raw.answers.is_some()),
                    ("variable", raw.variable.is_some()),
                    ("next_question", raw.next_question.is_some()),
                ];
                if let Some((field, _)) = foreign.into_iter().find(|(_, present)| *present) {
                    return Err(SchemaError::ForeignField {
                        field,
                        kind: "switch",
                    });
                }
                let cases = raw.cases.ok_or(SchemaError::MissingField {
                    field: "cases",
                    kind: "switch",
                })?;
                Ok(QuestionNode::Switch(Switch {
                    switch,
                    id: raw.id,
                    cases,
                }))
            }
        }
    }
}
