//! Captured user answers, keyed by question identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parse::QuestionNode;
use crate::questionnaire::Questionnaire;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("no question with id '{0}'")]
    UnknownQuestion(String),
    #[error("'{0}' is a switch, not a question")]
    NotAQuestion(String),
    #[error("question '{question}' has no answer '{answer}'")]
    UnknownAnswer { question: String, answer: String },
}

/// One answer given to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnswers {
    #[serde(default)]
    pub answers: Vec<QuestionAnswer>,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Default for QuestionAnswers {
    fn default() -> Self {
        QuestionAnswers {
            answers: Vec::new(),
            timestamp: Utc::now(),
        }
    }
}

impl QuestionAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `answer` for the question identified by `question_id`.
    pub fn record(
        &mut self,
        questionnaire: &Questionnaire,
        question_id: &str,
        answer: &str,
        value: i64,
    ) -> Result<&QuestionAnswer, AnswerError> {
        let question = match questionnaire.get_node(question_id) {
            Some(QuestionNode::Question(q)) => q,
            Some(QuestionNode::Switch(_)) => {
                return Err(AnswerError::NotAQuestion(question_id.to_string()));
            }
            None => return Err(AnswerError::UnknownQuestion(question_id.to_string())),
        };
        if question.answer(answer).is_none() {
            return Err(AnswerError::UnknownAnswer {
                question: question_id.to_string(),
                answer: answer.to_string(),
            });
        }

        self.answers.push(QuestionAnswer {
            question: question_id.to_string(),
            answer: answer.to_string(),
            value,
        });
        Ok(&self.answers[self.answers.len() - 1])
    }

    /// The most recent answer recorded for `question_id`.
    pub fn latest(&self, question_id: &str) -> Option<&QuestionAnswer> {
        self.answers.iter().rev().find(|a| a.question == question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
