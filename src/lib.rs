pub mod answers;
pub mod error;
pub mod flow;
pub mod parse;
pub mod questionnaire;
pub mod validate;
pub mod wasm;

pub use error::{QuestionnaireError, ValidationError, Violation, ViolationKind};
pub use questionnaire::Questionnaire;
