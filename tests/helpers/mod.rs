use questionnaire::parse::*;

// =============================================================================
// Node builders
// =============================================================================

pub fn answer(label: &str) -> Answer {
    Answer {
        answer: label.into(),
        tooltip: String::new(),
        templates: vec![],
        goto: None,
        commentary: String::new(),
    }
}

pub fn answer_goto(label: &str, target: &str) -> Answer {
    Answer {
        goto: Some(target.into()),
        ..answer(label)
    }
}

/// A question with a single "Yes" answer and no explicit id.
pub fn question(text: &str) -> Question {
    Question {
        question: text.into(),
        id: None,
        variable: None,
        answers: vec![answer("Yes")],
        next_question: None,
    }
}

pub fn question_with_id(text: &str, id: &str) -> Question {
    Question {
        id: Some(id.into()),
        ..question(text)
    }
}

pub fn switch(expr: &str, id: Option<&str>, cases: Vec<Case>) -> Switch {
    Switch {
        switch: expr.into(),
        id: id.map(Into::into),
        cases,
    }
}

pub fn case(value: i64, questions: Vec<QuestionNode>) -> Case {
    Case {
        value: Some(value),
        questions,
    }
}

// =============================================================================
// Document builders
// =============================================================================

pub fn document(questions: Vec<QuestionNode>) -> QuestionnaireDocument {
    QuestionnaireDocument {
        initial_template: "fn main() {}".into(),
        initial_commentary: String::new(),
        feedback_url: None,
        questions,
    }
}

pub fn q(question: Question) -> QuestionNode {
    QuestionNode::Question(question)
}

pub fn s(switch: Switch) -> QuestionNode {
    QuestionNode::Switch(switch)
}
