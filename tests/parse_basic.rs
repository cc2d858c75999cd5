//! Integration tests for the Parse phase: document formats, node discrimination, round-trips.

use questionnaire::error::Phase;
use questionnaire::parse::{self, DocumentFormat, QuestionNode};
use questionnaire::{Questionnaire, QuestionnaireError};

#[test]
fn parse_yaml_fixture() {
    let yaml = include_str!("fixtures/project_setup.yaml");
    let doc = parse::parse_yaml(yaml).expect("Should parse successfully");
    assert_eq!(doc.questions.len(), 4);
    assert_eq!(doc.feedback_url.as_deref(), Some("https://example.com/feedback"));
    assert!(doc.initial_template.contains("{{name}}"));

    let kinds: Vec<&str> = doc.questions.iter().map(QuestionNode::kind).collect();
    assert_eq!(kinds, vec!["question", "switch", "question", "question"]);

    let first = doc.questions[0].as_question().expect("Should be a question");
    assert_eq!(first.variable.as_deref(), Some("kind"));
    assert_eq!(first.answers[0].tooltip, "An HTTP server");
    assert_eq!(first.answers[0].templates[0].code, "axum = \"0.8\"");
    assert_eq!(first.answers[1].commentary, "Adds argument parsing.");
}

#[test]
fn parse_json_defaults() {
    let json = include_str!("fixtures/project_setup.json");
    let doc = parse::parse_json(json).expect("Should parse");
    assert_eq!(doc.initial_commentary, "");
    assert_eq!(doc.feedback_url, None);

    let readme = doc.questions[1].as_question().expect("Should be a question");
    assert_eq!(readme.id, None);
    assert_eq!(readme.answers[1].tooltip, "");
    assert!(readme.answers[1].templates.is_empty());
    assert_eq!(readme.answers[1].goto, None);
}

#[test]
fn nested_switch_without_value_parses() {
    let yaml = include_str!("fixtures/project_setup.yaml");
    let doc = parse::parse_yaml(yaml).expect("Should parse");
    let storage = doc.questions[1].as_switch().expect("Should be a switch");
    assert_eq!(storage.cases[0].value, Some(0));

    let inner = storage.cases[1].questions[0]
        .as_switch()
        .expect("Should be a nested switch");
    assert_eq!(inner.id, None);
    assert_eq!(inner.cases[0].value, None);
}

#[test]
fn parse_round_trip() {
    let yaml = include_str!("fixtures/project_setup.yaml");
    let doc = parse::parse_yaml(yaml).expect("Should parse");
    let serialized = serde_json::to_string(&doc).expect("Should serialize");
    let doc2 = parse::parse_json(&serialized).expect("Should parse again");
    assert_eq!(doc.questions, doc2.questions);
    assert_eq!(doc.initial_template, doc2.initial_template);
}

#[test]
fn parse_invalid_json_returns_error() {
    let err = parse::parse_json("not valid json").unwrap_err();
    assert_eq!(err.phase(), Phase::Parse);
    assert!(matches!(
        err,
        QuestionnaireError::Parse {
            format: DocumentFormat::Json,
            ..
        }
    ));
}

#[test]
fn node_with_both_shapes_is_rejected() {
    let json = r#"{"initial_template":"","questions":[
        {"question":"A","switch":"x","answers":[],"cases":[]}
    ]}"#;
    let err = parse::parse_json(json).unwrap_err();
    assert!(
        err.to_string().contains("both `question` and `switch`"),
        "{err}"
    );
}

#[test]
fn node_with_neither_shape_is_rejected() {
    let json = r#"{"initial_template":"","questions":[{"id":"lonely"}]}"#;
    let err = parse::parse_json(json).unwrap_err();
    assert!(err.to_string().contains("either `question` or `switch`"), "{err}");
}

#[test]
fn missing_and_foreign_fields_are_rejected() {
    let missing = r#"{"initial_template":"","questions":[{"question":"A"}]}"#;
    let err = parse::parse_json(missing).unwrap_err();
    assert!(err.to_string().contains("question node is missing `answers`"), "{err}");

    let foreign = "initial_template: ''\nquestions:\n  - switch: x\n    next_question: y\n    cases: []\n";
    let err = parse::parse_yaml(foreign).unwrap_err();
    assert!(
        err.to_string().contains("`next_question` is not a field of a switch node"),
        "{err}"
    );
}

#[test]
fn missing_initial_template_is_rejected() {
    let err = parse::parse_json(r#"{"questions":[]}"#).unwrap_err();
    assert!(err.to_string().contains("initial_template"), "{err}");
}

#[test]
fn format_from_path_and_name() {
    use std::path::Path;
    assert_eq!(DocumentFormat::from_path(Path::new("a.json")), Some(DocumentFormat::Json));
    assert_eq!(DocumentFormat::from_path(Path::new("a.YML")), Some(DocumentFormat::Yaml));
    assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), Some(DocumentFormat::Yaml));
    assert_eq!(DocumentFormat::from_path(Path::new("a")), None);
    assert_eq!("yaml".parse::<DocumentFormat>().unwrap(), DocumentFormat::Yaml);
    assert!("toml".parse::<DocumentFormat>().is_err());
}

#[test]
fn load_fixture_from_disk() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/project_setup.yaml");
    let questionnaire = Questionnaire::load(path).expect("Should load");
    assert_eq!(
        questionnaire.initial_commentary(),
        "Answer a few questions to scaffold the project."
    );
    assert!(questionnaire.get_node("Cache results?").is_some());
}
