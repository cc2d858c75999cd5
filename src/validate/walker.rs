//! Depth-first, pre-order traversal of the question tree.
//!
//! The walker owns no state. It reports every identifier declaration and every
//! outgoing reference, in document order, to a [`TreeVisitor`].

use crate::parse::types::QuestionNode;
use crate::validate::location::Location;
use crate::validate::references::ReferenceField;

/// Receives the facts emitted by [`walk`].
pub trait TreeVisitor {
    /// A Question or Switch declares `identifier`; `location` points at its `id` field.
    fn declare(&mut self, location: Location, identifier: &str, address: &NodeAddress);

    /// A `next_question` or `goto` names `target`; `location` points at that field.
    fn reference(&mut self, location: Location, field: ReferenceField, target: &str);
}

/// Index path to a node: the root index, then one `(case, question)` pair per
/// switch descended through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeAddress(Vec<usize>);

impl NodeAddress {
    fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        NodeAddress(path)
    }

    /// Follow this address down from the root question list.
    pub fn resolve<'a>(&self, roots: &'a [QuestionNode]) -> Option<&'a QuestionNode> {
        let (first, rest) = self.0.split_first()?;
        let mut node = roots.get(*first)?;
        for pair in rest.chunks(2) {
            let &[case, index] = pair else {
                return None;
            };
            let QuestionNode::Switch(switch) = node else {
                return None;
            };
            node = switch.cases.get(case)?.questions.get(index)?;
        }
        Some(node)
    }

    /// Number of switches between the root list and this node.
    pub fn depth(&self) -> usize {
        self.0.len() / 2
    }
}

/// Walk the root question list, visiting every node exactly once.
pub fn walk<V: TreeVisitor + ?Sized>(roots: &[QuestionNode], visitor: &mut V) {
    walk_nodes(roots, &Location::root(), &NodeAddress::default(), visitor);
}

fn walk_nodes<V: TreeVisitor + ?Sized>(
    nodes: &[QuestionNode],
    loc: &Location,
    parent: &NodeAddress,
    visitor: &mut V,
) {
    for (i, node) in nodes.iter().enumerate() {
        let node_loc = loc.field("questions").index(i);
        let address = parent.child(i);

        match node {
            QuestionNode::Question(question) => {
                visitor.declare(node_loc.field("id"), question.identifier(), &address);

                if let Some(next) = question.next_question() {
                    visitor.reference(
                        node_loc.field("next_question"),
                        ReferenceField::NextQuestion,
                        next,
                    );
                }

                for (j, answer) in question.answers.iter().enumerate() {
                    if let Some(goto) = answer.goto() {
                        visitor.reference(
                            node_loc.field("answers").index(j).field("goto"),
                            ReferenceField::Goto,
                            goto,
                        );
                    }
                }
            }
            QuestionNode::Switch(switch) => {
                if let Some(id) = node.identifier() {
                    visitor.declare(node_loc.field("id"), id, &address);
                }

                // Nested lists get their own "questions" segment appended by the recursion.
                for (k, case) in switch.cases.iter().enumerate() {
                    walk_nodes(
                        &case.questions,
                        &node_loc.field("cases").index(k),
                        &address.child(k),
                        visitor,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::types::{Answer, Case, Question, Switch};

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        addresses: Vec<NodeAddress>,
    }

    impl TreeVisitor for Recorder {
        fn declare(&mut self, location: Location, identifier: &str, address: &NodeAddress) {
            self.events.push(format!("declare {} @ {}", identifier, location));
            self.addresses.push(address.clone());
        }

        fn reference(&mut self, location: Location, field: ReferenceField, target: &str) {
            self.events
                .push(format!("{} {} @ {}", field.name(), target, location));
        }
    }

    fn question(text: &str, goto: Option<&str>) -> QuestionNode {
        QuestionNode::Question(Question {
            question: text.into(),
            id: None,
            variable: None,
            answers: vec![Answer {
                answer: "Yes".into(),
                tooltip: String::new(),
                templates: vec![],
                goto: goto.map(Into::into),
                commentary: String::new(),
            }],
            next_question: None,
        })
    }

    fn nested_tree() -> Vec<QuestionNode> {
        vec![
            question("first", Some("s1")),
            QuestionNode::Switch(Switch {
                switch: "db".into(),
                id: Some("s1".into()),
                cases: vec![
                    Case {
                        value: Some(0),
                        questions: vec![question("a", None)],
                    },
                    Case {
                        value: Some(1),
                        questions: vec![question("b", Some("first"))],
                    },
                ],
            }),
        ]
    }

    #[test]
    fn emits_events_in_document_order() {
        let mut recorder = Recorder::default();
        walk(&nested_tree(), &mut recorder);
        assert_eq!(
            recorder.events,
            vec![
                "declare first @ questions.0.id",
                "goto s1 @ questions.0.answers.0.goto",
                "declare s1 @ questions.1.id",
                "declare a @ questions.1.cases.0.questions.0.id",
                "declare b @ questions.1.cases.1.questions.0.id",
                "goto first @ questions.1.cases.1.questions.0.answers.0.goto",
            ]
        );
    }

    #[test]
    fn addresses_resolve_back_to_their_nodes() {
        let tree = nested_tree();
        let mut recorder = Recorder::default();
        walk(&tree, &mut recorder);

        let resolved: Vec<Option<&str>> = recorder
            .addresses
            .iter()
            .map(|a| a.resolve(&tree).and_then(QuestionNode::identifier))
            .collect();
        assert_eq!(resolved, vec![Some("first"), Some("s1"), Some("a"), Some("b")]);
        assert_eq!(recorder.addresses[3].depth(), 1);
    }

    #[test]
    fn empty_tree_emits_nothing() {
        let mut recorder = Recorder::default();
        walk(&[], &mut recorder);
        assert!(recorder.events.is_empty());
        assert_eq!(NodeAddress::default().resolve(&[]), None);
    }
}
