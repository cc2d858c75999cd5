//! petgraph-based jump graph over a validated questionnaire.
//!
//! One graph node per published identifier; one edge per `next_question` or
//! `goto`, from the question that carries it to the node it names.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::questionnaire::Questionnaire;
use crate::validate::location::Location;
use crate::validate::references::ReferenceField;
use crate::validate::walker::{self, NodeAddress, TreeVisitor};

pub struct FlowGraph {
    pub graph: DiGraph<String, ReferenceField>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl FlowGraph {
    pub fn build(questionnaire: &Questionnaire) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        let mut ids: Vec<&str> = questionnaire.identifiers().identifiers().collect();
        ids.sort_unstable();
        for id in ids {
            let idx = graph.add_node(id.to_string());
            node_indices.insert(id.to_string(), idx);
        }

        let mut jumps = JumpCollector::default();
        walker::walk(questionnaire.questions(), &mut jumps);

        for (source, field, target) in jumps.edges {
            // Validation guarantees both ends are declared.
            if let (Some(&s), Some(&t)) = (node_indices.get(&source), node_indices.get(&target)) {
                graph.add_edge(s, t, field);
            }
        }

        FlowGraph {
            graph,
            node_indices,
        }
    }

    /// Distinct identifiers `id` can jump to, sorted.
    pub fn jump_targets(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Distinct identifiers that jump to `id`, sorted.
    pub fn referrers(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Incoming)
    }

    /// The fields through which `id` jumps to `target`.
    pub fn jump_fields(&self, id: &str, target: &str) -> Vec<ReferenceField> {
        let (Some(&s), Some(&t)) = (self.node_indices.get(id), self.node_indices.get(target))
        else {
            return vec![];
        };
        self.graph
            .edges_connecting(s, t)
            .map(|e| *e.weight())
            .collect()
    }

    pub fn has_jump_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    fn neighbors(&self, id: &str, direction: Direction) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(id) else {
            return vec![];
        };
        let mut ids: Vec<&str> = self
            .graph
            .edges_directed(idx, direction)
            .map(|e| match direction {
                Direction::Outgoing => e.target(),
                Direction::Incoming => e.source(),
            })
            .map(|n| self.graph[n].as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// References always follow the declaration of the question that carries them.
#[derive(Default)]
struct JumpCollector {
    current: Option<String>,
    edges: Vec<(String, ReferenceField, String)>,
}

impl TreeVisitor for JumpCollector {
    fn declare(&mut self, _location: Location, identifier: &str, _address: &NodeAddress) {
        self.current = Some(identifier.to_string());
    }

    fn reference(&mut self, _location: Location, field: ReferenceField, target: &str) {
        if let Some(source) = &self.current {
            self.edges
                .push((source.clone(), field, target.to_string()));
        }
    }
}
