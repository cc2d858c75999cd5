//! Structural validation of a questionnaire tree.
//!
//! One walk declares identifiers and collects references; a second pass resolves
//! the references against the completed registry. Every violation is reported.

pub mod location;
pub mod references;
pub mod registry;
pub mod walker;

use crate::error::{ValidationError, Violation};
use crate::parse::types::QuestionnaireDocument;
use location::Location;
use references::{PendingReference, ReferenceField};
use registry::{IdentifierMap, IdentifierRegistry};
use walker::{NodeAddress, TreeVisitor};

/// Validate the whole document. On success the identifier map is returned.
pub fn validate(document: &QuestionnaireDocument) -> Result<IdentifierMap, ValidationError> {
    let mut collector = Collector::default();
    walker::walk(&document.questions, &mut collector);

    let Collector {
        registry,
        references: pending,
        mut violations,
    } = collector;
    violations.extend(references::check_references(&pending, &registry));

    tracing::debug!(
        identifiers = registry.len(),
        references = pending.len(),
        violations = violations.len(),
        "questionnaire walk complete"
    );

    match ValidationError::new(violations) {
        Some(err) => {
            tracing::warn!(violations = err.len(), "questionnaire rejected");
            Err(err)
        }
        None => Ok(registry.freeze()),
    }
}

/// Fills the registry inline and defers references until the walk is done.
#[derive(Default)]
struct Collector {
    registry: IdentifierRegistry,
    references: Vec<PendingReference>,
    violations: Vec<Violation>,
}

impl TreeVisitor for Collector {
    fn declare(&mut self, location: Location, identifier: &str, address: &NodeAddress) {
        if let Err(violation) = self.registry.declare(location, identifier, address) {
            self.violations.push(violation);
        }
    }

    fn reference(&mut self, location: Location, field: ReferenceField, target: &str) {
        self.references.push(PendingReference {
            location,
            field,
            target: target.to_string(),
        });
    }
}
