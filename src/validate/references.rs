//! Post-walk reference resolution.

use crate::error::Violation;
use crate::validate::location::Location;
use crate::validate::registry::IdentifierRegistry;

/// The field a reference was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceField {
    NextQuestion,
    Goto,
}

impl ReferenceField {
    pub fn name(self) -> &'static str {
        match self {
            ReferenceField::NextQuestion => "next_question",
            ReferenceField::Goto => "goto",
        }
    }
}

/// A cross-reference seen during the walk, checked once the walk is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReference {
    pub location: Location,
    pub field: ReferenceField,
    pub target: String,
}

/// Check every pending reference against the completed registry.
///
/// Order-independent: a target declared anywhere in the tree resolves.
pub fn check_references(
    references: &[PendingReference],
    registry: &IdentifierRegistry,
) -> Vec<Violation> {
    references
        .iter()
        .filter(|r| !registry.contains(&r.target))
        .map(|r| Violation::unresolved_reference(r.location.clone(), r.target.as_str()))
        .collect()
}
