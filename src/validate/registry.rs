//! Identifier registry: the global id namespace shared by Questions and Switches.

use std::collections::HashMap;

use crate::error::Violation;
use crate::parse::types::QuestionNode;
use crate::validate::location::Location;
use crate::validate::walker::NodeAddress;

/// Mutable id → node bindings, filled while the tree is walked.
#[derive(Debug, Default)]
pub struct IdentifierRegistry {
    bindings: HashMap<String, NodeAddress>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `identifier` to the node at `address`.
    ///
    /// The first binding wins; a repeat is reported as a duplicate at `location`
    /// and leaves the existing binding in place.
    pub fn declare(
        &mut self,
        location: Location,
        identifier: &str,
        address: &NodeAddress,
    ) -> Result<(), Violation> {
        if self.bindings.contains_key(identifier) {
            return Err(Violation::duplicate_identifier(location, identifier));
        }
        self.bindings.insert(identifier.to_string(), address.clone());
        Ok(())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.bindings.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Stop accepting declarations.
    pub fn freeze(self) -> IdentifierMap {
        IdentifierMap {
            bindings: self.bindings,
        }
    }
}

/// Read-only identifier map published by a successful validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierMap {
    bindings: HashMap<String, NodeAddress>,
}

impl IdentifierMap {
    pub fn address(&self, identifier: &str) -> Option<&NodeAddress> {
        self.bindings.get(identifier)
    }

    /// Look `identifier` up in the tree the map was built from.
    pub fn get<'a>(&self, roots: &'a [QuestionNode], identifier: &str) -> Option<&'a QuestionNode> {
        self.address(identifier)?.resolve(roots)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.bindings.contains_key(identifier)
    }

    /// Declared identifiers, in no particular order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
