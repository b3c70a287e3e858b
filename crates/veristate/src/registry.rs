//! Attribute registry — declared verifiable attributes per entity type.
//!
//! Replaces runtime attribute discovery with an explicit declaration: a
//! pure mapping from entity type to an ordered sequence of attribute
//! names. Order is significant because entity aggregation folds the
//! attributes in declared order; deriving the sequence from an unordered
//! collection would make entity-level results non-deterministic across
//! runs and platforms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VeristateError};
use crate::verification::Verification;

/// Mapping from entity type to its ordered verifiable attribute names.
///
/// Lookups are stable across calls; declaring a type again replaces its
/// previous attribute sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeRegistry {
    types: BTreeMap<String, Vec<String>>,
}

impl AttributeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Declare the ordered verifiable attributes of an entity type.
    ///
    /// Any two attribute names for the same type must be distinct;
    /// duplicates are rejected. Re-declaring a type replaces its previous
    /// declaration wholesale.
    pub fn declare<I, S>(&mut self, entity_type: impl Into<String>, attributes: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entity_type = entity_type.into();
        let mut names: Vec<String> = Vec::new();
        for name in attributes {
            let name = name.into();
            if names.contains(&name) {
                return Err(VeristateError::DuplicateAttribute {
                    entity_type,
                    attribute: name,
                });
            }
            names.push(name);
        }
        self.types.insert(entity_type, names);
        Ok(())
    }

    /// The declared attribute sequence of an entity type, in declared
    /// order. Unknown types have no verifiable attributes.
    pub fn attributes_of(&self, entity_type: &str) -> &[String] {
        self.types
            .get(entity_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Has this entity type been declared?
    pub fn is_declared(&self, entity_type: &str) -> bool {
        self.types.contains_key(entity_type)
    }

    /// Iterate over the declared entity types.
    pub fn entity_types(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

/// Capability of being verified: an entity produces its claim collection
/// and names its type, under which the registry holds the declared
/// verifiable attributes.
pub trait Verifiable {
    /// Registry key identifying this entity's type.
    fn entity_type(&self) -> &str;

    /// The entity's claim collection.
    fn verification(&self) -> &Verification;
}
