//! Error types for veristate.
//!
//! The resolution engine itself never fails on normal input: empty
//! collections, empty attribute sets, items without expiry, and unknown
//! attribute names all resolve per the lattice rules. Errors exist only
//! at the declaration and serialization boundaries.

/// Veristate error types.
#[derive(Debug, thiserror::Error)]
pub enum VeristateError {
    #[error("Duplicate verifiable attribute '{attribute}' for entity type '{entity_type}'")]
    DuplicateAttribute {
        entity_type: String,
        attribute: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, VeristateError>;
