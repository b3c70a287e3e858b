//! Entity status aggregation — the order-sensitive fold.
//!
//! This is deliberately NOT the lattice merge: the running status starts
//! at `Valid` and advances by an asymmetric rule, so the declared order
//! of an entity type's verifiable attributes is part of the observable
//! contract. The registry supplies that order explicitly (see
//! [`crate::registry`]).

use log::debug;

use crate::registry::{AttributeRegistry, Verifiable};
use crate::status::VerificationStatus;
use crate::time::micros_to_rfc3339;

use super::collection::Verification;
use super::resolve::resolve_attribute;

/// One step of the entity fold.
///
/// - `Valid` adopts the attribute status unconditionally (so the first
///   attribute processed always sets the running status);
/// - `Dubious` adopts the attribute status unless it is `Valid`;
/// - `NotVerified` and `Override` adopt only worse news (`Invalid` or
///   `Dubious`);
/// - `Invalid` is absorbing.
fn advance(state: VerificationStatus, attribute: VerificationStatus) -> VerificationStatus {
    match state {
        VerificationStatus::Valid => attribute,
        VerificationStatus::Dubious => {
            if attribute == VerificationStatus::Valid {
                VerificationStatus::Dubious
            } else {
                attribute
            }
        }
        VerificationStatus::NotVerified | VerificationStatus::Override => {
            if attribute == VerificationStatus::Invalid || attribute == VerificationStatus::Dubious
            {
                attribute
            } else {
                state
            }
        }
        VerificationStatus::Invalid => VerificationStatus::Invalid,
    }
}

/// Aggregate an entity-level status over an explicit attribute sequence.
///
/// Resolves each attribute against `verification` at `now` and folds the
/// results in the given order. An empty sequence is vacuously `Valid`.
pub fn resolve_declared<S: AsRef<str>>(
    verification: &Verification,
    attributes: &[S],
    now: u64,
) -> VerificationStatus {
    attributes.iter().fold(VerificationStatus::Valid, |state, attribute| {
        advance(state, resolve_attribute(verification, attribute.as_ref(), now))
    })
}

/// Aggregate the entity-level status of a verifiable entity.
///
/// The attribute sequence comes from the registry declaration for the
/// entity's type, in declared order. An undeclared entity type has no
/// verifiable attributes and is vacuously `Valid`.
pub fn resolve_entity<V: Verifiable + ?Sized>(
    entity: &V,
    registry: &AttributeRegistry,
    now: u64,
) -> VerificationStatus {
    resolve_declared(
        entity.verification(),
        registry.attributes_of(entity.entity_type()),
        now,
    )
}

/// Per-attribute entry in an [`EntityVerification`] report.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttribute {
    pub attribute: String,
    pub status: VerificationStatus,
}

/// Result of verifying an entity: the per-attribute breakdown in declared
/// order plus the aggregate status.
#[derive(Debug, Clone)]
pub struct EntityVerification {
    /// Registry key of the entity's type.
    pub entity_type: String,
    /// Resolved status of each declared attribute, in declared order.
    pub attributes: Vec<ResolvedAttribute>,
    /// Aggregate entity-level status.
    pub status: VerificationStatus,
    /// Convenience flag: `status == Valid`.
    pub is_valid: bool,
    /// Query time the resolution was performed at.
    pub resolved_at: u64,
}

/// Verify an entity and return the full per-attribute report.
///
/// Produces the same aggregate status as [`resolve_entity`].
pub fn verify_entity<V: Verifiable + ?Sized>(
    entity: &V,
    registry: &AttributeRegistry,
    now: u64,
) -> EntityVerification {
    let entity_type = entity.entity_type();
    let verification = entity.verification();

    let mut attributes = Vec::new();
    let mut status = VerificationStatus::Valid;
    for name in registry.attributes_of(entity_type) {
        let attribute_status = resolve_attribute(verification, name, now);
        status = advance(status, attribute_status);
        attributes.push(ResolvedAttribute {
            attribute: name.clone(),
            status: attribute_status,
        });
    }

    debug!(
        "entity type '{entity_type}' resolved to {status} at {}",
        micros_to_rfc3339(now)
    );

    EntityVerification {
        entity_type: entity_type.to_string(),
        attributes,
        status,
        is_valid: status == VerificationStatus::Valid,
        resolved_at: now,
    }
}
