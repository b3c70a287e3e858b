//! Veristate — deterministic trust status resolution over time-boxed
//! verification claims.
//!
//! Independently issued claims assert a [`VerificationStatus`] for named
//! attributes of an entity, each bounded by an optional expiry. The
//! engine folds all active claims covering an attribute with a
//! commutative status lattice merge, then folds the per-attribute
//! results — in the entity type's declared attribute order — into one
//! entity-level status.
//!
//! The engine is pure and synchronous: resolution takes the query time
//! as a parameter, performs no I/O, and never fails on normal input.

pub mod claim;
pub mod error;
pub mod registry;
pub mod status;
pub mod time;
pub mod verification;

// Re-export primary types
pub use claim::{ClaimKind, VerificationItem, VerificationItemBuilder};
pub use error::{Result, VeristateError};
pub use registry::{AttributeRegistry, Verifiable};
pub use status::VerificationStatus;
pub use verification::{
    resolve_attribute, resolve_declared, resolve_entity, verify_entity, EntityVerification,
    ResolvedAttribute, Verification,
};
