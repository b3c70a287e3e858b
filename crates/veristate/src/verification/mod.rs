//! Verification — the ordered claim collection and the resolution engine.
//!
//! The verification module provides:
//! - [`Verification`] — insertion-ordered collection of all claims for
//!   one entity
//! - Per-attribute resolution via the commutative lattice fold
//! - Entity-level aggregation via the order-sensitive fold over the
//!   entity type's declared attributes
//! - An [`EntityVerification`] report with the per-attribute breakdown
//!
//! Resolution is pure and read-only: callers pass the query time in and
//! own exclusivity of the `Verification` for the duration of a call.

pub mod aggregate;
pub mod collection;
pub mod resolve;

pub use aggregate::{
    resolve_declared, resolve_entity, verify_entity, EntityVerification, ResolvedAttribute,
};
pub use collection::Verification;
pub use resolve::resolve_attribute;
