//! Verification items — time-boxed claims about an entity's attributes.
//!
//! The claim module provides:
//! - The closed set of claim shapes with versioned wire discriminators
//! - The immutable-by-convention verification item
//! - Builder-style construction with explicit timestamp defaulting
//! - Strict-expiry activity checks (absent expiry means permanent)

pub mod item;
pub mod kind;

pub use item::{VerificationItem, VerificationItemBuilder};
pub use kind::ClaimKind;
