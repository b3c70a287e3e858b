//! Verification items and their builder.
//!
//! An item is a single time-boxed assertion by one claimant about a
//! subset of an entity's attributes. Items are immutable by convention:
//! created when a verification event occurs, never mutated afterwards,
//! and retired only by expiring or by being dropped from their owning
//! [`Verification`](crate::verification::Verification).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VeristateError};
use crate::status::VerificationStatus;

use super::kind::ClaimKind;

/// A single time-boxed claim about a subset of an entity's attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationItem {
    /// Status asserted by the claimant.
    pub status: VerificationStatus,
    /// Attribute names this claim covers. An empty set is legal; the item
    /// then never contributes to any resolution.
    pub attributes: BTreeSet<String>,
    /// Claimant identifier. No internal structure is assumed.
    pub claimed_by: String,
    /// Expiry time (microseconds since epoch). `None` means the claim
    /// never expires. Note this is the opposite of the host system's
    /// convention for generic expirable objects, where an absent expiry
    /// reads as already expired.
    pub expires_at: Option<u64>,
    /// When the verification event occurred (microseconds since epoch).
    /// Defaulted at construction time, never filled on read.
    pub verified_at: u64,
    /// Free-text description. Informational only.
    pub description: String,
    /// Structured details. Informational only.
    pub details: BTreeMap<String, String>,
    /// Claim shape and shape-specific payload.
    #[serde(flatten)]
    pub kind: ClaimKind,
}

impl VerificationItem {
    /// Is this item active at query time `now`?
    ///
    /// Active iff the expiry is absent or strictly after `now`: an item
    /// expiring exactly at `now` is no longer active, and an item without
    /// expiry is active at any `now`.
    pub fn is_active(&self, now: u64) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at > now,
            None => true,
        }
    }

    /// Does this claim cover the given attribute name?
    pub fn covers(&self, attribute: &str) -> bool {
        self.attributes.contains(attribute)
    }

    /// Serialize to JSON, including the wire discriminator.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| VeristateError::SerializationError(e.to_string()))
    }

    /// Deserialize from JSON produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| VeristateError::SerializationError(e.to_string()))
    }
}

/// Builder for verification items.
///
/// The builder performs no validation — required-field policy, score
/// ranges, and answer plausibility are the surrounding system's concern.
/// `verified_at` defaults to the current time at `build()` when not set
/// explicitly.
pub struct VerificationItemBuilder {
    status: VerificationStatus,
    attributes: BTreeSet<String>,
    claimed_by: String,
    expires_at: Option<u64>,
    verified_at: Option<u64>,
    description: String,
    details: BTreeMap<String, String>,
    kind: ClaimKind,
}

impl VerificationItemBuilder {
    /// Start building a claim with the given status and claimant.
    pub fn new(status: VerificationStatus, claimed_by: impl Into<String>) -> Self {
        Self {
            status,
            attributes: BTreeSet::new(),
            claimed_by: claimed_by.into(),
            expires_at: None,
            verified_at: None,
            description: String::new(),
            details: BTreeMap::new(),
            kind: ClaimKind::Plain,
        }
    }

    /// Add one covered attribute name.
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.insert(name.into());
        self
    }

    /// Add multiple covered attribute names.
    pub fn attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the expiry time. Unset means the claim never expires.
    pub fn expires_at(mut self, micros: u64) -> Self {
        self.expires_at = Some(micros);
        self
    }

    /// Set the verification time explicitly (e.g. when replaying recorded
    /// events). Unset defaults to the current time at `build()`.
    pub fn verified_at(mut self, micros: u64) -> Self {
        self.verified_at = Some(micros);
        self
    }

    /// Set the free-text description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add one structured detail entry.
    pub fn detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Make this a scored claim.
    pub fn scored(mut self, score: f64) -> Self {
        self.kind = ClaimKind::Scored { score };
        self
    }

    /// Make this a multiple-choice claim.
    pub fn question(
        mut self,
        question: impl Into<String>,
        options: Vec<String>,
        answer: Option<String>,
    ) -> Self {
        self.kind = ClaimKind::Question {
            question: question.into(),
            options,
            answer,
        };
        self
    }

    /// Finalize the item.
    pub fn build(self) -> VerificationItem {
        VerificationItem {
            status: self.status,
            attributes: self.attributes,
            claimed_by: self.claimed_by,
            expires_at: self.expires_at,
            verified_at: self.verified_at.unwrap_or_else(crate::time::now_micros),
            description: self.description,
            details: self.details,
            kind: self.kind,
        }
    }
}
