//! The per-entity claim collection.

use serde::{Deserialize, Serialize};

use crate::claim::VerificationItem;
use crate::error::{Result, VeristateError};

/// Insertion-ordered collection of all claims for one entity.
///
/// The per-attribute fold is commutative, but entity-level aggregation
/// observes iteration order, so the sequence preserves insertion order
/// rather than deriving an order from an unordered set.
///
/// No internal synchronization is provided: a caller sharing a
/// `Verification` across writers must serialize appends against reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Verification {
    items: Vec<VerificationItem>,
}

impl Verification {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a collection from existing items, preserving their order.
    pub fn from_items(items: Vec<VerificationItem>) -> Self {
        Self { items }
    }

    /// Append a claim. Items are never mutated in place; a superseding
    /// claim is simply appended and the merge rule settles the outcome.
    pub fn add(&mut self, item: VerificationItem) {
        self.items.push(item);
    }

    /// Number of claims, including expired ones.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All claims in insertion order.
    pub fn items(&self) -> &[VerificationItem] {
        &self.items
    }

    /// Iterate over claims in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, VerificationItem> {
        self.items.iter()
    }

    /// Iterate over claims active at `now`, in insertion order.
    pub fn active(&self, now: u64) -> impl Iterator<Item = &VerificationItem> {
        self.items.iter().filter(move |item| item.is_active(now))
    }

    /// Drop every claim no longer active at `now`. Returns the number of
    /// claims removed. Claims without expiry are never removed.
    pub fn remove_expired(&mut self, now: u64) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.is_active(now));
        before - self.items.len()
    }

    /// Serialize to JSON (a plain array of items).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| VeristateError::SerializationError(e.to_string()))
    }

    /// Deserialize from JSON produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| VeristateError::SerializationError(e.to_string()))
    }
}

impl Extend<VerificationItem> for Verification {
    fn extend<I: IntoIterator<Item = VerificationItem>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<VerificationItem> for Verification {
    fn from_iter<I: IntoIterator<Item = VerificationItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Verification {
    type Item = &'a VerificationItem;
    type IntoIter = std::slice::Iter<'a, VerificationItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Verification {
    type Item = VerificationItem;
    type IntoIter = std::vec::IntoIter<VerificationItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
