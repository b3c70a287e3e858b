//! Claim kinds — the closed set of claim shapes.
//!
//! Claims are modeled as a discriminated union rather than open-ended
//! subtyping. Each variant carries an explicit, versioned wire
//! discriminator (the serde `type` tag) so a heterogeneous collection of
//! persisted claims deserializes back to the correct concrete shape.
//! Changing a variant's wire shape requires a new discriminator value.

use serde::{Deserialize, Serialize};

/// Shape of a verification item and its shape-specific payload.
///
/// The payload is informational: it never affects status computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClaimKind {
    /// Ordinary claim with no extra payload.
    #[serde(rename = "verification.claim.v1")]
    Plain,

    /// Claim carrying a numeric score, e.g. a graded check.
    #[serde(rename = "verification.scored_claim.v1")]
    Scored { score: f64 },

    /// Multiple-choice claim: the posed question, its options, and the
    /// recorded answer (if one was given).
    #[serde(rename = "verification.question_claim.v1")]
    Question {
        question: String,
        options: Vec<String>,
        answer: Option<String>,
    },
}

impl ClaimKind {
    /// The stable wire discriminator of this variant.
    pub fn discriminator(&self) -> &'static str {
        match self {
            ClaimKind::Plain => "verification.claim.v1",
            ClaimKind::Scored { .. } => "verification.scored_claim.v1",
            ClaimKind::Question { .. } => "verification.question_claim.v1",
        }
    }
}

impl Default for ClaimKind {
    fn default() -> Self {
        ClaimKind::Plain
    }
}
