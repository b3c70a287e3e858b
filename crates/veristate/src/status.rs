//! Verification status lattice — the five-valued status type and the
//! commutative merge rule used to combine claims for one attribute.
//!
//! Each status has a fixed integer rank used only for merge tie-breaking;
//! ranks are not a user-visible ordering and never appear on the wire.

use serde::{Deserialize, Serialize};

/// Resolved or asserted trust status of an attribute or entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Confirmed valid by at least one claimant, uncontradicted.
    Valid,
    /// No active claim covers the attribute.
    NotVerified,
    /// Confirmed invalid by at least one claimant, uncontradicted.
    Invalid,
    /// Conflicting or explicitly ambiguous claims.
    Dubious,
    /// Administrative override. Identity element of the merge.
    Override,
}

impl VerificationStatus {
    /// All statuses, for exhaustive case enumeration.
    pub const ALL: [VerificationStatus; 5] = [
        VerificationStatus::Valid,
        VerificationStatus::NotVerified,
        VerificationStatus::Invalid,
        VerificationStatus::Dubious,
        VerificationStatus::Override,
    ];

    /// Merge tie-breaking rank. `Valid` and `Invalid` deliberately share
    /// rank 2; their collision is handled by the conflict rule in
    /// [`merge`](Self::merge), not by rank comparison.
    pub fn rank(self) -> u8 {
        match self {
            VerificationStatus::Override => 0,
            VerificationStatus::NotVerified => 1,
            VerificationStatus::Valid => 2,
            VerificationStatus::Invalid => 2,
            VerificationStatus::Dubious => 3,
        }
    }

    /// Combine two statuses asserted for the same attribute.
    ///
    /// Rules, in order:
    /// 1. `Dubious` wins over everything.
    /// 2. `Valid` vs `Invalid` escalates to `Dubious` (conflicting claims).
    /// 3. Equal operands stay themselves.
    /// 4. Otherwise the higher-ranked operand wins.
    ///
    /// Commutative and associative; `Override` is the identity element,
    /// which makes it the natural fold seed everywhere the merge is used.
    pub fn merge(self, other: VerificationStatus) -> VerificationStatus {
        if self == VerificationStatus::Dubious || other == VerificationStatus::Dubious {
            return VerificationStatus::Dubious;
        }
        if self.rank() == 2 && other.rank() == 2 && self != other {
            return VerificationStatus::Dubious;
        }
        if self == other {
            return self;
        }
        if self.rank() > other.rank() {
            self
        } else {
            other
        }
    }

    /// Stable snake_case tag, also used as the serde representation.
    pub fn as_tag(&self) -> &'static str {
        match self {
            VerificationStatus::Valid => "valid",
            VerificationStatus::NotVerified => "not_verified",
            VerificationStatus::Invalid => "invalid",
            VerificationStatus::Dubious => "dubious",
            VerificationStatus::Override => "override",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}
