//! Per-attribute status resolution — the commutative fold.

use log::trace;

use crate::status::VerificationStatus;

use super::collection::Verification;

/// Resolve the status of one attribute at query time `now`.
///
/// Folds the lattice merge over the statuses of every active item that
/// covers `attribute`, starting from `NotVerified`. The merge is
/// commutative and associative, so the result does not depend on item
/// order. An attribute with no covering active items — including a name
/// never claimed at all — resolves to `NotVerified`, never an error.
pub fn resolve_attribute(
    verification: &Verification,
    attribute: &str,
    now: u64,
) -> VerificationStatus {
    let status = verification
        .active(now)
        .filter(|item| item.covers(attribute))
        .fold(VerificationStatus::NotVerified, |acc, item| {
            acc.merge(item.status)
        });
    trace!("attribute '{attribute}' resolved to {status}");
    status
}
