//! Integration test: full end-to-end workflow.
//!
//! Tests the complete lifecycle:
//! 1. Declare verifiable attributes per entity type
//! 2. Issue claims (plain, scored, question)
//! 3. Resolve per-attribute statuses
//! 4. Aggregate the entity-level status
//! 5. Let claims expire and re-resolve
//! 6. Prune expired claims
//! 7. Persist and restore the claim collection

use veristate::claim::{ClaimKind, VerificationItem, VerificationItemBuilder};
use veristate::registry::{AttributeRegistry, Verifiable};
use veristate::status::VerificationStatus;
use veristate::time::MICROS_PER_DAY as DAY;
use veristate::verification::{
    resolve_attribute, resolve_entity, verify_entity, Verification,
};

struct Supplier {
    verification: Verification,
}

impl Verifiable for Supplier {
    fn entity_type(&self) -> &str {
        "supplier"
    }

    fn verification(&self) -> &Verification {
        &self.verification
    }
}

#[test]
fn full_workflow_claims_to_entity_status() {
    let now = 1_000 * DAY;

    // ── Step 1: Declare verifiable attributes ───────────────────────────
    let mut registry = AttributeRegistry::new();
    registry
        .declare("supplier", ["name", "address", "tax_id"])
        .expect("declaration should succeed");

    assert_eq!(
        registry.attributes_of("supplier"),
        ["name", "address", "tax_id"]
    );

    // ── Step 2: Issue claims ─────────────────────────────────────────────
    // Registrar confirms the name, with a one-year expiry.
    let name_claim = VerificationItemBuilder::new(VerificationStatus::Valid, "registrar")
        .attribute("name")
        .verified_at(now)
        .expires_at(now + 365 * DAY)
        .description("registry extract matched")
        .build();

    // Postal check scores the address as valid.
    let address_ok = VerificationItemBuilder::new(VerificationStatus::Valid, "postal-check")
        .attribute("address")
        .verified_at(now)
        .expires_at(now + 90 * DAY)
        .scored(0.93)
        .detail("source", "postal-db")
        .build();

    // A field agent disputes the same address via a questionnaire.
    let address_disputed = VerificationItemBuilder::new(VerificationStatus::Invalid, "field-agent")
        .attribute("address")
        .verified_at(now)
        .question(
            "Does the site exist?",
            vec!["yes".into(), "no".into()],
            Some("no".into()),
        )
        .build();

    let mut supplier = Supplier {
        verification: Verification::new(),
    };
    supplier.verification.add(name_claim);
    supplier.verification.add(address_ok.clone());
    supplier.verification.add(address_disputed);
    assert_eq!(supplier.verification.len(), 3);

    // ── Step 3: Resolve per-attribute statuses ──────────────────────────
    assert_eq!(
        resolve_attribute(&supplier.verification, "name", now),
        VerificationStatus::Valid
    );
    // Valid vs Invalid on the same attribute escalates to Dubious.
    assert_eq!(
        resolve_attribute(&supplier.verification, "address", now),
        VerificationStatus::Dubious
    );
    // No claim covers tax_id.
    assert_eq!(
        resolve_attribute(&supplier.verification, "tax_id", now),
        VerificationStatus::NotVerified
    );

    // ── Step 4: Aggregate the entity-level status ────────────────────────
    // name=Valid, address=Dubious, tax_id=NotVerified, in declared order:
    // Valid -> adopt Valid -> adopt Dubious -> Dubious resists nothing but
    // Valid, so NotVerified takes over.
    let status = resolve_entity(&supplier, &registry, now);
    assert_eq!(status, VerificationStatus::NotVerified);

    let report = verify_entity(&supplier, &registry, now);
    assert_eq!(report.entity_type, "supplier");
    assert_eq!(report.status, status);
    assert!(!report.is_valid);
    assert_eq!(report.attributes.len(), 3);
    assert_eq!(report.attributes[0].status, VerificationStatus::Valid);
    assert_eq!(report.attributes[1].status, VerificationStatus::Dubious);
    assert_eq!(report.attributes[2].status, VerificationStatus::NotVerified);

    // The declared order is contractual: tax_id first changes the outcome.
    registry
        .declare("supplier", ["tax_id", "name", "address"])
        .expect("re-declaration should succeed");
    assert_eq!(
        resolve_entity(&supplier, &registry, now),
        VerificationStatus::Dubious
    );

    // ── Step 5: Claims expire ────────────────────────────────────────────
    // Past the postal check's 90-day window the dispute stands alone.
    let later = now + 91 * DAY;
    assert_eq!(
        resolve_attribute(&supplier.verification, "address", later),
        VerificationStatus::Invalid
    );
    // The no-expiry dispute is still active far in the future.
    assert_eq!(
        resolve_attribute(&supplier.verification, "address", u64::MAX - 1),
        VerificationStatus::Invalid
    );

    // ── Step 6: Prune expired claims ─────────────────────────────────────
    let removed = supplier.verification.remove_expired(later);
    assert_eq!(removed, 1, "only the postal check should have expired");
    assert_eq!(supplier.verification.len(), 2);
    assert!(supplier
        .verification
        .iter()
        .all(|item| item.claimed_by != "postal-check"));

    // ── Step 7: Persist and restore ──────────────────────────────────────
    let json = supplier.verification.to_json().expect("serialize");
    let restored = Verification::from_json(&json).expect("deserialize");
    assert_eq!(restored, supplier.verification);

    // Each claim kept its concrete shape through the round trip.
    let kinds: Vec<&ClaimKind> = restored.iter().map(|item| &item.kind).collect();
    assert!(matches!(kinds[0], ClaimKind::Plain));
    assert!(matches!(kinds[1], ClaimKind::Question { .. }));

    // A single item round-trips through its own helpers too.
    let item_json = address_ok.to_json().expect("serialize item");
    let item_back = VerificationItem::from_json(&item_json).expect("deserialize item");
    assert_eq!(item_back, address_ok);
    assert_eq!(item_back.kind.discriminator(), "verification.scored_claim.v1");
}
