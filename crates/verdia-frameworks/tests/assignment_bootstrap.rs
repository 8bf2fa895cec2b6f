//! Integration tests for signup bootstrap and the assignment write path:
//! idempotence, append-only behavior, atomicity, and retry.

mod common;

use verdia_frameworks::audit::{AuditStore, FrameworkAuditAction};
use verdia_frameworks::catalog::FrameworkCatalog;
use verdia_frameworks::error::FrameworkError;
use verdia_frameworks::types::{AssignedBy, Coverage, Sector};

use common::{fixtures, TestContext};

#[tokio::test]
async fn bootstrap_assigns_hybrid_manufacturing_set() {
    let ctx = TestContext::new();
    let created = ctx
        .services
        .provisioning
        .bootstrap(ctx.org_a, Sector::Manufacturing, Coverage::Hybrid)
        .await
        .expect("bootstrap failed");

    assert_eq!(created.len(), 11);
    assert!(created.iter().all(|a| a.is_enabled));
    assert!(created.iter().all(|a| a.assigned_by == AssignedBy::System));

    let primaries: Vec<_> = created.iter().filter(|a| a.is_primary).collect();
    assert_eq!(primaries.len(), 1);
    assert_eq!(primaries[0].framework_code, "NESREA");
}

#[tokio::test]
async fn bootstrap_is_idempotent() {
    let ctx = TestContext::new();
    let first = ctx
        .services
        .provisioning
        .bootstrap(ctx.org_a, Sector::OilGas, Coverage::Nigeria)
        .await
        .unwrap();
    assert_eq!(first.len(), 5);

    // A double-submitted signup re-runs the same bootstrap.
    let second = ctx
        .services
        .provisioning
        .bootstrap(ctx.org_a, Sector::OilGas, Coverage::Nigeria)
        .await
        .unwrap();
    assert!(second.is_empty());

    let all = ctx.stores.assignment_store.get_all(ctx.org_a).await;
    assert_eq!(all.len(), 5);
    let ids_after_rerun: Vec<_> = all.iter().map(|a| a.id).collect();
    for row in &first {
        assert!(ids_after_rerun.contains(&row.id), "row was replaced");
    }
    assert_eq!(all.iter().filter(|a| a.is_primary).count(), 1);
}

#[tokio::test]
async fn expansion_only_adds_missing_rows() {
    let ctx = TestContext::new();
    ctx.services
        .provisioning
        .bootstrap(ctx.org_a, Sector::Finance, Coverage::Nigeria)
        .await
        .unwrap();

    let outcome = ctx
        .services
        .provisioning
        .change_coverage(
            ctx.org_a,
            Sector::Finance,
            Coverage::Nigeria,
            Coverage::Hybrid,
            false,
            None,
        )
        .await
        .unwrap();

    // Only the international block is new.
    let new_codes: Vec<&str> = outcome
        .created
        .iter()
        .map(|a| a.framework_code.as_str())
        .collect();
    assert_eq!(new_codes, fixtures::INTERNATIONAL_CROSS_SECTOR);
    assert!(outcome.created.iter().all(|a| !a.is_primary));

    // Primary selected at bootstrap survives the expansion.
    let all = ctx.stores.assignment_store.get_all(ctx.org_a).await;
    assert_eq!(all.len(), 12);
    let primary = all.iter().find(|a| a.is_primary).unwrap();
    assert_eq!(primary.framework_code, "NESREA");
    assert_eq!(primary.assigned_by, AssignedBy::System);
}

#[tokio::test]
async fn empty_match_succeeds_with_audit_note() {
    // A catalog with no Nigerian frameworks at all.
    let international_only: Vec<_> = FrameworkCatalog::seeded()
        .query(verdia_frameworks::types::Jurisdiction::International, None)
        .into_iter()
        .cloned()
        .collect();
    let ctx = TestContext::with_catalog(FrameworkCatalog::new(2, international_only));

    let created = ctx
        .services
        .provisioning
        .bootstrap(ctx.org_a, Sector::Manufacturing, Coverage::Nigeria)
        .await
        .expect("empty match must not be an error");
    assert!(created.is_empty());
    assert!(ctx.stores.assignment_store.get_all(ctx.org_a).await.is_empty());

    let events = ctx.stores.audit_store.list_for(ctx.org_a).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, FrameworkAuditAction::EmptyAssignmentSet);
    assert_eq!(events[0].framework_code, None);
}

#[tokio::test]
async fn failed_write_leaves_no_partial_rows() {
    let ctx = TestContext::new();
    ctx.stores.assignment_store.fail_next_inserts(10);

    let err = ctx
        .services
        .provisioning
        .bootstrap(ctx.org_a, Sector::Manufacturing, Coverage::Hybrid)
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::AssignmentFailed { .. }));

    assert!(ctx.stores.assignment_store.get_all(ctx.org_a).await.is_empty());
    // No Assigned event may exist for a run that never committed.
    let events = ctx.stores.audit_store.list_for(ctx.org_a).await.unwrap();
    assert!(events
        .iter()
        .all(|e| e.action != FrameworkAuditAction::Assigned));
}

#[tokio::test]
async fn transient_conflicts_are_retried_to_success() {
    let ctx = TestContext::new();
    ctx.stores.assignment_store.fail_next_inserts(2);

    let created = ctx
        .services
        .provisioning
        .bootstrap(ctx.org_a, Sector::Finance, Coverage::International)
        .await
        .expect("retry budget should absorb two transient failures");
    assert_eq!(created.len(), 8);
}

#[tokio::test]
async fn organizations_are_independent() {
    let ctx = TestContext::new();
    let (a, b) = tokio::join!(
        ctx.services
            .provisioning
            .bootstrap(ctx.org_a, Sector::OilGas, Coverage::Nigeria),
        ctx.services
            .provisioning
            .bootstrap(ctx.org_b, Sector::Finance, Coverage::Hybrid),
    );
    assert_eq!(a.unwrap().len(), 5);
    assert_eq!(b.unwrap().len(), 12);

    let a_rows = ctx.stores.assignment_store.get_all(ctx.org_a).await;
    assert!(a_rows.iter().all(|r| r.organization_id == ctx.org_a));
}

#[tokio::test]
async fn each_created_row_gets_an_audit_event() {
    let ctx = TestContext::new();
    let created = ctx
        .services
        .provisioning
        .bootstrap(ctx.org_a, Sector::OilGas, Coverage::Nigeria)
        .await
        .unwrap();

    let events = ctx.stores.audit_store.list_for(ctx.org_a).await.unwrap();
    let assigned: Vec<_> = events
        .iter()
        .filter(|e| e.action == FrameworkAuditAction::Assigned)
        .collect();
    assert_eq!(assigned.len(), created.len());
    for row in &created {
        assert!(assigned
            .iter()
            .any(|e| e.framework_code.as_deref() == Some(row.framework_code.as_str())));
    }
}
