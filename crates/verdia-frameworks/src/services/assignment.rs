//! Assignment service: the single mutation point for framework assignments.
//!
//! All writes go through [`AssignmentService::apply`], which is atomic per
//! organization and idempotent under retry: rows are only ever added, never
//! overwritten, so re-running a bootstrap with the same or a superset of
//! codes is safe.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::audit::{AuditStore, FrameworkAuditAction, FrameworkAuditEventInput};
use crate::error::{FrameworkError, Result};
use crate::types::{AssignedBy, AssignmentId, OrganizationId};

/// Bounded retry budget for transient write conflicts.
const MAX_WRITE_ATTEMPTS: u32 = 3;

// ============================================================================
// Domain Types
// ============================================================================

/// A framework assigned to an organization.
///
/// Append-only from the engine's perspective: once created, `is_primary` and
/// `assigned_by` are never overwritten by a later run. Rows are disabled by
/// administrators, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkAssignment {
    /// Unique identifier.
    pub id: AssignmentId,
    /// Organization the framework is assigned to.
    pub organization_id: OrganizationId,
    /// Code of the assigned framework.
    pub framework_code: String,
    /// Whether this is the organization's primary reporting framework.
    pub is_primary: bool,
    /// Whether the assignment is actively used.
    pub is_enabled: bool,
    /// When the framework was assigned.
    pub assigned_at: DateTime<Utc>,
    /// Who created the assignment.
    pub assigned_by: AssignedBy,
}

// ============================================================================
// Store Trait
// ============================================================================

/// Trait for assignment storage backends.
///
/// Mutation is batch-only and must be atomic per organization: a database
/// implementation runs [`AssignmentStore::insert_batch`] inside one
/// transaction holding a row lock keyed on the organization (or an
/// equivalent serializable isolation level), so concurrent runs for the same
/// organization serialize and runs for different organizations do not
/// contend.
#[async_trait::async_trait]
pub trait AssignmentStore: Send + Sync {
    /// All enabled assignments for an organization.
    async fn list_enabled(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<FrameworkAssignment>>;

    /// Insert a batch of assignment rows, all-or-nothing.
    ///
    /// Fails with [`FrameworkError::TransientConflict`] when a row collides
    /// with one committed since the caller's read, a duplicate
    /// `(organization, framework)` pair or a second enabled primary. The
    /// caller's retry re-reads and converges, so a lost same-organization
    /// race heals into a no-op. [`FrameworkError::Conflict`] is reserved
    /// for batches that contradict themselves. On any failure no row is
    /// persisted.
    async fn insert_batch(
        &self,
        organization_id: OrganizationId,
        rows: Vec<FrameworkAssignment>,
    ) -> Result<()>;
}

// ============================================================================
// In-Memory Store (for testing)
// ============================================================================

/// In-memory assignment store for testing.
///
/// The whole map is guarded by one write lock, which trivially serializes
/// same-organization batches.
#[derive(Debug, Default)]
pub struct InMemoryAssignmentStore {
    assignments: Arc<RwLock<HashMap<Uuid, Vec<FrameworkAssignment>>>>,
    fail_next: AtomicU32,
}

impl InMemoryAssignmentStore {
    /// Create a new in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            assignments: Arc::new(RwLock::new(HashMap::new())),
            fail_next: AtomicU32::new(0),
        }
    }

    /// Make the next `n` insert batches fail with a transient conflict
    /// (for retry testing).
    pub fn fail_next_inserts(&self, n: u32) {
        self.fail_next.store(n, Ordering::SeqCst);
    }

    /// All assignments for an organization, enabled or not (for testing).
    pub async fn get_all(&self, organization_id: OrganizationId) -> Vec<FrameworkAssignment> {
        self.assignments
            .read()
            .await
            .get(&organization_id.into_inner())
            .cloned()
            .unwrap_or_default()
    }

    /// Clear all data.
    pub async fn clear(&self) {
        self.assignments.write().await.clear();
        self.fail_next.store(0, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl AssignmentStore for InMemoryAssignmentStore {
    async fn list_enabled(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Vec<FrameworkAssignment>> {
        let assignments = self.assignments.read().await;
        Ok(assignments
            .get(&organization_id.into_inner())
            .map(|rows| rows.iter().filter(|a| a.is_enabled).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert_batch(
        &self,
        organization_id: OrganizationId,
        rows: Vec<FrameworkAssignment>,
    ) -> Result<()> {
        if self
            .fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(FrameworkError::TransientConflict);
        }

        let mut assignments = self.assignments.write().await;
        let existing = assignments
            .entry(organization_id.into_inner())
            .or_default();

        // Validate the whole batch before touching anything so a failure
        // leaves no partial rows.
        let committed: HashSet<&str> = existing
            .iter()
            .map(|a| a.framework_code.as_str())
            .collect();
        let committed_primary = existing.iter().any(|a| a.is_enabled && a.is_primary);
        let mut batch_codes: HashSet<&str> = HashSet::new();
        let mut batch_primaries = 0;
        for row in &rows {
            if !batch_codes.insert(row.framework_code.as_str()) {
                return Err(FrameworkError::Conflict(format!(
                    "batch assigns framework {} to organization {} twice",
                    row.framework_code, organization_id
                )));
            }
            if row.is_enabled && row.is_primary {
                batch_primaries += 1;
                if batch_primaries > 1 {
                    return Err(FrameworkError::Conflict(format!(
                        "batch marks more than one primary framework for organization {organization_id}"
                    )));
                }
            }
            // A collision with a committed row means another run won the
            // race since the caller's read; the retried unit re-reads and
            // converges.
            if committed.contains(row.framework_code.as_str())
                || (row.is_enabled && row.is_primary && committed_primary)
            {
                return Err(FrameworkError::TransientConflict);
            }
        }

        existing.extend(rows);
        Ok(())
    }
}

// ============================================================================
// Service
// ============================================================================

/// Service applying computed framework sets to organizations.
pub struct AssignmentService {
    store: Arc<dyn AssignmentStore>,
    audit_store: Arc<dyn AuditStore>,
}

impl AssignmentService {
    /// Create a new assignment service.
    pub fn new(store: Arc<dyn AssignmentStore>, audit_store: Arc<dyn AuditStore>) -> Self {
        Self { store, audit_store }
    }

    /// Apply an ordered framework set to an organization.
    ///
    /// Creates one assignment row per code not already assigned; codes
    /// already present are left untouched. The head of `framework_codes`
    /// becomes primary only when the organization has no enabled primary
    /// yet. The whole batch commits atomically, with a bounded retry on
    /// transient contention, and one audit event is appended per created
    /// row. An empty `framework_codes` is a valid outcome and is recorded
    /// in the audit trail rather than treated as an error.
    ///
    /// Returns the rows created by this call (empty when everything was
    /// already assigned).
    pub async fn apply(
        &self,
        organization_id: OrganizationId,
        framework_codes: &[String],
        assigned_by: AssignedBy,
    ) -> Result<Vec<FrameworkAssignment>> {
        if framework_codes.is_empty() {
            tracing::info!(
                organization_id = %organization_id,
                "No frameworks matched; recording empty assignment set"
            );
            self.audit_store
                .append(FrameworkAuditEventInput {
                    organization_id,
                    framework_code: None,
                    action: FrameworkAuditAction::EmptyAssignmentSet,
                    assigned_by,
                    metadata: Some(serde_json::json!({
                        "reason": "no frameworks matched the organization's sector and coverage",
                    })),
                })
                .await?;
            return Ok(Vec::new());
        }

        let mut attempts = 0;
        let created = loop {
            attempts += 1;
            match self.try_apply(organization_id, framework_codes, assigned_by).await {
                Ok(rows) => break rows,
                Err(err) if err.is_transient() && attempts < MAX_WRITE_ATTEMPTS => {
                    tracing::warn!(
                        organization_id = %organization_id,
                        attempt = attempts,
                        "Transient conflict on assignment write, retrying"
                    );
                }
                Err(err) if err.is_transient() => {
                    tracing::error!(
                        organization_id = %organization_id,
                        attempts,
                        "Assignment write failed after exhausting retries"
                    );
                    return Err(FrameworkError::AssignmentFailed { attempts });
                }
                Err(err) => return Err(err),
            }
        };

        for row in &created {
            self.audit_store
                .append(FrameworkAuditEventInput {
                    organization_id,
                    framework_code: Some(row.framework_code.clone()),
                    action: FrameworkAuditAction::Assigned,
                    assigned_by: row.assigned_by,
                    metadata: None,
                })
                .await?;
        }

        tracing::info!(
            organization_id = %organization_id,
            created = created.len(),
            requested = framework_codes.len(),
            "Framework assignments applied"
        );
        Ok(created)
    }

    /// One attempt at the read-compute-write unit.
    async fn try_apply(
        &self,
        organization_id: OrganizationId,
        framework_codes: &[String],
        assigned_by: AssignedBy,
    ) -> Result<Vec<FrameworkAssignment>> {
        let existing = self.store.list_enabled(organization_id).await?;
        let existing_codes: HashSet<&str> =
            existing.iter().map(|a| a.framework_code.as_str()).collect();
        let has_primary = existing.iter().any(|a| a.is_primary);

        let now = Utc::now();
        let mut rows = Vec::new();
        for code in framework_codes {
            if existing_codes.contains(code.as_str())
                || rows.iter().any(|r: &FrameworkAssignment| &r.framework_code == code)
            {
                continue;
            }
            rows.push(FrameworkAssignment {
                id: AssignmentId::new(),
                organization_id,
                framework_code: code.clone(),
                is_primary: code == &framework_codes[0] && !has_primary,
                is_enabled: true,
                assigned_at: now,
                assigned_by,
            });
        }

        if rows.is_empty() {
            tracing::debug!(
                organization_id = %organization_id,
                "All requested frameworks already assigned"
            );
            return Ok(rows);
        }

        self.store.insert_batch(organization_id, rows.clone()).await?;
        Ok(rows)
    }
}
