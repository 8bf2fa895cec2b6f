//! Audit trail for framework assignment events.
//!
//! Append-only: events are never updated or deleted, so the trail can
//! answer "who assigned framework X to this organization, and when".

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::types::{AssignedBy, OrganizationId};

/// What happened to an organization's framework assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FrameworkAuditAction {
    /// A framework was assigned to the organization.
    #[default]
    Assigned,
    /// An assignment run matched no frameworks; recorded so a silent empty
    /// outcome still leaves a trace.
    EmptyAssignmentSet,
    /// A coverage change that narrows scope was forced through by a human
    /// actor. Distinguished from ordinary expansion.
    ForcedTransition,
}

impl std::fmt::Display for FrameworkAuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assigned => write!(f, "assigned"),
            Self::EmptyAssignmentSet => write!(f, "empty_assignment_set"),
            Self::ForcedTransition => write!(f, "forced_transition"),
        }
    }
}

/// An immutable audit record of one assignment event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkAuditEvent {
    /// Unique identifier for the event.
    pub id: Uuid,
    /// Organization this event belongs to.
    pub organization_id: OrganizationId,
    /// The framework involved, if the action concerns a single framework.
    pub framework_code: Option<String>,
    /// Action performed.
    pub action: FrameworkAuditAction,
    /// Who caused the event.
    pub assigned_by: AssignedBy,
    /// Additional context, e.g. the transition that was forced.
    pub metadata: Option<serde_json::Value>,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
}

/// Input for appending an audit event; the store fills in id and timestamp.
#[derive(Debug, Clone)]
pub struct FrameworkAuditEventInput {
    /// Organization this event belongs to.
    pub organization_id: OrganizationId,
    /// The framework involved, if any.
    pub framework_code: Option<String>,
    /// Action performed.
    pub action: FrameworkAuditAction,
    /// Who caused the event.
    pub assigned_by: AssignedBy,
    /// Additional context.
    pub metadata: Option<serde_json::Value>,
}

/// Trait for audit trail storage backends.
///
/// Implementations must treat the trail as append-only.
#[async_trait::async_trait]
pub trait AuditStore: Send + Sync {
    /// Append an audit event to the trail.
    async fn append(&self, input: FrameworkAuditEventInput) -> Result<FrameworkAuditEvent>;

    /// All events for an organization, ordered by timestamp ascending.
    async fn list_for(&self, organization_id: OrganizationId) -> Result<Vec<FrameworkAuditEvent>>;
}

/// In-memory audit store for testing.
#[derive(Debug, Default)]
pub struct InMemoryAuditStore {
    events: Arc<RwLock<Vec<FrameworkAuditEvent>>>,
}

impl InMemoryAuditStore {
    /// Create a new in-memory audit store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Total number of events in the store.
    pub async fn count(&self) -> usize {
        self.events.read().await.len()
    }

    /// Clear all events (for testing).
    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

#[async_trait::async_trait]
impl AuditStore for InMemoryAuditStore {
    async fn append(&self, input: FrameworkAuditEventInput) -> Result<FrameworkAuditEvent> {
        let event = FrameworkAuditEvent {
            id: Uuid::new_v4(),
            organization_id: input.organization_id,
            framework_code: input.framework_code,
            action: input.action,
            assigned_by: input.assigned_by,
            metadata: input.metadata,
            timestamp: Utc::now(),
        };

        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn list_for(&self, organization_id: OrganizationId) -> Result<Vec<FrameworkAuditEvent>> {
        let events = self.events.read().await;
        let mut results: Vec<_> = events
            .iter()
            .filter(|e| e.organization_id == organization_id)
            .cloned()
            .collect();
        results.sort_by_key(|e| e.timestamp);
        Ok(results)
    }
}
