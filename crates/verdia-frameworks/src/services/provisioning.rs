//! Provisioning service: the two entry points into the assignment core.
//!
//! Composes the transition guard, the coverage engine, and the assignment
//! service for signup bootstrap and later coverage changes. All rule
//! evaluation happens against the catalog snapshot the service was built
//! with, so concurrent administrative reseeds never affect an in-flight run.

use std::sync::Arc;

use crate::audit::{AuditStore, FrameworkAuditAction, FrameworkAuditEventInput};
use crate::catalog::FrameworkCatalog;
use crate::engine::assignable_codes;
use crate::error::{FrameworkError, Result};
use crate::services::assignment::{AssignmentService, FrameworkAssignment};
use crate::transition::{validate_transition, TransitionKind};
use crate::types::{ActorId, AssignedBy, Coverage, OrganizationId, Sector};

/// Result of a coverage change run.
#[derive(Debug)]
pub struct CoverageChangeOutcome {
    /// How the transition was classified by the guard.
    pub kind: TransitionKind,
    /// Assignment rows created by this run.
    pub created: Vec<FrameworkAssignment>,
}

/// Orchestrates framework bootstrapping and coverage changes.
pub struct ProvisioningService {
    catalog: Arc<FrameworkCatalog>,
    assignments: Arc<AssignmentService>,
    audit_store: Arc<dyn AuditStore>,
}

impl ProvisioningService {
    /// Create a new provisioning service over a catalog snapshot.
    pub fn new(
        catalog: Arc<FrameworkCatalog>,
        assignments: Arc<AssignmentService>,
        audit_store: Arc<dyn AuditStore>,
    ) -> Self {
        Self {
            catalog,
            assignments,
            audit_store,
        }
    }

    /// Bootstrap framework assignments for a newly signed-up organization.
    ///
    /// System-originated: every created row carries
    /// [`AssignedBy::System`]. Safe to re-run; a double-submitted signup
    /// adds nothing on the second pass.
    pub async fn bootstrap(
        &self,
        organization_id: OrganizationId,
        sector: Sector,
        coverage: Coverage,
    ) -> Result<Vec<FrameworkAssignment>> {
        let codes = assignable_codes(&self.catalog, sector, coverage);
        tracing::info!(
            organization_id = %organization_id,
            sector = %sector,
            coverage = %coverage,
            catalog_version = self.catalog.version(),
            matched = codes.len(),
            "Bootstrapping framework assignments"
        );
        self.assignments
            .apply(organization_id, &codes, AssignedBy::System)
            .await
    }

    /// Run the assignment side of a coverage change.
    ///
    /// Validates the transition first; nothing is written when the guard
    /// rejects it. Expansions run system-originated. A forced override must
    /// name the responsible actor: the created rows are attributed to that
    /// actor and a dedicated [`FrameworkAuditAction::ForcedTransition`]
    /// event marks the exception. The caller persists the new coverage value
    /// on the organization only after this returns successfully.
    pub async fn change_coverage(
        &self,
        organization_id: OrganizationId,
        sector: Sector,
        from: Coverage,
        to: Coverage,
        force_override: bool,
        actor: Option<ActorId>,
    ) -> Result<CoverageChangeOutcome> {
        let kind = validate_transition(from, to, force_override)?;

        let assigned_by = match kind {
            TransitionKind::ForcedOverride => {
                let actor = actor.ok_or(FrameworkError::OverrideRequiresActor)?;
                AssignedBy::User(actor)
            }
            TransitionKind::NoOp | TransitionKind::Expansion => AssignedBy::System,
        };

        if kind == TransitionKind::ForcedOverride {
            tracing::warn!(
                organization_id = %organization_id,
                from = %from,
                to = %to,
                "Coverage override forced by user"
            );
        }

        let codes = assignable_codes(&self.catalog, sector, to);
        let created = self
            .assignments
            .apply(organization_id, &codes, assigned_by)
            .await?;

        // Recorded only once the assignment side has committed, so the
        // trail never shows an override that was never applied.
        if kind == TransitionKind::ForcedOverride {
            self.audit_store
                .append(FrameworkAuditEventInput {
                    organization_id,
                    framework_code: None,
                    action: FrameworkAuditAction::ForcedTransition,
                    assigned_by,
                    metadata: Some(serde_json::json!({ "from": from, "to": to })),
                })
                .await?;
        }

        Ok(CoverageChangeOutcome { kind, created })
    }
}
