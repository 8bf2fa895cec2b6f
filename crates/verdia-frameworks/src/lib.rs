//! Regulatory framework assignment for Verdia organizations.
//!
//! This crate provides the core domain logic for mapping an organization's
//! business sector and regulatory coverage to its set of compliance
//! frameworks, at signup and on later coverage changes.
//!
//! # Components
//!
//! - [`catalog`] - the read-only, versioned framework registry snapshot
//! - [`engine`] - pure rule evaluation from (sector, coverage) to an
//!   ordered framework set with a deterministic primary
//! - [`transition`] - expand-only validation over the coverage lattice
//! - [`services::AssignmentService`] - atomic, idempotent assignment writes
//! - [`services::ProvisioningService`] - signup bootstrap and coverage
//!   change orchestration
//! - [`audit`] - append-only trail of assignment events
//!
//! # Invariants
//!
//! - `(organization, framework)` pairs are unique; assignments are never
//!   deleted, only disabled by administrators.
//! - At most one enabled assignment per organization is primary, and
//!   exactly one whenever any are enabled under normal operation.
//! - Coverage only broadens (`NIGERIA`/`INTERNATIONAL` to `HYBRID`) unless
//!   a human actor forces an audited override.
//! - Re-running a bootstrap never mutates existing rows; it only adds
//!   missing ones.
//!
//! # Audit
//!
//! The [`audit`] module records who assigned what and when:
//! - [`audit::AuditStore`] trait for pluggable storage backends
//! - [`audit::InMemoryAuditStore`] for testing
//! - [`audit::FrameworkAuditEvent`] for individual events

pub mod audit;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod services;
pub mod transition;
pub mod types;

// Re-export commonly used types
pub use audit::{AuditStore, FrameworkAuditAction, FrameworkAuditEvent, InMemoryAuditStore};
pub use catalog::{Framework, FrameworkCatalog};
pub use engine::{assignable_codes, compute_assignable, primary_candidate};
pub use error::{FrameworkError, Result};
pub use services::{
    AssignmentService, AssignmentStore, CoverageChangeOutcome, FrameworkAssignment,
    InMemoryAssignmentStore, ProvisioningService,
};
pub use transition::{is_expansion, validate_transition, TransitionKind};
pub use types::{
    ActorId, AssignedBy, AssignmentId, Coverage, Jurisdiction, OrganizationId, Sector,
};
