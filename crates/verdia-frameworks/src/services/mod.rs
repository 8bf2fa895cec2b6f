//! Service layer for framework assignment.
//!
//! [`assignment::AssignmentService`] is the sole mutation point for
//! assignment rows; [`provisioning::ProvisioningService`] wires the guard
//! and the coverage engine in front of it for signup and coverage changes.

pub mod assignment;
pub mod provisioning;

// Re-export commonly used types
pub use assignment::{
    AssignmentService, AssignmentStore, FrameworkAssignment, InMemoryAssignmentStore,
};
pub use provisioning::{CoverageChangeOutcome, ProvisioningService};
