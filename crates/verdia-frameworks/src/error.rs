//! Error types for the framework assignment core.

use thiserror::Error;

use crate::types::Coverage;

/// Errors that can occur while computing or persisting framework assignments.
#[derive(Debug, Error)]
pub enum FrameworkError {
    /// An input field failed validation before any write was attempted.
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// Name of the offending field.
        field: String,
        /// Human-readable reason.
        reason: String,
    },

    /// A coverage change would narrow the organization's scope.
    ///
    /// Coverage may only expand (`NIGERIA -> HYBRID`, `INTERNATIONAL ->
    /// HYBRID`); any other move requires an explicit override.
    #[error("Coverage cannot move from {from} to {to} without an override")]
    InvalidTransition {
        /// Coverage before the requested change.
        from: Coverage,
        /// Requested new coverage.
        to: Coverage,
    },

    /// A forced transition was requested without a human actor to attribute
    /// it to.
    #[error("A forced coverage override must be attributed to a user")]
    OverrideRequiresActor,

    /// A uniqueness conflict surfaced by the storage layer.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Transient contention on the assignment write (e.g. a serialization
    /// failure). Retried internally; only escalated if the retry budget is
    /// exhausted.
    #[error("Transient write conflict")]
    TransientConflict,

    /// The assignment write kept failing after the bounded retry budget.
    #[error("Assignment write failed after {attempts} attempts")]
    AssignmentFailed {
        /// Number of attempts made before giving up.
        attempts: u32,
    },

    /// A non-retryable storage failure.
    #[error("Store error: {0}")]
    Store(String),
}

impl FrameworkError {
    /// Whether this error is worth retrying.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, FrameworkError::TransientConflict)
    }
}

/// Convenience Result type for the framework assignment core.
pub type Result<T> = std::result::Result<T, FrameworkError>;
