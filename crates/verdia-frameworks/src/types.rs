//! Type definitions for the framework assignment domain.
//!
//! Includes newtype wrappers for IDs and enums for domain values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::FrameworkError;

// ============================================================================
// ID Types (Newtype Pattern)
// ============================================================================

/// Unique identifier for an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(pub Uuid);

impl OrganizationId {
    /// Create a new random OrganizationId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID.
    pub fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for OrganizationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrganizationId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<OrganizationId> for Uuid {
    fn from(id: OrganizationId) -> Self {
        id.0
    }
}

/// Unique identifier for a framework assignment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(pub Uuid);

impl AssignmentId {
    /// Create a new random AssignmentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID.
    pub fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for AssignmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AssignmentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AssignmentId> for Uuid {
    fn from(id: AssignmentId) -> Self {
        id.0
    }
}

/// Unique identifier for a human actor (a platform user).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Create a new random ActorId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID.
    pub fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ActorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<ActorId> for Uuid {
    fn from(id: ActorId) -> Self {
        id.0
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Regulatory jurisdiction a framework belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "fw_jurisdiction", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Jurisdiction {
    /// Nigerian regulators (NESREA, DPR, NUPRC, ...).
    Nigeria,
    /// International reporting standards (GRI, ISSB, TCFD, ...).
    International,
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nigeria => write!(f, "NIGERIA"),
            Self::International => write!(f, "INTERNATIONAL"),
        }
    }
}

/// An organization's declared scope of regulatory obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "org_coverage", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Coverage {
    /// Nigerian regulators only.
    Nigeria,
    /// International frameworks only.
    International,
    /// Nigeria + international (hybrid reporting).
    Hybrid,
}

impl Coverage {
    /// All coverage values, in declaration order.
    pub const ALL: [Coverage; 3] = [Coverage::Nigeria, Coverage::International, Coverage::Hybrid];
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nigeria => write!(f, "NIGERIA"),
            Self::International => write!(f, "INTERNATIONAL"),
            Self::Hybrid => write!(f, "HYBRID"),
        }
    }
}

impl FromStr for Coverage {
    type Err = FrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NIGERIA" => Ok(Self::Nigeria),
            "INTERNATIONAL" => Ok(Self::International),
            "HYBRID" => Ok(Self::Hybrid),
            other => Err(FrameworkError::Validation {
                field: "regulatory_coverage".into(),
                reason: format!(
                    "'{other}' is not a valid coverage; expected NIGERIA, INTERNATIONAL or HYBRID"
                ),
            }),
        }
    }
}

/// Business sector an organization operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "org_sector", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    /// Manufacturing.
    Manufacturing,
    /// Oil and gas.
    OilGas,
    /// Financial services.
    Finance,
}

impl Sector {
    /// All sectors, in declaration order.
    pub const ALL: [Sector; 3] = [Sector::Manufacturing, Sector::OilGas, Sector::Finance];
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manufacturing => write!(f, "manufacturing"),
            Self::OilGas => write!(f, "oil_gas"),
            Self::Finance => write!(f, "finance"),
        }
    }
}

impl FromStr for Sector {
    type Err = FrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manufacturing" => Ok(Self::Manufacturing),
            "oil_gas" => Ok(Self::OilGas),
            "finance" => Ok(Self::Finance),
            other => Err(FrameworkError::Validation {
                field: "sector".into(),
                reason: format!(
                    "'{other}' is not a valid sector; expected manufacturing, oil_gas or finance"
                ),
            }),
        }
    }
}

/// Who created an assignment row.
///
/// The original data model encoded this as a nullable user reference; the
/// two cases are made exhaustive here so call sites cannot forget to handle
/// the system-originated case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "actor_id", rename_all = "snake_case")]
pub enum AssignedBy {
    /// System-originated (signup bootstrap or automatic expansion).
    System,
    /// A human actor, recorded for accountability.
    User(ActorId),
}

impl AssignedBy {
    /// The actor behind this assignment, if a human was involved.
    #[must_use]
    pub fn actor(&self) -> Option<ActorId> {
        match self {
            Self::System => None,
            Self::User(id) => Some(*id),
        }
    }

    /// Whether this assignment was made by the system itself.
    #[must_use]
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System)
    }
}

impl fmt::Display for AssignedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User(id) => write!(f, "user:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_round_trips_wire_spelling() {
        for coverage in Coverage::ALL {
            assert_eq!(coverage.to_string().parse::<Coverage>().unwrap(), coverage);
        }
    }

    #[test]
    fn sector_round_trips_wire_spelling() {
        for sector in Sector::ALL {
            assert_eq!(sector.to_string().parse::<Sector>().unwrap(), sector);
        }
    }

    #[test]
    fn unknown_sector_is_a_validation_error() {
        let err = "mining".parse::<Sector>().unwrap_err();
        match err {
            FrameworkError::Validation { field, .. } => assert_eq!(field, "sector"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn assigned_by_exposes_actor_only_for_users() {
        let actor = ActorId::new();
        assert_eq!(AssignedBy::System.actor(), None);
        assert_eq!(AssignedBy::User(actor).actor(), Some(actor));
        assert!(AssignedBy::System.is_system());
        assert!(!AssignedBy::User(actor).is_system());
    }
}
