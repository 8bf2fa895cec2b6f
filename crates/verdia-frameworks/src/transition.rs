//! Coverage transition guard: expand-only validation over the coverage
//! lattice.
//!
//! Coverage forms a three-element partial order with `HYBRID` at the top:
//! `NIGERIA < HYBRID` and `INTERNATIONAL < HYBRID`. The order is kept as an
//! explicit table so adding a jurisdiction later means extending the table,
//! not rewriting branch logic.

use crate::error::{FrameworkError, Result};
use crate::types::Coverage;

/// Upward edges of the coverage lattice: `(from, to)` pairs where `to`
/// strictly broadens `from`.
const UPGRADES: &[(Coverage, Coverage)] = &[
    (Coverage::Nigeria, Coverage::Hybrid),
    (Coverage::International, Coverage::Hybrid),
];

/// The kind of coverage transition a request represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Coverage is unchanged; always allowed.
    NoOp,
    /// Coverage broadens along the lattice; the ordinary expansion path.
    Expansion,
    /// A downward or lateral move explicitly forced by a human actor.
    /// Must be attributed to that actor and audited as an exception.
    ForcedOverride,
}

/// Whether `to` is reachable from `from` by moving upward in the lattice.
#[must_use]
pub fn is_expansion(from: Coverage, to: Coverage) -> bool {
    UPGRADES.contains(&(from, to))
}

/// Validate a coverage change before any write happens.
///
/// Same-value transitions are no-ops and always allowed. Upward moves are
/// ordinary expansions. Anything else is rejected with
/// [`FrameworkError::InvalidTransition`] unless `force_override` is set, in
/// which case the caller is obliged to attribute the resulting assignment
/// run to a human actor.
pub fn validate_transition(
    from: Coverage,
    to: Coverage,
    force_override: bool,
) -> Result<TransitionKind> {
    if from == to {
        return Ok(TransitionKind::NoOp);
    }
    if is_expansion(from, to) {
        return Ok(TransitionKind::Expansion);
    }
    if force_override {
        return Ok(TransitionKind::ForcedOverride);
    }
    Err(FrameworkError::InvalidTransition { from, to })
}
