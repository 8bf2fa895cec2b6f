//! Coverage engine: maps (sector, coverage) to the assignable framework set.
//!
//! Pure computation over a catalog snapshot. No I/O, no state; the same
//! inputs always produce the same ordered output, which is what makes
//! primary selection reproducible.

use crate::catalog::{Framework, FrameworkCatalog};
use crate::types::{Coverage, Jurisdiction, Sector};

/// Compute the ordered set of frameworks assignable to an organization with
/// the given sector and coverage.
///
/// Rule table:
/// - `NIGERIA`: active Nigerian frameworks that are cross-sector or match
///   the sector.
/// - `INTERNATIONAL`: active cross-sector international frameworks only.
///   Sector-specific international frameworks are deliberately excluded at
///   this stage.
/// - `HYBRID`: the union of the two rules above, deduplicated by code,
///   Nigerian block first.
///
/// Each rule's output is ordered by priority descending, ties broken by
/// code ascending. For `HYBRID` the two blocks keep that order but are not
/// re-sorted against each other: the Nigerian regulators come first, so a
/// hybrid organization's primary is its top Nigerian framework. An empty
/// result is valid: it means no framework in the snapshot matches, not
/// that anything went wrong.
#[must_use]
pub fn compute_assignable<'a>(
    catalog: &'a FrameworkCatalog,
    sector: Sector,
    coverage: Coverage,
) -> Vec<&'a Framework> {
    match coverage {
        Coverage::Nigeria => catalog.query(Jurisdiction::Nigeria, Some(sector)),
        Coverage::International => catalog.query(Jurisdiction::International, None),
        Coverage::Hybrid => {
            let mut combined = catalog.query(Jurisdiction::Nigeria, Some(sector));
            for framework in catalog.query(Jurisdiction::International, None) {
                if !combined.iter().any(|f| f.code == framework.code) {
                    combined.push(framework);
                }
            }
            combined
        }
    }
}

/// The assignable set as owned codes, in assignment order.
///
/// The first code, if any, is the primary candidate.
#[must_use]
pub fn assignable_codes(
    catalog: &FrameworkCatalog,
    sector: Sector,
    coverage: Coverage,
) -> Vec<String> {
    compute_assignable(catalog, sector, coverage)
        .into_iter()
        .map(|f| f.code.clone())
        .collect()
}

/// The framework that would be selected as primary, if the set is non-empty.
#[must_use]
pub fn primary_candidate<'a>(
    catalog: &'a FrameworkCatalog,
    sector: Sector,
    coverage: Coverage,
) -> Option<&'a Framework> {
    compute_assignable(catalog, sector, coverage).into_iter().next()
}
