//! Framework catalog: the read-only registry of regulatory frameworks.
//!
//! The catalog is an immutable snapshot value. Callers that need consistency
//! across an engine invocation hold one snapshot for the whole computation;
//! administrative reseeding produces a new snapshot with a bumped version
//! rather than mutating a shared one.

use serde::{Deserialize, Serialize};

use crate::types::{Jurisdiction, Sector};

/// A regulatory or reporting framework definition.
///
/// Reference data managed by an administrative seeding process, never by
/// this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    /// Unique identifier, e.g. `NESREA` or `GRI`.
    pub code: String,
    /// Full framework name.
    pub name: String,
    /// Regulatory jurisdiction.
    pub jurisdiction: Jurisdiction,
    /// Sector restriction; `None` means cross-sector.
    pub sector: Option<Sector>,
    /// Framework description and purpose.
    pub description: String,
    /// Assignment priority, higher is more significant.
    pub priority: i32,
    /// Inactive frameworks are never assignable.
    pub active: bool,
}

impl Framework {
    /// Whether this framework applies to the given sector.
    ///
    /// Cross-sector frameworks apply to every sector in their jurisdiction.
    #[must_use]
    pub fn applies_to(&self, sector: Sector) -> bool {
        self.sector.is_none() || self.sector == Some(sector)
    }
}

/// Immutable, versioned snapshot of the framework registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkCatalog {
    version: u32,
    frameworks: Vec<Framework>,
}

impl FrameworkCatalog {
    /// Build a catalog snapshot from framework records.
    #[must_use]
    pub fn new(version: u32, frameworks: Vec<Framework>) -> Self {
        Self {
            version,
            frameworks,
        }
    }

    /// Snapshot version, bumped on every administrative reseed.
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Number of frameworks in the snapshot, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    /// Whether the snapshot holds no frameworks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }

    /// Look up a framework by code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Framework> {
        self.frameworks.iter().find(|f| f.code == code)
    }

    /// Active frameworks in `jurisdiction` that are cross-sector or match
    /// `sector` exactly, ordered by priority descending then code ascending.
    ///
    /// Passing `sector = None` restricts the result to cross-sector
    /// frameworks only.
    #[must_use]
    pub fn query(&self, jurisdiction: Jurisdiction, sector: Option<Sector>) -> Vec<&Framework> {
        let mut matched: Vec<&Framework> = self
            .frameworks
            .iter()
            .filter(|f| f.active && f.jurisdiction == jurisdiction)
            .filter(|f| match sector {
                Some(s) => f.applies_to(s),
                None => f.sector.is_none(),
            })
            .collect();
        sort_by_assignment_order(&mut matched);
        matched
    }

    /// The standard seeded catalog shipped with the platform.
    ///
    /// Mirrors the administrative seed data: six Nigerian frameworks and
    /// eight cross-sector international frameworks.
    #[must_use]
    pub fn seeded() -> Self {
        let fw = |code: &str,
                  name: &str,
                  jurisdiction: Jurisdiction,
                  sector: Option<Sector>,
                  description: &str,
                  priority: i32| Framework {
            code: code.to_string(),
            name: name.to_string(),
            jurisdiction,
            sector,
            description: description.to_string(),
            priority,
            active: true,
        };

        Self::new(
            1,
            vec![
                // Nigerian frameworks
                fw(
                    "NESREA",
                    "National Environmental Standards and Regulations Enforcement Agency",
                    Jurisdiction::Nigeria,
                    None,
                    "Nigeria's primary environmental regulator enforcing environmental standards",
                    100,
                ),
                fw(
                    "CBN_ESG",
                    "Central Bank of Nigeria ESG Guidelines",
                    Jurisdiction::Nigeria,
                    Some(Sector::Finance),
                    "CBN environmental and social risk management guidelines for financial institutions",
                    90,
                ),
                fw(
                    "DPR",
                    "Department of Petroleum Resources",
                    Jurisdiction::Nigeria,
                    Some(Sector::OilGas),
                    "Regulates oil and gas environmental compliance in Nigeria",
                    90,
                ),
                fw(
                    "NUPRC",
                    "Nigerian Upstream Petroleum Regulatory Commission",
                    Jurisdiction::Nigeria,
                    Some(Sector::OilGas),
                    "Regulates upstream petroleum operations including environmental standards",
                    85,
                ),
                fw(
                    "FMEnv",
                    "Federal Ministry of Environment",
                    Jurisdiction::Nigeria,
                    None,
                    "National environmental policy and EIA requirements",
                    80,
                ),
                fw(
                    "NSE_ESG",
                    "Nigerian Exchange ESG Disclosure Guidelines",
                    Jurisdiction::Nigeria,
                    None,
                    "ESG disclosure requirements for listed companies",
                    75,
                ),
                // International frameworks
                fw(
                    "GRI",
                    "Global Reporting Initiative (GRI Standards)",
                    Jurisdiction::International,
                    None,
                    "World's most widely used sustainability reporting standards",
                    100,
                ),
                fw(
                    "ISSB",
                    "International Sustainability Standards Board (IFRS S1 & S2)",
                    Jurisdiction::International,
                    None,
                    "IFRS sustainability disclosure standards for capital markets",
                    95,
                ),
                fw(
                    "TCFD",
                    "Task Force on Climate-related Financial Disclosures",
                    Jurisdiction::International,
                    None,
                    "Framework for climate-related financial risk disclosures",
                    90,
                ),
                fw(
                    "SASB",
                    "Sustainability Accounting Standards Board",
                    Jurisdiction::International,
                    None,
                    "Industry-specific sustainability accounting standards",
                    85,
                ),
                fw(
                    "CDP",
                    "Carbon Disclosure Project",
                    Jurisdiction::International,
                    None,
                    "Global disclosure system for environmental impact",
                    80,
                ),
                fw(
                    "UN_SDG",
                    "UN Sustainable Development Goals",
                    Jurisdiction::International,
                    None,
                    "17 global goals for sustainable development",
                    75,
                ),
                fw(
                    "ISO14001",
                    "ISO 14001 Environmental Management",
                    Jurisdiction::International,
                    None,
                    "International standard for environmental management systems",
                    70,
                ),
                fw(
                    "IFC_PS",
                    "IFC Performance Standards",
                    Jurisdiction::International,
                    None,
                    "Environmental and social sustainability standards for private sector",
                    65,
                ),
            ],
        )
    }
}

/// Sort frameworks into assignment order: priority descending, ties broken
/// by code ascending so repeated computations pick the same primary.
fn sort_by_assignment_order(frameworks: &mut [&Framework]) {
    frameworks.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.code.cmp(&b.code))
    });
}
