//! Common test utilities for verdia-frameworks integration tests.
//!
//! All tests run against the seeded catalog snapshot and in-memory stores
//! for isolation and speed.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use verdia_frameworks::audit::InMemoryAuditStore;
use verdia_frameworks::catalog::FrameworkCatalog;
use verdia_frameworks::services::assignment::{AssignmentService, InMemoryAssignmentStore};
use verdia_frameworks::services::provisioning::ProvisioningService;
use verdia_frameworks::types::{ActorId, OrganizationId};

/// Holds the in-memory stores for test isolation.
#[derive(Clone)]
pub struct TestStores {
    pub assignment_store: Arc<InMemoryAssignmentStore>,
    pub audit_store: Arc<InMemoryAuditStore>,
}

impl TestStores {
    /// Create a new set of isolated test stores.
    pub fn new() -> Self {
        Self {
            assignment_store: Arc::new(InMemoryAssignmentStore::new()),
            audit_store: Arc::new(InMemoryAuditStore::new()),
        }
    }
}

impl Default for TestStores {
    fn default() -> Self {
        Self::new()
    }
}

/// The services under test, backed by the shared stores.
pub struct TestServices {
    pub assignment: Arc<AssignmentService>,
    pub provisioning: ProvisioningService,
}

impl TestServices {
    /// Create services backed by the provided stores and catalog.
    pub fn new(stores: &TestStores, catalog: Arc<FrameworkCatalog>) -> Self {
        let assignment = Arc::new(AssignmentService::new(
            stores.assignment_store.clone(),
            stores.audit_store.clone(),
        ));
        let provisioning = ProvisioningService::new(
            catalog,
            assignment.clone(),
            stores.audit_store.clone(),
        );
        Self {
            assignment,
            provisioning,
        }
    }
}

/// Test context containing catalog, stores, services, and identities.
pub struct TestContext {
    pub catalog: Arc<FrameworkCatalog>,
    pub stores: TestStores,
    pub services: TestServices,
    pub org_a: OrganizationId,
    pub org_b: OrganizationId,
    pub actor_id: ActorId,
}

impl TestContext {
    /// Create a new isolated context over the seeded catalog.
    pub fn new() -> Self {
        Self::with_catalog(FrameworkCatalog::seeded())
    }

    /// Create a context over a custom catalog snapshot.
    pub fn with_catalog(catalog: FrameworkCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let stores = TestStores::new();
        let services = TestServices::new(&stores, catalog.clone());
        Self {
            catalog,
            stores,
            services,
            org_a: OrganizationId::new(),
            org_b: OrganizationId::new(),
            actor_id: ActorId::new(),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
