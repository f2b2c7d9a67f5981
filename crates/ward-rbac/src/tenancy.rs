//! Admin context and tenant visibility.

use ward_core::entities::{CapabilityView, UserRecord};
use ward_core::enums::{Environment, VisibilityTier};
use ward_core::responses::{AccessMapResponse, ContextResponse, TenantAccess};

/// Base tenant shown for a user with no tenants.
pub const UNASSIGNED_TENANT: &str = "Unassigned";

/// The tenant and environment the operator is working in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminContext {
    pub tenant: String,
    pub environment: Environment,
    pub root_tenant: String,
}

impl AdminContext {
    pub fn new(
        tenant: impl Into<String>,
        environment: Environment,
        root_tenant: impl Into<String>,
    ) -> Self {
        Self {
            tenant: tenant.into(),
            environment,
            root_tenant: root_tenant.into(),
        }
    }

    /// Operating from the root tenant.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tenant == self.root_tenant
    }

    #[must_use]
    pub fn describe(&self) -> ContextResponse {
        ContextResponse {
            tenant: self.tenant.clone(),
            environment: self.environment,
            is_root: self.is_root(),
        }
    }

    #[must_use]
    pub fn visibility_tier(&self, user: &UserRecord) -> VisibilityTier {
        match user.base_tenant() {
            Some(base) if base == self.root_tenant && user.global_visibility => {
                VisibilityTier::GlobalVision
            }
            Some(base) if base == self.root_tenant => VisibilityTier::StandardRoot,
            _ => VisibilityTier::Restricted,
        }
    }

    /// Tenants shown in the user's access map, without duplicates.
    #[must_use]
    pub fn visible_tenants<'a>(&'a self, user: &'a UserRecord) -> Vec<&'a str> {
        let mut visible: Vec<&str> = match self.visibility_tier(user) {
            VisibilityTier::GlobalVision => user.tenants.iter().map(String::as_str).collect(),
            VisibilityTier::StandardRoot => user
                .base_tenant()
                .into_iter()
                .chain([self.root_tenant.as_str()])
                .collect(),
            VisibilityTier::Restricted => user.base_tenant().into_iter().collect(),
        };
        let mut seen = std::collections::HashSet::new();
        visible.retain(|tenant| seen.insert(*tenant));
        visible
    }

    /// Pair each visible tenant with the user's capabilities.
    ///
    /// Capabilities do not vary by tenant; every row carries the same view.
    #[must_use]
    pub fn access_map(&self, user: &UserRecord, capabilities: &CapabilityView) -> AccessMapResponse {
        AccessMapResponse {
            user_id: user.id.clone(),
            base_tenant: user
                .base_tenant()
                .unwrap_or(UNASSIGNED_TENANT)
                .to_string(),
            tier: self.visibility_tier(user),
            tenants: self
                .visible_tenants(user)
                .into_iter()
                .map(|tenant| TenantAccess {
                    tenant: tenant.to_string(),
                    capabilities: capabilities.clone(),
                })
                .collect(),
        }
    }
}
