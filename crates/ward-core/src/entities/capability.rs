use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EcosystemStatus;

/// A workflow in the effective view, attributed to the first role granting it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResolvedWorkflow {
    pub name: String,
    pub policies: BTreeSet<String>,
    pub provided_by: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VaultAccess {
    pub enabled: bool,
    pub provided_by: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EcosystemAccess {
    pub status: EcosystemStatus,
    pub provided_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardItem {
    pub name: String,
    pub provided_by: String,
}

/// Resolved dashboards. `provided_by` is the provider of the first item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Dashboards {
    pub items: Vec<DashboardItem>,
    pub provided_by: Option<String>,
}

impl Dashboards {
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }
}

/// The effective capability view for one user. Derived on every read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CapabilityView {
    pub workflows: Vec<ResolvedWorkflow>,
    pub vault_access: VaultAccess,
    pub ecosystem: EcosystemAccess,
    pub dashboards: Dashboards,
}

impl CapabilityView {
    /// Whether nothing is granted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
            && !self.vault_access.enabled
            && !self.ecosystem.status.is_granted()
            && self.dashboards.items.is_empty()
    }
}
