//! Effective permission resolution.
//!
//! Folds the bundles of a user's candidate roles into one attributed
//! [`CapabilityView`]. Candidate order:
//!
//! ```text
//! assigned roles → group 1 roles → group 2 roles → ...
//! ```
//!
//! with later duplicates dropped. Every "first" below means first in that
//! order. Role names missing from the catalog contribute nothing.

use std::collections::HashSet;

use ward_core::entities::{
    CapabilityView, DashboardItem, EcosystemAccess, ResolvedWorkflow, RoleGroup,
    VaultAccess,
};

use crate::catalog::RoleCatalog;

/// De-duplicated candidate roles in resolution order.
#[must_use]
pub fn candidate_roles<'a>(assigned: &'a [String], groups: &'a [RoleGroup]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    assigned
        .iter()
        .chain(groups.iter().flat_map(|group| group.roles.iter()))
        .map(String::as_str)
        .filter(|role| seen.insert(*role))
        .collect()
}

/// Resolve the effective capability view for `(assigned, groups)`.
///
/// Pure and deterministic: the same inputs always yield the same view,
/// attributions included.
#[must_use]
pub fn resolve(catalog: &RoleCatalog, assigned: &[String], groups: &[RoleGroup]) -> CapabilityView {
    let mut view = CapabilityView::default();
    let mut seen_workflows = HashSet::new();
    let mut seen_dashboards = HashSet::new();

    for role in candidate_roles(assigned, groups) {
        let Some(bundle) = catalog.lookup(role) else {
            tracing::debug!(role, "role not in catalog; contributes nothing");
            continue;
        };

        for workflow in &bundle.workflows {
            if seen_workflows.insert(workflow.name.as_str()) {
                view.workflows.push(ResolvedWorkflow {
                    name: workflow.name.clone(),
                    policies: workflow.policies.clone(),
                    provided_by: role.to_string(),
                });
            }
        }

        if bundle.vault_access && !view.vault_access.enabled {
            view.vault_access = VaultAccess {
                enabled: true,
                provided_by: Some(role.to_string()),
            };
        }

        if bundle.ecosystem.is_granted() && !view.ecosystem.status.is_granted() {
            view.ecosystem = EcosystemAccess {
                status: bundle.ecosystem,
                provided_by: Some(role.to_string()),
            };
        }

        for item in &bundle.dashboards {
            if seen_dashboards.insert(item.as_str()) {
                view.dashboards.items.push(DashboardItem {
                    name: item.clone(),
                    provided_by: role.to_string(),
                });
            }
        }
    }

    view.dashboards.provided_by = view
        .dashboards
        .items
        .first()
        .map(|item| item.provided_by.clone());
    view
}
