//! Directory filtering.
//!
//! Dimensions are ANDed; values inside one multi-select are ORed. An empty
//! selection, or one covering every available value, never narrows anything.

use serde::Serialize;
use ward_core::entities::UserRecord;

use crate::catalog::RoleCatalog;
use crate::directory::IdentityDirectory;
use crate::groups::RoleGroupRegistry;

/// Values a filter can select from, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub tenants: Vec<String>,
    pub groups: Vec<String>,
    pub roles: Vec<String>,
}

impl FilterOptions {
    /// Tenants in first-seen order, group names in registry order, role
    /// names in catalog order.
    #[must_use]
    pub fn collect(
        directory: &IdentityDirectory,
        registry: &RoleGroupRegistry,
        catalog: &RoleCatalog,
    ) -> Self {
        Self {
            tenants: directory.tenants().into_iter().map(String::from).collect(),
            groups: registry.names().map(String::from).collect(),
            roles: catalog.role_names().map(String::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserFilter {
    /// Case-insensitive substring of display name or email.
    pub text: String,
    /// Tenant names; a user matches if they belong to any.
    pub tenants: Vec<String>,
    /// Group names; a user matches if they hold any.
    pub groups: Vec<String>,
    /// Directly assigned role names; a user matches if they hold any.
    pub roles: Vec<String>,
}

impl UserFilter {
    /// The state a console opens with: every tenant and group selected,
    /// no roles selected.
    #[must_use]
    pub fn initial(options: &FilterOptions) -> Self {
        Self {
            text: String::new(),
            tenants: options.tenants.clone(),
            groups: options.groups.clone(),
            roles: Vec::new(),
        }
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Whether this filter would hide anyone given the available `options`.
    #[must_use]
    pub fn is_active(&self, options: &FilterOptions) -> bool {
        !self.text.trim().is_empty()
            || narrows(&self.tenants, &options.tenants)
            || narrows(&self.groups, &options.groups)
            || narrows(&self.roles, &options.roles)
    }

    /// Whether `user` passes the filter. A selection covering every value in
    /// `options` is treated like an empty one, so users without tenants or
    /// groups still pass it.
    #[must_use]
    pub fn matches(
        &self,
        user: &UserRecord,
        registry: &RoleGroupRegistry,
        options: &FilterOptions,
    ) -> bool {
        let needle = self.text.trim().to_lowercase();
        let matches_text = needle.is_empty()
            || user.name.to_lowercase().contains(&needle)
            || user.email.to_lowercase().contains(&needle);
        let matches_tenant = !narrows(&self.tenants, &options.tenants)
            || user.tenants.iter().any(|t| self.tenants.contains(t));
        let matches_group = !narrows(&self.groups, &options.groups)
            || user
                .group_ids
                .iter()
                .filter_map(|id| registry.get(id))
                .any(|group| self.groups.contains(&group.name));
        let matches_role = !narrows(&self.roles, &options.roles)
            || user.assigned_roles.iter().any(|r| self.roles.contains(r));

        matches_text && matches_tenant && matches_group && matches_role
    }

    /// Matching users in directory order.
    #[must_use]
    pub fn apply<'a>(
        &self,
        directory: &'a IdentityDirectory,
        registry: &RoleGroupRegistry,
        options: &FilterOptions,
    ) -> Vec<&'a UserRecord> {
        directory
            .users()
            .iter()
            .filter(|user| self.matches(user, registry, options))
            .collect()
    }
}

fn narrows(selected: &[String], available: &[String]) -> bool {
    !selected.is_empty() && !available.iter().all(|option| selected.contains(option))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use ward_core::entities::UserRecord;
    use ward_core::enums::UserStatus;

    use super::{FilterOptions, UserFilter};
    use crate::groups::RoleGroupRegistry;

    fn options() -> FilterOptions {
        FilterOptions {
            tenants: vec!["Element 5".into(), "LHC".into()],
            groups: vec!["Global Compliance".into()],
            roles: vec!["Admin Authority".into(), "Support Tier 1".into()],
        }
    }

    #[test]
    fn initial_and_cleared_filters_are_inactive() {
        let options = options();
        let mut filter = UserFilter::initial(&options);
        assert_eq!(filter.tenants, options.tenants);
        assert!(filter.roles.is_empty());
        assert!(!filter.is_active(&options));

        filter.text = "jane".into();
        assert!(filter.is_active(&options));
        filter.clear_all();
        assert_eq!(filter, UserFilter::default());
        assert!(!filter.is_active(&options));
    }

    #[rstest]
    #[case::partial_tenants(vec!["LHC".into()], vec![], true)]
    #[case::every_tenant(vec!["LHC".into(), "Element 5".into()], vec![], false)]
    #[case::one_role(vec![], vec!["Support Tier 1".into()], true)]
    #[case::nothing_selected(vec![], vec![], false)]
    fn selection_is_active_only_when_it_narrows(
        #[case] tenants: Vec<String>,
        #[case] roles: Vec<String>,
        #[case] active: bool,
    ) {
        let filter = UserFilter {
            tenants,
            roles,
            ..UserFilter::default()
        };
        assert_eq!(filter.is_active(&options()), active);
    }

    fn user(id: &str, tenants: &[&str], group_ids: &[&str]) -> UserRecord {
        UserRecord {
            id: id.into(),
            name: format!("User {id}"),
            email: format!("user{id}@example.test"),
            tenants: tenants.iter().map(|t| (*t).to_string()).collect(),
            assigned_roles: Vec::new(),
            group_ids: group_ids.iter().map(|g| (*g).to_string()).collect(),
            status: UserStatus::Active,
            global_visibility: false,
        }
    }

    #[test]
    fn initial_filter_keeps_users_without_tenants_or_groups() {
        let registry = RoleGroupRegistry::default();
        let options = FilterOptions {
            tenants: vec!["LHC".into()],
            groups: vec!["Global Compliance".into()],
            roles: vec!["Admin Authority".into()],
        };
        let filter = UserFilter::initial(&options);
        let bare = user("9", &[], &[]);
        assert!(!filter.is_active(&options));
        assert!(filter.matches(&bare, &registry, &options));
    }

    #[test]
    fn partial_group_selection_hides_users_without_groups() {
        let registry = RoleGroupRegistry::default();
        let options = FilterOptions {
            tenants: Vec::new(),
            groups: vec!["Global Compliance".into(), "Executive Audit".into()],
            roles: Vec::new(),
        };
        let filter = UserFilter {
            groups: vec!["Global Compliance".into()],
            ..UserFilter::default()
        };
        assert!(!filter.matches(&user("9", &["LHC"], &[]), &registry, &options));
    }
}
