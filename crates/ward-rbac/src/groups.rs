//! Role group registry and group filtering.

use std::collections::HashSet;

use ward_core::entities::RoleGroup;
use ward_core::errors::CoreError;
use ward_core::ids::{PREFIX_ROLE_GROUP, format_id};

use crate::catalog::RoleCatalog;

/// Queries longer than this also search workflow and policy names.
pub const NESTED_QUERY_MIN_LEN: usize = 3;

/// Filter for [`RoleGroupRegistry::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupFilter {
    pub query: String,
    pub role: Option<String>,
}

impl GroupFilter {
    pub fn new(query: impl Into<String>, role: Option<String>) -> Self {
        Self {
            query: query.into(),
            role: role.filter(|r| !r.is_empty()),
        }
    }

    /// Whether this filter selects a group.
    ///
    /// `(name matches || (long query && nested text matches)) && role matches`
    #[must_use]
    pub fn matches(&self, group: &RoleGroup, catalog: &RoleCatalog) -> bool {
        let needle = self.query.to_lowercase();
        let matches_text = group.name.to_lowercase().contains(&needle);
        let matches_role = self
            .role
            .as_deref()
            .is_none_or(|role| group.contains_role(role));
        let matches_policy = self.query.chars().count() > NESTED_QUERY_MIN_LEN
            && group.roles.iter().any(|role| {
                catalog.lookup(role).is_some_and(|bundle| {
                    bundle.workflows.iter().any(|workflow| {
                        workflow.name.to_lowercase().contains(&needle)
                            || workflow
                                .policies
                                .iter()
                                .any(|policy| policy.to_lowercase().contains(&needle))
                    })
                })
            });

        (matches_text || matches_policy) && matches_role
    }
}

/// Mutable, insertion-ordered collection of role groups.
#[derive(Debug, Clone, Default)]
pub struct RoleGroupRegistry {
    groups: Vec<RoleGroup>,
    next_seq: u64,
}

impl RoleGroupRegistry {
    /// Build a registry from pre-existing groups, validating each one.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a duplicate id, blank name, empty
    /// role list or role missing from `catalog`.
    pub fn from_groups(
        groups: impl IntoIterator<Item = RoleGroup>,
        catalog: &RoleCatalog,
    ) -> Result<Self, CoreError> {
        let mut registry = Self::default();
        for group in groups {
            if registry.get(&group.id).is_some() {
                return Err(CoreError::Validation(format!(
                    "duplicate role group id '{}'",
                    group.id
                )));
            }
            let roles = validate_group(&group.name, group.roles, catalog)?;
            registry.groups.push(RoleGroup {
                id: group.id,
                name: group.name.trim().to_string(),
                roles,
            });
        }
        Ok(registry)
    }

    /// Create a group with a freshly generated id and append it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `name` is blank, `roles` is empty,
    /// or a role is not in the catalog. The registry is unchanged on error.
    pub fn create<I, S>(
        &mut self,
        name: &str,
        roles: I,
        catalog: &RoleCatalog,
    ) -> Result<RoleGroup, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = validate_group(name, roles.into_iter().map(Into::into).collect(), catalog)?;
        let group = RoleGroup {
            id: self.next_id(),
            name: name.trim().to_string(),
            roles,
        };
        tracing::info!(group_id = %group.id, name = %group.name, "role group created");
        self.groups.push(group.clone());
        Ok(group)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RoleGroup> {
        self.groups.iter().find(|group| group.id == id)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown group id.
    pub fn require(&self, id: &str) -> Result<&RoleGroup, CoreError> {
        self.get(id)
            .ok_or_else(|| CoreError::not_found("role_group", id))
    }

    /// Groups matching `filter`, in registry order.
    #[must_use]
    pub fn list<'a>(&'a self, filter: &GroupFilter, catalog: &RoleCatalog) -> Vec<&'a RoleGroup> {
        self.groups
            .iter()
            .filter(|group| filter.matches(group, catalog))
            .collect()
    }

    #[must_use]
    pub fn all(&self) -> &[RoleGroup] {
        &self.groups
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn next_id(&mut self) -> String {
        loop {
            self.next_seq += 1;
            let id = format_id(PREFIX_ROLE_GROUP, self.next_seq);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

/// Check a group definition and return its roles de-duplicated in order.
fn validate_group(
    name: &str,
    roles: Vec<String>,
    catalog: &RoleCatalog,
) -> Result<Vec<String>, CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "role group name must not be empty".into(),
        ));
    }
    if roles.is_empty() {
        return Err(CoreError::Validation(format!(
            "role group '{}' must contain at least one role",
            name.trim()
        )));
    }
    if let Some(unknown) = roles.iter().find(|role| !catalog.contains(role)) {
        return Err(CoreError::Validation(format!("unknown role '{unknown}'")));
    }

    let mut seen = HashSet::new();
    Ok(roles
        .into_iter()
        .filter(|role| seen.insert(role.clone()))
        .collect())
}
