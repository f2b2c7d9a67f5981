//! Identity directory: the sole owner of user records.
//!
//! Every mutation targets one record by id, reports whether it changed
//! anything, and leaves the record untouched when it fails.

use std::collections::HashSet;

use ward_core::entities::{FoundUser, RoleGroup, UserDetail, UserRecord};
use ward_core::errors::CoreError;
use ward_core::ids::normalize_identity_key;

use crate::catalog::RoleCatalog;
use crate::groups::RoleGroupRegistry;
use crate::resolver::resolve;

/// Split raw search input on whitespace, commas and semicolons.
#[must_use]
pub fn split_identity_input(raw: &str) -> Vec<&str> {
    raw.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|key| !key.is_empty())
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct IdentityDirectory {
    users: Vec<UserRecord>,
}

impl IdentityDirectory {
    /// Build a directory. Emails are stored normalized.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank or duplicate id or email.
    pub fn new(users: impl IntoIterator<Item = UserRecord>) -> Result<Self, CoreError> {
        let mut ids = HashSet::new();
        let mut emails = HashSet::new();
        let mut directory = Self::default();
        for mut user in users {
            user.email = normalize_identity_key(&user.email);
            if user.id.trim().is_empty() || user.email.is_empty() {
                return Err(CoreError::Validation(
                    "user id and email must not be empty".into(),
                ));
            }
            if !ids.insert(user.id.clone()) {
                return Err(CoreError::Validation(format!("duplicate user id '{}'", user.id)));
            }
            if !emails.insert(user.email.clone()) {
                return Err(CoreError::Validation(format!(
                    "duplicate user email '{}'",
                    user.email
                )));
            }
            directory.users.push(user);
        }
        Ok(directory)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown or deleted user id.
    pub fn require(&self, id: &str) -> Result<&UserRecord, CoreError> {
        self.get(id).ok_or_else(|| CoreError::not_found("user", id))
    }

    /// Look up by identity key; the key is normalized first.
    #[must_use]
    pub fn find_by_email(&self, key: &str) -> Option<&UserRecord> {
        let key = normalize_identity_key(key);
        self.users.iter().find(|user| user.email == key)
    }

    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Union of all users' tenants in first-seen order.
    #[must_use]
    pub fn tenants(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.users
            .iter()
            .flat_map(|user| user.tenants.iter())
            .map(String::as_str)
            .filter(|tenant| seen.insert(*tenant))
            .collect()
    }

    /// One detail per key, in input order, duplicates kept.
    #[must_use]
    pub fn search<S: AsRef<str>>(
        &self,
        keys: &[S],
        registry: &RoleGroupRegistry,
        catalog: &RoleCatalog,
    ) -> Vec<UserDetail> {
        keys.iter()
            .map(|key| {
                let key = key.as_ref();
                self.find_by_email(key).map_or_else(
                    || UserDetail::missing(key),
                    |user| UserDetail::Found(found_user(user, registry, catalog)),
                )
            })
            .collect()
    }

    /// Assign a catalog role directly. Re-assigning is a no-op.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown user, `Validation` for a role outside the
    /// catalog.
    pub fn assign_role(
        &mut self,
        user_id: &str,
        role: &str,
        catalog: &RoleCatalog,
    ) -> Result<bool, CoreError> {
        self.require(user_id)?;
        if !catalog.contains(role) {
            return Err(CoreError::Validation(format!("unknown role '{role}'")));
        }
        let user = self.get_mut(user_id)?;
        if user.has_role(role) {
            tracing::debug!(user_id, role, "role already assigned");
            return Ok(false);
        }
        user.assigned_roles.push(role.to_string());
        tracing::info!(user_id, role, "role assigned");
        Ok(true)
    }

    /// Revoke a directly assigned role. Revoking an absent role is a no-op.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown user.
    pub fn revoke_role(&mut self, user_id: &str, role: &str) -> Result<bool, CoreError> {
        let user = self.get_mut(user_id)?;
        let before = user.assigned_roles.len();
        user.assigned_roles.retain(|r| r != role);
        let changed = user.assigned_roles.len() != before;
        if changed {
            tracing::info!(user_id, role, "role revoked");
        } else {
            tracing::debug!(user_id, role, "role was not assigned");
        }
        Ok(changed)
    }

    /// Add the user to a registered group. Re-assigning is a no-op.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown user or group.
    pub fn assign_group(
        &mut self,
        user_id: &str,
        group_id: &str,
        registry: &RoleGroupRegistry,
    ) -> Result<bool, CoreError> {
        self.require(user_id)?;
        registry.require(group_id)?;
        let user = self.get_mut(user_id)?;
        if user.has_group(group_id) {
            tracing::debug!(user_id, group_id, "group already assigned");
            return Ok(false);
        }
        user.group_ids.push(group_id.to_string());
        tracing::info!(user_id, group_id, "group assigned");
        Ok(true)
    }

    /// Remove the user from a group. Removing an absent group is a no-op.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown user.
    pub fn revoke_group(&mut self, user_id: &str, group_id: &str) -> Result<bool, CoreError> {
        let user = self.get_mut(user_id)?;
        let before = user.group_ids.len();
        user.group_ids.retain(|g| g != group_id);
        let changed = user.group_ids.len() != before;
        if changed {
            tracing::info!(user_id, group_id, "group revoked");
        } else {
            tracing::debug!(user_id, group_id, "group was not assigned");
        }
        Ok(changed)
    }

    /// Remove a record for good and return it.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown or already deleted user.
    pub fn delete(&mut self, user_id: &str) -> Result<UserRecord, CoreError> {
        let index = self
            .users
            .iter()
            .position(|user| user.id == user_id)
            .ok_or_else(|| CoreError::not_found("user", user_id))?;
        let removed = self.users.remove(index);
        tracing::info!(user_id, email = %removed.email, "user deleted");
        Ok(removed)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut UserRecord, CoreError> {
        self.users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| CoreError::not_found("user", id))
    }
}

/// Groups held by `user`, in assignment order. Dangling ids are skipped.
#[must_use]
pub fn hydrate_groups(user: &UserRecord, registry: &RoleGroupRegistry) -> Vec<RoleGroup> {
    user.group_ids
        .iter()
        .filter_map(|id| registry.get(id).cloned())
        .collect()
}

/// Build the found-user view: hydrated groups plus a fresh resolution.
#[must_use]
pub fn found_user(user: &UserRecord, registry: &RoleGroupRegistry, catalog: &RoleCatalog) -> FoundUser {
    let role_groups = hydrate_groups(user, registry);
    let capabilities = resolve(catalog, &user.assigned_roles, &role_groups);
    FoundUser {
        user: user.clone(),
        role_groups,
        capabilities,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::split_identity_input;
    use crate::seed::SeedData;

    #[rstest]
    #[case::commas("a@x.com, b@x.com", &["a@x.com", "b@x.com"])]
    #[case::semicolons_and_newlines("a@x.com;b@x.com\nc@x.com", &["a@x.com", "b@x.com", "c@x.com"])]
    #[case::runs_of_separators(" ,; a@x.com ,,\t", &["a@x.com"])]
    #[case::empty("", &[])]
    #[case::keeps_duplicates("a@x.com a@x.com", &["a@x.com", "a@x.com"])]
    fn splits_raw_search_input(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(split_identity_input(raw), expected);
    }

    #[test]
    fn search_keeps_raw_text_of_unmatched_keys() {
        let state = SeedData::builtin().unwrap().into_state().unwrap();
        let details = state.directory.search(
            &["  Ghost@Nowhere.io ", " J.WILSON@element5.ai"],
            &state.groups,
            &state.catalog,
        );
        assert_eq!(details[0].display_email(), "  Ghost@Nowhere.io ");
        assert!(!details[0].is_found());
        assert_eq!(details[1].user_id(), Some("3"));
    }
}
