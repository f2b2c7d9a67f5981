//! Console service owning the catalog, the group registry and the directory.
//!
//! `WardService` is the single entry point a presentation layer talks to.
//! Queries take `&self`; mutations take `&mut self` and return whether they
//! changed anything.

use std::path::Path;

use ward_core::entities::{CapabilityView, RoleGroup, UserDetail, UserRecord};
use ward_core::enums::EntityType;
use ward_core::errors::CoreError;
use ward_core::responses::{
    AccessMapResponse, AssignMenuResponse, BulkAssignResponse, ContextResponse,
    GroupDetailResponse, MutationResponse, RoleSummary,
};

use crate::bulk::bulk_assign_group;
use crate::catalog::RoleCatalog;
use crate::directory::{IdentityDirectory, found_user, hydrate_groups, split_identity_input};
use crate::error::RbacError;
use crate::filter::{FilterOptions, UserFilter};
use crate::groups::{GroupFilter, RoleGroupRegistry};
use crate::resolver::resolve;
use crate::results::ResultSet;
use crate::seed::{SeedData, SeedState};
use crate::tenancy::AdminContext;

pub struct WardService {
    catalog: RoleCatalog,
    groups: RoleGroupRegistry,
    directory: IdentityDirectory,
    context: AdminContext,
}

impl WardService {
    #[must_use]
    pub fn new(state: SeedState, context: AdminContext) -> Self {
        let SeedState {
            catalog,
            groups,
            directory,
        } = state;
        Self {
            catalog,
            groups,
            directory,
            context,
        }
    }

    /// Service over the compiled-in seed.
    ///
    /// # Errors
    ///
    /// Returns `RbacError` if the built-in seed fails validation.
    pub fn builtin(context: AdminContext) -> Result<Self, RbacError> {
        Ok(Self::new(SeedData::builtin()?.into_state()?, context))
    }

    /// Service over a seed file, or the built-in seed when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `RbacError` if the file cannot be read, parsed or validated.
    pub fn from_seed_path(path: Option<&Path>, context: AdminContext) -> Result<Self, RbacError> {
        let seed = match path {
            Some(path) => SeedData::from_path(path)?,
            None => SeedData::builtin()?,
        };
        Ok(Self::new(seed.into_state()?, context))
    }

    #[must_use]
    pub const fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn groups(&self) -> &RoleGroupRegistry {
        &self.groups
    }

    #[must_use]
    pub const fn directory(&self) -> &IdentityDirectory {
        &self.directory
    }

    #[must_use]
    pub const fn admin_context(&self) -> &AdminContext {
        &self.context
    }

    #[must_use]
    pub fn context(&self) -> ContextResponse {
        self.context.describe()
    }

    // -- search ---------------------------------------------------------------

    /// Search by raw input: emails separated by whitespace, commas or
    /// semicolons. One entry per key, in order, duplicates kept.
    #[must_use]
    pub fn search_identities(&self, raw_input: &str) -> Vec<UserDetail> {
        let keys = split_identity_input(raw_input);
        self.directory.search(&keys, &self.groups, &self.catalog)
    }

    /// Like [`Self::search_identities`] but keeps the keys for later refresh.
    #[must_use]
    pub fn search_results(&self, raw_input: &str) -> ResultSet {
        let keys: Vec<String> = split_identity_input(raw_input)
            .into_iter()
            .map(String::from)
            .collect();
        let entries = self.directory.search(&keys, &self.groups, &self.catalog);
        ResultSet::new(keys, entries)
    }

    /// Re-run a result set's keys against the current directory state.
    pub fn refresh_results(&self, results: &mut ResultSet) {
        let entries = self
            .directory
            .search(results.keys(), &self.groups, &self.catalog);
        results.replace_entries(entries);
    }

    /// Add `group_id` to the found user shown under `email`, or remove it if
    /// they already hold it. Returns whether the user now holds the group.
    ///
    /// # Errors
    ///
    /// `NotFound` if no found entry matches `email`, or the group is unknown.
    pub fn toggle_result_group(
        &mut self,
        results: &mut ResultSet,
        email: &str,
        group_id: &str,
    ) -> Result<bool, CoreError> {
        let user_id = results
            .find(email)
            .and_then(UserDetail::user_id)
            .map(String::from)
            .ok_or_else(|| CoreError::not_found("user", email.trim()))?;
        let holds = self.directory.require(&user_id)?.has_group(group_id);
        if holds {
            self.directory.revoke_group(&user_id, group_id)?;
        } else {
            self.directory.assign_group(&user_id, group_id, &self.groups)?;
        }
        self.refresh_results(results);
        Ok(!holds)
    }

    /// Bulk-assign `group_id` to every found user in `results`; not-found
    /// entries are reported as skipped.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown group, before anything changes.
    pub fn bulk_assign_results(
        &mut self,
        results: &mut ResultSet,
        group_id: &str,
    ) -> Result<BulkAssignResponse, CoreError> {
        let mut response = self.bulk_assign_group(group_id, &results.found_user_ids())?;
        response
            .skipped
            .extend(results.missing_queries().into_iter().map(String::from));
        self.refresh_results(results);
        Ok(response)
    }

    // -- resolution -----------------------------------------------------------

    /// # Errors
    ///
    /// `NotFound` for an unknown user.
    pub fn resolve_effective_permissions(&self, user_id: &str) -> Result<CapabilityView, CoreError> {
        let user = self.directory.require(user_id)?;
        let groups = hydrate_groups(user, &self.groups);
        Ok(resolve(&self.catalog, &user.assigned_roles, &groups))
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown user.
    pub fn user_detail(&self, user_id: &str) -> Result<UserDetail, CoreError> {
        let user = self.directory.require(user_id)?;
        Ok(UserDetail::Found(found_user(user, &self.groups, &self.catalog)))
    }

    // -- role groups ----------------------------------------------------------

    /// # Errors
    ///
    /// `Validation` for a blank name, no roles, or a role outside the catalog.
    pub fn create_role_group<I, S>(&mut self, name: &str, roles: I) -> Result<RoleGroup, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.create(name, roles, &self.catalog)
    }

    #[must_use]
    pub fn filter_role_groups(&self, query: &str, role_filter: Option<&str>) -> Vec<RoleGroup> {
        let filter = GroupFilter::new(query, role_filter.map(String::from));
        self.groups
            .list(&filter, &self.catalog)
            .into_iter()
            .cloned()
            .collect()
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown group.
    pub fn describe_group(&self, group_id: &str) -> Result<GroupDetailResponse, CoreError> {
        let group = self.groups.require(group_id)?;
        let roles = group
            .roles
            .iter()
            .map(|name| {
                let bundle = self.catalog.lookup(name);
                RoleSummary {
                    name: name.clone(),
                    known: bundle.is_some(),
                    capabilities: bundle.cloned().unwrap_or_default(),
                }
            })
            .collect();
        Ok(GroupDetailResponse {
            group: group.clone(),
            roles,
        })
    }

    // -- directory mutations --------------------------------------------------

    /// # Errors
    ///
    /// `NotFound` for an unknown user, `Validation` for an unknown role.
    pub fn assign_role_to_user(&mut self, user_id: &str, role: &str) -> Result<MutationResponse, CoreError> {
        let changed = self.directory.assign_role(user_id, role, &self.catalog)?;
        Ok(mutation(EntityType::Role, user_id, Some(role), changed))
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown user.
    pub fn revoke_role_from_user(&mut self, user_id: &str, role: &str) -> Result<MutationResponse, CoreError> {
        let changed = self.directory.revoke_role(user_id, role)?;
        Ok(mutation(EntityType::Role, user_id, Some(role), changed))
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown user or group.
    pub fn assign_group_to_user(
        &mut self,
        user_id: &str,
        group_id: &str,
    ) -> Result<MutationResponse, CoreError> {
        let changed = self.directory.assign_group(user_id, group_id, &self.groups)?;
        Ok(mutation(EntityType::RoleGroup, user_id, Some(group_id), changed))
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown user.
    pub fn revoke_group_from_user(
        &mut self,
        user_id: &str,
        group_id: &str,
    ) -> Result<MutationResponse, CoreError> {
        let changed = self.directory.revoke_group(user_id, group_id)?;
        Ok(mutation(EntityType::RoleGroup, user_id, Some(group_id), changed))
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown or already deleted user.
    pub fn delete_user(&mut self, user_id: &str) -> Result<MutationResponse, CoreError> {
        self.directory.delete(user_id)?;
        Ok(mutation(EntityType::User, user_id, None, true))
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown group, before anything changes.
    pub fn bulk_assign_group<S: AsRef<str>>(
        &mut self,
        group_id: &str,
        user_ids: &[S],
    ) -> Result<BulkAssignResponse, CoreError> {
        bulk_assign_group(&mut self.directory, &self.groups, group_id, user_ids)
    }

    // -- listing --------------------------------------------------------------

    #[must_use]
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::collect(&self.directory, &self.groups, &self.catalog)
    }

    #[must_use]
    pub fn list_users(&self, filter: &UserFilter) -> Vec<&UserRecord> {
        filter.apply(&self.directory, &self.groups, &self.filter_options())
    }

    /// Catalog roles and registry groups the user does not hold yet.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown user.
    pub fn assign_menu(&self, user_id: &str) -> Result<AssignMenuResponse, CoreError> {
        let user = self.directory.require(user_id)?;
        Ok(AssignMenuResponse {
            user_id: user.id.clone(),
            roles: self
                .catalog
                .role_names()
                .filter(|role| !user.has_role(role))
                .map(String::from)
                .collect(),
            groups: self
                .groups
                .all()
                .iter()
                .filter(|group| !user.has_group(&group.id))
                .cloned()
                .collect(),
        })
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown user.
    pub fn access_map(&self, user_id: &str) -> Result<AccessMapResponse, CoreError> {
        let user = self.directory.require(user_id)?;
        let capabilities = self.resolve_effective_permissions(user_id)?;
        Ok(self.context.access_map(user, &capabilities))
    }
}

fn mutation(entity: EntityType, id: &str, target: Option<&str>, changed: bool) -> MutationResponse {
    MutationResponse {
        entity,
        id: id.to_string(),
        target: target.map(String::from),
        changed,
    }
}
