//! TOML seed data: role catalog, role groups and directory users.
//!
//! A seed file has three arrays of tables:
//!
//! ```toml
//! [[roles]]
//! name = "Support Tier 1"
//! ecosystem = "None"
//! dashboards = ["Support Queue"]
//!
//! [[roles.workflows]]
//! name = "Denials management"
//! policies = ["Queue Visibility"]
//!
//! [[groups]]
//! id = "rg-support"
//! name = "Standard Support Pack"
//! roles = ["Support Tier 1"]
//!
//! [[users]]
//! id = "3"
//! name = "Jenny Wilson"
//! email = "j.wilson@element5.ai"
//! tenants = ["LHC"]
//! assigned_roles = ["Support Tier 1"]
//! groups = ["rg-support"]
//! ```

use std::path::Path;

use serde::Deserialize;
use ward_core::entities::{CapabilityBundle, Role, RoleGroup, UserRecord, Workflow};
use ward_core::enums::{EcosystemStatus, UserStatus};

use crate::catalog::RoleCatalog;
use crate::directory::IdentityDirectory;
use crate::error::RbacError;
use crate::groups::RoleGroupRegistry;

/// Seed compiled into the crate, used when no seed path is configured.
pub const BUILTIN_SEED: &str = include_str!("../fixtures/seed.toml");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub roles: Vec<RoleSeed>,
    #[serde(default)]
    pub groups: Vec<RoleGroup>,
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleSeed {
    pub name: String,
    #[serde(default)]
    pub workflows: Vec<Workflow>,
    #[serde(default)]
    pub vault_access: bool,
    #[serde(default)]
    pub ecosystem: EcosystemStatus,
    #[serde(default)]
    pub dashboards: Vec<String>,
}

impl From<RoleSeed> for Role {
    fn from(seed: RoleSeed) -> Self {
        Self {
            name: seed.name,
            capabilities: CapabilityBundle {
                workflows: seed.workflows,
                vault_access: seed.vault_access,
                ecosystem: seed.ecosystem,
                dashboards: seed.dashboards,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSeed {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub tenants: Vec<String>,
    #[serde(default)]
    pub assigned_roles: Vec<String>,
    /// Role group ids.
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub global_visibility: bool,
}

/// Everything a [`crate::WardService`] is built from.
#[derive(Debug, Clone)]
pub struct SeedState {
    pub catalog: RoleCatalog,
    pub groups: RoleGroupRegistry,
    pub directory: IdentityDirectory,
}

impl SeedData {
    /// # Errors
    ///
    /// Returns `RbacError::Toml` if the built-in fixture fails to parse.
    pub fn builtin() -> Result<Self, RbacError> {
        Self::from_toml_str(BUILTIN_SEED)
    }

    /// # Errors
    ///
    /// Returns `RbacError::Toml` on malformed TOML or an unexpected layout.
    pub fn from_toml_str(raw: &str) -> Result<Self, RbacError> {
        Ok(toml::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns `RbacError::Io` if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn from_path(path: &Path) -> Result<Self, RbacError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Validate the seed and build the in-memory state.
    ///
    /// User references to unknown groups are dropped with a warning.
    /// References to unknown roles are kept (they resolve to nothing) and
    /// also warned about.
    ///
    /// # Errors
    ///
    /// Returns `RbacError::Seed` for duplicate roles, invalid groups, or
    /// duplicate user ids or emails.
    pub fn into_state(self) -> Result<SeedState, RbacError> {
        let catalog =
            RoleCatalog::new(self.roles.into_iter().map(Role::from)).map_err(seed_error)?;
        let groups = RoleGroupRegistry::from_groups(self.groups, &catalog).map_err(seed_error)?;

        let users = self.users.into_iter().map(|seed| {
            for role in seed.assigned_roles.iter().filter(|r| !catalog.contains(r)) {
                tracing::warn!(user_id = %seed.id, role = %role, "seed user references unknown role");
            }
            let group_ids = seed
                .groups
                .into_iter()
                .filter(|id| {
                    let known = groups.get(id).is_some();
                    if !known {
                        tracing::warn!(user_id = %seed.id, group_id = %id, "dropping unknown group from seed user");
                    }
                    known
                })
                .collect();
            UserRecord {
                group_ids,
                id: seed.id,
                name: seed.name,
                email: seed.email,
                tenants: seed.tenants,
                assigned_roles: seed.assigned_roles,
                status: seed.status,
                global_visibility: seed.global_visibility,
            }
        });
        let directory = IdentityDirectory::new(users).map_err(seed_error)?;

        tracing::debug!(
            roles = catalog.len(),
            groups = groups.len(),
            users = directory.len(),
            "seed loaded"
        );
        Ok(SeedState {
            catalog,
            groups,
            directory,
        })
    }
}

fn seed_error(err: ward_core::errors::CoreError) -> RbacError {
    RbacError::Seed(err.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ward_core::enums::EcosystemStatus;

    use super::SeedData;
    use crate::error::RbacError;

    #[test]
    fn builtin_seed_loads() {
        let state = SeedData::builtin().unwrap().into_state().unwrap();
        let roles: Vec<&str> = state.catalog.role_names().collect();
        assert_eq!(
            roles,
            ["User Authority", "Support Tier 1", "Admin Authority", "Regional Compliance"]
        );
        assert_eq!(state.groups.len(), 3);
        assert_eq!(state.directory.len(), 4);
        assert_eq!(
            state.catalog.lookup("Admin Authority").map(|b| b.ecosystem),
            Some(EcosystemStatus::User)
        );
    }

    #[test]
    fn unknown_group_reference_is_dropped() {
        let raw = r#"
            [[roles]]
            name = "Viewer"

            [[groups]]
            id = "rg-view"
            name = "Viewers"
            roles = ["Viewer"]

            [[users]]
            id = "1"
            name = "A"
            email = " A@X.com "
            groups = ["rg-view", "rg-gone"]
        "#;
        let state = SeedData::from_toml_str(raw).unwrap().into_state().unwrap();
        let user = state.directory.require("1").unwrap();
        assert_eq!(user.group_ids, ["rg-view"]);
        assert_eq!(user.email, "a@x.com");
    }

    #[test]
    fn group_with_unknown_role_is_a_seed_error() {
        let raw = r#"
            [[groups]]
            id = "rg-x"
            name = "X"
            roles = ["Nobody"]
        "#;
        let err = SeedData::from_toml_str(raw).unwrap().into_state().unwrap_err();
        assert!(matches!(err, RbacError::Seed(ref msg) if msg.contains("unknown role")), "{err}");
    }

    #[test]
    fn duplicate_emails_are_rejected() {
        let raw = r#"
            [[users]]
            id = "1"
            name = "A"
            email = "a@x.com"

            [[users]]
            id = "2"
            name = "B"
            email = "A@x.com"
        "#;
        let err = SeedData::from_toml_str(raw).unwrap().into_state().unwrap_err();
        assert!(err.to_string().contains("duplicate user email"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SeedData::from_toml_str("[[roles]\nname=").unwrap_err();
        assert!(matches!(err, RbacError::Toml(_)));
    }
}
