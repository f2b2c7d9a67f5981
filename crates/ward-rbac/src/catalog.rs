//! Read-only role catalog.
//!
//! Maps a role name to the capability bundle it grants. Built once from seed
//! data and never mutated afterwards; selectable-role lists follow the order
//! roles were declared in.

use std::collections::HashMap;

use ward_core::entities::{CapabilityBundle, Role};
use ward_core::errors::CoreError;

#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    roles: Vec<Role>,
    index: HashMap<String, usize>,
}

impl RoleCatalog {
    /// Build a catalog. Role names must be unique and non-empty.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` on an empty or duplicate role name.
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Result<Self, CoreError> {
        let mut catalog = Self::default();
        for role in roles {
            if role.name.trim().is_empty() {
                return Err(CoreError::Validation("role name must not be empty".into()));
            }
            if catalog.index.contains_key(&role.name) {
                return Err(CoreError::Validation(format!(
                    "duplicate role '{}'",
                    role.name
                )));
            }
            catalog.index.insert(role.name.clone(), catalog.roles.len());
            catalog.roles.push(role);
        }
        Ok(catalog)
    }

    /// Capability bundle for `name`, if the role exists.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CapabilityBundle> {
        self.index.get(name).map(|&i| &self.roles[i].capabilities)
    }

    /// Like [`Self::lookup`] but a missing role is an error.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown role.
    pub fn require(&self, name: &str) -> Result<&CapabilityBundle, CoreError> {
        self.lookup(name)
            .ok_or_else(|| CoreError::not_found("role", name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Role names in declaration order.
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|role| role.name.as_str())
    }

    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
