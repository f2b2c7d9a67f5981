use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserStatus;

/// A directory user. Role groups are referenced by id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    /// Identity key, stored lowercase.
    pub email: String,
    pub tenants: Vec<String>,
    pub assigned_roles: Vec<String>,
    pub group_ids: Vec<String>,
    pub status: UserStatus,
    /// Cross-tenant visibility for root-tenant administrators.
    #[serde(default)]
    pub global_visibility: bool,
}

impl UserRecord {
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.assigned_roles.iter().any(|r| r == role)
    }

    #[must_use]
    pub fn has_group(&self, group_id: &str) -> bool {
        self.group_ids.iter().any(|g| g == group_id)
    }

    /// First listed tenant; the user's home context.
    #[must_use]
    pub fn base_tenant(&self) -> Option<&str> {
        self.tenants.first().map(String::as_str)
    }
}
