use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named set of catalog roles, assignable as a unit.
///
/// `roles` keeps insertion order with duplicates removed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoleGroup {
    pub id: String,
    pub name: String,
    pub roles: Vec<String>,
}

impl RoleGroup {
    #[must_use]
    pub fn contains_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
