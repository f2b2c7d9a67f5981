//! Response types returned as JSON by `ward` commands.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CapabilityBundle, CapabilityView, RoleGroup};
use crate::enums::{EntityType, Environment, VisibilityTier};

/// Result of a single assign/revoke/delete.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MutationResponse {
    pub entity: EntityType,
    pub id: String,
    pub target: Option<String>,
    pub changed: bool,
}

/// Result of `bulk_assign_group`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BulkAssignResponse {
    pub group_id: String,
    /// Users that did not hold the group before.
    pub changed: BTreeSet<String>,
    /// Users that already held the group.
    pub unchanged: BTreeSet<String>,
    /// Ids or queries that matched no user, in input order.
    pub skipped: Vec<String>,
}

/// One tenant row of a user's access map.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TenantAccess {
    pub tenant: String,
    pub capabilities: CapabilityView,
}

/// Response from `ward access-map`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AccessMapResponse {
    pub user_id: String,
    pub base_tenant: String,
    pub tier: VisibilityTier,
    pub tenants: Vec<TenantAccess>,
}

/// Roles and groups that can still be assigned to a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssignMenuResponse {
    pub user_id: String,
    pub roles: Vec<String>,
    pub groups: Vec<RoleGroup>,
}

/// A role inside a group summary. Unknown roles carry an empty bundle.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoleSummary {
    pub name: String,
    pub known: bool,
    pub capabilities: CapabilityBundle,
}

/// Response from `ward group show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GroupDetailResponse {
    pub group: RoleGroup,
    pub roles: Vec<RoleSummary>,
}

/// Response from `ward context`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContextResponse {
    pub tenant: String,
    pub environment: Environment,
    pub is_root: bool,
}
