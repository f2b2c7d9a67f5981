//! Console action envelope for JSONL replay.
//!
//! Each line of a replay file is one `ConsoleAction`, tagged by `op`:
//!
//! ```text
//! {"op":"assign_role","user_id":"3","role":"Admin Authority"}
//! {"op":"bulk_assign_group","group_id":"rg-exec","user_ids":["1","2"]}
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single mutation a console operator can perform.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ConsoleAction {
    CreateGroup { name: String, roles: Vec<String> },
    AssignRole { user_id: String, role: String },
    RevokeRole { user_id: String, role: String },
    AssignGroup { user_id: String, group_id: String },
    RevokeGroup { user_id: String, group_id: String },
    DeleteUser { user_id: String },
    BulkAssignGroup { group_id: String, user_ids: Vec<String> },
}

impl ConsoleAction {
    /// The `op` tag as written on the wire.
    #[must_use]
    pub const fn op_name(&self) -> &'static str {
        match self {
            Self::CreateGroup { .. } => "create_group",
            Self::AssignRole { .. } => "assign_role",
            Self::RevokeRole { .. } => "revoke_role",
            Self::AssignGroup { .. } => "assign_group",
            Self::RevokeGroup { .. } => "revoke_group",
            Self::DeleteUser { .. } => "delete_user",
            Self::BulkAssignGroup { .. } => "bulk_assign_group",
        }
    }
}

/// What happened when one action was applied.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionOutcome {
    /// 1-based position in the replay file.
    pub line: usize,
    pub op: String,
    pub changed: bool,
    pub detail: Option<serde_json::Value>,
    pub error: Option<String>,
}

/// Response from `ward replay`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReplayResponse {
    pub applied: u32,
    pub failed: u32,
    pub outcomes: Vec<ActionOutcome>,
}
