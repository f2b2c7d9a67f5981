use anyhow::bail;
use schemars::{Schema, schema_for};
use ward_core::actions::{ActionOutcome, ConsoleAction, ReplayResponse};
use ward_core::entities::{
    CapabilityBundle, CapabilityView, Role, RoleGroup, UserDetail, UserRecord,
};
use ward_core::responses::{
    AccessMapResponse, AssignMenuResponse, BulkAssignResponse, ContextResponse,
    GroupDetailResponse, MutationResponse,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `ward schema`, in listing order.
pub const SCHEMA_NAMES: &[&str] = &[
    "role",
    "capability_bundle",
    "role_group",
    "user_record",
    "user_detail",
    "capability_view",
    "console_action",
    "action_outcome",
    "replay_response",
    "mutation_response",
    "bulk_assign_response",
    "access_map_response",
    "assign_menu_response",
    "group_detail_response",
    "context_response",
];

/// JSON schema for a registered type name.
pub fn schema_by_name(name: &str) -> Option<Schema> {
    let schema = match name {
        "role" => schema_for!(Role),
        "capability_bundle" => schema_for!(CapabilityBundle),
        "role_group" => schema_for!(RoleGroup),
        "user_record" => schema_for!(UserRecord),
        "user_detail" => schema_for!(UserDetail),
        "capability_view" => schema_for!(CapabilityView),
        "console_action" => schema_for!(ConsoleAction),
        "action_outcome" => schema_for!(ActionOutcome),
        "replay_response" => schema_for!(ReplayResponse),
        "mutation_response" => schema_for!(MutationResponse),
        "bulk_assign_response" => schema_for!(BulkAssignResponse),
        "access_map_response" => schema_for!(AccessMapResponse),
        "assign_menu_response" => schema_for!(AssignMenuResponse),
        "group_detail_response" => schema_for!(GroupDetailResponse),
        "context_response" => schema_for!(ContextResponse),
        _ => return None,
    };
    Some(schema)
}

/// Handle `ward schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let name = args.type_name.trim().to_ascii_lowercase().replace('-', "_");
    let Some(schema) = schema_by_name(&name) else {
        bail!(
            "unknown schema type '{}'; expected one of: {}",
            args.type_name,
            SCHEMA_NAMES.join(", ")
        );
    };
    output(&schema, flags)
}
