//! Replay of console actions from a JSONL file.

use std::path::Path;

use ward_core::actions::{ActionOutcome, ConsoleAction, ReplayResponse};
use ward_core::errors::CoreError;

use crate::error::RbacError;
use crate::service::WardService;

pub struct ActionReplayer;

impl ActionReplayer {
    /// Apply every action in `path` to `service`, in file order.
    ///
    /// A line that fails to parse or apply is recorded as a failed outcome.
    /// With `strict`, the first failure aborts the replay instead; actions
    /// already applied stay applied.
    ///
    /// # Errors
    ///
    /// `RbacError::Io` if the file cannot be opened, `RbacError::Replay` on
    /// the first failing line in strict mode.
    pub fn replay_file(
        service: &mut WardService,
        path: &Path,
        strict: bool,
    ) -> Result<ReplayResponse, RbacError> {
        let lines = serde_jsonlines::json_lines::<ConsoleAction, _>(path)?
            .map(|line| line.map_err(|e| e.to_string()));
        Self::replay(service, lines, strict)
    }

    /// Apply already-read actions. `Err` items are lines that did not parse.
    ///
    /// # Errors
    ///
    /// `RbacError::Replay` on the first failing line in strict mode.
    pub fn replay<I>(service: &mut WardService, lines: I, strict: bool) -> Result<ReplayResponse, RbacError>
    where
        I: IntoIterator<Item = Result<ConsoleAction, String>>,
    {
        let mut response = ReplayResponse::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line_no = index + 1;
            let outcome = match line {
                Ok(action) => match apply_action(service, &action) {
                    Ok((changed, detail)) => ActionOutcome {
                        line: line_no,
                        op: action.op_name().to_string(),
                        changed,
                        detail: Some(detail),
                        error: None,
                    },
                    Err(err) => failed(line_no, action.op_name(), err.to_string()),
                },
                Err(reason) => failed(line_no, "unparsed", reason),
            };

            if let Some(reason) = &outcome.error {
                if strict {
                    return Err(RbacError::Replay {
                        line: line_no,
                        reason: reason.clone(),
                    });
                }
                tracing::warn!(line = line_no, op = %outcome.op, %reason, "replayed action failed");
                response.failed += 1;
            } else {
                response.applied += 1;
            }
            response.outcomes.push(outcome);
        }

        tracing::info!(
            applied = response.applied,
            failed = response.failed,
            "replay complete"
        );
        Ok(response)
    }
}

/// Apply one action, returning whether it changed state and its response.
///
/// # Errors
///
/// Whatever the underlying service operation returns.
pub fn apply_action(
    service: &mut WardService,
    action: &ConsoleAction,
) -> Result<(bool, serde_json::Value), CoreError> {
    match action {
        ConsoleAction::CreateGroup { name, roles } => {
            let group = service.create_role_group(name, roles.iter().cloned())?;
            Ok((true, to_value(&group)?))
        }
        ConsoleAction::AssignRole { user_id, role } => {
            let r = service.assign_role_to_user(user_id, role)?;
            Ok((r.changed, to_value(&r)?))
        }
        ConsoleAction::RevokeRole { user_id, role } => {
            let r = service.revoke_role_from_user(user_id, role)?;
            Ok((r.changed, to_value(&r)?))
        }
        ConsoleAction::AssignGroup { user_id, group_id } => {
            let r = service.assign_group_to_user(user_id, group_id)?;
            Ok((r.changed, to_value(&r)?))
        }
        ConsoleAction::RevokeGroup { user_id, group_id } => {
            let r = service.revoke_group_from_user(user_id, group_id)?;
            Ok((r.changed, to_value(&r)?))
        }
        ConsoleAction::DeleteUser { user_id } => {
            let r = service.delete_user(user_id)?;
            Ok((r.changed, to_value(&r)?))
        }
        ConsoleAction::BulkAssignGroup { group_id, user_ids } => {
            let r = service.bulk_assign_group(group_id, user_ids)?;
            Ok((!r.changed.is_empty(), to_value(&r)?))
        }
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(value).map_err(|e| CoreError::Other(e.into()))
}

fn failed(line: usize, op: &str, reason: String) -> ActionOutcome {
    ActionOutcome {
        line,
        op: op.to_string(),
        changed: false,
        detail: None,
        error: Some(reason),
    }
}
