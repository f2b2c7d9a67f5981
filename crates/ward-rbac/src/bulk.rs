//! Bulk group assignment.

use std::collections::HashSet;

use ward_core::errors::CoreError;
use ward_core::responses::BulkAssignResponse;

use crate::directory::IdentityDirectory;
use crate::groups::RoleGroupRegistry;

/// Assign `group_id` to every listed user that exists.
///
/// Repeated ids are applied once. Ids with no directory record are reported
/// in `skipped`. Each assignment is
/// idempotent, so a repeated or partially applied bulk action converges.
///
/// # Errors
///
/// Returns `CoreError::NotFound` for an unknown group, before any user is
/// touched.
pub fn bulk_assign_group<S: AsRef<str>>(
    directory: &mut IdentityDirectory,
    registry: &RoleGroupRegistry,
    group_id: &str,
    user_ids: &[S],
) -> Result<BulkAssignResponse, CoreError> {
    registry.require(group_id)?;

    let mut response = BulkAssignResponse {
        group_id: group_id.to_string(),
        ..BulkAssignResponse::default()
    };
    let mut seen = HashSet::new();
    for user_id in user_ids.iter().map(AsRef::as_ref).filter(|id| seen.insert(*id)) {
        match directory.assign_group(user_id, group_id, registry) {
            Ok(true) => {
                response.changed.insert(user_id.to_string());
            }
            Ok(false) => {
                response.unchanged.insert(user_id.to_string());
            }
            Err(err) if err.is_not_found() => response.skipped.push(user_id.to_string()),
            Err(err) => return Err(err),
        }
    }

    tracing::info!(
        group_id,
        changed = response.changed.len(),
        unchanged = response.unchanged.len(),
        skipped = response.skipped.len(),
        "bulk group assignment applied"
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::bulk_assign_group;
    use crate::seed::SeedData;

    #[test]
    fn repeated_ids_are_reported_once() {
        let mut state = SeedData::builtin().unwrap().into_state().unwrap();
        let ids = ["3", "3", "x", "x"];
        let response =
            bulk_assign_group(&mut state.directory, &state.groups, "rg-exec", &ids).unwrap();
        assert_eq!(response.changed.iter().collect::<Vec<_>>(), ["3"]);
        assert!(response.unchanged.is_empty());
        assert_eq!(response.skipped, ["x"]);
    }
}
