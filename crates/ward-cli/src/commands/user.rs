#[path = "user/list.rs"]
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ward user`.
pub fn handle(action: &UserCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::List(args) => list::run(args, ctx, flags),
        UserCommands::AssignRole { user_id, role } => {
            output(&ctx.service.assign_role_to_user(user_id, role)?, flags)
        }
        UserCommands::RevokeRole { user_id, role } => {
            output(&ctx.service.revoke_role_from_user(user_id, role)?, flags)
        }
        UserCommands::AssignGroup { user_id, group_id } => {
            output(&ctx.service.assign_group_to_user(user_id, group_id)?, flags)
        }
        UserCommands::RevokeGroup { user_id, group_id } => {
            output(&ctx.service.revoke_group_from_user(user_id, group_id)?, flags)
        }
        UserCommands::Delete { user_id } => output(&ctx.service.delete_user(user_id)?, flags),
        UserCommands::Menu { user_id } => output(&ctx.service.assign_menu(user_id)?, flags),
    }
}
