#[path = "group/create.rs"]
mod create;
#[path = "group/list.rs"]
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GroupCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ward group`.
pub fn handle(action: &GroupCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GroupCommands::List { query, role } => list::run(query, role.as_deref(), ctx, flags),
        GroupCommands::Create { name, roles } => create::run(name, roles, ctx, flags),
        GroupCommands::Show { id } => output(&ctx.service.describe_group(id)?, flags),
    }
}
