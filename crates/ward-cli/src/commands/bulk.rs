use crate::cli::GlobalFlags;
use crate::cli::subcommands::BulkCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ward bulk`.
pub fn handle(action: &BulkCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        BulkCommands::AssignGroup { group_id, input } => {
            let mut results = ctx.service.search_results(&input.join(" "));
            let response = ctx.service.bulk_assign_results(&mut results, group_id)?;
            output(&response, flags)
        }
    }
}
