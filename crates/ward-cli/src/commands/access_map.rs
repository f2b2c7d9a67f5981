use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResolveArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ward access-map`.
pub fn handle(args: &ResolveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let map = ctx.service.access_map(&args.user_id)?;
    output(&map, flags)
}
