use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResolveArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ward resolve`.
pub fn handle(args: &ResolveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = ctx.service.resolve_effective_permissions(&args.user_id)?;
    output(&view, flags)
}
