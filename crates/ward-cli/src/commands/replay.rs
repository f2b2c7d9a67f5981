use std::path::Path;

use anyhow::Context;
use ward_rbac::ActionReplayer;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReplayArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ward replay`.
pub fn handle(args: &ReplayArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ActionReplayer::replay_file(&mut ctx.service, Path::new(&args.path), args.strict)
        .with_context(|| format!("failed to replay {}", args.path))?;
    output(&response, flags)
}
