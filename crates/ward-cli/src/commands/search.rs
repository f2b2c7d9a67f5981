use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ward search`.
pub fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let results = ctx.service.search_identities(&args.input.join(" "));
    let missing = results.iter().filter(|entry| !entry.is_found()).count();
    if missing > 0 {
        tracing::info!(missing, total = results.len(), "some search keys matched no user");
    }
    output(&results, flags)
}
