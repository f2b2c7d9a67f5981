use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Search(args) => commands::search::handle(&args, ctx, flags),
        Commands::Resolve(args) => commands::resolve::handle(&args, ctx, flags),
        Commands::AccessMap(args) => commands::access_map::handle(&args, ctx, flags),
        Commands::Group { action } => commands::group::handle(&action, ctx, flags),
        Commands::User { action } => commands::user::handle(&action, ctx, flags),
        Commands::Bulk { action } => commands::bulk::handle(&action, ctx, flags),
        Commands::Replay(args) => commands::replay::handle(&args, ctx, flags),
        Commands::Context => commands::context::handle(ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
