use ward_rbac::filter::UserFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserListArgs;
use crate::context::AppContext;
use crate::output::output_list;

pub fn run(args: &UserListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = UserFilter {
        text: args.query.clone(),
        tenants: args.tenants.clone(),
        groups: args.groups.clone(),
        roles: args.roles.clone(),
    };
    if filter.is_active(&ctx.service.filter_options()) {
        tracing::debug!(?filter, "listing filtered users");
    }
    let users = ctx.service.list_users(&filter);
    output_list(&users, flags)
}
