use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_list;

pub fn run(query: &str, role: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(role) = role {
        if !ctx.service.catalog().contains(role) {
            tracing::warn!(role, "role filter names no catalog role; nothing will match");
        }
    }
    let groups = ctx.service.filter_role_groups(query, role);
    output_list(&groups, flags)
}
