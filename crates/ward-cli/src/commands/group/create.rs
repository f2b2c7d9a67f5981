use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(name: &str, roles: &[String], ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let group = ctx.service.create_role_group(name, roles.iter().cloned())?;
    output(&group, flags)
}
