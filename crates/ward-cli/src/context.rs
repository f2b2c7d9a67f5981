use anyhow::Context;
use ward_config::WardConfig;
use ward_rbac::{AdminContext, WardService};

use crate::bootstrap;
use crate::cli::GlobalFlags;

/// Everything a command handler needs.
pub struct AppContext {
    pub service: WardService,
}

impl AppContext {
    pub fn init(config: &WardConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let admin = AdminContext::new(
            bootstrap::active_tenant(flags, config),
            config.tenancy.environment,
            config.tenancy.root_tenant.clone(),
        );
        let seed = bootstrap::seed_path(flags, config);
        let service = WardService::from_seed_path(seed.as_deref(), admin).with_context(|| {
            seed.as_ref().map_or_else(
                || "failed to load built-in seed".to_string(),
                |path| format!("failed to load seed from {}", path.display()),
            )
        })?;
        tracing::debug!(
            tenant = %service.admin_context().tenant,
            environment = %service.admin_context().environment,
            "console ready"
        );
        Ok(Self { service })
    }
}
