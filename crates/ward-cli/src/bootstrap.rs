use std::path::PathBuf;

use anyhow::Context;
use ward_config::WardConfig;

use crate::cli::GlobalFlags;

/// Load `.env` from the working directory, then the layered configuration.
pub fn load_config() -> anyhow::Result<WardConfig> {
    load_dotenv()?;
    WardConfig::load().context("failed to load ward configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

/// Seed file to load: `--seed` wins over `seed.path`. `None` means built-in.
pub fn seed_path(flags: &GlobalFlags, config: &WardConfig) -> Option<PathBuf> {
    flags
        .seed
        .as_deref()
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.seed.is_configured().then(|| PathBuf::from(&config.seed.path)))
}

/// Tenant to operate from: `--tenant` wins over `tenancy.default_tenant`.
pub fn active_tenant(flags: &GlobalFlags, config: &WardConfig) -> String {
    flags
        .tenant
        .clone()
        .filter(|tenant| !tenant.trim().is_empty())
        .unwrap_or_else(|| config.tenancy.default_tenant.clone())
}
