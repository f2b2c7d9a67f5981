//! # ward-config
//!
//! Layered configuration loading for Warden using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WARD_*` prefix, `__` as separator)
//! 2. Project-level `.ward/config.toml`
//! 3. User-level `~/.config/ward/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WARD_TENANCY__ROOT_TENANT` -> `tenancy.root_tenant`,
//! `WARD_SEED__PATH` -> `seed.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ward_config::WardConfig;
//!
//! let config = WardConfig::load_with_dotenv().expect("config");
//! println!("root tenant: {}", config.tenancy.root_tenant);
//! ```

mod error;
mod general;
mod seed;
mod tenancy;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use seed::SeedConfig;
pub use tenancy::{DEFAULT_ROOT_TENANT, TenancyConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub tenancy: TenancyConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl WardConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".ward/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("WARD_").split("__"))
    }

    /// Reject values that would make the admin context meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tenancy.root_tenant.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "tenancy.root_tenant".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.tenancy.default_tenant.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "tenancy.default_tenant".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ward").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = WardConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.seed.is_configured());
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn empty_root_tenant_is_rejected() {
        let mut config = WardConfig::default();
        config.tenancy.root_tenant = "  ".into();
        let err = config.validate().expect_err("should reject");
        assert!(err.to_string().contains("tenancy.root_tenant"));
    }
}
