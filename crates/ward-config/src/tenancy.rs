//! Tenant and environment settings for the admin context.

use serde::{Deserialize, Serialize};
use ward_core::enums::Environment;

/// Tenant whose administrators see across every tenant.
pub const DEFAULT_ROOT_TENANT: &str = "Element 5";

fn default_root_tenant() -> String {
    DEFAULT_ROOT_TENANT.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TenancyConfig {
    /// Root tenant name.
    #[serde(default = "default_root_tenant")]
    pub root_tenant: String,

    /// Administrative context selected at startup.
    #[serde(default = "default_root_tenant")]
    pub default_tenant: String,

    /// Service environment.
    #[serde(default)]
    pub environment: Environment,
}

impl Default for TenancyConfig {
    fn default() -> Self {
        Self {
            root_tenant: default_root_tenant(),
            default_tenant: default_root_tenant(),
            environment: Environment::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_root() {
        let config = TenancyConfig::default();
        assert_eq!(config.root_tenant, "Element 5");
        assert_eq!(config.default_tenant, config.root_tenant);
        assert_eq!(config.environment, Environment::Sandbox);
    }
}
