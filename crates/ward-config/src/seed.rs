//! Seed data location.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedConfig {
    /// TOML file replacing the built-in seed. Empty means built-in.
    #[serde(default)]
    pub path: String,
}

impl SeedConfig {
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }
}
