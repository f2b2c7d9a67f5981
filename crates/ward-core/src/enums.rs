//! Status enums, entity kinds and tenancy enums for Warden.
//!
//! Most enums serialize as `snake_case`. `EcosystemStatus` keeps its display
//! vocabulary (`User`, `App`, `None`) on the wire.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EcosystemStatus
// ---------------------------------------------------------------------------

/// Level of access a role grants to the partner ecosystem.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum EcosystemStatus {
    User,
    App,
    #[default]
    None,
}

impl EcosystemStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::App => "App",
            Self::None => "None",
        }
    }

    /// Whether this status grants any ecosystem access.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for EcosystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UserStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a directory user.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Pending,
    Suspended,
}

impl UserStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Suspended => "suspended",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Service environment the console operates against.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VisibilityTier
// ---------------------------------------------------------------------------

/// How much of a user's tenant list is shown in their access map.
///
/// ```text
/// base tenant == root && global visibility  → global_vision (all tenants)
/// base tenant == root                       → standard_root (base + root)
/// otherwise                                 → restricted    (base only)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityTier {
    GlobalVision,
    StandardRoot,
    Restricted,
}

impl VisibilityTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GlobalVision => "global_vision",
            Self::StandardRoot => "standard_root",
            Self::Restricted => "restricted",
        }
    }
}

impl fmt::Display for VisibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Kinds of entity an operation can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    User,
    RoleGroup,
    Role,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::RoleGroup => "role_group",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecosystem_status_keeps_display_vocabulary() {
        let json = serde_json::to_string(&EcosystemStatus::App).unwrap();
        assert_eq!(json, "\"App\"");
        let back: EcosystemStatus = serde_json::from_str("\"None\"").unwrap();
        assert_eq!(back, EcosystemStatus::None);
        assert!(!back.is_granted());
        assert!(EcosystemStatus::User.is_granted());
    }

    #[test]
    fn user_status_is_snake_case() {
        let json = serde_json::to_string(&UserStatus::Suspended).unwrap();
        assert_eq!(json, "\"suspended\"");
        assert_eq!(UserStatus::default(), UserStatus::Active);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Environment::Production.to_string(), "production");
        assert_eq!(VisibilityTier::StandardRoot.to_string(), "standard_root");
        assert_eq!(EntityType::RoleGroup.to_string(), "role_group");
    }
}
