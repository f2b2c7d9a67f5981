use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CapabilityView, RoleGroup, UserRecord};

/// A directory hit with its groups hydrated and capabilities resolved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FoundUser {
    pub user: UserRecord,
    pub role_groups: Vec<RoleGroup>,
    pub capabilities: CapabilityView,
}

/// A search key with no directory match. `query` is the text as entered.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MissingUser {
    pub query: String,
    pub capabilities: CapabilityView,
}

/// One entry of a directory search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "lookup", rename_all = "snake_case")]
pub enum UserDetail {
    Found(FoundUser),
    NotFound(MissingUser),
}

impl UserDetail {
    #[must_use]
    pub fn missing(query: impl Into<String>) -> Self {
        Self::NotFound(MissingUser {
            query: query.into(),
            capabilities: CapabilityView::default(),
        })
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The email shown for this entry: the record's key, or the raw query.
    #[must_use]
    pub fn display_email(&self) -> &str {
        match self {
            Self::Found(found) => &found.user.email,
            Self::NotFound(missing) => &missing.query,
        }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Found(found) => Some(&found.user.id),
            Self::NotFound(_) => None,
        }
    }

    #[must_use]
    pub fn capabilities(&self) -> &CapabilityView {
        match self {
            Self::Found(found) => &found.capabilities,
            Self::NotFound(missing) => &missing.capabilities,
        }
    }

    #[must_use]
    pub fn role_groups(&self) -> &[RoleGroup] {
        match self {
            Self::Found(found) => &found.role_groups,
            Self::NotFound(_) => &[],
        }
    }
}
