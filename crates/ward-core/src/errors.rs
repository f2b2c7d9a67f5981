//! Cross-cutting error types for Warden.
//!
//! Mutations on the directory and registry return `CoreError`. Crate-specific
//! failures (seed parsing, configuration) live in their own crates and wrap
//! this type where they overlap.

use thiserror::Error;

/// Errors that can be raised by any Warden crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation (empty name, empty role selection, unknown role).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Build a `NotFound` for the given entity kind.
    pub fn not_found(entity_type: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.into(),
        }
    }

    /// Whether this error is a `NotFound`.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
