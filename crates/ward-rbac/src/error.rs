//! Error types for ward-rbac.

use thiserror::Error;
use ward_core::errors::CoreError;

/// Errors from seeding, replay and the console service.
#[derive(Debug, Error)]
pub enum RbacError {
    /// A directory or registry operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Seed data is internally inconsistent.
    #[error("Invalid seed: {0}")]
    Seed(String),

    /// Seed file is not valid TOML for the seed layout.
    #[error("Seed parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Reading a seed or replay file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A replay line could not be parsed or applied in strict mode.
    #[error("Replay failed at line {line}: {reason}")]
    Replay { line: usize, reason: String },
}
