//! ID prefixes and formatting helpers.
//!
//! Role groups created at runtime get `rg-<n>` ids. Seeded groups may use any
//! id (`rg-global`, `rg-exec`); the registry skips sequence values that are
//! already taken.

/// Prefix for role group ids.
pub const PREFIX_ROLE_GROUP: &str = "rg";

/// Prefix for users created without an explicit id.
pub const PREFIX_USER: &str = "usr";

/// Format `{prefix}-{seq}`.
#[must_use]
pub fn format_id(prefix: &str, seq: u64) -> String {
    format!("{prefix}-{seq}")
}

/// Normalize a user-facing identity key (email) for lookup.
#[must_use]
pub fn normalize_identity_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}
