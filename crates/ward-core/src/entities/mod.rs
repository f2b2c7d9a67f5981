//! Entity structs for all Warden domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the CLI
//! can emit them directly and tests can validate them against their schema.

mod capability;
mod detail;
mod group;
mod role;
mod user;

pub use capability::{
    CapabilityView, DashboardItem, Dashboards, EcosystemAccess, ResolvedWorkflow, VaultAccess,
};
pub use detail::{FoundUser, MissingUser, UserDetail};
pub use group::RoleGroup;
pub use role::{CapabilityBundle, Role, Workflow};
pub use user::UserRecord;
