use clap::{Args, Subcommand};

/// Directory user commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users matching the given filters.
    List(UserListArgs),
    /// Assign a catalog role directly.
    #[command(name = "assign-role")]
    AssignRole { user_id: String, role: String },
    /// Revoke a directly assigned role.
    #[command(name = "revoke-role")]
    RevokeRole { user_id: String, role: String },
    /// Add the user to a role group.
    #[command(name = "assign-group")]
    AssignGroup { user_id: String, group_id: String },
    /// Remove the user from a role group.
    #[command(name = "revoke-group")]
    RevokeGroup { user_id: String, group_id: String },
    /// Delete a user.
    Delete { user_id: String },
    /// Roles and groups the user can still be given.
    Menu { user_id: String },
}

/// Arguments for `ward user list`.
#[derive(Clone, Debug, Args)]
pub struct UserListArgs {
    /// Substring of display name or email.
    #[arg(long, default_value = "")]
    pub query: String,
    /// Any of these tenants.
    #[arg(long = "in-tenant")]
    pub tenants: Vec<String>,
    /// Any of these group names.
    #[arg(long = "in-group")]
    pub groups: Vec<String>,
    /// Any of these directly assigned roles.
    #[arg(long = "has-role")]
    pub roles: Vec<String>,
}
