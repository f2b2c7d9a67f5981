use clap::{Args, Subcommand};

use crate::cli::subcommands::{BulkCommands, GroupCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Look up users by email; keys may be separated by spaces, commas or semicolons.
    Search(SearchArgs),
    /// Effective permissions of a user.
    Resolve(ResolveArgs),
    /// Tenants visible to a user, each with their effective permissions.
    #[command(name = "access-map")]
    AccessMap(ResolveArgs),
    /// Role groups.
    Group {
        #[command(subcommand)]
        action: GroupCommands,
    },
    /// Directory users and their assignments.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Bulk assignment over search results.
    Bulk {
        #[command(subcommand)]
        action: BulkCommands,
    },
    /// Apply console actions from a JSONL file.
    Replay(ReplayArgs),
    /// Show the active admin context.
    Context,
    /// Dump JSON schema for a core type.
    Schema(SchemaArgs),
}

/// Arguments for `ward search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Emails to look up.
    #[arg(required = true, num_args = 1..)]
    pub input: Vec<String>,
}

/// Arguments for `ward resolve` and `ward access-map`.
#[derive(Clone, Debug, Args)]
pub struct ResolveArgs {
    pub user_id: String,
}

/// Arguments for `ward replay`.
#[derive(Clone, Debug, Args)]
pub struct ReplayArgs {
    /// JSONL file with one console action per line.
    pub path: String,
    /// Stop at the first failing action.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `ward schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `capability_view` or `console_action`.
    pub type_name: String,
}
