use clap::Subcommand;

/// Role group commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GroupCommands {
    /// List role groups.
    List {
        /// Text matched against group names; longer queries also match
        /// workflow and policy names.
        #[arg(long, default_value = "")]
        query: String,
        /// Only groups containing this role.
        #[arg(long)]
        role: Option<String>,
    },
    /// Create a role group.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long = "role", required = true)]
        roles: Vec<String>,
    },
    /// Show a group with each role's capabilities.
    Show { id: String },
}
