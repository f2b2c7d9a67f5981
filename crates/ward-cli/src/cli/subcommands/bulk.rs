use clap::Subcommand;

/// Bulk commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BulkCommands {
    /// Search for users, then add every found user to a group.
    #[command(name = "assign-group")]
    AssignGroup {
        group_id: String,
        /// Emails to look up.
        #[arg(required = true, num_args = 1..)]
        input: Vec<String>,
    },
}
