use clap::Parser;
use ward_config::WardConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ward` binary.
#[derive(Debug, Parser)]
#[command(name = "ward", version, about = "Warden - identity and role access console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Max rows for list commands (defaults to general.default_limit)
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seed TOML file replacing the built-in seed
    #[arg(long, global = true)]
    pub seed: Option<String>,

    /// Tenant to operate from (defaults to tenancy.default_tenant)
    #[arg(short, long, global = true)]
    pub tenant: Option<String>,
}

impl Cli {
    /// Extract global flags, filling unset values from `config`.
    #[must_use]
    pub fn global_flags(&self, config: Option<&WardConfig>) -> GlobalFlags {
        let format = self
            .format
            .or_else(|| config.and_then(|c| OutputFormat::from_config(&c.general.default_format)))
            .unwrap_or(OutputFormat::Json);
        GlobalFlags {
            format,
            limit: self.limit.or_else(|| config.map(|c| c.general.default_limit)),
            quiet: self.quiet,
            verbose: self.verbose,
            seed: self.seed.clone(),
            tenant: self.tenant.clone(),
        }
    }
}
