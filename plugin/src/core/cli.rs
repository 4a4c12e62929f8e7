use clap::{Parser, Subcommand};

use super::constants::{DEFAULT_PAGE_LIMIT, ENV_DEBUG};

#[derive(Parser)]
#[command(name = "slacktab")]
#[command(version, about = "Slack workspace data as queryable tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log the underlying Slack API calls
    #[arg(long, global = true, env = ENV_DEBUG)]
    pub debug: bool,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List the tables this adapter serves (default command)
    Tables,
    /// Show the workspace and identity behind the configured token
    Whoami,
    /// Fetch one table and print its rows as JSON lines
    Scan {
        /// Table name, as listed by `slacktab tables`
        table: String,

        /// Maximum records to fetch (single page)
        #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,

        /// Channel ID, required when scanning slack_message
        #[arg(long)]
        channel: Option<String>,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub debug: bool,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    (CliConfig { debug: cli.debug }, cli.command)
}
