//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Promote Dialogflow CX agents to deployment environments
#[derive(Parser)]
#[command(
    name = "dfcx",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Version flows, playbooks and tools, then point an environment at them
    Deploy(commands::deploy::DeployArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            no_color,
            quiet,
            command,
        } = self;
        match command {
            Command::Version => commands::version::run(),
            Command::Deploy(args) => {
                let ctx = crate::output::OutputContext::new(no_color, quiet);
                commands::deploy::run(&ctx, args).await
            }
        }
    }
}
