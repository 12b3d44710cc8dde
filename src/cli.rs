//! CLI interface for release-notes.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::RunConfig;

pub mod create;
pub mod merge;

/// release-notes: builds and merges markdown release notes.
#[derive(Parser)]
#[command(name = "release-notes")]
#[command(about = "Builds and merges markdown release notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Logs every input line and each parsing decision to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Release note operations.
#[derive(Subcommand)]
pub enum Commands {
    /// Merges the per-component release note bodies of a release.
    Merge(merge::MergeCommand),
    /// Creates a release note from the pull requests on a project board.
    Create(create::CreateCommand),
}

impl Cli {
    /// Resolves the run configuration, with `--debug` taking precedence.
    pub fn run_config(&self) -> Result<RunConfig> {
        let mut config = RunConfig::load()?;
        config.debug |= self.debug;
        Ok(config)
    }

    /// Executes the CLI command.
    pub fn execute(self, config: &RunConfig) -> Result<()> {
        match self.command {
            Commands::Merge(merge_cmd) => merge_cmd.execute(config),
            Commands::Create(create_cmd) => create_cmd.execute(config),
        }
    }
}
