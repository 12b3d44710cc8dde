//! Create command.

use anyhow::Result;
use clap::Parser;

use crate::config::RunConfig;
use crate::creation::ReleaseNoteCreation;
use crate::github::GhCli;
use crate::utils::preflight::check_github_cli;

/// Create command options.
#[derive(Parser)]
#[command(after_help = "Example:\n    release-notes create scalar-labs ScalarDB 4.0.0 scalardb")]
pub struct CreateCommand {
    /// Owner of the project board and repository.
    pub owner: String,

    /// Title prefix of the project board, e.g. "ScalarDB".
    pub project_title_prefix: String,

    /// Release version. A pre-release suffix such as "-rc1" is ignored when
    /// finding the project board.
    pub version: String,

    /// Repository whose pull requests are collected.
    pub repository: String,

    /// Maximum number of project items to list.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

impl CreateCommand {
    /// Executes the create command, printing the release note to stdout.
    pub fn execute(self, config: &RunConfig) -> Result<()> {
        check_github_cli(&config.gh_command)?;

        let source = GhCli::new(
            &self.owner,
            &self.project_title_prefix,
            &self.version,
            &self.repository,
        )
        .with_gh_command(&config.gh_command)
        .with_item_limit(self.limit.unwrap_or(config.item_limit));

        let mut creation = ReleaseNoteCreation::new(source, config.note_options());
        let note = creation.create_release_note()?;
        print!("{note}");
        Ok(())
    }
}
