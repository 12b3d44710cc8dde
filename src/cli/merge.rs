//! Merge command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::RunConfig;
use crate::merge::ReleaseNoteMerger;
use crate::utils::preflight::check_release_note_files;

/// Merge command options.
#[derive(Parser)]
pub struct MergeCommand {
    /// Directory holding scalardb.md, cluster.md, graphql.md and sql.md.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

impl MergeCommand {
    /// Executes the merge command, printing the merged note to stdout.
    pub fn execute(self, config: &RunConfig) -> Result<()> {
        check_release_note_files(&self.dir)?;
        let note = ReleaseNoteMerger::merge_directory(&self.dir, config.note_options())?;
        print!("{note}");
        Ok(())
    }
}
