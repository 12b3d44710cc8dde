//! Preflight validation checks for early failure detection
//!
//! Commands call these before doing any work so a missing tool fails fast
//! with a clear message instead of halfway through collecting notes.

use std::path::Path;

use anyhow::{bail, Result};

use crate::notes::Component;

/// Validate GitHub CLI is available and authenticated
///
/// This checks:
/// 1. the `gh` executable runs
/// 2. the user is logged in
pub fn check_github_cli(gh_command: &str) -> Result<()> {
    let gh_check = std::process::Command::new(gh_command)
        .args(["--version"])
        .output();

    match gh_check {
        Ok(output) if output.status.success() => {
            let auth_check = std::process::Command::new(gh_command)
                .args(["auth", "status"])
                .output();

            match auth_check {
                Ok(auth_output) if auth_output.status.success() => Ok(()),
                Ok(auth_output) => {
                    let error_details = String::from_utf8_lossy(&auth_output.stderr);
                    bail!(
                        "GitHub CLI authentication failed.\n\
                         Please run 'gh auth login' or set GITHUB_TOKEN environment variable.\n\
                         Error: {}",
                        error_details.trim()
                    )
                }
                Err(e) => bail!("Failed to test GitHub CLI authentication: {}", e),
            }
        }
        _ => bail!(
            "GitHub CLI ({}) is not installed or not in PATH.\n\
             Please install it from https://cli.github.com/",
            gh_command
        ),
    }
}

/// Validate every component release note body exists in `dir`
///
/// Reports all missing files at once.
pub fn check_release_note_files(dir: &Path) -> Result<()> {
    let missing: Vec<String> = Component::ALL
        .into_iter()
        .map(|component| dir.join(component.file_name()))
        .filter(|path| !path.is_file())
        .map(|path| path.display().to_string())
        .collect();

    if !missing.is_empty() {
        bail!(
            "Missing release note bodies:\n  {}\n\n\
             Each of {} is expected in the input directory.",
            missing.join("\n  "),
            Component::ALL.map(Component::file_name).join(", ")
        );
    }

    Ok(())
}
