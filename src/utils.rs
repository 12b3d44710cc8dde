//! Utility functions and helpers.

pub mod preflight;
pub mod settings;

pub use preflight::{check_github_cli, check_release_note_files};
pub use settings::{get_env_var, Settings};
