//! Runtime configuration resolved from the environment and settings file.

use anyhow::{Context, Result};

use crate::utils::settings::{get_env_var, Settings};

/// Default `gh` executable.
pub const DEFAULT_GH_COMMAND: &str = "gh";

/// Default number of project items requested from the project board.
pub const DEFAULT_ITEM_LIMIT: usize = 10_000;

/// Variables that switch on debug output, in lookup order.
const DEBUG_KEYS: [&str; 2] = ["RELEASE_NOTES_DEBUG", "DEBUG"];

/// Options handed to the release note pipelines when they are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteOptions {
    /// Logs every input line as it is read.
    pub trace_lines: bool,
}

/// Configuration for one run of the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Debug output requested.
    pub debug: bool,
    /// `gh` executable to invoke.
    pub gh_command: String,
    /// Maximum number of project items to list.
    pub item_limit: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            debug: false,
            gh_command: DEFAULT_GH_COMMAND.to_string(),
            item_limit: DEFAULT_ITEM_LIMIT,
        }
    }
}

impl RunConfig {
    /// Resolves the configuration from the environment, falling back to
    /// `$HOME/.release-notes/settings.json`.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| get_env_var(key).ok())
    }

    /// Resolves the configuration from already loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::from_lookup(|key| settings.get_env_var(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let debug = DEBUG_KEYS
            .into_iter()
            .find_map(&lookup)
            .is_some_and(|val| parse_bool_string(&val).unwrap_or(true));

        let gh_command = lookup("RELEASE_NOTES_GH")
            .filter(|val| !val.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GH_COMMAND.to_string());

        let item_limit = match lookup("RELEASE_NOTES_ITEM_LIMIT") {
            Some(val) => val
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid RELEASE_NOTES_ITEM_LIMIT: {val}"))?,
            None => DEFAULT_ITEM_LIMIT,
        };

        Ok(Self {
            debug,
            gh_command,
            item_limit,
        })
    }

    /// Returns the options handed to the pipelines.
    pub fn note_options(&self) -> NoteOptions {
        NoteOptions {
            trace_lines: self.debug,
        }
    }
}

/// Parses a boolean-like string value.
///
/// Accepts "true"/"1"/"yes"/"on" as `true` and "false"/"0"/"no"/"off" as `false`.
/// Returns `None` for unrecognized values.
fn parse_bool_string(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
