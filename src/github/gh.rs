//! GitHub CLI backed pull request source.

use std::process::Command;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::config::{DEFAULT_GH_COMMAND, DEFAULT_ITEM_LIMIT};
use crate::error::NoteError;
use crate::github::source::{PullRequestQuery, PullRequestSource};

#[derive(Debug, Deserialize)]
struct ProjectList {
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct Project {
    number: u64,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct ItemList {
    #[serde(default)]
    items: Vec<ProjectItem>,
}

#[derive(Debug, Deserialize)]
struct ProjectItem {
    content: Option<ItemContent>,
}

#[derive(Debug, Deserialize)]
struct ItemContent {
    #[serde(rename = "type")]
    kind: Option<String>,
    number: Option<u64>,
    repository: Option<String>,
}

/// Answers pull request queries by running the `gh` command.
#[derive(Debug, Clone)]
pub struct GhCli {
    gh_command: String,
    owner: String,
    project_title_prefix: String,
    version: String,
    repository: String,
    item_limit: usize,
}

impl GhCli {
    /// Creates a source for the project board of one release.
    pub fn new(owner: &str, project_title_prefix: &str, version: &str, repository: &str) -> Self {
        Self {
            gh_command: DEFAULT_GH_COMMAND.to_string(),
            owner: owner.to_string(),
            project_title_prefix: project_title_prefix.to_string(),
            version: version.to_string(),
            repository: repository.to_string(),
            item_limit: DEFAULT_ITEM_LIMIT,
        }
    }

    /// Uses another `gh` executable.
    pub fn with_gh_command(mut self, gh_command: &str) -> Self {
        self.gh_command = gh_command.to_string();
        self
    }

    /// Caps the number of project items listed.
    pub fn with_item_limit(mut self, item_limit: usize) -> Self {
        self.item_limit = item_limit;
        self
    }

    fn full_repository(&self) -> String {
        format!("{}/{}", self.owner, self.repository)
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        debug!(command = %self.gh_command, ?args, "Running GitHub CLI");

        let output = Command::new(&self.gh_command)
            .args(args)
            .output()
            .with_context(|| format!("Failed to run {}", self.gh_command))?;

        if !output.status.success() {
            return Err(NoteError::CommandFailed {
                command: format!("{} {}", self.gh_command, args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn project_id(&self) -> Result<Vec<String>> {
        let json = self.run(&[
            "project",
            "list",
            "--owner",
            &self.owner,
            "--closed",
            "--format",
            "json",
        ])?;
        let project = select_project(&json, &self.project_title_prefix, &self.version)?;
        Ok(project.into_iter().collect())
    }

    fn pull_request_numbers(&self, project_id: &str) -> Result<Vec<String>> {
        let limit = self.item_limit.to_string();
        let json = self.run(&[
            "project",
            "item-list",
            project_id,
            "--owner",
            &self.owner,
            "--limit",
            &limit,
            "--format",
            "json",
        ])?;
        select_pull_requests(&json, &self.repository)
    }

    fn pull_request_field(&self, number: &str, field: &str, jq: &str) -> Result<Vec<String>> {
        let repository = self.full_repository();
        let out = self.run(&[
            "pr",
            "view",
            number,
            "--repo",
            &repository,
            "--json",
            field,
            "--jq",
            jq,
        ])?;
        Ok(out.lines().map(str::to_string).collect())
    }
}

impl PullRequestSource for GhCli {
    fn query(&self, query: &PullRequestQuery) -> Result<Vec<String>> {
        match query {
            PullRequestQuery::ProjectId => self.project_id(),
            PullRequestQuery::PullRequestNumbers { project_id } => {
                self.pull_request_numbers(project_id)
            }
            PullRequestQuery::State { number } => self.pull_request_field(number, "state", ".state"),
            PullRequestQuery::Labels { number } => {
                self.pull_request_field(number, "labels", ".labels[].name")
            }
            PullRequestQuery::Body { number } => self.pull_request_field(number, "body", ".body"),
        }
    }
}

/// Drops a pre-release suffix, so `4.0.0-rc1` becomes `4.0.0`.
pub fn base_version(version: &str) -> &str {
    version.split('-').next().unwrap_or(version).trim()
}

/// Picks the first project whose title holds both the prefix and the base
/// version of the release.
fn select_project(json: &str, title_prefix: &str, version: &str) -> Result<Option<String>> {
    let list: ProjectList =
        serde_json::from_str(json).context("Failed to parse project list from GitHub CLI")?;
    let version = base_version(version);

    Ok(list
        .projects
        .into_iter()
        .find(|project| project.title.contains(title_prefix) && project.title.contains(version))
        .map(|project| project.number.to_string()))
}

/// Lists the pull request numbers on a project that belong to `repository`.
///
/// `repository` may be bare (`scalardb`) or qualified (`owner/scalardb`).
fn select_pull_requests(json: &str, repository: &str) -> Result<Vec<String>> {
    let list: ItemList =
        serde_json::from_str(json).context("Failed to parse project items from GitHub CLI")?;
    let name = repository.rsplit('/').next().unwrap_or(repository);
    let suffix = format!("/{name}");

    Ok(list
        .items
        .into_iter()
        .filter_map(|item| item.content)
        .filter(|content| {
            content
                .kind
                .as_deref()
                .map_or(true, |kind| kind == "PullRequest")
        })
        .filter(|content| {
            content
                .repository
                .as_deref()
                .is_some_and(|repo| repo == name || repo.ends_with(&suffix))
        })
        .filter_map(|content| content.number)
        .map(|number| number.to_string())
        .collect())
}
