//! Builds a component release note from the pull requests of a release.

use std::collections::HashSet;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::NoteOptions;
use crate::error::NoteError;
use crate::github::{PullRequestQuery, PullRequestSource};
use crate::notes::{
    render_component_note, resolve, Category, CategoryGroups, NoteExtractor, NoteRecord,
    SameAsLinks,
};

/// Collects the release notes of merged pull requests and renders them by
/// category.
#[derive(Debug)]
pub struct ReleaseNoteCreation<S> {
    source: S,
    extractor: NoteExtractor,
    records: Vec<NoteRecord>,
    links: SameAsLinks,
    seen: HashSet<String>,
}

impl<S: PullRequestSource> ReleaseNoteCreation<S> {
    /// Creates a pipeline reading from `source`.
    pub fn new(source: S, options: NoteOptions) -> Self {
        Self {
            source,
            extractor: NoteExtractor::for_pull_requests(options.trace_lines),
            records: Vec::new(),
            links: SameAsLinks::new(),
            seen: HashSet::new(),
        }
    }

    /// Collects every pull request of the release and renders the note.
    pub fn create_release_note(&mut self) -> Result<String> {
        let project_id = self.project_id()?;
        let numbers = self.pull_request_numbers(&project_id)?;
        info!(project = %project_id, pull_requests = numbers.len(), "Collecting release notes");

        for number in &numbers {
            self.extract_release_note_info(number)?;
        }

        Ok(self.render())
    }

    /// Identifier of the project board of the release.
    pub fn project_id(&self) -> Result<String> {
        let query = PullRequestQuery::ProjectId;
        first_line(self.source.query(&query)?).ok_or_else(|| missing(&query))
    }

    /// Pull request numbers on the project board, in listing order.
    pub fn pull_request_numbers(&self, project_id: &str) -> Result<Vec<String>> {
        let lines = self
            .source
            .query(&PullRequestQuery::pull_request_numbers(project_id))?;
        Ok(lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Whether the pull request has been merged.
    pub fn is_merged(&self, number: &str) -> Result<bool> {
        let query = PullRequestQuery::state(number);
        let state = first_line(self.source.query(&query)?).ok_or_else(|| missing(&query))?;
        Ok(state.eq_ignore_ascii_case("merged"))
    }

    /// Category named by the pull request's labels, if any.
    pub fn category_of(&self, number: &str) -> Result<Option<Category>> {
        let labels = self.source.query(&PullRequestQuery::labels(number))?;
        Ok(Category::from_labels(labels.as_slice()))
    }

    /// Records the release note of one pull request.
    ///
    /// Pull requests that are unmerged, already seen, or marked `N/A` add
    /// nothing.
    pub fn extract_release_note_info(&mut self, number: &str) -> Result<()> {
        if !self.seen.insert(number.to_string()) {
            debug!(pr = number, "Pull request listed twice, skipping");
            return Ok(());
        }

        if !self.is_merged(number)? {
            debug!(pr = number, "Pull request is not merged, skipping");
            return Ok(());
        }

        let category = self.category_of(number)?;
        let body = self
            .source
            .query(&PullRequestQuery::body(number))?
            .join("\n");

        let Some(note) = self.extractor.extract_pull_request(number, category, &body) else {
            return Ok(());
        };

        for target in &note.same_as {
            self.links.link(target, number);
        }
        let mut record = note.record;
        record.categorize();
        self.records.push(record);
        Ok(())
    }

    /// Records collected so far, before same-as links are resolved.
    pub fn records(&self) -> &[NoteRecord] {
        &self.records
    }

    /// Same-as links collected so far.
    pub fn links(&self) -> &SameAsLinks {
        &self.links
    }

    /// Folds linked records into their targets and groups the result by
    /// category.
    pub fn resolve(&self) -> CategoryGroups {
        CategoryGroups::from_records(resolve(&self.records, &self.links))
    }

    /// Renders the release note of everything collected so far.
    pub fn render(&self) -> String {
        render_component_note(&self.resolve())
    }
}

fn first_line(lines: Vec<String>) -> Option<String> {
    lines
        .into_iter()
        .next()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
}

fn missing(query: &PullRequestQuery) -> anyhow::Error {
    NoteError::MissingData {
        what: query.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::CannedSource;

    fn body(text: &str) -> String {
        format!("## Dummy section\ndummy message\n\n## Release note\n{text}\n")
    }

    fn creation(source: CannedSource) -> ReleaseNoteCreation<CannedSource> {
        ReleaseNoteCreation::new(source, NoteOptions::default())
    }

    #[test]
    fn merged_pull_request_is_recorded() {
        let source = CannedSource::new().with_merged_pull_request(
            "1",
            &["enhancement"],
            &body("- Added a thing."),
        );
        let mut creation = creation(source);
        creation.extract_release_note_info("1").unwrap();

        let records = creation.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, Some(Category::Enhancement));
        assert_eq!(records[0].text.as_deref(), Some("Added a thing."));
        assert_eq!(records[0].origins, vec!["1"]);
    }

    #[test]
    fn unlabelled_pull_request_is_miscellaneous() {
        let source = CannedSource::new().with_merged_pull_request("9", &[], &body("Some text"));
        let mut creation = creation(source);
        creation.extract_release_note_info("9").unwrap();

        let groups = creation.resolve();
        assert_eq!(groups.get(Category::Miscellaneous).len(), 1);
        assert_eq!(
            groups.get(Category::Miscellaneous)[0].text.as_deref(),
            Some("Some text")
        );
    }

    #[test]
    fn unmerged_pull_request_is_skipped() {
        let source = CannedSource::new().with_pull_request(
            "4",
            "OPEN",
            &["bugfix"],
            &body("- Fixed."),
        );
        let mut creation = creation(source);
        creation.extract_release_note_info("4").unwrap();
        assert!(creation.records().is_empty());
    }

    #[test]
    fn not_applicable_pull_request_is_skipped() {
        let source =
            CannedSource::new().with_merged_pull_request("5", &["bugfix"], &body("N/A"));
        let mut creation = creation(source);
        creation.extract_release_note_info("5").unwrap();
        assert!(creation.records().is_empty());
    }

    #[test]
    fn pull_request_same_as_itself_is_left_out() {
        let source = CannedSource::new()
            .with_project("14", &["5"])
            .with_merged_pull_request("5", &["bugfix"], &body("Own text.\nSame as #5"));
        let note = creation(source).create_release_note().unwrap();
        assert_eq!(note, "## Summary\n\n");
    }

    #[test]
    fn same_as_not_applicable_target_leaves_nothing() {
        let source = CannedSource::new()
            .with_project("14", &["1", "2"])
            .with_merged_pull_request("1", &["enhancement"], &body("N/A"))
            .with_merged_pull_request(
                "2",
                &["enhancement"],
                &body("Same as #1\nMore detail."),
            );
        let mut creation = creation(source);
        let note = creation.create_release_note().unwrap();

        assert_eq!(note, "## Summary\n\n");
        assert_eq!(creation.records().len(), 1);
        assert!(creation.links().is_source("2"));
        assert!(creation.resolve().is_empty());
    }

    #[test]
    fn pull_request_listed_twice_is_recorded_once() {
        let source =
            CannedSource::new().with_merged_pull_request("6", &["bugfix"], &body("- Fixed."));
        let mut creation = creation(source);
        creation.extract_release_note_info("6").unwrap();
        creation.extract_release_note_info("6").unwrap();
        assert_eq!(creation.records().len(), 1);
    }

    #[test]
    fn missing_state_is_an_error() {
        let mut creation = creation(CannedSource::new());
        let err = creation.extract_release_note_info("8").unwrap_err();
        assert_eq!(
            err.downcast_ref::<NoteError>(),
            Some(&NoteError::MissingData {
                what: "the state of pull request #8".to_string()
            })
        );
    }

    #[test]
    fn missing_project_is_an_error() {
        let err = creation(CannedSource::new()).project_id().unwrap_err();
        assert_eq!(err.to_string(), "Couldn't get the project id");
    }

    #[test]
    fn same_as_pull_requests_are_folded_into_their_target() {
        let source = CannedSource::new()
            .with_merged_pull_request("1", &["enhancement"], &body("A topic pull request."))
            .with_merged_pull_request("2", &["enhancement"], &body("Same as #1"))
            .with_merged_pull_request(
                "3",
                &["improvement"],
                &body("Additional comment 1.\nSame as #1"),
            )
            .with_merged_pull_request(
                "4",
                &["bugfix"],
                &body("Same as #1\nAdditional comment 2."),
            )
            .with_merged_pull_request("5", &["backward-incompatible"], &body("Same as #1\n"));
        let mut creation = creation(source);
        for number in ["1", "2", "3", "4", "5"] {
            creation.extract_release_note_info(number).unwrap();
        }

        let groups = creation.resolve();
        assert_eq!(groups.len(), 1);
        let enhancements = groups.get(Category::Enhancement);
        assert_eq!(enhancements.len(), 1);
        assert_eq!(enhancements[0].origins, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(
            enhancements[0].text.as_deref(),
            Some("A topic pull request. Additional comment 1. Additional comment 2.")
        );
    }

    #[test]
    fn create_release_note_walks_the_project() {
        let source = CannedSource::new()
            .with_project("14", &["2", "1"])
            .with_merged_pull_request("1", &["bugfix"], &body("- Fixed a crash."))
            .with_merged_pull_request("2", &["enhancement"], &body("- Added a flag."));
        let note = creation(source).create_release_note().unwrap();
        assert_eq!(
            note,
            "## Summary\n\n\
             ## Enhancements\n- Added a flag. (#2)\n\n\
             ## Bug fixes\n- Fixed a crash. (#1)\n\n"
        );
    }
}
