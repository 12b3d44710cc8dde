//! Merges per-component release note bodies into one document.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::NoteOptions;
use crate::error::NoteError;
use crate::notes::{render_merged_note, Component, Edition, EditionGroups, NoteExtractor};

/// Collects release note bodies and renders them grouped by edition,
/// category and component.
#[derive(Debug)]
pub struct ReleaseNoteMerger {
    extractor: NoteExtractor,
    groups: EditionGroups,
}

impl ReleaseNoteMerger {
    /// Creates an empty merger.
    pub fn new(options: NoteOptions) -> Self {
        Self {
            extractor: NoteExtractor::for_documents(options.trace_lines),
            groups: EditionGroups::new(),
        }
    }

    /// Adds one release note body.
    ///
    /// Nothing from `content` is kept when it fails to parse.
    pub fn load(
        &mut self,
        document: &str,
        content: &str,
        edition: Edition,
        component: Component,
    ) -> Result<(), NoteError> {
        let notes = self
            .extractor
            .extract_document(document, content, edition, component)?;
        self.groups.extend(notes);
        Ok(())
    }

    /// Reads and adds one release note body file.
    pub fn load_file(&mut self, path: &Path, edition: Edition, component: Component) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read release note body: {}", path.display()))?;
        let document = path.display().to_string();
        self.load(&document, &content, edition, component)?;
        Ok(())
    }

    /// Adds the body file of every component found in `dir`.
    pub fn load_directory(&mut self, dir: &Path) -> Result<()> {
        for component in Component::ALL {
            let path = dir.join(component.file_name());
            info!(file = %path.display(), component = %component, "Loading release note body");
            self.load_file(&path, component.edition(), component)?;
        }
        Ok(())
    }

    /// Notes collected so far.
    pub fn groups(&self) -> &EditionGroups {
        &self.groups
    }

    /// Renders the merged release note.
    pub fn render(&self) -> String {
        render_merged_note(&self.groups)
    }

    /// Loads every component body in `dir` and renders the merged note.
    pub fn merge_directory(dir: &Path, options: NoteOptions) -> Result<String> {
        let mut merger = Self::new(options);
        merger.load_directory(dir)?;
        Ok(merger.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::Category;

    #[test]
    fn loads_notes_into_their_edition() {
        let mut merger = ReleaseNoteMerger::new(NoteOptions::default());
        merger
            .load(
                "scalardb.md",
                "## Summary\n\n## Bug fixes\n- Fixed a leak. (#10)\n",
                Edition::Community,
                Component::Core,
            )
            .unwrap();
        merger
            .load(
                "sql.md",
                "## Bug fixes\n- Fixed a parser bug. (#20 #21)\n",
                Edition::Enterprise,
                Component::Sql,
            )
            .unwrap();

        let groups = merger.groups();
        assert_eq!(
            groups
                .notes(Edition::Community, Category::Bugfix, Component::Core)
                .to_vec(),
            vec!["Fixed a leak. (#10)".to_string()]
        );
        assert_eq!(
            groups
                .notes(Edition::Enterprise, Category::Bugfix, Component::Sql)
                .to_vec(),
            vec!["Fixed a parser bug.".to_string()]
        );
    }

    #[test]
    fn failed_load_keeps_nothing() {
        let mut merger = ReleaseNoteMerger::new(NoteOptions::default());
        let err = merger
            .load(
                "cluster.md",
                "- Orphan note\n## Bug fixes\n- Fixed.\n",
                Edition::Enterprise,
                Component::Cluster,
            )
            .unwrap_err();

        assert_eq!(
            err,
            NoteError::MissingCategory {
                document: "cluster.md".to_string(),
                text: "Orphan note".to_string(),
            }
        );
        assert!(merger.groups().is_empty());
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = ReleaseNoteMerger::merge_directory(dir.path(), NoteOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("scalardb.md"));
    }
}
