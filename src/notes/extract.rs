//! Extraction of release note records from markdown.

use tracing::{debug, trace};

use super::category::{Category, Component, Edition};
use super::classify::{is_release_note_heading, is_summary, LineClassifier, LineKind};
use super::record::{DocumentNote, NoteRecord};
use crate::error::NoteError;

/// A record extracted from one pull request, with the pull requests it defers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestNote {
    /// The extracted record.
    pub record: NoteRecord,
    /// Pull requests named by `Same as #N` lines, in order of appearance.
    pub same_as: Vec<String>,
}

/// Turns markdown documents into release note records.
#[derive(Debug, Clone, Copy)]
pub struct NoteExtractor {
    classifier: LineClassifier,
    trace_lines: bool,
}

impl NoteExtractor {
    /// Creates an extractor around a classifier.
    pub fn new(classifier: LineClassifier, trace_lines: bool) -> Self {
        Self {
            classifier,
            trace_lines,
        }
    }

    /// Extractor for component release note bodies.
    pub fn for_documents(trace_lines: bool) -> Self {
        Self::new(LineClassifier::for_documents(), trace_lines)
    }

    /// Extractor for pull request descriptions.
    pub fn for_pull_requests(trace_lines: bool) -> Self {
        Self::new(LineClassifier::for_pull_requests(), trace_lines)
    }

    /// Reads every bullet of a component's release note body.
    ///
    /// A `##` heading naming a category switches the current category, the
    /// summary heading is skipped, and any other `##` heading ends the scan.
    /// A bullet seen before any category is an error.
    pub fn extract_document(
        &self,
        document: &str,
        content: &str,
        edition: Edition,
        component: Component,
    ) -> Result<Vec<DocumentNote>, NoteError> {
        let mut notes = Vec::new();
        let mut category: Option<Category> = None;

        for line in content.lines() {
            if self.trace_lines {
                trace!(document, line, "Read line");
            }

            match self.classifier.classify(line) {
                LineKind::Heading { level: 2, title } => {
                    if is_summary(title) {
                        continue;
                    }
                    match Category::from_display_name(title) {
                        Ok(matched) => {
                            debug!(document, category = %matched, "Matched category");
                            category = Some(matched);
                        }
                        Err(_) => {
                            debug!(document, heading = title, "Section is not a category, stopping");
                            break;
                        }
                    }
                }
                LineKind::NotApplicable if category.is_none() => {
                    return Err(NoteError::MissingCategory {
                        document: document.to_string(),
                        text: line.trim().trim_start_matches('-').trim().to_string(),
                    });
                }
                LineKind::Heading { .. } | LineKind::Inert | LineKind::NotApplicable => {}
                LineKind::SameAs { text, .. } | LineKind::Bullet(text) => {
                    let Some(category) = category else {
                        return Err(NoteError::MissingCategory {
                            document: document.to_string(),
                            text: text.to_string(),
                        });
                    };
                    notes.push(DocumentNote {
                        edition,
                        component,
                        category,
                        text: note_text(edition, text),
                    });
                }
            }
        }

        debug!(document, notes = notes.len(), "Extracted release note body");
        Ok(notes)
    }

    /// Reads the release note section of a pull request description.
    ///
    /// Returns `None` when the section says `N/A`. Otherwise a record is
    /// always produced, without text when the section is missing, empty, or
    /// only holds `Same as #N` lines.
    pub fn extract_pull_request(
        &self,
        number: &str,
        category: Option<Category>,
        body: &str,
    ) -> Option<PullRequestNote> {
        let mut lines = body.lines();
        for line in lines.by_ref() {
            if let LineKind::Heading { level: 2, title } = self.classifier.classify(line) {
                if is_release_note_heading(title) {
                    break;
                }
            }
        }

        let mut record = NoteRecord::new(number, category);
        let mut same_as: Vec<String> = Vec::new();

        for line in lines {
            if self.trace_lines {
                trace!(pr = number, line, "Read line");
            }

            match self.classifier.classify(line) {
                LineKind::Heading { .. } => break,
                LineKind::NotApplicable => {
                    debug!(pr = number, "Release note is N/A, skipping");
                    return None;
                }
                LineKind::SameAs { target, .. } => {
                    if !same_as.iter().any(|seen| seen == target) {
                        debug!(pr = number, same_as = target, "Found same-as reference");
                        same_as.push(target.to_string());
                    }
                }
                LineKind::Bullet(text) => {
                    debug!(pr = number, text, "Matched release note text");
                    record.text = Some(text.to_string());
                }
                LineKind::Inert => {}
            }
        }

        Some(PullRequestNote { record, same_as })
    }
}

fn note_text(edition: Edition, text: &str) -> String {
    if edition.strips_pull_request_numbers() {
        super::classify::strip_pull_request_numbers(text).to_string()
    } else {
        text.to_string()
    }
}
