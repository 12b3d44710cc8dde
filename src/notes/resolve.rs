//! Resolution of `Same as #N` links between pull requests.
//!
//! Several pull requests often implement one user-facing change. The later
//! ones say `Same as #N` in their release note section, and their notes are
//! folded into the note of pull request `N`.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::record::NoteRecord;

/// Same-as links collected during extraction.
///
/// Targets keep the order in which they were first referenced and sources
/// keep the order in which they were collected.
#[derive(Debug, Clone, Default)]
pub struct SameAsLinks {
    targets: Vec<String>,
    sources: HashMap<String, Vec<String>>,
    absorbed: HashSet<String>,
}

impl SameAsLinks {
    /// Creates an empty link set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `source` describes the same change as `target`.
    pub fn link(&mut self, target: &str, source: &str) {
        if !self.sources.contains_key(target) {
            self.targets.push(target.to_string());
        }
        let sources = self.sources.entry(target.to_string()).or_default();
        if !sources.iter().any(|existing| existing == source) {
            sources.push(source.to_string());
        }
        self.absorbed.insert(source.to_string());
    }

    /// Returns the pull requests linked to `target`, in collection order.
    pub fn sources(&self, target: &str) -> &[String] {
        self.sources.get(target).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether the pull request was linked to some target.
    pub fn is_source(&self, origin: &str) -> bool {
        self.absorbed.contains(origin)
    }

    /// Returns the referenced pull requests in first-referenced order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(String::as_str)
    }

    /// Whether no links were collected.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Folds linked records into their targets.
///
/// Returns the records in extraction order without any record that was
/// linked as a source, whether or not its target exists. A record that is
/// the target of links absorbs its sources' text and origins. Links are
/// followed one level only.
pub fn resolve(records: &[NoteRecord], links: &SameAsLinks) -> Vec<NoteRecord> {
    let by_origin: HashMap<&str, &NoteRecord> = records
        .iter()
        .map(|record| (record.primary_origin(), record))
        .collect();

    for referenced in links.targets() {
        if !by_origin.contains_key(referenced) {
            debug!(
                referenced,
                sources = ?links.sources(referenced),
                "Same-as target has no release note, dropping linked notes"
            );
        } else if links.is_source(referenced) {
            debug!(referenced, "Same-as target is itself linked elsewhere, dropping");
        }
    }

    records
        .iter()
        .filter(|record| !links.is_source(record.primary_origin()))
        .map(|record| {
            let mut merged = record.clone();
            for source in links.sources(record.primary_origin()) {
                if let Some(linked) = by_origin.get(source.as_str()) {
                    merged.absorb(linked);
                }
            }
            if merged.origins.len() > 1 {
                debug!(pr = merged.primary_origin(), text = ?merged.text, "Merged same-as notes");
            }
            merged
        })
        .collect()
}
