//! Grouping of release notes for rendering.
//!
//! Groups are keyed by the closed enumerations and read back through their
//! `ALL` arrays, so output order never depends on discovery order.

use std::collections::BTreeMap;

use super::category::{Category, Component, Edition};
use super::record::{DocumentNote, NoteRecord};

/// Resolved pull request notes grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroups {
    groups: BTreeMap<Category, Vec<NoteRecord>>,
}

impl CategoryGroups {
    /// Creates empty groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups records, keeping their order inside each category.
    pub fn from_records(records: impl IntoIterator<Item = NoteRecord>) -> Self {
        let mut groups = Self::new();
        for record in records {
            groups.insert(record);
        }
        groups
    }

    /// Adds a record, filing it under miscellaneous when it has no category.
    pub fn insert(&mut self, mut record: NoteRecord) {
        let category = record.categorize();
        self.groups.entry(category).or_default().push(record);
    }

    /// Returns the records of one category in insertion order.
    pub fn get(&self, category: Category) -> &[NoteRecord] {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the non-empty categories in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[NoteRecord])> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
            .filter(|(_, records)| !records.is_empty())
    }

    /// Returns the total number of records.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Whether there are no records at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type ComponentNotes = BTreeMap<Component, Vec<String>>;

/// Release note body entries grouped by edition, category and component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditionGroups {
    editions: BTreeMap<Edition, BTreeMap<Category, ComponentNotes>>,
}

impl EditionGroups {
    /// Creates empty groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one note at the end of its group.
    pub fn insert(&mut self, note: DocumentNote) {
        self.editions
            .entry(note.edition)
            .or_default()
            .entry(note.category)
            .or_default()
            .entry(note.component)
            .or_default()
            .push(note.text);
    }

    /// Adds several notes in order.
    pub fn extend(&mut self, notes: impl IntoIterator<Item = DocumentNote>) {
        for note in notes {
            self.insert(note);
        }
    }

    /// Returns the notes of one group in insertion order.
    pub fn notes(&self, edition: Edition, category: Category, component: Component) -> &[String] {
        self.editions
            .get(&edition)
            .and_then(|categories| categories.get(&category))
            .and_then(|components| components.get(&component))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether any component has notes in this edition and category.
    pub fn has_category(&self, edition: Edition, category: Category) -> bool {
        Component::ALL
            .into_iter()
            .any(|component| !self.notes(edition, category, component).is_empty())
    }

    /// Whether the edition has any notes.
    pub fn has_edition(&self, edition: Edition) -> bool {
        Category::ALL
            .into_iter()
            .any(|category| self.has_category(edition, category))
    }

    /// Whether there are no notes at all.
    pub fn is_empty(&self) -> bool {
        !Edition::ALL
            .into_iter()
            .any(|edition| self.has_edition(edition))
    }
}
