//! Release note records produced by the extractors.

use super::category::{Category, Component, Edition};

/// A release note collected from one pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    /// Category taken from the pull request labels, if any matched.
    pub category: Option<Category>,
    /// Release note text. Absent when the pull request only points at another one.
    pub text: Option<String>,
    /// Pull request numbers this note covers, primary first.
    pub origins: Vec<String>,
}

impl NoteRecord {
    /// Creates an empty record for a pull request.
    pub fn new(origin: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            category,
            text: None,
            origins: vec![origin.into()],
        }
    }

    /// Returns the pull request the record was extracted from.
    pub fn primary_origin(&self) -> &str {
        self.origins.first().map_or("", String::as_str)
    }

    /// Assigns miscellaneous to a record that has no category yet.
    pub fn categorize(&mut self) -> Category {
        *self.category.get_or_insert(Category::Miscellaneous)
    }

    /// Returns the text when there is something to render.
    pub fn renderable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }

    /// Appends an origin unless it is already listed.
    pub fn add_origin(&mut self, origin: &str) {
        if !self.origins.iter().any(|existing| existing == origin) {
            self.origins.push(origin.to_string());
        }
    }

    /// Folds another record describing the same change into this one.
    ///
    /// The other record's text, when present, is appended after a single
    /// space; its origins follow this record's origins.
    pub fn absorb(&mut self, other: &NoteRecord) {
        if let Some(extra) = other.renderable_text() {
            self.text = Some(match self.renderable_text() {
                Some(existing) => format!("{existing} {extra}"),
                None => extra.to_string(),
            });
        }
        for origin in &other.origins {
            self.add_origin(origin);
        }
    }
}

/// A release note read from a component's release note body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNote {
    /// Edition the body belongs to.
    pub edition: Edition,
    /// Component the body belongs to.
    pub component: Component,
    /// Category heading the bullet appeared under.
    pub category: Category,
    /// Bullet text.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(origin: &str, text: Option<&str>) -> NoteRecord {
        let mut record = NoteRecord::new(origin, Some(Category::Enhancement));
        record.text = text.map(String::from);
        record
    }

    #[test]
    fn new_record_has_one_origin() {
        let record = NoteRecord::new("42", None);
        assert_eq!(record.origins, vec!["42".to_string()]);
        assert_eq!(record.primary_origin(), "42");
        assert_eq!(record.text, None);
    }

    #[test]
    fn categorize_defaults_to_miscellaneous() {
        let mut record = NoteRecord::new("1", None);
        assert_eq!(record.categorize(), Category::Miscellaneous);
        assert_eq!(record.category, Some(Category::Miscellaneous));

        let mut record = NoteRecord::new("2", Some(Category::Bugfix));
        assert_eq!(record.categorize(), Category::Bugfix);
    }

    #[test]
    fn absorb_appends_text_and_origins_in_order() {
        let mut target = record("1", Some("A"));
        target.absorb(&record("2", Some("B")));
        target.absorb(&record("3", Some("C")));
        assert_eq!(target.text.as_deref(), Some("A B C"));
        assert_eq!(target.origins, vec!["1", "2", "3"]);
    }

    #[test]
    fn absorb_into_empty_target_has_no_leading_space() {
        let mut target = record("1", None);
        target.absorb(&record("2", Some("B")));
        assert_eq!(target.text.as_deref(), Some("B"));

        let mut target = record("1", Some(""));
        target.absorb(&record("2", Some("B")));
        assert_eq!(target.text.as_deref(), Some("B"));
    }

    #[test]
    fn absorb_textless_source_only_adds_origin() {
        let mut target = record("1", Some("A"));
        target.absorb(&record("2", None));
        assert_eq!(target.text.as_deref(), Some("A"));
        assert_eq!(target.origins, vec!["1", "2"]);
    }

    #[test]
    fn origins_stay_unique() {
        let mut target = record("1", Some("A"));
        target.add_origin("1");
        target.add_origin("2");
        target.add_origin("2");
        assert_eq!(target.origins, vec!["1", "2"]);
    }
}
