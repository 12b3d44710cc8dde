//! Markdown rendering of grouped release notes.

use super::aggregate::{CategoryGroups, EditionGroups};
use super::category::{Category, Component, Edition};
use super::classify::SUMMARY_TITLE;
use super::record::NoteRecord;

/// Renders the release note of a single repository.
///
/// ```text
/// ## Summary
///
/// ## Enhancements
/// - Some text. (#1 #2)
///
/// ```
///
/// Records without text are skipped, and so is a category left with nothing
/// to show.
pub fn render_component_note(groups: &CategoryGroups) -> String {
    let mut output = format!("## {SUMMARY_TITLE}\n\n");

    for (category, records) in groups.iter() {
        let bullets: Vec<String> = records.iter().filter_map(format_record).collect();
        if bullets.is_empty() {
            continue;
        }
        output.push_str(&format!("## {}\n", category.display_name()));
        for bullet in bullets {
            output.push_str(&bullet);
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

/// Formats one record as `- <text> (#<id> #<id>)`.
fn format_record(record: &NoteRecord) -> Option<String> {
    let text = record.renderable_text()?;
    if record.origins.is_empty() {
        return None;
    }
    let references = record
        .origins
        .iter()
        .map(|origin| format!("#{origin}"))
        .collect::<Vec<_>>()
        .join(" ");
    Some(format!("- {text} ({references})"))
}

/// Renders the merged release note of all components.
///
/// Editions, categories and components appear in declaration order and only
/// when they hold notes. Component headings are written for editions that
/// aggregate several products.
pub fn render_merged_note(groups: &EditionGroups) -> String {
    let mut output = format!("## {SUMMARY_TITLE}\n\n");

    for edition in Edition::ALL {
        if !groups.has_edition(edition) {
            continue;
        }
        output.push_str(&format!("## {} edition\n", edition.display_name()));

        for category in Category::ALL {
            if !groups.has_category(edition, category) {
                continue;
            }
            output.push_str(&format!("### {}\n", category.display_name()));

            for component in Component::ALL {
                let notes = groups.notes(edition, category, component);
                if notes.is_empty() {
                    continue;
                }
                if edition.shows_component_headings() {
                    output.push_str(&format!("#### {}\n", component.display_name()));
                }
                for note in notes {
                    output.push_str(&format!("- {note}\n"));
                }
            }
        }

        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::record::DocumentNote;

    fn record(origins: &[&str], category: Category, text: Option<&str>) -> NoteRecord {
        let mut record = NoteRecord::new(origins[0], Some(category));
        for origin in &origins[1..] {
            record.add_origin(origin);
        }
        record.text = text.map(String::from);
        record
    }

    fn note(edition: Edition, component: Component, category: Category, text: &str) -> DocumentNote {
        DocumentNote {
            edition,
            component,
            category,
            text: text.to_string(),
        }
    }

    #[test]
    fn empty_component_note_is_just_the_summary() {
        assert_eq!(render_component_note(&CategoryGroups::new()), "## Summary\n\n");
    }

    #[test]
    fn component_note_lists_references() {
        let groups = CategoryGroups::from_records(vec![
            record(&["6"], Category::Bugfix, Some("A bugfix text.")),
            record(&["1", "2", "3"], Category::Enhancement, Some("Topic.")),
        ]);
        assert_eq!(
            render_component_note(&groups),
            "## Summary\n\n\
             ## Enhancements\n\
             - Topic. (#1 #2 #3)\n\n\
             ## Bug fixes\n\
             - A bugfix text. (#6)\n\n"
        );
    }

    #[test]
    fn textless_records_and_their_empty_categories_are_omitted() {
        let groups = CategoryGroups::from_records(vec![
            record(&["1"], Category::Enhancement, None),
            record(&["2"], Category::Bugfix, Some("Fixed.")),
            record(&["3"], Category::Bugfix, Some("")),
        ]);
        assert_eq!(
            render_component_note(&groups),
            "## Summary\n\n## Bug fixes\n- Fixed. (#2)\n\n"
        );
    }

    #[test]
    fn merged_note_community_has_no_component_headings() {
        let mut groups = EditionGroups::new();
        groups.insert(note(
            Edition::Community,
            Component::Core,
            Category::Enhancement,
            "Core feature.",
        ));
        assert_eq!(
            render_merged_note(&groups),
            "## Summary\n\n## Community edition\n### Enhancements\n- Core feature.\n\n"
        );
    }

    #[test]
    fn merged_note_orders_every_level() {
        let mut groups = EditionGroups::new();
        groups.extend(vec![
            note(Edition::Enterprise, Component::Sql, Category::Bugfix, "SQL fix."),
            note(Edition::Enterprise, Component::Cluster, Category::Bugfix, "Cluster fix."),
            note(Edition::Enterprise, Component::Cluster, Category::Enhancement, "Cluster feature."),
            note(Edition::Community, Component::Core, Category::Bugfix, "Core fix."),
        ]);
        assert_eq!(
            render_merged_note(&groups),
            "## Summary\n\n\
             ## Community edition\n\
             ### Bug fixes\n\
             - Core fix.\n\
             \n\
             ## Enterprise edition\n\
             ### Enhancements\n\
             #### ScalarDB Cluster\n\
             - Cluster feature.\n\
             ### Bug fixes\n\
             #### ScalarDB Cluster\n\
             - Cluster fix.\n\
             #### ScalarDB SQL\n\
             - SQL fix.\n\
             \n"
        );
    }

    #[test]
    fn empty_edition_produces_nothing() {
        let mut groups = EditionGroups::new();
        groups.insert(note(
            Edition::Enterprise,
            Component::GraphQl,
            Category::Miscellaneous,
            "Docs.",
        ));
        let output = render_merged_note(&groups);
        assert!(!output.contains("Community"));
        assert_eq!(
            output,
            "## Summary\n\n## Enterprise edition\n### Miscellaneous\n#### ScalarDB GraphQL\n- Docs.\n\n"
        );
    }
}
