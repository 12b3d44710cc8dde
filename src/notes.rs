//! Release note parsing, grouping and rendering.

pub mod aggregate;
pub mod category;
pub mod classify;
pub mod extract;
pub mod record;
pub mod render;
pub mod resolve;

pub use aggregate::{CategoryGroups, EditionGroups};
pub use category::{Category, Component, Edition};
pub use classify::{BulletStyle, LineClassifier, LineKind};
pub use extract::{NoteExtractor, PullRequestNote};
pub use record::{DocumentNote, NoteRecord};
pub use render::{render_component_note, render_merged_note};
pub use resolve::{resolve, SameAsLinks};
