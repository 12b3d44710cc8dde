//! # release-notes
//!
//! Builds markdown release notes from pull request descriptions and merges
//! per-component release note bodies into one document.
//!
//! ## Quick Start
//!
//! ```rust
//! use release_notes::config::NoteOptions;
//! use release_notes::merge::ReleaseNoteMerger;
//! use release_notes::notes::{Component, Edition};
//!
//! let mut merger = ReleaseNoteMerger::new(NoteOptions::default());
//! merger
//!     .load("scalardb.md", "## Bug fixes\n- Fixed a leak. (#10)\n", Edition::Community, Component::Core)
//!     .unwrap();
//! assert!(merger.render().contains("- Fixed a leak. (#10)"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod creation;
pub mod error;
pub mod github;
pub mod merge;
pub mod notes;
pub mod utils;

pub use crate::cli::Cli;
pub use crate::creation::ReleaseNoteCreation;
pub use crate::error::NoteError;
pub use crate::merge::ReleaseNoteMerger;

/// The current version of release-notes.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
