//! Release note error handling.

use thiserror::Error;

/// Errors raised while parsing, collecting, or rendering release notes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NoteError {
    /// A heading named a category that does not exist.
    #[error("Invalid category display name: {0}")]
    UnknownCategory(String),

    /// A label was looked up as a category but names none.
    #[error("Invalid category label: {0}")]
    UnknownLabel(String),

    /// A release note bullet appeared before any category heading.
    #[error("Missing category in {document}. Release note text: {text}")]
    MissingCategory {
        /// Name of the document being parsed.
        document: String,
        /// The bullet text that had no category.
        text: String,
    },

    /// An external collaborator returned nothing where an answer was required.
    #[error("Couldn't get {what}")]
    MissingData {
        /// Description of the missing data.
        what: String,
    },

    /// An external command exited unsuccessfully.
    #[error("Command `{command}` failed: {stderr}")]
    CommandFailed {
        /// The command line that was run.
        command: String,
        /// Trimmed standard error of the command.
        stderr: String,
    },
}
