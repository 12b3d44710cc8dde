//! Access to pull request data.

pub mod gh;
pub mod source;

pub use gh::GhCli;
pub use source::{CannedSource, PullRequestQuery, PullRequestSource};
