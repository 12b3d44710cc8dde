//! Pull request data source abstraction.

use std::collections::HashMap;
use std::fmt;

use anyhow::Result;

/// A question asked of the pull request tracker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PullRequestQuery {
    /// Identifier of the project board for the release.
    ProjectId,
    /// Numbers of the pull requests on a project board.
    PullRequestNumbers {
        /// Project board identifier.
        project_id: String,
    },
    /// State of a pull request, e.g. `MERGED`.
    State {
        /// Pull request number.
        number: String,
    },
    /// Label names of a pull request.
    Labels {
        /// Pull request number.
        number: String,
    },
    /// Description of a pull request.
    Body {
        /// Pull request number.
        number: String,
    },
}

impl PullRequestQuery {
    /// Query for the state of a pull request.
    pub fn state(number: &str) -> Self {
        Self::State {
            number: number.to_string(),
        }
    }

    /// Query for the labels of a pull request.
    pub fn labels(number: &str) -> Self {
        Self::Labels {
            number: number.to_string(),
        }
    }

    /// Query for the description of a pull request.
    pub fn body(number: &str) -> Self {
        Self::Body {
            number: number.to_string(),
        }
    }

    /// Query for the pull requests of a project board.
    pub fn pull_request_numbers(project_id: &str) -> Self {
        Self::PullRequestNumbers {
            project_id: project_id.to_string(),
        }
    }
}

impl fmt::Display for PullRequestQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProjectId => write!(f, "the project id"),
            Self::PullRequestNumbers { project_id } => {
                write!(f, "the pull requests of project {project_id}")
            }
            Self::State { number } => write!(f, "the state of pull request #{number}"),
            Self::Labels { number } => write!(f, "the labels of pull request #{number}"),
            Self::Body { number } => write!(f, "the body of pull request #{number}"),
        }
    }
}

/// Trait for pull request trackers.
///
/// Every answer is a sequence of lines so that the release note logic does
/// not depend on how the tracker is reached.
pub trait PullRequestSource {
    /// Answers a query with zero or more lines.
    fn query(&self, query: &PullRequestQuery) -> Result<Vec<String>>;
}

impl<T: PullRequestSource + ?Sized> PullRequestSource for &T {
    fn query(&self, query: &PullRequestQuery) -> Result<Vec<String>> {
        (**self).query(query)
    }
}

impl<T: PullRequestSource + ?Sized> PullRequestSource for Box<T> {
    fn query(&self, query: &PullRequestQuery) -> Result<Vec<String>> {
        (**self).query(query)
    }
}

/// In-memory source answering from pre-recorded lines.
///
/// Queries without a recorded answer get no lines.
#[derive(Debug, Clone, Default)]
pub struct CannedSource {
    answers: HashMap<PullRequestQuery, Vec<String>>,
}

impl CannedSource {
    /// Creates a source with no answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the lines returned for a query.
    pub fn insert<I, S>(&mut self, query: PullRequestQuery, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers
            .insert(query, lines.into_iter().map(Into::into).collect());
    }

    /// Records the project board and the pull requests on it.
    pub fn with_project(mut self, project_id: &str, numbers: &[&str]) -> Self {
        self.insert(PullRequestQuery::ProjectId, [project_id]);
        self.insert(
            PullRequestQuery::pull_request_numbers(project_id),
            numbers.iter().copied(),
        );
        self
    }

    /// Records a merged pull request.
    pub fn with_merged_pull_request(self, number: &str, labels: &[&str], body: &str) -> Self {
        self.with_pull_request(number, "MERGED", labels, body)
    }

    /// Records a pull request in any state.
    pub fn with_pull_request(
        mut self,
        number: &str,
        state: &str,
        labels: &[&str],
        body: &str,
    ) -> Self {
        self.insert(PullRequestQuery::state(number), [state]);
        self.insert(PullRequestQuery::labels(number), labels.iter().copied());
        self.insert(PullRequestQuery::body(number), body.lines());
        self
    }
}

impl PullRequestSource for CannedSource {
    fn query(&self, query: &PullRequestQuery) -> Result<Vec<String>> {
        Ok(self.answers.get(query).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_answers() {
        let source = CannedSource::new()
            .with_project("7", &["10", "11"])
            .with_merged_pull_request("10", &["bugfix"], "## Release notes\n- Fixed.");

        assert_eq!(source.query(&PullRequestQuery::ProjectId).unwrap(), vec!["7"]);
        assert_eq!(
            source
                .query(&PullRequestQuery::pull_request_numbers("7"))
                .unwrap(),
            vec!["10", "11"]
        );
        assert_eq!(
            source.query(&PullRequestQuery::body("10")).unwrap(),
            vec!["## Release notes", "- Fixed."]
        );
        assert!(source
            .query(&PullRequestQuery::state("11"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn borrowed_source_answers_the_same() {
        let source = CannedSource::new().with_project("3", &[]);
        let borrowed: &dyn PullRequestSource = &source;
        assert_eq!(
            (&borrowed).query(&PullRequestQuery::ProjectId).unwrap(),
            vec!["3"]
        );
    }

    #[test]
    fn query_descriptions() {
        assert_eq!(PullRequestQuery::ProjectId.to_string(), "the project id");
        assert_eq!(
            PullRequestQuery::state("12").to_string(),
            "the state of pull request #12"
        );
    }
}
