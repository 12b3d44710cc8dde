//! Closed enumerations that partition release notes.
//!
//! Every enumeration here is rendered in declaration order, never in the
//! order entries were discovered, so each one exposes an `ALL` array in that
//! order and derives `Ord` to match it.

use std::fmt;
use std::str::FromStr;

use crate::error::NoteError;

/// Heading that older release note bodies use for backward incompatible changes.
const LEGACY_BACKWARD_INCOMPATIBLE_HEADING: &str = "Backward incompatible changes";

/// Category of a release note entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Changes that break existing users.
    BackwardIncompatible,
    /// New features.
    Enhancement,
    /// Improvements to existing features.
    Improvement,
    /// Bug fixes.
    Bugfix,
    /// Anything else, and every entry without a category.
    Miscellaneous,
}

impl Category {
    /// All categories in rendering order.
    pub const ALL: [Self; 5] = [
        Self::BackwardIncompatible,
        Self::Enhancement,
        Self::Improvement,
        Self::Bugfix,
        Self::Miscellaneous,
    ];

    /// Returns the heading used when rendering this category.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::BackwardIncompatible => "Backward incompatibles",
            Self::Enhancement => "Enhancements",
            Self::Improvement => "Improvements",
            Self::Bugfix => "Bug fixes",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Returns the pull request label that selects this category.
    pub fn label(self) -> &'static str {
        match self {
            Self::BackwardIncompatible => "backward-incompatible",
            Self::Enhancement => "enhancement",
            Self::Improvement => "improvement",
            Self::Bugfix => "bugfix",
            Self::Miscellaneous => "miscellaneous",
        }
    }

    /// Looks up a category by its heading, ignoring case and surrounding spaces.
    pub fn from_display_name(name: &str) -> Result<Self, NoteError> {
        let name = name.trim();
        if name.eq_ignore_ascii_case(LEGACY_BACKWARD_INCOMPATIBLE_HEADING) {
            return Ok(Self::BackwardIncompatible);
        }
        Self::ALL
            .into_iter()
            .find(|category| category.display_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| NoteError::UnknownCategory(name.to_string()))
    }

    /// Looks up a category by its pull request label, ignoring case.
    pub fn from_label(label: &str) -> Result<Self, NoteError> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| NoteError::UnknownLabel(label.to_string()))
    }

    /// Returns the category named by the first matching label, if any.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Option<Self> {
        labels
            .iter()
            .find_map(|label| Self::from_label(label.as_ref().trim()).ok())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_name(s)
    }
}

/// Product edition a merged release note is partitioned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Edition {
    /// The open source edition.
    Community,
    /// The commercial edition, aggregating several products.
    Enterprise,
}

impl Edition {
    /// All editions in rendering order.
    pub const ALL: [Self; 2] = [Self::Community, Self::Enterprise];

    /// Returns the name used in the `## <name> edition` heading.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Community => "Community",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Whether notes in this edition are grouped under component headings.
    ///
    /// The community edition carries a single product, so its notes go
    /// directly under the category heading.
    pub fn shows_component_headings(self) -> bool {
        matches!(self, Self::Enterprise)
    }

    /// Whether trailing `(#123)` pull request references are removed from notes.
    pub fn strips_pull_request_numbers(self) -> bool {
        matches!(self, Self::Enterprise)
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Product repository a merged release note body comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    /// ScalarDB core.
    Core,
    /// ScalarDB Cluster.
    Cluster,
    /// ScalarDB GraphQL.
    GraphQl,
    /// ScalarDB SQL.
    Sql,
}

impl Component {
    /// All components in rendering order.
    pub const ALL: [Self; 4] = [Self::Core, Self::Cluster, Self::GraphQl, Self::Sql];

    /// Returns the heading used for this component.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Core => "ScalarDB",
            Self::Cluster => "ScalarDB Cluster",
            Self::GraphQl => "ScalarDB GraphQL",
            Self::Sql => "ScalarDB SQL",
        }
    }

    /// Returns the file the component's release note body is read from.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Core => "scalardb.md",
            Self::Cluster => "cluster.md",
            Self::GraphQl => "graphql.md",
            Self::Sql => "sql.md",
        }
    }

    /// Returns the edition the component ships in.
    pub fn edition(self) -> Edition {
        match self {
            Self::Core => Edition::Community,
            Self::Cluster | Self::GraphQl | Self::Sql => Edition::Enterprise,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
