//! Line classification for markdown release note fragments.

use std::sync::LazyLock;

use regex::Regex;

/// Title of the summary section, which is skipped wherever it appears.
pub const SUMMARY_TITLE: &str = "Summary";

/// How a bullet is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletStyle {
    /// A leading dash is required (`- text`).
    Dashed,
    /// The leading dash is optional, so any non-blank line is a bullet.
    Loose,
}

/// What a single line of markdown means to the extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A heading of level 2 or deeper. `title` is trimmed and may be empty.
    Heading {
        /// Number of leading `#` characters.
        level: usize,
        /// Heading text.
        title: &'a str,
    },
    /// `N/A` or `NA`: the note is not user facing.
    NotApplicable,
    /// `Same as #123`: the note belongs to another pull request.
    SameAs {
        /// The referenced pull request number.
        target: &'a str,
        /// The whole bullet text.
        text: &'a str,
    },
    /// Release note text.
    Bullet(&'a str),
    /// Anything else.
    Inert,
}

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<hashes>#{2,})(?P<title>[^#].*)?$").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static DASHED_BULLET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*(?P<text>.*?)\s*$").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static LOOSE_BULLET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-?\s*(?P<text>.*?)\s*$").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static NOT_APPLICABLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^n/?a$").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static SAME_AS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^same ?as +#?(?P<number>[0-9]+)$").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static RELEASE_NOTE_HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^release *notes?$").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static PULL_REQUEST_SUFFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<text>.*?) +\((?:#[0-9]+ *)+\)$").unwrap());

/// Classifies lines of a release note body or a pull request description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClassifier {
    style: BulletStyle,
}

impl LineClassifier {
    /// Creates a classifier with the given bullet style.
    pub fn new(style: BulletStyle) -> Self {
        Self { style }
    }

    /// Classifier for release note body documents, where bullets need a dash.
    pub fn for_documents() -> Self {
        Self::new(BulletStyle::Dashed)
    }

    /// Classifier for pull request descriptions, where the dash is optional.
    pub fn for_pull_requests() -> Self {
        Self::new(BulletStyle::Loose)
    }

    /// Classifies one line.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if let Some(captures) = HEADING_PATTERN.captures(line) {
            let level = captures.name("hashes").map_or(0, |m| m.as_str().len());
            let title = captures.name("title").map_or("", |m| m.as_str().trim());
            return LineKind::Heading { level, title };
        }

        let pattern = match self.style {
            BulletStyle::Dashed => &DASHED_BULLET_PATTERN,
            BulletStyle::Loose => &LOOSE_BULLET_PATTERN,
        };
        let Some(text) = pattern
            .captures(line)
            .and_then(|captures| captures.name("text"))
            .map(|m| m.as_str())
            .filter(|text| !text.is_empty())
        else {
            return LineKind::Inert;
        };

        if NOT_APPLICABLE_PATTERN.is_match(text) {
            return LineKind::NotApplicable;
        }
        if let Some(number) = SAME_AS_PATTERN
            .captures(text)
            .and_then(|captures| captures.name("number"))
        {
            return LineKind::SameAs {
                target: number.as_str(),
                text,
            };
        }
        LineKind::Bullet(text)
    }
}

/// Whether a heading title is the summary section.
pub fn is_summary(title: &str) -> bool {
    title.trim().eq_ignore_ascii_case(SUMMARY_TITLE)
}

/// Whether a heading title marks the release note section of a pull request.
///
/// Accepts "Release note", "Release notes" and spacing or case variants.
pub fn is_release_note_heading(title: &str) -> bool {
    RELEASE_NOTE_HEADING_PATTERN.is_match(title.trim())
}

/// Removes a trailing `(#123 #456)` group of pull request references.
pub fn strip_pull_request_numbers(text: &str) -> &str {
    PULL_REQUEST_SUFFIX_PATTERN
        .captures(text)
        .and_then(|captures| captures.name("text"))
        .map_or(text, |m| m.as_str())
}
