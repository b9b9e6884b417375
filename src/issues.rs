//! Issue types for dictionary checks.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ParseError,
    Structure,
    MissingPath,
    PlaceholderMismatch,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::ParseError => write!(f, "parse-error"),
            Rule::Structure => write!(f, "structure"),
            Rule::MissingPath => write!(f, "missing-path"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Dictionary file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

/// Dictionary that cannot be flattened (too deep, or duplicate paths).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StructureIssue {
    pub file_path: String,
    pub locale: String,
    pub error: String,
}

impl StructureIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Structure
    }
}

/// Path defined by the primary locale but absent from another locale.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingPathIssue {
    /// File of the locale that lacks the path.
    pub file_path: String,
    pub path: String,
    pub locale: String,
    pub primary_locale: String,
}

impl MissingPathIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingPath
    }
}

/// Template whose placeholders differ from the primary locale's template.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlaceholderMismatchIssue {
    pub file_path: String,
    pub path: String,
    pub locale: String,
    pub primary_locale: String,
    /// Placeholders of the primary template, sorted.
    pub expected: Vec<String>,
    /// Placeholders of this locale's template, sorted.
    pub actual: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A dictionary issue found by `dictum check`.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Issue {
    ParseError(ParseErrorIssue),
    Structure(StructureIssue),
    MissingPath(MissingPathIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::ParseError(_) => ParseErrorIssue::severity(),
            Issue::Structure(_) => StructureIssue::severity(),
            Issue::MissingPath(_) => MissingPathIssue::severity(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::ParseError(_) => ParseErrorIssue::rule(),
            Issue::Structure(_) => StructureIssue::rule(),
            Issue::MissingPath(_) => MissingPathIssue::rule(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// File the issue points at.
    fn file_path(&self) -> &str;

    /// Primary message to display (path, error, etc.).
    fn message(&self) -> String;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for ParseErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.error.clone()
    }
}

impl Report for StructureIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.error.clone()
    }
}

impl Report for MissingPathIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("\"{}\" is missing in {}", self.path, self.locale)
    }

    fn details(&self) -> Option<String> {
        Some(format!("defined in primary locale {}", self.primary_locale))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("\"{}\" has different placeholders in {}", self.path, self.locale)
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} expects [{}], {} has [{}]",
            self.primary_locale,
            self.expected.join(", "),
            self.locale,
            self.actual.join(", ")
        ))
    }
}
