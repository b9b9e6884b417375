use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Flatten(FlattenSummary),
    Get(GetSummary),
    Placeholders(PlaceholdersSummary),
    Check,
    Init(InitSummary),
}

/// One row of `dictum flatten`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry {
    pub path: String,
    /// One-line preview of the value (`"text"`, `{2 entries}`, `[3 items]`).
    pub preview: String,
}

#[derive(Debug)]
pub enum FlattenSummary {
    Listing(Vec<FlatEntry>),
    /// Pretty-printed JSON object of path -> value.
    Json(String),
}

#[derive(Debug)]
pub struct GetSummary {
    /// Resolved value, already rendered for output.
    pub rendered: String,
}

#[derive(Debug)]
pub struct PlaceholdersSummary {
    /// Templates in traversal order with their placeholder names.
    /// Templates without placeholders are omitted.
    pub templates: Vec<(String, Vec<String>)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running dictum commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of dictionary files that failed to parse.
    pub parse_error_count: usize,
    /// Number of dictionary files that were checked.
    pub files_checked: usize,
}

impl CommandResult {
    /// Result of a command that reports no issues.
    pub fn output(summary: CommandSummary) -> Self {
        Self {
            summary,
            error_count: 0,
            warning_count: 0,
            exit_on_errors: true,
            issues: Vec::new(),
            parse_error_count: 0,
            files_checked: 0,
        }
    }
}
