//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format
//! and the output of the listing commands. Separate from core logic to allow
//! dictum to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, FlatEntry, FlattenSummary, GetSummary, InitSummary,
    PlaceholdersSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    for issue in issues {
        print_issue(issue, writer);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(files_checked: usize) {
    print_success_to(files_checked, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(files_checked: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} dictionary {} - no issues found",
            files_checked,
            if files_checked == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed and were not compared",
            "warning:".bold().yellow(),
            count
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    print_to(result, &mut stdout);

    if matches!(result.summary, CommandSummary::Check) {
        print_parse_warning(result.parse_error_count, verbose);
    }
}

/// Print the output of any command to a custom writer.
///
/// Init errors go to stderr regardless of `writer`.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Flatten(summary) => print_flatten(summary, writer),
        CommandSummary::Get(summary) => print_get(summary, writer),
        CommandSummary::Placeholders(summary) => print_placeholders(summary, writer),
        CommandSummary::Check => {
            if result.issues.is_empty() {
                print_success_to(result.files_checked, writer);
            } else {
                report_to(&result.issues, writer);
            }
        }
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_flatten<W: Write>(summary: &FlattenSummary, writer: &mut W) {
    match summary {
        FlattenSummary::Listing(entries) => {
            for FlatEntry { path, preview } in entries {
                let _ = writeln!(writer, "{} {} {}", path.bold(), "=".dimmed(), preview);
            }
        }
        FlattenSummary::Json(json) => {
            let _ = writeln!(writer, "{}", json);
        }
    }
}

fn print_get<W: Write>(summary: &GetSummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", summary.rendered);
}

fn print_placeholders<W: Write>(summary: &PlaceholdersSummary, writer: &mut W) {
    if summary.templates.is_empty() {
        let _ = writeln!(writer, "{}", "No placeholders found".dimmed());
        return;
    }
    for (path, names) in &summary.templates {
        let _ = writeln!(writer, "{}: {}", path.bold(), names.join(", ").cyan());
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if let Some(error) = &summary.error {
        eprintln!("Error: {}", error);
    } else if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
