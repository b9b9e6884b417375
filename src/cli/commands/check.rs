use std::{collections::BTreeMap, path::Path};

use anyhow::{Result, bail};

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    core::{CheckContext, parsers::json::extract_locale},
    issues::{Issue, ParseErrorIssue},
    rules::{
        FlattenedLocale, missing_path::check_missing_path_issues,
        placeholder_mismatch::check_placeholder_mismatch_issues,
        structure::check_structure_issues,
    },
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let scan = ctx.scan_dictionaries()?;
    let primary_locale = ctx.primary_locale();

    let primary_present = scan
        .dictionaries
        .iter()
        .any(|d| d.locale == primary_locale)
        || scan
            .warnings
            .iter()
            .any(|w| extract_locale(&w.file_path).as_deref() == Some(primary_locale));
    if !primary_present {
        bail!(
            "Primary locale '{}' dictionary not found in '{}'",
            primary_locale,
            ctx.dictionaries_dir.display()
        );
    }

    let files_checked = scan.dictionaries.len() + scan.warnings.len();
    let mut all_issues: Vec<Issue> = scan
        .warnings
        .iter()
        .map(|w| {
            Issue::ParseError(ParseErrorIssue {
                file_path: w.file_path.clone(),
                error: w.error.clone(),
            })
        })
        .collect();

    let (flattened, structure_issues) =
        check_structure_issues(&scan.dictionaries, ctx.max_depth());
    all_issues.extend(structure_issues.into_iter().map(Issue::Structure));

    for group in group_by_directory(&flattened).values() {
        let Some(primary) = group.iter().find(|l| l.locale == primary_locale) else {
            continue;
        };
        for replica in group.iter().filter(|l| l.locale != primary_locale) {
            all_issues.extend(
                check_missing_path_issues(primary, replica)
                    .into_iter()
                    .map(Issue::MissingPath),
            );
            all_issues.extend(
                check_placeholder_mismatch_issues(primary, replica)
                    .into_iter()
                    .map(Issue::PlaceholderMismatch),
            );
        }
    }

    Ok(finish(CommandSummary::Check, all_issues, files_checked, true))
}

/// Locales are compared only with files in the same directory, so
/// `app/en.json` pairs with `app/fr.json` but not with `admin/fr.json`.
fn group_by_directory<'a, 'b>(
    flattened: &'b [FlattenedLocale<'a>],
) -> BTreeMap<&'b Path, Vec<&'b FlattenedLocale<'a>>> {
    let mut groups: BTreeMap<&Path, Vec<&FlattenedLocale<'a>>> = BTreeMap::new();
    for locale in flattened {
        let dir = Path::new(&locale.file_path)
            .parent()
            .unwrap_or_else(|| Path::new(""));
        groups.entry(dir).or_default().push(locale);
    }
    groups
}
