//! Structural check: every dictionary must flatten.

use super::FlattenedLocale;
use crate::core::LocaleDictionary;
use crate::issues::StructureIssue;

/// Flatten every dictionary, splitting them into the ones that succeeded and
/// issues for the ones that did not.
pub fn check_structure_issues(
    dictionaries: &[LocaleDictionary],
    max_depth: usize,
) -> (Vec<FlattenedLocale<'_>>, Vec<StructureIssue>) {
    let mut flattened = Vec::with_capacity(dictionaries.len());
    let mut issues = Vec::new();

    for dictionary in dictionaries {
        match dictionary.flatten(max_depth) {
            Ok(flat) => flattened.push(FlattenedLocale {
                locale: dictionary.locale.clone(),
                file_path: dictionary.file_path.clone(),
                flat,
            }),
            Err(err) => issues.push(StructureIssue {
                file_path: dictionary.file_path.clone(),
                locale: dictionary.locale.clone(),
                error: err.to_string(),
            }),
        }
    }

    (flattened, issues)
}
