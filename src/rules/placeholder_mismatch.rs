//! Placeholder mismatch detection.
//!
//! A template resolved with the primary locale's arguments must reference the
//! same placeholder names in every locale, otherwise resolution fails (or
//! silently drops text) only for some users.

use std::collections::BTreeSet;

use super::FlattenedLocale;
use crate::core::{DictValue, placeholders};
use crate::issues::PlaceholderMismatchIssue;

pub fn check_placeholder_mismatch_issues(
    primary: &FlattenedLocale<'_>,
    replica: &FlattenedLocale<'_>,
) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for (path, value) in primary.flat.iter() {
        let (DictValue::String(expected), Some(DictValue::String(actual))) =
            (value, replica.flat.get(path))
        else {
            continue;
        };

        let expected = placeholder_set(expected);
        let actual = placeholder_set(actual);
        if expected != actual {
            issues.push(PlaceholderMismatchIssue {
                file_path: replica.file_path.clone(),
                path: path.to_string(),
                locale: replica.locale.clone(),
                primary_locale: primary.locale.clone(),
                expected: expected.into_iter().collect(),
                actual: actual.into_iter().collect(),
            });
        }
    }

    issues
}

fn placeholder_set(template: &str) -> BTreeSet<String> {
    placeholders(template).into_iter().map(String::from).collect()
}
