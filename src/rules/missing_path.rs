//! Missing path detection.
//!
//! Every path the primary locale defines should also exist in the other
//! locales; lookups by fully-qualified path would otherwise come back empty.

use super::FlattenedLocale;
use crate::issues::MissingPathIssue;

pub fn check_missing_path_issues(
    primary: &FlattenedLocale<'_>,
    replica: &FlattenedLocale<'_>,
) -> Vec<MissingPathIssue> {
    primary
        .flat
        .paths()
        .filter(|path| !replica.flat.contains_key(path))
        .map(|path| MissingPathIssue {
            file_path: replica.file_path.clone(),
            path: path.to_string(),
            locale: replica.locale.clone(),
            primary_locale: primary.locale.clone(),
        })
        .collect()
}
