//! Placeholder substitution for template strings.
//!
//! Placeholders use the `{{name}}` syntax. The name is everything between the
//! delimiters, taken verbatim (no trimming), and may not be empty or contain
//! `}`. Text that does not form a complete placeholder (`{{}}`, a lone `{{`)
//! is copied through as-is.

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::DictError;
use super::value::Dict;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").unwrap());

/// What to substitute when a placeholder has no matching argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingArgumentPolicy {
    /// Fail with [`DictError::MissingPlaceholderArgument`].
    #[default]
    Error,
    /// Substitute the empty string.
    Empty,
    /// Leave the placeholder text (`{{name}}`) in the output.
    Keep,
}

/// Named arguments for a template.
pub trait TemplateArgs {
    /// Text to substitute for `name`, or `None` if there is no such argument.
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl TemplateArgs for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl TemplateArgs for HashMap<&str, &str> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(*v))
    }
}

impl TemplateArgs for IndexMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl TemplateArgs for [(&str, &str)] {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| Cow::Borrowed(*v))
    }
}

impl<const N: usize> TemplateArgs for [(&str, &str); N] {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(name)
    }
}

/// Strings are used verbatim, other scalars in their display form.
/// Empty, sequence, callable and dict values count as missing.
impl TemplateArgs for Dict {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get_str(name)? {
            super::value::DictValue::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => other.to_text().map(Cow::Owned),
        }
    }
}

/// Substitute every `{{name}}` placeholder in `template`.
///
/// A placeholder without an argument is an error; see
/// [`resolved_template_with`] for the other policies.
///
/// ```
/// use dictum::core::resolved_template;
///
/// let text = resolved_template("Hello {{name}}!", &[("name", "Ada")]).unwrap();
/// assert_eq!(text, "Hello Ada!");
/// ```
pub fn resolved_template<A>(template: &str, args: &A) -> Result<String, DictError>
where
    A: TemplateArgs + ?Sized,
{
    resolved_template_with(template, args, MissingArgumentPolicy::Error)
}

pub fn resolved_template_with<A>(
    template: &str,
    args: &A,
    policy: MissingArgumentPolicy,
) -> Result<String, DictError>
where
    A: TemplateArgs + ?Sized,
{
    let mut result = String::with_capacity(template.len());
    let mut last_index = 0;

    for captures in PLACEHOLDER_REGEX.captures_iter(template) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        result.push_str(&template[last_index..whole.start()]);

        match args.lookup(name.as_str()) {
            Some(value) => result.push_str(&value),
            None => match policy {
                MissingArgumentPolicy::Error => {
                    return Err(DictError::MissingPlaceholderArgument {
                        name: name.as_str().to_string(),
                    });
                }
                MissingArgumentPolicy::Empty => {}
                MissingArgumentPolicy::Keep => result.push_str(whole.as_str()),
            },
        }

        last_index = whole.end();
    }

    result.push_str(&template[last_index..]);
    Ok(result)
}

/// Placeholder names in order of first appearance.
///
/// ```
/// use dictum::core::placeholders;
///
/// assert_eq!(placeholders("{{b}} {{a}} {{b}}"), vec!["b", "a"]);
/// ```
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}
