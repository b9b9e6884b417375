//! Flattening nested dictionaries into dot-joined paths.
//!
//! `{"Auth": {"Login": {"title": "Sign in"}}}` becomes
//!
//! ```text
//! Auth              -> {1 entry}
//! Auth.Login        -> {1 entry}
//! Auth.Login.title  -> "Sign in"
//! ```
//!
//! Dict entries stay in the output next to their descendants. Sequences are
//! leaves even when they contain dictionaries. Values are borrowed from the
//! source tree, never copied.

use indexmap::{IndexMap, map::Entry};

use super::error::DictError;
use super::resolve::resolve_with;
use super::template::MissingArgumentPolicy;
use super::value::{Dict, DictValue};

/// Nesting limit used by [`flat_dict`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Single-level view of a [`Dict`], keyed by dotted path.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatDict<'a> {
    entries: IndexMap<String, &'a DictValue>,
}

impl<'a> FlatDict<'a> {
    pub fn get(&self, path: &str) -> Option<&'a DictValue> {
        self.entries.get(path).copied()
    }

    pub fn contains_key(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Paths in traversal order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a DictValue)> {
        self.entries.iter().map(|(path, value)| (path.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `path` and resolve the entry with `args`.
    ///
    /// Returns `Ok(None)` when the path does not exist.
    pub fn resolve(
        &self,
        path: &str,
        args: &[DictValue],
        policy: MissingArgumentPolicy,
    ) -> Result<Option<DictValue>, DictError> {
        self.get(path)
            .map(|value| resolve_with(value, args, policy))
            .transpose()
    }
}

/// Flatten `dict` with the default depth limit.
///
/// ```
/// use dictum::core::{Dict, DictValue, flat_dict};
///
/// let inner = Dict::from_iter([("b", 1)]);
/// let dict = Dict::from_iter([("a", DictValue::from(inner))]);
/// let flat = flat_dict(&dict).unwrap();
///
/// assert_eq!(flat.paths().collect::<Vec<_>>(), vec!["a", "a.b"]);
/// assert_eq!(flat.get("a.b"), Some(&DictValue::from(1)));
/// ```
pub fn flat_dict(dict: &Dict) -> Result<FlatDict<'_>, DictError> {
    flat_dict_with_limit(dict, DEFAULT_MAX_DEPTH)
}

/// Flatten `dict`, failing once a path would have more than `max_depth`
/// segments.
pub fn flat_dict_with_limit(dict: &Dict, max_depth: usize) -> Result<FlatDict<'_>, DictError> {
    let mut entries = IndexMap::with_capacity(dict.len());

    // Root entries first, unprefixed.
    for (key, value) in dict {
        insert_unique(&mut entries, key.to_string(), value)?;
    }
    if max_depth == 0
        && let Some(key) = dict.keys().next()
    {
        return Err(DictError::StructuralCycleDetected {
            path: key.to_string(),
            max_depth,
        });
    }

    for (key, value) in dict {
        if let DictValue::Dict(child) = value {
            visit_dict(&mut entries, child, &key.to_string(), 2, max_depth)?;
        }
    }

    Ok(FlatDict { entries })
}

fn visit_dict<'a>(
    entries: &mut IndexMap<String, &'a DictValue>,
    dict: &'a Dict,
    parent_path: &str,
    depth: usize,
    max_depth: usize,
) -> Result<(), DictError> {
    for (key, value) in dict {
        let key_path = format!("{}.{}", parent_path, key);
        if depth > max_depth {
            return Err(DictError::StructuralCycleDetected {
                path: key_path,
                max_depth,
            });
        }
        insert_unique(entries, key_path.clone(), value)?;

        if let DictValue::Dict(child) = value {
            visit_dict(entries, child, &key_path, depth + 1, max_depth)?;
        }
    }
    Ok(())
}

fn insert_unique<'a>(
    entries: &mut IndexMap<String, &'a DictValue>,
    path: String,
    value: &'a DictValue,
) -> Result<(), DictError> {
    match entries.entry(path) {
        Entry::Occupied(occupied) => Err(DictError::DuplicatePath {
            path: occupied.key().clone(),
        }),
        Entry::Vacant(vacant) => {
            vacant.insert(value);
            Ok(())
        }
    }
}
