//! Dictionary value model.
//!
//! A translation dictionary is a tree of [`Dict`] nodes whose entries are
//! [`DictValue`]s. Entries mix three kinds of content under one type:
//!
//! 1. **Static values**: strings without placeholders, numbers, booleans,
//!    sequences and nested dictionaries.
//! 2. **Templates**: strings containing `{{name}}` placeholders.
//! 3. **Computed values**: [`Callable`]s evaluated with positional arguments.
//!
//! Callers never branch on the variant themselves; see [`crate::core::resolve`].

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use num_bigint::BigInt;

use super::error::DictError;

type CallableFn = dyn Fn(&[DictValue]) -> Result<DictValue, DictError> + Send + Sync;

/// A computed dictionary entry.
///
/// Cloning shares the underlying function, so a clone is the same callable.
#[derive(Clone)]
pub struct Callable(Arc<CallableFn>);

impl Callable {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[DictValue]) -> Result<DictValue, DictError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the callable. Errors come straight from the function.
    pub fn call(&self, args: &[DictValue]) -> Result<DictValue, DictError> {
        (self.0)(args)
    }

    /// True if both handles point at the same function.
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(<fn>)")
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// Key of a dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Str(String),
    Int(i64),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => f.write_str(s),
            Key::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i64::from(i))
    }
}

/// A single dictionary entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DictValue {
    /// No value (`null` in authored JSON).
    Empty,
    String(String),
    Number(f64),
    Integer(BigInt),
    Boolean(bool),
    /// Ordered, heterogeneous list. Never descended into by the flattener.
    Sequence(Vec<DictValue>),
    Callable(Callable),
    Dict(Dict),
}

impl DictValue {
    /// Short variant name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DictValue::Empty => "empty",
            DictValue::String(_) => "string",
            DictValue::Number(_) => "number",
            DictValue::Integer(_) => "integer",
            DictValue::Boolean(_) => "boolean",
            DictValue::Sequence(_) => "sequence",
            DictValue::Callable(_) => "callable",
            DictValue::Dict(_) => "dict",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DictValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            DictValue::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Text form of a scalar, used when the value fills a placeholder.
    ///
    /// Returns `None` for `Empty`, sequences, callables and dictionaries.
    pub fn to_text(&self) -> Option<String> {
        match self {
            DictValue::String(s) => Some(s.clone()),
            DictValue::Number(n) => Some(n.to_string()),
            DictValue::Integer(i) => Some(i.to_string()),
            DictValue::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// One-line preview used by the CLI listings.
impl fmt::Display for DictValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictValue::Empty => f.write_str("null"),
            DictValue::String(s) => write!(f, "{:?}", s),
            DictValue::Number(n) => write!(f, "{}", n),
            DictValue::Integer(i) => write!(f, "{}", i),
            DictValue::Boolean(b) => write!(f, "{}", b),
            DictValue::Sequence(items) => write!(
                f,
                "[{} {}]",
                items.len(),
                if items.len() == 1 { "item" } else { "items" }
            ),
            DictValue::Callable(_) => f.write_str("<fn>"),
            DictValue::Dict(d) => write!(
                f,
                "{{{} {}}}",
                d.len(),
                if d.len() == 1 { "entry" } else { "entries" }
            ),
        }
    }
}

impl From<&str> for DictValue {
    fn from(s: &str) -> Self {
        DictValue::String(s.to_string())
    }
}

impl From<String> for DictValue {
    fn from(s: String) -> Self {
        DictValue::String(s)
    }
}

impl From<f64> for DictValue {
    fn from(n: f64) -> Self {
        DictValue::Number(n)
    }
}

impl From<i64> for DictValue {
    fn from(i: i64) -> Self {
        DictValue::Integer(BigInt::from(i))
    }
}

impl From<i32> for DictValue {
    fn from(i: i32) -> Self {
        DictValue::Integer(BigInt::from(i))
    }
}

impl From<u64> for DictValue {
    fn from(i: u64) -> Self {
        DictValue::Integer(BigInt::from(i))
    }
}

impl From<BigInt> for DictValue {
    fn from(i: BigInt) -> Self {
        DictValue::Integer(i)
    }
}

impl From<bool> for DictValue {
    fn from(b: bool) -> Self {
        DictValue::Boolean(b)
    }
}

impl From<Vec<DictValue>> for DictValue {
    fn from(items: Vec<DictValue>) -> Self {
        DictValue::Sequence(items)
    }
}

impl From<Dict> for DictValue {
    fn from(d: Dict) -> Self {
        DictValue::Dict(d)
    }
}

impl From<Callable> for DictValue {
    fn from(c: Callable) -> Self {
        DictValue::Callable(c)
    }
}

impl<T: Into<DictValue>> From<Option<T>> for DictValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DictValue::Empty, Into::into)
    }
}

/// An insertion-ordered dictionary node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dict {
    entries: IndexMap<Key, DictValue>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the previous value for the key.
    ///
    /// Replacing a key keeps its original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<DictValue>) -> Option<DictValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &Key) -> Option<&DictValue> {
        self.entries.get(key)
    }

    /// Look up a string key.
    pub fn get_str(&self, key: &str) -> Option<&DictValue> {
        self.entries.get(&Key::Str(key.to_string()))
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &DictValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<Key>, V: Into<DictValue>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dict::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a Key, &'a DictValue);
    type IntoIter = indexmap::map::Iter<'a, Key, DictValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
