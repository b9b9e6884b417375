use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use num_bigint::BigInt;
use rayon::prelude::*;
use serde_json::{Map, Number, Value};
use walkdir::WalkDir;

use crate::core::{Dict, DictValue, LocaleDictionary};

/// A warning from scanning dictionary files.
#[derive(Debug, Clone)]
pub struct DictionaryScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanDictionariesResult {
    /// Parsed dictionaries, sorted by locale.
    pub dictionaries: Vec<LocaleDictionary>,
    pub warnings: Vec<DictionaryScanWarning>,
}

/// Convert an authored JSON object into a [`Dict`].
///
/// Key order follows the document (serde_json `preserve_order`).
pub fn dict_from_json(json: &Value) -> Result<Dict> {
    match json {
        Value::Object(map) => Ok(object_to_dict(map)),
        other => bail!(
            "Dictionary root must be a JSON object, found {}",
            json_kind(other)
        ),
    }
}

fn object_to_dict(map: &Map<String, Value>) -> Dict {
    map.iter()
        .map(|(key, value)| (key.as_str(), value_from_json(value)))
        .collect()
}

fn value_from_json(value: &Value) -> DictValue {
    match value {
        Value::Null => DictValue::Empty,
        Value::Bool(b) => DictValue::Boolean(*b),
        Value::Number(n) => number_from_json(n),
        Value::String(s) => DictValue::String(s.clone()),
        Value::Array(items) => DictValue::Sequence(items.iter().map(value_from_json).collect()),
        Value::Object(map) => DictValue::Dict(object_to_dict(map)),
    }
}

fn number_from_json(n: &Number) -> DictValue {
    if let Some(i) = n.as_i64() {
        DictValue::Integer(BigInt::from(i))
    } else if let Some(u) = n.as_u64() {
        DictValue::Integer(BigInt::from(u))
    } else {
        DictValue::Number(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Render a value back to JSON for output.
///
/// Callables become `null`. Integers outside the JSON integer range and
/// non-finite numbers are written as strings.
pub fn dict_to_json(value: &DictValue) -> Value {
    match value {
        DictValue::Empty | DictValue::Callable(_) => Value::Null,
        DictValue::String(s) => Value::String(s.clone()),
        DictValue::Number(n) => Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(n.to_string())),
        DictValue::Integer(i) => {
            if let Ok(small) = i64::try_from(i) {
                Value::from(small)
            } else if let Ok(small) = u64::try_from(i) {
                Value::from(small)
            } else {
                Value::String(i.to_string())
            }
        }
        DictValue::Boolean(b) => Value::Bool(*b),
        DictValue::Sequence(items) => Value::Array(items.iter().map(dict_to_json).collect()),
        DictValue::Dict(dict) => Value::Object(
            dict.iter()
                .map(|(key, value)| (key.to_string(), dict_to_json(value)))
                .collect(),
        ),
    }
}

pub fn parse_dictionary_file(path: &Path, locale: &str) -> Result<LocaleDictionary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let dict =
        dict_from_json(&json).with_context(|| format!("Invalid dictionary file: {:?}", path))?;

    Ok(LocaleDictionary::new(
        locale,
        path.to_string_lossy().to_string(),
        dict,
    ))
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/dictionaries/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Parse every dictionary file under `root` selected by `includes` and not
/// excluded by `ignores`. Patterns match paths relative to `root`.
///
/// Files that fail to parse become warnings; a missing root is an error.
pub fn scan_dictionary_files(
    root: impl AsRef<Path>,
    includes: &[String],
    ignores: &[String],
) -> Result<ScanDictionariesResult> {
    let root = root.as_ref();

    if !root.exists() {
        bail!(
            "Dictionaries directory '{}' does not exist.\n\
             Hint: Check your .dictumrc.json 'dictionariesRoot' setting.",
            root.display()
        );
    }

    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let includes = compile_patterns(includes, "includes")?;
    let ignores = compile_patterns(ignores, "ignores")?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let selected = includes.iter().any(|p| p.matches_path(relative))
            && !ignores.iter().any(|p| p.matches_path(relative));
        if selected {
            files.push(path.to_path_buf());
        }
    }

    let parsed: Vec<(PathBuf, Result<LocaleDictionary>)> = files
        .into_par_iter()
        .filter_map(|path| {
            let locale = extract_locale(&path)?;
            let parsed = parse_dictionary_file(&path, &locale);
            Some((path, parsed))
        })
        .collect();

    let mut result = ScanDictionariesResult::default();
    for (path, parsed) in parsed {
        match parsed {
            Ok(dictionary) => result.dictionaries.push(dictionary),
            Err(e) => result.warnings.push(DictionaryScanWarning {
                file_path: path.to_string_lossy().to_string(),
                error: format!("{:#}", e),
            }),
        }
    }
    result
        .dictionaries
        .sort_by(|a, b| a.locale.cmp(&b.locale).then(a.file_path.cmp(&b.file_path)));

    Ok(result)
}

fn compile_patterns(patterns: &[String], field: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p)
                .with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", field, p))
        })
        .collect()
}
