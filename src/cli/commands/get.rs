use anyhow::{Context, Result, bail};

use super::super::args::GetCommand;
use super::{CommandResult, CommandSummary, GetSummary};
use crate::core::{CheckContext, Dict, DictValue, parsers::json::dict_to_json};

pub fn get(cmd: GetCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let dictionary = ctx.load_dictionary(&cmd.file)?;
    let flat = dictionary
        .flatten(ctx.max_depth())
        .with_context(|| format!("Cannot flatten {:?}", cmd.file))?;

    let args = template_args(&cmd.args);
    let Some(value) = flat
        .resolve(&cmd.entry, &args, ctx.missing_argument())
        .with_context(|| format!("Cannot resolve \"{}\"", cmd.entry))?
    else {
        bail!(
            "Path \"{}\" not found in {}",
            cmd.entry,
            dictionary.file_path
        );
    };

    Ok(CommandResult::output(CommandSummary::Get(GetSummary {
        rendered: render_value(&value)?,
    })))
}

/// `--arg` pairs become the single dict argument of a template.
/// Without any, the entry is resolved with no arguments.
fn template_args(pairs: &[(String, String)]) -> Vec<DictValue> {
    if pairs.is_empty() {
        return Vec::new();
    }
    let dict: Dict = pairs
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    vec![DictValue::from(dict)]
}

/// Strings print as-is, everything else as JSON.
fn render_value(value: &DictValue) -> Result<String> {
    match value {
        DictValue::String(s) => Ok(s.clone()),
        other => serde_json::to_string_pretty(&dict_to_json(other))
            .context("Failed to serialize output"),
    }
}
