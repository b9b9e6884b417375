use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::super::args::FlattenCommand;
use super::{CommandResult, CommandSummary, FlatEntry, FlattenSummary};
use crate::core::{CheckContext, FlatDict, parsers::json::dict_to_json};

pub fn flatten(cmd: FlattenCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let dictionary = ctx.load_dictionary(&cmd.file)?;
    let flat = dictionary
        .flatten(ctx.max_depth())
        .with_context(|| format!("Cannot flatten {:?}", cmd.file))?;

    let summary = if cmd.json {
        FlattenSummary::Json(flat_to_json(&flat)?)
    } else {
        FlattenSummary::Listing(flat_entries(&flat))
    };

    Ok(CommandResult::output(CommandSummary::Flatten(summary)))
}

fn flat_entries(flat: &FlatDict<'_>) -> Vec<FlatEntry> {
    flat.iter()
        .map(|(path, value)| FlatEntry {
            path: path.to_string(),
            preview: value.to_string(),
        })
        .collect()
}

fn flat_to_json(flat: &FlatDict<'_>) -> Result<String> {
    let object: Map<String, Value> = flat
        .iter()
        .map(|(path, value)| (path.to_string(), dict_to_json(value)))
        .collect();
    serde_json::to_string_pretty(&Value::Object(object)).context("Failed to serialize output")
}
