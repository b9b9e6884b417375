use anyhow::{Context, Result};

use super::super::args::PlaceholdersCommand;
use super::{CommandResult, CommandSummary, PlaceholdersSummary};
use crate::core::{CheckContext, DictValue, FlatDict, placeholders as template_placeholders};

pub fn placeholders(cmd: PlaceholdersCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let dictionary = ctx.load_dictionary(&cmd.file)?;
    let flat = dictionary
        .flatten(ctx.max_depth())
        .with_context(|| format!("Cannot flatten {:?}", cmd.file))?;

    Ok(CommandResult::output(CommandSummary::Placeholders(
        PlaceholdersSummary {
            templates: collect_placeholders(&flat),
        },
    )))
}

fn collect_placeholders(flat: &FlatDict<'_>) -> Vec<(String, Vec<String>)> {
    flat.iter()
        .filter_map(|(path, value)| match value {
            DictValue::String(template) => {
                let names = template_placeholders(template);
                (!names.is_empty()).then(|| {
                    (
                        path.to_string(),
                        names.into_iter().map(String::from).collect(),
                    )
                })
            }
            _ => None,
        })
        .collect()
}
