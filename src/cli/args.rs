//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `flatten`: List every dotted path of a dictionary file
//! - `get`: Look up one path and resolve it with template arguments
//! - `placeholders`: List template placeholders per path
//! - `check`: Check all dictionaries for structural and cross-locale issues
//! - `init`: Initialize dictum configuration file

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::MissingArgumentPolicy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Flatten(cmd)) => cmd.common.verbose,
            Some(Command::Get(cmd)) => cmd.common.verbose,
            Some(Command::Placeholders(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project directory used to find .dictumrc.json
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Dictionaries directory path (overrides config file)
    #[arg(long)]
    pub dictionaries_root: Option<PathBuf>,

    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// What to substitute for placeholders without an argument (overrides config file)
    #[arg(long, value_enum)]
    pub missing_argument: Option<MissingArgumentPolicy>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct FlattenCommand {
    /// Dictionary JSON file
    pub file: PathBuf,

    /// Print a JSON object of path -> value instead of a listing
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Dictionary JSON file
    pub file: PathBuf,

    /// Dotted path of the entry (e.g. Common.greeting)
    #[arg(value_name = "PATH")]
    pub entry: String,

    /// Template argument, can be repeated: --arg name=Ada --arg count=3
    #[arg(long = "arg", value_name = "NAME=VALUE", value_parser = parse_template_arg)]
    pub args: Vec<(String, String)>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PlaceholdersCommand {
    /// Dictionary JSON file
    pub file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every dotted path of a dictionary file
    Flatten(FlattenCommand),
    /// Resolve the entry at a dotted path
    Get(GetCommand),
    /// List the placeholders of every template in a dictionary file
    Placeholders(PlaceholdersCommand),
    /// Check dictionaries for structural errors, missing paths and placeholder mismatches
    Check(CheckCommand),
    /// Initialize a new .dictumrc.json configuration file
    Init,
}

/// Parse `NAME=VALUE`. The value may contain `=`; the name may not be empty.
fn parse_template_arg(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => bail!("expected NAME=VALUE, got \"{}\"", raw),
    }
}
