//! Dispatch for the dictum CLI.
//!
//! # Returns
//! - `Ok(CommandResult)` with error/warning counts and exit behavior
//! - `Err` if the command fails (e.g., config invalid, file unreadable)
use std::path::Path;

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, flatten::flatten, get::get, init::init,
        placeholders::placeholders,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Flatten(cmd)) => flatten(cmd),
        Some(Command::Get(cmd)) => get(cmd),
        Some(Command::Placeholders(cmd)) => placeholders(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(Path::new(".")),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
