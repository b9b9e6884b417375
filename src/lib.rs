//! Dictum - nested translation dictionaries with template resolution
//!
//! Dictum is a library and CLI for authoring UI text as nested dictionaries.
//! Entries are plain values, `{{name}}` templates or callables; a dictionary
//! can be flattened into dot-joined paths (`Auth.Login.title`) and any entry
//! resolved uniformly with arguments.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Value model, template resolution, flattening and JSON loading
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Checks run by `dictum check`

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
