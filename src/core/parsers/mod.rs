//! File parsers for authored dictionary content.
//!
//! - `json`: JSON dictionary files (scans the dictionaries directory)

pub mod json;
