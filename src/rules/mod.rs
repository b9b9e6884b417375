//! Rule implementations for dictum check.
//!
//! Pure functions that take only the inputs they need and return a specific
//! issue type.
//!
//! ## Module Structure
//!
//! - `structure`: flattening each dictionary (depth limit, duplicate paths)
//! - `missing_path`: paths of the primary locale absent from another locale
//! - `placeholder_mismatch`: templates whose placeholders differ across locales

pub mod missing_path;
pub mod placeholder_mismatch;
pub mod structure;

use crate::core::FlatDict;

/// A dictionary file that flattened successfully.
#[derive(Debug)]
pub struct FlattenedLocale<'a> {
    pub locale: String,
    pub file_path: String,
    pub flat: FlatDict<'a>,
}
