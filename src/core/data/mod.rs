//! Data types shared by the loading and checking layers.
//!
//! - `dictionary`: a parsed dictionary file tagged with its locale

pub mod dictionary;

pub use dictionary::LocaleDictionary;
