//! Dictionary engine: value model, resolution and flattening.
//!
//! ## Module Structure
//!
//! - `value`: `DictValue`, `Dict`, `Key` and `Callable`
//! - `template`: `{{name}}` placeholder substitution
//! - `resolve`: uniform resolution of entries (`resolve`, `resolver`)
//! - `flatten`: nested `Dict` to dot-joined `FlatDict`
//! - `error`: `DictError`
//! - `context`: merged configuration for the CLI commands
//! - `data`: locale-tagged dictionaries loaded from disk
//! - `parsers`: JSON loading

pub mod context;
pub mod data;
pub mod error;
pub mod flatten;
pub mod parsers;
pub mod resolve;
pub mod template;
pub mod value;

pub use context::CheckContext;
pub use data::LocaleDictionary;
pub use error::{BoxError, DictError};
pub use flatten::{DEFAULT_MAX_DEPTH, FlatDict, flat_dict, flat_dict_with_limit};
pub use resolve::{Resolver, resolve, resolve_with, resolver, resolver_with};
pub use template::{
    MissingArgumentPolicy, TemplateArgs, placeholders, resolved_template, resolved_template_with,
};
pub use value::{Callable, Dict, DictValue, Key};
