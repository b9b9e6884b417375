//! Error type for dictionary resolution and flattening.

use thiserror::Error;

/// Boxed error raised by a callable entry.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum DictError {
    /// A template references a placeholder with no matching argument.
    #[error("missing argument for placeholder \"{{{{{name}}}}}\"")]
    MissingPlaceholderArgument { name: String },

    /// A string entry was resolved with something other than an argument map.
    #[error("template arguments must be a dictionary, found {found}")]
    TemplateArgumentsNotDict { found: &'static str },

    #[error("expected at most {expected} argument(s), found {found}")]
    UnexpectedArgumentCount { expected: usize, found: usize },

    /// A callable rejected the arguments it was invoked with.
    #[error("invalid callable invocation: {message}")]
    InvalidCallableInvocation { message: String },

    /// Any other failure raised inside a callable.
    #[error(transparent)]
    Callable(BoxError),

    /// Nesting went past the depth limit while flattening.
    #[error("dictionary nesting at \"{path}\" exceeds the maximum depth of {max_depth}")]
    StructuralCycleDetected { path: String, max_depth: usize },

    /// Two source locations render to the same dotted path.
    #[error("duplicate path \"{path}\"")]
    DuplicatePath { path: String },
}

impl DictError {
    /// Convenience constructor used by callables to reject their arguments.
    pub fn invalid_invocation(message: impl Into<String>) -> Self {
        Self::InvalidCallableInvocation {
            message: message.into(),
        }
    }
}
