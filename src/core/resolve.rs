//! Uniform resolution of dictionary entries.
//!
//! [`resolve`] turns any [`DictValue`] into concrete content right away;
//! [`resolver`] inspects the variant once and hands back a [`Resolver`] that
//! can be called repeatedly. Both dispatch the same way:
//!
//! | Variant  | Arguments                     | Result                          |
//! |----------|-------------------------------|---------------------------------|
//! | Callable | positional values             | whatever the callable returns   |
//! | String   | at most one dict of arguments | the substituted template        |
//! | other    | ignored                       | the value itself                |

use super::error::DictError;
use super::template::{MissingArgumentPolicy, resolved_template_with};
use super::value::{Callable, Dict, DictValue};

/// Resolve `value` with `args`, failing on missing template arguments.
pub fn resolve(value: &DictValue, args: &[DictValue]) -> Result<DictValue, DictError> {
    resolve_with(value, args, MissingArgumentPolicy::Error)
}

pub fn resolve_with(
    value: &DictValue,
    args: &[DictValue],
    policy: MissingArgumentPolicy,
) -> Result<DictValue, DictError> {
    match value {
        DictValue::Callable(callable) => callable.call(args),
        DictValue::String(template) => resolve_template(template, args, policy),
        _ => Ok(value.clone()),
    }
}

/// Build a reusable resolver for `value`.
///
/// ```
/// use dictum::core::{Dict, DictValue, resolver};
///
/// let greet = resolver(&DictValue::from("Hi {{name}}"));
/// let args = Dict::from_iter([("name", "Ada")]);
/// assert_eq!(
///     greet.call(&[DictValue::from(args)]).unwrap(),
///     DictValue::from("Hi Ada")
/// );
/// ```
pub fn resolver(value: &DictValue) -> Resolver {
    resolver_with(value, MissingArgumentPolicy::Error)
}

pub fn resolver_with(value: &DictValue, policy: MissingArgumentPolicy) -> Resolver {
    match value {
        DictValue::Callable(callable) => Resolver::Callable(callable.clone()),
        DictValue::String(template) => Resolver::Template {
            template: template.clone(),
            policy,
        },
        other => Resolver::Constant(other.clone()),
    }
}

/// A dictionary entry prepared for repeated resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolver {
    /// The entry's own callable.
    Callable(Callable),
    /// Substitutes the argument dict into the template.
    Template {
        template: String,
        policy: MissingArgumentPolicy,
    },
    /// Ignores its arguments.
    Constant(DictValue),
}

impl Resolver {
    pub fn call(&self, args: &[DictValue]) -> Result<DictValue, DictError> {
        match self {
            Resolver::Callable(callable) => callable.call(args),
            Resolver::Template { template, policy } => resolve_template(template, args, *policy),
            Resolver::Constant(value) => Ok(value.clone()),
        }
    }
}

fn resolve_template(
    template: &str,
    args: &[DictValue],
    policy: MissingArgumentPolicy,
) -> Result<DictValue, DictError> {
    let empty = Dict::new();
    let template_args = match args {
        [] => &empty,
        [DictValue::Dict(dict)] => dict,
        [other] => {
            return Err(DictError::TemplateArgumentsNotDict {
                found: other.kind(),
            });
        }
        _ => {
            return Err(DictError::UnexpectedArgumentCount {
                expected: 1,
                found: args.len(),
            });
        }
    };
    resolved_template_with(template, template_args, policy).map(DictValue::String)
}
