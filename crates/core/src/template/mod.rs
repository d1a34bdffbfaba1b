//! Typed `{{name|type}}` templates.
//!
//! The pipeline is split in three stages:
//! - [`parser`]: bracket balance, placeholder format and type validation,
//!   then deduplicated extraction of the variable set
//! - [`renderer`]: single-pass substitution of variable values
//! - [`engine`]: keeps template, variables, error and output in sync and
//!   writes successful parses back to a [`VariableStore`](crate::store::VariableStore)

pub mod engine;
pub mod errors;
pub mod parser;
pub mod renderer;
pub mod types;

pub use engine::TemplateEngine;
pub use errors::{ErrorReport, TemplateError, TemplateErrorKind};
pub use parser::{Placeholder, parse, placeholders};
pub use renderer::render;
pub use types::{TemplateVariable, VarType, VariableSet};
