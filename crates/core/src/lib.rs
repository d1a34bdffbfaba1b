#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod store;
pub mod template;

pub use store::{JsonFileStore, MemoryStore, StoreError, VariableStore};
pub use template::{
    TemplateEngine, TemplateError, TemplateErrorKind, TemplateVariable, VarType,
    VariableSet, parse, render,
};

#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
