//! Persistence boundary for variable values.
//!
//! The engine only reads single values by name and writes the whole
//! variable set back after it changes. Backends decide where it lives.

pub mod json_file;
pub mod memory;

use std::path::PathBuf;

use thiserror::Error;

use crate::template::VariableSet;

pub use json_file::{DEFAULT_NAMESPACE, JsonFileStore};
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access variable store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse variable store {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize variables: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value store of previously entered variable values.
pub trait VariableStore {
    /// Last saved value for `name`, if any.
    fn get(&self, name: &str) -> Option<String>;

    /// Replace the stored mapping with `variables`.
    ///
    /// # Errors
    ///
    /// Backend specific; see [`StoreError`].
    fn save(&mut self, variables: &VariableSet) -> Result<(), StoreError>;
}

impl<S: VariableStore + ?Sized> VariableStore for Box<S> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn save(&mut self, variables: &VariableSet) -> Result<(), StoreError> {
        (**self).save(variables)
    }
}
