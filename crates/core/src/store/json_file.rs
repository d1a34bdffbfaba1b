//! JSON file backed variable store.
//!
//! One file can hold several namespaces:
//!
//! ```json
//! {
//!   "easy-templates-variables": {
//!     "name": { "name": "name", "type": "text", "value": "World" }
//!   }
//! }
//! ```
//!
//! Only the configured namespace is read and rewritten; the others are
//! carried over untouched.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::template::{TemplateVariable, VariableSet};

use super::{StoreError, VariableStore};

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "easy-templates-variables";

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    namespace: String,
    entries: HashMap<String, TemplateVariable>,
    others: Map<String, Value>,
}

impl JsonFileStore {
    /// Load the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] when the file cannot be read, [`StoreError::Parse`]
    /// when it is not a JSON object or the namespace holds invalid entries.
    pub fn open(path: &Path, namespace: &str) -> Result<Self, StoreError> {
        let mut store = Self {
            path: path.to_path_buf(),
            namespace: namespace.to_string(),
            entries: HashMap::new(),
            others: Map::new(),
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "variable store not found, starting empty");
            return Ok(store);
        }

        let s = fs::read_to_string(path)
            .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
        if s.trim().is_empty() {
            return Ok(store);
        }

        let mut root: Map<String, Value> = serde_json::from_str(&s)
            .map_err(|source| StoreError::Parse { path: path.to_path_buf(), source })?;

        if let Some(ns) = root.remove(namespace) {
            store.entries = serde_json::from_value(ns)
                .map_err(|source| StoreError::Parse { path: path.to_path_buf(), source })?;
        }
        store.others = root;

        tracing::debug!(
            path = %path.display(),
            namespace,
            entries = store.entries.len(),
            "loaded variable store"
        );
        Ok(store)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn entries(&self) -> &HashMap<String, TemplateVariable> {
        &self.entries
    }

    fn write(&self, namespace_value: Value) -> Result<(), StoreError> {
        let mut root = self.others.clone();
        root.insert(self.namespace.clone(), namespace_value);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
        }

        let json = serde_json::to_string_pretty(&Value::Object(root))?;
        fs::write(&self.path, json)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })
    }
}

impl VariableStore for JsonFileStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries.get(name).map(|v| v.value.clone())
    }

    fn save(&mut self, variables: &VariableSet) -> Result<(), StoreError> {
        let value = serde_json::to_value(variables)?;
        self.write(value)?;
        self.entries = variables.iter().map(|v| (v.name.clone(), v.clone())).collect();
        tracing::debug!(
            path = %self.path.display(),
            entries = self.entries.len(),
            "saved variable store"
        );
        Ok(())
    }
}
