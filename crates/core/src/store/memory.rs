use std::collections::HashMap;

use crate::template::{TemplateVariable, VarType, VariableSet};

use super::{StoreError, VariableStore};

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, TemplateVariable>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, as if saved by an earlier session.
    #[must_use]
    pub fn with_value(mut self, name: &str, var_type: VarType, value: &str) -> Self {
        self.entries
            .insert(name.to_string(), TemplateVariable::new(name, var_type).with_value(value));
        self
    }

    #[must_use]
    pub fn entries(&self) -> &HashMap<String, TemplateVariable> {
        &self.entries
    }
}

impl VariableStore for MemoryStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries.get(name).map(|v| v.value.clone())
    }

    fn save(&mut self, variables: &VariableSet) -> Result<(), StoreError> {
        self.entries =
            variables.iter().map(|v| (v.name.clone(), v.clone())).collect();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_replaces_whole_mapping() {
        let mut store = MemoryStore::new().with_value("old", VarType::Text, "gone");

        let mut set = VariableSet::new();
        set.insert(TemplateVariable::new("new", VarType::Email).with_value("a@b.c"));
        store.save(&set).unwrap();

        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("new").as_deref(), Some("a@b.c"));
        assert_eq!(store.entries().len(), 1);
    }
}
