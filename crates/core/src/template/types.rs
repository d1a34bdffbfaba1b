//! Variable types extracted from a template.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Declared type of a placeholder.
///
/// The type is display metadata only; values are never checked against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarType {
    Text,
    Number,
    Phone,
    Email,
    Url,
}

impl VarType {
    /// All accepted types, in the order they are listed to users.
    pub const ALL: [VarType; 5] =
        [VarType::Text, VarType::Number, VarType::Phone, VarType::Email, VarType::Url];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VarType::Text => "text",
            VarType::Number => "number",
            VarType::Phone => "phone",
            VarType::Email => "email",
            VarType::Url => "url",
        }
    }

    /// Comma separated list of accepted type tokens, e.g. for error messages.
    #[must_use]
    pub fn valid_list() -> String {
        Self::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variable type: {0}")]
pub struct UnknownVarType(pub String);

impl FromStr for VarType {
    type Err = UnknownVarType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVarType(s.to_string()))
    }
}

/// A variable declared by a template placeholder, with its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariable {
    pub name: String,
    #[serde(rename = "type")]
    pub var_type: VarType,
    #[serde(default)]
    pub value: String,
}

impl TemplateVariable {
    pub fn new(name: impl Into<String>, var_type: VarType) -> Self {
        Self { name: name.into(), var_type, value: String::new() }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// Ordered mapping of variable name to [`TemplateVariable`].
///
/// Iteration follows first occurrence in the template. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    vars: Vec<TemplateVariable>,
}

impl VariableSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable unless one with the same name is already present.
    ///
    /// Returns `false` when the name was taken; the existing entry is kept.
    pub fn insert(&mut self, var: TemplateVariable) -> bool {
        if self.contains(&var.name) {
            return false;
        }
        self.vars.push(var);
        true
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TemplateVariable> {
        self.vars.iter().find(|v| v.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Update the value of an existing variable. Unknown names are ignored.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.vars.iter_mut().find(|v| v.name == name) {
            Some(var) => {
                var.value = value.into();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateVariable> {
        self.vars.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(|v| v.name.as_str())
    }
}

impl<'a> IntoIterator for &'a VariableSet {
    type Item = &'a TemplateVariable;
    type IntoIter = std::slice::Iter<'a, TemplateVariable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Serialized as a JSON object keyed by name, in template order.
impl Serialize for VariableSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.vars.len()))?;
        for var in &self.vars {
            map.serialize_entry(&var.name, var)?;
        }
        map.end()
    }
}
