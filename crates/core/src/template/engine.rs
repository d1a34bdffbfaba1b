//! Keeps a template, its variables, the current error and the rendered
//! output consistent with each other.

use crate::store::{StoreError, VariableStore};

use super::errors::TemplateError;
use super::parser::parse;
use super::renderer::render;
use super::types::VariableSet;

/// Parse/validate/render lifecycle over a changing template.
///
/// Every mutation takes `&mut self` and leaves `variables`, `error` and
/// `output` matching the latest template and store state before it returns.
pub struct TemplateEngine<S: VariableStore> {
    store: S,
    template: String,
    variables: VariableSet,
    error: Option<TemplateError>,
    output: String,
}

impl<S: VariableStore> TemplateEngine<S> {
    /// Attach to `template` and parse it right away.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if writing the parsed set back fails. Template
    /// faults are not errors here; they are exposed through [`Self::error`].
    pub fn new(store: S, template: impl Into<String>) -> Result<Self, StoreError> {
        let mut engine = Self {
            store,
            template: template.into(),
            variables: VariableSet::new(),
            error: None,
            output: String::new(),
        };
        engine.reparse()?;
        Ok(engine)
    }

    /// Replace the template and recompute everything derived from it.
    ///
    /// On a template fault the previous variable set is kept and nothing is
    /// written to the store.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store write fails. In-memory state is
    /// already updated when that happens.
    pub fn set_template(&mut self, template: impl Into<String>) -> Result<(), StoreError> {
        self.template = template.into();
        self.reparse()
    }

    /// Edit a variable's value. Does not clear an active error.
    ///
    /// Returns `Ok(false)` when no variable is called `name`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store write fails.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<bool, StoreError> {
        if !self.variables.set_value(name, value) {
            tracing::debug!(name, "ignoring value for unknown variable");
            return Ok(false);
        }
        self.rerender();
        self.store.save(&self.variables)?;
        Ok(true)
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[must_use]
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    #[must_use]
    pub fn error(&self) -> Option<&TemplateError> {
        self.error.as_ref()
    }

    /// Rendered template, or empty while an error is active.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn reparse(&mut self) -> Result<(), StoreError> {
        let store = &self.store;
        let result = parse(&self.template, |name| store.get(name));

        let saved = match result {
            Ok(vars) => {
                self.variables = vars;
                self.error = None;
                true
            }
            Err(e) => {
                tracing::warn!(position = ?e.position(), "template error: {e}");
                self.error = Some(e);
                false
            }
        };

        self.rerender();
        if saved {
            self.store.save(&self.variables)?;
        }
        Ok(())
    }

    fn rerender(&mut self) {
        self.output = render(&self.template, &self.variables, self.error.is_some());
    }
}
