//! Interactive prompts for collecting variable values.
//!
//! Only variables that are still empty after seeding from the store and
//! applying `--var` flags are asked for. Nothing is prompted when stdin is
//! not a terminal or batch mode is on.

use dialoguer::{theme::ColorfulTheme, Input};
use easy_templates_core::{TemplateVariable, VariableStore};
use easy_templates_core::template::TemplateEngine;
use easy_templates_core::store::StoreError;
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, never prompt; empty values stay empty.
    pub batch_mode: bool,
}

/// Error type for variable collection.
#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
    /// Saving the collected value failed.
    Store(StoreError),
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
            PromptError::Store(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

impl From<StoreError> for PromptError {
    fn from(e: StoreError) -> Self {
        PromptError::Store(e)
    }
}

/// Prompt for every empty variable and write the answers into `engine`.
///
/// Returns the names that were prompted for.
pub fn fill_missing<S: VariableStore>(
    engine: &mut TemplateEngine<S>,
    options: &PromptOptions,
) -> Result<Vec<String>, PromptError> {
    let is_interactive = io::stdin().is_terminal() && !options.batch_mode;
    if !is_interactive {
        return Ok(Vec::new());
    }

    let missing: Vec<TemplateVariable> =
        engine.variables().iter().filter(|v| v.value.is_empty()).cloned().collect();

    let mut prompted = Vec::new();
    for var in missing {
        let value = prompt_value(&var)?;
        engine.set_value(&var.name, value)?;
        prompted.push(var.name);
    }
    Ok(prompted)
}

fn prompt_value(var: &TemplateVariable) -> Result<String, PromptError> {
    let theme = ColorfulTheme::default();
    Input::<String>::with_theme(&theme)
        .with_prompt(prompt_text(var))
        .allow_empty(true)
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)
}

fn prompt_text(var: &TemplateVariable) -> String {
    format!("{} ({})", var.name, var.var_type)
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}

/// Parse a `--var` argument.
///
/// Expected format: `name=value`. The value may be empty or contain `=`.
pub fn parse_var_arg(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{arg}'")),
    }
}
