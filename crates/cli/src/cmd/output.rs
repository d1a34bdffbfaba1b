//! Shared output formatting.

use easy_templates_core::template::{ErrorReport, TemplateError, VariableSet};
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

/// Row for the variables table.
#[derive(Tabled)]
struct VariableRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    var_type: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Result of `etpl render --json`.
#[derive(Debug, Serialize)]
pub struct RenderOutput<'a> {
    pub output: &'a str,
    pub variables: &'a VariableSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

pub fn print_variables_table(vars: &VariableSet) {
    if vars.is_empty() {
        println!("(no variables)");
        return;
    }

    let rows: Vec<VariableRow> = vars
        .iter()
        .map(|v| VariableRow {
            name: v.name.clone(),
            var_type: v.var_type.to_string(),
            value: v.value.clone(),
        })
        .collect();
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// `file: message`, plus line and column when the error has a position.
pub fn format_template_error(file: &Path, err: &TemplateError) -> String {
    match err.position() {
        Some(pos) => format!("{}: {err}\n  at offset {pos}", file.display()),
        None => format!("{}: {err}", file.display()),
    }
}

pub fn print_template_error(file: &Path, err: &TemplateError) {
    println!("{}", format_template_error(file, err));
}
