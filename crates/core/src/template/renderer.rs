//! Substitution of variable values into a template.

use super::parser::placeholders;
use super::types::VariableSet;

/// Render `template` with the current values of `variables`.
///
/// Returns an empty string while `has_error` is set. Otherwise every
/// `{{name|<any type>}}` whose name is in the set is replaced by that
/// variable's value. Placeholders for unknown names are left as written.
/// Substituted values are never scanned again.
#[must_use]
pub fn render(template: &str, variables: &VariableSet, has_error: bool) -> String {
    if has_error {
        return String::new();
    }

    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;
    for p in placeholders(template) {
        let Some(var) = variables.get(p.name) else {
            continue;
        };
        out.push_str(&template[cursor..p.start]);
        out.push_str(&var.value);
        cursor = p.end;
    }
    out.push_str(&template[cursor..]);
    out
}
