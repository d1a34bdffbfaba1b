//! Parsing and validation of `{{name|type}}` templates.

use std::sync::LazyLock;

use regex::Regex;

use super::errors::TemplateError;
use super::types::{TemplateVariable, VarType, VariableSet};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// An opening `{{` up to the nearest following `}}`.
static SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}").unwrap());

/// Interior of a well-formed span: name without `|`, then type without `}`.
static INTERIOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^|]+)\|([^}]+)$").unwrap());

/// A well-formed placeholder found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Trimmed variable name.
    pub name: &'a str,
    /// Trimmed type token, not yet validated.
    pub type_token: &'a str,
    /// Byte range of the whole `{{...}}` span.
    pub start: usize,
    pub end: usize,
}

/// Parse a template into its variable set.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. equal counts of `{{` and `}}`
/// 2. every `{{...}}` span has the shape `{{name|type}}`, and once any span
///    exists, every `{{` opens one
/// 3. every type token is a known [`VarType`]
///
/// On success each distinct name is recorded once, in order of first
/// occurrence, with its value seeded from `prior` (or empty).
///
/// # Errors
///
/// Returns the first [`TemplateError`] detected; no partial set is built.
pub fn parse<F>(template: &str, prior: F) -> Result<VariableSet, TemplateError>
where
    F: Fn(&str) -> Option<String>,
{
    check_brackets(template)?;
    let found = scan(template)?;

    let mut typed = Vec::with_capacity(found.len());
    for p in &found {
        let var_type = p.type_token.parse::<VarType>().map_err(|_| {
            TemplateError::InvalidType {
                found: p.type_token.to_string(),
                position: char_offset(template, p.start),
            }
        })?;
        typed.push((p.name, var_type));
    }

    let mut vars = VariableSet::new();
    for (name, var_type) in typed {
        if vars.contains(name) {
            continue;
        }
        let value = prior(name).unwrap_or_default();
        vars.insert(TemplateVariable { name: name.to_string(), var_type, value });
    }

    tracing::debug!(
        placeholders = found.len(),
        variables = vars.len(),
        "parsed template"
    );
    Ok(vars)
}

/// All well-formed placeholders in `template`, left to right.
///
/// Malformed spans are skipped; use [`parse`] to have them reported.
#[must_use]
pub fn placeholders(template: &str) -> Vec<Placeholder<'_>> {
    SPAN_RE
        .captures_iter(template)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let interior = caps.get(1)?.as_str();
            split_interior(interior).map(|(name, type_token)| Placeholder {
                name,
                type_token,
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

fn check_brackets(template: &str) -> Result<(), TemplateError> {
    let open = template.matches(OPEN).count();
    let close = template.matches(CLOSE).count();
    if open == close {
        Ok(())
    } else {
        tracing::debug!(open, close, "bracket count mismatch");
        Err(TemplateError::MismatchedBrackets)
    }
}

/// Collect every span, failing on the first one that is malformed.
fn scan(template: &str) -> Result<Vec<Placeholder<'_>>, TemplateError> {
    let mut found = Vec::new();
    for caps in SPAN_RE.captures_iter(template) {
        let (Some(whole), Some(interior)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let (name, type_token) =
            split_interior(interior.as_str()).ok_or(TemplateError::InvalidFormat)?;
        found.push(Placeholder { name, type_token, start: whole.start(), end: whole.end() });
    }

    // Once any span exists, every `{{` must open a well-formed placeholder.
    if !found.is_empty() && has_stray_opener(template) {
        return Err(TemplateError::InvalidFormat);
    }
    Ok(found)
}

/// True if some `{{`, overlapping occurrences included, does not start a
/// well-formed `{{name|type}}`.
fn has_stray_opener(template: &str) -> bool {
    template.char_indices().any(|(i, _)| {
        let rest = &template[i..];
        rest.starts_with(OPEN) && !opens_placeholder(&rest[OPEN.len()..])
    })
}

fn opens_placeholder(after_open: &str) -> bool {
    after_open
        .find(CLOSE)
        .is_some_and(|end| split_interior(&after_open[..end]).is_some())
}

/// Split a span interior into trimmed `(name, type)`.
///
/// Nested openers and parts that are blank after trimming are rejected.
fn split_interior(interior: &str) -> Option<(&str, &str)> {
    if interior.contains(OPEN) {
        return None;
    }
    let caps = INTERIOR_RE.captures(interior)?;
    let name = caps.get(1)?.as_str().trim();
    let type_token = caps.get(2)?.as_str().trim();
    if name.is_empty() || type_token.is_empty() {
        return None;
    }
    Some((name, type_token))
}

fn char_offset(s: &str, byte_idx: usize) -> usize {
    s[..byte_idx].chars().count()
}
