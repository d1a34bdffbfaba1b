//! Template validation errors.

use serde::Serialize;
use thiserror::Error;

use super::types::VarType;

/// The first fault detected while parsing a template.
///
/// All variants are recoverable: editing the template and parsing again
/// replaces the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Counts of `{{` and `}}` differ.
    #[error("Mismatched {{{{ }}}} brackets in template")]
    MismatchedBrackets,

    /// A `{{...}}` span is not of the form `{{name|type}}`.
    #[error("Invalid variable format. Use {{{{name|type}}}}")]
    InvalidFormat,

    /// A placeholder names a type outside the accepted set.
    #[error("Invalid type \"{found}\". Valid types: {}", VarType::valid_list())]
    InvalidType {
        found: String,
        /// Character offset of the offending placeholder's `{{`, counted in
        /// Unicode scalar values (not bytes, not UTF-16 code units).
        position: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateErrorKind {
    Structural,
    Format,
    Type,
}

/// Serializable `{ message, position? }` view of a [`TemplateError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl TemplateError {
    #[must_use]
    pub fn kind(&self) -> TemplateErrorKind {
        match self {
            TemplateError::MismatchedBrackets => TemplateErrorKind::Structural,
            TemplateError::InvalidFormat => TemplateErrorKind::Format,
            TemplateError::InvalidType { .. } => TemplateErrorKind::Type,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Only type errors carry a position; structural faults have none.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            TemplateError::InvalidType { position, .. } => Some(*position),
            _ => None,
        }
    }

    #[must_use]
    pub fn report(&self) -> ErrorReport {
        ErrorReport { message: self.message(), position: self.position() }
    }
}
