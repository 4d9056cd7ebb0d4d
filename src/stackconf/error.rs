//! Compilation errors
//!
//! Every error is terminal for the current parse: the first failure aborts
//! the whole compilation and surfaces to the caller with positional context.
//! There is no skip-and-continue recovery, and no operation sequence is ever
//! returned alongside an error.

use crate::stackconf::cursor::Position;
use std::fmt;

/// Errors that can occur while compiling a configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// An attribute not recognized by the current element's grammar node.
    UnexpectedAttribute { name: String, position: Position },

    /// An element not permitted at the current nesting level.
    UnexpectedElement { name: String, position: Position },

    /// Required attributes absent once an element's attribute list was
    /// exhausted.
    MissingRequiredAttribute {
        names: Vec<String>,
        position: Position,
    },

    /// A structurally mandatory child element was absent.
    MissingRequiredElement {
        names: Vec<String>,
        position: Position,
    },

    /// An attribute was recognized but its value failed validation.
    InvalidAttributeValue {
        name: String,
        value: String,
        position: Position,
    },

    /// The document's namespace does not select a supported grammar version.
    UnsupportedNamespace { uri: String },

    /// The underlying document cursor failed (malformed XML, bad encoding).
    Document { message: String, position: Position },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnexpectedAttribute { name, position } => {
                write!(f, "{}: unexpected attribute '{}'", position, name)
            }
            CompileError::UnexpectedElement { name, position } => {
                write!(f, "{}: unexpected element '{}'", position, name)
            }
            CompileError::MissingRequiredAttribute { names, position } => {
                write!(
                    f,
                    "{}: missing required attribute(s): {}",
                    position,
                    names.join(", ")
                )
            }
            CompileError::MissingRequiredElement { names, position } => {
                write!(
                    f,
                    "{}: missing required element(s): {}",
                    position,
                    names.join(", ")
                )
            }
            CompileError::InvalidAttributeValue {
                name,
                value,
                position,
            } => {
                write!(
                    f,
                    "{}: invalid value '{}' for attribute '{}'",
                    position, value, name
                )
            }
            CompileError::UnsupportedNamespace { uri } => {
                write!(f, "unsupported configuration namespace '{}'", uri)
            }
            CompileError::Document { message, position } => {
                write!(f, "{}: document error: {}", position, message)
            }
        }
    }
}

impl std::error::Error for CompileError {}
