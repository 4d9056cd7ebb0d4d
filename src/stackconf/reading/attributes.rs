//! Attribute-phase helpers shared by the element parsers
//!
//! Each parser runs the same two phases over a start tag: classify every
//! raw attribute against the element's grammar node (an unrecognized name
//! is an immediate error, never skipped), then verify that every required
//! attribute was present.

use crate::stackconf::cursor::StartTag;
use crate::stackconf::error::CompileError;
use crate::stackconf::grammar::{Attribute, GrammarNode};

/// Classify all attributes of `tag` against `node`.
///
/// Returns the recognized attributes with their raw values, in document
/// order, or fails on the first attribute the node does not recognize.
pub(crate) fn classify_all(
    node: &GrammarNode,
    tag: &StartTag,
) -> Result<Vec<(Attribute, String)>, CompileError> {
    let mut classified = Vec::with_capacity(tag.attribute_count());
    for index in 0..tag.attribute_count() {
        let name = tag.attribute_name(index);
        let attribute =
            node.classify_attribute(name)
                .ok_or_else(|| CompileError::UnexpectedAttribute {
                    name: name.to_string(),
                    position: tag.position,
                })?;
        classified.push((attribute, tag.attribute_value(index).to_string()));
    }
    Ok(classified)
}

/// Fail with [`CompileError::MissingRequiredAttribute`] naming exactly the
/// required attributes of `node` that are absent from `seen`.
pub(crate) fn require_all(
    node: &GrammarNode,
    seen: &[(Attribute, String)],
    tag: &StartTag,
) -> Result<(), CompileError> {
    let missing: Vec<String> = node
        .required
        .iter()
        .filter(|required| !seen.iter().any(|(attribute, _)| attribute == *required))
        .map(|attribute| attribute.as_str().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CompileError::MissingRequiredAttribute {
            names: missing,
            position: tag.position,
        })
    }
}

/// Find the value of one classified attribute, if present.
pub(crate) fn value_of<'a>(seen: &'a [(Attribute, String)], wanted: Attribute) -> Option<&'a str> {
    seen.iter()
        .find(|(attribute, _)| *attribute == wanted)
        .map(|(_, value)| value.as_str())
}
