//! Property element parser
//!
//! A property is a leaf: a required `name` attribute and the element's text
//! content as the value. The value is passed through unvalidated; whether
//! it makes sense for the named property is the consumer's concern.

use crate::stackconf::address::Address;
use crate::stackconf::cursor::{DocumentCursor, StartTag};
use crate::stackconf::error::CompileError;
use crate::stackconf::grammar::{Attribute, Element};
use crate::stackconf::operation::Operation;
use crate::stackconf::reading::{attributes, ReadContext};
use crate::stackconf::sequencing::Sequencer;

/// Key of a property address segment.
pub const PROPERTY: &str = "property";

/// Parameter name carrying the property's text content.
pub const VALUE: &str = "value";

pub(crate) fn read<C: DocumentCursor>(
    context: &ReadContext<'_>,
    cursor: &mut C,
    tag: &StartTag,
    parent: &Address,
    out: &mut Sequencer,
) -> Result<(), CompileError> {
    let node = context.namespace.node(Element::Property);

    let seen = attributes::classify_all(node, tag)?;
    attributes::require_all(node, &seen, tag)?;
    let name = attributes::value_of(&seen, Attribute::Name)
        .expect("required check guarantees the name attribute");

    let address = parent.child(PROPERTY, name);
    let value = cursor.element_text()?;

    let mut operation = Operation::add(address);
    operation.set_param(VALUE, value);
    out.emit(operation);
    Ok(())
}
