//! Root (subsystem) element parser

use crate::stackconf::address::Address;
use crate::stackconf::cursor::{DocumentCursor, StartTag, TagEvent};
use crate::stackconf::error::CompileError;
use crate::stackconf::grammar::Element;
use crate::stackconf::operation::Operation;
use crate::stackconf::reading::{attributes, stack, ReadContext};
use crate::stackconf::sequencing::Sequencer;

/// Key of the fixed root address segment.
pub const SUBSYSTEM: &str = "subsystem";

/// Name of the fixed root address segment.
pub const SUBSYSTEM_NAME: &str = "stackconf";

/// Read the root element and everything below it.
///
/// The root `add` operation is emitted before any child element is
/// processed, so children's operations always follow it in the final
/// sequence.
pub(crate) fn read<C: DocumentCursor>(
    context: &ReadContext<'_>,
    cursor: &mut C,
    tag: &StartTag,
    out: &mut Sequencer,
) -> Result<(), CompileError> {
    let node = context.namespace.node(Element::Subsystem);
    let address = Address::root(SUBSYSTEM, SUBSYSTEM_NAME);
    let mut operation = Operation::add(address.clone());

    let seen = attributes::classify_all(node, tag)?;
    for (attribute, value) in &seen {
        operation.set_param(attribute.as_str(), value.clone());
    }
    attributes::require_all(node, &seen, tag)?;

    out.emit(operation);

    loop {
        match cursor.next_tag()? {
            TagEvent::End => return Ok(()),
            TagEvent::Start(child) => match node.classify_child(&child.name) {
                Some(Element::Stack) => stack::read(context, cursor, &child, &address, out)?,
                _ => {
                    return Err(CompileError::UnexpectedElement {
                        name: child.name,
                        position: child.position,
                    })
                }
            },
        }
    }
}
