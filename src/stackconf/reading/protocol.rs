//! Protocol element parser
//!
//! Unlike the transport, a protocol's address segment name is derived from
//! its `type` attribute, so a stack addresses each protocol it contains by
//! type. The `type` value is validated against the implementation registry
//! the same way the transport's is.

use crate::stackconf::address::Address;
use crate::stackconf::cursor::{DocumentCursor, StartTag, TagEvent};
use crate::stackconf::error::CompileError;
use crate::stackconf::grammar::{Attribute, Element};
use crate::stackconf::operation::Operation;
use crate::stackconf::reading::{attributes, properties, ReadContext};
use crate::stackconf::registry::ImplementationKind;
use crate::stackconf::sequencing::Sequencer;

/// Key of a protocol address segment.
pub const PROTOCOL: &str = "protocol";

pub(crate) fn read<C: DocumentCursor>(
    context: &ReadContext<'_>,
    cursor: &mut C,
    tag: &StartTag,
    parent: &Address,
    out: &mut Sequencer,
) -> Result<(), CompileError> {
    let node = context.namespace.node(Element::Protocol);

    let seen = attributes::classify_all(node, tag)?;
    for (attribute, value) in &seen {
        if *attribute == Attribute::Type
            && !context
                .registry
                .is_loadable(ImplementationKind::Protocol, value)
        {
            return Err(CompileError::InvalidAttributeValue {
                name: attribute.as_str().to_string(),
                value: value.clone(),
                position: tag.position,
            });
        }
    }
    attributes::require_all(node, &seen, tag)?;
    let type_name = attributes::value_of(&seen, Attribute::Type)
        .expect("required check guarantees the type attribute");

    let address = parent.child(PROTOCOL, type_name);
    let mut operation = Operation::add(address.clone());
    for (attribute, value) in &seen {
        operation.set_param(attribute.as_str(), value.clone());
    }

    let mut props = Sequencer::new();
    loop {
        match cursor.next_tag()? {
            TagEvent::End => break,
            TagEvent::Start(child) => match node.classify_child(&child.name) {
                Some(Element::Property) => {
                    properties::read(context, cursor, &child, &address, &mut props)?;
                }
                _ => {
                    return Err(CompileError::UnexpectedElement {
                        name: child.name,
                        position: child.position,
                    })
                }
            },
        }
    }

    out.emit(operation);
    out.splice(props);
    Ok(())
}
