//! Transport element parser
//!
//! The transport is a singleton resource: its address segment name is
//! fixed, not derived from an attribute. Its `type` attribute is validated
//! against the host's implementation registry; the check is
//! existence/loadability only, no instance is created or retained.

use crate::stackconf::address::Address;
use crate::stackconf::cursor::{DocumentCursor, StartTag, TagEvent};
use crate::stackconf::error::CompileError;
use crate::stackconf::grammar::{Attribute, Element};
use crate::stackconf::operation::Operation;
use crate::stackconf::reading::{attributes, properties, ReadContext};
use crate::stackconf::registry::ImplementationKind;
use crate::stackconf::sequencing::Sequencer;

/// Key of the transport address segment.
pub const TRANSPORT: &str = "transport";

/// Fixed segment name of the singleton transport resource.
pub const TRANSPORT_NAME: &str = "TRANSPORT";

pub(crate) fn read<C: DocumentCursor>(
    context: &ReadContext<'_>,
    cursor: &mut C,
    tag: &StartTag,
    parent: &Address,
    out: &mut Sequencer,
) -> Result<(), CompileError> {
    let node = context.namespace.node(Element::Transport);
    let address = parent.child(TRANSPORT, TRANSPORT_NAME);
    let mut operation = Operation::add(address.clone());

    let seen = attributes::classify_all(node, tag)?;
    for (attribute, value) in &seen {
        match attribute {
            Attribute::Type => {
                if !context
                    .registry
                    .is_loadable(ImplementationKind::Transport, value)
                {
                    return Err(CompileError::InvalidAttributeValue {
                        name: attribute.as_str().to_string(),
                        value: value.clone(),
                        position: tag.position,
                    });
                }
                operation.set_param(attribute.as_str(), value.clone());
            }
            Attribute::Shared => {
                let shared: bool =
                    value
                        .parse()
                        .map_err(|_| CompileError::InvalidAttributeValue {
                            name: attribute.as_str().to_string(),
                            value: value.clone(),
                            position: tag.position,
                        })?;
                operation.set_param(attribute.as_str(), shared);
            }
            _ => operation.set_param(attribute.as_str(), value.clone()),
        }
    }
    attributes::require_all(node, &seen, tag)?;

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
