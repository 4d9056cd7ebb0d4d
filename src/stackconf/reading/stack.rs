//! Stack element parser
//!
//! A stack is a named child resource with an ordering constraint: its first
//! nested element must be the transport, followed by zero or more protocol
//! elements in any order. Operations produced by the children are buffered
//! locally and appended only after the stack's own `add`, so ancestors
//! always precede descendants in the final sequence.

use crate::stackconf::address::Address;
use crate::stackconf::cursor::{DocumentCursor, StartTag, TagEvent};
use crate::stackconf::error::CompileError;
use crate::stackconf::grammar::{Attribute, Element};
use crate::stackconf::operation::Operation;
use crate::stackconf::reading::{attributes, protocol, transport, ReadContext};
use crate::stackconf::sequencing::Sequencer;

/// Key of a stack address segment.
pub const STACK: &str = "stack";

pub(crate) fn read<C: DocumentCursor>(
    context: &ReadContext<'_>,
    cursor: &mut C,
    tag: &StartTag,
    parent: &Address,
    out: &mut Sequencer,
) -> Result<(), CompileError> {
    let node = context.namespace.node(Element::Stack);

    let seen = attributes::classify_all(node, tag)?;
    attributes::require_all(node, &seen, tag)?;
    let name = attributes::value_of(&seen, Attribute::Name)
        .expect("required check guarantees the name attribute");

    let address = parent.child(STACK, name);
    let mut children = Sequencer::new();

    // The first child must be the transport; an empty subtree or any other
    // element first is a missing-required-element failure.
    match cursor.next_tag()? {
        TagEvent::Start(child) if node.classify_child(&child.name) == Some(Element::Transport) => {
            transport::read(context, cursor, &child, &address, &mut children)?;
        }
        TagEvent::Start(child) => {
            return Err(CompileError::MissingRequiredElement {
                names: vec![Element::Transport.as_str().to_string()],
                position: child.position,
            })
        }
        TagEvent::End => {
            return Err(CompileError::MissingRequiredElement {
                names: vec![Element::Transport.as_str().to_string()],
                position: cursor.position(),
            })
        }
    }

    loop {
        match cursor.next_tag()? {
            TagEvent::End => break,
            TagEvent::Start(child) => match node.classify_child(&child.name) {
                Some(Element::Protocol) => {
                    protocol::read(context, cursor, &child, &address, &mut children)?;
                }
                // A second transport is grammatical at no position but the
                // first, so it is unexpected here, like any other element.
                _ => {
                    return Err(CompileError::UnexpectedElement {
                        name: child.name,
                        position: child.position,
                    })
                }
            },
        }
    }

    out.emit(Operation::add(address));
    out.splice(children);
    Ok(())
}
