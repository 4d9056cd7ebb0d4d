//! Element parsers
//!
//! One parser per grammar element, each following the same shape: consume
//! the element's attributes against its grammar node, verify required
//! attributes, walk permitted child elements (dispatching to the child's
//! parser), then emit the element's own operation followed by its buffered
//! descendant operations. Control returns to the caller only once the whole
//! subtree has been consumed and sequenced.
//!
//! The first error anywhere aborts the compilation; the caller never
//! observes a partial operation sequence.

pub mod attributes;
pub mod properties;
pub mod protocol;
pub mod stack;
pub mod subsystem;
pub mod transport;

use crate::stackconf::cursor::{DocumentCursor, TagEvent, XmlCursor};
use crate::stackconf::error::CompileError;
use crate::stackconf::grammar::{Element, Namespace};
use crate::stackconf::operation::Operation;
use crate::stackconf::registry::ImplementationRegistry;
use crate::stackconf::sequencing::Sequencer;

/// Per-compilation state shared by the element parsers: the selected
/// grammar version and the host's implementation registry.
pub(crate) struct ReadContext<'r> {
    pub namespace: Namespace,
    pub registry: &'r dyn ImplementationRegistry,
}

/// Compile a configuration document into its operation sequence.
///
/// This is the whole-document entry point: it resolves the grammar version
/// from the root element's namespace (failing with
/// [`CompileError::UnsupportedNamespace`] before any parsing), then runs
/// the root parser. On success the returned sequence is fully ordered:
/// parents before descendants, resources before their properties.
pub fn compile(
    source: &str,
    registry: &dyn ImplementationRegistry,
) -> Result<Vec<Operation>, CompileError> {
    let mut cursor = XmlCursor::new(source);
    compile_with(&mut cursor, registry)
}

/// [`compile`] over a caller-supplied [`DocumentCursor`].
pub fn compile_with<C: DocumentCursor>(
    cursor: &mut C,
    registry: &dyn ImplementationRegistry,
) -> Result<Vec<Operation>, CompileError> {
    let root = match cursor.next_tag()? {
        TagEvent::Start(tag) => tag,
        TagEvent::End => {
            return Err(CompileError::Document {
                message: "document has no root element".to_string(),
                position: cursor.position(),
            })
        }
    };

    let uri = root.namespace.clone().unwrap_or_default();
    let namespace =
        Namespace::from_uri(&uri).ok_or(CompileError::UnsupportedNamespace { uri })?;

    if root.name != Element::Subsystem.as_str() {
        return Err(CompileError::UnexpectedElement {
            name: root.name.clone(),
            position: root.position,
        });
    }

    let context = ReadContext {
        namespace,
        registry,
    };

    let mut out = Sequencer::new();
    subsystem::read(&context, cursor, &root, &mut out)?;
    Ok(out.into_operations())
}
