//! Document cursor
//!
//! The compiler reads its input through [`DocumentCursor`], a pull-based,
//! position-tracking cursor it treats as an external collaborator: current
//! element name and namespace, per-index attribute accessors, "advance to
//! next tag," and "get text content." Nothing else of the underlying
//! document technology leaks into the element parsers.
//!
//! [`XmlCursor`] is the production implementation, backed by [`quick_xml`]
//! over an in-memory source string. Byte offsets reported by quick-xml are
//! converted to line/column positions against the source for error
//! messages.

use crate::stackconf::error::CompileError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use std::fmt;

/// A 1-based line/column position within the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Position of the start of the document.
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One raw attribute of a start tag, as found in the document.
#[derive(Debug, Clone)]
pub struct RawAttribute {
    pub name: String,
    pub value: String,
}

/// A start-of-element event: name, namespace tag, and attribute list.
#[derive(Debug, Clone)]
pub struct StartTag {
    pub name: String,
    /// The default namespace declared on this element (`xmlns`), if any.
    pub namespace: Option<String>,
    pub position: Position,
    attributes: Vec<RawAttribute>,
}

impl StartTag {
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute_name(&self, index: usize) -> &str {
        &self.attributes[index].name
    }

    pub fn attribute_value(&self, index: usize) -> &str {
        &self.attributes[index].value
    }
}

/// The next structural step of the document.
#[derive(Debug, Clone)]
pub enum TagEvent {
    /// A child element begins.
    Start(StartTag),
    /// The enclosing element ends.
    End,
}

/// Pull-based cursor over a configuration document.
///
/// Exclusively owned by one compilation; a parse either consumes it to
/// completion or abandons it on the first error.
pub trait DocumentCursor {
    /// Position of the most recently delivered event, for error reporting.
    fn position(&self) -> Position;

    /// Advance to the next start-of-element or end-of-element.
    fn next_tag(&mut self) -> Result<TagEvent, CompileError>;

    /// Consume the text content of the current element, up to and including
    /// its end tag. Fails if child elements are found instead of text.
    fn element_text(&mut self) -> Result<String, CompileError>;
}

/// [`DocumentCursor`] implementation over an XML source string.
pub struct XmlCursor<'s> {
    source: &'s str,
    reader: Reader<&'s [u8]>,
    position: Position,
    /// Set after an empty-element tag (`<a/>`) so that the synthetic end
    /// event is delivered on the next advance.
    pending_end: bool,
}

impl<'s> XmlCursor<'s> {
    pub fn new(source: &'s str) -> Self {
        // No trim_text: element text must reach the compiler exactly as
        // written, since property values pass through unvalidated and
        // untouched. Whitespace between tags is skipped in next_tag.
        let reader = Reader::from_str(source);

        Self {
            source,
            reader,
            position: Position::start(),
            pending_end: false,
        }
    }

    /// Line/column of a byte offset within the source.
    fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let consumed = &self.source[..offset];
        let line = consumed.matches('\n').count() + 1;
        let column = match consumed.rfind('\n') {
            Some(newline) => offset - newline,
            None => offset + 1,
        };
        Position { line, column }
    }

    fn document_error(&self, message: impl Into<String>) -> CompileError {
        CompileError::Document {
            message: message.into(),
            position: self.position,
        }
    }

    fn start_tag(&mut self, event: &BytesStart<'_>) -> Result<StartTag, CompileError> {
        let name = String::from_utf8_lossy(event.local_name().as_ref()).into_owned();

        let mut namespace = None;
        let mut attributes = Vec::new();
        for attr in event.attributes() {
            let attr = attr.map_err(|e| self.document_error(e.to_string()))?;
            let value = attr
                .unescape_value()
                .map_err(|e| self.document_error(e.to_string()))?
                .into_owned();

            if attr.key.as_ref() == b"xmlns" {
                namespace = Some(value);
                continue;
            }
            attributes.push(RawAttribute {
                name: String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned(),
                value,
            });
        }

        Ok(StartTag {
            name,
            namespace,
            position: self.position,
            attributes,
        })
    }
}

impl<'s> DocumentCursor for XmlCursor<'s> {
    fn position(&self) -> Position {
        self.position
    }

    fn next_tag(&mut self) -> Result<TagEvent, CompileError> {
        if self.pending_end {
            self.pending_end = false;
            return Ok(TagEvent::End);
        }

        loop {
            // Captured before the read, so a start tag's position is the
            // offset of its `<`; the whitespace run preceding a tag is its
            // own text event and has already been consumed by then.
            self.position = self.position_at(self.reader.buffer_position());
            match self.reader.read_event() {
                Ok(Event::Start(event)) => {
                    let tag = self.start_tag(&event)?;
                    return Ok(TagEvent::Start(tag));
                }
                Ok(Event::Empty(event)) => {
                    let tag = self.start_tag(&event)?;
                    self.pending_end = true;
                    return Ok(TagEvent::Start(tag));
                }
                Ok(Event::End(_)) => return Ok(TagEvent::End),
                Ok(Event::Text(text)) => {
                    let text = text
                        .unescape()
                        .map_err(|e| self.document_error(e.to_string()))?;
                    if !text.trim().is_empty() {
                        return Err(
                            self.document_error("unexpected text content between elements")
                        );
                    }
                }
                Ok(Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_)) => {}
                Ok(Event::CData(_)) => {
                    return Err(self.document_error("unexpected CDATA between elements"));
                }
                Ok(Event::Eof) => {
                    return Err(self.document_error("unexpected end of document"));
                }
                Err(e) => return Err(self.document_error(e.to_string())),
            }
        }
    }

    fn element_text(&mut self) -> Result<String, CompileError> {
        if self.pending_end {
            // Empty-element tag: no text, and its end is already consumed.
            self.pending_end = false;
            return Ok(String::new());
        }

        let mut text = String::new();
        loop {
            self.position = self.position_at(self.reader.buffer_position());
            match self.reader.read_event() {
                Ok(Event::Text(event)) => {
                    text.push_str(
                        &event
                            .unescape()
                            .map_err(|e| self.document_error(e.to_string()))?,
                    );
                }
                Ok(Event::CData(event)) => {
                    text.push_str(&String::from_utf8_lossy(event.as_ref()));
                }
                Ok(Event::End(_)) => return Ok(text),
                Ok(Event::Start(_) | Event::Empty(_)) => {
                    return Err(self.document_error("expected text content, found an element"));
                }
                Ok(Event::Comment(_) | Event::PI(_)) => {}
                Ok(Event::Decl(_) | Event::DocType(_)) => {
                    return Err(self.document_error("unexpected markup inside element text"));
                }
                Ok(Event::Eof) => {
                    return Err(self.document_error("unexpected end of document"));
                }
                Err(e) => return Err(self.document_error(e.to_string())),
            }
        }
    }
}
