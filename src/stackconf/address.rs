//! Resource addresses
//!
//! An [`Address`] is an ordered path of (key, value) segments identifying a
//! resource's position in the configuration tree, e.g.
//! `/subsystem=stackconf/stack=web/transport=TRANSPORT`.
//!
//! Addresses are immutable by construction: there is no mutating API, and
//! [`Address::child`] returns a fresh value with one segment appended. Two
//! addresses are equal iff their segment sequences are equal.

use serde::Serialize;
use std::fmt;

/// One (key, value) step of an address path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Segment {
    pub key: String,
    pub value: String,
}

impl Segment {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// An ordered, immutable sequence of path segments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Address {
    segments: Vec<Segment>,
}

impl Address {
    /// A single-segment address, the root of a configuration tree.
    pub fn root(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::new(key, value)],
        }
    }

    /// Derive a child address: clone this address and append one segment.
    ///
    /// The receiver is untouched; the derivation is associative, so the
    /// address of a doubly-nested resource is independent of how it was
    /// assembled.
    pub fn child(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::new(key, value));
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The address of the enclosing resource, if any.
    pub fn parent(&self) -> Option<Address> {
        match self.segments.len() {
            0 | 1 => None,
            n => Some(Self {
                segments: self.segments[..n - 1].to_vec(),
            }),
        }
    }

    /// True if `self` is `other` plus exactly one trailing segment.
    pub fn is_child_of(&self, other: &Address) -> bool {
        self.segments.len() == other.segments.len() + 1
            && self.segments[..other.segments.len()] == other.segments[..]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
