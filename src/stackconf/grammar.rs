//! Declarative grammar for the stack configuration document
//!
//! The grammar is data, not code: each element of the document is described
//! by a [`GrammarNode`] listing its required attributes, optional attributes,
//! and permitted child elements. The element parsers never hard-code a
//! schema; they query the node handed to them for the active
//! [`Namespace`] version.
//!
//! Classification is scoped and exact: an attribute recognized at one
//! element level is not automatically recognized at another, and there is no
//! prefix or case-insensitive matching. An unrecognized name is always an
//! error at the call site, never silently ignored.

use std::fmt;

/// A supported grammar version, selected by the document's namespace URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    V1_0,
    V1_1,
}

impl Namespace {
    /// Resolve a namespace URI to a grammar version, if supported.
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            "urn:stackconf:1.0" => Some(Namespace::V1_0),
            "urn:stackconf:1.1" => Some(Namespace::V1_1),
            _ => None,
        }
    }

    pub fn uri(&self) -> &'static str {
        match self {
            Namespace::V1_0 => "urn:stackconf:1.0",
            Namespace::V1_1 => "urn:stackconf:1.1",
        }
    }

    /// Look up the grammar node governing `element` under this version.
    pub fn node(&self, element: Element) -> &'static GrammarNode {
        match (*self, element) {
            (_, Element::Subsystem) => &SUBSYSTEM_NODE,
            (_, Element::Stack) => &STACK_NODE,
            (Namespace::V1_0, Element::Transport) => &TRANSPORT_NODE_1_0,
            (Namespace::V1_1, Element::Transport) => &TRANSPORT_NODE_1_1,
            (_, Element::Protocol) => &PROTOCOL_NODE,
            (_, Element::Property) => &PROPERTY_NODE,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

/// A recognized element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Subsystem,
    Stack,
    Transport,
    Protocol,
    Property,
}

impl Element {
    pub fn for_name(name: &str) -> Option<Self> {
        match name {
            "subsystem" => Some(Element::Subsystem),
            "stack" => Some(Element::Stack),
            "transport" => Some(Element::Transport),
            "protocol" => Some(Element::Protocol),
            "property" => Some(Element::Property),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Subsystem => "subsystem",
            Element::Stack => "stack",
            Element::Transport => "transport",
            Element::Protocol => "protocol",
            Element::Property => "property",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized attribute name.
///
/// `as_str` doubles as the operation parameter name the attribute maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    DefaultStack,
    Name,
    Type,
    Shared,
    SocketBinding,
    DiagnosticsSocketBinding,
    DefaultExecutor,
    OobExecutor,
    TimerExecutor,
    ThreadFactory,
    Site,
    Rack,
    Machine,
}

impl Attribute {
    pub fn for_name(name: &str) -> Option<Self> {
        match name {
            "default-stack" => Some(Attribute::DefaultStack),
            "name" => Some(Attribute::Name),
            "type" => Some(Attribute::Type),
            "shared" => Some(Attribute::Shared),
            "socket-binding" => Some(Attribute::SocketBinding),
            "diagnostics-socket-binding" => Some(Attribute::DiagnosticsSocketBinding),
            "default-executor" => Some(Attribute::DefaultExecutor),
            "oob-executor" => Some(Attribute::OobExecutor),
            "timer-executor" => Some(Attribute::TimerExecutor),
            "thread-factory" => Some(Attribute::ThreadFactory),
            "site" => Some(Attribute::Site),
            "rack" => Some(Attribute::Rack),
            "machine" => Some(Attribute::Machine),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::DefaultStack => "default-stack",
            Attribute::Name => "name",
            Attribute::Type => "type",
            Attribute::Shared => "shared",
            Attribute::SocketBinding => "socket-binding",
            Attribute::DiagnosticsSocketBinding => "diagnostics-socket-binding",
            Attribute::DefaultExecutor => "default-executor",
            Attribute::OobExecutor => "oob-executor",
            Attribute::TimerExecutor => "timer-executor",
            Attribute::ThreadFactory => "thread-factory",
            Attribute::Site => "site",
            Attribute::Rack => "rack",
            Attribute::Machine => "machine",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The schema governing one element type at one nesting level.
///
/// Nodes are immutable, defined once per grammar version, and only read at
/// parse time.
#[derive(Debug)]
pub struct GrammarNode {
    pub element: Element,
    pub required: &'static [Attribute],
    pub optional: &'static [Attribute],
    pub children: &'static [Element],
}

impl GrammarNode {
    /// Classify a raw attribute name against this node's recognized set.
    pub fn classify_attribute(&self, name: &str) -> Option<Attribute> {
        let attribute = Attribute::for_name(name)?;
        if self.required.contains(&attribute) || self.optional.contains(&attribute) {
            Some(attribute)
        } else {
            None
        }
    }

    /// Classify a raw element name against this node's permitted children.
    pub fn classify_child(&self, name: &str) -> Option<Element> {
        let element = Element::for_name(name)?;
        if self.children.contains(&element) {
            Some(element)
        } else {
            None
        }
    }
}

static SUBSYSTEM_NODE: GrammarNode = GrammarNode {
    element: Element::Subsystem,
    required: &[Attribute::DefaultStack],
    optional: &[],
    children: &[Element::Stack],
};

static STACK_NODE: GrammarNode = GrammarNode {
    element: Element::Stack,
    required: &[Attribute::Name],
    optional: &[],
    children: &[Element::Transport, Element::Protocol],
};

static TRANSPORT_NODE_1_0: GrammarNode = GrammarNode {
    element: Element::Transport,
    required: &[Attribute::Type],
    optional: &[
        Attribute::SocketBinding,
        Attribute::DiagnosticsSocketBinding,
        Attribute::DefaultExecutor,
        Attribute::OobExecutor,
        Attribute::TimerExecutor,
        Attribute::ThreadFactory,
    ],
    children: &[Element::Property],
};

// 1.1 adds the shared flag and the topology attributes.
static TRANSPORT_NODE_1_1: GrammarNode = GrammarNode {
    element: Element::Transport,
    required: &[Attribute::Type],
    optional: &[
        Attribute::Shared,
        Attribute::SocketBinding,
        Attribute::DiagnosticsSocketBinding,
        Attribute::DefaultExecutor,
        Attribute::OobExecutor,
        Attribute::TimerExecutor,
        Attribute::ThreadFactory,
        Attribute::Site,
        Attribute::Rack,
        Attribute::Machine,
    ],
    children: &[Element::Property],
};

static PROTOCOL_NODE: GrammarNode = GrammarNode {
    element: Element::Protocol,
    required: &[Attribute::Type],
    optional: &[Attribute::SocketBinding],
    children: &[Element::Property],
};

static PROPERTY_NODE: GrammarNode = GrammarNode {
    element: Element::Property,
    required: &[Attribute::Name],
    optional: &[],
    children: &[],
};
