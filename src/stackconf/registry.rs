//! Implementation registry
//!
//! A `type` attribute on a transport or protocol element is only valid if
//! the host environment can actually load an implementation of that name.
//! The compiler models this as an injected capability: a synchronous,
//! read-only existence check. It never instantiates, retains, or starts the
//! looked-up implementation; validation has no observable side effect
//! beyond success or failure.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// The base contract an implementation type must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImplementationKind {
    Transport,
    Protocol,
}

/// Host-supplied capability answering "is an implementation of this kind,
/// with this name, loadable?".
pub trait ImplementationRegistry {
    fn is_loadable(&self, kind: ImplementationKind, type_name: &str) -> bool;
}

/// Transport types every stock host ships.
static BUILTIN_TRANSPORTS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    ["UDP", "TCP", "TCP_NIO", "TUNNEL", "SHARED_LOOPBACK"]
        .into_iter()
        .collect()
});

/// Protocol types every stock host ships.
static BUILTIN_PROTOCOLS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    [
        "PING",
        "MPING",
        "TCPPING",
        "TCPGOSSIP",
        "MERGE2",
        "MERGE3",
        "FD",
        "FD_SOCK",
        "FD_ALL",
        "VERIFY_SUSPECT",
        "BARRIER",
        "NAKACK",
        "NAKACK2",
        "UNICAST",
        "UNICAST2",
        "STABLE",
        "GMS",
        "UFC",
        "MFC",
        "FRAG2",
        "STATE_TRANSFER",
        "FLUSH",
        "AUTH",
        "COUNTER",
        "RSVP",
    ]
    .into_iter()
    .collect()
});

/// Set-backed registry used by the CLI and tests.
///
/// Library callers embedding the compiler in a real host should supply
/// their own [`ImplementationRegistry`] instead.
#[derive(Debug, Clone)]
pub struct StaticRegistry {
    transports: BTreeSet<String>,
    protocols: BTreeSet<String>,
}

impl StaticRegistry {
    /// An empty registry; every lookup fails.
    pub fn empty() -> Self {
        Self {
            transports: BTreeSet::new(),
            protocols: BTreeSet::new(),
        }
    }

    /// The builtin transport and protocol tables.
    pub fn builtin() -> Self {
        Self {
            transports: BUILTIN_TRANSPORTS.iter().map(|s| s.to_string()).collect(),
            protocols: BUILTIN_PROTOCOLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_transport(mut self, type_name: impl Into<String>) -> Self {
        self.transports.insert(type_name.into());
        self
    }

    pub fn with_protocol(mut self, type_name: impl Into<String>) -> Self {
        self.protocols.insert(type_name.into());
        self
    }

    /// All registered type names of one kind, in name order.
    pub fn names(&self, kind: ImplementationKind) -> impl Iterator<Item = &str> {
        match kind {
            ImplementationKind::Transport => self.transports.iter(),
            ImplementationKind::Protocol => self.protocols.iter(),
        }
        .map(|s| s.as_str())
    }
}

impl ImplementationRegistry for StaticRegistry {
    fn is_loadable(&self, kind: ImplementationKind, type_name: &str) -> bool {
        match kind {
            ImplementationKind::Transport => self.transports.contains(type_name),
            ImplementationKind::Protocol => self.protocols.contains(type_name),
        }
    }
}
