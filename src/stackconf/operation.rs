//! Management operations
//!
//! The compiler's output is an ordered sequence of [`Operation`]s: atomic
//! "create resource" instructions with an address and a parameter map,
//! meant for later application by an external consumer. This crate never
//! applies them.

use crate::stackconf::address::Address;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Action name of every operation this compiler emits.
pub const ADD: &str = "add";

/// A typed operation parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Bool(bool),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            ParamValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            ParamValue::Str(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{:?}", s),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

/// A named action against an addressed resource.
///
/// Parameters are append-only while the operation is under construction and
/// read-only once the operation has been emitted into a sequence; there is
/// no public mutator besides [`Operation::set_param`], which the element
/// parsers call before handing the operation to the sequencer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub action: &'static str,
    pub address: Address,
    pub params: BTreeMap<String, ParamValue>,
}

impl Operation {
    /// A parameterless `add` at the given address.
    pub fn add(address: Address) -> Self {
        Self {
            action: ADD,
            address,
            params: BTreeMap::new(),
        }
    }

    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.params.insert(name.into(), value.into());
    }

    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.action, self.address)?;
        if !self.params.is_empty() {
            write!(f, " {{")?;
            for (i, (name, value)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}={}", name, value)?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}
