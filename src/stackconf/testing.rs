//! Testing utilities for operation-sequence assertions
//!
//! # Compiler Testing Guidelines
//!
//! Compiler tests must follow two rules:
//!
//! 1. **Use the verified sample documents in [`samples`]** for well-formed
//!    inputs. The grammar still evolves; scattering hand-written documents
//!    across test files makes every grammar change a hunt. Malformed
//!    documents used to provoke a specific error may be written next to the
//!    test that needs them, since they document the failure they trigger.
//!
//! 2. **Use [`assert_ops`] for sequence verification.** Asserting only
//!    operation counts is not informative; what we want is assurance on the
//!    full shape: action, address, and parameters of each operation, in
//!    order. The fluent API keeps that affordable:
//!
//! ```rust-example
//! use stackconf::stackconf::testing::{assert_ops, samples};
//!
//! let ops = compile(samples::MINIMAL_1_1, &registry)?;
//! assert_ops(&ops)
//!     .count(3)
//!     .op(0, |op| {
//!         op.action("add").address("/subsystem=stackconf");
//!     })
//!     .op(2, |op| {
//!         op.address("/subsystem=stackconf/stack=web/transport=TRANSPORT")
//!             .param_str("type", "UDP");
//!     });
//! ```

use crate::stackconf::operation::{Operation, ParamValue};

/// Verified sample documents.
///
/// These are the canonical sources for compiler tests; when the grammar
/// changes, updating them updates every test.
pub mod samples {
    /// The smallest well-formed 1.1 document: root, one stack, transport.
    pub const MINIMAL_1_1: &str = r#"<subsystem xmlns="urn:stackconf:1.1" default-stack="web">
    <stack name="web">
        <transport type="UDP"/>
    </stack>
</subsystem>"#;

    /// The smallest well-formed 1.0 document.
    pub const MINIMAL_1_0: &str = r#"<subsystem xmlns="urn:stackconf:1.0" default-stack="web">
    <stack name="web">
        <transport type="UDP"/>
    </stack>
</subsystem>"#;

    /// A 1.1 document exercising the whole grammar: topology attributes,
    /// protocols, and properties at both nesting depths.
    pub const FULL_1_1: &str = r#"<subsystem xmlns="urn:stackconf:1.1" default-stack="maximal">
    <stack name="maximal">
        <transport type="UDP" shared="true" socket-binding="stackconf-udp" site="s1" rack="r1" machine="m1">
            <property name="enable_bundling">true</property>
        </transport>
        <protocol type="PING"/>
        <protocol type="MERGE2">
            <property name="max_interval">100000</property>
            <property name="min_interval">20000</property>
        </protocol>
        <protocol type="FD_SOCK" socket-binding="stackconf-fd"/>
    </stack>
</subsystem>"#;

    /// Two sibling stacks; used for document-order assertions.
    pub const TWO_STACKS_1_1: &str = r#"<subsystem xmlns="urn:stackconf:1.1" default-stack="a">
    <stack name="a">
        <transport type="UDP"/>
    </stack>
    <stack name="b">
        <transport type="TCP"/>
        <protocol type="MERGE2"/>
    </stack>
</subsystem>"#;
}

/// Entry point of the fluent operation-sequence assertion API.
pub fn assert_ops(operations: &[Operation]) -> OpsAssertion<'_> {
    OpsAssertion { operations }
}

/// Assertions over a whole operation sequence.
pub struct OpsAssertion<'a> {
    operations: &'a [Operation],
}

impl<'a> OpsAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.operations.len(),
            expected,
            "expected {} operations, got {}: {:#?}",
            expected,
            self.operations.len(),
            self.operations
        );
        self
    }

    /// Assert on the operation at `index`.
    pub fn op(self, index: usize, check: impl FnOnce(OpAssertion<'a>)) -> Self {
        let operation = self
            .operations
            .get(index)
            .unwrap_or_else(|| panic!("no operation at index {}: {:#?}", index, self.operations));
        check(OpAssertion { operation });
        self
    }
}

/// Assertions over a single operation.
pub struct OpAssertion<'a> {
    operation: &'a Operation,
}

impl OpAssertion<'_> {
    pub fn action(self, expected: &str) -> Self {
        assert_eq!(
            self.operation.action, expected,
            "wrong action for {}",
            self.operation
        );
        self
    }

    pub fn address(self, expected: &str) -> Self {
        assert_eq!(
            self.operation.address.to_string(),
            expected,
            "wrong address for {}",
            self.operation
        );
        self
    }

    pub fn param_str(self, name: &str, expected: &str) -> Self {
        match self.operation.param(name) {
            Some(ParamValue::Str(value)) => {
                assert_eq!(value, expected, "wrong value for param '{}'", name)
            }
            other => panic!(
                "expected string param '{}'={:?}, got {:?} in {}",
                name, expected, other, self.operation
            ),
        }
        self
    }

    pub fn param_bool(self, name: &str, expected: bool) -> Self {
        match self.operation.param(name) {
            Some(ParamValue::Bool(value)) => {
                assert_eq!(*value, expected, "wrong value for param '{}'", name)
            }
            other => panic!(
                "expected bool param '{}'={}, got {:?} in {}",
                name, expected, other, self.operation
            ),
        }
        self
    }

    pub fn param_count(self, expected: usize) -> Self {
        assert_eq!(
            self.operation.params.len(),
            expected,
            "wrong param count in {}",
            self.operation
        );
        self
    }

    pub fn no_param(self, name: &str) -> Self {
        assert!(
            self.operation.param(name).is_none(),
            "unexpected param '{}' in {}",
            name,
            self.operation
        );
        self
    }
}
