//! Operation sequencing
//!
//! During recursive descent, each element parser accumulates the operations
//! of its subtree in a local [`Sequencer`] and splices that buffer into its
//! parent's only after the parser's own operation has been emitted. The
//! linearized result therefore obeys, regardless of recursion depth:
//!
//! 1. an ancestor's operation precedes all descendant operations;
//! 2. sibling order follows document order;
//! 3. a resource's operation precedes that resource's property operations.
//!
//! A failed parse drops its buffers on the unwind path; no partial sequence
//! ever reaches the caller.

use crate::stackconf::operation::Operation;

/// Ordered output buffer for emitted operations.
#[derive(Debug, Default)]
pub struct Sequencer {
    operations: Vec<Operation>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one operation.
    pub fn emit(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// Append a child subtree's buffer, preserving its internal order.
    pub fn splice(&mut self, child: Sequencer) {
        self.operations.extend(child.operations);
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Linearize into the final operation sequence.
    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }
}
