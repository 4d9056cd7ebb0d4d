//! Output formats for compiled operation sequences
//!
//! Two formats are supported: pretty-printed JSON (for tooling) and a plain
//! text listing with one operation per line (for eyeballing).

use crate::stackconf::operation::Operation;
use std::fmt::Write;

/// Serialize an operation sequence as pretty-printed JSON.
pub fn to_json(operations: &[Operation]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(operations)
}

/// Render an operation sequence as one display line per operation.
pub fn to_text(operations: &[Operation]) -> String {
    let mut out = String::new();
    for operation in operations {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", operation);
    }
    out
}
