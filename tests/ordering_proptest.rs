//! Property-based tests for operation ordering and determinism
//!
//! Documents are generated structurally and rendered to XML, so every input
//! is well-formed by construction; the properties then hold for the whole
//! grammar, not just the curated samples.

use proptest::prelude::*;
use stackconf::stackconf::{compile, Operation, StaticRegistry};

#[derive(Debug, Clone)]
struct PropertyDoc {
    name: String,
    value: String,
}

#[derive(Debug, Clone)]
struct ProtocolDoc {
    type_name: &'static str,
    properties: Vec<PropertyDoc>,
}

#[derive(Debug, Clone)]
struct StackDoc {
    name: String,
    transport_type: &'static str,
    transport_properties: Vec<PropertyDoc>,
    protocols: Vec<ProtocolDoc>,
}

#[derive(Debug, Clone)]
struct SubsystemDoc {
    version: &'static str,
    default_stack: String,
    stacks: Vec<StackDoc>,
}

const TRANSPORT_TYPES: &[&str] = &["UDP", "TCP", "TCP_NIO", "TUNNEL"];
const PROTOCOL_TYPES: &[&str] = &["PING", "MERGE2", "FD", "NAKACK", "STABLE", "GMS"];

fn property_doc() -> impl Strategy<Value = PropertyDoc> {
    ("[a-z][a-z0-9_]{0,8}", "[a-z0-9./:]{0,10}").prop_map(|(name, value)| PropertyDoc {
        name,
        value,
    })
}

fn protocol_doc() -> impl Strategy<Value = ProtocolDoc> {
    (
        proptest::sample::select(PROTOCOL_TYPES),
        prop::collection::vec(property_doc(), 0..3),
    )
        .prop_map(|(type_name, properties)| ProtocolDoc {
            type_name,
            properties,
        })
}

fn stack_doc() -> impl Strategy<Value = StackDoc> {
    (
        "[a-z][a-z0-9-]{0,8}",
        proptest::sample::select(TRANSPORT_TYPES),
        prop::collection::vec(property_doc(), 0..3),
        prop::collection::vec(protocol_doc(), 0..4),
    )
        .prop_map(
            |(name, transport_type, transport_properties, protocols)| StackDoc {
                name,
                transport_type,
                transport_properties,
                protocols,
            },
        )
}

fn subsystem_doc() -> impl Strategy<Value = SubsystemDoc> {
    (
        proptest::sample::select(&["1.0", "1.1"][..]),
        "[a-z][a-z0-9-]{0,8}",
        prop::collection::vec(stack_doc(), 1..4),
    )
        .prop_map(|(version, default_stack, stacks)| SubsystemDoc {
            version,
            default_stack,
            stacks,
        })
}

fn render(doc: &SubsystemDoc) -> String {
    let mut out = format!(
        "<subsystem xmlns=\"urn:stackconf:{}\" default-stack=\"{}\">\n",
        doc.version, doc.default_stack
    );
    for stack in &doc.stacks {
        out.push_str(&format!("  <stack name=\"{}\">\n", stack.name));
        out.push_str(&format!("    <transport type=\"{}\">\n", stack.transport_type));
        for property in &stack.transport_properties {
            out.push_str(&format!(
                "      <property name=\"{}\">{}</property>\n",
                property.name, property.value
            ));
        }
        out.push_str("    </transport>\n");
        for protocol in &stack.protocols {
            out.push_str(&format!("    <protocol type=\"{}\">\n", protocol.type_name));
            for property in &protocol.properties {
                out.push_str(&format!(
                    "      <property name=\"{}\">{}</property>\n",
                    property.name, property.value
                ));
            }
            out.push_str("    </protocol>\n");
        }
        out.push_str("  </stack>\n");
    }
    out.push_str("</subsystem>\n");
    out
}

fn expected_operation_count(doc: &SubsystemDoc) -> usize {
    1 + doc
        .stacks
        .iter()
        .map(|stack| {
            2 + stack.transport_properties.len()
                + stack
                    .protocols
                    .iter()
                    .map(|protocol| 1 + protocol.properties.len())
                    .sum::<usize>()
        })
        .sum::<usize>()
}

fn compile_doc(doc: &SubsystemDoc) -> Vec<Operation> {
    compile(&render(doc), &StaticRegistry::builtin()).expect("generated document is well-formed")
}

proptest! {
    #[test]
    fn every_parent_operation_precedes_its_descendants(doc in subsystem_doc()) {
        let ops = compile_doc(&doc);

        for (index, op) in ops.iter().enumerate() {
            if let Some(parent) = op.address.parent() {
                let parent_index = ops.iter().position(|o| o.address == parent);
                prop_assert!(
                    matches!(parent_index, Some(p) if p < index),
                    "operation {} has no earlier parent operation",
                    op.address
                );
            }
        }
    }

    #[test]
    fn operation_count_matches_document_structure(doc in subsystem_doc()) {
        let ops = compile_doc(&doc);
        prop_assert_eq!(ops.len(), expected_operation_count(&doc));
    }

    #[test]
    fn compilation_is_deterministic(doc in subsystem_doc()) {
        let first = compile_doc(&doc);
        let second = compile_doc(&doc);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn property_operations_follow_their_owning_resource_directly_or_later(doc in subsystem_doc()) {
        let ops = compile_doc(&doc);

        for (index, op) in ops.iter().enumerate() {
            let is_property = op
                .address
                .segments()
                .last()
                .map(|segment| segment.key == "property")
                .unwrap_or(false);
            if !is_property {
                continue;
            }
            let owner = op.address.parent().expect("property has an owner");
            let owner_index = ops
                .iter()
                .position(|o| o.address == owner)
                .expect("owner operation exists");
            prop_assert!(owner_index < index);
        }
    }
}
