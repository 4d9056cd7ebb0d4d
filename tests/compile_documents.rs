//! End-to-end compilation tests over the verified sample documents
//!
//! Tests follow the compiler testing guidelines: well-formed inputs come
//! from `testing::samples`, and sequences are verified in full shape with
//! the `assert_ops` fluent API, never by counts alone.

use stackconf::stackconf::testing::{assert_ops, samples};
use stackconf::stackconf::{compile, formats, StaticRegistry};

#[test]
fn minimal_document_compiles_to_three_ordered_operations() {
    let ops = compile(samples::MINIMAL_1_1, &StaticRegistry::builtin()).expect("compiles");

    assert_ops(&ops)
        .count(3)
        .op(0, |op| {
            op.action("add")
                .address("/subsystem=stackconf")
                .param_count(1)
                .param_str("default-stack", "web");
        })
        .op(1, |op| {
            op.action("add")
                .address("/subsystem=stackconf/stack=web")
                .param_count(0);
        })
        .op(2, |op| {
            op.action("add")
                .address("/subsystem=stackconf/stack=web/transport=TRANSPORT")
                .param_count(1)
                .param_str("type", "UDP");
        });
}

#[test]
fn version_1_0_documents_compile() {
    let ops = compile(samples::MINIMAL_1_0, &StaticRegistry::builtin()).expect("compiles");
    assert_ops(&ops).count(3).op(2, |op| {
        op.address("/subsystem=stackconf/stack=web/transport=TRANSPORT")
            .param_str("type", "UDP");
    });
}

#[test]
fn full_document_orders_resources_before_their_properties() {
    let ops = compile(samples::FULL_1_1, &StaticRegistry::builtin()).expect("compiles");

    assert_ops(&ops)
        .count(9)
        .op(0, |op| {
            op.address("/subsystem=stackconf").param_str("default-stack", "maximal");
        })
        .op(1, |op| {
            op.address("/subsystem=stackconf/stack=maximal").param_count(0);
        })
        .op(2, |op| {
            op.address("/subsystem=stackconf/stack=maximal/transport=TRANSPORT")
                .param_count(6)
                .param_str("type", "UDP")
                .param_bool("shared", true)
                .param_str("socket-binding", "stackconf-udp")
                .param_str("site", "s1")
                .param_str("rack", "r1")
                .param_str("machine", "m1");
        })
        .op(3, |op| {
            // The transport's property comes right after the transport,
            // before any sibling protocol.
            op.address(
                "/subsystem=stackconf/stack=maximal/transport=TRANSPORT/property=enable_bundling",
            )
            .param_count(1)
            .param_str("value", "true");
        })
        .op(4, |op| {
            op.address("/subsystem=stackconf/stack=maximal/protocol=PING")
                .param_count(1)
                .param_str("type", "PING");
        })
        .op(5, |op| {
            op.address("/subsystem=stackconf/stack=maximal/protocol=MERGE2")
                .param_str("type", "MERGE2")
                .no_param("socket-binding");
        })
        .op(6, |op| {
            op.address("/subsystem=stackconf/stack=maximal/protocol=MERGE2/property=max_interval")
                .param_str("value", "100000");
        })
        .op(7, |op| {
            op.address("/subsystem=stackconf/stack=maximal/protocol=MERGE2/property=min_interval")
                .param_str("value", "20000");
        })
        .op(8, |op| {
            op.address("/subsystem=stackconf/stack=maximal/protocol=FD_SOCK")
                .param_count(2)
                .param_str("type", "FD_SOCK")
                .param_str("socket-binding", "stackconf-fd");
        });
}

#[test]
fn sibling_stacks_keep_document_order() {
    let ops = compile(samples::TWO_STACKS_1_1, &StaticRegistry::builtin()).expect("compiles");

    assert_ops(&ops)
        .count(6)
        .op(1, |op| {
            op.address("/subsystem=stackconf/stack=a");
        })
        .op(2, |op| {
            op.address("/subsystem=stackconf/stack=a/transport=TRANSPORT");
        })
        .op(3, |op| {
            op.address("/subsystem=stackconf/stack=b");
        })
        .op(4, |op| {
            op.address("/subsystem=stackconf/stack=b/transport=TRANSPORT");
        })
        .op(5, |op| {
            op.address("/subsystem=stackconf/stack=b/protocol=MERGE2");
        });
}

#[test]
fn compilation_is_idempotent() {
    let registry = StaticRegistry::builtin();
    let first = compile(samples::FULL_1_1, &registry).expect("compiles");
    let second = compile(samples::FULL_1_1, &registry).expect("compiles");
    assert_eq!(first, second);
}

#[test]
fn full_document_text_rendering() {
    let ops = compile(samples::FULL_1_1, &StaticRegistry::builtin()).expect("compiles");
    let text = formats::to_text(&ops);

    insta::assert_snapshot!(text.trim_end(), @r###"
    add(/subsystem=stackconf) {default-stack="maximal"}
    add(/subsystem=stackconf/stack=maximal)
    add(/subsystem=stackconf/stack=maximal/transport=TRANSPORT) {machine="m1", rack="r1", shared=true, site="s1", socket-binding="stackconf-udp", type="UDP"}
    add(/subsystem=stackconf/stack=maximal/transport=TRANSPORT/property=enable_bundling) {value="true"}
    add(/subsystem=stackconf/stack=maximal/protocol=PING) {type="PING"}
    add(/subsystem=stackconf/stack=maximal/protocol=MERGE2) {type="MERGE2"}
    add(/subsystem=stackconf/stack=maximal/protocol=MERGE2/property=max_interval) {value="100000"}
    add(/subsystem=stackconf/stack=maximal/protocol=MERGE2/property=min_interval) {value="20000"}
    add(/subsystem=stackconf/stack=maximal/protocol=FD_SOCK) {socket-binding="stackconf-fd", type="FD_SOCK"}
    "###);
}

#[test]
fn empty_property_element_yields_empty_value() {
    let source = r#"<subsystem xmlns="urn:stackconf:1.1" default-stack="web">
    <stack name="web">
        <transport type="UDP">
            <property name="bind_addr"/>
        </transport>
    </stack>
</subsystem>"#;

    let ops = compile(source, &StaticRegistry::builtin()).expect("compiles");
    assert_ops(&ops).count(4).op(3, |op| {
        op.address("/subsystem=stackconf/stack=web/transport=TRANSPORT/property=bind_addr")
            .param_str("value", "");
    });
}

#[test]
fn property_values_are_passed_through_byte_for_byte() {
    // Property text is unvalidated and untouched at this layer: padding
    // and even whitespace-only values must survive to the consumer.
    let source = r#"<subsystem xmlns="urn:stackconf:1.1" default-stack="web">
    <stack name="web">
        <transport type="UDP">
            <property name="padded">  v  </property>
            <property name="blank">   </property>
        </transport>
    </stack>
</subsystem>"#;

    let ops = compile(source, &StaticRegistry::builtin()).expect("compiles");
    assert_ops(&ops)
        .count(5)
        .op(3, |op| {
            op.address("/subsystem=stackconf/stack=web/transport=TRANSPORT/property=padded")
                .param_str("value", "  v  ");
        })
        .op(4, |op| {
            op.address("/subsystem=stackconf/stack=web/transport=TRANSPORT/property=blank")
                .param_str("value", "   ");
        });
}

#[test]
fn custom_registry_entries_are_honored() {
    let source = r#"<subsystem xmlns="urn:stackconf:1.1" default-stack="web">
    <stack name="web">
        <transport type="RELAY_NET"/>
    </stack>
</subsystem>"#;

    let registry = StaticRegistry::empty().with_transport("RELAY_NET");
    let ops = compile(source, &registry).expect("compiles");
    assert_ops(&ops).op(2, |op| {
        op.param_str("type", "RELAY_NET");
    });
}
