//! Command-line interface for stackconf
//! This binary compiles stack configuration documents into management
//! operation sequences, or just validates them.
//!
//! Usage:
//!   stackconf compile `<path>` [--format `<format>`]  - Compile a document and print its operations
//!   stackconf check `<path>`                        - Validate a document, exit nonzero on error
//!   stackconf list-protocols                      - List the builtin implementation registry

use clap::{Arg, Command};
use stackconf::stackconf::{formats, ImplementationKind, StaticRegistry};

fn main() {
    let matches = Command::new("stackconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler for protocol stack configuration documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compile")
                .about("Compile a document and print its operation sequence")
                .arg(
                    Arg::new("path")
                        .help("Path to the configuration document")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'text')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a document without printing operations")
                .arg(
                    Arg::new("path")
                        .help("Path to the configuration document")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("list-protocols")
                .about("List the transport and protocol types of the builtin registry"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("compile", compile_matches)) => {
            let path = compile_matches.get_one::<String>("path").unwrap();
            let format = compile_matches.get_one::<String>("format").unwrap();
            handle_compile_command(path, format);
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            handle_check_command(path);
        }
        Some(("list-protocols", _)) => {
            handle_list_protocols_command();
        }
        _ => unreachable!(),
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the compile command
fn handle_compile_command(path: &str, format: &str) {
    let source = read_source(path);
    let registry = StaticRegistry::builtin();

    let operations = stackconf::stackconf::compile(&source, &registry).unwrap_or_else(|e| {
        eprintln!("Compile error: {}", e);
        std::process::exit(1);
    });

    match format {
        "json" => {
            let json = formats::to_json(&operations).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        "text" => print!("{}", formats::to_text(&operations)),
        other => {
            eprintln!("Unknown output format: {}", other);
            std::process::exit(1);
        }
    }
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let source = read_source(path);
    let registry = StaticRegistry::builtin();

    match stackconf::stackconf::compile(&source, &registry) {
        Ok(operations) => println!("OK: {} operation(s)", operations.len()),
        Err(e) => {
            eprintln!("Invalid: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the list-protocols command
fn handle_list_protocols_command() {
    let registry = StaticRegistry::builtin();

    println!("Builtin transport types:\n");
    for name in registry.names(ImplementationKind::Transport) {
        println!("  {}", name);
    }
    println!("\nBuiltin protocol types:\n");
    for name in registry.names(ImplementationKind::Protocol) {
        println!("  {}", name);
    }
}
