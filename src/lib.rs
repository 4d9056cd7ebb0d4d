//! # stackconf
//!
//! A compiler for protocol stack configuration documents.
//!
//! The compiler walks a hierarchical XML configuration document and produces
//! a flat, ordered sequence of "add resource" operations, each carrying a
//! fully-qualified address and a validated parameter set. Applying the
//! operations is the consumer's job; this crate only compiles.
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](stackconf::testing).
//! All compiler tests must use verified sample documents and the fluent
//! operation assertions.

pub mod stackconf;
