//! Main module for stackconf library functionality

pub mod address;
pub mod cursor;
pub mod error;
pub mod formats;
pub mod grammar;
pub mod operation;
pub mod reading;
pub mod registry;
pub mod sequencing;
pub mod testing;

pub use address::{Address, Segment};
pub use cursor::{DocumentCursor, Position, XmlCursor};
pub use error::CompileError;
pub use grammar::Namespace;
pub use operation::{Operation, ParamValue};
pub use reading::compile;
pub use registry::{ImplementationKind, ImplementationRegistry, StaticRegistry};
