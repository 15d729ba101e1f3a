//! Infrastructure adapters for prism-scaffold.
//!
//! Implements the ports defined in `prism_scaffold_core::application::ports`.
//! All I/O lives here.

pub mod catalog;
pub mod filesystem;

pub use catalog::{BuiltinCatalog, OverlayCatalog};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
