//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world. Adapters
//! in `prism-scaffold-adapters` implement them.
//!
//! - `Filesystem`: directory and file operations
//! - `TemplateCatalog`: grouped template lookup

pub mod output;

#[cfg(test)]
pub use output::MockFilesystem;
pub use output::{Filesystem, TemplateCatalog};
