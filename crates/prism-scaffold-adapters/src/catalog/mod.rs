//! Template catalog adapters.

mod builtin;
mod overlay;

pub use builtin::BuiltinCatalog;
pub use overlay::OverlayCatalog;
