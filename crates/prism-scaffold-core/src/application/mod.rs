//! Application layer for prism-scaffold.
//!
//! - **Services**: use case orchestration (`PlanService`, `ScaffoldService`)
//! - **Ports**: traits for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{PlanService, ScaffoldService};

pub use ports::{Filesystem, TemplateCatalog};

pub use error::ApplicationError;
