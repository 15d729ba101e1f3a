//! Core domain layer for prism-scaffold.
//!
//! Pure logic with no I/O. Filesystem access and template storage are
//! reached through ports defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **No external crates**: only std + thiserror

pub mod entities;
pub mod error;
pub mod layout;
pub mod value_objects;

mod validation;

pub use entities::{
    common::{Permissions, RelativePath},
    plan::{PlannedFile, ScaffoldPlan},
    report::{FailureKind, RunStatus, WriteFailure, WriteResult},
    template::{
        ContentProducer, Mount, RenderContext, TemplateContent, TemplateEntry, TemplateGroup,
        TemplateSource, to_kebab_case, to_pascal_case, to_snake_case, to_title_case,
    },
};

pub use error::{DomainError, ErrorCategory};
pub use layout::{DIRECTORIES, plan_directories};
pub use validation::DomainValidator;
pub use value_objects::{
    ProjectName, SERVICE_REGISTRY, ServiceDefinition, ServiceName, find_service, services,
};
