//! prism-scaffold core - hexagonal architecture implementation
//!
//! Domain and application layers of the PRISM Carbon Registry scaffolding
//! generator.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        prism-scaffold-cli (CLI)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (PlanService, ScaffoldService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, TemplateCatalog)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   prism-scaffold-adapters (Infra)       │
//! │ (LocalFilesystem, BuiltinCatalog, ...)  │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ScaffoldPlan, RenderContext, layout)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prism_scaffold_core::prelude::*;
//!
//! let plan = PlanService::new(catalog).build(&ProjectName::default())?;
//! let result = ScaffoldService::new(filesystem)
//!     .with_workers(4)
//!     .materialize(&plan, Path::new("."))?;
//! assert!(result.is_complete());
//! ```

pub mod domain;

pub mod application;

pub mod error;

/// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PlanService, ScaffoldService,
        ports::{Filesystem, TemplateCatalog},
    };
    pub use crate::domain::{
        ProjectName, RelativePath, RenderContext, RunStatus, ScaffoldPlan, TemplateContent,
        TemplateEntry, TemplateGroup, WriteResult,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
