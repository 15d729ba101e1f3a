pub mod common;
pub mod plan;
pub mod report;
pub mod template;

pub use plan::{PlannedFile, ScaffoldPlan};
pub use report::{FailureKind, RunStatus, WriteFailure, WriteResult};
pub use template::{ContentProducer, RenderContext, TemplateContent, TemplateEntry, TemplateGroup};
