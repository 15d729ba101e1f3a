//! Application services - orchestrate use cases.
//!
//! `PlanService` composes the catalog into a plan; `ScaffoldService`
//! materializes a plan on a filesystem.

pub mod plan_service;
pub mod scaffold_service;

pub use plan_service::PlanService;
pub use scaffold_service::ScaffoldService;
