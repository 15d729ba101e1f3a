// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported in summaries after the fact)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Scaffold plan is empty")]
    EmptyPlan,

    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Path is planned as both a directory and a file: {path}")]
    FileDirectoryConflict { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathTraversalNotAllowed { path: String },

    // ========================================================================
    // Catalog Invariants
    // ========================================================================
    #[error("No template registered for '{path}' in group '{group}'")]
    UnknownTemplate { group: String, path: String },

    #[error("Template '{path}' registered twice in group '{group}'")]
    DuplicateTemplate { group: String, path: String },

    #[error("Unknown service '{0}'")]
    UnknownService(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use letters, digits, hyphens, and underscores".into(),
                "Example: prism-scaffold my-registry".into(),
            ],
            Self::UnknownTemplate { .. } | Self::DuplicateTemplate { .. } => vec![
                "The built-in template catalog is inconsistent".into(),
                "This is a bug in prism-scaffold, please report it".into(),
            ],
            Self::UnknownService(service) => vec![
                format!("'{}' is not a registered service", service),
                "Services are fixed; register new ones in the service registry".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathTraversalNotAllowed { .. } => ErrorCategory::Validation,
            Self::UnknownTemplate { .. } | Self::UnknownService(_) => ErrorCategory::NotFound,
            Self::EmptyPlan
            | Self::DuplicatePath { .. }
            | Self::FileDirectoryConflict { .. }
            | Self::DuplicateTemplate { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
