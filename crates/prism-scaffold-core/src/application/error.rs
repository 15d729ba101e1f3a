//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The project root exists but is not a directory.
    #[error("{path} exists and is not a directory")]
    ProjectPathCollision { path: PathBuf },

    /// The project root could not be created.
    #[error("Cannot create project directory {path}: {reason}")]
    RootCreationFailed { path: PathBuf, reason: String },

    /// Shared state was poisoned by a panicking thread.
    #[error("{resource} is unavailable (lock poisoned)")]
    LockPoisoned { resource: &'static str },
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ProjectPathCollision { path } => vec![
                format!("A file named '{}' is in the way", path.display()),
                "Remove or rename it, or choose a different project name".into(),
            ],
            Self::RootCreationFailed { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that the current directory is writable".into(),
                "Ensure there is free disk space".into(),
            ],
            Self::LockPoisoned { resource } => vec![
                format!("{} was poisoned by a panicking thread", resource),
                "This is a bug in prism-scaffold, please report it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectPathCollision { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::RootCreationFailed { .. }
            | Self::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }
}
