use std::fmt;

use crate::domain::entities::common::RelativePath;

/// Outcome of materializing a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteResult {
    pub directories_created: usize,
    pub files_written: usize,
    /// Sorted by path once materialization finishes.
    pub failures: Vec<WriteFailure>,
}

/// A directory or file that could not be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub path: RelativePath,
    pub kind: FailureKind,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FailureKind {
    Directory,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Complete,
    PartiallyFailed,
}

impl WriteResult {
    pub fn status(&self) -> RunStatus {
        if self.failures.is_empty() {
            RunStatus::Complete
        } else {
            RunStatus::PartiallyFailed
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == RunStatus::Complete
    }

    pub fn record_failure(
        &mut self,
        path: RelativePath,
        kind: FailureKind,
        reason: impl Into<String>,
    ) {
        self.failures.push(WriteFailure {
            path,
            kind,
            reason: reason.into(),
        });
    }

    pub fn failed_files(&self) -> impl Iterator<Item = &WriteFailure> {
        self.failures.iter().filter(|f| f.kind == FailureKind::File)
    }

    pub fn failed_directories(&self) -> impl Iterator<Item = &WriteFailure> {
        self.failures
            .iter()
            .filter(|f| f.kind == FailureKind::Directory)
    }

    /// Put failures in a stable order regardless of write scheduling.
    pub fn finish(mut self) -> Self {
        self.failures
            .sort_by(|a, b| a.path.cmp(&b.path).then(a.kind.cmp(&b.kind)));
        self
    }
}

impl fmt::Display for WriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}
