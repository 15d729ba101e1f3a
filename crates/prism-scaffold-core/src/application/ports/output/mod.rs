//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `prism-scaffold-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{DomainError, RelativePath, TemplateContent, TemplateEntry, TemplateGroup};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `prism_scaffold_adapters::filesystem::LocalFilesystem` (production)
/// - `prism_scaffold_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Implementations must be callable from several worker threads at once.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing is fine.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> ScaffoldResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for the template catalog.
///
/// Implemented by:
/// - `prism_scaffold_adapters::catalog::BuiltinCatalog` (embedded assets)
/// - `prism_scaffold_adapters::catalog::OverlayCatalog` (on-disk overrides)
pub trait TemplateCatalog: Send + Sync {
    /// All files registered in a group, in registration order.
    fn entries(&self, group: TemplateGroup) -> ScaffoldResult<Vec<TemplateEntry>>;

    /// Content registered under `path` in `group`.
    ///
    /// An unregistered key is a defect in the catalog, never a runtime
    /// condition to recover from.
    fn content_for(
        &self,
        group: TemplateGroup,
        path: &RelativePath,
    ) -> ScaffoldResult<TemplateContent> {
        self.entries(group)?
            .into_iter()
            .find(|entry| &entry.path == path)
            .map(|entry| entry.content)
            .ok_or_else(|| {
                DomainError::UnknownTemplate {
                    group: group.slug(),
                    path: path.to_string(),
                }
                .into()
            })
    }
}
