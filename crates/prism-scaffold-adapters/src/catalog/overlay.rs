//! Override-directory catalog overlay.
//!
//! Files laid out as `<dir>/<group>/<relative path>` replace the base
//! catalog's content for the same key. The key set never grows: an override
//! for a path the base does not register is skipped with a warning.
//!
//! ```text
//! overrides/
//! ├── root/README.md                        -> README.md
//! ├── service/app/main.py                   -> services/*/app/main.py
//! └── service-extras/user-service/app/...   -> services/user-service/app/...
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::{Component, Path},
};

use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use prism_scaffold_core::{
    application::ports::TemplateCatalog,
    domain::{RelativePath, TemplateContent, TemplateEntry, TemplateGroup},
    error::{Context, ScaffoldError, ScaffoldResult},
};

/// A base catalog with some entries' content replaced from disk.
pub struct OverlayCatalog {
    base: Box<dyn TemplateCatalog>,
    overrides: BTreeMap<(TemplateGroup, RelativePath), TemplateContent>,
}

impl OverlayCatalog {
    /// Read every override under `dir`. A missing or unreadable directory is
    /// a configuration error; stray files are not.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn load(base: Box<dyn TemplateCatalog>, dir: &Path) -> ScaffoldResult<Self> {
        if !dir.is_dir() {
            return Err(ScaffoldError::Configuration {
                message: format!("template override directory not found: {}", dir.display()),
            });
        }

        let mut overrides = BTreeMap::new();
        for walk_entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let walk_entry = walk_entry.context("walking template override directory")?;
            if !walk_entry.file_type().is_file() {
                continue;
            }

            let abs_path = walk_entry.path();
            let Some((group, path)) = split_key(abs_path.strip_prefix(dir).unwrap_or(abs_path))
            else {
                warn!(file = %abs_path.display(), "Override is not under a known group, skipping");
                continue;
            };

            if !base.entries(group)?.iter().any(|e| e.path == path) {
                warn!(
                    group = %group,
                    path = %path,
                    "No built-in template with this key, skipping override"
                );
                continue;
            }

            let body = fs::read_to_string(abs_path)
                .context(format!("reading template override {}", abs_path.display()))?;
            debug!(group = %group, path = %path, "Template overridden");
            overrides.insert((group, path), TemplateContent::detect(body));
        }

        info!(count = overrides.len(), "Template overrides loaded");
        Ok(Self { base, overrides })
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl TemplateCatalog for OverlayCatalog {
    fn entries(&self, group: TemplateGroup) -> ScaffoldResult<Vec<TemplateEntry>> {
        let mut entries = self.base.entries(group)?;
        for entry in &mut entries {
            if let Some(content) = self.overrides.get(&(group, entry.path.clone())) {
                entry.content = content.clone();
            }
        }
        Ok(entries)
    }
}

/// `service-extras/user-service/app/x.py` -> (ServiceExtras(user-service), `app/x.py`)
fn split_key(relative: &Path) -> Option<(TemplateGroup, RelativePath)> {
    let parts: Vec<&str> = relative
        .components()
        .map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Option<_>>()?;

    let group_len = if parts.first() == Some(&"service-extras") { 2 } else { 1 };
    if parts.len() <= group_len {
        return None;
    }

    let group = TemplateGroup::from_slug(&parts[..group_len].join("/"))?;
    let path = RelativePath::try_new(parts[group_len..].join("/")).ok()?;
    Some((group, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinCatalog;
    use prism_scaffold_core::domain::{ProjectName, RenderContext};
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, body: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn override_replaces_registered_content() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "root/README.md", "# {{PROJECT_NAME}} (ours)\n");

        let catalog = OverlayCatalog::load(Box::new(BuiltinCatalog::new()), tmp.path()).unwrap();
        assert_eq!(catalog.len(), 1);

        let readme = catalog
            .content_for(TemplateGroup::Root, &RelativePath::new("README.md"))
            .unwrap()
            .render(&RenderContext::new(&ProjectName::parse("acme").unwrap()));
        assert_eq!(readme, "# acme (ours)\n");
    }

    #[test]
    fn service_extras_keys_are_split_correctly() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "service-extras/user-service/app/domain/entities/user.py",
            "class UserEntity: pass\n",
        );

        let catalog = OverlayCatalog::load(Box::new(BuiltinCatalog::new()), tmp.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn unregistered_keys_and_groups_are_skipped() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "root/EXTRA.md", "extra");
        write(tmp.path(), "widgets/thing.txt", "thing");
        write(tmp.path(), "loose.txt", "loose");

        let catalog = OverlayCatalog::load(Box::new(BuiltinCatalog::new()), tmp.path()).unwrap();
        assert!(catalog.is_empty());
        let root = catalog.entries(TemplateGroup::Root).unwrap();
        assert!(root.iter().all(|e| e.path.as_str() != "EXTRA.md"));
    }

    #[test]
    fn missing_directory_is_a_configuration_error() {
        let tmp = TempDir::new().unwrap();
        let err = OverlayCatalog::load(Box::new(BuiltinCatalog::new()), &tmp.path().join("nope"))
            .err()
            .unwrap();
        assert!(matches!(err, ScaffoldError::Configuration { .. }));
    }
}
