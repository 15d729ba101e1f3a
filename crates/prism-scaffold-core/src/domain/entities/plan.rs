use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{
    entities::{
        common::{Permissions, RelativePath},
        template::ContentProducer,
    },
    error::DomainError,
    value_objects::ProjectName,
};

/// Complete description of one generation run.
///
/// Built fully in memory before any filesystem mutation. Directories and
/// files are independent, overlapping descriptions: a file may live in a
/// directory that is not listed, and the engine creates its parents lazily.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    root: ProjectName,
    directories: BTreeSet<RelativePath>,
    files: BTreeMap<RelativePath, PlannedFile>,
}

/// A file entry of the plan: what to write and with which permissions.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub producer: ContentProducer,
    pub permissions: Permissions,
}

impl ScaffoldPlan {
    pub fn new(root: ProjectName) -> Self {
        Self {
            root,
            directories: BTreeSet::new(),
            files: BTreeMap::new(),
        }
    }

    /// Add a directory. Listing the same directory twice is harmless.
    pub fn add_directory(&mut self, path: RelativePath) {
        self.directories.insert(path);
    }

    /// Add a file. Two producers for the same path is a planning defect.
    pub fn add_file(
        &mut self,
        path: RelativePath,
        producer: ContentProducer,
        permissions: Permissions,
    ) -> Result<(), DomainError> {
        if self.files.contains_key(&path) {
            return Err(DomainError::DuplicatePath {
                path: path.to_string(),
            });
        }
        self.files.insert(
            path,
            PlannedFile {
                producer,
                permissions,
            },
        );
        Ok(())
    }

    /// Check the plan is executable before touching the filesystem.
    ///
    /// Fails if the plan is empty or if any path is used both as a file and
    /// as a directory (including as an ancestor of another entry).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.directories.is_empty() && self.files.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        for path in self.files.keys() {
            if self.directories.contains(path) {
                return Err(DomainError::FileDirectoryConflict {
                    path: path.to_string(),
                });
            }
        }

        let all_paths = self.directories.iter().chain(self.files.keys());
        for path in all_paths {
            let mut ancestor = path.parent();
            while let Some(dir) = ancestor {
                if self.files.contains_key(&dir) {
                    return Err(DomainError::FileDirectoryConflict {
                        path: dir.to_string(),
                    });
                }
                ancestor = dir.parent();
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &ProjectName {
        &self.root
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.directories.iter()
    }

    pub fn files(&self) -> impl Iterator<Item = (&RelativePath, &PlannedFile)> {
        self.files.iter()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn contains_file(&self, path: &str) -> bool {
        RelativePath::try_new(path).is_ok_and(|p| self.files.contains_key(&p))
    }

    pub fn contains_directory(&self, path: &str) -> bool {
        RelativePath::try_new(path).is_ok_and(|p| self.directories.contains(&p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &'static str) -> ContentProducer {
        ContentProducer::literal(s)
    }

    #[test]
    fn empty_plan_is_invalid() {
        let plan = ScaffoldPlan::new(ProjectName::default());
        assert_eq!(plan.validate(), Err(DomainError::EmptyPlan));
    }

    #[test]
    fn duplicate_file_rejected_on_insert() {
        let mut plan = ScaffoldPlan::new(ProjectName::default());
        plan.add_file("README.md".into(), text("a"), Permissions::default())
            .unwrap();
        let err = plan
            .add_file("README.md".into(), text("b"), Permissions::default())
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicatePath { .. }));
    }

    #[test]
    fn duplicate_directory_is_collapsed() {
        let mut plan = ScaffoldPlan::new(ProjectName::default());
        plan.add_directory("docs".into());
        plan.add_directory("docs".into());
        assert_eq!(plan.directory_count(), 1);
    }

    #[test]
    fn file_in_unlisted_directory_is_valid() {
        let mut plan = ScaffoldPlan::new(ProjectName::default());
        plan.add_directory("docs".into());
        plan.add_file(
            "tools/linting/.flake8".into(),
            text("[flake8]"),
            Permissions::default(),
        )
        .unwrap();
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn file_shadowing_directory_is_rejected() {
        let mut plan = ScaffoldPlan::new(ProjectName::default());
        plan.add_directory("docs".into());
        plan.add_file("docs".into(), text("x"), Permissions::default())
            .unwrap();
        assert!(matches!(
            plan.validate(),
            Err(DomainError::FileDirectoryConflict { .. })
        ));
    }

    #[test]
    fn file_used_as_parent_is_rejected() {
        let mut plan = ScaffoldPlan::new(ProjectName::default());
        plan.add_file("Makefile".into(), text("all:"), Permissions::default())
            .unwrap();
        plan.add_file("Makefile/inner".into(), text("x"), Permissions::default())
            .unwrap();
        assert_eq!(
            plan.validate(),
            Err(DomainError::FileDirectoryConflict {
                path: "Makefile".into()
            })
        );
    }
}
