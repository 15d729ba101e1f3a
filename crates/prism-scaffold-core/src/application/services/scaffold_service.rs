//! Scaffold Service - the file-materialization engine.
//!
//! Turns a validated [`ScaffoldPlan`] into filesystem state:
//! 1. Create (or confirm) the project root - the only fatal step
//! 2. Create every planned directory
//! 3. Render and write every planned file
//! 4. Report counts and failures
//!
//! Per-path failures are recorded and never abort the run. Nothing is
//! retried and nothing is rolled back.

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        DomainValidator as validator, FailureKind, Permissions, PlannedFile, RelativePath,
        ScaffoldPlan, WriteResult,
    },
    error::{ScaffoldError, ScaffoldResult},
};

/// Main materialization service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    workers: usize,
}

impl ScaffoldService {
    /// Create a sequential engine writing through `filesystem`.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            workers: 1,
        }
    }

    /// Write files on a bounded pool of `workers` threads (1 = sequential).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Materialize `plan` under `output_dir/<project name>`.
    pub fn materialize(
        &self,
        plan: &ScaffoldPlan,
        output_dir: &Path,
    ) -> ScaffoldResult<WriteResult> {
        self.materialize_with_progress(plan, output_dir, |_| {})
    }

    /// Like [`Self::materialize`], calling `on_file` after each file attempt.
    #[instrument(
        skip_all,
        fields(project = %plan.root(), output_dir = %output_dir.display())
    )]
    pub fn materialize_with_progress<F>(
        &self,
        plan: &ScaffoldPlan,
        output_dir: &Path,
        on_file: F,
    ) -> ScaffoldResult<WriteResult>
    where
        F: Fn(&RelativePath) + Sync,
    {
        validator::validate_plan(plan)?;

        let base = output_dir.join(plan.root().as_str());
        self.create_root(&base)?;

        let mut result = WriteResult::default();
        let created = self.create_directories(&base, plan.directories(), &mut result);
        result.directories_created = created;
        info!(count = result.directories_created, "Directories created");

        let files: Vec<_> = plan.files().collect();
        let outcomes: Vec<(&RelativePath, ScaffoldResult<()>)> = match self.pool() {
            Some(pool) => pool.install(|| {
                files
                    .into_par_iter()
                    .map(|(path, file)| self.attempt(&base, path, file, &on_file))
                    .collect()
            }),
            None => files
                .into_iter()
                .map(|(path, file)| self.attempt(&base, path, file, &on_file))
                .collect(),
        };

        for (path, outcome) in outcomes {
            match outcome {
                Ok(()) => result.files_written += 1,
                Err(e) => {
                    warn!(path = %path, error = %e, "File write failed");
                    result.record_failure(path.clone(), FailureKind::File, failure_reason(&e));
                }
            }
        }

        let result = result.finish();
        info!(
            files = result.files_written,
            failures = result.failures.len(),
            "Materialization finished"
        );
        Ok(result)
    }

    /// Ensure every directory exists. Returns how many are now in place;
    /// the ones that could not be created are recorded in `result`.
    pub fn create_directories<'a>(
        &self,
        base: &Path,
        dirs: impl Iterator<Item = &'a RelativePath>,
        result: &mut WriteResult,
    ) -> usize {
        let mut created = 0;
        for dir in dirs {
            match self.filesystem.create_dir_all(&base.join(dir)) {
                Ok(()) => created += 1,
                Err(e) => {
                    warn!(path = %dir, error = %e, "Directory creation failed");
                    result.record_failure(dir.clone(), FailureKind::Directory, failure_reason(&e));
                }
            }
        }
        created
    }

    /// Write one file, creating its parent chain first and overwriting any
    /// existing content.
    pub fn write_file(
        &self,
        base: &Path,
        path: &RelativePath,
        content: &str,
        permissions: Permissions,
    ) -> ScaffoldResult<()> {
        let target = base.join(path);
        if let Some(parent) = target.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&target, content)?;
        if permissions.executable_flag() {
            self.filesystem.set_permissions(&target, true)?;
        }
        debug!(path = %path, bytes = content.len(), "File written");
        Ok(())
    }

    fn attempt<'a, F>(
        &self,
        base: &Path,
        path: &'a RelativePath,
        file: &PlannedFile,
        on_file: &F,
    ) -> (&'a RelativePath, ScaffoldResult<()>)
    where
        F: Fn(&RelativePath) + Sync,
    {
        let content = file.producer.produce();
        let outcome = self.write_file(base, path, &content, file.permissions);
        on_file(path);
        (path, outcome)
    }

    fn create_root(&self, base: &Path) -> ScaffoldResult<()> {
        if self.filesystem.exists(base) && !self.filesystem.is_dir(base) {
            return Err(ApplicationError::ProjectPathCollision {
                path: base.to_path_buf(),
            }
            .into());
        }

        self.filesystem.create_dir_all(base).map_err(|e| {
            ScaffoldError::from(ApplicationError::RootCreationFailed {
                path: base.to_path_buf(),
                reason: failure_reason(&e),
            })
        })
    }

    fn pool(&self) -> Option<rayon::ThreadPool> {
        if self.workers <= 1 {
            return None;
        }
        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("scaffold-writer-{i}"))
            .build()
        {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!(error = %e, "Could not start writer pool, writing sequentially");
                None
            }
        }
    }
}

/// The bare cause, without the error-layer prefixes.
fn failure_reason(err: &ScaffoldError) -> String {
    match err {
        ScaffoldError::Application(ApplicationError::FilesystemError { reason, .. }) => {
            reason.clone()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mockall::predicate::*;

    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{ContentProducer, ProjectName};

    fn small_plan() -> ScaffoldPlan {
        let mut plan = ScaffoldPlan::new(ProjectName::parse("demo").unwrap());
        plan.add_directory("docs".into());
        plan.add_file(
            "README.md".into(),
            ContentProducer::literal("# demo\n"),
            Permissions::default(),
        )
        .unwrap();
        plan
    }

    #[test]
    fn root_colliding_with_a_file_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(PathBuf::from("out/demo")))
            .return_const(true);
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let err = ScaffoldService::new(Box::new(fs))
            .materialize(&small_plan(), Path::new("out"))
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::ProjectPathCollision { .. })
        ));
    }

    #[test]
    fn root_creation_failure_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .with(eq(PathBuf::from("out/demo")))
            .returning(|p| {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            });
        fs.expect_write_file().never();

        let err = ScaffoldService::new(Box::new(fs))
            .materialize(&small_plan(), Path::new("out"))
            .unwrap_err();
        assert_eq!(
            err,
            ScaffoldError::Application(ApplicationError::RootCreationFailed {
                path: PathBuf::from("out/demo"),
                reason: "permission denied".into(),
            })
        );
    }

    #[test]
    fn failed_write_is_recorded_not_raised() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let result = ScaffoldService::new(Box::new(fs))
            .materialize(&small_plan(), Path::new("out"))
            .unwrap();
        assert_eq!(result.directories_created, 1);
        assert_eq!(result.files_written, 0);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].reason, "disk full");
        assert!(!result.is_complete());
    }

    #[test]
    fn executable_files_get_permissions() {
        let mut plan = ScaffoldPlan::new(ProjectName::parse("demo").unwrap());
        plan.add_file(
            "tools/scripts/setup.sh".into(),
            ContentProducer::literal("#!/bin/bash\n"),
            Permissions::executable(),
        )
        .unwrap();

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_set_permissions()
            .with(eq(PathBuf::from("out/demo/tools/scripts/setup.sh")), eq(true))
            .times(1)
            .returning(|_, _| Ok(()));

        let result = ScaffoldService::new(Box::new(fs))
            .materialize(&plan, Path::new("out"))
            .unwrap();
        assert!(result.is_complete());
    }

    #[test]
    fn empty_plan_is_rejected_before_io() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_create_dir_all().never();

        let plan = ScaffoldPlan::new(ProjectName::default());
        assert!(
            ScaffoldService::new(Box::new(fs))
                .materialize(&plan, Path::new("out"))
                .is_err()
        );
    }
}
