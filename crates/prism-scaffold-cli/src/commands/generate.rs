//! The generate command: the only thing the binary does.
//!
//! Responsibility: turn the project name and config into a plan, hand it to
//! the engine, and report the outcome. No business logic lives here.

use std::path::Path;

use tracing::{info, instrument};

use prism_scaffold_adapters::{BuiltinCatalog, LocalFilesystem, OverlayCatalog};
use prism_scaffold_core::{
    application::{PlanService, ScaffoldService, TemplateCatalog},
    domain::{ProjectName, ScaffoldPlan, WriteResult},
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Generate the project `name` inside `output_dir`.
///
/// Sequence:
/// 1. Validate the project name
/// 2. Assemble the template catalog (built-in, optionally overlaid)
/// 3. Build and validate the plan (no I/O yet)
/// 4. Materialize it
/// 5. Print the summary and next steps
#[instrument(skip_all, fields(project = %name))]
pub fn execute(
    name: &str,
    output_dir: &Path,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let project = ProjectName::parse(name).map_err(|e| CliError::Core(e.into()))?;

    let catalog = load_catalog(config)?;
    let plan = PlanService::new(catalog).build(&project)?;

    output.header(&format!(
        "Creating PRISM Carbon Registry structure: {project}"
    ))?;

    let engine = ScaffoldService::new(Box::new(LocalFilesystem::new()))
        .with_workers(config.engine.workers);

    let spinner = output.spinner("Writing files...");
    let outcome = engine.materialize_with_progress(&plan, output_dir, |path| {
        spinner.set_message(path.to_string());
    });
    spinner.finish_and_clear();
    let result = outcome?;

    report(&plan, &result, output)?;
    info!(
        files = result.files_written,
        failures = result.failures.len(),
        "Scaffold finished"
    );

    if config.engine.strict && !result.is_complete() {
        return Err(CliError::PartialFailure {
            failed: result.failures.len(),
            total: plan.directory_count() + plan.file_count(),
        });
    }

    print_next_steps(&project, &output_dir.join(project.as_str()), output)?;
    Ok(())
}

fn load_catalog(config: &AppConfig) -> CliResult<Box<dyn TemplateCatalog>> {
    let builtin: Box<dyn TemplateCatalog> = Box::new(BuiltinCatalog::new());
    match &config.templates.override_dir {
        Some(dir) => {
            let overlay = OverlayCatalog::load(builtin, dir)?;
            info!(
                overrides = overlay.len(),
                dir = %dir.display(),
                "Template overrides loaded"
            );
            Ok(Box::new(overlay))
        }
        None => Ok(builtin),
    }
}

fn report(plan: &ScaffoldPlan, result: &WriteResult, output: &OutputManager) -> CliResult<()> {
    output.print(&format!("Created {} directories", result.directories_created))?;
    output.print(&format!(
        "Created {} of {} files",
        result.files_written,
        plan.file_count()
    ))?;

    let failed_dirs = result.failed_directories().count();
    if failed_dirs > 0 {
        output.warning(&format!(
            "{} could not be created",
            count_of(failed_dirs, "directory", "directories")
        ))?;
        for failure in result.failed_directories() {
            output.error(&format!("{failure}"))?;
        }
    }

    let failed_files = result.failed_files().count();
    if failed_files > 0 {
        output.warning(&format!(
            "{} could not be written",
            count_of(failed_files, "file", "files")
        ))?;
        for failure in result.failed_files() {
            output.error(&format!("{failure}"))?;
        }
    }

    output.print("")?;
    if result.is_complete() {
        output.success("PRISM Carbon Registry structure created successfully!")?;
    } else {
        output.warning("PRISM Carbon Registry structure created with errors")?;
    }
    Ok(())
}

/// `1 file`, `3 files`.
fn count_of(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn print_next_steps(
    project: &ProjectName,
    location: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    output.info(&format!("Project location: {}", location.display()))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {project}"))?;
    output.print("  docker-compose up -d")?;
    output.print("  ./tools/scripts/setup.sh")?;
    Ok(())
}
