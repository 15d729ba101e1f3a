//! Plan Service - builds the in-memory scaffold plan.
//!
//! Asks the catalog for every group, mounts each entry at its place in the
//! tree, binds it to the right parameters, and validates the result. Nothing
//! here touches the filesystem.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::ports::TemplateCatalog,
    domain::{
        ContentProducer, DomainValidator as validator, Mount, ProjectName, RelativePath,
        RenderContext, ScaffoldPlan, ServiceName, TemplateGroup, plan_directories, services,
    },
    error::ScaffoldResult,
};

/// Service that composes the catalog into a [`ScaffoldPlan`].
pub struct PlanService {
    catalog: Box<dyn TemplateCatalog>,
}

impl PlanService {
    pub fn new(catalog: Box<dyn TemplateCatalog>) -> Self {
        Self { catalog }
    }

    /// Build and validate the complete plan for one project.
    #[instrument(skip_all, fields(project = %project))]
    pub fn build(&self, project: &ProjectName) -> ScaffoldResult<ScaffoldPlan> {
        let mut plan = ScaffoldPlan::new(project.clone());

        for dir in plan_directories() {
            plan.add_directory(dir);
        }

        let project_ctx = Arc::new(RenderContext::new(project));
        for group in TemplateGroup::PROJECT_WIDE {
            self.mount_group(&mut plan, group, None, &project_ctx)?;
        }

        for service in services() {
            let ctx = Arc::new(project_ctx.with_service(service));
            self.mount_group(&mut plan, TemplateGroup::Service, Some(service.name), &ctx)?;
            self.mount_group(
                &mut plan,
                TemplateGroup::ServiceExtras(service.name),
                Some(service.name),
                &ctx,
            )?;
        }

        validator::validate_plan(&plan)?;
        debug!(
            directories = plan.directory_count(),
            files = plan.file_count(),
            "Plan built"
        );
        Ok(plan)
    }

    /// Render one catalog entry with the given parameters.
    pub fn content_for(
        &self,
        group: TemplateGroup,
        path: &RelativePath,
        ctx: &RenderContext,
    ) -> ScaffoldResult<String> {
        Ok(self.catalog.content_for(group, path)?.render(ctx))
    }

    fn mount_group(
        &self,
        plan: &mut ScaffoldPlan,
        group: TemplateGroup,
        service: Option<ServiceName>,
        ctx: &Arc<RenderContext>,
    ) -> ScaffoldResult<()> {
        let entries = self.catalog.entries(group)?;
        validator::validate_group(group, &entries)?;

        let base = match (group.mount(), service) {
            (Mount::ProjectRoot, _) => None,
            (Mount::Directory(dir), _) => Some(RelativePath::try_new(dir)?),
            (Mount::PerService, Some(service)) => {
                Some(RelativePath::try_new(format!("services/{service}"))?)
            }
            (Mount::PerService, None) => {
                return Err(crate::error::ScaffoldError::Internal {
                    message: format!("group '{group}' needs a service"),
                });
            }
        };

        for entry in entries {
            let path = match &base {
                Some(base) => base.join(entry.path.as_path())?,
                None => entry.path,
            };
            let producer = ContentProducer::new(entry.content, Arc::clone(ctx));
            plan.add_file(path, producer, entry.permissions)?;
        }

        Ok(())
    }
}
