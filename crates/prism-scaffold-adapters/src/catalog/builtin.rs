//! Built-in template catalog.
//!
//! Every asset under `templates/<group>/` is embedded at compile time and
//! registered here under its path relative to the group's mount point. The
//! registry is closed: the planner can only ask for what is listed.

use prism_scaffold_core::{
    application::ports::TemplateCatalog,
    domain::{Permissions, RelativePath, TemplateContent, TemplateEntry, TemplateGroup},
    error::ScaffoldResult,
};

/// One embedded file.
#[derive(Debug, Clone, Copy)]
struct Asset {
    path: &'static str,
    body: &'static str,
    executable: bool,
}

impl Asset {
    const fn executable(self) -> Self {
        Self {
            executable: true,
            ..self
        }
    }

    fn to_entry(self) -> TemplateEntry {
        TemplateEntry {
            path: RelativePath::new(self.path),
            content: TemplateContent::detect(self.body),
            permissions: if self.executable {
                Permissions::executable()
            } else {
                Permissions::read_write()
            },
        }
    }
}

/// `asset!("group", "path")` embeds `templates/group/path`; the `=>` form
/// stores a dotfile under a name version control will not interpret.
macro_rules! asset {
    ($group:literal, $path:literal) => {
        asset!($group, $path => $path)
    };
    ($group:literal, $path:literal => $file:literal) => {
        Asset {
            path: $path,
            body: include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/templates/",
                $group,
                "/",
                $file
            )),
            executable: false,
        }
    };
}

const ROOT: &[Asset] = &[
    asset!("root", "Makefile"),
    asset!("root", "README.md"),
    asset!("root", "docker-compose.prod.yml"),
    asset!("root", "docker-compose.yml"),
    asset!("root", ".env.example" => "env.example"),
    asset!("root", ".gitignore" => "gitignore"),
    asset!("root", "requirements.txt"),
];

const PACKAGES: &[Asset] = &[
    asset!("packages", "blockchain/__init__.py"),
    asset!("packages", "blockchain/contracts/CarbonAssetToken.sol"),
    asset!("packages", "blockchain/hedera/__init__.py"),
    asset!("packages", "blockchain/hedera/client.py"),
    asset!("packages", "blockchain/hedera/contracts.py"),
    asset!("packages", "blockchain/hedera/utils.py"),
    asset!("packages", "blockchain/interfaces/__init__.py"),
    asset!("packages", "blockchain/interfaces/registry.py"),
    asset!("packages", "common/__init__.py"),
    asset!("packages", "common/auth/__init__.py"),
    asset!("packages", "common/auth/decorators.py"),
    asset!("packages", "common/auth/jwt_handler.py"),
    asset!("packages", "common/auth/middleware.py"),
    asset!("packages", "common/config/__init__.py"),
    asset!("packages", "common/config/environment.py"),
    asset!("packages", "common/config/settings.py"),
    asset!("packages", "common/database/__init__.py"),
    asset!("packages", "common/database/base.py"),
    asset!("packages", "common/database/session.py"),
    asset!("packages", "common/database/utils.py"),
    asset!("packages", "common/exceptions/__init__.py"),
    asset!("packages", "common/exceptions/base.py"),
    asset!("packages", "common/exceptions/business.py"),
    asset!("packages", "common/exceptions/handlers.py"),
    asset!("packages", "common/logging/__init__.py"),
    asset!("packages", "common/logging/formatters.py"),
    asset!("packages", "common/logging/middleware.py"),
    asset!("packages", "common/logging/setup.py"),
    asset!("packages", "common/messaging/__init__.py"),
    asset!("packages", "common/messaging/event_bus.py"),
    asset!("packages", "common/messaging/message_types.py"),
    asset!("packages", "common/messaging/publishers.py"),
    asset!("packages", "common/models/__init__.py"),
    asset!("packages", "common/models/base.py"),
    asset!("packages", "common/models/enums.py"),
    asset!("packages", "common/models/project.py"),
    asset!("packages", "common/models/user.py"),
    asset!("packages", "common/utils/__init__.py"),
    asset!("packages", "common/utils/helpers.py"),
    asset!("packages", "common/utils/serialization.py"),
    asset!("packages", "common/utils/validation.py"),
];

const SERVICE: &[Asset] = &[
    asset!("service", "Dockerfile"),
    asset!("service", "requirements.txt"),
    asset!("service", "app/__init__.py"),
    asset!("service", "app/main.py"),
    asset!("service", "tests/__init__.py"),
    asset!("service", "tests/conftest.py"),
    asset!("service", "tests/integration/__init__.py"),
    asset!("service", "tests/unit/__init__.py"),
];

const USER_SERVICE_EXTRAS: &[Asset] = &[
    asset!("service-extras/user-service", "app/domain/entities/user.py"),
    asset!("service-extras/user-service", "app/domain/services/user_service.py"),
    asset!("service-extras/user-service", "app/presentation/api/v1/routes/users.py"),
];

const PROJECT_SERVICE_EXTRAS: &[Asset] = &[
    asset!("service-extras/project-service", "app/domain/entities/project.py"),
    asset!("service-extras/project-service", "app/presentation/api/v1/routes/projects.py"),
];

const API_GATEWAY_EXTRAS: &[Asset] = &[
    asset!("service-extras/api-gateway", "app/middleware/auth.py"),
    asset!("service-extras/api-gateway", "app/routing/routes.py"),
    asset!("service-extras/api-gateway", "config/gateway.yml"),
];

/// Per-service extras, keyed by service name. Services not listed get none.
const SERVICE_EXTRAS: &[(&str, &[Asset])] = &[
    ("api-gateway", API_GATEWAY_EXTRAS),
    ("user-service", USER_SERVICE_EXTRAS),
    ("project-service", PROJECT_SERVICE_EXTRAS),
];

const FRONTEND: &[Asset] = &[
    asset!("frontend", "Dockerfile"),
    asset!("frontend", "package.json"),
    asset!("frontend", "public/index.html"),
    asset!("frontend", "src/App.tsx"),
    asset!("frontend", "src/components/common/Button.tsx"),
    asset!("frontend", "src/components/common/Modal.tsx"),
    asset!("frontend", "src/constants/index.ts"),
    asset!("frontend", "src/context/AuthContext.tsx"),
    asset!("frontend", "src/hooks/useAuth.ts"),
    asset!("frontend", "src/index.tsx"),
    asset!("frontend", "src/pages/dashboard/DashboardPage.tsx"),
    asset!("frontend", "src/pages/public/HomePage.tsx"),
    asset!("frontend", "src/services/api/client.ts"),
    asset!("frontend", "src/services/auth/authService.ts"),
    asset!("frontend", "src/types/index.ts"),
    asset!("frontend", "tests/setup.ts"),
];

const INFRASTRUCTURE: &[Asset] = &[
    asset!("infrastructure", "kubernetes/base/configmap.yaml"),
    asset!("infrastructure", "kubernetes/base/namespace.yaml"),
    asset!("infrastructure", "kubernetes/overlays/development/kustomization.yaml"),
    asset!("infrastructure", "monitoring/grafana/dashboard.json"),
    asset!("infrastructure", "monitoring/prometheus/prometheus.yml"),
    asset!("infrastructure", "terraform/main.tf"),
    asset!("infrastructure", "terraform/outputs.tf"),
    asset!("infrastructure", "terraform/variables.tf"),
];

const TOOLS: &[Asset] = &[
    asset!("tools", "linting/.flake8" => "linting/flake8"),
    asset!("tools", "linting/pyproject.toml"),
    asset!("tools", "scripts/build.sh").executable(),
    asset!("tools", "scripts/deploy.sh").executable(),
    asset!("tools", "scripts/migrate.sh").executable(),
    asset!("tools", "scripts/setup.sh").executable(),
    asset!("tools", "scripts/test.sh").executable(),
    asset!("tools", "testing/pytest.ini"),
];

const DOCS: &[Asset] = &[
    asset!("docs", "README.md"),
    asset!("docs", "api/openapi.yml"),
    asset!("docs", "architecture/overview.md"),
    asset!("docs", "architecture/services.md"),
    asset!("docs", "deployment/local.md"),
    asset!("docs", "deployment/production.md"),
    asset!("docs", "development/contributing.md"),
    asset!("docs", "development/getting-started.md"),
];

const TESTS: &[Asset] = &[
    asset!("tests", "e2e/test_project_creation.py"),
    asset!("tests", "fixtures/sample_data.json"),
    asset!("tests", "integration/test_user_flow.py"),
    asset!("tests", "performance/test_load.py"),
];

const CI: &[Asset] = &[
    asset!("ci", "PULL_REQUEST_TEMPLATE.md"),
    asset!("ci", "workflows/cd.yml"),
    asset!("ci", "workflows/ci.yml"),
    asset!("ci", "workflows/release.yml"),
    asset!("ci", "workflows/security.yml"),
];
/// Catalog of the templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    fn assets(group: TemplateGroup) -> &'static [Asset] {
        match group {
            TemplateGroup::Root => ROOT,
            TemplateGroup::Packages => PACKAGES,
            TemplateGroup::Service => SERVICE,
            TemplateGroup::ServiceExtras(service) => SERVICE_EXTRAS
                .iter()
                .find(|(name, _)| *name == service.as_str())
                .map(|&(_, assets)| assets)
                .unwrap_or(&[]),
            TemplateGroup::Frontend => FRONTEND,
            TemplateGroup::Infrastructure => INFRASTRUCTURE,
            TemplateGroup::Tools => TOOLS,
            TemplateGroup::Docs => DOCS,
            TemplateGroup::Tests => TESTS,
            TemplateGroup::Ci => CI,
        }
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn entries(&self, group: TemplateGroup) -> ScaffoldResult<Vec<TemplateEntry>> {
        Ok(Self::assets(group).iter().map(|a| a.to_entry()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_scaffold_core::domain::{
        DomainValidator, ProjectName, RenderContext, ServiceName, find_service, services,
    };

    fn all_groups() -> Vec<TemplateGroup> {
        let mut groups = TemplateGroup::PROJECT_WIDE.to_vec();
        groups.push(TemplateGroup::Service);
        groups.extend(services().map(|s| TemplateGroup::ServiceExtras(s.name)));
        groups
    }

    #[test]
    fn no_group_registers_a_path_twice() {
        let catalog = BuiltinCatalog::new();
        for group in all_groups() {
            let entries = catalog.entries(group).unwrap();
            DomainValidator::validate_group(group, &entries).unwrap();
        }
    }

    #[test]
    fn dotfiles_keep_their_names() {
        let catalog = BuiltinCatalog::new();
        let root = catalog.entries(TemplateGroup::Root).unwrap();
        assert!(root.iter().any(|e| e.path.as_str() == ".gitignore"));
        assert!(root.iter().any(|e| e.path.as_str() == ".env.example"));
        assert!(
            catalog
                .content_for(TemplateGroup::Tools, &RelativePath::new("linting/.flake8"))
                .is_ok()
        );
    }

    #[test]
    fn only_scripts_are_executable() {
        let catalog = BuiltinCatalog::new();
        for group in all_groups() {
            for entry in catalog.entries(group).unwrap() {
                let is_script = group == TemplateGroup::Tools
                    && entry.path.as_str().starts_with("scripts/")
                    && entry.path.as_str().ends_with(".sh");
                assert_eq!(entry.permissions.executable_flag(), is_script, "{}", entry.path);
            }
        }
    }

    #[test]
    fn extras_exist_only_for_mapped_services() {
        let catalog = BuiltinCatalog::new();
        let with_extras: Vec<_> = services()
            .filter(|s| {
                !catalog
                    .entries(TemplateGroup::ServiceExtras(s.name))
                    .unwrap()
                    .is_empty()
            })
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(with_extras, ["api-gateway", "user-service", "project-service"]);
    }

    #[test]
    fn every_extras_key_names_a_registered_service() {
        let catalog = BuiltinCatalog::new();
        for (name, assets) in SERVICE_EXTRAS {
            let service = find_service(name).unwrap();
            let entries = catalog
                .entries(TemplateGroup::ServiceExtras(service.name))
                .unwrap();
            assert_eq!(entries.len(), assets.len(), "{name}");
        }
    }

    #[test]
    fn service_main_renders_titles_and_raw_name() {
        let catalog = BuiltinCatalog::new();
        let service = find_service("user-service").unwrap();
        let ctx = RenderContext::new(&ProjectName::default()).with_service(service);
        let main = catalog
            .content_for(TemplateGroup::Service, &RelativePath::new("app/main.py"))
            .unwrap()
            .render(&ctx);

        assert!(main.contains(r#"title="User Service""#));
        assert!(main.contains(r#"{"message": "User Service is running"}"#));
        assert!(main.contains(r#"{"status": "healthy", "service": "user-service"}"#));
        assert!(!main.contains("{{"));
    }

    #[test]
    fn requirements_carry_service_extras() {
        let catalog = BuiltinCatalog::new();
        let requirements = catalog
            .content_for(TemplateGroup::Service, &RelativePath::new("requirements.txt"))
            .unwrap();
        let base = RenderContext::new(&ProjectName::default());

        let dmrv = requirements.render(&base.with_service(find_service("dmrv-service").unwrap()));
        assert!(dmrv.contains("rasterio>=1.3.0"));
        let files = requirements.render(&base.with_service(find_service("file-service").unwrap()));
        assert!(files.starts_with("fastapi"));
        assert!(!files.contains("rasterio"));
    }

    #[test]
    fn unknown_key_is_a_catalog_defect() {
        let err = BuiltinCatalog::new()
            .content_for(
                TemplateGroup::ServiceExtras(ServiceName::parse("file-service").unwrap()),
                &RelativePath::new("app/extra.py"),
            )
            .unwrap_err();
        assert!(err.is_catalog_defect());
    }

    #[test]
    fn workflow_expressions_survive_rendering() {
        let catalog = BuiltinCatalog::new();
        let ci = catalog
            .content_for(TemplateGroup::Ci, &RelativePath::new("workflows/ci.yml"))
            .unwrap()
            .render(&RenderContext::new(&ProjectName::default()));
        assert!(ci.contains("${{ matrix.service }}"));
    }
}
