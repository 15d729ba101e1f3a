//! The fixed directory layout of a generated project.
//!
//! Enumerated once, top to bottom, and identical for every run. Not derived
//! from the files that will be written: several directories are created
//! empty so the team has a place to put code later.

use crate::domain::entities::common::RelativePath;

/// Every directory of the generated tree, relative to the project root.
pub const DIRECTORIES: &[&str] = &[
    "packages/common/database",
    "packages/common/models",
    "packages/common/auth",
    "packages/common/messaging",
    "packages/common/config",
    "packages/common/exceptions",
    "packages/common/logging",
    "packages/common/utils",
    "packages/blockchain/hedera",
    "packages/blockchain/contracts",
    "packages/blockchain/interfaces",
    "services/api-gateway/app/middleware",
    "services/api-gateway/app/routing",
    "services/api-gateway/app/auth",
    "services/api-gateway/config",
    "services/user-service/app/domain/entities",
    "services/user-service/app/domain/services",
    "services/user-service/app/domain/repositories",
    "services/user-service/app/domain/exceptions",
    "services/user-service/app/infrastructure/database/repositories",
    "services/user-service/app/infrastructure/database/migrations",
    "services/user-service/app/infrastructure/external",
    "services/user-service/app/infrastructure/messaging",
    "services/user-service/app/application/commands",
    "services/user-service/app/application/queries",
    "services/user-service/app/application/dto",
    "services/user-service/app/application/events",
    "services/user-service/app/presentation/api/v1/routes",
    "services/user-service/app/presentation/api/v1/schemas",
    "services/user-service/app/presentation/api/middleware",
    "services/user-service/app/presentation/events",
    "services/user-service/tests/unit",
    "services/user-service/tests/integration",
    "services/user-service/alembic",
    "services/project-service/app/domain/entities",
    "services/project-service/app/domain/services",
    "services/project-service/app/domain/repositories",
    "services/project-service/app/infrastructure/database",
    "services/project-service/app/infrastructure/file_storage",
    "services/project-service/app/infrastructure/ai",
    "services/project-service/app/application/commands",
    "services/project-service/app/application/queries",
    "services/project-service/app/application/dto",
    "services/project-service/app/presentation/api/v1/routes",
    "services/project-service/app/presentation/api/v1/schemas",
    "services/project-service/tests",
    "services/validation-service/app/domain/entities",
    "services/validation-service/app/domain/services",
    "services/validation-service/app/domain/repositories",
    "services/validation-service/app/infrastructure/ai",
    "services/validation-service/app/infrastructure/blockchain",
    "services/validation-service/app/application",
    "services/validation-service/app/presentation",
    "services/validation-service/tests",
    "services/registry-service/app/domain/entities",
    "services/registry-service/app/domain/services",
    "services/registry-service/app/domain/repositories",
    "services/registry-service/app/infrastructure/blockchain",
    "services/registry-service/app/infrastructure/ipfs",
    "services/registry-service/app/application",
    "services/registry-service/app/presentation",
    "services/registry-service/tests",
    "services/exchange-service/app/domain/entities",
    "services/exchange-service/app/domain/services",
    "services/exchange-service/app/domain/repositories",
    "services/exchange-service/app/infrastructure/matching",
    "services/exchange-service/app/infrastructure/websockets",
    "services/exchange-service/app/application",
    "services/exchange-service/app/presentation",
    "services/exchange-service/tests",
    "services/dmrv-service/app/domain/entities",
    "services/dmrv-service/app/domain/services",
    "services/dmrv-service/app/domain/repositories",
    "services/dmrv-service/app/infrastructure/satellite",
    "services/dmrv-service/app/infrastructure/iot",
    "services/dmrv-service/app/infrastructure/gis",
    "services/dmrv-service/app/infrastructure/ml",
    "services/dmrv-service/app/application",
    "services/dmrv-service/app/presentation",
    "services/dmrv-service/tests",
    "services/governance-service/app/domain/entities",
    "services/governance-service/app/domain/services",
    "services/governance-service/app/domain/repositories",
    "services/governance-service/app/infrastructure",
    "services/governance-service/app/application",
    "services/governance-service/app/presentation",
    "services/governance-service/tests",
    "services/notification-service/app/domain",
    "services/notification-service/app/infrastructure/email",
    "services/notification-service/app/infrastructure/sms",
    "services/notification-service/app/infrastructure/push",
    "services/notification-service/app/application",
    "services/notification-service/app/presentation",
    "services/notification-service/tests",
    "services/file-service/app/domain/entities",
    "services/file-service/app/domain/services",
    "services/file-service/app/domain/repositories",
    "services/file-service/app/infrastructure/storage",
    "services/file-service/app/infrastructure/processing",
    "services/file-service/app/infrastructure/security",
    "services/file-service/app/application",
    "services/file-service/app/presentation",
    "services/file-service/tests",
    "frontend/web-app/public",
    "frontend/web-app/src/components/common",
    "frontend/web-app/src/components/forms",
    "frontend/web-app/src/components/charts",
    "frontend/web-app/src/components/tables",
    "frontend/web-app/src/pages/public",
    "frontend/web-app/src/pages/dashboard",
    "frontend/web-app/src/pages/projects",
    "frontend/web-app/src/pages/validation",
    "frontend/web-app/src/pages/registry",
    "frontend/web-app/src/pages/exchange",
    "frontend/web-app/src/pages/admin",
    "frontend/web-app/src/services/api",
    "frontend/web-app/src/services/auth",
    "frontend/web-app/src/services/websockets",
    "frontend/web-app/src/hooks",
    "frontend/web-app/src/context",
    "frontend/web-app/src/utils",
    "frontend/web-app/src/types",
    "frontend/web-app/src/constants",
    "frontend/web-app/src/assets",
    "frontend/web-app/tests",
    "frontend/web-app/build",
    "frontend/mobile-app/android",
    "frontend/mobile-app/ios",
    "frontend/mobile-app/src",
    "frontend/mobile-app/tests",
    "frontend/admin-panel/src",
    "frontend/admin-panel/tests",
    "infrastructure/kubernetes/base",
    "infrastructure/kubernetes/overlays/development",
    "infrastructure/kubernetes/overlays/staging",
    "infrastructure/kubernetes/overlays/production",
    "infrastructure/kubernetes/charts",
    "infrastructure/terraform/modules",
    "infrastructure/terraform/environments",
    "infrastructure/docker/base",
    "infrastructure/docker/production",
    "infrastructure/monitoring/prometheus",
    "infrastructure/monitoring/grafana",
    "infrastructure/monitoring/alertmanager",
    "tools/scripts",
    "tools/generators",
    "tools/linting",
    "tools/testing",
    "docs/api",
    "docs/architecture",
    "docs/deployment",
    "docs/user-guides",
    "docs/development",
    "tests/integration",
    "tests/e2e",
    "tests/performance",
    "tests/fixtures",
    ".github/workflows",
];

/// The directory half of a scaffold plan.
pub fn plan_directories() -> impl Iterator<Item = RelativePath> {
    DIRECTORIES.iter().map(|dir| RelativePath::new(*dir))
}
