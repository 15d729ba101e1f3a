//! Value objects: project names and the service registry.
//!
//! The generated platform is a fixed set of microservices. Each service is a
//! registry entry; adding a service means adding an entry here (and, if it
//! needs files of its own, an extras group in the catalog), never a new branch
//! in the planner.

use std::fmt;

use crate::domain::error::DomainError;

// ============================================================================
// ProjectName
// ============================================================================

/// Name of the project directory to generate.
///
/// Invariants: non-empty, no path separators, no leading `.`, no control
/// characters. The name becomes a single directory under the output root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Name used when the caller does not supply one.
    pub const DEFAULT: &'static str = "prism-carbon-registry";

    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let reject = |reason: &str| DomainError::InvalidProjectName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.trim().is_empty() {
            return Err(reject("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(reject("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(reject("name cannot contain path separators"));
        }
        if name.chars().any(char::is_control) {
            return Err(reject("name cannot contain control characters"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Services
// ============================================================================

/// Identifier of a registered service, e.g. `user-service`.
///
/// Only obtainable from the registry, so holding one means the service exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceName(&'static str);

impl ServiceName {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Look up a service by its hyphenated identifier.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        find_service(name)
            .map(|def| def.name)
            .ok_or_else(|| DomainError::UnknownService(name.to_string()))
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Static description of one generated microservice.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDefinition {
    pub name: ServiceName,
    /// Extra lines appended to the service's `requirements.txt`.
    pub requirements: &'static str,
}

impl ServiceDefinition {
    const fn new(name: &'static str, requirements: &'static str) -> Self {
        Self {
            name: ServiceName(name),
            requirements,
        }
    }
}

/// All services of the platform, in generation order.
pub const SERVICE_REGISTRY: &[ServiceDefinition] = &[
    ServiceDefinition::new("api-gateway", ""),
    ServiceDefinition::new("user-service", "bcrypt>=4.0.0\nemail-validator>=2.0.0\n"),
    ServiceDefinition::new(
        "project-service",
        "PyPDF2>=3.0.0\nPillow>=10.0.0\nopenai>=1.0.0\n",
    ),
    ServiceDefinition::new("validation-service", "scikit-learn>=1.3.0\nnumpy>=1.24.0\n"),
    ServiceDefinition::new("registry-service", "web3>=6.0.0\nipfshttpclient>=0.8.0\n"),
    ServiceDefinition::new("exchange-service", "websockets>=11.0.0\n"),
    ServiceDefinition::new("dmrv-service", "gdal>=3.7.0\nrasterio>=1.3.0\n"),
    ServiceDefinition::new("governance-service", ""),
    ServiceDefinition::new("notification-service", ""),
    ServiceDefinition::new("file-service", ""),
];

pub fn find_service(name: &str) -> Option<&'static ServiceDefinition> {
    SERVICE_REGISTRY.iter().find(|def| def.name.0 == name)
}

pub fn services() -> impl Iterator<Item = &'static ServiceDefinition> {
    SERVICE_REGISTRY.iter()
}
