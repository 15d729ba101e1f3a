//! Template domain model and rendering.
//!
//! Templates are opaque payloads. The domain only cares about *where* a
//! template lives (its [`TemplateGroup`] and relative path), whether it needs
//! parameter substitution, and how to bind it to parameters so the engine can
//! produce the final text.
//!
//! ```text
//! TemplateCatalog (port)
//!   └── entries(group) -> Vec<TemplateEntry>
//!          ├── path         (relative to the group's mount point)
//!          ├── content      Literal | Parameterized
//!          └── permissions
//!
//! ContentProducer = TemplateContent + RenderContext
//!   └── produce() -> String   (pure, deterministic)
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::{
    entities::common::{Permissions, RelativePath},
    value_objects::{ProjectName, ServiceDefinition, ServiceName},
};

// ============================================================================
// Groups
// ============================================================================

/// Logical subsystem a template belongs to.
///
/// Each group is enumerable on its own, so the planner can ask for "all files
/// of group X" without knowing what is inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateGroup {
    /// Top-level files (README, compose files, Makefile).
    Root,
    /// Shared Python packages under `packages/`.
    Packages,
    /// Files every service gets, rendered once per service.
    Service,
    /// Files only one service gets.
    ServiceExtras(ServiceName),
    /// The web application under `frontend/web-app/`.
    Frontend,
    /// Kubernetes, Terraform, and monitoring manifests.
    Infrastructure,
    /// Developer scripts and lint/test configuration.
    Tools,
    /// Documentation stubs.
    Docs,
    /// Cross-service test suites and fixtures.
    Tests,
    /// GitHub workflows and repository templates.
    Ci,
}

/// Where a group's relative paths are anchored inside the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    ProjectRoot,
    Directory(&'static str),
    /// `services/<service-name>/`
    PerService,
}

impl TemplateGroup {
    /// Groups that are planned exactly once per project.
    pub const PROJECT_WIDE: [TemplateGroup; 8] = [
        TemplateGroup::Root,
        TemplateGroup::Packages,
        TemplateGroup::Frontend,
        TemplateGroup::Infrastructure,
        TemplateGroup::Tools,
        TemplateGroup::Docs,
        TemplateGroup::Tests,
        TemplateGroup::Ci,
    ];

    pub fn mount(&self) -> Mount {
        match self {
            Self::Root => Mount::ProjectRoot,
            Self::Packages => Mount::Directory("packages"),
            Self::Service | Self::ServiceExtras(_) => Mount::PerService,
            Self::Frontend => Mount::Directory("frontend/web-app"),
            Self::Infrastructure => Mount::Directory("infrastructure"),
            Self::Tools => Mount::Directory("tools"),
            Self::Docs => Mount::Directory("docs"),
            Self::Tests => Mount::Directory("tests"),
            Self::Ci => Mount::Directory(".github"),
        }
    }

    /// Directory-style identifier, e.g. `service-extras/user-service`.
    pub fn slug(&self) -> String {
        match self {
            Self::Root => "root".into(),
            Self::Packages => "packages".into(),
            Self::Service => "service".into(),
            Self::ServiceExtras(service) => format!("service-extras/{service}"),
            Self::Frontend => "frontend".into(),
            Self::Infrastructure => "infrastructure".into(),
            Self::Tools => "tools".into(),
            Self::Docs => "docs".into(),
            Self::Tests => "tests".into(),
            Self::Ci => "ci".into(),
        }
    }

    /// Inverse of [`Self::slug`]. `None` for unknown groups or services.
    pub fn from_slug(slug: &str) -> Option<Self> {
        if let Some(service) = slug.strip_prefix("service-extras/") {
            return ServiceName::parse(service).ok().map(Self::ServiceExtras);
        }
        match slug {
            "root" => Some(Self::Root),
            "packages" => Some(Self::Packages),
            "service" => Some(Self::Service),
            "frontend" => Some(Self::Frontend),
            "infrastructure" => Some(Self::Infrastructure),
            "tools" => Some(Self::Tools),
            "docs" => Some(Self::Docs),
            "tests" => Some(Self::Tests),
            "ci" => Some(Self::Ci),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

// ============================================================================
// Content
// ============================================================================

/// Source of template content: either compile-time or runtime.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Compile-time string literal (e.g. `include_str!("README.md")`)
    Static(&'static str),

    /// Runtime-owned string (override files read from disk)
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    /// Get string slice regardless of storage type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }

    /// Check if content contains placeholder syntax (quick heuristic).
    pub fn contains_placeholder(&self) -> bool {
        self.as_str().contains("{{") && self.as_str().contains("}}")
    }
}

/// What gets written into a file.
#[derive(Debug, Clone)]
pub enum TemplateContent {
    /// Content used exactly as provided.
    Literal(TemplateSource),

    /// Content with `{{VARIABLE}}` placeholders to be substituted.
    Parameterized(TemplateSource),
}

impl TemplateContent {
    /// Pick `Parameterized` when the source carries placeholders.
    pub fn detect(source: impl Into<TemplateSource>) -> Self {
        let source = source.into();
        if source.contains_placeholder() {
            Self::Parameterized(source)
        } else {
            Self::Literal(source)
        }
    }

    pub fn source(&self) -> &TemplateSource {
        match self {
            Self::Literal(s) | Self::Parameterized(s) => s,
        }
    }

    pub fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Literal(source) => source.as_str().to_string(),
            Self::Parameterized(source) => ctx.render(source.as_str()),
        }
    }
}

/// One registered file of a catalog group.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// Path relative to the group's mount point.
    pub path: RelativePath,
    pub content: TemplateContent,
    pub permissions: Permissions,
}

impl TemplateEntry {
    pub fn new(path: impl Into<RelativePath>, content: TemplateContent) -> Self {
        Self {
            path: path.into(),
            content,
            permissions: Permissions::read_write(),
        }
    }

    /// Mark this file as executable (shell scripts).
    pub fn executable(mut self) -> Self {
        self.permissions = Permissions::executable();
        self
    }
}

/// A template bound to the parameters it will be rendered with.
///
/// Pure: no I/O, same output for the same content and context.
#[derive(Debug, Clone)]
pub struct ContentProducer {
    content: TemplateContent,
    context: Arc<RenderContext>,
}

impl ContentProducer {
    pub fn new(content: TemplateContent, context: Arc<RenderContext>) -> Self {
        Self { content, context }
    }

    /// Producer for fixed text, independent of any parameters.
    pub fn literal(text: impl Into<TemplateSource>) -> Self {
        Self {
            content: TemplateContent::Literal(text.into()),
            context: Arc::new(RenderContext::empty()),
        }
    }

    pub fn produce(&self) -> String {
        self.content.render(&self.context)
    }
}

// ============================================================================
// Render context
// ============================================================================

/// Parameters for template rendering.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `PROJECT_NAME` | `my-registry` |
/// | `PROJECT_TITLE` | `My Registry` |
/// | `PROJECT_SNAKE` | `my_registry` |
/// | `SERVICE_NAME` | `user-service` |
/// | `SERVICE_TITLE` | `User Service` |
/// | `SERVICE_SNAKE` | `user_service` |
/// | `SERVICE_PASCAL` | `UserService` |
/// | `SERVICE_REQUIREMENTS` | extra pip requirements |
///
/// Service variables exist only in contexts built with [`Self::with_service`].
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    // BTreeMap keeps substitution order stable between runs.
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// Context with no variables; rendering returns the input unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Context carrying the project-level variables.
    pub fn new(project: &ProjectName) -> Self {
        let name = project.as_str();
        Self::empty()
            .with_variable("PROJECT_NAME", name)
            .with_variable("PROJECT_TITLE", to_title_case(name))
            .with_variable("PROJECT_SNAKE", to_snake_case(name))
    }

    /// Derive a per-service context from a project context.
    pub fn with_service(&self, service: &ServiceDefinition) -> Self {
        let name = service.name.as_str();
        self.clone()
            .with_variable("SERVICE_NAME", name)
            .with_variable("SERVICE_TITLE", to_title_case(name))
            .with_variable("SERVICE_SNAKE", to_snake_case(name))
            .with_variable("SERVICE_PASCAL", to_pascal_case(name))
            .with_variable("SERVICE_REQUIREMENTS", service.requirements)
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// One left-to-right pass over `template`: substituted values are copied
    /// as-is and never scanned for placeholders themselves.
    ///
    /// - `{{UNKNOWN}}` stays as literal `{{UNKNOWN}}`
    /// - `${{ github.actor }}` is untouched (spaces make it a different key)
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let Some(close) = after.find("}}") else {
                rest = &rest[open..];
                break;
            };
            match self.variables.get(&after[..close]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[close + 2..];
                }
                None => {
                    out.push_str("{{");
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

/// `user-service` → `User Service`
pub fn to_title_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `user-service` → `user_service`
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// `User Service` → `user-service`
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// `user-service` → `UserService`
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Split a string into lowercase words.
///
/// 1. **Explicit separators:** `_`, `-`, whitespace
/// 2. **camelCase:** `aB` splits between `a` and `B`
/// 3. **Acronyms:** `HTTPServer` splits between `P` and `S`
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::find_service;

    #[test]
    fn title_case_from_hyphenated() {
        assert_eq!(to_title_case("user-service"), "User Service");
        assert_eq!(to_title_case("api-gateway"), "Api Gateway");
        assert_eq!(to_title_case("dmrv-service"), "Dmrv Service");
    }

    #[test]
    fn other_case_forms() {
        assert_eq!(to_snake_case("user-service"), "user_service");
        assert_eq!(to_pascal_case("user-service"), "UserService");
        assert_eq!(to_kebab_case("User Service"), "user-service");
        assert_eq!(to_snake_case("HTTPRequest"), "http_request");
    }

    #[test]
    fn service_context_variables() {
        let project = ProjectName::parse("my-registry").unwrap();
        let service = find_service("user-service").unwrap();
        let ctx = RenderContext::new(&project).with_service(service);

        assert_eq!(ctx.get("PROJECT_NAME"), Some("my-registry"));
        assert_eq!(ctx.get("PROJECT_TITLE"), Some("My Registry"));
        assert_eq!(ctx.get("SERVICE_NAME"), Some("user-service"));
        assert_eq!(ctx.get("SERVICE_TITLE"), Some("User Service"));
        assert_eq!(ctx.get("SERVICE_PASCAL"), Some("UserService"));
        assert!(ctx.get("SERVICE_REQUIREMENTS").unwrap().contains("bcrypt"));
    }

    #[test]
    fn render_leaves_foreign_placeholders_alone() {
        let ctx = RenderContext::new(&ProjectName::default());
        let out = ctx.render("name: {{PROJECT_NAME}}\nuser: ${{ github.actor }}\n{{NOPE}}");
        assert_eq!(
            out,
            "name: prism-carbon-registry\nuser: ${{ github.actor }}\n{{NOPE}}"
        );
    }

    #[test]
    fn substituted_values_are_not_expanded_again() {
        let project = ProjectName::parse("acme{{PROJECT_SNAKE}}").unwrap();
        let ctx = RenderContext::new(&project);
        assert_eq!(
            ctx.render("cd {{PROJECT_NAME}}"),
            "cd acme{{PROJECT_SNAKE}}"
        );
    }

    #[test]
    fn render_handles_unclosed_and_nested_braces() {
        let ctx = RenderContext::new(&ProjectName::default());
        assert_eq!(ctx.render("a {{PROJECT_NAME"), "a {{PROJECT_NAME");
        assert_eq!(
            ctx.render("{{{{PROJECT_NAME}}}}"),
            "{{prism-carbon-registry}}"
        );
        assert_eq!(ctx.render("x}}y{{"), "x}}y{{");
    }

    #[test]
    fn literal_content_is_never_rendered() {
        let ctx = RenderContext::new(&ProjectName::default());
        let content = TemplateContent::Literal("{{PROJECT_NAME}}".into());
        assert_eq!(content.render(&ctx), "{{PROJECT_NAME}}");
    }

    #[test]
    fn detect_picks_variant() {
        assert!(matches!(
            TemplateContent::detect("hello {{PROJECT_NAME}}"),
            TemplateContent::Parameterized(_)
        ));
        assert!(matches!(
            TemplateContent::detect("plain"),
            TemplateContent::Literal(_)
        ));
    }

    #[test]
    fn producer_is_deterministic() {
        let ctx = Arc::new(RenderContext::new(&ProjectName::default()));
        let producer =
            ContentProducer::new(TemplateContent::detect("# {{PROJECT_TITLE}}\n"), ctx);
        assert_eq!(producer.produce(), "# Prism Carbon Registry\n");
        assert_eq!(producer.produce(), producer.produce());
    }

    #[test]
    fn group_mounts() {
        assert_eq!(TemplateGroup::Root.mount(), Mount::ProjectRoot);
        assert_eq!(TemplateGroup::Ci.mount(), Mount::Directory(".github"));
        let extras = TemplateGroup::ServiceExtras(ServiceName::parse("api-gateway").unwrap());
        assert_eq!(extras.mount(), Mount::PerService);
        assert_eq!(extras.slug(), "service-extras/api-gateway");
        assert_eq!(TemplateGroup::from_slug(&extras.slug()), Some(extras));
        assert_eq!(TemplateGroup::from_slug("ci"), Some(TemplateGroup::Ci));
        assert_eq!(TemplateGroup::from_slug("service-extras/billing"), None);
        assert_eq!(TemplateGroup::from_slug("widgets"), None);
    }
}
