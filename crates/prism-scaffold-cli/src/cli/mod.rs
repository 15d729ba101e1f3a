//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and help
//! text. No business logic lives here.

use clap::Parser;

use prism_scaffold_core::domain::ProjectName;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "prism-scaffold",
    bin_name = "prism-scaffold",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} PRISM Carbon Registry project scaffolding",
    long_about = "Generates the complete PRISM Carbon Registry monorepo: ten \
                  Python microservices, shared packages, a React frontend, \
                  infrastructure, tooling, docs, tests and CI workflows.",
    after_help = "EXAMPLES:\n\
        \x20 prism-scaffold                 # creates ./prism-carbon-registry\n\
        \x20 prism-scaffold my-registry\n\
        \x20 prism-scaffold -v my-registry --config scaffold.toml",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Name of the project directory to create in the current directory.
    #[arg(
        value_name = "PROJECT_NAME",
        default_value = ProjectName::DEFAULT,
        help = "Project directory name"
    )]
    pub project_name: String,
}
