//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "template-namer",
    bin_name = "template-namer",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Generate a new Slate UI standalone project from the template",
    long_about = "Copies the Slate UI project template two directories above the \
                  working directory into <PROJECT_PATH>/<PROJECT_NAME>, replacing \
                  the template's placeholder name in every path and file.",
    after_help = "EXAMPLES:\n\
        \x20 template-namer -n MyApp -p ~/Projects\n\
        \x20 template-namer --name=\"MyApp\" --path=\"/tmp/out\"\n\
        \x20 template-namer -n MyApp -p /tmp/out --dry-run",
    arg_required_else_help = true,
    args_override_self = true,
)]
pub struct Cli {
    /// Flags for logging and output.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub create: CreateArgs,
}

// ── create ────────────────────────────────────────────────────────────────────

/// What to create and where.
#[derive(Debug, clap::Args)]
pub struct CreateArgs {
    /// New project name; one pair of surrounding double quotes is stripped.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "PROJECT_NAME",
        required = true,
        allow_hyphen_values = true,
        help = "Name of the new project"
    )]
    pub name: String,

    /// Existing directory that receives the project folder.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "PROJECT_PATH",
        required = true,
        allow_hyphen_values = true,
        help = "Directory to create the project in (must exist)"
    )]
    pub path: String,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
