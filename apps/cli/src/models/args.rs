//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "xrkit")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect platform activation and stored xrkit profiles")]
pub struct Cli {
    /// Config file (any format the config crate reads); defaults to `xrkit.*` in
    /// the working directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub context: ContextArgs,

    /// Log level, overriding `log.level` from the config
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: AppCommands,
}

/// Execution context overrides, applied on top of config and environment.
#[derive(Debug, Default, clap::Args)]
pub struct ContextArgs {
    /// Runtime to evaluate against (`windows`, `android`, ...)
    #[arg(long, global = true)]
    pub runtime: Option<String>,

    /// Evaluate as the authoring tool
    #[arg(long, global = true)]
    pub authoring: bool,

    /// Build target selected in the authoring tool
    #[arg(long, global = true)]
    pub build_target: Option<String>,

    /// Device runtime detected at startup; repeatable
    #[arg(long = "detected", global = true)]
    pub detected: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// List known platforms and whether they are live in the context
    Platforms {},
    /// Evaluate a platform list the way a capability entry would
    Activate {
        /// Platform names
        #[arg(required = true)]
        platforms: Vec<String>,
    },
    /// Show services and controller mappings of a stored profile
    Inspect {
        /// Profile document; defaults to `profile.path` from the config
        profile: Option<PathBuf>,
    },
    /// Copy input actions from one controller mapping to another
    Sync {
        /// Index of the source mapping
        #[arg(long)]
        from: usize,
        /// Index of the mapping to update
        #[arg(long)]
        to: usize,
        /// Profile document; defaults to `profile.path` from the config
        profile: Option<PathBuf>,
    },
}
